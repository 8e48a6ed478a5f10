// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuggestionCount {
    pub furniture: usize,
    pub colors: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetRanges {
    pub low: PriceRange,
    pub medium: PriceRange,
    pub high: PriceRange,
}

/// Artificial wait applied before each stage returns, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedLatency {
    pub detection_ms: u64,
    pub analysis_ms: u64,
}

/// Tunables for the analysis pipeline. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AIConfiguration {
    /// Admission threshold. The classifier never admits below 0.75 regardless.
    pub room_detection_threshold: f64,
    pub suggestion_count: SuggestionCount,
    /// Advisory only: the service always builds the room model.
    #[serde(rename = "enable3D")]
    pub enable_3d: bool,
    pub budget_ranges: BudgetRanges,
    pub latency: SimulatedLatency,
}

impl Default for AIConfiguration {
    fn default() -> Self {
        Self {
            room_detection_threshold: 0.7,
            suggestion_count: SuggestionCount {
                furniture: 6,
                colors: 8,
            },
            enable_3d: true,
            budget_ranges: BudgetRanges {
                low: PriceRange { min: 0.0, max: 500.0 },
                medium: PriceRange {
                    min: 500.0,
                    max: 2000.0,
                },
                high: PriceRange {
                    min: 2000.0,
                    max: 10000.0,
                },
            },
            latency: SimulatedLatency {
                detection_ms: 1500,
                analysis_ms: 2000,
            },
        }
    }
}

#[cfg(test)]
impl AIConfiguration {
    /// Defaults with the simulated waits removed.
    pub fn without_latency() -> Self {
        Self {
            latency: SimulatedLatency {
                detection_ms: 0,
                analysis_ms: 0,
            },
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Seed for reproducible scoring; `None` draws from the thread generator.
    pub random_seed: Option<u64>,
    pub ai: AIConfiguration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, falling back to defaults
    /// for absent keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut ai = AIConfiguration::default();

        if let Some(v) = parse_var(&lookup, "ROOMSCAN_DETECTION_THRESHOLD")? {
            ai.room_detection_threshold = v;
        }
        if let Some(v) = parse_var(&lookup, "ROOMSCAN_FURNITURE_COUNT")? {
            ai.suggestion_count.furniture = v;
        }
        if let Some(v) = parse_var(&lookup, "ROOMSCAN_COLOR_COUNT")? {
            ai.suggestion_count.colors = v;
        }
        if let Some(v) = parse_var(&lookup, "ROOMSCAN_ENABLE_3D")? {
            ai.enable_3d = v;
        }
        if let Some(v) = parse_var(&lookup, "ROOMSCAN_LOW_BUDGET_MAX")? {
            ai.budget_ranges.low.max = v;
            ai.budget_ranges.medium.min = v;
        }
        if let Some(v) = parse_var(&lookup, "ROOMSCAN_MEDIUM_BUDGET_MAX")? {
            ai.budget_ranges.medium.max = v;
            ai.budget_ranges.high.min = v;
        }
        if let Some(v) = parse_var(&lookup, "ROOMSCAN_DETECTION_LATENCY_MS")? {
            ai.latency.detection_ms = v;
        }
        if let Some(v) = parse_var(&lookup, "ROOMSCAN_ANALYSIS_LATENCY_MS")? {
            ai.latency.analysis_ms = v;
        }

        if ai.budget_ranges.low.max > ai.budget_ranges.medium.max {
            anyhow::bail!(
                "low budget max ({}) exceeds medium budget max ({})",
                ai.budget_ranges.low.max,
                ai.budget_ranges.medium.max
            );
        }

        Ok(Self {
            bind_addr: lookup("ROOMSCAN_BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            random_seed: parse_var(&lookup, "ROOMSCAN_RANDOM_SEED")?,
            ai,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("invalid value for {key}: {raw:?}"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.random_seed, None);
        assert_eq!(config.ai, AIConfiguration::default());
        assert_eq!(config.ai.suggestion_count.furniture, 6);
        assert_eq!(config.ai.suggestion_count.colors, 8);
        assert_eq!(config.ai.budget_ranges.low.max, 500.0);
        assert_eq!(config.ai.budget_ranges.medium.max, 2000.0);
    }

    #[test]
    fn overrides_are_applied() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("ROOMSCAN_BIND_ADDR", "127.0.0.1:9000"),
            ("ROOMSCAN_DETECTION_THRESHOLD", "0.9"),
            ("ROOMSCAN_FURNITURE_COUNT", "3"),
            ("ROOMSCAN_ENABLE_3D", "false"),
            ("ROOMSCAN_LOW_BUDGET_MAX", "300"),
            ("ROOMSCAN_RANDOM_SEED", "42"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.random_seed, Some(42));
        assert_eq!(config.ai.room_detection_threshold, 0.9);
        assert_eq!(config.ai.suggestion_count.furniture, 3);
        assert!(!config.ai.enable_3d);
        assert_eq!(config.ai.budget_ranges.low.max, 300.0);
        assert_eq!(config.ai.budget_ranges.medium.min, 300.0);
    }

    #[test]
    fn malformed_value_names_the_key() {
        let err = ServerConfig::from_lookup(lookup_from(&[("ROOMSCAN_COLOR_COUNT", "many")]))
            .unwrap_err();
        assert!(err.to_string().contains("ROOMSCAN_COLOR_COUNT"));
    }

    #[test]
    fn inverted_budget_breakpoints_are_rejected() {
        let result = ServerConfig::from_lookup(lookup_from(&[("ROOMSCAN_LOW_BUDGET_MAX", "5000")]));
        assert!(result.is_err());
    }

    #[test]
    fn serializes_enable_3d_flag_name() {
        let value = serde_json::to_value(AIConfiguration::default()).unwrap();
        assert_eq!(value["enable3D"], true);
        assert_eq!(value["roomDetectionThreshold"], 0.7);
    }
}
