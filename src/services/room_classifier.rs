// src/services/room_classifier.rs
//! Filename/size/aspect-ratio heuristic that decides whether an upload is an
//! interior room photo. The "vision" pass is a second keyword scan; no pixels
//! are read.

use crate::models::{ImageFeatures, RoomDetection, RoomType};
use crate::services::random::RandomSource;
use log::debug;
use std::sync::Arc;

/// The classifier never admits below this, whatever the configuration says.
pub const MIN_ADMISSION_THRESHOLD: f64 = 0.75;

const ROOM_KEYWORDS: &[&str] = &[
    "room", "bedroom", "kitchen", "bathroom", "living", "dining", "office", "interior", "home",
    "house", "apartment", "decor", "furniture",
];

const NON_ROOM_KEYWORDS: &[&str] = &[
    "outdoor", "garden", "park", "street", "car", "person", "face", "food", "animal", "landscape",
    "nature", "sky", "beach", "mountain", "profile", "selfie", "portrait", "logo", "document",
    "text", "screenshot",
];

/// First match wins.
const ROOM_SUBTYPE_KEYWORDS: &[(&[&str], RoomType)] = &[
    (&["living", "sofa"], RoomType::LivingRoom),
    (&["kitchen", "cook"], RoomType::Kitchen),
    (&["bed", "sleep"], RoomType::Bedroom),
    (&["bath", "toilet"], RoomType::Bathroom),
    (&["office", "desk"], RoomType::Office),
    (&["dining", "table"], RoomType::DiningRoom),
];

const INTERIOR_KEYWORDS: &[&str] = &["room", "interior", "home"];
const DISQUALIFYING_KEYWORDS: &[&str] = &["selfie", "face", "outdoor", "car", "food", "text"];

/// Checked in order; the first group with a hit names the content.
const NON_ROOM_LABELS: &[(&[&str], &str)] = &[
    (&["outdoor", "garden", "park", "street"], "an outdoor scene"),
    (&["selfie", "portrait", "face", "person", "profile"], "a portrait or selfie"),
    (&["food"], "a food photo"),
    (&["car"], "a vehicle photo"),
    (&["document", "text", "screenshot"], "a document or screenshot"),
    (&["logo"], "a logo or graphic"),
    (&["landscape", "nature", "sky", "beach", "mountain"], "a landscape photo"),
    (&["animal"], "an animal photo"),
];
const UNRECOGNIZED_CONTENT_LABEL: &str = "not a room interior photo";

const REJECTION_PREAMBLE: [&str; 4] = [
    "No clear room structure detected",
    "Missing typical room elements (walls, floor, ceiling)",
    "Image may be outdoor, portrait, or object-focused",
    "Insufficient interior architectural features",
];

const ADMITTED_ACTIONS: [&str; 4] = [
    "Proceeding with 3D room analysis",
    "Generating furniture suggestions for the detected room",
    "Building a color palette for the space",
    "Preparing the 3D room model",
];

const REJECTED_ACTIONS: [&str; 5] = [
    "Please upload a clear photo of an interior room",
    "Make sure walls, floor, and furniture are visible",
    "Avoid outdoor scenes, portraits, and close-up objects",
    "Use good lighting so room features are easy to see",
    "Try a wider angle that captures more of the room",
];

const SMALL_FILE_BYTES: usize = 50_000;
const DETAILED_MIN_BYTES: usize = 100_000;
const DETAILED_MAX_BYTES: usize = 10_000_000;
const HIGH_RESOLUTION_BYTES: usize = 500_000;

const NON_ROOM_CAP: f64 = 0.3;
const SMALL_FILE_CAP: f64 = 0.4;

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

pub struct RoomClassifier {
    threshold: f64,
    random: Arc<dyn RandomSource>,
}

impl RoomClassifier {
    pub fn new(configured_threshold: f64, random: Arc<dyn RandomSource>) -> Self {
        Self {
            threshold: configured_threshold,
            random,
        }
    }

    pub fn effective_threshold(&self) -> f64 {
        self.threshold.max(MIN_ADMISSION_THRESHOLD)
    }

    pub fn classify(&self, features: &ImageFeatures) -> RoomDetection {
        let name = features.file_name.as_str();
        let size = features.file_size;
        let mut confidence = 0.0_f64;
        let mut evidence: Vec<String> = Vec::new();

        let has_room_keyword = contains_any(name, ROOM_KEYWORDS);
        let has_non_room_keyword = contains_any(name, NON_ROOM_KEYWORDS);

        if has_room_keyword && !has_non_room_keyword {
            confidence += 0.3;
            evidence.push("Filename suggests room content".to_string());
        }
        if has_non_room_keyword {
            confidence -= 0.5;
            evidence.push("Filename suggests non-room content".to_string());
        }

        if (DETAILED_MIN_BYTES..=DETAILED_MAX_BYTES).contains(&size) {
            confidence += 0.2;
            evidence.push("Image size suggests detailed indoor photo".to_string());
        } else if size < SMALL_FILE_BYTES {
            confidence -= 0.3;
            evidence.push("Image too small for room analysis".to_string());
        }

        if features.aspect_ratio > 0.5 && features.aspect_ratio < 3.0 {
            confidence += 0.2;
            evidence.push("Image dimensions suitable for room photos".to_string());
        } else {
            confidence -= 0.2;
            evidence.push("Unusual image dimensions for room photos".to_string());
        }

        let (vision_score, predicted_type) = self.simulated_vision(name, size, &mut evidence);
        confidence += vision_score;

        confidence = confidence.clamp(0.0, 1.0);
        if has_non_room_keyword {
            confidence = confidence.min(NON_ROOM_CAP);
        }
        if size < SMALL_FILE_BYTES {
            confidence = confidence.min(SMALL_FILE_CAP);
        }

        let is_room = confidence > self.effective_threshold();
        debug!(
            "Classified {:?}: confidence {:.3}, predicted {}, admitted {}",
            name, confidence, predicted_type, is_room
        );

        if is_room {
            RoomDetection {
                is_room,
                confidence,
                room_type: predicted_type,
                reasons: evidence,
                suggested_actions: ADMITTED_ACTIONS.iter().map(|s| s.to_string()).collect(),
            }
        } else {
            let reasons = REJECTION_PREAMBLE
                .iter()
                .map(|s| s.to_string())
                .chain(evidence)
                .collect();
            RoomDetection {
                is_room,
                confidence,
                room_type: RoomType::Unknown,
                reasons,
                suggested_actions: REJECTED_ACTIONS.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    /// Second keyword pass standing in for image recognition. Returns the
    /// score delta and the predicted room type.
    fn simulated_vision(
        &self,
        name: &str,
        size: usize,
        evidence: &mut Vec<String>,
    ) -> (f64, RoomType) {
        let mut score = 0.0;
        let mut predicted = RoomType::LivingRoom;

        if let Some((_, room_type)) = ROOM_SUBTYPE_KEYWORDS
            .iter()
            .find(|(keywords, _)| contains_any(name, keywords))
        {
            score += 0.4;
            predicted = *room_type;
        }

        if size > HIGH_RESOLUTION_BYTES {
            score += 0.1;
        }

        if contains_any(name, INTERIOR_KEYWORDS) {
            score += 0.2;
            evidence.push("Interior architectural elements detected".to_string());
            evidence.push("Room layout features identified".to_string());
        }

        if contains_any(name, DISQUALIFYING_KEYWORDS) {
            score -= 0.6;
        }

        score += (self.random.next_f64() - 0.5) * 0.1;

        (score, predicted)
    }
}

/// Names what a rejected upload most likely shows, from its filename.
pub fn describe_non_room_content(file_name: &str) -> &'static str {
    let name = file_name.to_lowercase();
    NON_ROOM_LABELS
        .iter()
        .find(|(keywords, _)| contains_any(&name, keywords))
        .map(|(_, label)| *label)
        .unwrap_or(UNRECOGNIZED_CONTENT_LABEL)
}

/// User-facing message for a rejected upload.
///
/// The percentage is truncated to one decimal so a rejected score never reads
/// as the admission floor itself.
pub fn rejection_message(detection: &RoomDetection, file_name: &str) -> String {
    if detection.confidence < NON_ROOM_CAP {
        format!(
            "This image appears to be {}. Please upload an interior room photo \
             (living room, bedroom, kitchen, etc.) for 3D analysis.",
            describe_non_room_content(file_name)
        )
    } else {
        let percent = (detection.confidence * 1000.0).floor() / 10.0;
        format!(
            "Room confidence too low ({percent:.1}%). Please upload a clearer interior room \
             photo with visible walls, floor, and furniture."
        )
    }
}
