// src/mcp/mod.rs
// MCP (Model Context Protocol) style tools exposing detection and analysis as
// JSON-in/JSON-out calls.
use crate::errors::RoomScanError;
use crate::models::UploadedFile;
use crate::services::AnalysisService;
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

#[async_trait]
pub trait MCPTool: Send + Sync {
    async fn execute(&self, params: Value) -> Result<Value, RoomScanError>;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
}

/// Parameters shared by both tools. `file_size` overrides the decoded length,
/// so a caller can pre-check from metadata without sending the bytes.
#[derive(Debug, Deserialize)]
struct FileParams {
    file_name: String,
    #[serde(default)]
    data: Option<String>,
    #[serde(default)]
    file_size: Option<usize>,
}

fn upload_from_params(params: Value) -> Result<UploadedFile, RoomScanError> {
    let params: FileParams = serde_json::from_value(params)
        .map_err(|e| RoomScanError::Validation(format!("Invalid tool parameters: {}", e)))?;

    let data = match params.data {
        Some(encoded) => general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| RoomScanError::Validation(format!("Invalid base64 image data: {}", e)))?,
        None => Vec::new(),
    };

    let mut file = UploadedFile::new(params.file_name, data);
    if let Some(size) = params.file_size {
        file.size = size;
    }
    Ok(file)
}

pub struct DetectRoomTool {
    service: Arc<AnalysisService>,
}

impl DetectRoomTool {
    pub fn new(service: Arc<AnalysisService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl MCPTool for DetectRoomTool {
    async fn execute(&self, params: Value) -> Result<Value, RoomScanError> {
        let file = upload_from_params(params)?;
        let detection = self.service.detect_room(&file).await;
        serde_json::to_value(&detection).map_err(|e| RoomScanError::Serialization(e.to_string()))
    }

    fn name(&self) -> &str {
        "detect_room"
    }

    fn description(&self) -> &str {
        "Checks whether an uploaded image shows an interior room and guesses the room type"
    }
}

pub struct AnalyzeRoomTool {
    service: Arc<AnalysisService>,
}

impl AnalyzeRoomTool {
    pub fn new(service: Arc<AnalysisService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl MCPTool for AnalyzeRoomTool {
    async fn execute(&self, params: Value) -> Result<Value, RoomScanError> {
        let file = upload_from_params(params)?;
        let analysis = self.service.analyze(&file).await?;
        serde_json::to_value(&analysis).map_err(|e| RoomScanError::Serialization(e.to_string()))
    }

    fn name(&self) -> &str {
        "analyze_room"
    }

    fn description(&self) -> &str {
        "Runs the full room analysis: 3D model, furniture, colors and budget recommendations"
    }
}

pub fn default_tools(service: Arc<AnalysisService>) -> Vec<Arc<dyn MCPTool>> {
    vec![
        Arc::new(DetectRoomTool::new(service.clone())),
        Arc::new(AnalyzeRoomTool::new(service)),
    ]
}

pub fn find_tool<'a>(
    tools: &'a [Arc<dyn MCPTool>],
    name: &str,
) -> Result<&'a Arc<dyn MCPTool>, RoomScanError> {
    tools
        .iter()
        .find(|tool| tool.name() == name)
        .ok_or_else(|| RoomScanError::InvalidTool(name.to_string()))
}
