// src/errors.rs
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoomScanError {
    /// Upload was classified as something other than an interior room.
    /// The message is user-facing; callers should offer a re-upload, not retry.
    #[error("{0}")]
    RoomNotDetected(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid tool: {0}")]
    InvalidTool(String),
}

impl ResponseError for RoomScanError {
    fn error_response(&self) -> HttpResponse {
        match self {
            RoomScanError::RoomNotDetected(_) => {
                HttpResponse::UnprocessableEntity().json(serde_json::json!({
                    "error": "Room not detected",
                    "message": self.to_string(),
                    "retryable": false
                }))
            }
            RoomScanError::Validation(_) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Validation error",
                "message": self.to_string()
            })),
            RoomScanError::Serialization(_) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Data processing error",
                    "message": self.to_string()
                }))
            }
            RoomScanError::InvalidTool(_) => HttpResponse::NotFound().json(serde_json::json!({
                "error": "Invalid tool",
                "message": self.to_string()
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn room_not_detected_displays_bare_message() {
        let err = RoomScanError::RoomNotDetected("This image appears to be a food photo.".into());
        assert_eq!(err.to_string(), "This image appears to be a food photo.");
    }

    #[test]
    fn status_codes_follow_error_kind() {
        let cases = [
            (RoomScanError::RoomNotDetected("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (RoomScanError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (RoomScanError::Serialization("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (RoomScanError::InvalidTool("x".into()), StatusCode::NOT_FOUND),
        ];
        for (err, status) in cases {
            assert_eq!(err.error_response().status(), status);
        }
    }
}
