// src/handlers.rs
use crate::{AppState, errors::RoomScanError, mcp, models::UploadedFile};
use actix_multipart::Multipart;
use actix_web::{Error, HttpResponse, web};
use futures_util::TryStreamExt;
use log::info;

/// Tool calls carry the image as base64, about 4/3 of the raw size; this
/// admits the largest upload the classifier still scores as a detailed photo.
const MAX_TOOL_PAYLOAD_BYTES: usize = 16 * 1024 * 1024;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::JsonConfig::default().limit(MAX_TOOL_PAYLOAD_BYTES))
            .route("/detect", web::post().to(detect_room))
            .route("/analyze", web::post().to(analyze_room))
            .route("/config", web::get().to(get_config))
            .route("/tools", web::get().to(list_tools))
            .route("/tools/{name}", web::post().to(invoke_tool)),
    );
}

/// Reads the first file field of a multipart upload.
async fn read_upload(mut payload: Multipart) -> Result<UploadedFile, Error> {
    let Some(mut field) = payload.try_next().await? else {
        return Err(RoomScanError::Validation("No file provided".to_string()).into());
    };

    let content_disposition = field.content_disposition();
    let filename = content_disposition
        .get_filename()
        .ok_or_else(|| RoomScanError::Validation("No filename provided".to_string()))?
        .to_string();

    let mut image_data = Vec::new();
    while let Some(chunk) = field.try_next().await? {
        image_data.extend_from_slice(&chunk);
    }

    Ok(UploadedFile::new(filename, image_data))
}

pub async fn detect_room(
    payload: Multipart,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let file = read_upload(payload).await?;
    info!("Detecting room in {} ({} bytes)", file.name, file.size);

    let detection = data.analysis_service.detect_room(&file).await;

    Ok(HttpResponse::Ok().json(&detection))
}

pub async fn analyze_room(
    payload: Multipart,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let file = read_upload(payload).await?;
    info!("Analyzing {} ({} bytes)", file.name, file.size);

    let analysis = data.analysis_service.analyze(&file).await?;

    Ok(HttpResponse::Ok().json(&analysis))
}

pub async fn get_config(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(data.analysis_service.config())
}

pub async fn list_tools(data: web::Data<AppState>) -> HttpResponse {
    let tools: Vec<_> = data
        .tools
        .iter()
        .map(|tool| {
            serde_json::json!({
                "name": tool.name(),
                "description": tool.description()
            })
        })
        .collect();

    HttpResponse::Ok().json(serde_json::json!({ "tools": tools }))
}

pub async fn invoke_tool(
    path: web::Path<String>,
    data: web::Data<AppState>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, Error> {
    let name = path.into_inner();
    let tool = mcp::find_tool(&data.tools, &name)?;

    let result = tool.execute(body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AIConfiguration;
    use crate::services::image_processor::png_bytes;
    use crate::services::random::FixedRandom;
    use crate::services::{AnalysisService, CatalogGenerator};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use std::sync::Arc;

    const BOUNDARY: &str = "roomscan-test-boundary";

    fn test_state() -> AppState {
        let analysis_service = Arc::new(AnalysisService::new(
            AIConfiguration::without_latency(),
            Arc::new(FixedRandom(0.5)),
            Arc::new(CatalogGenerator),
        ));
        AppState {
            tools: Arc::new(mcp::default_tools(analysis_service.clone())),
            analysis_service,
        }
    }

    fn multipart_body(filename: &str, data: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: image/png\r\n\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn upload_request(uri: &str, filename: &str, data: &[u8]) -> test::TestRequest {
        test::TestRequest::post()
            .uri(uri)
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(multipart_body(filename, data))
    }

    #[actix_web::test]
    async fn detect_endpoint_returns_detection() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes),
        )
        .await;

        let req = upload_request("/api/v1/detect", "selfie_outdoor.png", &png_bytes(10, 10))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["isRoom"], false);
        assert_eq!(body["reasons"][0], "No clear room structure detected");
    }

    #[actix_web::test]
    async fn analyze_endpoint_rejects_non_room_with_422() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes),
        )
        .await;

        let req = upload_request("/api/v1/analyze", "selfie_outdoor.png", &png_bytes(10, 10))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Room not detected");
        assert_eq!(body["retryable"], false);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("This image appears to be an outdoor scene.")
        );
    }

    #[actix_web::test]
    async fn analyze_endpoint_returns_analysis_for_room() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes),
        )
        .await;

        // Padding puts the upload inside the detailed-photo size window.
        let mut data = png_bytes(160, 100);
        data.resize(150_000, 0);
        let req = upload_request("/api/v1/analyze", "living_room_interior.png", &data).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["roomDetection"]["roomType"], "living_room");
        assert_eq!(body["furnitureSuggestions"].as_array().unwrap().len(), 6);
    }

    #[actix_web::test]
    async fn config_and_tools_are_listed() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/config").to_request();
        let config: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(config["enable3D"], true);
        assert_eq!(config["suggestionCount"]["furniture"], 6);

        let req = test::TestRequest::get().uri("/api/v1/tools").to_request();
        let tools: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(tools["tools"][0]["name"], "detect_room");
        assert_eq!(tools["tools"][1]["name"], "analyze_room");
    }

    #[actix_web::test]
    async fn unknown_tool_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/tools/render_room")
            .set_json(serde_json::json!({ "file_name": "room.jpg" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn tool_endpoint_runs_detection() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/tools/detect_room")
            .set_json(serde_json::json!({
                "file_name": "home_office.jpg",
                "file_size": 600_000
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["isRoom"], true);
        assert_eq!(body["roomType"], "office");
    }

    #[actix_web::test]
    async fn tool_endpoint_accepts_large_base64_image() {
        use base64::{Engine as _, engine::general_purpose};

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes),
        )
        .await;

        // Encodes to well over the 2 MB default JSON limit.
        let mut data = png_bytes(160, 100);
        data.resize(2_000_000, 0);
        let req = test::TestRequest::post()
            .uri("/api/v1/tools/detect_room")
            .set_json(serde_json::json!({
                "file_name": "living_room_interior.png",
                "data": general_purpose::STANDARD.encode(&data)
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["isRoom"], true);
        assert_eq!(body["roomType"], "living_room");
    }

    fn raw_multipart_request(uri: &str, body: String) -> test::TestRequest {
        test::TestRequest::post()
            .uri(uri)
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
    }

    #[actix_web::test]
    async fn upload_without_file_part_is_a_validation_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes),
        )
        .await;

        let req = raw_multipart_request("/api/v1/detect", format!("--{BOUNDARY}--\r\n"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Validation error");
        assert_eq!(body["message"], "Validation error: No file provided");
    }

    #[actix_web::test]
    async fn upload_without_filename_is_a_validation_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes),
        )
        .await;

        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"\r\n\r\n\
             not an image\r\n\
             --{BOUNDARY}--\r\n"
        );
        let req = raw_multipart_request("/api/v1/analyze", body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Validation error");
        assert_eq!(body["message"], "Validation error: No filename provided");
    }
}
