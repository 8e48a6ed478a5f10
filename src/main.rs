// src/main.rs
use actix_web::{App, HttpResponse, HttpServer, middleware, web};
use anyhow::Context;
use log::info;
use std::sync::Arc;

mod config;
mod errors;
mod handlers;
mod mcp;
mod models;
mod services;

use crate::config::ServerConfig;
use crate::mcp::MCPTool;
use crate::services::{AnalysisService, CatalogGenerator, RandomSource, SeededRandom, ThreadRandom};

#[derive(Clone)]
pub struct AppState {
    analysis_service: Arc<AnalysisService>,
    tools: Arc<Vec<Arc<dyn MCPTool>>>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting roomscan service...");

    let config = ServerConfig::from_env().context("failed to load configuration")?;

    let random: Arc<dyn RandomSource> = match config.random_seed {
        Some(seed) => {
            info!("Using seeded random source ({})", seed);
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    };

    let analysis_service = Arc::new(AnalysisService::new(
        config.ai.clone(),
        random,
        Arc::new(CatalogGenerator),
    ));
    let tools = Arc::new(mcp::default_tools(analysis_service.clone()));

    let app_state = AppState {
        analysis_service,
        tools,
    };

    info!(
        "Detection threshold {} (effective floor 0.75), {} furniture / {} color suggestions",
        config.ai.room_detection_threshold,
        config.ai.suggestion_count.furniture,
        config.ai.suggestion_count.colors
    );
    info!("Starting HTTP server on {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .configure(handlers::routes)
            .route("/health", web::get().to(health_check))
    })
    .bind(&config.bind_addr)
    .with_context(|| format!("failed to bind {}", config.bind_addr))?
    .run()
    .await
    .context("HTTP server error")
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "roomscan",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
