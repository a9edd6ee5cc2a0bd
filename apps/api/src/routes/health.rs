use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-api"
    }))
}

/// GET /
/// Landing document: what the service is and where to go next.
pub async fn home_handler() -> Json<Value> {
    Json(json!({
        "service": "resume-api",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Build a resume, preview it in one of four templates and export it as PDF",
        "links": {
            "resume": "/api/v1/resume",
            "editor": "/api/v1/editor",
            "templates": "/api/v1/templates",
            "generate": "/api/v1/generate",
            "preview": "/preview",
            "export": "/api/v1/export"
        }
    }))
}
