use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

/// Liveness check. Speaks the same `{"message"}` body shape as the rest of
/// the API.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Server is running!"
    }))
}
