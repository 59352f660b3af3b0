//! `/api/scores` handlers

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::Value;

use crate::error::ServerError;
use crate::store::ScoreEntry;
use crate::SharedStore;

/// `GET /api/scores`: every entry in submission order
pub async fn list_scores(store: SharedStore) -> Json<Vec<ScoreEntry>> {
    let store = store.lock().await;
    Json(store.entries().to_vec())
}

/// `POST /api/scores`: record `{name, score}` and echo the stored entry
pub async fn submit_score(
    store: SharedStore,
    body: Bytes,
) -> Result<(StatusCode, Json<ScoreEntry>), ServerError> {
    let (name, score) = parse_submission(&body)?;
    let entry = store.lock().await.append(name, score).await?;
    log::info!("New score {} for {}", entry.score, entry.name);
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Accept a JSON object whose `name` is a string and `score` a number.
/// Extra fields are ignored.
pub fn parse_submission(body: &[u8]) -> Result<(String, serde_json::Number), ServerError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ServerError::InvalidInput)?;
    match (value.get("name"), value.get("score")) {
        (Some(Value::String(name)), Some(Value::Number(score))) => {
            Ok((name.clone(), normalize_score(score)))
        }
        _ => Err(ServerError::InvalidInput),
    }
}

/// Largest magnitude at which every whole `f64` is exactly representable
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Store whole-valued floats as integers: `1.0` becomes `1`, `1e2` becomes `100`
#[allow(clippy::cast_possible_truncation)]
fn normalize_score(score: &serde_json::Number) -> serde_json::Number {
    if !score.is_f64() {
        return score.clone();
    }
    match score.as_f64() {
        Some(value) if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER => {
            serde_json::Number::from(value as i64)
        }
        _ => score.clone(),
    }
}
