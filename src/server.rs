use axum::{
    extract::{DefaultBodyLimit, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use b62::{BatchError, DecodeError, MAX_BATCH_SIZE};

use crate::packet::*;

/// Fits a full batch of the widest items: `u64::MAX` as 20 digits plus a comma
/// for `/encode`, which outgrows 11 quoted chars plus a comma for `/decode`.
pub const BODY_LIMIT: usize = MAX_BATCH_SIZE * 21 + 1024;

pub fn router() -> Router {
    Router::new()
        .route("/encode/:value", get(encode_one))
        .route("/decode/:encoded", get(decode_one))
        .route("/encode", post(encode_many))
        .route("/decode", post(decode_many))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
}

fn decode_error(err: DecodeError, index: Option<usize>) -> Response {
    let body = ErrorRes {
        error: err.to_string(),
        kind: err.kind(),
        index,
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

fn batch_error(err: BatchError) -> Response {
    match err {
        BatchError::TooLarge { .. } => {
            let body = ErrorRes {
                error: err.to_string(),
                kind: "too_large",
                index: None,
            };
            (StatusCode::PAYLOAD_TOO_LARGE, Json(body)).into_response()
        }
        BatchError::Decode { index, source } => decode_error(source, Some(index)),
    }
}

async fn encode_one(Path(value): Path<u64>) -> Response {
    Json(EncodeRes {
        encoded: b62::encode(value),
    })
    .into_response()
}

async fn decode_one(Path(encoded): Path<String>) -> Response {
    match b62::decode(&encoded) {
        Ok(value) => Json(DecodeRes { value }).into_response(),
        Err(err) => {
            tracing::debug!(%encoded, %err, "rejected decode request");
            decode_error(err, None)
        }
    }
}

async fn encode_many(Json(payload): Json<EncodeBatchReq>) -> Response {
    let result = tokio::task::spawn_blocking(move || b62::encode_batch(&payload.values)).await;
    match result {
        Ok(Ok(encoded)) => Json(EncodeBatchRes { encoded }).into_response(),
        Ok(Err(err)) => batch_error(err),
        Err(err) => {
            tracing::error!(%err, "encode batch task failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn decode_many(Json(payload): Json<DecodeBatchReq>) -> Response {
    let result = tokio::task::spawn_blocking(move || b62::decode_batch(&payload.encoded)).await;
    match result {
        Ok(Ok(values)) => Json(DecodeBatchRes { values }).into_response(),
        Ok(Err(err)) => {
            tracing::debug!(%err, "rejected decode batch");
            batch_error(err)
        }
        Err(err) => {
            tracing::error!(%err, "decode batch task failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
