//! Response helpers shared by the dev event handlers.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 200 with a JSON body.
pub fn ok_json<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// 200 with an empty body.
pub fn ok_empty() -> Response {
    StatusCode::OK.into_response()
}

/// 201 with a `Location` header and the created resource as body.
pub fn created<T: Serialize>(location: String, data: T) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(data)).into_response()
}

/// 204, used when the referenced event does not exist.
pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}
