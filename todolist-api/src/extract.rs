/// Request extractors with JSON error rejections
///
/// Axum's built-in `Json` and `Path` extractors reject malformed input with
/// plain-text bodies. The API contract says every user-visible failure is a
/// JSON object with an `error` field, so handlers use these wrappers
/// instead: they delegate to the axum extractors and route rejections
/// through [`ApiError`], which owns the response shape.

use crate::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts};
use axum::response::{IntoResponse, Response};

/// JSON body extractor rejecting with an `ApiError` (400)
///
/// Also usable as a response type, so handlers keep a single `Json`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T: serde::Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Path parameter extractor rejecting with an `ApiError` (400)
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);
