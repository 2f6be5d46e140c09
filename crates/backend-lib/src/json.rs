// ============================
// userdesk-backend-lib/src/json.rs
// ============================
//! JSON request decoding and the response envelope.
//!
//! Responses are tab-indented and newline-terminated so they read well in a
//! terminal. Decode failures are turned into short client-facing messages.
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{error::Category, ser::PrettyFormatter, Serializer};
use tracing::error;

use crate::error::AppError;

pub const EMPTY_BODY_MSG: &str = "body must not be empty";
pub const BADLY_FORMED_MSG: &str = "body contains badly-formed JSON";
pub const SERVER_ERROR_MSG: &str =
    "the server has encountered a problem and could not process your request";

const SERVER_ERROR_BODY: &str =
    "{\n\t\"error\": \"the server has encountered a problem and could not process your request\"\n}\n";

/// Serialize `value` with tab indentation and a trailing newline
pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::with_capacity(256);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Build a JSON response. A value that fails to serialize becomes a 500.
pub fn json_response<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Response {
    match render(value) {
        Ok(body) => with_json_type(status, body),
        Err(e) => {
            error!(error = %e, "failed to serialize response body");
            with_json_type(
                StatusCode::INTERNAL_SERVER_ERROR,
                SERVER_ERROR_BODY.as_bytes().to_vec(),
            )
        },
    }
}

fn with_json_type(status: StatusCode, body: Vec<u8>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response()
}

/// `(status, value)` pair rendered through [`json_response`]
pub struct JsonResponse<T>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        json_response(self.0, &self.1)
    }
}

/// JSON body extractor with client-friendly decode errors
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        decode(&bytes).map(JsonBody)
    }
}

/// Decode a request body, describing any failure the way clients see it
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest(EMPTY_BODY_MSG.to_string()));
    }

    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut de).map_err(|e| {
        let field = e.path().to_string();
        AppError::BadRequest(describe(e.inner(), Some(field.as_str()).filter(|f| *f != ".")))
    })?;
    de.end().map_err(|e| AppError::BadRequest(describe(&e, None)))?;

    Ok(value)
}

/// `field` is the path of the offending value, when it sits below the root
fn describe(e: &serde_json::Error, field: Option<&str>) -> String {
    match e.classify() {
        Category::Syntax => format!(
            "{BADLY_FORMED_MSG} (at line {}, column {})",
            e.line(),
            e.column()
        ),
        Category::Eof => BADLY_FORMED_MSG.to_string(),
        Category::Data => match field {
            Some(field) => format!("body contains incorrect JSON type for field {field:?}"),
            None => format!(
                "body contains incorrect JSON type (at line {}, column {})",
                e.line(),
                e.column()
            ),
        },
        Category::Io => e.to_string(),
    }
}
