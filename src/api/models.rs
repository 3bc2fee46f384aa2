//! Request and response bodies for the HTTP API

use serde::{de, Deserialize, Deserializer, Serialize};

/// Body of `POST /sequence`.
///
/// Signed so that zero and negative values reach validation and get a
/// descriptive error instead of a deserialization failure. Integral floats
/// (`6.0`) and numeric strings (`"6"`) are accepted as well.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SequenceRequest {
    #[serde(deserialize_with = "lax_i64")]
    pub start_number: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LaxInt {
    Int(i64),
    Float(f64),
    Text(String),
}

fn lax_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match LaxInt::deserialize(deserializer)? {
        LaxInt::Int(n) => Ok(n),
        // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
        LaxInt::Float(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(f as i64)
        }
        LaxInt::Float(f) => Err(de::Error::custom(format!(
            "expected an integer, got {f}"
        ))),
        LaxInt::Text(text) => text.trim().parse().map_err(|_| {
            de::Error::custom(format!("expected an integer, got {text:?}"))
        }),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Error body, `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}
