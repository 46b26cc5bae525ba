use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A pending code for one email address. At most one exists per normalized
/// email; an expired record stays in the store but never verifies.
#[derive(Debug, Clone)]
pub struct VerificationRecord {
    pub code: String,
    pub issued_at: DateTime<Utc>,
}

// Request fields default to empty strings so an absent field reports the
// same "required" error as an empty one.

#[derive(Deserialize)]
pub struct SendCodeRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Deserialize)]
pub struct VerifyCodeRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub code: String,
}
