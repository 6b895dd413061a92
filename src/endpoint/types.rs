//! Request and response shapes exchanged with endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct UppercaseRequest {
    #[serde(default)]
    pub s: String,
}

/// `err` is set iff the call failed; `v` is then empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct UppercaseResponse {
    pub v: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub err: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct CountRequest {
    #[serde(default)]
    pub s: String,
}

/// `err` is set iff the call failed; `v` is then the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct CountResponse {
    pub v: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub err: String,
}
