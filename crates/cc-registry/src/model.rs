//! Request and response bodies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One registration as submitted and as stored.  Optional fields are echoed
/// back as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    /// "Senior" or "Caregiver"; not validated.
    pub user_type:      String,
    #[serde(default)]
    pub symptoms:       Option<bool>,
    #[serde(default)]
    pub travel_history: Option<String>,
    #[serde(default)]
    pub personal_info:  Option<Map<String, Value>>,
}

/// Body returned by `POST /register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub id:   u64,
    pub data: Registration,
}
