use serde::{Deserialize, Serialize};

/// One extracurricular offering. Identified by its name, which is the key in
/// the store map and is not repeated inside the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Capacity hint shown in the UI. Signups are not checked against it.
    pub max_participants: u32,
    /// Signed-up emails, unique per activity, insertion order preserved.
    pub participants: Vec<String>,
}
