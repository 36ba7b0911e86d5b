use serde::Deserialize;
use serde::Serialize;

/// Authenticated subject.
///
/// Produced either by the user lookup (from persisted data) or by token
/// extraction (from validated claims). Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
