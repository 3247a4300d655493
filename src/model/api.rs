use serde::{Deserialize, Serialize};

/// JSON body of every error response.
///
/// `stack` carries the error's diagnostic representation in development
/// and a fixed redaction marker in production.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub message: String,
    pub stack: String,
}
