//! Status classes: grouping codes by their leading digit.

use serde::{Deserialize, Serialize};

/// The class of an HTTP status code, taken from its first digit.
///
/// Codes are kept as captured, so anything that does not start with
/// 2, 3, 4 or 5 (including "1xx" informational codes) lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatusClass {
    Success,
    Redirection,
    ClientError,
    ServerError,
    Other,
}

impl StatusClass {
    /// All classes in display order.
    pub const ALL: [StatusClass; 5] = [
        StatusClass::Success,
        StatusClass::Redirection,
        StatusClass::ClientError,
        StatusClass::ServerError,
        StatusClass::Other,
    ];

    /// Classify a status code string.
    pub fn of(code: &str) -> Self {
        match code.as_bytes().first() {
            Some(b'2') => StatusClass::Success,
            Some(b'3') => StatusClass::Redirection,
            Some(b'4') => StatusClass::ClientError,
            Some(b'5') => StatusClass::ServerError,
            _ => StatusClass::Other,
        }
    }

    /// Short label, e.g. "2xx".
    pub fn label(&self) -> &'static str {
        match self {
            StatusClass::Success => "2xx",
            StatusClass::Redirection => "3xx",
            StatusClass::ClientError => "4xx",
            StatusClass::ServerError => "5xx",
            StatusClass::Other => "other",
        }
    }

    /// Style name used when rendering rows of this class.
    pub fn style(&self) -> &'static str {
        match self {
            StatusClass::Success => "success",
            StatusClass::Redirection => "redirect",
            StatusClass::ClientError => "client_error",
            StatusClass::ServerError => "server_error",
            StatusClass::Other => "other",
        }
    }
}
