//! Centralized error handling for the waypoint engine
//! Defines the error type, severity levels, and error categories

use std::fmt;

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational message (not really an error)
    Info,
    /// Warning - something might be wrong but navigation can continue
    Warning,
    /// Standard error - operation failed
    Error,
    /// Critical error - the session is unusable
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Configuration or settings errors
    Settings,
    /// Setting value parsing errors
    Parse,
    /// The host editor refused a request (cursor move, row lookup)
    Host,
    /// Syntax tree access errors
    Syntax,
    /// Internal logic or invariant violations
    Internal,
    /// Errors that don't fit other categories
    Other,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Settings => write!(f, "Settings"),
            Self::Parse => write!(f, "Parse"),
            Self::Host => write!(f, "Host"),
            Self::Syntax => write!(f, "Syntax"),
            Self::Internal => write!(f, "Internal"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A structured waypoint engine error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaypointError {
    /// How serious the error is
    pub severity: ErrorSeverity,
    /// What kind of error occurred
    pub kind: ErrorType,
    /// Machine-readable error code (e.g., "INVALID_POSITION")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl WaypointError {
    /// Create a new standard error (Severity: Error)
    pub fn new(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new critical error (Severity: Critical)
    pub fn critical(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Critical,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new warning (Severity: Warning)
    pub fn warning(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Warning,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Check if the message contains a substring (useful for tests)
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for WaypointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}({}): {}",
            self.severity, self.kind, self.code, self.message
        )
    }
}

impl std::error::Error for WaypointError {}

impl From<String> for WaypointError {
    fn from(msg: String) -> Self {
        Self::new(ErrorType::Other, crate::constants::errors::GENERIC_ERROR, msg)
    }
}

impl From<&str> for WaypointError {
    fn from(msg: &str) -> Self {
        Self::new(ErrorType::Other, crate::constants::errors::GENERIC_ERROR, msg)
    }
}

/// Result alias for waypoint operations
pub type Result<T> = std::result::Result<T, WaypointError>;
