//! Setting descriptor types
//! Type definitions for declarative setting configuration

use crate::constants::errors;
use crate::error::{ErrorSeverity, ErrorType, WaypointError};

/// Typed value after parsing and validation
/// Setters receive this, never raw strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Bool(bool),
    Integer(usize),
}

/// Setting type definition for parsing and validation
#[derive(Debug, Clone)]
pub enum SettingType {
    /// Boolean setting (true/false, on/off, yes/no, 1/0)
    Boolean,
    /// Integer setting with optional inclusive bounds
    Integer {
        min: Option<usize>,
        max: Option<usize>,
    },
}

/// Structured error for setting operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingError {
    /// Failed to parse string value
    ParseError(String),
    /// Value failed validation (out of range, etc.)
    ValidationError(String),
    /// Unknown option name
    UnknownOption(String),
    /// Prefix matches more than one option
    AmbiguousOption { prefix: String, matches: Vec<String> },
    /// `name` given without `=value`
    MissingValue(String),
}

impl std::fmt::Display for SettingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            SettingError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            SettingError::UnknownOption(name) => write!(f, "Unknown option: {name}"),
            SettingError::AmbiguousOption { prefix, matches } => {
                write!(f, "Ambiguous option '{prefix}': matches {}", matches.join(", "))
            }
            SettingError::MissingValue(name) => write!(f, "Missing value for option: {name}"),
        }
    }
}

impl From<SettingError> for WaypointError {
    fn from(err: SettingError) -> Self {
        let message = err.to_string();
        let (kind, code) = match err {
            SettingError::ParseError(_) => (ErrorType::Parse, errors::SETTING_PARSE_ERROR),
            SettingError::ValidationError(_) => {
                (ErrorType::Settings, errors::SETTING_VALIDATION_ERROR)
            }
            SettingError::UnknownOption(_) => (ErrorType::Settings, errors::UNKNOWN_SETTING),
            SettingError::AmbiguousOption { .. } => {
                (ErrorType::Settings, errors::AMBIGUOUS_SETTING)
            }
            SettingError::MissingValue(_) => (ErrorType::Parse, errors::MISSING_VALUE),
        };
        WaypointError {
            severity: ErrorSeverity::Error,
            kind,
            code: code.to_string(),
            message,
        }
    }
}

/// Setter function signature
///
/// Function pointers (not trait objects) for static dispatch.
pub type SettingSetter<T> = fn(&mut T, SettingValue) -> Result<(), SettingError>;

/// Setting descriptor: name, aliases, type, and setter function.
#[derive(Debug, Clone)]
pub struct SettingDescriptor<T> {
    /// Canonical setting name (e.g., "throttle")
    pub name: &'static str,
    /// Short aliases (e.g., &["th"])
    pub aliases: &'static [&'static str],
    /// Setting type for parsing and validation
    pub ty: SettingType,
    /// Setter function pointer
    pub set: SettingSetter<T>,
}
