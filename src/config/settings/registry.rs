//! Settings registry
//! Holds setting descriptors, resolves names and applies values

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};

/// Result of matching an option name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// Exact match on a name or alias
    Exact(&'static str),
    /// Unambiguous prefix of a name or alias
    Prefix(&'static str),
    Ambiguous { prefix: String, matches: Vec<String> },
    Unknown(String),
}

/// Registry over a static descriptor table for options type `T`
pub struct SettingsRegistry<T: 'static> {
    settings: &'static [SettingDescriptor<T>],
}

// Manual impls: a derive would require `T: Clone`
impl<T: 'static> Clone for SettingsRegistry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SettingsRegistry<T> {}

impl<T: 'static> SettingsRegistry<T> {
    #[must_use]
    pub const fn new(descriptors: &'static [SettingDescriptor<T>]) -> Self {
        SettingsRegistry {
            settings: descriptors,
        }
    }

    pub fn descriptors(&self) -> &'static [SettingDescriptor<T>] {
        self.settings
    }

    /// Resolve an option name
    ///
    /// Exact names and aliases win; otherwise the input must be a prefix of
    /// exactly one option.
    pub fn match_setting(&self, input: &str) -> MatchResult {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return MatchResult::Unknown(input);
        }

        for desc in self.settings {
            if desc.name == input || desc.aliases.iter().any(|a| *a == input) {
                return MatchResult::Exact(desc.name);
            }
        }

        let matches: Vec<&'static str> = self
            .settings
            .iter()
            .filter(|d| d.name.starts_with(&input) || d.aliases.iter().any(|a| a.starts_with(&input)))
            .map(|d| d.name)
            .collect();

        match matches.len() {
            0 => MatchResult::Unknown(input),
            1 => MatchResult::Prefix(matches[0]),
            _ => MatchResult::Ambiguous {
                prefix: input,
                matches: matches.iter().map(|m| m.to_string()).collect(),
            },
        }
    }

    /// Parse string value to `SettingValue` using `SettingType`
    pub(crate) fn parse_value(ty: &SettingType, value: &str) -> Result<SettingValue, SettingError> {
        match ty {
            SettingType::Boolean => match value.trim().to_lowercase().as_str() {
                "true" | "1" | "on" | "yes" => Ok(SettingValue::Bool(true)),
                "false" | "0" | "off" | "no" => Ok(SettingValue::Bool(false)),
                _ => Err(SettingError::ParseError(format!(
                    "Invalid boolean value: {value}"
                ))),
            },
            SettingType::Integer { min, max } => {
                let val = value.trim().parse::<usize>().map_err(|_| {
                    SettingError::ParseError(format!("Invalid integer value: {value}"))
                })?;

                if let Some(min_val) = min {
                    if val < *min_val {
                        return Err(SettingError::ValidationError(format!(
                            "Value {val} is below minimum {min_val}"
                        )));
                    }
                }
                if let Some(max_val) = max {
                    if val > *max_val {
                        return Err(SettingError::ValidationError(format!(
                            "Value {val} is above maximum {max_val}"
                        )));
                    }
                }
                Ok(SettingValue::Integer(val))
            }
        }
    }

    /// Apply a setting by name with a string value
    ///
    /// Flow: resolve the name, parse the value with the descriptor's type,
    /// then hand the typed value to the setter.
    pub fn apply(&self, name: &str, value: Option<&str>, target: &mut T) -> Result<(), SettingError> {
        let matched = match self.match_setting(name) {
            MatchResult::Exact(n) | MatchResult::Prefix(n) => n,
            MatchResult::Ambiguous { prefix, matches } => {
                return Err(SettingError::AmbiguousOption { prefix, matches })
            }
            MatchResult::Unknown(_) => return Err(SettingError::UnknownOption(name.to_string())),
        };

        let desc = self
            .settings
            .iter()
            .find(|d| d.name == matched)
            .ok_or_else(|| SettingError::UnknownOption(name.to_string()))?;

        let value = value.ok_or_else(|| SettingError::MissingValue(desc.name.to_string()))?;
        let typed = Self::parse_value(&desc.ty, value)?;
        (desc.set)(target, typed)
    }

    /// Apply a `name=value` assignment string
    pub fn apply_assignment(&self, assignment: &str, target: &mut T) -> Result<(), SettingError> {
        match assignment.split_once('=') {
            Some((name, value)) => self.apply(name, Some(value), target),
            None => self.apply(assignment, None, target),
        }
    }
}
