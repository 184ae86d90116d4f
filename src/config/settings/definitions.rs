//! Settings definitions
//! Declarative table of all waypoint tunables

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};
use super::registry::SettingsRegistry;
use crate::config::WaypointOptions;
use std::time::Duration;

fn expect_integer(value: SettingValue) -> Result<usize, SettingError> {
    match value {
        SettingValue::Integer(n) => Ok(n),
        _ => Err(SettingError::ValidationError("Expected integer".to_string())),
    }
}

fn expect_bool(value: SettingValue) -> Result<bool, SettingError> {
    match value {
        SettingValue::Bool(b) => Ok(b),
        _ => Err(SettingError::ValidationError("Expected boolean".to_string())),
    }
}

fn set_throttle(options: &mut WaypointOptions, value: SettingValue) -> Result<(), SettingError> {
    options.throttle = Duration::from_millis(expect_integer(value)? as u64);
    Ok(())
}

fn set_debounce(options: &mut WaypointOptions, value: SettingValue) -> Result<(), SettingError> {
    options.debounce = Duration::from_millis(expect_integer(value)? as u64);
    Ok(())
}

fn set_max_scan_cols(options: &mut WaypointOptions, value: SettingValue) -> Result<(), SettingError> {
    options.max_scan_cols = expect_integer(value)?;
    Ok(())
}

fn set_viewport_padding(
    options: &mut WaypointOptions,
    value: SettingValue,
) -> Result<(), SettingError> {
    options.viewport_padding = expect_integer(value)?;
    Ok(())
}

fn set_max_tree_depth(options: &mut WaypointOptions, value: SettingValue) -> Result<(), SettingError> {
    options.max_tree_depth = expect_integer(value)?;
    Ok(())
}

fn set_use_syntax(options: &mut WaypointOptions, value: SettingValue) -> Result<(), SettingError> {
    options.use_syntax = expect_bool(value)?;
    Ok(())
}

fn set_snippet_integration(
    options: &mut WaypointOptions,
    value: SettingValue,
) -> Result<(), SettingError> {
    options.snippet_integration = expect_bool(value)?;
    Ok(())
}

/// Waypoint option table; durations are given in milliseconds
const OPTION_SETTINGS: &[SettingDescriptor<WaypointOptions>] = &[
    SettingDescriptor {
        name: "throttle",
        aliases: &["th"],
        ty: SettingType::Integer {
            min: None,
            max: Some(10_000),
        },
        set: set_throttle,
    },
    SettingDescriptor {
        name: "debounce",
        aliases: &["db"],
        ty: SettingType::Integer {
            min: None,
            max: Some(10_000),
        },
        set: set_debounce,
    },
    SettingDescriptor {
        name: "max_scan_cols",
        aliases: &["maxcols"],
        ty: SettingType::Integer {
            min: Some(1),
            max: None,
        },
        set: set_max_scan_cols,
    },
    SettingDescriptor {
        name: "viewport_padding",
        aliases: &["pad"],
        ty: SettingType::Integer {
            min: None,
            max: Some(10_000),
        },
        set: set_viewport_padding,
    },
    SettingDescriptor {
        name: "max_tree_depth",
        aliases: &["depth"],
        ty: SettingType::Integer {
            min: Some(1),
            max: Some(65_536),
        },
        set: set_max_tree_depth,
    },
    SettingDescriptor {
        name: "use_syntax",
        aliases: &["syntax"],
        ty: SettingType::Boolean,
        set: set_use_syntax,
    },
    SettingDescriptor {
        name: "snippet_integration",
        aliases: &["snippets"],
        ty: SettingType::Boolean,
        set: set_snippet_integration,
    },
];

pub fn create_options_registry() -> SettingsRegistry<WaypointOptions> {
    SettingsRegistry::new(OPTION_SETTINGS)
}
