//! Settings registry
//! Declarative `name=value` tunables for waypoint options

pub mod definitions;
pub mod descriptor;
pub mod registry;


pub use definitions::create_options_registry;
pub use descriptor::{SettingDescriptor, SettingError, SettingSetter, SettingType, SettingValue};
pub use registry::{MatchResult, SettingsRegistry};
