//! Common element and action fields.

use serde_json::{Map, Value};

use crate::json::{get_bool, get_enum, get_string};
use crate::types::{ActionBase, ElementBase, HeightType, Spacing};
use crate::warning::Warnings;

/// Parse the fields every card element shares.
///
/// Absent fields take their defaults silently; mistyped or unknown values
/// are reported and replaced by the default.
pub fn parse_element_base(
    obj: &Map<String, Value>,
    owner: &str,
    warnings: &mut Warnings,
) -> ElementBase {
    let defaults = ElementBase::default();
    ElementBase {
        id: get_string(obj, "id", owner, warnings),
        spacing: get_enum::<Spacing>(obj, "spacing", owner, warnings).unwrap_or(defaults.spacing),
        separator: get_bool(obj, "separator", defaults.separator, owner, warnings),
        is_visible: get_bool(obj, "isVisible", defaults.is_visible, owner, warnings),
        height: get_enum::<HeightType>(obj, "height", owner, warnings).unwrap_or(defaults.height),
    }
}

/// Parse the fields every action shares.
pub fn parse_action_base(
    obj: &Map<String, Value>,
    owner: &str,
    warnings: &mut Warnings,
) -> ActionBase {
    ActionBase {
        id: get_string(obj, "id", owner, warnings),
        title: get_string(obj, "title", owner, warnings),
        icon_url: get_string(obj, "iconUrl", owner, warnings),
        tooltip: get_string(obj, "tooltip", owner, warnings),
        is_enabled: get_bool(obj, "isEnabled", true, owner, warnings),
    }
}
