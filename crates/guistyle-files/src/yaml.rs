//! YAML style sheets.
//!
//! A mapping of control to a mapping of property to value:
//!
//! ```yaml
//! DEFAULT:
//!   TEXT_COLOR_NORMAL: "#ffffff"
//!   TEXT_COLOR_FOCUSED: "0x9f9f9fff"
//!   BORDER_COLOR_NORMAL: blank
//! listview:
//!   TEXT_ALIGNMENT: left
//!   LIST_ITEMS_HEIGHT: 24
//! 14:
//!   14: 0
//! ```
//!
//! Controls and properties are names (any case) or numeric ids. Values are:
//!
//! - integers, including negative ones (stored as their 32-bit pattern)
//! - booleans (`1`/`0`)
//! - `0x` hex strings and `#rgb`, `#rrggbb`, `#rrggbbaa` colors
//! - palette names (`raywhite`, `skyblue`, `blank`, ...)
//! - alignment words: `left`/`top` (0), `center`/`middle` (1),
//!   `right`/`bottom` (2)
//!
//! Records come out in document order.

use guistyle::ids::{control_name, parse_control, parse_property, property_name};
use guistyle::{ControlId, PropertyId, Rgba, StyleKey, StyleProperty, StyleSheet};
use serde_yaml::{Mapping, Value};

use crate::error::{Result, StyleFileError};
use crate::text::parse_number;

/// Parses YAML content into a sheet named `name`.
pub fn parse_yaml(name: &str, content: &str) -> Result<StyleSheet> {
    let root: Value = serde_yaml::from_str(content).map_err(|e| StyleFileError::Parse {
        path: None,
        line: e.location().map(|l| l.line()).unwrap_or(0),
        message: e.to_string(),
    })?;

    let mut sheet = StyleSheet::new(name.to_string());
    let mapping = match &root {
        Value::Null => return Ok(sheet),
        Value::Mapping(mapping) => mapping,
        _ => return Err(StyleFileError::parse(0, "style sheet must be a YAML mapping")),
    };

    for (control_key, properties) in mapping {
        let control_text = scalar_text(control_key)
            .ok_or_else(|| StyleFileError::parse(0, format!("invalid control key {:?}", control_key)))?;
        let control = parse_control(&control_text).ok_or_else(|| StyleFileError::UnknownControl {
            path: None,
            name: control_text.clone(),
        })?;

        let properties = match properties {
            Value::Mapping(properties) => properties,
            Value::Null => continue,
            _ => {
                return Err(StyleFileError::parse(
                    0,
                    format!("properties of '{}' must be a mapping", control_text),
                ))
            }
        };

        for (property_key, value) in properties {
            let property_text = scalar_text(property_key).ok_or_else(|| {
                StyleFileError::parse(0, format!("invalid property key {:?}", property_key))
            })?;
            let property = parse_property(control, &property_text).ok_or_else(|| {
                StyleFileError::UnknownProperty {
                    path: None,
                    control,
                    name: property_text.clone(),
                }
            })?;
            let value = parse_value(value).ok_or_else(|| StyleFileError::InvalidValue {
                path: None,
                key: StyleKey::new(control, property),
                value: scalar_text(value).unwrap_or_else(|| format!("{:?}", value)),
            })?;

            sheet.push(StyleProperty::of(control, property, value));
        }
    }

    Ok(sheet)
}

/// Renders a sheet as YAML, using names where they exist.
///
/// A mapping cannot repeat a key, so a key listed twice in the sheet keeps
/// its first position and its last value.
pub fn write_yaml(sheet: &StyleSheet) -> Result<String> {
    let mut root = Mapping::new();

    for record in sheet {
        let control = control_key(record.control);
        let property = property_key(record.control, record.property);
        let value = Value::String(format!("0x{:08x}", record.value));

        match root.get_mut(&control) {
            Some(Value::Mapping(properties)) => {
                properties.insert(property, value);
            }
            _ => {
                let mut properties = Mapping::new();
                properties.insert(property, value);
                root.insert(control, Value::Mapping(properties));
            }
        }
    }

    serde_yaml::to_string(&Value::Mapping(root))
        .map_err(|e| StyleFileError::parse(0, e.to_string()))
}

fn control_key(control: ControlId) -> Value {
    match control_name(control) {
        Some(name) => Value::String(name.to_string()),
        None => Value::Number(control.0.into()),
    }
}

fn property_key(control: ControlId, property: PropertyId) -> Value {
    match property_name(control, property) {
        Some(name) => Value::String(name.to_string()),
        None => Value::Number(property.0.into()),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn parse_value(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                u32::try_from(v).ok()
            } else {
                n.as_i64()
                    .and_then(|v| i32::try_from(v).ok())
                    .map(|v| v as u32)
            }
        }
        Value::Bool(b) => Some(u32::from(*b)),
        Value::String(s) => parse_value_text(s.trim()),
        _ => None,
    }
}

fn parse_value_text(s: &str) -> Option<u32> {
    match s.to_ascii_lowercase().as_str() {
        "left" | "top" => return Some(0),
        "center" | "middle" => return Some(1),
        "right" | "bottom" => return Some(2),
        _ => {}
    }
    parse_number(s).or_else(|| Rgba::parse(s).ok().map(Rgba::packed))
}
