//! Text style files (`.rgs`).
//!
//! One entry per line:
//!
//! ```text
//! # comment
//! p 00 02 0xffffffff    DEFAULT_TEXT_COLOR_NORMAL
//! p 12 14 0x00000000    LISTVIEW_TEXT_ALIGNMENT
//! f 16 charset.txt Inter.ttf
//! ```
//!
//! - `p <control> <property> <value> [description]`: a property. Control and
//!   property are decimal ids or names; the value is `0x` hex or decimal.
//!   Anything after the value is free text.
//! - `f <size> <charset> <file>`: a font reference. It is recorded in
//!   [`TextStyle::fonts`] but never loaded.
//! - `#` lines and blank lines are skipped.
//!
//! Any other leading character is an error carrying its line number.

use std::fmt::Write as _;

use guistyle::ids::{parse_control, parse_property, qualified_name};
use guistyle::{StyleProperty, StyleSheet};

use crate::error::{Result, StyleFileError};

/// A font line from a text style file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRef {
    /// Pixel size the font was generated at.
    pub size: u32,
    /// Charset file listing the glyphs to load.
    pub charset: String,
    /// Font file, relative to the style file.
    pub file: String,
}

/// Parsed contents of a text style file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub sheet: StyleSheet,
    pub fonts: Vec<FontRef>,
}

/// Parses text style content into a sheet named `name`.
pub fn parse_text(name: &str, content: &str) -> Result<TextStyle> {
    let mut sheet = StyleSheet::new(name.to_string());
    let mut fonts = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        match line.chars().next() {
            None | Some('#') => continue,
            Some('p') => sheet.push(parse_property_line(line, line_no)?),
            Some('f') => {
                let font = parse_font_line(line, line_no)?;
                log::warn!(
                    "style '{}' line {}: font '{}' ignored",
                    name,
                    line_no,
                    font.file
                );
                fonts.push(font);
            }
            Some(other) => {
                return Err(StyleFileError::parse(
                    line_no,
                    format!("unexpected '{}' at start of line", other),
                ))
            }
        }
    }

    Ok(TextStyle { sheet, fonts })
}

fn parse_property_line(line: &str, line_no: usize) -> Result<StyleProperty> {
    let mut fields = line.split_whitespace();
    if fields.next() != Some("p") {
        return Err(StyleFileError::parse(line_no, "expected 'p <control> <property> <value>'"));
    }

    let (control, property, value) = match (fields.next(), fields.next(), fields.next()) {
        (Some(c), Some(p), Some(v)) => (c, p, v),
        _ => {
            return Err(StyleFileError::parse(
                line_no,
                "expected 'p <control> <property> <value>'",
            ))
        }
    };

    let control_id = parse_control(control).ok_or_else(|| {
        StyleFileError::parse(line_no, format!("unknown control '{}'", control))
    })?;
    let property_id = parse_property(control_id, property).ok_or_else(|| {
        StyleFileError::parse(
            line_no,
            format!("unknown property '{}' for control {}", property, control_id),
        )
    })?;
    let value = parse_number(value)
        .ok_or_else(|| StyleFileError::parse(line_no, format!("invalid value '{}'", value)))?;

    Ok(StyleProperty::of(control_id, property_id, value))
}

fn parse_font_line(line: &str, line_no: usize) -> Result<FontRef> {
    let usage = || StyleFileError::parse(line_no, "expected 'f <size> <charset> <file>'");

    let rest = line.strip_prefix('f').ok_or_else(usage)?;
    let (size, rest) = next_field(rest).ok_or_else(usage)?;
    let (charset, rest) = next_field(rest).ok_or_else(usage)?;
    // the file name may contain spaces
    let file = rest.trim();
    if file.is_empty() {
        return Err(usage());
    }

    Ok(FontRef {
        size: size.parse().map_err(|_| usage())?,
        charset: charset.to_string(),
        file: file.to_string(),
    })
}

fn next_field(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    Some(s.split_once(char::is_whitespace).unwrap_or((s, "")))
}

/// Parses `0x`-prefixed hex or plain decimal. Negative decimals keep their
/// 32-bit pattern.
pub(crate) fn parse_number(s: &str) -> Option<u32> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16).ok();
    }
    s.parse::<u32>()
        .ok()
        .or_else(|| s.parse::<i32>().ok().map(|v| v as u32))
}

/// Renders a sheet as text style content.
///
/// Records keep their order. Each line carries the property's qualified name
/// as its description when one is known.
pub fn write_text(sheet: &StyleSheet) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#");
    let _ = writeln!(out, "# rgs style text file: {}", sheet.name());
    let _ = writeln!(out, "#");
    let _ = writeln!(out, "# p <control> <property> <value> <description>");
    let _ = writeln!(out, "#");

    for record in sheet {
        let _ = write!(
            out,
            "p {:02} {:02} 0x{:08x}",
            record.control.0, record.property.0, record.value
        );
        if let Some(name) = qualified_name(record.control, record.property) {
            let _ = write!(out, "    {}", name);
        }
        out.push('\n');
    }
    out
}
