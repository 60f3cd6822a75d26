//! Line-icon glyphs drawn inside the floor plan and the side panels.
//!
//! Each glyph is the inner markup of a 24×24 stroked icon. Element records
//! refer to glyphs by name (`iconName`), so the names here are part of the
//! stored document vocabulary.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use std::fmt::{self, Write};

use crate::render::Num;

const DOOR_OPEN: &str = r#"<path d="M13 4h3a2 2 0 0 1 2 2v14"/><path d="M2 20h3"/><path d="M13 20h9"/><path d="M10 12v.01"/><path d="M13 4.562v16.157a1 1 0 0 1-1.242.97L5 20V5.562a2 2 0 0 1 1.515-1.94l4-1A2 2 0 0 1 13 4.561Z"/>"#;
const PERSON_STANDING: &str =
    r#"<circle cx="12" cy="5" r="1"/><path d="m9 20 3-6 3 6"/><path d="m6 8 6 2 6-2"/><path d="M12 10v4"/>"#;
const CHEF_HAT: &str = r#"<path d="M17 21a1 1 0 0 0 1-1v-5.35c0-.457.316-.844.727-1.041a4 4 0 0 0-2.134-7.589 5 5 0 0 0-9.186 0 4 4 0 0 0-2.134 7.588c.411.198.727.585.727 1.041V20a1 1 0 0 0 1 1Z"/><path d="M6 17h12"/>"#;
const GLASS_WATER: &str = r#"<path d="M5.116 4.104A1 1 0 0 1 6.11 3h11.78a1 1 0 0 1 .994 1.105L17.19 20.21A2 2 0 0 1 15.2 22H8.8a2 2 0 0 1-2-1.79z"/><path d="M6 12a5 5 0 0 1 6 0 5 5 0 0 0 6 0"/>"#;
const COFFEE: &str = r#"<path d="M10 2v2"/><path d="M14 2v2"/><path d="M16 8a1 1 0 0 1 1 1v8a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4V9a1 1 0 0 1 1-1h14a4 4 0 1 1 0 8h-1"/><path d="M6 2v2"/>"#;
const ARMCHAIR: &str = r#"<path d="M19 9V6a2 2 0 0 0-2-2H7a2 2 0 0 0-2 2v3"/><path d="M3 16a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-5a2 2 0 0 0-4 0v1.5a.5.5 0 0 1-.5.5h-9a.5.5 0 0 1-.5-.5V11a2 2 0 0 0-4 0z"/><path d="M5 18v2"/><path d="M19 18v2"/>"#;
const UTENSILS_CROSSED: &str = r#"<path d="m16 2-2.3 2.3a3 3 0 0 0 0 4.2l1.8 1.8a3 3 0 0 0 4.2 0L22 8"/><path d="M15 15 3.3 3.3a4.2 4.2 0 0 0 0 6l7.3 7.3c.7.7 2 .7 2.8 0L15 15Zm0 0 7 7"/><path d="m2.1 21.8 6.4-6.3"/><path d="m19 5-7 7"/>"#;
const USERS: &str = r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#;
const LOCK: &str = r#"<rect width="18" height="11" x="3" y="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#;
const UNLOCK: &str = r#"<rect width="18" height="11" x="3" y="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 9.9-1"/>"#;

/// Glyphs an element may name in its `iconName` field.
pub const ELEMENT_ICON_NAMES: [&str; 7] =
    ["DoorOpen", "PersonStanding", "ChefHat", "GlassWater", "Coffee", "Armchair", "UtensilsCrossed"];

/// Inner markup of the glyph called `name`.
#[must_use]
pub fn glyph(name: &str) -> Option<&'static str> {
    Some(match name {
        "DoorOpen" => DOOR_OPEN,
        "PersonStanding" => PERSON_STANDING,
        "ChefHat" => CHEF_HAT,
        "GlassWater" => GLASS_WATER,
        "Coffee" => COFFEE,
        "Armchair" => ARMCHAIR,
        "UtensilsCrossed" => UTENSILS_CROSSED,
        "Users" => USERS,
        "Lock" => LOCK,
        "Unlock" => UNLOCK,
        _ => return None,
    })
}

/// Placement of an icon inside the scene.
#[derive(Debug, Clone, Copy)]
pub struct IconBox<'a> {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: &'a str,
    pub stroke_width: f64,
}

/// Write glyph `name` as a nested `<svg>` scaled into `place`.
///
/// Unknown names write nothing and return `Ok(false)`.
///
/// # Errors
///
/// Propagates formatter errors from `out`.
pub fn write_icon(out: &mut impl Write, name: &str, place: IconBox<'_>) -> Result<bool, fmt::Error> {
    let Some(inner) = glyph(name) else {
        return Ok(false);
    };
    write!(
        out,
        r#"<svg x="{}" y="{}" width="{s}" height="{s}" viewBox="0 0 24 24" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" pointer-events="none">{inner}</svg>"#,
        Num(place.x),
        Num(place.y),
        crate::render::escape(place.color),
        Num(place.stroke_width),
        s = Num(place.size),
    )?;
    Ok(true)
}

/// Standalone `<svg>` markup for panel buttons and legends.
#[must_use]
pub fn inline_svg(name: &str, size: u32, class: &str) -> String {
    let inner = glyph(name).unwrap_or_default();
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="{class}" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{inner}</svg>"#
    )
}
