//! Rendering: produces the SVG markup for the whole floor plan.
//!
//! This module receives a read-only view of the editor and writes the inner
//! markup of the canvas `<svg>` element. It does not mutate any application
//! state. The host sets the result as the element's inner HTML and keeps the
//! `viewBox` attribute in sync with [`crate::engine::EditorCore::view_box`].
//!
//! Draw order is shared definitions, grid lines, elements, tables, then the
//! wall preview, so hit-testing in [`crate::hit`] walks the same order in
//! reverse. Every table and element group carries `data-id` / `data-type`
//! and every chair carries `data-chair-index`.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::consts::CELL_SIZE_PX;
use crate::doc::{Element, ElementKind, GridRect, Layout, Table, TableShape, TableStyle, Texture, is_boundary_wall};
use crate::engine::EditorCore;
use crate::icons::{IconBox, glyph, write_icon};
use crate::input::{Tool, UiState};
use crate::seating::{ChairSlot, chair_pixel_size, chair_slots, visible_seat_count};

/// Shared patterns, filters and gradients referenced by the scene.
const DEFS: &str = concat!(
    "<defs>",
    r#"<filter id="elementDepthEffect" x="-20%" y="-20%" width="140%" height="140%"><feOffset result="offOut" in="SourceAlpha" dx="0.8" dy="0.8"/><feGaussianBlur result="blurOut" in="offOut" stdDeviation="0.5"/><feBlend in="SourceGraphic" in2="blurOut" mode="normal"/><feComponentTransfer in="blurOut" result="alphaBlurred"><feFuncA type="linear" slope="0.5"/></feComponentTransfer><feMerge><feMergeNode in="alphaBlurred"/><feMergeNode in="SourceGraphic"/></feMerge></filter>"#,
    r#"<linearGradient id="windowGlassGradient" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="rgba(220, 230, 240, 0.7)"/><stop offset="100%" stop-color="rgba(180, 200, 220, 0.5)"/></linearGradient>"#,
    r#"<pattern id="woodPattern" patternUnits="userSpaceOnUse" width="60" height="60" patternTransform="rotate(45)"><rect width="60" height="60" fill="rgb(210, 180, 140)"/><line x1="0" y1="10" x2="60" y2="10" stroke="rgb(139, 115, 85)" stroke-width="3" opacity="0.4"/><line x1="0" y1="30" x2="60" y2="30" stroke="rgb(160, 120, 90)" stroke-width="4" opacity="0.3"/><line x1="0" y1="50" x2="60" y2="50" stroke="rgb(139, 115, 85)" stroke-width="2.5" opacity="0.4"/></pattern>"#,
    r#"<pattern id="woodPatternDark" patternUnits="userSpaceOnUse" width="50" height="50" patternTransform="rotate(30)"><rect width="50" height="50" fill="rgb(139, 69, 19)"/><line x1="0" y1="10" x2="50" y2="10" stroke="rgb(80, 40, 10)" stroke-width="4" opacity="0.5"/><line x1="0" y1="30" x2="50" y2="30" stroke="rgb(100, 50, 15)" stroke-width="3" opacity="0.4"/></pattern>"#,
    r#"<pattern id="tilePattern" patternUnits="userSpaceOnUse" width="50" height="50"><rect width="50" height="50" fill="rgb(235, 235, 225)"/><path d="M 25 0 L 25 50 M 0 25 L 50 25" stroke="rgb(200,200,190)" stroke-width="0.5"/></pattern>"#,
    r#"<pattern id="metalPattern" patternUnits="userSpaceOnUse" width="20" height="20"><rect width="20" height="20" fill="rgb(192,192,192)"/><line x1="0" y1="0" x2="20" y2="20" stroke="rgb(160,160,160)" stroke-width="1"/><line x1="0" y1="20" x2="20" y2="0" stroke="rgb(170,170,170)" stroke-width="0.5"/></pattern>"#,
    r#"<pattern id="metalPatternLight" patternUnits="userSpaceOnUse" width="20" height="20"><rect width="20" height="20" fill="rgb(211,211,211)"/><line x1="0" y1="0" x2="20" y2="20" stroke="rgb(180,180,180)" stroke-width="0.5"/></pattern>"#,
    r#"<filter id="textBg"><feFlood flood-color="rgba(0,0,0,0.4)" result="flood"/><feComposite in="flood" in2="SourceAlpha" operator="in" result="blackSource"/><feMorphology operator="dilate" radius="0.8" in="blackSource" result="dilated"/><feOffset dx="0.5" dy="0.5" in="dilated" result="offsetbackground"/><feMerge><feMergeNode in="offsetbackground"/><feMergeNode in="SourceGraphic"/></feMerge></filter>"#,
    r#"<filter id="lockedTableShadowAdvanced" x="-50%" y="-50%" width="200%" height="200%"><feDropShadow dx="1.5" dy="1.5" stdDeviation="1.5" flood-color="rgba(0,0,0,0.3)"/></filter>"#,
    "<style>.builder-selected-item > .table-top, .builder-selected-item > .element-body { stroke: rgb(59 130 246) !important; stroke-width: 2.5px !important; stroke-dasharray: 5 2.5 !important; }</style>",
    "</defs>",
);

const GRID_STROKE: &str = "rgba(200,200,200,0.2)";

/// Opacity of a booked table in view mode.
const BOOKED_OPACITY: f64 = 0.45;

const SELECTED_BUILDER_STROKE: &str = "rgb(59 130 246)";
const CHAIR_EDIT_HIGHLIGHT: &str = "rgba(74, 222, 128, 0.8)";

const WALL_PREVIEW_FILL: &str = "rgba(100,100,255,0.5)";
const WALL_PREVIEW_STROKE: &str = "blue";

/// Number formatted for markup: two decimals at most, no trailing zeros.
#[derive(Debug, Clone, Copy)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = (self.0 * 100.0).round() / 100.0;
        if v.abs() < 0.005 {
            return f.write_str("0");
        }
        write!(f, "{v}")
    }
}

/// Escape text for use in XML character data and attribute values.
#[must_use]
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Inner markup of the canvas `<svg>` for the current editor state.
#[must_use]
pub fn scene(core: &EditorCore) -> String {
    let mut out = String::with_capacity(32 * 1024);
    if let Err(e) = write_scene(&mut out, core) {
        log::warn!("scene markup incomplete: {e}");
    }
    out
}

fn write_scene(out: &mut String, core: &EditorCore) -> fmt::Result {
    let layout = &core.layout;
    out.push_str(DEFS);
    write_grid(out, layout.grid_cols, layout.grid_rows)?;
    for el in &layout.elements {
        write_element(out, el, layout, &core.ui)?;
    }
    for table in &layout.tables {
        write_table(out, table, &core.ui)?;
    }
    if let Some(preview) = core.wall_preview() {
        write_wall_preview(out, preview)?;
    }
    Ok(())
}

fn write_grid(out: &mut String, cols: u32, rows: u32) -> fmt::Result {
    let width = f64::from(cols) * CELL_SIZE_PX;
    let height = f64::from(rows) * CELL_SIZE_PX;
    write!(out, r#"<g class="grid" stroke="{GRID_STROKE}" stroke-width="0.5" pointer-events="none">"#)?;
    for i in 0..=cols {
        let x = Num(f64::from(i) * CELL_SIZE_PX);
        write!(out, r#"<line x1="{x}" y1="0" x2="{x}" y2="{}"/>"#, Num(height))?;
    }
    for i in 0..=rows {
        let y = Num(f64::from(i) * CELL_SIZE_PX);
        write!(out, r#"<line x1="0" y1="{y}" x2="{}" y2="{y}"/>"#, Num(width))?;
    }
    out.push_str("</g>");
    Ok(())
}

fn write_wall_preview(out: &mut String, rect: GridRect) -> fmt::Result {
    let (x, y) = rect.pixel_origin();
    write!(
        out,
        r#"<rect class="wall-preview" x="{}" y="{}" width="{}" height="{}" fill="{WALL_PREVIEW_FILL}" stroke="{WALL_PREVIEW_STROKE}" stroke-width="1" stroke-dasharray="3 3" pointer-events="none"/>"#,
        Num(x),
        Num(y),
        Num(rect.pixel_width()),
        Num(rect.pixel_height()),
    )
}

// =============================================================
// Elements
// =============================================================

fn element_class(el: &Element, ui: &UiState) -> String {
    let mut classes = Vec::new();
    if ui.is_builder() && ui.chair_edit.is_none() {
        if ui.tool == Tool::Select && !el.kind.is_wall() {
            classes.push("cursor-move");
        }
        if ui.tool == Tool::DeleteItem && !is_boundary_wall(&el.id) {
            classes.push("deletable");
        }
        if ui.is_selected(&el.id) {
            classes.push("builder-selected-item");
        }
    }
    classes.join(" ")
}

/// Base fill of an element: textures first, then its own colour.
fn element_fill(el: &Element) -> Cow<'_, str> {
    match (el.kind, el.texture) {
        (ElementKind::Door, _) => Cow::Borrowed("url(#woodPatternDark)"),
        (ElementKind::Kitchen, Some(Texture::Tile)) => Cow::Borrowed("url(#tilePattern)"),
        (_, Some(Texture::Metal)) => Cow::Borrowed("url(#metalPattern)"),
        _ => escape(el.color.as_deref().unwrap_or("rgb(200,200,200)")),
    }
}

fn write_element(out: &mut String, el: &Element, layout: &Layout, ui: &UiState) -> fmt::Result {
    let rect = el.rect();
    let (x, y) = rect.pixel_origin();
    let (w, h) = (rect.pixel_width(), rect.pixel_height());
    let rx = el.corner_radius_px();
    let stroke = escape(el.stroke_color.as_deref().unwrap_or("rgb(150,150,150)"));

    write!(
        out,
        r#"<g transform="translate({},{})" data-id="{}" data-type="element" data-kind="{}""#,
        Num(x),
        Num(y),
        escape(&el.id),
        el.kind.as_str(),
    )?;
    if !el.kind.is_flat() {
        out.push_str(r#" filter="url(#elementDepthEffect)""#);
    }
    let class = element_class(el, ui);
    if !class.is_empty() {
        write!(out, r#" class="{class}""#)?;
    }
    out.push('>');

    let depth = el.depth.unwrap_or(0.0);
    if !el.kind.is_flat() && depth > 0.0 {
        let shadow = escape(el.stroke_color.as_deref().unwrap_or("rgba(0,0,0,0.2)"));
        write!(
            out,
            r#"<rect width="{}" height="{}" fill="{shadow}" rx="{}" transform="translate({d},{d})"/>"#,
            Num(w),
            Num(h),
            Num(rx + depth * 0.5),
            d = Num(depth * 0.25),
        )?;
    }

    let fill = element_fill(el);
    if el.kind == ElementKind::Door {
        let min_side = w.min(h);
        let handle_x = w * if el.grid_width > 1 { 0.15 } else { 0.8 };
        write!(
            out,
            r#"<rect class="element-body" width="{}" height="{}" fill="{}" rx="{}"/>"#,
            Num(w),
            Num(h),
            escape(el.stroke_color.as_deref().unwrap_or("rgb(101, 67, 33)")),
            Num(rx),
        )?;
        write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}" stroke="rgba(0,0,0,0.2)" stroke-width="0.5" rx="{}"/>"#,
            Num(w * 0.07),
            Num(h * 0.05),
            Num(w * 0.86),
            Num(h * 0.9),
            Num(rx * 0.8),
        )?;
        write!(
            out,
            r#"<circle cx="{hx}" cy="{cy}" r="{}" fill="rgb(212, 175, 55)"/><circle cx="{hx}" cy="{cy}" r="{}" fill="rgb(184, 134, 11)"/>"#,
            Num(min_side * 0.06),
            Num(min_side * 0.04),
            hx = Num(handle_x),
            cy = Num(h / 2.0),
        )?;
    } else {
        write!(
            out,
            r#"<rect class="element-body" width="{}" height="{}" fill="{fill}" stroke="{stroke}" stroke-width="0.5" rx="{}"/>"#,
            Num(w),
            Num(h),
            Num(rx),
        )?;
    }

    match el.kind {
        ElementKind::Bar => write_bar(out, el, layout)?,
        ElementKind::Kitchen => write_kitchen(out, el)?,
        ElementKind::Window => write_window(out, el)?,
        _ => {}
    }
    write_element_caption(out, el)?;
    out.push_str("</g>");
    Ok(())
}

/// Icon and label of a plain element. Bars and kitchens place their own.
fn write_element_caption(out: &mut String, el: &Element) -> fmt::Result {
    if matches!(el.kind, ElementKind::Bar | ElementKind::Kitchen) {
        return Ok(());
    }
    let rect = el.rect();
    let (w, h) = (rect.pixel_width(), rect.pixel_height());
    let is_door = el.kind == ElementKind::Door;
    let (icon_size, font_size) = if is_door {
        ((w * 0.25).min(h * 0.25), (w * 0.2).min(h * 0.15))
    } else {
        (w.min(h) * 0.5, w.min(h) * 0.15)
    };
    let icon = el.icon_name.as_deref().filter(|name| glyph(name).is_some());
    let icon_color = el.icon_color.as_deref().or(el.label_color.as_deref()).unwrap_or("white");
    let label = el.label.as_deref().filter(|l| !l.is_empty());

    if let (false, Some(name)) = (is_door, icon) {
        let x = if label.is_some() { w * 0.15 } else { w * 0.5 - icon_size / 2.0 };
        let place = IconBox { x, y: h * 0.5 - icon_size / 2.0, size: icon_size, color: icon_color, stroke_width: 1.5 };
        write_icon(out, name, place)?;
    }

    if let Some(label) = label {
        let beside_icon = !is_door && icon.is_some();
        let y = if is_door {
            h * 0.25
        } else if beside_icon {
            h / 1.7
        } else {
            h / 2.0
        };
        write!(
            out,
            r#"<text x="{}" y="{}" dy="{}" text-anchor="middle" dominant-baseline="{}" font-size="{}" font-weight="600" letter-spacing="0.05em" fill="{}" filter="url(#textBg)" pointer-events="none">{}</text>"#,
            Num(w / 2.0),
            Num(y),
            Num(if beside_icon { icon_size * 0.6 } else { 0.0 }),
            if beside_icon { "auto" } else { "middle" },
            Num(font_size),
            escape(el.label_color.as_deref().unwrap_or("white")),
            escape(label),
        )?;
    }

    if let (true, Some(name)) = (is_door, icon) {
        let color = el.icon_color.as_deref().unwrap_or("white");
        let place = IconBox { x: w * 0.5 - icon_size / 2.0, y: h * 0.6, size: icon_size, color, stroke_width: 2.0 };
        write_icon(out, name, place)?;
    }
    Ok(())
}

fn write_window(out: &mut String, el: &Element) -> fmt::Result {
    let rect = el.rect();
    let (w, h) = (rect.pixel_width(), rect.pixel_height());
    let rx = el.corner_radius_px();
    write!(
        out,
        r#"<rect width="{}" height="{}" fill="none" stroke="{}" stroke-width="{}" rx="{}"/>"#,
        Num(w),
        Num(h),
        escape(el.stroke_color.as_deref().unwrap_or("rgb(100,100,100)")),
        Num(w * 0.1),
        Num(rx),
    )?;
    write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="url(#windowGlassGradient)" rx="{}" opacity="0.8"/>"#,
        Num(w * 0.08),
        Num(h * 0.08),
        Num(w * 0.84),
        Num(h * 0.84),
        Num(rx * 0.8),
    )?;
    write!(
        out,
        r#"<line x1="{l}" y1="{t}" x2="{r}" y2="{b}" stroke="rgba(255,255,255,0.3)" stroke-width="0.7"/><line x1="{l}" y1="{b}" x2="{r}" y2="{t}" stroke="rgba(255,255,255,0.2)" stroke-width="0.5"/>"#,
        l = Num(w * 0.15),
        t = Num(h * 0.15),
        r = Num(w * 0.85),
        b = Num(h * 0.85),
    )
}

/// Whether the row directly in front of a bar is free for stools: inside the
/// perimeter wall and not covered by any other element.
#[must_use]
pub fn bar_front_is_clear(bar: &Element, layout: &Layout) -> bool {
    let front_row = bar.grid_y + bar.grid_height;
    if front_row + 1 >= layout.grid_rows {
        return false;
    }
    let bar_end = bar.grid_x + bar.grid_width;
    !layout.elements.iter().any(|e| {
        e.id != bar.id && e.grid_y == front_row && e.grid_x < bar_end && e.grid_x + e.grid_width > bar.grid_x
    })
}

fn write_bar(out: &mut String, el: &Element, layout: &Layout) -> fmt::Result {
    let rect = el.rect();
    let (w, h) = (rect.pixel_width(), rect.pixel_height());
    let rx = el.corner_radius_px();

    if bar_front_is_clear(el, layout) {
        let stool_radius = CELL_SIZE_PX * 0.35;
        let stool_y = h + stool_radius * 0.7;
        let stools = (f64::from(el.grid_width) / 1.5).floor() as u32;
        for i in 1..=stools {
            let cx = w / f64::from(stools + 1) * f64::from(i);
            write!(
                out,
                r#"<circle class="stool" cx="{}" cy="{}" r="{}" fill="url(#woodPatternDark)" stroke="rgba(80,40,10,0.9)" stroke-width="1" filter="url(#elementDepthEffect)"/>"#,
                Num(cx),
                Num(stool_y),
                Num(stool_radius),
            )?;
        }
    }

    let back_fill = if el.texture == Some(Texture::Wood) { "url(#woodPatternDark)" } else { "rgb(80,40,20)" };
    write!(
        out,
        r#"<rect x="{o}" y="{o}" width="{}" height="{}" fill="rgba(0,0,0,0.1)" rx="{}"/>"#,
        Num(w + CELL_SIZE_PX * 0.1),
        Num(h * 0.2 + CELL_SIZE_PX * 0.1),
        Num(rx + 2.0),
        o = Num(-CELL_SIZE_PX * 0.05),
    )?;
    write!(
        out,
        r#"<rect width="{}" height="{}" fill="{back_fill}" rx="{}" stroke="rgba(0,0,0,0.2)" stroke-width="0.5"/>"#,
        Num(w),
        Num(h * 0.2),
        Num(rx),
    )?;
    write_bar_shelf(out, el.id.as_str(), w, h)?;

    write!(
        out,
        r#"<rect y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="1" rx="{}"/>"#,
        Num(h * 0.15),
        Num(w),
        Num(h * 0.85),
        escape(el.color.as_deref().unwrap_or("rgb(104,50,30)")),
        escape(el.stroke_color.as_deref().unwrap_or("rgb(77,42,10)")),
        Num(rx),
    )?;
    let lip = CELL_SIZE_PX * 0.1;
    write!(
        out,
        r#"<path d="M0,{top} L{lip},{top_in} L{right_in},{top_in} L{w},{top} Z" fill="rgba(255,255,255,0.1)"/><path d="M0,{h} L{lip},{bottom_out} L{right_in},{bottom_out} L{w},{h} Z" fill="rgba(0,0,0,0.1)"/>"#,
        top = Num(h * 0.15),
        top_in = Num(h * 0.15 - lip),
        right_in = Num(w - lip),
        bottom_out = Num(h + lip),
        lip = Num(lip),
        w = Num(w),
        h = Num(h),
    )?;

    let label_color = el.label_color.as_deref().unwrap_or("white");
    if let Some(name) = el.icon_name.as_deref() {
        let color = el.icon_color.as_deref().unwrap_or(label_color);
        let place = IconBox { x: w * 0.05, y: h * 0.3, size: w.min(h) * 0.35, color, stroke_width: 1.5 };
        write_icon(out, name, place)?;
    }
    if let Some(label) = el.label.as_deref().filter(|l| !l.is_empty()) {
        write!(
            out,
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="{}" font-weight="600" fill="{}" filter="url(#textBg)" pointer-events="none">{}</text>"#,
            Num(w / 2.0),
            Num(h * 0.7),
            Num(w.min(h) * 0.12),
            escape(label_color),
            escape(label),
        )?;
    }
    Ok(())
}

/// Bottles and glasses along the back counter, cycling bottle, glass, tall bottle.
fn write_bar_shelf(out: &mut String, id: &str, w: f64, h: f64) -> fmt::Result {
    const DRINK: &str = "rgba(70, 130, 180, 0.7)";
    const BOTTLE: &str = "rgba(220, 220, 220, 0.4)";
    let bottle_w = CELL_SIZE_PX * 0.18;
    let bottle_h = CELL_SIZE_PX * 0.6;
    let glass_r = CELL_SIZE_PX * 0.14;
    let per_row = ((w / (bottle_w * 1.5)).floor() as u32).max(1);
    let spacing = w / f64::from(per_row + 1);
    let shelf_y = h * 0.12;

    write!(out, r#"<g class="bar-shelf" data-bar="{}">"#, escape(id))?;
    for i in 0..per_row {
        let x = spacing * f64::from(i + 1);
        if i % 3 == 1 {
            let r = glass_r;
            write!(
                out,
                r#"<g transform="translate({},{})"><path d="M {nl} 0 Q 0 {} {nr} 0 L {} {} Q 0 {} {} {} Z" fill="{DRINK}" stroke="rgba(150,200,255,0.5)" stroke-width="0.5"/><ellipse cx="0" cy="{}" rx="{}" ry="{}" fill="none" stroke="rgba(150,200,255,0.5)" stroke-width="0.5"/></g>"#,
                Num(x),
                Num(shelf_y - r * 1.6),
                Num(r * 0.15),
                Num(r * 0.5),
                Num(r * 1.3),
                Num(r * 1.6),
                Num(-r * 0.5),
                Num(r * 1.3),
                Num(r * 1.35),
                Num(r * 0.55),
                Num(r * 0.15),
                nl = Num(-r * 0.7),
                nr = Num(r * 0.7),
            )?;
        } else {
            let bh = if i % 3 == 2 { bottle_h * 1.2 } else { bottle_h };
            write!(
                out,
                r#"<g transform="translate({},{})"><rect width="{bw}" height="{bh}" fill="{BOTTLE}" rx="{}" stroke="rgba(180,180,180,0.5)" stroke-width="0.5"/><rect x="{}" y="{}" width="{}" height="{}" fill="{DRINK}" rx="{}"/><circle cx="{}" cy="{}" r="{}" fill="rgba(50,50,50,0.7)"/></g>"#,
                Num(x - bottle_w / 2.0),
                Num(shelf_y - bh),
                Num(bottle_w * 0.2),
                Num(bottle_w * 0.1),
                Num(bh * 0.3),
                Num(bottle_w * 0.8),
                Num(bh * 0.65),
                Num(bottle_w * 0.15),
                Num(bottle_w * 0.5),
                Num(-bh * 0.1),
                Num(bottle_w * 0.22),
                bw = Num(bottle_w),
                bh = Num(bh),
            )?;
        }
    }
    out.push_str("</g>");
    Ok(())
}

fn write_kitchen(out: &mut String, el: &Element) -> fmt::Result {
    let rect = el.rect();
    let (w, h) = (rect.pixel_width(), rect.pixel_height());
    let counter = CELL_SIZE_PX * 0.8;
    let appliance = CELL_SIZE_PX * 0.7;

    write!(
        out,
        r#"<rect width="{}" height="{c}" fill="url(#metalPattern)" stroke="rgb(120,120,120)" stroke-width="0.5"/><rect y="{c}" width="{c}" height="{}" fill="url(#metalPattern)" stroke="rgb(120,120,120)" stroke-width="0.5"/>"#,
        Num(w),
        Num((h - counter).max(0.0)),
        c = Num(counter),
    )?;
    write!(
        out,
        r#"<rect class="sink" x="{}" y="{}" width="{}" height="{}" fill="rgb(200,205,210)" rx="2"/><circle cx="{}" cy="{}" r="{}" fill="rgb(100,100,100)"/>"#,
        Num(counter * 0.2),
        Num(counter * 0.15),
        Num(counter * 1.2),
        Num(counter * 0.6),
        Num(counter * 1.4 - CELL_SIZE_PX * 0.1),
        Num(counter * 0.45),
        Num(CELL_SIZE_PX * 0.05),
    )?;

    let hob_x = w - counter - appliance * 1.5;
    let hob_y = counter * 0.5;
    write!(
        out,
        r#"<rect class="hob" x="{}" y="{}" width="{}" height="{}" fill="rgb(100,100,100)" rx="1"/>"#,
        Num(hob_x),
        Num(hob_y),
        Num(appliance * 1.5),
        Num(appliance * 1.2),
    )?;
    for (fx, fy) in [(0.3, 0.3), (0.7, 0.3), (0.3, 0.7), (0.7, 0.7)] {
        write!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="rgb(50,50,50)"/>"#,
            Num(hob_x + appliance * fx),
            Num(hob_y + appliance * fy),
            Num(appliance * 0.15),
        )?;
    }

    if el.grid_width > 3 && el.grid_height > 3 {
        write!(
            out,
            r#"<rect class="prep-island" x="{}" y="{}" width="{}" height="{}" fill="url(#metalPatternLight)" rx="2" stroke="rgb(120,120,120)" stroke-width="0.5"/>"#,
            Num(w * 0.3),
            Num(h * 0.4),
            Num(w * 0.4),
            Num(h * 0.3),
        )?;
    }

    let label_color = el.label_color.as_deref().unwrap_or("black");
    if let Some(name) = el.icon_name.as_deref() {
        let color = el.icon_color.as_deref().or(el.label_color.as_deref()).unwrap_or("white");
        let place = IconBox {
            x: w - CELL_SIZE_PX * 1.5,
            y: h - CELL_SIZE_PX * 1.5,
            size: CELL_SIZE_PX * 1.2,
            color,
            stroke_width: 1.5,
        };
        write_icon(out, name, place)?;
    }
    if let Some(label) = el.label.as_deref().filter(|l| !l.is_empty()) {
        write!(
            out,
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="{}" font-weight="600" fill="{}" pointer-events="none">{}</text>"#,
            Num(w / 2.0),
            Num(h - CELL_SIZE_PX * 0.5),
            Num(w.min(h) * 0.08),
            escape(label_color),
            escape(label),
        )?;
    }
    Ok(())
}

// =============================================================
// Tables
// =============================================================

/// Colours of one table for its current style and booking selection.
struct TablePalette {
    fill: &'static str,
    stroke: &'static str,
    leg: &'static str,
    text: &'static str,
    chair_fill: &'static str,
    chair_stroke: &'static str,
}

impl TablePalette {
    fn new(style: TableStyle, picked: bool) -> Self {
        if picked {
            return Self {
                fill: "rgb(147 197 253)",
                stroke: "rgb(147 197 253)",
                leg: "rgb(96 165 250)",
                text: "rgb(30 64 175)",
                chair_fill: "rgb(219 234 254)",
                chair_stroke: "rgb(96 165 250)",
            };
        }
        Self {
            fill: if style == TableStyle::Wood { "url(#woodPattern)" } else { "rgb(209 213 219)" },
            stroke: "rgb(107 114 128)",
            leg: "rgb(156 163 175)",
            text: "rgb(31 41 55)",
            chair_fill: "rgb(240 240 240)",
            chair_stroke: "rgb(140 140 140)",
        }
    }
}

fn table_class(table: &Table, ui: &UiState, editing: bool) -> String {
    let mut class = String::from(if ui.is_builder() && ui.tool == Tool::Select && !editing {
        "cursor-move"
    } else if editing {
        "chair-editing"
    } else {
        "cursor-pointer"
    });
    if !ui.is_builder() && table.is_booked {
        class.push_str(" cursor-not-allowed");
    }
    if ui.is_builder() && ui.is_selected(&table.id) && !editing {
        class.push_str(" builder-selected-item");
    }
    class
}

fn write_table(out: &mut String, table: &Table, ui: &UiState) -> fmt::Result {
    let rect = table.rect();
    let (cx, cy) = rect.pixel_center();
    let (w, h) = (rect.pixel_width(), rect.pixel_height());
    let min_side = w.min(h);
    let view = !ui.is_builder();
    let editing = ui.is_chair_editing(&table.id);
    let picked = view && ui.is_selected(&table.id);
    let booked_view = view && table.is_booked;
    let builder_selected = ui.is_builder() && ui.is_selected(&table.id) && !editing;
    let palette = TablePalette::new(table.style(), picked);

    write!(
        out,
        r#"<g transform="translate({},{})" data-id="{}" data-type="table" class="{}""#,
        Num(cx),
        Num(cy),
        escape(&table.id),
        table_class(table, ui, editing),
    )?;
    if booked_view {
        write!(out, r#" opacity="{BOOKED_OPACITY}" filter="url(#lockedTableShadowAdvanced)""#)?;
    }
    out.push('>');

    let chair = chair_pixel_size(table.grid_width, table.grid_height);
    for slot in chair_slots(table) {
        if slot.visible || editing {
            write_chair(out, &slot, chair, &palette, editing)?;
        }
    }

    let (stroke, stroke_width) =
        if builder_selected { (SELECTED_BUILDER_STROKE, 2.0) } else { (palette.stroke, 1.5) };
    let inset = h * 0.12;
    match table.shape {
        TableShape::Circle => write!(
            out,
            r#"<circle class="leg" cx="0" cy="{}" r="{}" fill="{}" opacity="0.6"/><circle class="table-top" cx="0" cy="0" r="{}" fill="{}" stroke="{stroke}" stroke-width="{}"/>"#,
            Num(inset * 0.6),
            Num(w / 2.0 * 0.95),
            palette.leg,
            Num(w / 2.0),
            palette.fill,
            Num(stroke_width),
        )?,
        TableShape::Square | TableShape::Rectangle => write!(
            out,
            r#"<rect class="leg" x="{}" y="{}" width="{}" height="{}" fill="{}" rx="{}" opacity="0.6"/><rect class="table-top" x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{stroke}" stroke-width="{}" rx="{}"/>"#,
            Num(-w / 2.0 + inset * 0.1),
            Num(-h / 2.0 + inset * 0.1),
            Num(w - inset * 0.2),
            Num(h - inset * 0.2),
            palette.leg,
            Num(min_side * 0.06),
            Num(-w / 2.0),
            Num(-h / 2.0),
            Num(w),
            Num(h),
            palette.fill,
            Num(stroke_width),
            Num(min_side * 0.08),
        )?,
    }

    write_table_caption(out, table, min_side, &palette, booked_view)?;

    let icon_size = min_side * 0.3;
    let corner = -icon_size / 2.0;
    if booked_view {
        let place = IconBox { x: corner, y: corner, size: icon_size, color: "rgb(55 65 81)", stroke_width: 1.5 };
        write_icon(out, "Lock", place)?;
    } else if picked {
        let place = IconBox { x: corner, y: corner, size: icon_size, color: "rgb(22 163 74)", stroke_width: 1.5 };
        write_icon(out, "Unlock", place)?;
    }
    out.push_str("</g>");
    Ok(())
}

/// Label above the centre and the visible seat count below it.
fn write_table_caption(
    out: &mut String,
    table: &Table,
    min_side: f64,
    palette: &TablePalette,
    booked_view: bool,
) -> fmt::Result {
    out.push_str(r#"<g class="table-caption" pointer-events="none">"#);
    let label = table.label.as_deref().filter(|l| !l.is_empty());
    if let Some(label) = label {
        write!(
            out,
            r#"<text x="0" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="{}" font-weight="600" fill="{}">{}</text>"#,
            Num(-min_side * 0.18),
            Num(min_side * 0.2),
            if booked_view { "rgb(100,100,100)" } else { palette.text },
            escape(label),
        )?;
    }

    let count_y = if label.is_some() { min_side * 0.16 } else { 0.0 };
    let font_size = min_side * if label.is_some() { 0.17 } else { 0.23 };
    let color = if booked_view { "rgb(120,120,120)" } else { palette.text };
    let icon_size = min_side * 0.14;
    let place = IconBox { x: -icon_size - 1.0, y: count_y - icon_size / 2.0, size: icon_size, color, stroke_width: 2.0 };
    write_icon(out, "Users", place)?;
    write!(
        out,
        r#"<text class="seat-count" x="1" y="{}" text-anchor="start" dominant-baseline="middle" font-size="{}" font-weight="500" fill="{color}">{}</text>"#,
        Num(count_y),
        Num(font_size),
        visible_seat_count(table),
    )?;
    out.push_str("</g>");
    Ok(())
}

fn write_chair(out: &mut String, slot: &ChairSlot, size: f64, palette: &TablePalette, editing: bool) -> fmt::Result {
    let chair_w = size * 0.8;
    let back_h = chair_w * 0.35;
    let seat_r = chair_w / 2.0;
    let half = chair_w / 2.0;

    write!(
        out,
        r#"<g class="chair" transform="translate({},{}) rotate({})" data-chair-index="{}""#,
        Num(slot.x),
        Num(slot.y),
        Num(slot.rotation),
        slot.index,
    )?;
    if editing && !slot.visible {
        out.push_str(r#" opacity="0.3""#);
    }
    out.push('>');
    write!(
        out,
        r#"<rect x="{n}" y="{n}" width="{cw}" height="{cw}" fill="{fill}" stroke="{stroke}" stroke-width="0.5" rx="{r}" ry="{r}"/><rect x="{n}" y="{}" width="{cw}" height="{}" fill="{fill}" stroke="{stroke}" stroke-width="0.5" rx="{}"/><circle cx="0" cy="0" r="{}" fill="rgba(0,0,0,0.05)"/>"#,
        Num(-half - back_h),
        Num(back_h),
        Num(CELL_SIZE_PX * 0.05),
        Num(chair_w * 0.35),
        n = Num(-half),
        cw = Num(chair_w),
        r = Num(seat_r),
        fill = palette.chair_fill,
        stroke = palette.chair_stroke,
    )?;
    if editing {
        write!(
            out,
            r#"<rect class="chair-edit-highlight" x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{CHAIR_EDIT_HIGHLIGHT}" stroke-width="2" rx="{r}" ry="{r}" stroke-dasharray="3 2"/>"#,
            Num(-half - 2.0),
            Num(-half - back_h - 2.0),
            Num(chair_w + 4.0),
            Num(chair_w + back_h + 4.0),
            r = Num(seat_r + 2.0),
        )?;
    }
    out.push_str("</g>");
    Ok(())
}
