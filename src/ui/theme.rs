use fltk::enums::{Color, Font};

use crate::app::domain::customization::{Opacity, Rgb};

/// Tote canvas color behind the overlay text.
pub const PREVIEW_BG: Rgb = Rgb(0xf3, 0xe9, 0xd2);
pub const ADDED_GREEN: Rgb = Rgb(0x4c, 0xaf, 0x50);
pub const ACCENT: Rgb = Rgb(0x26, 0x46, 0x53);
pub const BACKDROP: Rgb = Rgb(0x3a, 0x3a, 0x3a);

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Overlay ink: the chosen color, faded toward the canvas when dimmed.
pub fn overlay_color(hex: &str, opacity: Opacity) -> Color {
    let ink = Rgb::parse_hex(hex).unwrap_or(Rgb(0x33, 0x33, 0x33));
    to_color(ink.blend(PREVIEW_BG, opacity.alpha()))
}

/// FLTK treats '@' as a symbol prefix; double it to print it literally.
pub fn escape_label(text: &str) -> String {
    text.replace('@', "@@")
}

/// Map a configured family name onto an FLTK font.
pub fn resolve_font(family: &str) -> Font {
    match family {
        "Helvetica" => Font::Helvetica,
        "Helvetica Bold" => Font::HelveticaBold,
        "Helvetica Italic" => Font::HelveticaItalic,
        "Times" => Font::Times,
        "Times Bold" => Font::TimesBold,
        "Times Italic" => Font::TimesItalic,
        "Courier" => Font::Courier,
        "Courier Bold" => Font::CourierBold,
        "Screen" => Font::Screen,
        // Falls back to Helvetica for unknown names
        other => Font::by_name(other),
    }
}
