//! Theme constants for the Mystic Battle GUI

use egui::Color32;

use crate::Element;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(46, 40, 58);
pub const CELL_EMPTY: Color32 = Color32::from_rgb(66, 60, 82);

// Element tiles
pub const FIRE: Color32 = Color32::from_rgb(226, 88, 52);
pub const WATER: Color32 = Color32::from_rgb(58, 130, 220);
pub const EARTH: Color32 = Color32::from_rgb(140, 106, 60);
pub const AIR: Color32 = Color32::from_rgb(200, 222, 232);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 210, 70);
pub const SCORE_POSITIVE: Color32 = Color32::from_rgb(80, 200, 120);
pub const SCORE_NEGATIVE: Color32 = Color32::from_rgb(255, 90, 90);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 90)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const CELL_GAP: f32 = 6.0;
pub const TILE_ROUNDING: u8 = 6;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

/// Tile color for an element
pub fn element_color(element: Element) -> Color32 {
    match element {
        Element::Fire => FIRE,
        Element::Water => WATER,
        Element::Earth => EARTH,
        Element::Air => AIR,
    }
}

/// Label color readable on top of an element tile
pub fn element_text_color(element: Element) -> Color32 {
    match element {
        Element::Air => Color32::from_rgb(30, 30, 35),
        _ => TEXT_PRIMARY,
    }
}

/// Color for a (signed) score
pub fn score_color(score: i32) -> Color32 {
    match score.signum() {
        1 => SCORE_POSITIVE,
        -1 => SCORE_NEGATIVE,
        _ => TEXT_SECONDARY,
    }
}
