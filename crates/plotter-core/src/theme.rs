// File: crates/plotter-core/src/theme.rs
// Summary: Colors, fonts and stroke widths used by the paint pipeline.

use crate::text::Font;

/// Backend-neutral 8-bit ARGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub tick_label: Color,
    pub axis_title: Color,
    /// Stroke used around the whole surface after a fit or full redraw.
    pub surface_border: Color,
    /// Ink for user primitives (points, lines, functions, text).
    pub ink: Color,
    pub tick_font: Font,
    pub title_font: Font,
    pub grid_width: f32,
    pub axis_width: f32,
    pub border_width: f32,
    pub debug_border_width: f32,
    pub primitive_width: f32,
}

const HELVETICA: &str = "Helvetica";

impl Theme {
    /// The palette plots have always been drawn with: light paper, grey grid, black ink.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: Color::from_rgb(0xF8, 0xF8, 0xF8),
            grid: Color::from_rgb(0xE0, 0xE0, 0xE0),
            axis_line: Color::from_rgb(0, 0, 0),
            tick_label: Color::from_rgb(0, 0, 0),
            axis_title: Color::from_rgb(0, 0, 0),
            surface_border: Color::from_rgb(0, 0, 0xFF),
            ink: Color::from_rgb(0, 0, 0),
            tick_font: Font::new(HELVETICA, 16.0),
            title_font: Font::new(HELVETICA, 24.0),
            grid_width: 2.0,
            axis_width: 1.0,
            border_width: 2.0,
            debug_border_width: 0.5,
            primitive_width: 1.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            grid: Color::from_rgb(40, 40, 45),
            axis_line: Color::from_rgb(180, 180, 190),
            tick_label: Color::from_rgb(150, 150, 160),
            axis_title: Color::from_rgb(235, 235, 245),
            surface_border: Color::from_rgb(64, 160, 255),
            ink: Color::from_rgb(64, 160, 255),
            ..Self::classic()
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_rgb(0x00, 0x00, 0x00),
            grid: Color::from_rgb(0x22, 0x22, 0x22),
            axis_line: Color::from_rgb(0xff, 0xff, 0xff),
            tick_label: Color::from_rgb(0xcc, 0xcc, 0xcc),
            axis_title: Color::from_rgb(0xff, 0xff, 0xff),
            surface_border: Color::from_rgb(0xff, 0xff, 0x00),
            ink: Color::from_rgb(0x00, 0xff, 0xff),
            axis_width: 2.0,
            ..Self::classic()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::classic)
}
