use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgLayoutThemes,
    /// Size of one canvas cell in SVG user units
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
    /// Draws the remaining maximal free rectangles on top of the layout
    #[serde(default)]
    pub draw_free_rects: bool,
    /// Prints the item id in the center of each placed item
    #[serde(default = "default_label_items")]
    pub label_items: bool,
}

fn default_cell_size() -> f32 {
    16.0
}

fn default_label_items() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutThemes::default(),
            cell_size: default_cell_size(),
            draw_free_rects: false,
            label_items: default_label_items(),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum SvgLayoutThemes {
    #[default]
    EarthTones,
    Gray,
}

impl SvgLayoutThemes {
    pub fn get_theme(&self) -> SvgLayoutTheme {
        match self {
            SvgLayoutThemes::EarthTones => EARTH_TONES_THEME,
            SvgLayoutThemes::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub canvas_fill: &'static str,
    /// Item fills are cycled through by item id
    pub item_fills: [&'static str; 6],
    pub free_rect_stroke: &'static str,
    pub free_rect_opacity: f32,
}

pub static EARTH_TONES_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.0,
    canvas_fill: "#CC824A",
    item_fills: [
        "#FFC879", //LIGHT ORANGE
        "#E8AA5E", //OCHRE
        "#D19C62", //TAN
        "#F2B880", //SAND
        "#C98D52", //CLAY
        "#E3B778", //WHEAT
    ],
    free_rect_stroke: "#2D2D2D",
    free_rect_opacity: 0.4,
};

pub static GRAY_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.5,
    canvas_fill: "#C3C3C3",
    item_fills: ["#8F8F8F"; 6],
    free_rect_stroke: "#636363",
    free_rect_opacity: 0.9,
};
