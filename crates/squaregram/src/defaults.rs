//! Default labels and palettes of the two backends.
//!
//! The backends disagree on every default: TikZ numbers rectangles from 1 and
//! writes column labels in math mode, the plot numbers rectangles from 0 and
//! uses plain column numbers. Palettes are fixed; positions beyond their
//! length are not drawn.

use squaregram_core::diagram::DefaultScheme;

/// xcolor names understood by TikZ without extra packages.
pub const MARKUP_PALETTE: [&str; 12] = [
    "red", "green", "blue", "yellow", "magenta", "olive", "violet", "brown", "teal", "orange",
    "purple", "cyan",
];

/// CSS color names for the plotting surface.
pub const PLOT_PALETTE: [&str; 16] = [
    "orange",
    "lightgreen",
    "yellow",
    "hotpink",
    "lightseagreen",
    "tomato",
    "beige",
    "khaki",
    "cyan",
    "lightsalmon",
    "thistle",
    "gainsboro",
    "lavenderblush",
    "goldenrod",
    "lightskyblue",
    "greenyellow",
];

/// Defaults of the TikZ backend: `$h_{1}$ …` columns, `"1" …` rectangles.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupDefaults;

impl DefaultScheme for MarkupDefaults {
    fn column_labels(&self, count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("$h_{{{i}}}$")).collect()
    }

    fn rect_labels(&self, count: usize) -> Vec<String> {
        (1..=count).map(|i| i.to_string()).collect()
    }

    fn palette(&self) -> &'static [&'static str] {
        &MARKUP_PALETTE
    }
}

/// Defaults of the plot backend: `"1" …` columns, `"0" …` rectangles.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotDefaults;

impl DefaultScheme for PlotDefaults {
    fn column_labels(&self, count: usize) -> Vec<String> {
        (1..=count).map(|i| i.to_string()).collect()
    }

    fn rect_labels(&self, count: usize) -> Vec<String> {
        (0..count).map(|i| i.to_string()).collect()
    }

    fn palette(&self) -> &'static [&'static str] {
        &PLOT_PALETTE
    }
}
