//! Drawing calls recorded on an [`Axes`](super::Axes).

use squaregram_core::{
    color::Color,
    geometry::{Bounds, Point},
    steps::Interval,
};

/// Horizontal anchor of a text artist relative to its position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl HorizontalAlignment {
    /// The SVG `text-anchor` value.
    pub fn text_anchor(self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "middle",
            Self::Right => "end",
        }
    }
}

/// Vertical anchor of a text artist relative to its position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    Center,
    #[default]
    Baseline,
    Bottom,
}

impl VerticalAlignment {
    /// The SVG `dominant-baseline` value, `None` for the alphabetic default.
    pub fn dominant_baseline(self) -> Option<&'static str> {
        match self {
            Self::Top => Some("hanging"),
            Self::Center => Some("central"),
            Self::Baseline => None,
            Self::Bottom => Some("text-after-edge"),
        }
    }
}

/// A filled region between two horizontal lines over an x span.
#[derive(Debug, Clone, PartialEq)]
pub struct FillBetween {
    x: Interval,
    y: Interval,
    color: Color,
    edge_color: Color,
    alpha: f32,
}

impl FillBetween {
    /// Creates a fill over `x × y` with a black edge.
    pub fn new(x: Interval, y: Interval, color: Color, alpha: f32) -> Self {
        Self {
            x,
            y,
            color,
            edge_color: Color::default(),
            alpha,
        }
    }

    pub fn with_edge_color(mut self, edge_color: Color) -> Self {
        self.edge_color = edge_color;
        self
    }

    pub fn x(&self) -> Interval {
        self.x
    }

    pub fn y(&self) -> Interval {
        self.y
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn edge_color(&self) -> Color {
        self.edge_color
    }

    /// Opacity applied to both face and edge.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_intervals(self.x, self.y)
    }
}

/// A text label placed in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    position: Point,
    content: String,
    font_size: f32,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
}

impl Text {
    /// Creates a left/baseline aligned text at `position`.
    pub fn new(position: Point, content: impl Into<String>, font_size: f32) -> Self {
        Self {
            position,
            content: content.into(),
            font_size,
            horizontal: HorizontalAlignment::default(),
            vertical: VerticalAlignment::default(),
        }
    }

    pub fn with_horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal = alignment;
        self
    }

    pub fn with_vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical = alignment;
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Font size in points.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.horizontal
    }

    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.vertical
    }
}

/// Any drawing call recorded on the axes.
#[derive(Debug, Clone, PartialEq)]
pub enum Artist {
    Fill(FillBetween),
    Text(Text),
}

impl Artist {
    pub fn as_fill(&self) -> Option<&FillBetween> {
        match self {
            Self::Fill(fill) => Some(fill),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            Self::Fill(_) => None,
        }
    }
}
