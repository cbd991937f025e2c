//! Layer-based grouping of SVG nodes.
//!
//! Figures are exported in a fixed z-order regardless of the order in which
//! artists were recorded: the background first, then the axes frame, then
//! fills, and text on top so labels are never covered by a later rectangle.

use std::collections::BTreeMap;

use ::svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn ::svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Figure background.
    Background,
    /// Axes frame.
    Frame,
    /// Filled rectangles.
    Fill,
    /// Rectangle and column labels.
    Text,
}

impl RenderLayer {
    /// Returns the name written to the group's `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Frame => "frame",
            Self::Fill => "fill",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    groups: BTreeMap<RenderLayer, svg_element::Group>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to `layer`, after the nodes already in it.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        let group = self
            .groups
            .remove(&layer)
            .unwrap_or_else(|| svg_element::Group::new().set("data-layer", layer.name()));
        self.groups.insert(layer, group.add(node));
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Consumes the output, yielding one `<g data-layer="…">` per non-empty
    /// layer, bottom layer first.
    pub fn render(self) -> Vec<SvgNode> {
        self.groups
            .into_values()
            .map(|group| Box::new(group) as SvgNode)
            .collect()
    }
}
