//! Plot colors.
//!
//! [`Color`] wraps the `DynamicColor` type from the color crate. The plot
//! backend parses every palette entry into a [`Color`], so its names follow
//! the CSS named-color namespace. TikZ colors are xcolor names and are never
//! parsed.

use std::fmt;

use color::DynamicColor;

/// A parsed CSS color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parses a CSS color such as `"#ff8800"`, `"rgb(255, 0, 0)"` or `"khaki"`.
    ///
    /// # Errors
    ///
    /// Returns a message naming the rejected input.
    ///
    /// ```
    /// use squaregram_core::color::Color;
    ///
    /// assert!(Color::new("lightseagreen").is_ok());
    /// assert!(Color::new("red!50").is_err());
    /// ```
    pub fn new(css: &str) -> Result<Self, String> {
        css.parse::<DynamicColor>()
            .map(|color| Self { color })
            .map_err(|err| format!("invalid color `{css}`: {err}"))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_and_hex_colors_parse() {
        assert!(Color::new("#ff0000").is_ok());
        assert_eq!(Color::new("tomato").unwrap(), Color::new("tomato").unwrap());
        assert_ne!(Color::new("tomato").unwrap(), Color::new("khaki").unwrap());
    }

    #[test]
    fn test_xcolor_expressions_are_rejected() {
        let err = Color::new("olive!50").unwrap_err();
        assert!(err.contains("olive!50"));
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default().to_string(), "black");
    }

    #[test]
    fn test_svg_value_is_css() {
        let value = svg::node::Value::from(&Color::new("orange").unwrap());
        assert_eq!(value.to_string(), "orange");
    }
}
