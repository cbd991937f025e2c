//! TikZ directives emitted by the markup backend.

use std::fmt;

use super::number::Number;

/// One line of TikZ output.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// `\begin{tikzpicture}[scale=…]`
    BeginPicture { scale: f64 },

    /// A filled, labelled rectangle:
    /// `\filldraw[draw=black, fill=…](x1,y1) rectangle (x2,y2) node[midway] {…};`
    FillDraw {
        bottom_left: (Number, Number),
        top_right: (Number, Number),
        label: String,
        color: String,
        tint: u8,
        /// `None` draws at full opacity and emits no modifier.
        opacity: Option<f64>,
    },

    /// A free-standing label: `\node at (x,y) {…};`
    Node { at: (Number, Number), label: String },

    /// An empty separator line.
    Blank,

    /// `\end{tikzpicture}`
    EndPicture,
}

impl Directive {
    pub fn is_fill_draw(&self) -> bool {
        matches!(self, Self::FillDraw { .. })
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Self::Node { .. })
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeginPicture { scale } => write!(f, "\\begin{{tikzpicture}}[scale={scale}]"),
            Self::FillDraw {
                bottom_left: (x1, y1),
                top_right: (x2, y2),
                label,
                color,
                tint,
                opacity,
            } => {
                write!(f, "\t\\filldraw[draw=black, fill={color}!{tint}")?;
                if let Some(opacity) = opacity {
                    write!(f, ", opacity={opacity}")?;
                }
                write!(
                    f,
                    "]({x1},{y1}) rectangle ({x2},{y2}) node[midway] {{{label}}};"
                )
            }
            Self::Node { at: (x, y), label } => write!(f, "\t\\node at ({x},{y}) {{{label}}};"),
            Self::Blank => Ok(()),
            Self::EndPicture => f.write_str("\\end{tikzpicture}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_picture_integral_scale() {
        let directive = Directive::BeginPicture { scale: 8.0 };
        assert_eq!(directive.to_string(), "\\begin{tikzpicture}[scale=8]");
    }

    #[test]
    fn test_fill_draw_full_opacity() {
        let directive = Directive::FillDraw {
            bottom_left: (Number::Origin, Number::Origin),
            top_right: (Number::Float(0.5), Number::Float(0.092)),
            label: "1".to_string(),
            color: "red".to_string(),
            tint: 50,
            opacity: None,
        };

        assert_eq!(
            directive.to_string(),
            "\t\\filldraw[draw=black, fill=red!50](0,0) rectangle (0.5,0.092) node[midway] {1};"
        );
    }

    #[test]
    fn test_fill_draw_dimmed() {
        let directive = Directive::FillDraw {
            bottom_left: (Number::Float(0.5), Number::Float(0.063)),
            top_right: (Number::Float(0.625), Number::Float(0.313)),
            label: "2".to_string(),
            color: "green".to_string(),
            tint: 50,
            opacity: Some(0.15),
        };

        assert_eq!(
            directive.to_string(),
            "\t\\filldraw[draw=black, fill=green!50, opacity=0.15](0.5,0.063) rectangle (0.625,0.313) node[midway] {2};"
        );
    }

    #[test]
    fn test_node() {
        let directive = Directive::Node {
            at: (Number::Float(0.25), Number::Float(-0.0625)),
            label: "$h_{1}$".to_string(),
        };
        assert_eq!(directive.to_string(), "\t\\node at (0.25,-0.0625) {$h_{1}$};");
    }

    #[test]
    fn test_blank_and_end() {
        assert_eq!(Directive::Blank.to_string(), "");
        assert_eq!(Directive::EndPicture.to_string(), "\\end{tikzpicture}");
    }
}
