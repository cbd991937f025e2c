//! Squaregram Core Types and Definitions
//!
//! This crate provides the foundational types shared by every Squaregram
//! backend. It includes:
//!
//! - **Steps**: The layout kernel turning widths or heights into intervals ([`steps`] module)
//! - **Geometry**: Points and bounds in diagram space ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Diagram**: The square diagram input model ([`diagram::DiagramSpec`])
//! - **Layout**: Column-by-column cell traversal and emphasis rules ([`layout`] module)

pub mod color;
pub mod diagram;
pub mod geometry;
pub mod layout;
pub mod steps;
