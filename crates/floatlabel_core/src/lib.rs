//! floatlabel Core
//!
//! Foundational types shared by the floatlabel crates:
//!
//! - **Color**: RGBA colors with hex construction and interpolation
//! - **Style**: Flattened view/text style properties with cascading merge
//! - **Node**: Declarative render tree handed to the host framework
//! - **Platform**: Compile-time discriminator for the rendering target
//! - **Errors**: Error types for owner-supplied callbacks
//!
//! Layout is not computed here. A [`Node`] tree only describes what to
//! render and with which style; the host UI framework lays it out.
//!
//! # Example
//!
//! ```rust
//! use floatlabel_core::{Color, Node, Style};
//!
//! let label = Node::text("Email").style(Style::new().font_size(16.0).color(Color::from_hex(0xB1B1B1)));
//! let root = Node::view().child(label);
//!
//! assert_eq!(root.children().len(), 1);
//! ```

pub mod color;
pub mod error;
pub mod node;
pub mod platform;
pub mod style;

pub use color::Color;
pub use error::{CallbackError, CallbackResult};
pub use node::{ImageSource, Node, NodeKind, TextInputNode};
pub use platform::Platform;
pub use style::{
    AlignItems, EdgeInsets, FlexDirection, JustifyContent, Position, ResizeMode, Style,
    TextAlignVertical,
};
