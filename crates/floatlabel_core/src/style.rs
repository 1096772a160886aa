//! Style properties
//!
//! A [`Style`] is a flat bag of optional properties. Unset properties fall
//! through to whatever the host framework uses by default. Styles cascade
//! with [`Style::merge`]: properties set on the right-hand side win, the
//! way a list of style objects is flattened left to right.

use crate::color::Color;

/// Main axis of a flex container
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlexDirection {
    #[default]
    Column,
    Row,
}

/// Distribution along the main axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JustifyContent {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
}

/// Alignment along the cross axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignItems {
    #[default]
    Stretch,
    Start,
    Center,
    End,
}

/// Positioning scheme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    #[default]
    Relative,
    Absolute,
}

/// Vertical alignment of text inside a multi-line input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlignVertical {
    #[default]
    Auto,
    Top,
    Center,
    Bottom,
}

/// How an image is scaled into its box
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResizeMode {
    #[default]
    Cover,
    Contain,
    Stretch,
    Center,
}

/// Insets for each edge of a box
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets::all(0.0);

    pub const fn new(top: f32, left: f32, right: f32, bottom: f32) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Same inset on the top and bottom edges, another on left and right
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, horizontal, vertical)
    }
}

macro_rules! style_properties {
    ($($(#[$meta:meta])* $field:ident: $ty:ty),* $(,)?) => {
        /// Flattened style of a render node
        #[derive(Clone, Debug, PartialEq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(default))]
        pub struct Style {
            $($(#[$meta])* pub $field: Option<$ty>,)*
        }

        impl Style {
            $(
                $(#[$meta])*
                pub fn $field(mut self, value: $ty) -> Self {
                    self.$field = Some(value);
                    self
                }
            )*

            /// Cascade `other` on top of `self`
            ///
            /// Every property set in `other` replaces the one in `self`.
            pub fn merge(mut self, other: &Style) -> Self {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field.clone();
                    }
                )*
                self
            }

            /// Whether no property is set
            pub fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())*
            }
        }
    };
}

style_properties! {
    flex: f32,
    flex_grow: f32,
    flex_direction: FlexDirection,
    justify_content: JustifyContent,
    align_items: AlignItems,
    position: Position,
    top: f32,
    left: f32,
    width: f32,
    height: f32,
    padding_top: f32,
    padding_left: f32,
    padding_right: f32,
    padding_bottom: f32,
    margin_top: f32,
    margin_left: f32,
    margin_right: f32,
    opacity: f32,
    background_color: Color,
    border_bottom_width: f32,
    border_color: Color,
    /// Focus ring width; zero suppresses the browser outline
    outline_width: f32,
    /// Text color
    color: Color,
    font_size: f32,
    text_align_vertical: TextAlignVertical,
    resize_mode: ResizeMode,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all four paddings from an inset
    pub fn padding(self, insets: EdgeInsets) -> Self {
        self.padding_top(insets.top)
            .padding_left(insets.left)
            .padding_right(insets.right)
            .padding_bottom(insets.bottom)
    }

    /// Cascade an optional style on top of `self`
    pub fn merge_opt(self, other: Option<&Style>) -> Self {
        match other {
            Some(other) => self.merge(other),
            None => self,
        }
    }
}
