//! Default look of the floating-label field
//!
//! The style sheet is built once per process and shared by reference. It is
//! never mutated; owners customize a field through the style overrides on
//! [`FieldProps`](crate::FieldProps), which cascade on top of these.

use std::sync::OnceLock;

use floatlabel_core::{
    AlignItems, Color, FlexDirection, JustifyContent, Platform, Position, ResizeMode, Style,
    TextAlignVertical,
};

/// Left margin given to the input when an icon sits in front of it
pub const ICON_INPUT_INSET: f32 = 41.0;

static SHARED_STYLES: OnceLock<FieldStyles> = OnceLock::new();

/// Style sheet of the floating-label field
#[derive(Clone, Debug, PartialEq)]
pub struct FieldStyles {
    /// Outermost container
    pub container: Style,
    /// Row that carries the content inset
    pub view_container: Style,
    /// Absolutely positioned row holding icon and label
    pub floating_label: Style,
    /// Label text when not focused
    pub field_label: Style,
    /// Box around label and input
    pub field_container: Style,
    /// Bottom border applied unless the field opts out
    pub with_border: Style,
    /// The editable text
    pub value_text: Style,
    /// Label override while focused
    pub focused: Style,
    pub icon: Style,
}

impl FieldStyles {
    /// Build the style sheet for `platform`
    pub fn new(platform: Platform) -> Self {
        let mut value_text = Style::new()
            .flex_grow(1.0)
            .text_align_vertical(TextAlignVertical::Top)
            .padding_top(5.0)
            .padding_bottom(5.0)
            .background_color(Color::TRANSPARENT)
            .font_size(16.0)
            .color(Color::from_hex(0x111111));
        // Browsers draw a focus ring around inputs
        if platform.is_web() {
            value_text = value_text.outline_width(0.0);
        }

        Self {
            container: Style::new()
                .flex(1.0)
                .justify_content(JustifyContent::Center),
            view_container: Style::new()
                .flex(1.0)
                .flex_direction(FlexDirection::Row),
            floating_label: Style::new()
                .flex_direction(FlexDirection::Row)
                .align_items(AlignItems::Center)
                .position(Position::Absolute)
                .top(0.0)
                .left(0.0),
            field_label: Style::new()
                .font_size(16.0)
                .color(Color::from_hex(0xB1B1B1)),
            field_container: Style::new()
                .flex(1.0)
                .justify_content(JustifyContent::Center)
                .position(Position::Relative),
            with_border: Style::new()
                .border_bottom_width(0.5)
                .border_color(Color::from_hex(0xC8C7CC)),
            value_text,
            focused: Style::new().color(Color::from_hex(0x1482FE)),
            icon: Style::new()
                .width(21.0)
                .height(21.0)
                .resize_mode(ResizeMode::Contain)
                .margin_right(20.0)
                .margin_top(2.0),
        }
    }

    /// The process-wide style sheet for the current platform
    pub fn shared() -> &'static FieldStyles {
        SHARED_STYLES.get_or_init(|| FieldStyles::new(Platform::current()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_only_on_web() {
        assert_eq!(FieldStyles::new(Platform::Web).value_text.outline_width, Some(0.0));
        assert_eq!(FieldStyles::new(Platform::Ios).value_text.outline_width, None);
        assert_eq!(FieldStyles::new(Platform::Android).value_text.outline_width, None);
    }

    #[test]
    fn test_shared_is_a_single_instance() {
        let a = FieldStyles::shared() as *const FieldStyles;
        let b = FieldStyles::shared() as *const FieldStyles;
        assert_eq!(a, b);
        assert_eq!(*FieldStyles::shared(), FieldStyles::new(Platform::current()));
    }
}
