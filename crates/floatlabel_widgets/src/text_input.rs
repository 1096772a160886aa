//! Embedded text input
//!
//! The editable control a [`FloatLabelField`](crate::FloatLabelField)
//! wraps. It owns the on-screen text and focus, and reports every change
//! it makes as an [`InputEvent`]. The owning widget drains those events
//! and updates its own state from them, so programmatic edits (through
//! [`InputHandle`]) and user edits flow through the same path.

use floatlabel_core::{Node, Style, TextInputNode};
use smallvec::SmallVec;

/// Events raised by the text input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// The input gained focus
    Focus,
    /// The input lost focus
    Blur,
    /// The text changed; carries the complete new value
    ChangeText(String),
}

/// Imperative control surface of a text input
///
/// Implemented by [`TextInput`] and forwarded by the widgets that embed
/// one, so owners can drive focus without reaching into the tree.
pub trait InputHandle {
    /// Request keyboard focus
    fn focus(&mut self);
    /// Give up keyboard focus
    fn blur(&mut self);
    /// Whether the input currently has keyboard focus
    fn is_focused(&self) -> bool;
    /// Remove all text
    fn clear(&mut self);
}

/// Configuration passed through to the text input
#[derive(Clone, Debug, PartialEq)]
pub struct TextInputConfig {
    /// Text shown while the input is empty
    pub placeholder: Option<String>,
    /// Starting text when the owner doesn't control the value
    pub default_value: Option<String>,
    /// Maximum number of characters
    pub max_length: Option<usize>,
    pub multiline: bool,
    /// Whether typing is accepted
    pub editable: bool,
    /// Mask the displayed text
    pub secure_text_entry: bool,
}

impl Default for TextInputConfig {
    fn default() -> Self {
        Self {
            placeholder: None,
            default_value: None,
            max_length: None,
            multiline: false,
            editable: true,
            secure_text_entry: false,
        }
    }
}

/// A headless editable text input
#[derive(Clone, Debug)]
pub struct TextInput {
    config: TextInputConfig,
    value: String,
    focused: bool,
    events: SmallVec<[InputEvent; 4]>,
}

impl TextInput {
    /// Create an input showing `value`, or the configured default when the
    /// owner doesn't control the text
    pub fn new(config: TextInputConfig, value: Option<String>) -> Self {
        let value = value
            .or_else(|| config.default_value.clone())
            .unwrap_or_default();
        Self {
            config,
            value,
            focused: false,
            events: SmallVec::new(),
        }
    }

    pub fn config(&self) -> &TextInputConfig {
        &self.config
    }

    /// Replace the pass-through configuration
    pub fn set_config(&mut self, config: TextInputConfig) {
        self.config = config;
    }

    /// Current text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Apply an owner-controlled value; raises no event
    pub fn set_controlled_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Apply focus reported by the host; raises no event
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Type `text` at the end of the current value
    ///
    /// Characters beyond `max_length` are dropped.
    pub fn insert(&mut self, text: &str) {
        if !self.config.editable || text.is_empty() {
            return;
        }

        let char_count = self.value.chars().count();
        let allowed = match self.config.max_length {
            Some(max) => max.saturating_sub(char_count),
            None => usize::MAX,
        };
        if allowed == 0 {
            return;
        }

        let before = self.value.len();
        self.value.extend(text.chars().take(allowed));
        if self.value.len() != before {
            self.raise_change();
        }
    }

    /// Remove the last character (backspace)
    pub fn delete_backward(&mut self) {
        if !self.config.editable {
            return;
        }
        if self.value.pop().is_some() {
            self.raise_change();
        }
    }

    /// Replace the whole value as a user edit (paste, autocorrect)
    pub fn set_text(&mut self, text: &str) {
        if !self.config.editable {
            return;
        }
        let text: String = match self.config.max_length {
            Some(max) => text.chars().take(max).collect(),
            None => text.to_string(),
        };
        if text != self.value {
            self.value = text;
            self.raise_change();
        }
    }

    /// Drain the raised events in the order they happened
    pub fn take_events(&mut self) -> SmallVec<[InputEvent; 4]> {
        std::mem::take(&mut self.events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Text as it should be displayed (masked for secure entry)
    pub fn display_text(&self) -> String {
        if self.config.secure_text_entry {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Build the input's render node
    pub fn render(&self, style: Style) -> Node {
        Node::text_input(TextInputNode {
            value: self.display_text(),
            placeholder: self.config.placeholder.clone(),
            default_value: self.config.default_value.clone(),
            max_length: self.config.max_length,
            multiline: self.config.multiline,
            editable: self.config.editable,
            secure_text_entry: self.config.secure_text_entry,
            focused: self.focused,
        })
        .style(style)
    }

    fn raise_change(&mut self) {
        self.events.push(InputEvent::ChangeText(self.value.clone()));
    }
}

impl InputHandle for TextInput {
    fn focus(&mut self) {
        if !self.focused {
            self.focused = true;
            self.events.push(InputEvent::Focus);
        }
    }

    fn blur(&mut self) {
        if self.focused {
            self.focused = false;
            self.events.push(InputEvent::Blur);
        }
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn clear(&mut self) {
        if !self.value.is_empty() {
            self.value.clear();
            self.raise_change();
        }
    }
}
