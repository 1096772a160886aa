//! FloatLabelField widget
//!
//! A text field whose placeholder floats above the input once text is
//! entered. The field provides:
//! - Focus and text state fed by the embedded [`TextInput`]'s events
//! - One-way sync of an owner-controlled `value`
//! - An animated [`FloatingLabel`] and [`FieldHolder`] driven from that state
//! - Optional `on_focus`, `on_blur` and `on_change_text_value` hooks
//! - Imperative focus/blur/clear through [`InputHandle`]
//!
//! # Example
//!
//! ```rust
//! use floatlabel_animation::AnimationScheduler;
//! use floatlabel_widgets::{float_label_field, InputHandle};
//!
//! let scheduler = AnimationScheduler::new();
//! let mut field = float_label_field()
//!     .placeholder("Email")
//!     .on_change_text_value(|text| println!("email is now {text}"))
//!     .build(scheduler.handle());
//!
//! field.focus();
//! field.enter_text("me@example.com");
//! assert!(field.label().props().visible);
//!
//! // Each frame:
//! scheduler.tick(16.0);
//! let tree = field.render();
//! # let _ = tree;
//! ```

use floatlabel_animation::SchedulerHandle;
use floatlabel_core::{CallbackResult, EdgeInsets, ImageSource, Node, Style};

use crate::callback::FieldCallbacks;
use crate::field_holder::{FieldHolder, FieldHolderProps};
use crate::floating_label::{FloatingLabel, FloatingLabelProps};
use crate::node_ids;
use crate::styles::{FieldStyles, ICON_INPUT_INSET};
use crate::text_input::{InputEvent, InputHandle, TextInput, TextInputConfig};

/// Configuration of a [`FloatLabelField`]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldProps {
    /// Owner-controlled text; re-applied on every props update
    pub value: Option<String>,
    /// Starting text of an uncontrolled input
    pub default_value: Option<String>,
    /// Shown inside the empty input and as the floating label
    pub placeholder: Option<String>,
    /// Image in front of the label
    pub icon: Option<ImageSource>,
    /// Drop the bottom border
    pub no_border: bool,
    /// Override for the label text
    pub floating_label_style: Option<Style>,
    /// Override for the label text while focused
    pub focused_label_style: Option<Style>,
    /// Override for the editable text
    pub text_style: Option<Style>,
    pub content_inset: EdgeInsets,
    /// Holder margin while the field has a value
    pub margin_anim: f32,
    /// Holder margin of an empty multi-line field
    pub margin_multiline: f32,
    pub multiline: bool,
    pub max_length: Option<usize>,
    pub editable: bool,
    pub secure_text_entry: bool,
}

impl Default for FieldProps {
    fn default() -> Self {
        Self {
            value: None,
            default_value: None,
            placeholder: None,
            icon: None,
            no_border: false,
            floating_label_style: None,
            focused_label_style: None,
            text_style: None,
            content_inset: EdgeInsets::ZERO,
            margin_anim: 30.0,
            margin_multiline: 20.0,
            multiline: false,
            max_length: None,
            editable: true,
            secure_text_entry: false,
        }
    }
}

impl FieldProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Control the text from the owner
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn icon(mut self, icon: ImageSource) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn no_border(mut self, no_border: bool) -> Self {
        self.no_border = no_border;
        self
    }

    pub fn floating_label_style(mut self, style: Style) -> Self {
        self.floating_label_style = Some(style);
        self
    }

    pub fn focused_label_style(mut self, style: Style) -> Self {
        self.focused_label_style = Some(style);
        self
    }

    pub fn text_style(mut self, style: Style) -> Self {
        self.text_style = Some(style);
        self
    }

    pub fn content_inset(mut self, inset: EdgeInsets) -> Self {
        self.content_inset = inset;
        self
    }

    pub fn margin_anim(mut self, margin: f32) -> Self {
        self.margin_anim = margin;
        self
    }

    pub fn margin_multiline(mut self, margin: f32) -> Self {
        self.margin_multiline = margin;
        self
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn secure_text_entry(mut self, secure: bool) -> Self {
        self.secure_text_entry = secure;
        self
    }

    /// The subset of props passed through to the embedded input
    fn input_config(&self) -> TextInputConfig {
        TextInputConfig {
            placeholder: self.placeholder.clone(),
            default_value: self.default_value.clone(),
            max_length: self.max_length,
            multiline: self.multiline,
            editable: self.editable,
            secure_text_entry: self.secure_text_entry,
        }
    }
}

/// State owned by the field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Current text
    pub text: String,
    pub focused: bool,
}

impl FieldState {
    pub fn has_value(&self) -> bool {
        !self.text.is_empty()
    }
}

/// Text field with a floating label
#[derive(Debug)]
pub struct FloatLabelField {
    props: FieldProps,
    state: FieldState,
    callbacks: FieldCallbacks,
    input: TextInput,
    label: FloatingLabel,
    holder: FieldHolder,
    styles: &'static FieldStyles,
}

impl FloatLabelField {
    /// Mount a field
    pub fn new(handle: SchedulerHandle, props: FieldProps, callbacks: FieldCallbacks) -> Self {
        let state = FieldState {
            text: props.value.clone().unwrap_or_default(),
            focused: false,
        };
        let input = TextInput::new(props.input_config(), props.value.clone());
        let label = FloatingLabel::new(
            handle.clone(),
            FloatingLabelProps {
                visible: state.has_value(),
            },
        );
        let holder = FieldHolder::new(handle, Self::holder_props(&props, &state));

        Self {
            props,
            state,
            callbacks,
            input,
            label,
            holder,
            styles: FieldStyles::shared(),
        }
    }

    /// Use a different style sheet than the shared one
    pub fn with_styles(mut self, styles: &'static FieldStyles) -> Self {
        self.styles = styles;
        self
    }

    fn holder_props(props: &FieldProps, state: &FieldState) -> FieldHolderProps {
        FieldHolderProps {
            with_value: state.has_value(),
            multiline: props.multiline,
            margin_anim: props.margin_anim,
            margin_multiline: props.margin_multiline,
        }
    }

    // =========================================================================
    // Props and state
    // =========================================================================

    /// Apply props from the owner
    ///
    /// A `value` in the new props replaces the current text, even when the
    /// two are equal.
    pub fn update_props(&mut self, props: FieldProps) {
        self.input.set_config(props.input_config());
        if let Some(value) = props.value.as_ref() {
            tracing::trace!(value = %value, "re-seeding field text from props");
            self.state.text = value.clone();
            self.input.set_controlled_value(value.clone());
        }
        self.props = props;
        self.sync_children();
    }

    pub fn props(&self) -> &FieldProps {
        &self.props
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.state.text
    }

    /// Replace the callback hooks
    pub fn set_callbacks(&mut self, callbacks: FieldCallbacks) {
        self.callbacks = callbacks;
    }

    pub fn label(&self) -> &FloatingLabel {
        &self.label
    }

    pub fn holder(&self) -> &FieldHolder {
        &self.holder
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    /// Mutable access to the embedded input
    ///
    /// Call [`process_input_events`](Self::process_input_events) after
    /// editing through it so the field picks the changes up.
    pub fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    // =========================================================================
    // Event handling
    // =========================================================================

    /// Handle an event reported by the embedded input
    ///
    /// Hosts delivering native events call this directly; the embedded
    /// input is brought in line with the new state without raising events.
    pub fn handle_input_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Focus => self.set_focus(),
            InputEvent::Blur => self.unset_focus(),
            InputEvent::ChangeText(text) => self.set_text(text),
        }
    }

    /// Drain the embedded input's events and handle them in order
    pub fn process_input_events(&mut self) {
        for event in self.input.take_events() {
            self.handle_input_event(event);
        }
    }

    /// Type text into the field as the user would
    pub fn enter_text(&mut self, text: &str) {
        self.input.insert(text);
        self.process_input_events();
    }

    /// Remove the last character as the user would
    pub fn delete_backward(&mut self) {
        self.input.delete_backward();
        self.process_input_events();
    }

    fn set_focus(&mut self) {
        self.state.focused = true;
        self.input.set_focused(true);
        tracing::debug!(focused = true, "field focus changed");
        self.sync_children();
        self.callbacks.focus();
    }

    fn unset_focus(&mut self) {
        self.state.focused = false;
        self.input.set_focused(false);
        tracing::debug!(focused = false, "field focus changed");
        self.sync_children();
        self.callbacks.blur();
    }

    fn set_text(&mut self, text: String) {
        self.input.set_controlled_value(text.as_str());
        self.state.text = text;
        tracing::debug!(len = self.state.text.len(), "field text changed");
        self.sync_children();
        self.callbacks.change_text(&self.state.text);
    }

    /// Re-render pass: push derived props down to the animated wrappers
    fn sync_children(&mut self) {
        self.label.receive_props(FloatingLabelProps {
            visible: self.state.has_value(),
        });
        self.holder
            .receive_props(Self::holder_props(&self.props, &self.state));
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn label_style(&self) -> Option<&Style> {
        if self.state.focused {
            Some(
                self.props
                    .focused_label_style
                    .as_ref()
                    .unwrap_or(&self.styles.focused),
            )
        } else {
            None
        }
    }

    /// Label text, present only while the field holds a value
    fn placeholder_value(&self) -> &str {
        match (&self.props.placeholder, self.state.has_value()) {
            (Some(placeholder), true) => placeholder,
            _ => "",
        }
    }

    fn border_style(&self) -> Option<&Style> {
        if self.props.no_border {
            None
        } else {
            Some(&self.styles.with_border)
        }
    }

    /// Build the field's render tree
    pub fn render(&self) -> Node {
        let styles = self.styles;

        let icon = self.props.icon.as_ref().map(|source| {
            Node::image(source.clone())
                .id(node_ids::LABEL_ICON)
                .style(styles.icon.clone())
        });
        let label_text = Node::text(self.placeholder_value())
            .id(node_ids::LABEL_TEXT)
            .style(
                styles
                    .field_label
                    .clone()
                    .merge_opt(self.props.floating_label_style.as_ref())
                    .merge_opt(self.label_style()),
            );
        let label = self
            .label
            .render(&styles.floating_label, icon.into_iter().chain([label_text]));

        let icon_inset = self
            .props
            .icon
            .as_ref()
            .map(|_| Style::new().margin_left(ICON_INPUT_INSET));
        let input = self
            .input
            .render(
                styles
                    .value_text
                    .clone()
                    .merge_opt(self.props.text_style.as_ref())
                    .merge_opt(icon_inset.as_ref()),
            )
            .id(node_ids::TEXT_INPUT);
        let holder = self.holder.render(input);

        let field_container = Node::view()
            .id(node_ids::FIELD_CONTAINER)
            .style(
                styles
                    .field_container
                    .clone()
                    .merge_opt(self.border_style()),
            )
            .child(label)
            .child(holder);

        let view_container = Node::view()
            .id(node_ids::VIEW_CONTAINER)
            .style(
                styles
                    .view_container
                    .clone()
                    .padding(self.props.content_inset),
            )
            .child(field_container);

        Node::view()
            .id(node_ids::CONTAINER)
            .style(styles.container.clone())
            .child(view_container)
    }
}

impl InputHandle for FloatLabelField {
    fn focus(&mut self) {
        self.input.focus();
        self.process_input_events();
    }

    fn blur(&mut self) {
        self.input.blur();
        self.process_input_events();
    }

    fn is_focused(&self) -> bool {
        self.input.is_focused()
    }

    fn clear(&mut self) {
        self.input.clear();
        self.process_input_events();
    }
}

/// Create a floating-label field
pub fn float_label_field() -> FloatLabelFieldBuilder {
    FloatLabelFieldBuilder {
        props: FieldProps::default(),
        callbacks: FieldCallbacks::default(),
    }
}

/// Builder for creating floating-label fields
pub struct FloatLabelFieldBuilder {
    props: FieldProps,
    callbacks: FieldCallbacks,
}

impl FloatLabelFieldBuilder {
    /// Start from an existing props set
    pub fn props(mut self, props: FieldProps) -> Self {
        self.props = props;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.props = self.props.value(value);
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.props = self.props.default_value(value);
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.props = self.props.placeholder(text);
        self
    }

    pub fn icon(mut self, icon: ImageSource) -> Self {
        self.props = self.props.icon(icon);
        self
    }

    pub fn no_border(mut self, no_border: bool) -> Self {
        self.props = self.props.no_border(no_border);
        self
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.props = self.props.multiline(multiline);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.props = self.props.max_length(max);
        self
    }

    pub fn content_inset(mut self, inset: EdgeInsets) -> Self {
        self.props = self.props.content_inset(inset);
        self
    }

    pub fn on_focus<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.callbacks = self.callbacks.on_focus(callback);
        self
    }

    pub fn try_on_focus<F>(mut self, callback: F) -> Self
    where
        F: FnMut() -> CallbackResult + Send + 'static,
    {
        self.callbacks = self.callbacks.try_on_focus(callback);
        self
    }

    pub fn on_blur<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.callbacks = self.callbacks.on_blur(callback);
        self
    }

    pub fn try_on_blur<F>(mut self, callback: F) -> Self
    where
        F: FnMut() -> CallbackResult + Send + 'static,
    {
        self.callbacks = self.callbacks.try_on_blur(callback);
        self
    }

    pub fn on_change_text_value<F: FnMut(&str) + Send + 'static>(mut self, callback: F) -> Self {
        self.callbacks = self.callbacks.on_change_text_value(callback);
        self
    }

    pub fn try_on_change_text_value<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&str) -> CallbackResult + Send + 'static,
    {
        self.callbacks = self.callbacks.try_on_change_text_value(callback);
        self
    }

    /// Mount the field
    pub fn build(self, handle: SchedulerHandle) -> FloatLabelField {
        FloatLabelField::new(handle, self.props, self.callbacks)
    }
}
