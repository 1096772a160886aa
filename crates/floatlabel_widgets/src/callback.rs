//! Owner-supplied callbacks
//!
//! Every hook is optional. A missing hook is skipped, and a fallible hook
//! that returns an error is logged and ignored. Callers always apply their
//! state change before invoking a hook, so a failing hook can't undo it.
//!
//! Panics are not caught: a panicking hook unwinds through the field.

use floatlabel_core::CallbackResult;

/// Hook for focus and blur notifications
pub type FocusCallback = Box<dyn FnMut() -> CallbackResult + Send>;

/// Hook receiving the new text after every edit
pub type ChangeTextCallback = Box<dyn FnMut(&str) -> CallbackResult + Send>;

/// The callback hooks of a [`FloatLabelField`](crate::FloatLabelField)
#[derive(Default)]
pub struct FieldCallbacks {
    on_focus: Option<FocusCallback>,
    on_blur: Option<FocusCallback>,
    on_change_text_value: Option<ChangeTextCallback>,
}

impl FieldCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called after the field gains focus
    pub fn on_focus<F: FnMut() + Send + 'static>(mut self, mut callback: F) -> Self {
        self.on_focus = Some(Box::new(move || {
            callback();
            Ok(())
        }));
        self
    }

    /// Fallible variant of [`on_focus`](Self::on_focus)
    pub fn try_on_focus<F>(mut self, callback: F) -> Self
    where
        F: FnMut() -> CallbackResult + Send + 'static,
    {
        self.on_focus = Some(Box::new(callback));
        self
    }

    /// Called after the field loses focus
    pub fn on_blur<F: FnMut() + Send + 'static>(mut self, mut callback: F) -> Self {
        self.on_blur = Some(Box::new(move || {
            callback();
            Ok(())
        }));
        self
    }

    /// Fallible variant of [`on_blur`](Self::on_blur)
    pub fn try_on_blur<F>(mut self, callback: F) -> Self
    where
        F: FnMut() -> CallbackResult + Send + 'static,
    {
        self.on_blur = Some(Box::new(callback));
        self
    }

    /// Called with the new text after every edit
    pub fn on_change_text_value<F: FnMut(&str) + Send + 'static>(mut self, mut callback: F) -> Self {
        self.on_change_text_value = Some(Box::new(move |text: &str| {
            callback(text);
            Ok(())
        }));
        self
    }

    /// Fallible variant of [`on_change_text_value`](Self::on_change_text_value)
    pub fn try_on_change_text_value<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&str) -> CallbackResult + Send + 'static,
    {
        self.on_change_text_value = Some(Box::new(callback));
        self
    }

    pub(crate) fn focus(&mut self) {
        if let Some(callback) = self.on_focus.as_mut() {
            if let Err(err) = callback() {
                tracing::debug!(%err, "on_focus callback failed, ignoring");
            }
        }
    }

    pub(crate) fn blur(&mut self) {
        if let Some(callback) = self.on_blur.as_mut() {
            if let Err(err) = callback() {
                tracing::debug!(%err, "on_blur callback failed, ignoring");
            }
        }
    }

    pub(crate) fn change_text(&mut self, text: &str) {
        if let Some(callback) = self.on_change_text_value.as_mut() {
            if let Err(err) = callback(text) {
                tracing::debug!(%err, "on_change_text_value callback failed, ignoring");
            }
        }
    }
}

impl std::fmt::Debug for FieldCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldCallbacks")
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("on_change_text_value", &self.on_change_text_value.is_some())
            .finish()
    }
}
