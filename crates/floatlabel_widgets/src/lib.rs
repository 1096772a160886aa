//! floatlabel Widget Library
//!
//! A text field whose placeholder floats above the input once text is
//! entered.
//!
//! # Architecture
//!
//! The field is split into small stateful pieces:
//!
//! 1. **TextInput**: A headless editable input. It owns the on-screen text
//!    and focus and reports every change as an [`InputEvent`].
//!
//! 2. **FloatLabelField**: Owns the field state (text and focus), applies
//!    input events to it and forwards them to the owner's callbacks.
//!
//! 3. **FloatingLabel / FieldHolder**: Animated wrappers whose targets are
//!    derived from the field state on every change and driven by the
//!    shared [`AnimationScheduler`](floatlabel_animation::AnimationScheduler).
//!
//! Rendering produces a plain [`Node`](floatlabel_core::Node) tree that a
//! host framework maps onto its own primitives.
//!
//! # Example
//!
//! ```rust
//! use floatlabel_animation::AnimationScheduler;
//! use floatlabel_widgets::prelude::*;
//!
//! let scheduler = AnimationScheduler::new();
//! let mut field = float_label_field()
//!     .placeholder("Name")
//!     .build(scheduler.handle());
//!
//! field.enter_text("Ada");
//! while scheduler.tick(16.0) {}
//!
//! assert_eq!(field.label().offset(), 5.0);
//! assert_eq!(field.holder().margin(), 30.0);
//! ```

pub mod callback;
pub mod field_holder;
pub mod float_label_field;
pub mod floating_label;
pub mod styles;
pub mod text_input;

pub use callback::{ChangeTextCallback, FieldCallbacks, FocusCallback};
pub use field_holder::{FieldHolder, FieldHolderProps};
pub use float_label_field::{
    float_label_field, FieldProps, FieldState, FloatLabelField, FloatLabelFieldBuilder,
};
pub use floating_label::{FloatingLabel, FloatingLabelProps};
pub use styles::{FieldStyles, ICON_INPUT_INSET};
pub use text_input::{InputEvent, InputHandle, TextInput, TextInputConfig};

/// Ids attached to the nodes of a rendered field
pub mod node_ids {
    pub const CONTAINER: &str = "floatlabel.container";
    pub const VIEW_CONTAINER: &str = "floatlabel.view_container";
    pub const FIELD_CONTAINER: &str = "floatlabel.field_container";
    pub const FLOATING_LABEL: &str = "floatlabel.floating_label";
    pub const LABEL_ICON: &str = "floatlabel.label_icon";
    pub const LABEL_TEXT: &str = "floatlabel.label_text";
    pub const FIELD_HOLDER: &str = "floatlabel.field_holder";
    pub const TEXT_INPUT: &str = "floatlabel.text_input";
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::callback::FieldCallbacks;
    pub use crate::float_label_field::{
        float_label_field, FieldProps, FieldState, FloatLabelField, FloatLabelFieldBuilder,
    };
    pub use crate::text_input::{InputEvent, InputHandle};
    pub use floatlabel_core::{Color, EdgeInsets, ImageSource, Style};
}
