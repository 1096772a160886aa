//! Floating label
//!
//! Wraps the label row of a field. While the field is empty the row rests
//! low and transparent; once the field holds a value it rises and fades
//! in. Offset and opacity are two independent [`AnimatedValue`]s that are
//! retargeted together whenever the `visible` prop flips.

use floatlabel_animation::{AnimatedValue, SchedulerHandle, TimingConfig};
use floatlabel_core::{Node, Style};

/// Props of the floating label
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FloatingLabelProps {
    /// True while the field holds a non-empty value
    pub visible: bool,
}

/// Animated container of the field's label row
#[derive(Debug)]
pub struct FloatingLabel {
    props: FloatingLabelProps,
    offset: AnimatedValue,
    opacity: AnimatedValue,
    timing: TimingConfig,
}

impl FloatingLabel {
    /// Top padding while the label is shown
    pub const VISIBLE_OFFSET: f32 = 5.0;
    /// Top padding while the label is hidden
    pub const HIDDEN_OFFSET: f32 = 9.0;

    /// Create the label resting at the position matching `props`
    ///
    /// No transition runs on mount.
    pub fn new(handle: SchedulerHandle, props: FloatingLabelProps) -> Self {
        let (offset, opacity) = Self::resting(props.visible);
        Self {
            props,
            offset: AnimatedValue::new(handle.clone(), offset),
            opacity: AnimatedValue::new(handle, opacity),
            timing: TimingConfig::standard(),
        }
    }

    /// Resting `(offset, opacity)` for a visibility
    pub fn resting(visible: bool) -> (f32, f32) {
        if visible {
            (Self::VISIBLE_OFFSET, 1.0)
        } else {
            (Self::HIDDEN_OFFSET, 0.0)
        }
    }

    /// Apply new props, animating if visibility changed
    pub fn receive_props(&mut self, props: FloatingLabelProps) {
        let previous = std::mem::replace(&mut self.props, props);
        if previous.visible == props.visible {
            return;
        }

        let (offset, opacity) = Self::resting(props.visible);
        tracing::trace!(visible = props.visible, "floating label retarget");
        self.offset.animate_to(offset, self.timing);
        self.opacity.animate_to(opacity, self.timing);
    }

    pub fn props(&self) -> FloatingLabelProps {
        self.props
    }

    /// Current vertical offset
    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.get()
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_animating() || self.opacity.is_animating()
    }

    /// Render `children` inside the animated row
    pub fn render(&self, base: &Style, children: impl IntoIterator<Item = Node>) -> Node {
        Node::view()
            .id(crate::node_ids::FLOATING_LABEL)
            .style(base.clone().padding_top(self.offset()).opacity(self.opacity()))
            .children_from(children)
    }
}
