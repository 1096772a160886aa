//! Value holder
//!
//! Wraps the editable input and pushes it down with an animated top margin
//! so the floating label has room above the text.

use floatlabel_animation::{AnimatedValue, SchedulerHandle, TimingConfig};
use floatlabel_core::{Node, Style};

/// Props of the value holder
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldHolderProps {
    /// True while the field holds a non-empty value
    pub with_value: bool,
    pub multiline: bool,
    /// Margin while holding a value
    pub margin_anim: f32,
    /// Margin of an empty multi-line field
    pub margin_multiline: f32,
}

impl FieldHolderProps {
    /// Top margin these props call for
    pub fn target_margin(&self) -> f32 {
        if self.with_value {
            self.margin_anim
        } else if self.multiline {
            self.margin_multiline
        } else {
            0.0
        }
    }
}

/// Animated container around the editable input
#[derive(Debug)]
pub struct FieldHolder {
    props: FieldHolderProps,
    margin: AnimatedValue,
    timing: TimingConfig,
}

impl FieldHolder {
    pub fn new(handle: SchedulerHandle, props: FieldHolderProps) -> Self {
        Self {
            props,
            margin: AnimatedValue::new(handle, props.target_margin()),
            timing: TimingConfig::standard(),
        }
    }

    /// Apply new props and retarget the margin
    ///
    /// The margin is retargeted on every update, including ones that leave
    /// the target unchanged.
    pub fn receive_props(&mut self, props: FieldHolderProps) {
        self.props = props;
        let target = props.target_margin();
        tracing::trace!(target_margin = target, "field holder retarget");
        self.margin.animate_to(target, self.timing);
    }

    pub fn props(&self) -> FieldHolderProps {
        self.props
    }

    /// Current top margin
    pub fn margin(&self) -> f32 {
        self.margin.get()
    }

    pub fn target_margin(&self) -> f32 {
        self.margin.target()
    }

    pub fn is_animating(&self) -> bool {
        self.margin.is_animating()
    }

    /// Render `child` inside the growing, animated container
    pub fn render(&self, child: Node) -> Node {
        Node::view()
            .id(crate::node_ids::FIELD_HOLDER)
            .style(Style::new().flex_grow(1.0).margin_top(self.margin()))
            .child(child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatlabel_animation::AnimationScheduler;

    fn props(with_value: bool, multiline: bool) -> FieldHolderProps {
        FieldHolderProps {
            with_value,
            multiline,
            margin_anim: 30.0,
            margin_multiline: 20.0,
        }
    }

    #[test]
    fn test_target_margin_policy() {
        assert_eq!(props(true, true).target_margin(), 30.0);
        assert_eq!(props(true, false).target_margin(), 30.0);
        assert_eq!(props(false, true).target_margin(), 20.0);
        assert_eq!(props(false, false).target_margin(), 0.0);
    }

    #[test]
    fn test_initial_margin_without_transition() {
        let scheduler = AnimationScheduler::new();
        let holder = FieldHolder::new(scheduler.handle(), props(false, true));

        assert_eq!(holder.margin(), 20.0);
        assert_eq!(scheduler.timing_count(), 0);
    }

    #[test]
    fn test_receive_props_animates_to_target() {
        let scheduler = AnimationScheduler::new();
        let mut holder = FieldHolder::new(scheduler.handle(), props(false, false));

        holder.receive_props(props(true, false));
        assert!(holder.is_animating());
        assert_eq!(holder.target_margin(), 30.0);

        scheduler.tick(TimingConfig::STANDARD_DURATION_MS as f32);
        assert_eq!(holder.margin(), 30.0);
    }

    #[test]
    fn test_unchanged_target_still_retargets() {
        let scheduler = AnimationScheduler::new();
        let mut holder = FieldHolder::new(scheduler.handle(), props(false, false));

        holder.receive_props(props(false, false));
        assert!(holder.is_animating());
        assert_eq!(holder.margin(), 0.0);

        scheduler.tick(TimingConfig::STANDARD_DURATION_MS as f32);
        assert_eq!(holder.margin(), 0.0);
        assert!(!holder.is_animating());
    }

    #[test]
    fn test_render_wraps_child() {
        let scheduler = AnimationScheduler::new();
        let holder = FieldHolder::new(scheduler.handle(), props(true, false));

        let node = holder.render(Node::text("value"));
        assert_eq!(node.get_style().margin_top, Some(30.0));
        assert_eq!(node.get_style().flex_grow, Some(1.0));
        assert_eq!(node.children()[0].text_content(), Some("value"));
    }
}
