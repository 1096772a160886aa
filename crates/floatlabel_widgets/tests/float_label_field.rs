//! End-to-end behavior of the floating-label field

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use floatlabel_animation::{AnimationScheduler, TimingConfig};
use floatlabel_core::{CallbackError, Color, NodeKind};
use floatlabel_widgets::prelude::*;
use floatlabel_widgets::{node_ids, FloatingLabel};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn settle(scheduler: &AnimationScheduler) {
    scheduler.tick(TimingConfig::STANDARD_DURATION_MS as f32);
    assert!(!scheduler.has_active_animations());
}

#[test]
fn typing_reports_each_value_and_raises_the_label() {
    init_tracing();
    let scheduler = AnimationScheduler::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let texts = seen.clone();
    let mut field = float_label_field()
        .placeholder("Email")
        .on_change_text_value(move |text| texts.lock().unwrap().push(text.to_string()))
        .build(scheduler.handle());

    field.enter_text("a");
    field.enter_text("b");
    field.enter_text("c");

    assert_eq!(*seen.lock().unwrap(), vec!["a", "ab", "abc"]);
    assert_eq!(field.text(), "abc");
    assert!(field.label().props().visible);

    settle(&scheduler);
    assert_eq!(field.label().offset(), FloatingLabel::VISIBLE_OFFSET);
    assert_eq!(field.label().opacity(), 1.0);
    assert_eq!(field.holder().margin(), 30.0);

    let tree = field.render();
    let label = tree.find_by_id(node_ids::LABEL_TEXT).unwrap();
    assert_eq!(label.text_content(), Some("Email"));
}

#[test]
fn deleting_everything_lowers_the_label() {
    let scheduler = AnimationScheduler::new();
    let mut field = float_label_field()
        .placeholder("Email")
        .build(scheduler.handle());

    field.enter_text("x");
    settle(&scheduler);
    field.delete_backward();
    assert!(!field.label().props().visible);

    settle(&scheduler);
    assert_eq!(field.label().offset(), FloatingLabel::HIDDEN_OFFSET);
    assert_eq!(field.label().opacity(), 0.0);
    assert_eq!(field.holder().margin(), 0.0);
}

#[test]
fn focus_without_callback_updates_state() {
    let scheduler = AnimationScheduler::new();
    let mut field = float_label_field().build(scheduler.handle());

    field.focus();
    assert!(field.state().focused);
    assert!(field.is_focused());

    field.blur();
    assert!(!field.state().focused);
}

#[test]
fn failing_callbacks_do_not_undo_state() {
    init_tracing();
    let scheduler = AnimationScheduler::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let (focus_calls, text_calls) = (calls.clone(), calls.clone());
    let mut field = float_label_field()
        .try_on_focus(move || {
            focus_calls.fetch_add(1, Ordering::SeqCst);
            Err(CallbackError::rejected("focus refused"))
        })
        .try_on_change_text_value(move |_| {
            text_calls.fetch_add(1, Ordering::SeqCst);
            Err(CallbackError::rejected("text refused"))
        })
        .build(scheduler.handle());

    field.focus();
    field.enter_text("q");

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(field.state().focused);
    assert_eq!(field.text(), "q");
}

#[test]
fn focus_and_blur_callbacks_fire_in_order() {
    let scheduler = AnimationScheduler::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let (on_focus, on_blur) = (log.clone(), log.clone());
    let mut field = float_label_field()
        .on_focus(move || on_focus.lock().unwrap().push("focus"))
        .on_blur(move || on_blur.lock().unwrap().push("blur"))
        .build(scheduler.handle());

    field.focus();
    field.focus();
    field.blur();

    assert_eq!(*log.lock().unwrap(), vec!["focus", "blur"]);
}

#[test]
fn owner_value_overrides_typed_text() {
    let scheduler = AnimationScheduler::new();
    let mut field = float_label_field().value("abc").build(scheduler.handle());

    field.enter_text("d");
    assert_eq!(field.text(), "abcd");

    field.update_props(FieldProps::new().value("xyz"));
    assert_eq!(field.text(), "xyz");
    assert_eq!(field.input().value(), "xyz");

    field.update_props(FieldProps::new().value(""));
    assert_eq!(field.text(), "");
    assert!(!field.label().props().visible);
}

#[test]
fn no_border_drops_the_bottom_border() {
    let scheduler = AnimationScheduler::new();
    let bordered = float_label_field().build(scheduler.handle());
    let borderless = float_label_field().no_border(true).build(scheduler.handle());

    let style = |field: &FloatLabelField| {
        field
            .render()
            .find_by_id(node_ids::FIELD_CONTAINER)
            .map(|node| node.get_style().clone())
            .unwrap()
    };

    let with_border = style(&bordered);
    assert_eq!(with_border.border_bottom_width, Some(0.5));
    assert_eq!(with_border.border_color, Some(Color::from_hex(0xC8C7CC)));

    let without = style(&borderless);
    assert_eq!(without.border_bottom_width, None);
    assert_eq!(without.border_color, None);
}

#[test]
fn mounting_with_value_starts_at_rest() {
    let scheduler = AnimationScheduler::new();
    let field = float_label_field()
        .placeholder("Name")
        .value("Ada")
        .build(scheduler.handle());

    assert_eq!(field.label().offset(), FloatingLabel::VISIBLE_OFFSET);
    assert_eq!(field.label().opacity(), 1.0);
    assert_eq!(field.holder().margin(), 30.0);
    assert!(!scheduler.has_active_animations());
    assert_eq!(scheduler.timing_count(), 0);
}

#[test]
fn imperative_clear_empties_the_field() {
    let scheduler = AnimationScheduler::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let texts = seen.clone();
    let mut field = float_label_field()
        .value("abc")
        .on_change_text_value(move |text| texts.lock().unwrap().push(text.to_string()))
        .build(scheduler.handle());

    field.clear();

    assert_eq!(field.text(), "");
    assert_eq!(*seen.lock().unwrap(), vec![String::new()]);
    assert!(!field.label().props().visible);
}

#[test]
fn render_tree_shape() {
    let scheduler = AnimationScheduler::new();
    let mut field = float_label_field()
        .placeholder("Email")
        .icon(ImageSource::named("mail"))
        .build(scheduler.handle());
    field.enter_text("me");
    settle(&scheduler);

    let tree = field.render();
    assert_eq!(tree.get_id(), Some(node_ids::CONTAINER));

    let field_container = tree.find_by_id(node_ids::FIELD_CONTAINER).unwrap();
    let ids: Vec<_> = field_container
        .children()
        .iter()
        .map(|node| node.get_id())
        .collect();
    assert_eq!(
        ids,
        vec![Some(node_ids::FLOATING_LABEL), Some(node_ids::FIELD_HOLDER)]
    );

    let label = tree.find_by_id(node_ids::FLOATING_LABEL).unwrap();
    assert_eq!(label.children().len(), 2);
    assert_eq!(label.get_style().padding_top, Some(5.0));

    let input = tree.find_by_id(node_ids::TEXT_INPUT).unwrap();
    match input.kind() {
        NodeKind::TextInput(node) => {
            assert_eq!(node.value, "me");
            assert_eq!(node.placeholder.as_deref(), Some("Email"));
        }
        other => panic!("expected a text input, got {other:?}"),
    }
}

#[test]
fn secure_entry_masks_rendered_text() {
    let scheduler = AnimationScheduler::new();
    let mut field = FloatLabelField::new(
        scheduler.handle(),
        FieldProps::new().secure_text_entry(true),
        FieldCallbacks::new(),
    );
    field.enter_text("pw");

    assert_eq!(field.text(), "pw");
    let tree = field.render();
    let input = tree.find_by_id(node_ids::TEXT_INPUT).unwrap();
    match input.kind() {
        NodeKind::TextInput(node) => assert_eq!(node.value, "••"),
        other => panic!("expected a text input, got {other:?}"),
    }
}

#[test]
fn dropped_scheduler_snaps_transitions() {
    let scheduler = AnimationScheduler::new();
    let mut field = float_label_field().build(scheduler.handle());
    drop(scheduler);

    field.enter_text("late");
    assert_eq!(field.label().offset(), FloatingLabel::VISIBLE_OFFSET);
    assert_eq!(field.holder().margin(), 30.0);
}

#[test]
fn host_text_event_on_empty_field_reports_once() {
    let scheduler = AnimationScheduler::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let texts = seen.clone();
    let mut field = float_label_field()
        .value("")
        .on_change_text_value(move |text| texts.lock().unwrap().push(text.to_string()))
        .build(scheduler.handle());

    field.handle_input_event(InputEvent::ChangeText("abc".into()));

    assert_eq!(*seen.lock().unwrap(), vec!["abc"]);
    assert!(field.holder().props().with_value);
    assert!(field.label().props().visible);
}

#[test]
fn host_events_drive_the_embedded_input() {
    let scheduler = AnimationScheduler::new();
    let focus_calls = Arc::new(AtomicUsize::new(0));
    let calls = focus_calls.clone();
    let mut field = float_label_field()
        .on_focus(move || {
            calls.fetch_add(1, Ordering::SeqCst);
        })
        .build(scheduler.handle());

    field.handle_input_event(InputEvent::ChangeText("abc".into()));
    let tree = field.render();
    match tree.find_by_id(node_ids::TEXT_INPUT).unwrap().kind() {
        NodeKind::TextInput(node) => assert_eq!(node.value, "abc"),
        other => panic!("expected a text input, got {other:?}"),
    }

    field.enter_text("d");
    assert_eq!(field.text(), "abcd");

    field.handle_input_event(InputEvent::Focus);
    assert!(field.is_focused());
    field.focus();
    assert_eq!(focus_calls.load(Ordering::SeqCst), 1);
}

#[cfg(feature = "serde")]
#[test]
fn props_deserialize_with_defaults() {
    let props: FieldProps =
        serde_json::from_str(r#"{ "placeholder": "Email", "multiline": true }"#).unwrap();

    assert_eq!(props.placeholder.as_deref(), Some("Email"));
    assert!(props.multiline);
    assert_eq!(props.margin_anim, 30.0);
    assert!(props.editable);
}
