//! Programmatic requests: synthesized start -> update -> end sequences.

use crate::helpers::*;
use moveable::{EventType, Handler, Options, RequestKind, RequestParams, Vec2};
use pretty_assertions::assert_eq;

fn requested_drag(translate: Vec2) -> Call {
    Call::Drag {
        translate,
        transform: translate.to_translate_css(),
        from_pointer: false,
    }
}

#[test]
fn test_drag_request_fires_exact_sequence() {
    let mut c = controller(drag_options());
    let recorder = Recorder::install(&mut c, StartBehavior::Nothing);

    let done = c
        .request(RequestKind::Draggable, &RequestParams::position(10.0, 20.0))
        .unwrap();

    assert!(done);
    assert_eq!(
        recorder.calls(),
        vec![
            Call::DragStart { page: None },
            Call::Drag {
                translate: Vec2::new(10.0, 20.0),
                transform: "translate(10px,20px)".to_string(),
                from_pointer: false,
            },
            Call::DragEnd,
        ]
    );
    assert!(c.state().is_idle());
}

#[test]
fn test_incomplete_params_do_nothing() {
    let mut c = controller(drag_options().resizable(true));
    let recorder = Recorder::install(&mut c, StartBehavior::Nothing);

    let partial = RequestParams {
        x: Some(1.0),
        delta_y: Some(2.0),
        ..RequestParams::default()
    };
    assert!(!c.request(RequestKind::Draggable, &RequestParams::default()).unwrap());
    assert!(!c.request(RequestKind::Draggable, &partial).unwrap());
    assert!(!c.request(RequestKind::Resizable, &RequestParams::position(1.0, 2.0)).unwrap());

    let missing_height = RequestParams {
        width: Some(100.0),
        ..RequestParams::default()
    };
    assert!(!c.request(RequestKind::Resizable, &missing_height).unwrap());

    assert!(recorder.calls().is_empty());
}

#[test]
fn test_request_for_disabled_gesture_does_nothing() {
    let mut c = controller(Options::new().resizable(true));
    let recorder = Recorder::install(&mut c, StartBehavior::Nothing);

    assert!(!c.request(RequestKind::Draggable, &RequestParams::position(1.0, 1.0)).unwrap());

    let mut c = controller(drag_options());
    assert!(!c.request(RequestKind::Resizable, &RequestParams::size(1.0, 1.0)).unwrap());

    assert!(recorder.calls().is_empty());
}

#[test]
fn test_delta_request_offsets_previous_start_translate() {
    let mut c = controller(drag_options());
    let recorder = Recorder::install(&mut c, StartBehavior::Nothing);

    // a pointer drag without set() records the element origin (100, 50)
    press_target(&mut c, 0.0, 0.0);
    release(&mut c, 0.0, 0.0);
    recorder.clear();

    c.request(RequestKind::Draggable, &RequestParams::delta(1.0, 2.0))
        .unwrap();

    assert_eq!(recorder.drags(), vec![Vec2::new(101.0, 52.0)]);
}

#[test]
fn test_delta_request_without_history_starts_from_zero() {
    let mut c = controller(drag_options());
    let recorder = Recorder::install(&mut c, StartBehavior::Nothing);

    c.request(RequestKind::Draggable, &RequestParams::delta(3.0, 4.0))
        .unwrap();
    // requests never clear the recorded translate, nor invent one
    c.request(RequestKind::Draggable, &RequestParams::delta(3.0, 4.0))
        .unwrap();

    assert_eq!(recorder.drags(), vec![Vec2::new(3.0, 4.0), Vec2::new(3.0, 4.0)]);
}

#[test]
fn test_request_set_applies_to_following_request() {
    let mut c = controller(drag_options());
    let recorder = Recorder::install(&mut c, StartBehavior::Set(Vec2::new(40.0, 40.0)));

    // the delta is taken against the translate recorded before this call
    c.request(RequestKind::Draggable, &RequestParams::delta(1.0, 1.0))
        .unwrap();
    c.request(RequestKind::Draggable, &RequestParams::delta(1.0, 1.0))
        .unwrap();

    assert_eq!(
        recorder.drags(),
        vec![Vec2::new(1.0, 1.0), Vec2::new(41.0, 41.0)]
    );
}

#[test]
fn test_request_set_writes_no_transform() {
    let mut c = controller(drag_options());
    Recorder::install(&mut c, StartBehavior::Set(Vec2::new(7.0, 7.0)));

    c.request(RequestKind::Draggable, &RequestParams::position(1.0, 1.0))
        .unwrap();

    assert!(c.surface().element(c.target()).unwrap().transform.is_none());
}

#[test]
fn test_stopped_request_returns_false() {
    let mut c = controller(drag_options().resizable(true));
    let recorder = Recorder::install(&mut c, StartBehavior::Stop);

    assert!(!c.request(RequestKind::Draggable, &RequestParams::position(1.0, 1.0)).unwrap());
    assert!(!c.request(RequestKind::Resizable, &RequestParams::size(1.0, 1.0)).unwrap());

    assert_eq!(
        recorder.calls(),
        vec![
            Call::DragStart { page: None },
            Call::ResizeStart { page: None },
        ]
    );
}

#[test]
fn test_resize_request_fires_exact_sequence() {
    let mut c = controller(resize_options());
    let recorder = Recorder::install(&mut c, StartBehavior::Nothing);

    assert!(c.request(RequestKind::Resizable, &RequestParams::size(100.0, 50.0)).unwrap());

    assert_eq!(
        recorder.calls(),
        vec![
            Call::ResizeStart { page: None },
            Call::Resize {
                width: 100.0,
                height: 50.0,
                translate: Vec2::ZERO,
                direction: None,
            },
            Call::ResizeEnd,
        ]
    );
}

#[test]
fn test_requests_leave_listeners_untouched() {
    let mut c = controller(drag_options().resizable(true));
    Recorder::install(&mut c, StartBehavior::Nothing);
    let listeners = c.listeners().to_vec();
    let journal_len = c.surface().journal().len();

    c.request(RequestKind::Draggable, &RequestParams::position(1.0, 1.0))
        .unwrap();
    c.request(RequestKind::Resizable, &RequestParams::size(1.0, 1.0))
        .unwrap();

    assert_eq!(c.listeners(), listeners.as_slice());
    assert_eq!(c.surface().journal().len(), journal_len);
}

#[test]
fn test_request_by_name() {
    let mut c = controller(drag_options().resizable(true));
    let recorder = Recorder::install(&mut c, StartBehavior::Nothing);

    assert!(!c.request_named("rotatable", &RequestParams::position(1.0, 1.0)).unwrap());
    assert!(recorder.calls().is_empty());

    assert!(c.request_named("draggable", &RequestParams::position(2.0, 3.0)).unwrap());
    assert!(c.request_named("resizable", &RequestParams::size(4.0, 5.0)).unwrap());
    assert_eq!(recorder.drags(), vec![Vec2::new(2.0, 3.0)]);
    assert_eq!(recorder.count(|c| *c == Call::ResizeEnd), 1);
}

#[test]
fn test_request_params_from_json() {
    let mut c = controller(drag_options());
    let recorder = Recorder::install(&mut c, StartBehavior::Nothing);

    let params = RequestParams::from_json(r#"{"x": 12, "y": -4}"#).unwrap();
    c.request(RequestKind::Draggable, &params).unwrap();

    assert_eq!(recorder.calls()[1], requested_drag(Vec2::new(12.0, -4.0)));
}

#[test]
fn test_request_handler_error_propagates() {
    let mut c = controller(drag_options());
    c.on(Handler::drag_end(|| anyhow::bail!("end failed")));

    let err = c
        .request(RequestKind::Draggable, &RequestParams::position(0.0, 0.0))
        .unwrap_err();

    assert_eq!(err.event_type(), Some(EventType::DragEnd));
}
