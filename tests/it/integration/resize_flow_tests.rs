//! Resize handles and pointer-driven resize gestures.

use crate::helpers::*;
use moveable::{
    Direction, Directions, ElementId, GestureController, Listener, MemorySurface, Options, Rect,
    Vec2,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

// ============================================================================
// Handle overlay
// ============================================================================

#[test]
fn test_all_eight_handles_created_by_default() {
    let c = controller(resize_options());
    let surface = c.surface();

    let container = c.container().expect("container");
    assert_eq!(surface.find_by_dom_id("resizable-container"), Some(container));
    assert_eq!(surface.element(container).unwrap().parent, Some(c.target()));
    assert_eq!(surface.element(container).unwrap().children.len(), 8);

    for direction in Direction::ALL {
        let id = handle(&c, direction);
        let element = surface.element(id).unwrap();
        assert_eq!(element.dom_id.as_deref(), Some(format!("resizable-{direction}").as_str()));
        assert_eq!(element.parent, Some(container));
    }
}

#[test]
fn test_threshold_sets_handle_thickness() {
    let c = controller(resize_options().threshold(4.0));
    let surface = c.surface();

    let south = &surface.element(handle(&c, Direction::S)).unwrap().style_text;
    assert!(south.contains("height: 4px;"), "{south}");
    assert!(south.contains("width: 100%;"), "{south}");

    let corner = &surface.element(handle(&c, Direction::NW)).unwrap().style_text;
    assert!(corner.contains("width: 4px;"), "{corner}");
    assert!(corner.contains("height: 4px;"), "{corner}");
}

#[test]
fn test_direction_subset_creates_only_those_handles() {
    let c = controller(resize_options().directions("s,se"));
    let surface = c.surface();

    assert_eq!(c.directions().directions().collect::<Vec<_>>(), vec![Direction::S, Direction::SE]);
    assert!(surface.find_by_dom_id("resizable-s").is_some());
    assert!(surface.find_by_dom_id("resizable-se").is_some());
    assert!(surface.find_by_dom_id("resizable-n").is_none());
    assert_eq!(
        surface.element(c.container().unwrap()).unwrap().children.len(),
        2
    );
}

#[test]
fn test_resize_disabled_creates_no_overlay() {
    let c = controller(drag_options());
    assert!(c.container().is_none());
    assert!(c.surface().find_by_dom_id("resizable-container").is_none());
    assert!(c.directions().is_empty());
}

// ============================================================================
// Resize gestures
// ============================================================================

#[test]
fn test_se_handle_resize_flow() {
    let mut c = controller(resize_options());
    let recorder = Recorder::install(&mut c, StartBehavior::Set(Vec2::ZERO));
    let se = handle(&c, Direction::SE);

    press(&mut c, se, 300.0, 150.0);
    assert!(c.is_resizing());
    move_to(&mut c, 320.0, 170.0);
    release(&mut c, 320.0, 170.0);

    assert_eq!(
        recorder.calls(),
        vec![
            Call::ResizeStart { page: Some(Vec2::new(300.0, 150.0)) },
            Call::Resize {
                width: 220.0,
                height: 120.0,
                translate: Vec2::ZERO,
                direction: Some(Direction::SE),
            },
            Call::ResizeEnd,
        ]
    );
    assert!(!c.is_resizing());
}

#[test]
fn test_handle_press_does_not_start_drag() {
    let mut c = controller(drag_options().resizable(true));
    let recorder = Recorder::install(&mut c, StartBehavior::Set(Vec2::ZERO));
    let se = handle(&c, Direction::SE);

    press(&mut c, se, 300.0, 150.0);
    move_to(&mut c, 310.0, 160.0);
    release(&mut c, 310.0, 160.0);

    assert!(!c.is_dragging());
    assert_eq!(recorder.count(|c| matches!(c, Call::DragStart { .. })), 0);
    assert!(recorder.drags().is_empty());
    assert_eq!(recorder.count(|c| *c == Call::ResizeEnd), 1);
}

#[test]
fn test_nw_handle_shifts_translate() {
    let mut c = controller(resize_options());
    let recorder = Recorder::install(&mut c, StartBehavior::Set(Vec2::ZERO));
    let nw = handle(&c, Direction::NW);

    press(&mut c, nw, 100.0, 50.0);
    move_to(&mut c, 90.0, 45.0);
    // dragged past the opposite edge: width clamps at zero
    move_to(&mut c, 350.0, 60.0);

    let resizes: Vec<_> = recorder
        .calls()
        .into_iter()
        .filter(|call| matches!(call, Call::Resize { .. }))
        .collect();
    assert_eq!(
        resizes,
        vec![
            Call::Resize {
                width: 210.0,
                height: 105.0,
                translate: Vec2::new(-10.0, -5.0),
                direction: Some(Direction::NW),
            },
            Call::Resize {
                width: 0.0,
                height: 90.0,
                translate: Vec2::new(200.0, 10.0),
                direction: Some(Direction::NW),
            },
        ]
    );
}

#[test]
fn test_edge_handle_keeps_other_axis() {
    let mut c = controller(resize_options());
    let recorder = Recorder::install(&mut c, StartBehavior::Set(Vec2::new(5.0, 5.0)));
    let east = handle(&c, Direction::E);

    press(&mut c, east, 300.0, 100.0);
    move_to(&mut c, 280.0, 400.0);

    assert_eq!(
        recorder.calls()[1],
        Call::Resize {
            width: 180.0,
            height: 100.0,
            translate: Vec2::new(5.0, 5.0),
            direction: Some(Direction::E),
        }
    );
}

#[test]
fn test_resize_stop_prevents_updates() {
    let mut c = controller(resize_options());
    let recorder = Recorder::install(&mut c, StartBehavior::Stop);
    let s = handle(&c, Direction::S);

    press(&mut c, s, 200.0, 150.0);
    assert!(!c.is_resizing());
    assert!(!c.surface().is_subscribed(Listener::ResizeMove));

    move_to(&mut c, 200.0, 200.0);
    release(&mut c, 200.0, 200.0);

    assert_eq!(
        recorder.calls(),
        vec![Call::ResizeStart { page: Some(Vec2::new(200.0, 150.0)) }]
    );
}

#[test]
fn test_container_press_is_not_a_resize() {
    let mut c = controller(drag_options().resizable(true));
    let recorder = Recorder::install(&mut c, StartBehavior::Set(Vec2::ZERO));
    let container = c.container().unwrap();

    press(&mut c, container, 150.0, 80.0);

    assert!(c.state().is_idle());
    assert!(recorder.calls().is_empty());
}

#[test]
fn test_move_after_resize_end_is_ignored() {
    let mut c = controller(resize_options());
    let recorder = Recorder::install(&mut c, StartBehavior::Set(Vec2::ZERO));
    let s = handle(&c, Direction::S);

    press(&mut c, s, 0.0, 0.0);
    move_to(&mut c, 0.0, 10.0);
    release(&mut c, 0.0, 10.0);
    assert_eq!(move_to(&mut c, 0.0, 50.0), 0);

    assert_eq!(recorder.count(|c| matches!(c, Call::Resize { .. })), 1);
}

#[test]
fn test_missing_set_resizes_from_element_origin() {
    let mut c = controller(resize_options());
    let recorder = Recorder::install(&mut c, StartBehavior::Nothing);
    let w = handle(&c, Direction::W);

    press(&mut c, w, 100.0, 100.0);
    move_to(&mut c, 110.0, 100.0);

    assert_eq!(
        recorder.calls()[1],
        Call::Resize {
            width: 190.0,
            height: 100.0,
            translate: Vec2::new(110.0, 50.0),
            direction: Some(Direction::W),
        }
    );
}

// ============================================================================
// Externally supplied handles
// ============================================================================

fn controller_with_external_handle() -> (GestureController<MemorySurface>, ElementId) {
    let mut surface = MemorySurface::new();
    let target = surface.insert_element(TARGET_RECT);
    let external = surface.insert_element(Rect::new(290.0, 140.0, 10.0, 10.0));

    let mut map = BTreeMap::new();
    map.insert("se".to_string(), Some(external));
    map.insert("s".to_string(), None);
    let options = resize_options().directions(Directions::Map(map));

    let c = GestureController::new(target, options, surface).unwrap();
    (c, external)
}

#[test]
fn test_external_handle_is_not_recreated() {
    let (c, external) = controller_with_external_handle();

    assert_eq!(c.directions().handle(Direction::SE), Some(external));
    assert!(c.surface().find_by_dom_id("resizable-se").is_none());
    assert!(c.surface().find_by_dom_id("resizable-s").is_some());
    assert!(c.is_subscribed(Listener::ResizeStart(external)));
}

#[test]
fn test_external_handle_drives_resize() {
    let (mut c, external) = controller_with_external_handle();
    let recorder = Recorder::install(&mut c, StartBehavior::Set(Vec2::ZERO));

    press(&mut c, external, 295.0, 145.0);
    move_to(&mut c, 305.0, 150.0);

    assert_eq!(
        recorder.calls()[1],
        Call::Resize {
            width: 210.0,
            height: 105.0,
            translate: Vec2::ZERO,
            direction: Some(Direction::SE),
        }
    );
}

#[test]
fn test_directions_from_json_options() {
    let options = Options::from_json(r#"{"resizable": true, "directions": ["n", "bogus", "e"]}"#)
        .unwrap();
    let c = controller(options);

    assert_eq!(
        c.directions().directions().collect::<Vec<_>>(),
        vec![Direction::E, Direction::N]
    );
}

#[test]
fn test_zero_threshold_falls_back_to_default_thickness() {
    let options = Options::from_json(r#"{"resizable": true, "threshold": 0}"#).unwrap();
    let c = controller(options);

    let corner = &c.surface().element(handle(&c, Direction::SE)).unwrap().style_text;
    assert!(corner.ends_with("width: 10px;\nheight: 10px;\n"), "{corner}");

    let c = controller(resize_options().threshold(-3.0));
    let edge = &c.surface().element(handle(&c, Direction::N)).unwrap().style_text;
    assert!(edge.contains("height: 10px;"), "{edge}");
}
