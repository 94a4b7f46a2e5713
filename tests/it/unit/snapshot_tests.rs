//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin the exact inline style text the overlay elements
//! receive. To update them after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::*;
use moveable::Direction;
use moveable::input::handle_style;
use moveable::style::DEFAULT_STYLE;

// ============================================================================
// Handle styles
// ============================================================================

#[test]
fn snapshot_corner_handle_style() {
    insta::assert_snapshot!(handle_style(Direction::SE, 10.0).to_style_text(), @r"
    position: absolute;
    right: 0;
    bottom: 0;
    cursor: se-resize;
    pointer-events: auto;
    z-index: 2;
    width: 10px;
    height: 10px;
    ");
}

#[test]
fn snapshot_edge_handle_style() {
    insta::assert_snapshot!(handle_style(Direction::S, 10.0).to_style_text(), @r"
    position: absolute;
    bottom: 0;
    left: 0;
    width: 100%;
    cursor: s-resize;
    pointer-events: auto;
    z-index: 1;
    height: 10px;
    ");
}

#[test]
fn snapshot_created_handle_uses_threshold() {
    let c = controller(resize_options().threshold(3.0));
    let w = c.surface().element(handle(&c, Direction::W)).unwrap();

    insta::assert_snapshot!(w.style_text.as_str(), @r"
    position: absolute;
    top: 0;
    left: 0;
    height: 100%;
    cursor: w-resize;
    pointer-events: auto;
    z-index: 1;
    width: 3px;
    ");
}

// ============================================================================
// Overlay container
// ============================================================================

#[test]
fn snapshot_container_style() {
    let c = controller(resize_options());
    let container = c.surface().element(c.container().unwrap()).unwrap();

    insta::assert_snapshot!(container.style_text.as_str(), @r"
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    pointer-events: none;
    ");
}

#[test]
fn snapshot_default_stylesheet_selectors() {
    let selectors: Vec<&str> = DEFAULT_STYLE
        .rules()
        .iter()
        .map(|rule| rule.selector.as_str())
        .collect();

    insta::assert_snapshot!(selectors.join("\n"), @r"
    #resizable-container
    #resizable-s
    #resizable-se
    #resizable-e
    #resizable-ne
    #resizable-n
    #resizable-nw
    #resizable-w
    #resizable-sw
    ");
}
