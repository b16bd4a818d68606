//! Frame composition checks on a headless canvas.

// Test file: unwrap/expect/panic acceptable in test code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
// Test files legitimately use arithmetic for verification; allow at file level.
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};
use panel::{ButtonItem, Direction, Font, Icon, Orientation, Panel, PanelConfig};
use panel_testing::TestCanvas;

/// 8x8, top-left pixel lit.
static DOT: Icon<'static> = Icon::new(&[0x80, 0, 0, 0, 0, 0, 0, 0], 8);
/// 8x8, all lit.
static FULL: Icon<'static> = Icon::new(&[0xFF; 8], 8);

type TestPanel<'a> = Panel<'a, NoopRawMutex, 16, 4, 4>;

fn tile(x: i32, y: i32) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(8, 8))
}

fn canvas_for(panel: &TestPanel<'_>) -> TestCanvas {
    TestCanvas::with_size(panel.orientation().canvas_size())
}

#[test]
fn empty_panel_renders_background_only() {
    let panel = TestPanel::new();
    let mut canvas = canvas_for(&panel);
    panel.render(&mut canvas).unwrap();
    assert_eq!(canvas.clears(), 1);
    assert_eq!(canvas.count_on(), 0);

    let lit = TestPanel::with_config(PanelConfig::new().background(BinaryColor::On));
    let mut canvas = canvas_for(&lit);
    lit.render(&mut canvas).unwrap();
    canvas.assert_pixel(63, 127, BinaryColor::On).unwrap();
}

#[test]
fn item_is_drawn_over_decoration() {
    let panel = TestPanel::new();
    panel.reserve(2, 1);
    panel.add_icon(Point::new(0, 0), &FULL);
    // Cell (1,0) is not selected: the selection sits on empty (0,0).
    panel.add_item(1, 0, ButtonItem::new(1, Point::new(0, 0), &DOT, &FULL));

    let mut canvas = canvas_for(&panel);
    panel.render(&mut canvas).unwrap();
    assert_eq!(canvas.count_on_in(tile(0, 0)), 1, "\n{}", canvas.to_ascii());
}

#[test]
fn selected_cell_uses_selected_variant() {
    let panel = TestPanel::new();
    panel.reserve(2, 1);
    panel.add_item(0, 0, ButtonItem::new(1, Point::new(0, 0), &DOT, &FULL));
    panel.add_item(1, 0, ButtonItem::new(2, Point::new(16, 0), &DOT, &FULL));

    let mut canvas = canvas_for(&panel);
    panel.render(&mut canvas).unwrap();
    assert_eq!(canvas.count_on_in(tile(0, 0)), 64);
    assert_eq!(canvas.count_on_in(tile(16, 0)), 1);

    assert!(panel.navigate(Direction::Right));
    panel.render(&mut canvas).unwrap();
    assert_eq!(canvas.count_on_in(tile(0, 0)), 1);
    assert_eq!(canvas.count_on_in(tile(16, 0)), 64);
    assert_eq!(canvas.clears(), 2);
}

#[test]
fn labels_are_drawn_last() {
    // Dark text over a lit item punches holes into it.
    let config = PanelConfig::new().text_color(BinaryColor::Off);
    let panel = TestPanel::with_config(config);
    panel.reserve(1, 1);
    panel.add_item(0, 0, ButtonItem::new(1, Point::new(0, 0), &FULL, &FULL));
    panel.add_label(1, Point::new(1, 7), Font::Keyboard, "8");

    let mut canvas = canvas_for(&panel);
    panel.render(&mut canvas).unwrap();
    let lit = canvas.count_on_in(tile(0, 0));
    assert!(lit < 64, "label did not overwrite the item:\n{}", canvas.to_ascii());
    assert!(lit > 0);
}

#[test]
fn label_text_change_shows_on_next_frame() {
    let panel = TestPanel::new();
    panel.add_label(3, Point::new(0, 10), Font::Secondary, "I");

    let mut canvas = canvas_for(&panel);
    panel.render(&mut canvas).unwrap();
    let before = canvas.count_on();

    panel.set_label_text(3, "WWW");
    panel.render(&mut canvas).unwrap();
    assert!(canvas.count_on() > before);
}

#[test]
fn canvas_follows_orientation() {
    let portrait = TestPanel::new();
    assert_eq!(portrait.orientation().canvas_size(), Size::new(64, 128));

    let landscape = TestPanel::with_config(PanelConfig::horizontal());
    assert_eq!(landscape.orientation(), Orientation::Horizontal);
    assert_eq!(landscape.orientation().canvas_size(), Size::new(128, 64));

    landscape.reserve(1, 1);
    landscape.add_item(0, 0, ButtonItem::new(1, Point::new(120, 56), &FULL, &FULL));
    let mut canvas = canvas_for(&landscape);
    landscape.render(&mut canvas).unwrap();
    assert_eq!(canvas.clipped(), 0);
    assert_eq!(canvas.count_on(), 64);
}
