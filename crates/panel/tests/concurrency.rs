//! Render and input actors sharing one panel from separate threads.
//!
//! Kept in its own test binary: [`LockStats`] counters are process-wide.

// Test file: unwrap/expect/panic acceptable in test code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
// Test files legitimately use arithmetic for verification; allow at file level.
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use embedded_graphics::{prelude::*, primitives::Rectangle};
use panel::{ButtonItem, Icon, InputEvent, InputKey, Panel};
use panel_testing::{InstrumentedRawMutex, LockStats, TestCanvas};

static DOT: Icon<'static> = Icon::new(&[0x80, 0, 0, 0, 0, 0, 0, 0], 8);
static DOT_ALT: Icon<'static> = Icon::new(&[0, 0, 0, 0x01, 0, 0, 0, 0], 8);
static FULL: Icon<'static> = Icon::new(&[0xFF; 8], 8);

const SIDE: u16 = 4;
const FRAMES: usize = 60;

/// Clears the flag when dropped, so a failing render thread still stops the
/// other actors.
struct StopOnDrop<'a>(&'a AtomicBool);

impl Drop for StopOnDrop<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

fn tile(col: u16, row: u16) -> Rectangle {
    Rectangle::new(
        Point::new(i32::from(col) * 10, i32::from(row) * 10),
        Size::new(8, 8),
    )
}

#[test]
fn frames_stay_consistent_while_input_and_updates_race() {
    let panel: Panel<'_, InstrumentedRawMutex, 16, 1, 1> = Panel::new();
    panel.reserve(SIDE, SIDE);
    for row in 0..SIDE {
        for col in 0..SIDE {
            let index = row * SIDE + col;
            let origin = tile(col, row).top_left;
            panel.add_item(col, row, ButtonItem::new(index, origin, &DOT, &FULL));
        }
    }

    let before = LockStats::snapshot();
    let rendering = AtomicBool::new(true);

    thread::scope(|s| {
        // Render actor: slow draw calls widen the window for torn frames.
        s.spawn(|| {
            let _stop = StopOnDrop(&rendering);
            let mut canvas = TestCanvas::with_size(panel.orientation().canvas_size())
                .with_draw_delay(Duration::from_micros(50));
            for frame in 0..FRAMES {
                panel.render(&mut canvas).unwrap();
                // 15 unselected items show one dot, the selected one is solid.
                assert_eq!(canvas.count_on(), 15 + 64, "frame {frame}:\n{}", canvas.to_ascii());
                let solid = (0..SIDE)
                    .flat_map(|row| (0..SIDE).map(move |col| (col, row)))
                    .filter(|&(col, row)| canvas.count_on_in(tile(col, row)) == 64)
                    .count();
                assert_eq!(solid, 1, "frame {frame}");
            }
        });

        // Input actor walks the grid.
        s.spawn(|| {
            let keys = [InputKey::Right, InputKey::Down, InputKey::Left, InputKey::Up];
            let mut step = 0usize;
            while rendering.load(Ordering::SeqCst) {
                assert!(panel.handle_input(InputEvent::short(keys[step % keys.len()])));
                step += 1;
            }
        });

        // Application thread swaps an icon group back and forth.
        s.spawn(|| {
            let mut alt = false;
            while rendering.load(Ordering::SeqCst) {
                let normal = if alt { &DOT_ALT } else { &DOT };
                for index in 0..SIDE * SIDE {
                    assert_eq!(panel.set_icons_by_index(index, normal, &FULL), 1);
                }
                alt = !alt;
                thread::yield_now();
            }
        });
    });

    let stats = LockStats::snapshot().since(&before);
    assert_eq!(stats.overlaps, 0);
    assert!(stats.acquisitions >= FRAMES);
    let (col, row) = (panel.selection().col, panel.selection().row);
    assert!(col < SIDE && row < SIDE);
}
