//! Air-conditioner remote laid out on a grid panel, in a desktop window.
//!
//! Run with: `cargo run -p panel --example remote_panel --features simulator`
//!
//! Keys: arrows move, Enter confirms, Space is a long Ok, Escape leaves.
//!
//! Layout (2 columns x 4 rows, portrait):
//!
//! ```text
//!   [PWR] [PWR]     one wide power button (both cells carry index 0)
//!   [ - ]  24 [ + ] temperature
//!   [MOD] [FAN]     mode and fan speed
//!         [SWG]     swing; (0,3) is left empty
//! ```

// Desktop demo: plain arithmetic on small counters.
#![allow(clippy::arithmetic_side_effects)]

use core::convert::Infallible;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{
    BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use panel::{
    ButtonItem, Font, Icon, InputEvent, InputKey, InputType, Panel, PressKind, View,
};
use tracing_subscriber::EnvFilter;

// ── Bitmaps (16x16, 2 bytes per row) ───────────────────────────────────────

#[rustfmt::skip]
static KEY: Icon<'static> = Icon::new(&[
    0xFF, 0xFF, 0x80, 0x01, 0x80, 0x01, 0x80, 0x01,
    0x80, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0x01,
    0x80, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0x01,
    0x80, 0x01, 0x80, 0x01, 0x80, 0x01, 0xFF, 0xFF,
], 16);

#[rustfmt::skip]
static KEY_SELECTED: Icon<'static> = Icon::new(&[
    0xFF, 0xFF, 0xFF, 0xFF, 0xC0, 0x03, 0xC0, 0x03,
    0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03,
    0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03,
    0xC0, 0x03, 0xC0, 0x03, 0xFF, 0xFF, 0xFF, 0xFF,
], 16);

#[rustfmt::skip]
static POWER_OFF: Icon<'static> = Icon::new(&[
    0xFF, 0xFF, 0x80, 0x01, 0x81, 0x81, 0x81, 0x81,
    0x8D, 0xB1, 0x91, 0x89, 0xA1, 0x85, 0xA0, 0x05,
    0xA0, 0x05, 0xA0, 0x05, 0x90, 0x09, 0x88, 0x11,
    0x87, 0xE1, 0x80, 0x01, 0x80, 0x01, 0xFF, 0xFF,
], 16);

#[rustfmt::skip]
static POWER_OFF_SELECTED: Icon<'static> = Icon::new(&[
    0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0x7F, 0xFE, 0x7F,
    0xF2, 0x4F, 0xEE, 0x77, 0xDE, 0x7B, 0xDF, 0xFB,
    0xDF, 0xFB, 0xDF, 0xFB, 0xEF, 0xF7, 0xF7, 0xEF,
    0xF8, 0x1F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
], 16);

#[rustfmt::skip]
static POWER_ON: Icon<'static> = Icon::new(&[
    0xFF, 0xFF, 0xFF, 0xFF, 0xC1, 0x83, 0xC1, 0x83,
    0xCD, 0xB3, 0xD1, 0x8B, 0xE1, 0x87, 0xE0, 0x07,
    0xE0, 0x07, 0xE0, 0x07, 0xD0, 0x0B, 0xC8, 0x13,
    0xC7, 0xE3, 0xC0, 0x03, 0xFF, 0xFF, 0xFF, 0xFF,
], 16);

/// 8x8 snowflake shown in the status corner.
static SNOWFLAKE: Icon<'static> = Icon::new(&[0x10, 0x92, 0x54, 0x38, 0x54, 0x92, 0x10, 0x00], 8);

// ── Button groups and label ids ─────────────────────────────────────────────

const POWER: u16 = 0;
const TEMP_DOWN: u16 = 1;
const TEMP_UP: u16 = 2;
const MODE: u16 = 3;
const FAN: u16 = 4;
const SWING: u16 = 5;

const TEMP_LABEL: i32 = 0;
const MODE_LABEL: i32 = 1;
const FAN_LABEL: i32 = 2;

static TEMPERATURES: [&str; 15] = [
    "16", "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30",
];
static MODES: [&str; 5] = ["COOL", "HEAT", "DRY", "FAN", "AUTO"];
static FAN_SPEEDS: [&str; 4] = ["F:A", "F:1", "F:2", "F:3"];

// ── Remote state ────────────────────────────────────────────────────────────

static PANEL: Panel<'static, CriticalSectionRawMutex> = Panel::new();

static POWERED: AtomicBool = AtomicBool::new(false);
static TEMPERATURE: AtomicUsize = AtomicUsize::new(8);
static MODE_SEL: AtomicUsize = AtomicUsize::new(0);
static FAN_SEL: AtomicUsize = AtomicUsize::new(0);

/// Step a cyclic selector and return the entry it now points at.
fn cycle(selector: &AtomicUsize, entries: &'static [&'static str]) -> &'static str {
    let len = entries.len();
    let next = selector.load(Ordering::Relaxed).wrapping_add(1) % len;
    selector.store(next, Ordering::Relaxed);
    entries.get(next).copied().unwrap_or_default()
}

fn on_button(press: PressKind, index: u16) {
    tracing::info!(index, press = press.as_str(), "remote key");
    match index {
        POWER => {
            let powered = !POWERED.fetch_xor(true, Ordering::Relaxed);
            let (icon, selected) = if powered {
                (&POWER_ON, &POWER_ON)
            } else {
                (&POWER_OFF, &POWER_OFF_SELECTED)
            };
            PANEL.set_icons_by_index(POWER, icon, selected);
        }
        TEMP_DOWN | TEMP_UP => {
            let current = TEMPERATURE.load(Ordering::Relaxed);
            // A long press jumps to the end of the range.
            let next = match (index, press) {
                (TEMP_DOWN, PressKind::Long) => 0,
                (TEMP_DOWN, PressKind::Short) => current.saturating_sub(1),
                (_, PressKind::Long) => TEMPERATURES.len() - 1,
                (_, PressKind::Short) => (current + 1).min(TEMPERATURES.len() - 1),
            };
            TEMPERATURE.store(next, Ordering::Relaxed);
            if let Some(text) = TEMPERATURES.get(next) {
                PANEL.set_label_text(TEMP_LABEL, text);
            }
        }
        MODE => {
            PANEL.set_label_text(MODE_LABEL, cycle(&MODE_SEL, &MODES));
        }
        FAN => {
            PANEL.set_label_text(FAN_LABEL, cycle(&FAN_SEL, &FAN_SPEEDS));
        }
        _ => {}
    }
    // Label swaps do not move the selection; ask for a frame explicitly.
    PANEL.request_redraw();
}

static HANDLER: fn(PressKind, u16) = on_button;

fn build_remote() {
    let key = |index, x, y| ButtonItem::new(index, Point::new(x, y), &KEY, &KEY_SELECTED)
        .on_activate(&HANDLER);
    let power = |x| ButtonItem::new(POWER, Point::new(x, 2), &POWER_OFF, &POWER_OFF_SELECTED)
        .on_activate(&HANDLER);

    PANEL.reserve(2, 4);
    PANEL.add_item(0, 0, power(12));
    PANEL.add_item(1, 0, power(36));
    PANEL.add_item(0, 1, key(TEMP_DOWN, 2, 26));
    PANEL.add_item(1, 1, key(TEMP_UP, 46, 26));
    PANEL.add_item(0, 2, key(MODE, 8, 62));
    PANEL.add_item(1, 2, key(FAN, 40, 62));
    PANEL.add_item(1, 3, key(SWING, 40, 92));

    PANEL.add_icon(Point::new(4, 116), &SNOWFLAKE);

    let temperature = TEMPERATURES
        .get(TEMPERATURE.load(Ordering::Relaxed))
        .copied()
        .unwrap_or_default();
    PANEL.add_label(TEMP_LABEL, Point::new(22, 42), Font::BigNumbers, temperature);
    PANEL.add_label(3, Point::new(7, 37), Font::Primary, "-");
    PANEL.add_label(4, Point::new(51, 37), Font::Primary, "+");
    PANEL.add_label(MODE_LABEL, Point::new(4, 90), Font::Secondary, "COOL");
    PANEL.add_label(FAN_LABEL, Point::new(36, 90), Font::Secondary, "F:A");
    PANEL.add_label(5, Point::new(16, 124), Font::Keyboard, "SWING");
    PANEL.reset_selection();
}

fn key_event(keycode: Keycode, repeat: bool) -> Option<InputEvent> {
    let kind = if repeat { InputType::Repeat } else { InputType::Short };
    let key = match keycode {
        Keycode::Up => InputKey::Up,
        Keycode::Down => InputKey::Down,
        Keycode::Left => InputKey::Left,
        Keycode::Right => InputKey::Right,
        Keycode::Return => InputKey::Ok,
        Keycode::Space => return Some(InputEvent::new(InputKey::Ok, InputType::Long)),
        Keycode::Escape | Keycode::Backspace => InputKey::Back,
        _ => return None,
    };
    Some(InputEvent::new(key, kind))
}

fn main() -> Result<(), Infallible> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    build_remote();

    let mut display: SimulatorDisplay<BinaryColor> =
        SimulatorDisplay::new(PANEL.orientation().canvas_size());
    let output_settings = OutputSettingsBuilder::new()
        .scale(4)
        .theme(BinaryColorTheme::OledBlue)
        .build();
    let mut window = Window::new("AC Remote", &output_settings);

    loop {
        if PANEL.take_redraw_request() {
            PANEL.draw(&mut display)?;
        }
        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    let Some(event) = key_event(keycode, repeat) else {
                        continue;
                    };
                    if !PANEL.input(event) && event.key == InputKey::Back {
                        // Unconsumed Back pops the scene; here that ends the demo.
                        tracing::info!("back pressed, leaving remote");
                        PANEL.reset();
                        return Ok(());
                    }
                }
                _ => {}
            }
        }

        std::thread::sleep(Duration::from_millis(16));
    }
}
