//! Grid panel widget for small monochrome displays.
//!
//! A panel is a sparse matrix of selectable button items plus free-floating
//! icons and text labels. The host display service calls
//! [`Panel::render`] whenever it needs a frame and [`Panel::handle_input`]
//! for every key event; the d-pad moves the selection to the nearest occupied
//! cell and Ok fires the selected item's handler.
//!
//! The model lives behind an `embassy-sync` blocking mutex so the render and
//! input actors never observe a half-updated grid. Storage is `heapless`:
//! capacities are const generics, nothing touches the heap.
//!
//! # Features
//!
//! - `std`: `std::error::Error` for [`PanelError`]
//! - `defmt`: `defmt::Format` derives and defmt log output
//! - `tracing`: log output through `tracing`
//! - `simulator`: desktop window for the `remote_panel` example

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(unused_must_use)]
#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects
    )
)]

#[macro_use]
mod fmt;

pub mod config;
pub mod error;
pub mod icon;
pub mod input;
pub mod item;
pub mod label;
pub mod matrix;
pub mod model;
pub mod navigation;
pub mod panel;
pub mod render;
pub mod view;

pub use config::{Orientation, PanelConfig};
pub use error::PanelError;
pub use icon::{Icon, IconElement};
pub use input::{InputEvent, InputKey, InputType, PressKind};
pub use item::{ButtonHandler, ButtonItem};
pub use label::{Font, LabelElement};
pub use navigation::{next_selection, Cell, Direction, Occupancy};
pub use panel::Panel;
pub use view::View;
