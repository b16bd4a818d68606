//! The panel widget: a [`PanelModel`] behind a blocking mutex.
//!
//! Every operation takes the lock for exactly its own duration through a
//! private scoped accessor; the guard is released on every exit path, panics
//! included. Nothing that runs under the lock calls back into the panel, and
//! callers cannot run their own code under it:
//!
//! ```compile_fail
//! use embassy_sync::blocking_mutex::raw::NoopRawMutex;
//! use panel::Panel;
//!
//! let panel: Panel<'_, NoopRawMutex> = Panel::new();
//! panel.with_model(|_model| ());
//! ```
//!
//! Button handlers run after the lock is dropped, so they may re-enter.
//!
//! # Contract violations
//!
//! Reserving a zero-sized or oversized grid, reserving twice, adding or
//! querying an item outside the grid, adding onto an occupied cell, and
//! overflowing the icon or label capacity are caller bugs. The plain methods abort on them; each has
//! a `try_*` twin that returns the [`PanelError`] instead.
//!
//! # Example
//!
//! ```
//! use embassy_sync::blocking_mutex::raw::NoopRawMutex;
//! use embedded_graphics::prelude::Point;
//! use panel::{ButtonItem, Icon, InputEvent, InputKey, Panel, PressKind};
//!
//! static POWER: Icon<'static> = Icon::new(&[0x3C, 0x42, 0x42, 0x3C], 8);
//! static POWER_SEL: Icon<'static> = Icon::new(&[0x3C, 0x7E, 0x7E, 0x3C], 8);
//!
//! let on_power = |_press: PressKind, _index: u16| { /* send IR frame */ };
//! let panel: Panel<'_, NoopRawMutex> = Panel::new();
//! panel.reserve(1, 1);
//! panel.add_item(0, 0, ButtonItem::new(0, Point::new(28, 10), &POWER, &POWER_SEL).on_activate(&on_power));
//! assert!(panel.handle_input(InputEvent::short(InputKey::Ok)));
//! ```

use core::cell::RefCell;

use embassy_sync::blocking_mutex::{raw::RawMutex, Mutex};
use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::config::{Orientation, PanelConfig, DEFAULT_CELLS, DEFAULT_ICONS, DEFAULT_LABELS};
use crate::error::PanelError;
use crate::icon::Icon;
use crate::input::{InputEvent, InputKey, PressKind};
use crate::item::ButtonItem;
use crate::label::Font;
use crate::model::PanelModel;
use crate::navigation::{Cell, Direction};
use crate::render::render_model;
use crate::view::View;

/// Grid panel widget shared between a render actor and an input actor.
///
/// `M` picks the lock: `CriticalSectionRawMutex` when the panel is touched
/// from interrupt context or several executors, `NoopRawMutex` when a single
/// executor owns it. `CELLS`, `ICONS` and `LABELS` are compile-time
/// capacities.
pub struct Panel<
    'a,
    M: RawMutex,
    const CELLS: usize = DEFAULT_CELLS,
    const ICONS: usize = DEFAULT_ICONS,
    const LABELS: usize = DEFAULT_LABELS,
> {
    model: Mutex<M, RefCell<PanelModel<'a, CELLS, ICONS, LABELS>>>,
    config: PanelConfig,
}

impl<'a, M: RawMutex, const CELLS: usize, const ICONS: usize, const LABELS: usize>
    Panel<'a, M, CELLS, ICONS, LABELS>
{
    /// Empty, unreserved panel with the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(PanelConfig::new())
    }

    /// Empty, unreserved panel.
    #[must_use]
    pub const fn with_config(config: PanelConfig) -> Self {
        Self {
            model: Mutex::new(RefCell::new(PanelModel::new())),
            config,
        }
    }

    /// Presentation settings
    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Run `f` with exclusive access to the model.
    ///
    /// `f` must not call back into this panel.
    pub(crate) fn with_model<R>(
        &self,
        f: impl FnOnce(&mut PanelModel<'a, CELLS, ICONS, LABELS>) -> R,
    ) -> R {
        self.model.lock(|cell| {
            let mut model = cell.borrow_mut();
            f(&mut *model)
        })
    }

    // ── Lifecycle ───────────────────────────────────────────────────────────

    /// Size the button grid to `columns x rows`. Aborts on a contract violation.
    #[track_caller]
    pub fn reserve(&self, columns: u16, rows: u16) {
        enforce(self.try_reserve(columns, rows));
    }

    /// Size the button grid to `columns x rows`.
    pub fn try_reserve(&self, columns: u16, rows: u16) -> Result<(), PanelError> {
        self.with_model(|model| model.reserve(columns, rows))?;
        debug!("panel reserved {}x{}", columns, rows);
        Ok(())
    }

    /// Drop every item, icon and label and zero the dimensions and selection.
    /// The panel may be reserved again afterwards.
    pub fn reset(&self) {
        self.with_model(PanelModel::reset);
        debug!("panel reset");
    }

    /// Reset and release the panel.
    pub fn free(self) {
        self.reset();
    }

    // ── Population ──────────────────────────────────────────────────────────

    /// Place `item` in cell `(col, row)`. Aborts on a contract violation.
    #[track_caller]
    pub fn add_item(&self, col: u16, row: u16, item: ButtonItem<'a>) {
        enforce(self.try_add_item(col, row, item));
    }

    /// Place `item` in cell `(col, row)`.
    pub fn try_add_item(&self, col: u16, row: u16, item: ButtonItem<'a>) -> Result<(), PanelError> {
        self.with_model(|model| model.add_item(col, row, item))
    }

    /// Add a decoration icon. Aborts when the icon capacity is exhausted.
    #[track_caller]
    pub fn add_icon(&self, position: Point, icon: &'a Icon<'a>) {
        enforce(self.try_add_icon(position, icon));
    }

    /// Add a decoration icon.
    pub fn try_add_icon(&self, position: Point, icon: &'a Icon<'a>) -> Result<(), PanelError> {
        self.with_model(|model| model.add_icon(position, icon))
    }

    /// Add a label. Aborts when the label capacity is exhausted.
    #[track_caller]
    pub fn add_label(&self, index: i32, position: Point, font: Font, text: &'a str) {
        enforce(self.try_add_label(index, position, font, text));
    }

    /// Add a label.
    pub fn try_add_label(
        &self,
        index: i32,
        position: Point,
        font: Font,
        text: &'a str,
    ) -> Result<(), PanelError> {
        self.with_model(|model| model.add_label(index, position, font, text))
    }

    /// Swap the bitmaps of every item carrying `index`. Returns how many
    /// cells changed.
    pub fn set_icons_by_index(
        &self,
        index: u16,
        icon: &'a Icon<'a>,
        icon_selected: &'a Icon<'a>,
    ) -> usize {
        self.with_model(|model| model.set_icons_by_index(index, icon, icon_selected))
    }

    /// Point every label carrying `index` at `text`. Returns how many labels
    /// changed.
    pub fn set_label_text(&self, index: i32, text: &'a str) -> usize {
        self.with_model(|model| model.set_label_text(index, text))
    }

    /// Move the selection back to `(0, 0)`. Occupancy is not checked.
    pub fn reset_selection(&self) {
        self.with_model(PanelModel::reset_selection);
    }

    // ── Redraw requests ─────────────────────────────────────────────────────

    /// Ask the host for a new frame without changing anything.
    pub fn request_redraw(&self) {
        self.with_model(PanelModel::mark_dirty);
    }

    /// Whether a frame is due since the last call. Clears the request.
    pub fn take_redraw_request(&self) -> bool {
        self.with_model(PanelModel::take_dirty)
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    /// Current selection
    #[must_use]
    pub fn selection(&self) -> Cell {
        self.with_model(|model| model.selection())
    }

    /// `(columns, rows)`; `(0, 0)` before `reserve`.
    #[must_use]
    pub fn dimensions(&self) -> (u16, u16) {
        self.with_model(|model| model.matrix().dimensions())
    }

    /// Copy of the item at `(col, row)`; `None` for an empty cell. Aborts
    /// when the cell is outside the reserved grid.
    #[must_use]
    #[track_caller]
    pub fn item(&self, col: u16, row: u16) -> Option<ButtonItem<'a>> {
        enforce(self.try_item(col, row))
    }

    /// Copy of the item at `(col, row)`; `None` for an empty cell.
    pub fn try_item(&self, col: u16, row: u16) -> Result<Option<ButtonItem<'a>>, PanelError> {
        self.with_model(|model| model.matrix().get(col, row).map(|found| found.copied()))
    }

    /// Whether `(col, row)` holds an item. Aborts when the cell is outside
    /// the reserved grid.
    #[must_use]
    #[track_caller]
    pub fn is_occupied(&self, col: u16, row: u16) -> bool {
        self.item(col, row).is_some()
    }

    /// Number of decoration icons
    #[must_use]
    pub fn icon_count(&self) -> usize {
        self.with_model(|model| model.icons().len())
    }

    /// Number of labels
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.with_model(|model| model.labels().len())
    }

    /// Text of the first label carrying `index`
    #[must_use]
    pub fn label_text(&self, index: i32) -> Option<&'a str> {
        self.with_model(|model| {
            model
                .labels()
                .iter()
                .find(|label| label.index() == index)
                .map(|label| label.text())
        })
    }

    /// Orientation the host should present the panel in
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    // ── Input ───────────────────────────────────────────────────────────────

    /// Step the selection. Returns whether it moved.
    pub fn navigate(&self, direction: Direction) -> bool {
        let moved = self.with_model(|model| model.navigate(direction));
        trace!("panel navigate {} moved={}", direction.as_str(), moved);
        moved
    }

    /// Fire the handler of the selected item. Returns whether one ran.
    ///
    /// The item is copied out under the lock and the handler runs after the
    /// lock is released.
    pub fn activate(&self, press: PressKind) -> bool {
        let Some(item) = self.with_model(|model| model.selected_item()) else {
            return false;
        };
        let fired = item.activate(press);
        if fired {
            debug!("panel activate index={} press={}", item.index(), press.as_str());
        }
        fired
    }

    /// Route one input event.
    ///
    /// Short and long presses of the d-pad and Ok are consumed whether or not
    /// anything changed. Everything else, including Back, is left for the host.
    pub fn handle_input(&self, event: InputEvent) -> bool {
        let Some(press) = event.kind.press_kind() else {
            return false;
        };
        match event.key {
            InputKey::Up | InputKey::Down | InputKey::Left | InputKey::Right => {
                if let Some(direction) = event.key.direction() {
                    self.navigate(direction);
                }
                true
            }
            InputKey::Ok => {
                self.activate(press);
                true
            }
            InputKey::Back => false,
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────────

    /// Paint a consistent snapshot of the panel onto `canvas`.
    pub fn render<D>(&self, canvas: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        self.with_model(|model| render_model(model, &self.config, canvas))
    }
}

impl<M: RawMutex, const CELLS: usize, const ICONS: usize, const LABELS: usize> Default
    for Panel<'_, M, CELLS, ICONS, LABELS>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex, const CELLS: usize, const ICONS: usize, const LABELS: usize> View
    for Panel<'_, M, CELLS, ICONS, LABELS>
{
    fn draw<D>(&self, canvas: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        self.render(canvas)
    }

    fn input(&self, event: InputEvent) -> bool {
        self.handle_input(event)
    }

    fn orientation(&self) -> Orientation {
        self.config.orientation
    }
}

/// Abort on a contract violation. Called after the lock has been released.
#[track_caller]
#[allow(clippy::panic)] // contract violations are fatal by policy
fn enforce<T>(result: Result<T, PanelError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            error!("panel contract violation: {}", err);
            panic!("panel contract violation: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::{AtomicU32, Ordering};
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    static ICON: Icon<'static> = Icon::new(&[0x80], 8);

    type TestPanel<'a> = Panel<'a, NoopRawMutex, 16, 4, 4>;

    fn item(index: u16) -> ButtonItem<'static> {
        ButtonItem::new(index, Point::zero(), &ICON, &ICON)
    }

    #[test]
    fn test_new_panel_is_unreserved() {
        let panel = TestPanel::new();
        assert_eq!(panel.dimensions(), (0, 0));
        assert_eq!(panel.selection(), Cell::ORIGIN);
        assert_eq!(panel.orientation(), Orientation::Vertical);
    }

    #[test]
    #[should_panic(expected = "panel dimensions must be non-zero")]
    fn test_reserve_zero_aborts() {
        TestPanel::new().reserve(0, 3);
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_add_item_twice_aborts() {
        let panel = TestPanel::new();
        panel.reserve(2, 2);
        panel.add_item(1, 1, item(1));
        panel.add_item(1, 1, item(2));
    }

    #[test]
    #[should_panic(expected = "outside the reserved grid")]
    fn test_add_item_out_of_range_aborts() {
        let panel = TestPanel::new();
        panel.reserve(2, 2);
        panel.add_item(2, 0, item(1));
    }

    #[test]
    #[should_panic(expected = "outside the reserved grid")]
    fn test_item_query_out_of_range_aborts() {
        let panel = TestPanel::new();
        panel.reserve(2, 2);
        let _ = panel.item(0, 2);
    }

    #[test]
    #[should_panic(expected = "outside the reserved grid")]
    fn test_is_occupied_on_unreserved_panel_aborts() {
        let _ = TestPanel::new().is_occupied(0, 0);
    }

    #[test]
    fn test_try_item_reports_range() {
        let panel = TestPanel::new();
        panel.reserve(2, 1);
        panel.add_item(1, 0, item(4));
        assert_eq!(panel.try_item(0, 0).map(|found| found.is_some()), Ok(false));
        assert_eq!(panel.try_item(1, 0).map(|found| found.map(|i| i.index())), Ok(Some(4)));
        assert_eq!(
            panel.try_item(2, 0).map(|found| found.is_some()),
            Err(PanelError::OutOfBounds { col: 2, row: 0 })
        );
    }

    #[test]
    fn test_try_variants_report_errors() {
        let panel = TestPanel::new();
        assert_eq!(
            panel.try_add_item(0, 0, item(1)),
            Err(PanelError::OutOfBounds { col: 0, row: 0 })
        );
        assert_eq!(
            panel.try_reserve(5, 4),
            Err(PanelError::CapacityExceeded {
                requested: 20,
                capacity: 16
            })
        );
    }

    #[test]
    fn test_input_router_consumption() {
        let panel = TestPanel::new();
        panel.reserve(1, 1);
        for key in [
            InputKey::Up,
            InputKey::Down,
            InputKey::Left,
            InputKey::Right,
            InputKey::Ok,
        ] {
            assert!(panel.handle_input(InputEvent::short(key)));
            assert!(panel.handle_input(InputEvent::long(key)));
            assert!(!panel.handle_input(InputEvent::new(key, crate::input::InputType::Press)));
            assert!(!panel.handle_input(InputEvent::new(key, crate::input::InputType::Repeat)));
        }
        assert!(!panel.handle_input(InputEvent::short(InputKey::Back)));
    }

    #[test]
    fn test_ok_on_empty_cell_is_silent() {
        let panel = TestPanel::new();
        panel.reserve(2, 1);
        panel.add_item(1, 0, item(1));
        assert!(!panel.activate(PressKind::Short));
        assert!(panel.handle_input(InputEvent::short(InputKey::Ok)));
    }

    #[test]
    fn test_ok_passes_press_kind() {
        let long_presses = AtomicU32::new(0);
        let handler = |press: PressKind, _index: u16| {
            if press == PressKind::Long {
                long_presses.fetch_add(1, Ordering::Relaxed);
            }
        };
        let panel: Panel<'_, NoopRawMutex, 4, 1, 1> = Panel::new();
        panel.reserve(1, 1);
        panel.add_item(0, 0, item(3).on_activate(&handler));
        panel.handle_input(InputEvent::long(InputKey::Ok));
        panel.handle_input(InputEvent::short(InputKey::Ok));
        assert_eq!(long_presses.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_label_queries() {
        let panel = TestPanel::new();
        panel.add_label(4, Point::new(0, 10), Font::Secondary, "HEAT");
        assert_eq!(panel.label_text(4), Some("HEAT"));
        assert_eq!(panel.set_label_text(4, "COOL"), 1);
        assert_eq!(panel.label_text(4), Some("COOL"));
        assert_eq!(panel.label_text(5), None);
        assert_eq!(panel.label_count(), 1);
    }

    #[test]
    fn test_redraw_requests() {
        let panel = TestPanel::new();
        assert!(panel.take_redraw_request());
        assert!(!panel.take_redraw_request());
        panel.request_redraw();
        assert!(panel.take_redraw_request());
        panel.handle_input(InputEvent::short(InputKey::Left));
        assert!(panel.take_redraw_request());
    }

    #[test]
    fn test_free_consumes_panel() {
        let panel = TestPanel::new();
        panel.reserve(2, 2);
        panel.add_item(0, 0, item(1));
        panel.free();
    }
}
