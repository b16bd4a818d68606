//! Frame rendering.
//!
//! Layer order is fixed: decorations first, then grid items, then labels on
//! top. Later layers overwrite earlier ones where they overlap.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::config::PanelConfig;
use crate::model::PanelModel;

/// Paint `model` onto `canvas`.
///
/// The caller is responsible for holding the panel lock for the whole call so
/// the frame reflects one consistent model state.
pub fn render_model<D, const CELLS: usize, const ICONS: usize, const LABELS: usize>(
    model: &PanelModel<'_, CELLS, ICONS, LABELS>,
    config: &PanelConfig,
    canvas: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    canvas.clear(config.background)?;

    for icon in model.icons() {
        icon.render(canvas, false)?;
    }

    let selection = model.selection();
    for (col, row, item) in model.matrix().iter() {
        let selected = selection.col == col && selection.row == row;
        item.icon().render(canvas, selected)?;
    }

    for label in model.labels() {
        label.render(canvas, config.text_color)?;
    }

    Ok(())
}
