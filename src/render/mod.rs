//! Rendering boundary.
//!
//! The registry hands a full [`ChartEntry`] (kind, labels, dataset, color
//! index) to a renderer on every create and redraw; pixel-level drawing is
//! entirely the renderer's concern.

use tracing::debug;

use crate::charts::ChartEntry;

/// Sink for chart draw requests.
pub trait ChartRenderer: Send + Sync {
    /// Draw or redraw a single chart entry.
    fn draw(&self, entry: &ChartEntry);
}

/// Renderer that logs draw requests instead of drawing.
///
/// The default when no real rendering backend is wired up.
#[derive(Debug, Default)]
pub struct TracingRenderer;

impl ChartRenderer for TracingRenderer {
    fn draw(&self, entry: &ChartEntry) {
        debug!(
            chart = %entry.id,
            kind = %entry.kind,
            label = %entry.label,
            points = entry.data.len(),
            color_index = entry.color_index,
            "draw"
        );
    }
}
