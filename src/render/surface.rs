use crate::foundation::core::{Affine, BezPath, Rgba8};

/// The drawing operations the garden needs from a render surface provider.
///
/// Strokes accumulate across frames; the animation never clears per frame,
/// the layered trails are the visual. [`clear`](DrawSurface::clear) exists
/// for the full-reset path (viewport or phrase change).
pub trait DrawSurface {
    /// Stroke `path` under `transform` with a straight-alpha color and the
    /// given line width.
    fn stroke(&mut self, path: &BezPath, transform: Affine, color: Rgba8, width: f64);

    /// Reset the surface to its background.
    fn clear(&mut self);
}
