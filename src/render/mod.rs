//! Render-surface boundary and the CPU rasterization backend.

/// CPU surface over a persistent `vello_cpu` pixmap.
pub mod cpu;
/// The `DrawSurface` trait the garden draws through.
pub mod surface;
