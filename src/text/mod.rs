//! Phrase-to-seed-point pipeline: word rasterization and jittered sampling.

/// rot13 phrase transform.
pub mod cipher;
/// Row-major boolean ink mask per rasterized word.
pub mod mask;
/// Word measurement/rasterization seam and the glyph-backed impl.
pub mod measure;
/// Word layout, scale-to-fit, and jittered-grid seed sampling.
pub mod sampler;
