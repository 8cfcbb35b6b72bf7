//! bloomfield renders an ambient generative-art animation: a phrase is
//! rasterized into a sparse cloud of seed points approximating its glyph
//! shapes, a flower bloom is planted at each point, and pointer movement
//! triggers blooms whose petals grow outward frame by frame until the bloom
//! finishes and is removed.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: phrase + viewport -> seed points ([`seed_points`])
//! 2. **Seed**: one not-started [`Bloom`] per point ([`Garden::create_bloom_at`])
//! 3. **Trigger**: pointer input starts blooms ([`Garden::trigger_near`])
//! 4. **Render**: one [`Garden::render_frame`] call per display refresh
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Explicit randomness**: every random draw pulls from a caller-provided
//!   [`rand::Rng`], so tests can seed and assert exact outputs.
//! - **Injected text metrics**: the sampler measures and rasterizes words
//!   through the [`WordRaster`] trait and stays pure itself.
//! - **Single-threaded frames**: one logical thread of control advances the
//!   field; no operation blocks or suspends.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Bloom field: blooms, petals, and per-frame growth.
pub mod garden;
/// Render-surface boundary and the CPU backend.
pub mod render;
/// Phrase-to-seed-point pipeline.
pub mod text;

pub use foundation::core::{Affine, BezPath, Point, Rect, Rgba8, Vec2, Viewport};
pub use foundation::error::{BloomError, BloomResult};
pub use garden::bloom::{Bloom, BloomState};
pub use garden::field::Garden;
pub use garden::options::{GardenOptions, ValueRange};
pub use garden::petal::Petal;
pub use render::cpu::CpuSurface;
pub use render::surface::DrawSurface;
pub use text::cipher::rot13;
pub use text::mask::PixelMask;
pub use text::measure::{GlyphRaster, WordRaster};
pub use text::sampler::{SamplerOptions, seed_points};
