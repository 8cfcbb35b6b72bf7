use rand::Rng;

use crate::foundation::core::{Point, Viewport};
use crate::foundation::error::BloomResult;
use crate::text::measure::WordRaster;

/// Tuning knobs for the phrase-to-seed-point pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SamplerOptions {
    /// Horizontal and vertical padding, in pixels, inside the viewport.
    pub box_padding: u32,
    /// Divisor applied to `width + height` to derive the sampling cell size.
    pub seed_grid_factor: u32,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            box_padding: 20,
            seed_grid_factor: 160,
        }
    }
}

/// Convert a phrase into an unordered cloud of seed points approximating its
/// glyph shapes, scaled to fit `viewport`.
///
/// Words are stacked vertically in equal slices; each word is measured at the
/// slice height, the whole block is scaled down as one unit if the widest
/// word would overflow the padded viewport, and each word's ink mask is
/// sampled on a jittered grid. Two calls with the same inputs produce
/// visually similar but not identical clouds unless `rng` is seeded.
#[tracing::instrument(skip(raster, rng))]
pub fn seed_points(
    phrase: &str,
    viewport: Viewport,
    raster: &mut impl WordRaster,
    rng: &mut impl Rng,
    opts: &SamplerOptions,
) -> BloomResult<Vec<Point>> {
    let words = split_words(phrase);
    let mut word_height = viewport.height / words.len() as u32;

    let mut widths = Vec::with_capacity(words.len());
    for word in &words {
        widths.push(raster.measure(word, word_height)?);
    }

    let padded_width = viewport.width.saturating_sub(2 * opts.box_padding);
    let max_measured = widths.iter().copied().max().unwrap_or(0);
    if max_measured > padded_width {
        let scale = f64::from(padded_width) / f64::from(max_measured);
        word_height = (f64::from(word_height) * scale).floor() as u32;
        for width in &mut widths {
            *width = (f64::from(*width) * scale).floor() as u32;
        }
    }

    let cell = seed_cell_size(viewport, opts);
    let mut points = Vec::new();
    for (index, (word, &width)) in words.iter().zip(&widths).enumerate() {
        let mask = raster.rasterize(word, width, word_height)?;
        sample_word(
            &mask,
            viewport,
            padded_width,
            index as u32,
            cell,
            rng,
            opts,
            &mut points,
        )?;
    }

    Ok(points)
}

/// Split a phrase on runs of non-word characters (`\W+` semantics).
///
/// An empty or all-separator phrase degrades to a single empty word so the
/// pipeline produces a near-empty point cloud instead of failing.
pub(crate) fn split_words(phrase: &str) -> Vec<&str> {
    let words: Vec<&str> = phrase
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() { vec![""] } else { words }
}

/// Side of the square sampling cells, scaled with the viewport, minimum 1.
pub(crate) fn seed_cell_size(viewport: Viewport, opts: &SamplerOptions) -> u32 {
    let raw = f64::from(viewport.width + viewport.height) / f64::from(opts.seed_grid_factor.max(1));
    (raw.round() as u32).max(1)
}

/// Walk one word's mask in `cell`-sized squares, picking one jittered pixel
/// per cell and emitting a seed point for every lit sample.
#[allow(clippy::too_many_arguments)]
fn sample_word(
    mask: &crate::text::mask::PixelMask,
    viewport: Viewport,
    padded_width: u32,
    word_index: u32,
    cell: u32,
    rng: &mut impl Rng,
    opts: &SamplerOptions,
    out: &mut Vec<Point>,
) -> BloomResult<()> {
    // Horizontally center the word inside the padded width.
    let x_offset = padded_width.saturating_sub(mask.width()) / 2 + opts.box_padding;
    let y_offset = opts.box_padding + mask.height() * word_index;

    let mut i = 0;
    while i < mask.width() {
        let mut j = 0;
        while j < mask.height() {
            let x = (jitter(rng, cell) + i).min(mask.width());
            let y = (jitter(rng, cell) + j).min(mask.height());
            if mask.is_lit(x, y)? {
                let point = Point::new(f64::from(x_offset + x), f64::from(y_offset + y));
                // Ink in the bottom word slice can land below the viewport
                // once padding is added; those samples would never be visible.
                if viewport.contains(point) {
                    out.push(point);
                }
            }
            j += cell;
        }
        i += cell;
    }

    Ok(())
}

fn jitter(rng: &mut impl Rng, cell: u32) -> u32 {
    (rng.random::<f64>() * f64::from(cell)).round() as u32
}

#[cfg(test)]
#[path = "../../tests/unit/text/sampler.rs"]
mod tests;
