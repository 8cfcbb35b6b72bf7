use crate::foundation::error::{BloomError, BloomResult};

/// Row-major boolean "ink present" grid for one rasterized word.
///
/// Produced once per word, read during seed-point sampling, then discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl PixelMask {
    /// Create an all-unlit mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width as usize) * (height as usize)],
        }
    }

    /// Build a mask by evaluating `lit` at every (x, y) cell.
    pub fn from_fn(width: u32, height: u32, mut lit: impl FnMut(u32, u32) -> bool) -> Self {
        let mut mask = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if lit(x, y) {
                    mask.bits[(y * width + x) as usize] = true;
                }
            }
        }
        mask
    }

    /// Build a mask from a row-major RGBA8 byte buffer, lighting pixels whose
    /// alpha exceeds `threshold`.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8], threshold: u8) -> BloomResult<Self> {
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        if rgba.len() != expected {
            return Err(BloomError::validation(format!(
                "mask byte length {} does not match {}x{} RGBA8",
                rgba.len(),
                width,
                height
            )));
        }

        let bits = rgba.chunks_exact(4).map(|px| px[3] > threshold).collect();
        Ok(Self {
            width,
            height,
            bits,
        })
    }

    /// Mask width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Return `true` when any pixel is lit.
    pub fn any_lit(&self) -> bool {
        self.bits.iter().any(|&b| b)
    }

    /// Whether ink covers the pixel at (x, y).
    ///
    /// Sampling clamps jittered coordinates to `[0, dimension]`, so the edge
    /// coordinate (`x == width` or `y == height`) is a legal query and reads
    /// as unlit. Coordinates beyond the clamp range violate an internal
    /// invariant and surface as [`BloomError::Sampling`].
    pub fn is_lit(&self, x: u32, y: u32) -> BloomResult<bool> {
        if x > self.width {
            return Err(BloomError::sampling(format!(
                "x coordinate {x} exceeds grid width {}",
                self.width
            )));
        }
        if y > self.height {
            return Err(BloomError::sampling(format!(
                "y coordinate {y} exceeds grid height {}",
                self.height
            )));
        }
        if x == self.width || y == self.height {
            return Ok(false);
        }
        Ok(self.bits[(y * self.width + x) as usize])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/mask.rs"]
mod tests;
