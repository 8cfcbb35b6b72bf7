use crate::foundation::error::{BloomError, BloomResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Pixel dimensions of the animation viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a validated viewport with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> BloomResult<Self> {
        if width == 0 || height == 0 {
            return Err(BloomError::validation("viewport dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Mean of width and height, the scale reference for bloom radii.
    pub fn avg_dimension(self) -> f64 {
        f64::from(self.width + self.height) / 2.0
    }

    /// Return `true` when `p` lies inside `[0, width] x [0, height]`.
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0.0 && p.x <= f64::from(self.width) && p.y >= 0.0 && p.y <= f64::from(self.height)
    }
}

/// Straight-alpha RGBA8 color (not premultiplied).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Construct a color from straight-alpha channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Premultiplied byte form as stored by the CPU surface.
    pub fn to_premul_bytes(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
