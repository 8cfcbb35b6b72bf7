use rand::Rng;

use crate::foundation::core::{Point, Rgba8, Viewport};
use crate::garden::bloom::Bloom;
use crate::garden::options::GardenOptions;
use crate::garden::petal::Petal;
use crate::render::surface::DrawSurface;

/// Shared random rotation per bloom lies in `[0, SHARED_ROTATION_MAX_DEG]`.
const SHARED_ROTATION_MAX_DEG: i64 = 90;

/// An insertion-ordered field of live blooms, advanced once per frame.
///
/// Bloom counts are bounded by seed-point counts (typically low hundreds),
/// so linear scans are fine here.
#[derive(Clone, Debug)]
pub struct Garden {
    blooms: Vec<Bloom>,
    options: GardenOptions,
    viewport: Viewport,
}

impl Garden {
    /// Create an empty garden for `viewport`.
    pub fn new(viewport: Viewport, options: GardenOptions) -> Self {
        Self {
            blooms: Vec::new(),
            options,
            viewport,
        }
    }

    /// Configuration ranges in effect.
    pub fn options(&self) -> &GardenOptions {
        &self.options
    }

    /// Viewport the bloom radius range is scaled against.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Live blooms in insertion order.
    pub fn blooms(&self) -> &[Bloom] {
        &self.blooms
    }

    /// Number of live blooms.
    pub fn len(&self) -> usize {
        self.blooms.len()
    }

    /// `true` when no blooms remain.
    pub fn is_empty(&self) -> bool {
        self.blooms.is_empty()
    }

    /// Plant a new not-started bloom at `center`.
    ///
    /// Radius, color, petal count, and per-petal stretch/growth parameters
    /// are drawn independently from the configured ranges; petal start
    /// angles are evenly spaced around the circle plus one shared random
    /// rotation for the whole bloom.
    pub fn create_bloom_at(&mut self, center: Point, rng: &mut impl Rng) {
        let (radius_min, radius_max) = self.bloom_radius_range();
        let radius = f64::from(if radius_max > radius_min {
            rng.random_range(radius_min..=radius_max)
        } else {
            radius_min
        });

        let color = Rgba8::new(
            self.options.color_channel.sample_int(rng) as u8,
            self.options.color_channel.sample_int(rng) as u8,
            self.options.color_channel.sample_int(rng) as u8,
            (self.options.color_opacity.clamp(0.0, 1.0) * 255.0).round() as u8,
        );

        let petal_count = self.options.petal_count.sample_int(rng).max(0) as u32;
        let span_deg = if petal_count > 0 {
            360.0 / f64::from(petal_count)
        } else {
            0.0
        };
        let shared_rotation_deg = rng.random_range(0..=SHARED_ROTATION_MAX_DEG) as f64;

        let petals = (0..petal_count)
            .map(|i| {
                Petal::new(
                    self.options.petal_stretch.sample(rng),
                    self.options.petal_stretch.sample(rng),
                    shared_rotation_deg + f64::from(i) * span_deg,
                    span_deg,
                    self.options.grow_factor.sample(rng),
                )
            })
            .collect();

        self.blooms.push(Bloom::new(center, radius, color, petals));
    }

    /// Start every not-yet-started bloom whose center lies strictly within
    /// Euclidean `radius` of `point`. Already-started blooms are untouched.
    pub fn trigger_near(&mut self, point: Point, radius: f64) {
        for bloom in &mut self.blooms {
            if bloom.is_started() {
                continue;
            }
            if bloom.center().distance(point) < radius {
                bloom.start();
            }
        }
    }

    /// Start every bloom regardless of distance. Idempotent.
    pub fn trigger_all(&mut self) {
        for bloom in &mut self.blooms {
            bloom.start();
        }
    }

    /// Advance and draw every started bloom in collection order, removing
    /// each bloom whose petals have all finished after its own draw.
    ///
    /// Not-started blooms are skipped entirely, so growth time only accrues
    /// while a frame actually processes a started bloom.
    #[tracing::instrument(skip(self, surface), fields(blooms = self.blooms.len()))]
    pub fn render_frame(&mut self, surface: &mut dyn DrawSurface) {
        self.blooms.retain_mut(|bloom| {
            if !bloom.is_started() {
                return true;
            }
            bloom.advance(surface);
            !bloom.is_finished()
        });
    }

    /// Clear all blooms and adopt a new viewport (resize / phrase change).
    pub fn reset(&mut self, viewport: Viewport) {
        self.blooms.clear();
        self.viewport = viewport;
    }

    /// Bloom radius bounds scaled from the average viewport dimension.
    pub fn bloom_radius_range(&self) -> (u32, u32) {
        let avg = self.viewport.avg_dimension();
        let factors = self.options.bloom_radius_factors;
        let scaled = |factor: f64| -> u32 {
            if factor <= 0.0 {
                return 1;
            }
            (avg / factor).round().max(1.0) as u32
        };
        (scaled(factors.min), scaled(factors.max))
    }

    #[cfg(test)]
    pub(crate) fn insert_bloom(&mut self, bloom: Bloom) {
        self.blooms.push(bloom);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/garden/field.rs"]
mod tests;
