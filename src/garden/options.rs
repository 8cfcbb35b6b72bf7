use rand::Rng;

/// Inclusive `[min, max]` range a parameter is drawn from at creation time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValueRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl ValueRange {
    /// Construct a range; `min` and `max` may be equal for a fixed value.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Draw a uniform value from the range.
    pub(crate) fn sample(&self, rng: &mut impl Rng) -> f64 {
        if self.max <= self.min {
            return self.min;
        }
        rng.random_range(self.min..=self.max)
    }

    /// Draw a uniform integer from the rounded range.
    pub(crate) fn sample_int(&self, rng: &mut impl Rng) -> i64 {
        let lo = self.min.round() as i64;
        let hi = self.max.round() as i64;
        if hi <= lo {
            return lo;
        }
        rng.random_range(lo..=hi)
    }
}

/// Fixed configuration ranges every bloom's parameters are drawn from.
///
/// All fields have the defaults the animation was tuned with; a JSON config
/// may override any subset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GardenOptions {
    /// Petals per bloom.
    pub petal_count: ValueRange,
    /// Control-point scale for each petal edge.
    pub petal_stretch: ValueRange,
    /// Per-frame radius increment per petal.
    pub grow_factor: ValueRange,
    /// Euclidean distance within which pointer motion starts a bloom.
    pub bloom_start_distance: f64,
    /// Uniform range for each RGB channel of a bloom's color.
    pub color_channel: ValueRange,
    /// Fixed alpha applied to every bloom color, in `[0, 1]`.
    pub color_opacity: f64,
    /// Divisors of the average viewport dimension defining the bloom radius
    /// range: `min` yields the smallest radius, `max` the largest.
    pub bloom_radius_factors: ValueRange,
}

impl Default for GardenOptions {
    fn default() -> Self {
        Self {
            petal_count: ValueRange::new(5.0, 15.0),
            petal_stretch: ValueRange::new(0.1, 3.0),
            grow_factor: ValueRange::new(0.1, 1.0),
            bloom_start_distance: 20.0,
            color_channel: ValueRange::new(0.0, 255.0),
            color_opacity: 0.5,
            bloom_radius_factors: ValueRange::new(240.0, 75.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/garden/options.rs"]
mod tests;
