use crate::foundation::core::{BezPath, Vec2};
use crate::foundation::math::{deg_to_rad, rotate};

/// One growing curved stroke belonging to a bloom.
///
/// A petal's radius only increases; once it exceeds the owning bloom's
/// maximum radius the petal is permanently finished and never drawn or
/// advanced again.
#[derive(Clone, Debug)]
pub struct Petal {
    stretch_a: f64,
    stretch_b: f64,
    start_angle_deg: f64,
    angle_deg: f64,
    grow_factor: f64,
    radius: f64,
    finished: bool,
}

impl Petal {
    pub(crate) fn new(
        stretch_a: f64,
        stretch_b: f64,
        start_angle_deg: f64,
        angle_deg: f64,
        grow_factor: f64,
    ) -> Self {
        Self {
            stretch_a,
            stretch_b,
            start_angle_deg,
            angle_deg,
            grow_factor,
            radius: 1.0,
            finished: false,
        }
    }

    /// Current radius of the growing stroke.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Per-frame growth increment.
    pub fn grow_factor(&self) -> f64 {
        self.grow_factor
    }

    /// `true` once the radius has exceeded the bloom's maximum.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one frame against the owning bloom's `max_radius`.
    ///
    /// While still growing the radius increases by the growth increment and
    /// the frame's stroke geometry is returned; the first advance past
    /// `max_radius` marks the petal finished and yields nothing.
    pub(crate) fn advance(&mut self, max_radius: f64) -> Option<BezPath> {
        if self.finished {
            return None;
        }
        if self.radius <= max_radius {
            self.radius += self.grow_factor;
            Some(self.curve())
        } else {
            self.finished = true;
            None
        }
    }

    /// A smooth cubic from one petal edge to the other in bloom-local
    /// coordinates: both endpoints are the base vector rotated around the
    /// local origin, the control points the endpoints scaled by the stretch
    /// factors.
    fn curve(&self) -> BezPath {
        let v1 = rotate(Vec2::new(0.0, self.radius), deg_to_rad(self.start_angle_deg));
        let v2 = rotate(v1, deg_to_rad(self.angle_deg));
        let v3 = v1 * self.stretch_a;
        let v4 = v2 * self.stretch_b;

        let mut path = BezPath::new();
        path.move_to((v1.x, v1.y));
        path.curve_to((v3.x, v3.y), (v4.x, v4.y), (v2.x, v2.y));
        path
    }
}

#[cfg(test)]
#[path = "../../tests/unit/garden/petal.rs"]
mod tests;
