use crate::foundation::core::{Affine, Point, Rgba8};
use crate::garden::petal::Petal;
use crate::render::surface::DrawSurface;

/// Lifecycle tag for a bloom; transitions are one-way
/// (`NotStarted -> Growing -> Finished`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BloomState {
    /// Seeded but not yet triggered; neither drawn nor advanced.
    NotStarted,
    /// Triggered; petals grow and are drawn each frame.
    Growing,
    /// All petals have finished; the field removes the bloom.
    Finished,
}

/// One procedurally generated flower with a fixed center, maximum radius,
/// color, and an owned set of petals.
#[derive(Clone, Debug)]
pub struct Bloom {
    center: Point,
    radius: f64,
    color: Rgba8,
    petals: Vec<Petal>,
    state: BloomState,
}

impl Bloom {
    pub(crate) fn new(center: Point, radius: f64, color: Rgba8, petals: Vec<Petal>) -> Self {
        Self {
            center,
            radius,
            color,
            petals,
            state: BloomState::NotStarted,
        }
    }

    /// Seed-point position the bloom grows around.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Maximum petal radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Translucent stroke color shared by all petals.
    pub fn color(&self) -> Rgba8 {
        self.color
    }

    /// The bloom's petals, in draw order.
    pub fn petals(&self) -> &[Petal] {
        &self.petals
    }

    /// Current lifecycle state.
    pub fn state(&self) -> BloomState {
        self.state
    }

    /// `true` once the bloom has been triggered (Growing or Finished).
    pub fn is_started(&self) -> bool {
        self.state != BloomState::NotStarted
    }

    /// `true` once every petal has finished growing.
    pub fn is_finished(&self) -> bool {
        self.state == BloomState::Finished
    }

    /// Trigger growth. Idempotent; a finished bloom never reverts.
    pub fn start(&mut self) {
        if self.state == BloomState::NotStarted {
            self.state = BloomState::Growing;
        }
    }

    /// Advance every petal one frame and stroke the still-growing ones onto
    /// `surface` in bloom-local coordinates translated to the center.
    ///
    /// Marks the bloom [`BloomState::Finished`] once all petals are done;
    /// finish determination happens after this frame's drawing.
    pub(crate) fn advance(&mut self, surface: &mut dyn DrawSurface) {
        let transform = Affine::translate(self.center.to_vec2());
        let (radius, color) = (self.radius, self.color);
        let mut all_finished = true;
        for petal in &mut self.petals {
            if let Some(path) = petal.advance(radius) {
                surface.stroke(&path, transform, color, 1.0);
            }
            all_finished &= petal.is_finished();
        }
        if all_finished {
            self.state = BloomState::Finished;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/garden/bloom.rs"]
mod tests;
