use serde::{Deserialize, Serialize};

/// 2D point or displacement.
///
/// Arithmetic mutates in place and returns `&mut Self` so calls can be
/// chained. Nothing guards against zero-length vectors: `normalize` and the
/// direction helpers divide by the length and yield non-finite components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn set_pos(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn set(&mut self, other: Vector) -> &mut Self {
        self.set_pos(other.x, other.y)
    }

    pub fn offset_pos(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self
    }

    pub fn multiply_pos(&mut self, fx: f64, fy: f64) -> &mut Self {
        self.x *= fx;
        self.y *= fy;
        self
    }

    pub fn divide_pos(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.x /= dx;
        self.y /= dy;
        self
    }

    pub fn add(&mut self, other: Vector) -> &mut Self {
        self.offset_pos(other.x, other.y)
    }

    pub fn subtract(&mut self, other: Vector) -> &mut Self {
        self.offset_pos(-other.x, -other.y)
    }

    pub fn multiply(&mut self, other: Vector) -> &mut Self {
        self.multiply_pos(other.x, other.y)
    }

    pub fn divide(&mut self, other: Vector) -> &mut Self {
        self.divide_pos(other.x, other.y)
    }

    /// Euclidean norm.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn length_between(self, other: Vector) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Reciprocal of [`Vector::length`].
    #[must_use]
    pub fn normalize(self) -> f64 {
        1.0 / self.length()
    }

    /// Reciprocal of [`Vector::length_between`].
    #[must_use]
    pub fn normalize_between(self, other: Vector) -> f64 {
        1.0 / self.length_between(other)
    }

    /// Unit vector pointing the same way as `self`.
    #[must_use]
    pub fn direction(self) -> Vector {
        let factor = self.normalize();
        Vector::new(self.x * factor, self.y * factor)
    }

    /// Unit vector pointing from `self` toward `other`.
    #[must_use]
    pub fn direction_between(self, other: Vector) -> Vector {
        let factor = self.normalize_between(other);
        Vector::new((other.x - self.x) * factor, (other.y - self.y) * factor)
    }
}
