use serde::{Deserialize, Serialize};

use crate::core::Vector;

/// Per-edge inset consumed by [`Rect::margin`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margin {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Axis-aligned rectangle stored as origin plus size.
///
/// Non-positive sizes are allowed and read as an empty area; see
/// [`Rect::is_empty_area`]. Edge setters keep the opposite edge fixed and
/// recompute the size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn from_bounds(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn set_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        *self = Self::new(x, y, width, height);
    }

    pub fn set_pos(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn set_bounds(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        *self = Self::from_bounds(left, top, right, bottom);
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Moves the rect horizontally, keeping its size.
    pub fn set_x(&mut self, value: f64) {
        self.x = value;
    }

    /// Moves the rect vertically, keeping its size.
    pub fn set_y(&mut self, value: f64) {
        self.y = value;
    }

    pub fn set_width(&mut self, value: f64) {
        self.width = value;
    }

    pub fn set_height(&mut self, value: f64) {
        self.height = value;
    }

    /// Moves the left edge; the right edge stays put.
    pub fn set_left(&mut self, value: f64) {
        let right = self.right();
        self.x = value;
        self.width = right - value;
    }

    /// Moves the top edge; the bottom edge stays put.
    pub fn set_top(&mut self, value: f64) {
        let bottom = self.bottom();
        self.y = value;
        self.height = bottom - value;
    }

    /// Moves the right edge; the left edge stays put.
    pub fn set_right(&mut self, value: f64) {
        self.width = value - self.x;
    }

    /// Moves the bottom edge; the top edge stays put.
    pub fn set_bottom(&mut self, value: f64) {
        self.height = value - self.y;
    }

    pub fn set_center_x(&mut self, value: f64) {
        self.x = value - self.width / 2.0;
    }

    pub fn set_center_y(&mut self, value: f64) {
        self.y = value - self.height / 2.0;
    }

    #[must_use]
    pub fn equal(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        self.x == x && self.y == y && self.width == width && self.height == height
    }

    /// Half-open containment: `[x, x + width) × [y, y + height)`.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    #[must_use]
    pub fn contains_point(&self, point: Vector) -> bool {
        self.contains(point.x, point.y)
    }

    #[must_use]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.x <= other.x
            && other.right() <= self.right()
            && self.y <= other.y
            && other.bottom() <= self.bottom()
    }

    /// Grows every edge outward by `dx` horizontally and `dy` vertically.
    pub fn inflate(&mut self, dx: f64, dy: f64) {
        self.set_rect(
            self.x - dx,
            self.y - dy,
            self.width + 2.0 * dx,
            self.height + 2.0 * dy,
        );
    }

    pub fn inflate_point(&mut self, amount: Vector) {
        self.inflate(amount.x, amount.y);
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.set_size(self.width * sx, self.height * sy);
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.set_pos(self.x + dx, self.y + dy);
    }

    /// Adds each delta to the matching edge.
    pub fn offset_bounds(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        self.set_bounds(
            self.left() + left,
            self.top() + top,
            self.right() + right,
            self.bottom() + bottom,
        );
    }

    /// Pushes every edge outward by the given amounts.
    pub fn increase_bounds(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        self.offset_bounds(-left, -top, right, bottom);
    }

    /// Pulls every edge inward by the given amounts.
    pub fn decrease_bounds(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        self.offset_bounds(left, top, -right, -bottom);
    }

    /// `true` only for the all-zero rect.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.width == 0.0 && self.height == 0.0
    }

    #[must_use]
    pub fn is_empty_area(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Overlap of both rects. Disjoint inputs give a non-positive size.
    #[must_use]
    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect::from_bounds(
            self.left().max(other.left()),
            self.top().max(other.top()),
            self.right().min(other.right()),
            self.bottom().min(other.bottom()),
        )
    }

    /// Smallest rect covering both.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_bounds(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.top() < other.bottom()
            && self.right() > other.left()
            && self.bottom() > other.top()
    }

    /// Insets every edge by the same amount.
    pub fn set_margin(&mut self, margin: f64) {
        self.decrease_bounds(margin, margin, margin, margin);
    }

    pub fn margin(&mut self, margin: &Margin) {
        self.decrease_bounds(margin.left, margin.top, margin.right, margin.bottom);
    }

    /// Copy of `self` inset by `margin`.
    #[must_use]
    pub fn with_margin(mut self, margin: &Margin) -> Rect {
        self.margin(margin);
        self
    }

    /// Rebuilds the rect around its current centre with per-edge distances.
    pub fn offset_from_center(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        let center_x = self.center_x();
        let center_y = self.center_y();
        self.set_bounds(
            center_x - left,
            center_y - top,
            center_x + right,
            center_y + bottom,
        );
    }
}
