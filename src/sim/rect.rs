//! Axis-aligned rectangle geometry for platforms and hitboxes
//!
//! Rects are stored by top-left corner and size, in screen orientation
//! (y grows downward). The same type is used for world-space and
//! camera-space rects; `to_camera` converts between the two.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rect of the given size centred on `center`
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shift a world-space rect into camera space
    #[inline]
    pub fn to_camera(&self, scroll_x: f32) -> Self {
        Self {
            x: self.x - scroll_x,
            ..*self
        }
    }

    /// Strict overlap test: rects that only share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True if `x` lies strictly between the left and right edges
    #[inline]
    pub fn spans_x_exclusive(&self, x: f32) -> bool {
        x > self.left() && x < self.right()
    }

    /// True if `x` lies between the left and right edges, edges included
    #[inline]
    pub fn spans_x_inclusive(&self, x: f32) -> bool {
        x >= self.left() && x <= self.right()
    }
}
