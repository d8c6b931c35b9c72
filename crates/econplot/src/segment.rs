//! Directed line segment in canvas pixel space.
//!
//! Canvas coordinates grow right (x) and down (y). Direction is meaningful:
//! demand-like curves are generated right-to-left (`x1 > x2`) and the clipper
//! relies on that to leave them untouched.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::cfg::VERTICAL_EPS;

/// Ordered pair of canvas points `start -> end`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
}

/// Slope/intercept form `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineEq {
    pub slope: f64,
    pub intercept: f64,
}

impl LineEq {
    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl Segment {
    #[inline]
    pub fn new(start: Vector2<f64>, end: Vector2<f64>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Vector2::new(x1, y1), Vector2::new(x2, y2))
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.end.x - self.start.x
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.end.y - self.start.y
    }

    /// `|x2 - x1| < VERTICAL_EPS`.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.dx().abs() < VERTICAL_EPS
    }

    /// Generated right-to-left (demand orientation).
    #[inline]
    pub fn is_right_to_left(&self) -> bool {
        self.start.x > self.end.x
    }

    /// Line equation, or `None` for (near-)vertical segments.
    pub fn line(&self) -> Option<LineEq> {
        if self.is_vertical() {
            return None;
        }
        let slope = self.dy() / self.dx();
        Some(LineEq {
            slope,
            intercept: self.start.y - slope * self.start.x,
        })
    }

    /// Translate both endpoints.
    #[inline]
    pub fn translated(&self, t: Vector2<f64>) -> Segment {
        Segment::new(self.start + t, self.end + t)
    }

    /// Endpoint with the smaller canvas y (visually the top end).
    pub fn top(&self) -> Vector2<f64> {
        if self.end.y <= self.start.y {
            self.end
        } else {
            self.start
        }
    }

    /// Endpoint with the larger canvas x.
    pub fn right(&self) -> Vector2<f64> {
        if self.is_right_to_left() {
            self.start
        } else {
            self.end
        }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    pub fn is_finite(&self) -> bool {
        self.start.iter().chain(self.end.iter()).all(|v| v.is_finite())
    }
}
