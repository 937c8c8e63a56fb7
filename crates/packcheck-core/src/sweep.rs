//! # Sweep Path
//!
//! Serpentine auto-scan path across the package.
//!
//! ```text
//!   (x1,y1) ──step──► ──► ──► ──► (x2)
//!                                  │ range/2
//!          ◄── ◄── ◄── ◄── ◄───────┘
//!          │ range/2
//!          └──► ──► ──► ...          until y ≥ y2
//! ```
//!
//! Each row is half a scanner range below the previous one, so consecutive
//! rows overlap and nothing inside the bounds is skipped.

use crate::error::CoreResult;
use crate::types::{PackageBounds, Point};
use crate::validation::{validate_bounds, validate_positive};

/// Default horizontal distance between sweep points.
pub const DEFAULT_SWEEP_STEP: f64 = 25.0;

/// Iterator over the scanner positions of an automatic sweep.
#[derive(Debug, Clone)]
pub struct SweepPath {
    bounds: PackageBounds,
    step: f64,
    row_advance: f64,
    x: f64,
    y: f64,
    direction: f64,
    finished: bool,
}

impl SweepPath {
    /// Creates a sweep starting at the top-left corner of `bounds`.
    pub fn new(bounds: PackageBounds, step: f64, scanner_range: f64) -> CoreResult<Self> {
        validate_bounds(&bounds)?;
        validate_positive("sweep step", step)?;
        validate_positive("scanner range", scanner_range)?;

        Ok(SweepPath {
            bounds,
            step,
            row_advance: scanner_range / 2.0,
            x: bounds.x1,
            y: bounds.y1,
            direction: 1.0,
            finished: false,
        })
    }
}

impl Iterator for SweepPath {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.finished {
            return None;
        }

        let point = Point::new(self.x, self.y);

        self.x += self.step * self.direction;
        if self.x >= self.bounds.x2 || self.x <= self.bounds.x1 {
            self.direction = -self.direction;
            self.y += self.row_advance;
            self.x = self.x.clamp(self.bounds.x1, self.bounds.x2);
        }
        if self.y >= self.bounds.y2 {
            self.finished = true;
        }

        Some(point)
    }
}
