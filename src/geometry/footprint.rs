//! Robot footprint definition for collision checking.

use crate::core::Coordinate;
use crate::error::{RestraintError, Result};

/// Axis-aligned rectangular footprint in the robot frame.
///
/// ```text
///            +Y (left)
///             ↑
///   ┌─────────┼──────────────┐  ← +half_width
///   │         │              │
///   │         o──────────────┼──→ +X (forward)
///   │                        │
///   └────────────────────────┘  ← -half_width
///   ↑                        ↑
///  offset_back          offset_front
/// ```
///
/// The safety buffer extends the front and back; the width is used as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    offset_front: f32,
    offset_back: f32,
    half_width: f32,
}

impl Footprint {
    /// Create a footprint without a safety buffer.
    ///
    /// # Arguments
    /// * `length_front` - Distance from origin to front edge (meters)
    /// * `length_back` - Distance from origin to rear edge (meters)
    /// * `width` - Full robot width (meters)
    pub fn new(length_front: f32, length_back: f32, width: f32) -> Result<Self> {
        Self::with_buffer(length_front, length_back, width, 0.0)
    }

    /// Create a footprint whose front and back are extended by `buffer`.
    pub fn with_buffer(
        length_front: f32,
        length_back: f32,
        width: f32,
        buffer: f32,
    ) -> Result<Self> {
        let offset_front = length_front + buffer;
        let offset_back = -(length_back + buffer);
        let half_width = 0.5 * width;

        if offset_front.is_finite() && offset_back.is_finite() && half_width.is_finite() {
            return Ok(Self {
                offset_front,
                offset_back,
                half_width,
            });
        }

        Err(RestraintError::NonFiniteFootprint {
            front: offset_front,
            back: offset_back,
            half_width,
        })
    }

    /// X of the front edge.
    #[inline]
    pub fn offset_front(&self) -> f32 {
        self.offset_front
    }

    /// X of the rear edge (negative for a rear edge behind the origin).
    #[inline]
    pub fn offset_back(&self) -> f32 {
        self.offset_back
    }

    /// Half of the robot width.
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    /// Longest longitudinal extent from the origin.
    #[inline]
    pub fn max_offset(&self) -> f32 {
        self.offset_front.abs().max(self.offset_back.abs())
    }

    /// Check if a point lies inside or on the boundary of the footprint.
    pub fn contains(&self, point: &Coordinate) -> bool {
        if point.y().abs() > self.half_width {
            return false;
        }

        point.x() <= self.offset_front && point.x() >= self.offset_back
    }
}
