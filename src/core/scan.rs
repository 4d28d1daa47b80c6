//! Range scan input for batch distance queries.

use super::Coordinate;
use crate::error::{RestraintError, Result};

/// Range scan in polar form, expressed in the robot frame.
///
/// The scan origin is the robot origin; any sensor mounting offset must be
/// removed by the caller. Rays outside `[range_min, range_max]`, without a
/// return, or with a non-finite bearing never reach a distance query.
///
/// # Angular Convention
///
/// ```text
///          0° (+X, Forward)
///           ↑
///           │
///  90° (+Y) ├───────→ -90° (-Y)
///   Left    │          Right
///           ↓
///        ±180° (-X, Back)
/// ```
#[derive(Clone, Debug, Default)]
pub struct RangeScan {
    ranges: Vec<f32>,
    angles: Vec<f32>,
    range_min: f32,
    range_max: f32,
}

impl RangeScan {
    /// Create a scan from paired ranges and bearings.
    ///
    /// Fails when the two sequences differ in length.
    pub fn new(ranges: Vec<f32>, angles: Vec<f32>, range_min: f32, range_max: f32) -> Result<Self> {
        if ranges.len() != angles.len() {
            return Err(RestraintError::ScanLengthMismatch {
                ranges: ranges.len(),
                angles: angles.len(),
            });
        }

        Ok(Self {
            ranges,
            angles,
            range_min,
            range_max,
        })
    }

    /// Create a scan whose bearings start at `angle_min` and step by `angle_increment`.
    pub fn from_sweep(
        ranges: Vec<f32>,
        angle_min: f32,
        angle_increment: f32,
        range_min: f32,
        range_max: f32,
    ) -> Self {
        let angles = (0..ranges.len())
            .map(|i| angle_min + i as f32 * angle_increment)
            .collect();

        Self {
            ranges,
            angles,
            range_min,
            range_max,
        }
    }

    /// Measured ranges (meters)
    pub fn ranges(&self) -> &[f32] {
        &self.ranges
    }

    /// Bearing of each range (radians)
    pub fn angles(&self) -> &[f32] {
        &self.angles
    }

    /// Number of rays, valid or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the scan has no rays.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Whether a measured range is a usable return.
    #[inline]
    pub fn accepts(&self, range: f32) -> bool {
        range.is_finite() && (self.range_min..=self.range_max).contains(&range)
    }

    /// Usable rays as `(range, angle)` pairs.
    pub fn rays(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.ranges
            .iter()
            .copied()
            .zip(self.angles.iter().copied())
            .filter(|&(range, _)| self.accepts(range))
    }

    /// Convert usable rays to robot-frame coordinates.
    ///
    /// Rays with a non-finite angle are dropped.
    pub fn to_coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.rays()
            .filter_map(|(range, angle)| Coordinate::from_polar(range, angle).ok())
    }
}
