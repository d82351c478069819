//! Centerline representation of a tubular vessel segment.
//!
//! A centerline is an ordered sequence of samples along the medial axis of a
//! tubular shape. Each sample carries the geometric position together with
//! the arc-length coordinate, the cross-sectional area of the lumen at that
//! position, and the maximal inscribed sphere radius.
//!
//! # Example
//!
//! ```
//! use vessel_types::Centerline;
//! use nalgebra::Point3;
//!
//! let positions: Vec<_> = (0..5).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect();
//! let centerline = Centerline::from_positions(&positions, &[1.0; 5], &[0.5; 5]).unwrap();
//!
//! assert_eq!(centerline.len(), 5);
//! assert!((centerline.arc_span() - 4.0).abs() < 1e-10);
//! ```

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CenterlineError, CenterlineResult};

/// One sample on a vessel centerline.
///
/// Samples are ordered by arc length; the order within a [`Centerline`] is
/// significant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CenterlineSample {
    /// The 3D position of the sample on the medial axis.
    pub position: Point3<f64>,
    /// Arc-length coordinate along the centerline, non-decreasing.
    pub arc_length: f64,
    /// Cross-sectional area of the lumen at this sample, positive.
    pub area: f64,
    /// Maximal inscribed sphere radius at this sample, positive.
    pub radius: f64,
}

impl CenterlineSample {
    /// Creates a new centerline sample.
    ///
    /// # Example
    ///
    /// ```
    /// use vessel_types::CenterlineSample;
    /// use nalgebra::Point3;
    ///
    /// let sample = CenterlineSample::new(Point3::origin(), 0.0, 3.1, 1.0);
    /// assert_eq!(sample.area, 3.1);
    /// ```
    #[must_use]
    pub const fn new(position: Point3<f64>, arc_length: f64, area: f64, radius: f64) -> Self {
        Self {
            position,
            arc_length,
            area,
            radius,
        }
    }
}

/// An ordered sequence of [`CenterlineSample`]s along a vessel segment.
///
/// The sequence is ordered by arc length. Construction validates the
/// per-sample invariants (positive area and radius, non-decreasing arc
/// length); an empty centerline is representable and rejected by the
/// operations that cannot work on one.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Centerline {
    samples: Vec<CenterlineSample>,
}

impl Centerline {
    /// Creates a centerline from samples.
    ///
    /// # Panics
    ///
    /// Panics if the samples violate the centerline invariants; use
    /// [`Centerline::try_new`] for a fallible constructor.
    #[must_use]
    pub fn new(samples: Vec<CenterlineSample>) -> Self {
        match Self::try_new(samples) {
            Ok(centerline) => centerline,
            Err(err) => panic!("invalid centerline: {err}"),
        }
    }

    /// Creates a centerline from samples, validating the invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if any area or radius is not positive, or if the
    /// arc-length coordinates decrease anywhere along the sequence.
    pub fn try_new(samples: Vec<CenterlineSample>) -> CenterlineResult<Self> {
        for (index, sample) in samples.iter().enumerate() {
            if !(sample.area > 0.0 && sample.area.is_finite()) {
                return Err(CenterlineError::NonPositiveArea {
                    index,
                    value: sample.area,
                });
            }
            if !(sample.radius > 0.0 && sample.radius.is_finite()) {
                return Err(CenterlineError::NonPositiveRadius {
                    index,
                    value: sample.radius,
                });
            }
            if index > 0 {
                let previous = samples[index - 1].arc_length;
                if sample.arc_length < previous {
                    return Err(CenterlineError::DecreasingArcLength {
                        index,
                        previous,
                        current: sample.arc_length,
                    });
                }
            }
        }

        Ok(Self { samples })
    }

    /// Creates a centerline from positions and per-sample attribute arrays.
    ///
    /// Arc-length coordinates are accumulated from the segment lengths
    /// between consecutive positions.
    ///
    /// # Errors
    ///
    /// Returns an error if the attribute arrays do not match the number of
    /// positions, or if the samples violate the centerline invariants.
    ///
    /// # Example
    ///
    /// ```
    /// use vessel_types::Centerline;
    /// use nalgebra::Point3;
    ///
    /// let positions = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(3.0, 0.0, 0.0),
    ///     Point3::new(3.0, 4.0, 0.0),
    /// ];
    /// let centerline = Centerline::from_positions(&positions, &[1.0; 3], &[0.5; 3]).unwrap();
    ///
    /// assert!((centerline.arc_span() - 7.0).abs() < 1e-10);
    /// ```
    pub fn from_positions(
        positions: &[Point3<f64>],
        areas: &[f64],
        radii: &[f64],
    ) -> CenterlineResult<Self> {
        if areas.len() != positions.len() {
            return Err(CenterlineError::LengthMismatch {
                name: "area",
                positions: positions.len(),
                attributes: areas.len(),
            });
        }
        if radii.len() != positions.len() {
            return Err(CenterlineError::LengthMismatch {
                name: "radius",
                positions: positions.len(),
                attributes: radii.len(),
            });
        }

        let mut samples = Vec::with_capacity(positions.len());
        let mut arc = 0.0;
        for (i, position) in positions.iter().enumerate() {
            if i > 0 {
                arc += (position - positions[i - 1]).norm();
            }
            samples.push(CenterlineSample::new(*position, arc, areas[i], radii[i]));
        }

        Self::try_new(samples)
    }

    /// Returns the samples in arc-length order.
    #[must_use]
    pub fn samples(&self) -> &[CenterlineSample] {
        &self.samples
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the centerline has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the sample at `index`.
    #[must_use]
    pub fn sample(&self, index: usize) -> Option<&CenterlineSample> {
        self.samples.get(index)
    }

    /// Returns the position of the sample at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn position(&self, index: usize) -> Point3<f64> {
        self.samples[index].position
    }

    /// Returns the cross-sectional area array, aligned to the samples.
    #[must_use]
    pub fn areas(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.area).collect()
    }

    /// Returns the arc-length coordinate array, aligned to the samples.
    #[must_use]
    pub fn arc_lengths(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.arc_length).collect()
    }

    /// Returns the inscribed radius array, aligned to the samples.
    #[must_use]
    pub fn radii(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.radius).collect()
    }

    /// Returns the arc length covered by the segment.
    ///
    /// Zero for centerlines with fewer than two samples.
    #[must_use]
    pub fn arc_span(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last.arc_length - first.arc_length,
            _ => 0.0,
        }
    }
}
