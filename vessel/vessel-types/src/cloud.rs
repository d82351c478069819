//! Medial point clouds with per-point radii.
//!
//! A medial point cloud implicitly defines a tube's surface as the union of
//! spheres centered at its points. Only the cardinality and the per-point
//! radius carry meaning; there is no connectivity.
//!
//! # Example
//!
//! ```
//! use vessel_types::{CloudPoint, PointCloud};
//! use nalgebra::Point3;
//!
//! let cloud = PointCloud::from_points(vec![
//!     CloudPoint::new(Point3::new(0.0, 1.0, 0.0), 0.8),
//!     CloudPoint::new(Point3::new(0.0, -1.0, 0.0), 0.8),
//! ]);
//!
//! assert_eq!(cloud.len(), 2);
//! ```

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point of a medial point cloud.
///
/// The radius is the maximal inscribed sphere radius at the point and is
/// expected to be positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CloudPoint {
    /// The 3D position of the point.
    pub position: Point3<f64>,
    /// Inscribed sphere radius at this point.
    pub radius: f64,
}

impl CloudPoint {
    /// Creates a new cloud point.
    #[must_use]
    pub const fn new(position: Point3<f64>, radius: f64) -> Self {
        Self { position, radius }
    }

    /// Creates a point from coordinates and a radius.
    ///
    /// # Example
    ///
    /// ```
    /// use vessel_types::CloudPoint;
    ///
    /// let point = CloudPoint::from_coords(1.0, 2.0, 3.0, 0.5);
    /// assert_eq!(point.position.y, 2.0);
    /// assert_eq!(point.radius, 0.5);
    /// ```
    #[must_use]
    pub const fn from_coords(x: f64, y: f64, z: f64, radius: f64) -> Self {
        Self::new(Point3::new(x, y, z), radius)
    }
}

/// An unordered collection of [`CloudPoint`]s.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointCloud {
    /// The points of the cloud.
    pub points: Vec<CloudPoint>,
}

impl PointCloud {
    /// Creates an empty point cloud.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates a point cloud from points.
    #[must_use]
    pub fn from_points(points: Vec<CloudPoint>) -> Self {
        Self { points }
    }

    /// Creates a point cloud from positions with a constant radius.
    ///
    /// # Example
    ///
    /// ```
    /// use vessel_types::PointCloud;
    /// use nalgebra::Point3;
    ///
    /// let positions = vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
    /// let cloud = PointCloud::with_constant_radius(&positions, 0.4);
    ///
    /// assert_eq!(cloud.len(), 2);
    /// assert_eq!(cloud.points[1].radius, 0.4);
    /// ```
    #[must_use]
    pub fn with_constant_radius(positions: &[Point3<f64>], radius: f64) -> Self {
        Self {
            points: positions
                .iter()
                .map(|p| CloudPoint::new(*p, radius))
                .collect(),
        }
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the cloud has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a point to the cloud.
    pub fn push(&mut self, point: CloudPoint) {
        self.points.push(point);
    }

    /// Appends all points of `other`, preserving their order.
    pub fn extend_from_cloud(&mut self, other: &Self) {
        self.points.extend_from_slice(&other.points);
    }

    /// Returns the positions of all points.
    #[must_use]
    pub fn positions(&self) -> Vec<Point3<f64>> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Returns the radii of all points.
    #[must_use]
    pub fn radii(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.radius).collect()
    }
}
