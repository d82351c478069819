//! Manipulation output and summary metrics.

use vessel_types::PointCloud;

use crate::factor::FactorField;

/// Result of an area manipulation.
///
/// Contains the reassembled point cloud (main region first, then the
/// branches in their supplied order) along with the factor field and
/// displacement metrics for reporting.
#[derive(Debug, Clone)]
pub struct AreaOutput {
    /// The manipulated point cloud.
    pub cloud: PointCloud,
    /// The factor field the deformation was driven by.
    pub factors: FactorField,
    /// Number of individually deformed main-region points.
    pub main_points: usize,
    /// Number of rigidly translated branches.
    pub branch_count: usize,
    /// Total number of branch points.
    pub branch_points: usize,
    /// Largest point displacement distance.
    pub max_displacement: f64,
    /// Mean point displacement distance over all points.
    pub mean_displacement: f64,
}

impl AreaOutput {
    /// Total number of points in the output cloud.
    #[must_use]
    pub const fn total_points(&self) -> usize {
        self.main_points + self.branch_points
    }

    /// Returns whether the manipulation left the geometry essentially
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use vessel_area::{manipulate_area, AreaMethod, AreaParams};
    /// use vessel_types::{Centerline, PointCloud, VesselRegion};
    /// use nalgebra::Point3;
    ///
    /// let positions: Vec<_> = (0..30)
    ///     .map(|i| Point3::new(f64::from(i), 0.0, 0.0))
    ///     .collect();
    /// let centerline = Centerline::from_positions(&positions, &[1.0; 30], &[0.5; 30]).unwrap();
    /// let regions = vec![VesselRegion::Main(PointCloud::with_constant_radius(&positions, 0.5))];
    ///
    /// let output = manipulate_area(
    ///     &centerline,
    ///     &regions,
    ///     &AreaParams::new(AreaMethod::area(0.0)),
    /// )
    /// .unwrap();
    ///
    /// assert!(output.is_identity(1e-9));
    /// ```
    #[must_use]
    pub fn is_identity(&self, tolerance: f64) -> bool {
        self.max_displacement <= tolerance
    }

    /// Returns a one-line summary of the manipulation.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "AreaOutput: {} main points deformed, {} branches ({} points) translated, \
             max displacement: {:.6}, mean displacement: {:.6}",
            self.main_points,
            self.branch_count,
            self.branch_points,
            self.max_displacement,
            self.mean_displacement
        )
    }
}
