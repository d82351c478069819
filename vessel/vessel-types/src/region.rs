//! Region tagging for split vessel point clouds.
//!
//! Upstream processing splits the full medial cloud into the main region
//! under manipulation and zero or more diverging side branches. The split
//! is represented as a tagged collection so downstream passes can act on
//! the variant structure instead of tracking index ranges.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cloud::PointCloud;

/// A side branch diverging from the manipulated vessel segment.
///
/// The attachment position is the first sample of the branch's own
/// centerline; it is only used to locate the nearest sample on the main
/// centerline. Branch points carry no per-point correspondence to the main
/// centerline and are moved rigidly as a unit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DivergingBranch {
    /// Position where the branch centerline attaches to the main segment.
    pub attachment: Point3<f64>,
    /// The branch's medial point cloud.
    pub cloud: PointCloud,
}

impl DivergingBranch {
    /// Creates a new diverging branch.
    #[must_use]
    pub const fn new(attachment: Point3<f64>, cloud: PointCloud) -> Self {
        Self { attachment, cloud }
    }
}

/// One region of a split vessel point cloud.
///
/// # Example
///
/// ```
/// use vessel_types::{DivergingBranch, PointCloud, VesselRegion};
/// use nalgebra::Point3;
///
/// let regions = vec![
///     VesselRegion::Main(PointCloud::new()),
///     VesselRegion::Diverging(DivergingBranch::new(Point3::origin(), PointCloud::new())),
/// ];
///
/// assert!(regions[0].is_main());
/// assert!(!regions[1].is_main());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VesselRegion {
    /// The main region, deformed point by point.
    Main(PointCloud),
    /// A side branch, translated rigidly.
    Diverging(DivergingBranch),
}

impl VesselRegion {
    /// Returns true for the main region variant.
    #[must_use]
    pub const fn is_main(&self) -> bool {
        matches!(self, Self::Main(_))
    }

    /// Returns the main-region cloud, if this is one.
    #[must_use]
    pub const fn as_main(&self) -> Option<&PointCloud> {
        match self {
            Self::Main(cloud) => Some(cloud),
            Self::Diverging(_) => None,
        }
    }

    /// Returns the number of points in the region.
    #[must_use]
    pub fn point_count(&self) -> usize {
        match self {
            Self::Main(cloud) => cloud.len(),
            Self::Diverging(branch) => branch.cloud.len(),
        }
    }
}
