//! Core data types for tubular vessel geometry.
//!
//! This crate provides the data model shared by the vessel manipulation
//! crates:
//!
//! - [`Centerline`] / [`CenterlineSample`]: the medial axis of a vessel
//!   segment, sampled with arc-length, cross-sectional area, and inscribed
//!   radius attributes.
//! - [`PointCloud`] / [`CloudPoint`]: the medial ("Voronoi") point cloud
//!   whose union of spheres implicitly defines the vessel surface.
//! - [`VesselRegion`] / [`DivergingBranch`]: the tagged split of a cloud
//!   into the main region under manipulation and rigid side branches.
//!
//! All positions use `nalgebra` double-precision points. The types are pure
//! values: operations downstream construct new collections rather than
//! mutating inputs.
//!
//! # Example
//!
//! ```
//! use vessel_types::{Centerline, PointCloud, VesselRegion};
//! use nalgebra::Point3;
//!
//! let positions: Vec<_> = (0..10)
//!     .map(|i| Point3::new(f64::from(i), 0.0, 0.0))
//!     .collect();
//! let centerline = Centerline::from_positions(&positions, &[1.0; 10], &[0.5; 10]).unwrap();
//!
//! let cloud = PointCloud::with_constant_radius(&positions, 0.5);
//! let regions = vec![VesselRegion::Main(cloud)];
//!
//! assert_eq!(centerline.len(), 10);
//! assert_eq!(regions[0].point_count(), 10);
//! ```

mod centerline;
mod cloud;
mod error;
mod region;

pub use centerline::{Centerline, CenterlineSample};
pub use cloud::{CloudPoint, PointCloud};
pub use error::{CenterlineError, CenterlineResult};
pub use region::{DivergingBranch, VesselRegion};
