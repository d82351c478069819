//! Cross-sectional area manipulation for vessel models.
//!
//! This crate changes the area profile of a tubular vessel model by
//! deforming its medial point cloud relative to a centerline segment. Three
//! methods are provided:
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`AreaMethod::Variation`] | Amplify or dampen the area variation along the segment |
//! | [`AreaMethod::Stenosis`] | Create or remove a local narrowing |
//! | [`AreaMethod::Area`] | Inflate or deflate the whole region uniformly |
//!
//! The pipeline computes a per-sample [`FactorField`] from the (smoothed)
//! cross-sectional area array, then moves every main-region point towards
//! or away from its nearest centerline sample while scaling its radius,
//! and translates diverging side branches rigidly so they stay attached.
//! Surface reconstruction from the manipulated cloud is the business of a
//! downstream component.
//!
//! # Quick Start
//!
//! ```
//! use vessel_area::{manipulate_area, AreaMethod, AreaParams};
//! use vessel_types::{Centerline, PointCloud, VesselRegion};
//! use nalgebra::Point3;
//!
//! // Centerline of a straight segment with constant unit area.
//! let positions: Vec<_> = (0..101)
//!     .map(|i| Point3::new(f64::from(i) * 0.1, 0.0, 0.0))
//!     .collect();
//! let centerline = Centerline::from_positions(&positions, &[1.0; 101], &[0.5; 101]).unwrap();
//!
//! // Medial cloud sampled on the axis.
//! let cloud = PointCloud::with_constant_radius(&positions, 0.5);
//!
//! // Inflate the region by 50%.
//! let params = AreaParams::new(AreaMethod::area(50.0));
//! let output = manipulate_area(&centerline, &[VesselRegion::Main(cloud)], &params).unwrap();
//!
//! assert_eq!(output.cloud.len(), 101);
//! println!("{}", output.summary());
//! ```
//!
//! # Boundary blending
//!
//! The first and last 10% of the segment ramp linearly between the raw
//! factor and the identity factor 1, so the manipulated region joins the
//! surrounding geometry without a step. Regions resolved in first-line
//! mode start at the inlet and blend only at their trailing end.

mod deform;
mod engine;
mod error;
mod factor;
mod locator;
mod offset;
mod params;
mod result;
mod smoothing;

pub use deform::deform_cloud;
pub use engine::manipulate_area;
pub use error::{AreaError, AreaResult};
pub use factor::{compute_factor_field, FactorField, SMOOTHING_SIGMA};
pub use locator::CenterlineLocator;
pub use offset::{branch_displacement, offset_branch};
pub use params::{
    AreaMethod, AreaParams, RegionMode, VariationTarget, DEFAULT_BETA, DEFAULT_PERCENTAGE,
    DEFAULT_STENOSIS_LENGTH,
};
pub use result::AreaOutput;
pub use smoothing::gaussian_smooth;
