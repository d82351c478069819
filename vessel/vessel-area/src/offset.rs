//! Rigid translation of diverging branch clouds.
//!
//! Branch points carry no correspondence to the main centerline. Instead
//! of rescaling them individually, the whole branch follows the
//! displacement of its attachment point, so the branch ostium stays glued
//! to the deformed main region.

use nalgebra::Vector3;
use vessel_types::{Centerline, CloudPoint, DivergingBranch, PointCloud};

use crate::error::{AreaError, AreaResult};
use crate::factor::FactorField;
use crate::locator::CenterlineLocator;

/// Computes the rigid displacement of a branch.
///
/// The attachment point is displaced exactly as a main-region point at the
/// same position would be; every branch point then shares that vector.
///
/// # Errors
///
/// Returns [`AreaError::FactorLengthMismatch`] if the factor field does
/// not align with the centerline samples.
pub fn branch_displacement(
    branch: &DivergingBranch,
    centerline: &Centerline,
    factors: &FactorField,
    locator: &CenterlineLocator,
) -> AreaResult<Vector3<f64>> {
    if factors.len() != centerline.len() {
        return Err(AreaError::FactorLengthMismatch {
            factors: factors.len(),
            samples: centerline.len(),
        });
    }

    let id = locator.nearest(&branch.attachment);
    let towards_axis = centerline.position(id) - branch.attachment;

    Ok(towards_axis * (1.0 - factors.factor(id)))
}

/// Translates a branch cloud rigidly by its attachment displacement.
///
/// Radii are unchanged; the point order within the branch is preserved.
///
/// # Errors
///
/// Returns [`AreaError::FactorLengthMismatch`] if the factor field does
/// not align with the centerline samples.
///
/// # Example
///
/// ```
/// use vessel_area::{offset_branch, CenterlineLocator, FactorField};
/// use vessel_types::{Centerline, CloudPoint, DivergingBranch, PointCloud};
/// use nalgebra::Point3;
///
/// let positions: Vec<_> = (0..5)
///     .map(|i| Point3::new(f64::from(i), 0.0, 0.0))
///     .collect();
/// let centerline = Centerline::from_positions(&positions, &[1.0; 5], &[0.5; 5]).unwrap();
/// let locator = CenterlineLocator::build(&centerline).unwrap();
/// let factors = FactorField::try_new(vec![0.5; 5]).unwrap();
///
/// let branch = DivergingBranch::new(
///     Point3::new(2.0, 1.0, 0.0),
///     PointCloud::from_points(vec![CloudPoint::new(Point3::new(2.0, 3.0, 0.0), 0.3)]),
/// );
///
/// let translated = offset_branch(&branch, &centerline, &factors, &locator).unwrap();
///
/// // Attachment moves from y=1 to y=0.5; the branch follows rigidly.
/// assert!((translated.points[0].position.y - 2.5).abs() < 1e-12);
/// assert!((translated.points[0].radius - 0.3).abs() < 1e-12);
/// ```
pub fn offset_branch(
    branch: &DivergingBranch,
    centerline: &Centerline,
    factors: &FactorField,
    locator: &CenterlineLocator,
) -> AreaResult<PointCloud> {
    let displacement = branch_displacement(branch, centerline, factors, locator)?;

    let points = branch
        .cloud
        .points
        .iter()
        .map(|point| CloudPoint::new(point.position + displacement, point.radius))
        .collect();

    Ok(PointCloud::from_points(points))
}
