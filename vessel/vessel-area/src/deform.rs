//! Per-point deformation of the main-region cloud.

use rayon::prelude::*;
use vessel_types::{Centerline, CloudPoint, PointCloud};

use crate::error::{AreaError, AreaResult};
use crate::factor::FactorField;
use crate::locator::CenterlineLocator;

/// Deforms a main-region point cloud against a factor field.
///
/// Each point moves along the direction towards its nearest centerline
/// sample by `1 - factor` of that distance, and its radius scales by
/// `factor`. A factor of 1 at every touched sample leaves the cloud
/// unchanged.
///
/// The input cloud is untouched; a new cloud is returned with points in
/// the input order. Points are processed in parallel.
///
/// # Errors
///
/// Returns [`AreaError::FactorLengthMismatch`] if the factor field does
/// not align with the centerline samples.
///
/// # Example
///
/// ```
/// use vessel_area::{deform_cloud, CenterlineLocator, FactorField};
/// use vessel_types::{Centerline, CloudPoint, PointCloud};
/// use nalgebra::Point3;
///
/// let positions: Vec<_> = (0..5)
///     .map(|i| Point3::new(f64::from(i), 0.0, 0.0))
///     .collect();
/// let centerline = Centerline::from_positions(&positions, &[1.0; 5], &[0.5; 5]).unwrap();
/// let locator = CenterlineLocator::build(&centerline).unwrap();
/// let factors = FactorField::try_new(vec![2.0; 5]).unwrap();
///
/// let cloud = PointCloud::from_points(vec![CloudPoint::new(Point3::new(2.0, 1.0, 0.0), 0.5)]);
/// let deformed = deform_cloud(&cloud, &centerline, &factors, &locator).unwrap();
///
/// // The point doubles its distance to the axis, and its radius doubles.
/// assert!((deformed.points[0].position.y - 2.0).abs() < 1e-12);
/// assert!((deformed.points[0].radius - 1.0).abs() < 1e-12);
/// ```
pub fn deform_cloud(
    cloud: &PointCloud,
    centerline: &Centerline,
    factors: &FactorField,
    locator: &CenterlineLocator,
) -> AreaResult<PointCloud> {
    if factors.len() != centerline.len() {
        return Err(AreaError::FactorLengthMismatch {
            factors: factors.len(),
            samples: centerline.len(),
        });
    }

    let points: Vec<CloudPoint> = cloud
        .points
        .par_iter()
        .map(|point| {
            let id = locator.nearest(&point.position);
            let factor = factors.factor(id);

            let towards_axis = centerline.position(id) - point.position;
            let displacement = towards_axis * (1.0 - factor);

            CloudPoint::new(point.position + displacement, point.radius * factor)
        })
        .collect();

    Ok(PointCloud::from_points(points))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn line_centerline(n: usize) -> Centerline {
        let positions: Vec<_> = (0..n)
            .map(|i| Point3::new(i as f64, 0.0, 0.0))
            .collect();
        Centerline::from_positions(&positions, &vec![1.0; n], &vec![0.5; n]).unwrap()
    }

    fn tube_cloud(n: usize) -> PointCloud {
        // Points at unit distance around the axis of `line_centerline`.
        let points = (0..n)
            .flat_map(|i| {
                let x = i as f64;
                [
                    CloudPoint::new(Point3::new(x, 1.0, 0.0), 0.5),
                    CloudPoint::new(Point3::new(x, -1.0, 0.0), 0.5),
                    CloudPoint::new(Point3::new(x, 0.0, 1.0), 0.5),
                ]
            })
            .collect();
        PointCloud::from_points(points)
    }

    #[test]
    fn test_identity_factor_leaves_cloud_unchanged() {
        let centerline = line_centerline(10);
        let locator = CenterlineLocator::build(&centerline).unwrap();
        let factors = FactorField::try_new(vec![1.0; 10]).unwrap();
        let cloud = tube_cloud(10);

        let deformed = deform_cloud(&cloud, &centerline, &factors, &locator).unwrap();
        assert_eq!(deformed, cloud);
    }

    #[test]
    fn test_radius_scales_by_factor_exactly() {
        let centerline = line_centerline(10);
        let locator = CenterlineLocator::build(&centerline).unwrap();
        let values: Vec<f64> = (0..10).map(|i| 1.0 + 0.1 * i as f64).collect();
        let factors = FactorField::try_new(values).unwrap();
        let cloud = tube_cloud(10);

        let deformed = deform_cloud(&cloud, &centerline, &factors, &locator).unwrap();

        assert_eq!(deformed.len(), cloud.len());
        for (original, moved) in cloud.points.iter().zip(deformed.points.iter()) {
            let id = locator.nearest(&original.position);
            assert_relative_eq!(
                moved.radius / original.radius,
                factors.factor(id),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_displacement_towards_axis() {
        let centerline = line_centerline(5);
        let locator = CenterlineLocator::build(&centerline).unwrap();
        // Factor 0.5 halves the distance to the axis.
        let factors = FactorField::try_new(vec![0.5; 5]).unwrap();
        let cloud =
            PointCloud::from_points(vec![CloudPoint::new(Point3::new(2.0, 2.0, 0.0), 0.5)]);

        let deformed = deform_cloud(&cloud, &centerline, &factors, &locator).unwrap();

        let p = deformed.points[0].position;
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(deformed.points[0].radius, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_output_order_matches_input() {
        let centerline = line_centerline(10);
        let locator = CenterlineLocator::build(&centerline).unwrap();
        let factors = FactorField::try_new(vec![1.5; 10]).unwrap();
        let cloud = tube_cloud(10);

        let deformed = deform_cloud(&cloud, &centerline, &factors, &locator).unwrap();

        for (original, moved) in cloud.points.iter().zip(deformed.points.iter()) {
            assert_relative_eq!(original.position.x, moved.position.x, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_factor_length_mismatch_rejected() {
        let centerline = line_centerline(10);
        let locator = CenterlineLocator::build(&centerline).unwrap();
        let factors = FactorField::try_new(vec![1.0; 7]).unwrap();

        let err = deform_cloud(&tube_cloud(10), &centerline, &factors, &locator).unwrap_err();
        assert_eq!(
            err,
            AreaError::FactorLengthMismatch {
                factors: 7,
                samples: 10
            }
        );
    }

    #[test]
    fn test_empty_cloud_passes_through() {
        let centerline = line_centerline(10);
        let locator = CenterlineLocator::build(&centerline).unwrap();
        let factors = FactorField::try_new(vec![1.5; 10]).unwrap();

        let deformed =
            deform_cloud(&PointCloud::new(), &centerline, &factors, &locator).unwrap();
        assert!(deformed.is_empty());
    }
}
