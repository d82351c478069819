//! Area manipulation orchestration.

use tracing::{debug, info};
use vessel_types::{Centerline, PointCloud, VesselRegion};

use crate::deform::deform_cloud;
use crate::error::{AreaError, AreaResult};
use crate::factor::compute_factor_field;
use crate::locator::CenterlineLocator;
use crate::offset::offset_branch;
use crate::params::AreaParams;
use crate::result::AreaOutput;

/// Manipulates the cross-sectional area of a vessel segment.
///
/// The factor field and the nearest-sample locator are built once over the
/// centerline. The regions are then processed in their supplied order
/// (main-region clouds deformed point by point, diverging branches
/// translated rigidly) and reassembled into a single cloud. Within each
/// region the point order is preserved.
///
/// Inputs are never mutated: the call either returns a complete output or
/// fails before producing one.
///
/// # Errors
///
/// Returns an error if the parameter combination is invalid, the
/// centerline is empty, no main region with points is present, or the
/// factor computation fails.
///
/// # Example
///
/// ```
/// use vessel_area::{manipulate_area, AreaMethod, AreaParams};
/// use vessel_types::{Centerline, CloudPoint, PointCloud, VesselRegion};
/// use nalgebra::Point3;
///
/// // Straight segment with constant unit area.
/// let positions: Vec<_> = (0..101)
///     .map(|i| Point3::new(f64::from(i) * 0.1, 0.0, 0.0))
///     .collect();
/// let centerline = Centerline::from_positions(&positions, &[1.0; 101], &[0.5; 101]).unwrap();
///
/// // One medial point sitting 1.0 off the axis at the segment center.
/// let cloud = PointCloud::from_points(vec![CloudPoint::new(Point3::new(5.0, 1.0, 0.0), 0.5)]);
/// let regions = vec![VesselRegion::Main(cloud)];
///
/// let params = AreaParams::new(AreaMethod::area(50.0));
/// let output = manipulate_area(&centerline, &regions, &params).unwrap();
///
/// // Interior factor is 1.5: the point ends up 1.5 off the axis.
/// assert!((output.cloud.points[0].position.y - 1.5).abs() < 1e-9);
/// assert!((output.cloud.points[0].radius - 0.75).abs() < 1e-9);
/// ```
pub fn manipulate_area(
    centerline: &Centerline,
    regions: &[VesselRegion],
    params: &AreaParams,
) -> AreaResult<AreaOutput> {
    params.validate()?;
    if centerline.is_empty() {
        return Err(AreaError::EmptyCenterline);
    }

    let main_point_total: usize = regions
        .iter()
        .filter_map(VesselRegion::as_main)
        .map(PointCloud::len)
        .sum();
    if main_point_total == 0 {
        return Err(AreaError::EmptyCloud);
    }

    let factors = compute_factor_field(centerline, params)?;
    let locator = CenterlineLocator::build(centerline)?;

    let (min_factor, max_factor) = factors
        .values()
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), &f| (lo.min(f), hi.max(f)));
    info!(
        method = params.method.name(),
        region_mode = params.region_mode.name(),
        samples = centerline.len(),
        regions = regions.len(),
        "starting area manipulation"
    );
    debug!(min_factor, max_factor, "factor field computed");

    let mut cloud = PointCloud::new();
    let mut main_points = 0;
    let mut branch_count = 0;
    let mut branch_points = 0;
    let mut max_displacement = 0.0_f64;
    let mut total_displacement = 0.0;

    for region in regions {
        let (original, transformed) = match region {
            VesselRegion::Main(main) => {
                let deformed = deform_cloud(main, centerline, &factors, &locator)?;
                main_points += deformed.len();
                (main, deformed)
            }
            VesselRegion::Diverging(branch) => {
                let translated = offset_branch(branch, centerline, &factors, &locator)?;
                branch_count += 1;
                branch_points += translated.len();
                (&branch.cloud, translated)
            }
        };

        for (before, after) in original.points.iter().zip(transformed.points.iter()) {
            let displacement = (after.position - before.position).norm();
            max_displacement = max_displacement.max(displacement);
            total_displacement += displacement;
        }

        cloud.extend_from_cloud(&transformed);
    }

    #[allow(clippy::cast_precision_loss)]
    let mean_displacement = if cloud.is_empty() {
        0.0
    } else {
        total_displacement / cloud.len() as f64
    };

    info!(
        main_points,
        branch_count, branch_points, max_displacement, "area manipulation complete"
    );

    Ok(AreaOutput {
        cloud,
        factors,
        main_points,
        branch_count,
        branch_points,
        max_displacement,
        mean_displacement,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::AreaMethod;
    use approx::assert_relative_eq;
    use nalgebra::Point3;
    use vessel_types::{CloudPoint, DivergingBranch};

    fn straight_centerline(n: usize) -> Centerline {
        let positions: Vec<_> = (0..n)
            .map(|i| Point3::new(i as f64, 0.0, 0.0))
            .collect();
        Centerline::from_positions(&positions, &vec![1.0; n], &vec![0.5; n]).unwrap()
    }

    fn main_cloud(n: usize) -> PointCloud {
        let points = (0..n)
            .map(|i| CloudPoint::new(Point3::new(i as f64, 1.0, 0.0), 0.5))
            .collect();
        PointCloud::from_points(points)
    }

    fn branch_at(x: f64) -> DivergingBranch {
        DivergingBranch::new(
            Point3::new(x, 1.0, 0.0),
            PointCloud::from_points(vec![
                CloudPoint::new(Point3::new(x, 2.0, 0.0), 0.4),
                CloudPoint::new(Point3::new(x, 3.0, 1.0), 0.3),
            ]),
        )
    }

    #[test]
    fn test_identity_manipulation() {
        let centerline = straight_centerline(50);
        let regions = vec![VesselRegion::Main(main_cloud(50))];
        let params = AreaParams::new(AreaMethod::area(0.0));

        let output = manipulate_area(&centerline, &regions, &params).unwrap();

        assert_eq!(output.cloud, main_cloud(50));
        assert!(output.is_identity(1e-12));
        assert_eq!(output.main_points, 50);
        assert_eq!(output.branch_count, 0);
    }

    #[test]
    fn test_output_preserves_region_order() {
        let centerline = straight_centerline(50);
        let regions = vec![
            VesselRegion::Main(main_cloud(50)),
            VesselRegion::Diverging(branch_at(20.0)),
            VesselRegion::Diverging(branch_at(30.0)),
        ];
        let params = AreaParams::new(AreaMethod::area(50.0));

        let output = manipulate_area(&centerline, &regions, &params).unwrap();

        assert_eq!(output.main_points, 50);
        assert_eq!(output.branch_count, 2);
        assert_eq!(output.branch_points, 4);
        assert_eq!(output.cloud.len(), 54);

        // Main points first, then the branches in supplied order with
        // their internal order intact.
        assert_relative_eq!(output.cloud.points[50].position.x, 20.0, epsilon = 1e-9);
        assert_relative_eq!(output.cloud.points[51].position.x, 20.0, epsilon = 1e-9);
        assert_relative_eq!(output.cloud.points[52].position.x, 30.0, epsilon = 1e-9);
        assert_relative_eq!(output.cloud.points[53].position.x, 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_branches_move_rigidly_with_unchanged_radii() {
        let centerline = straight_centerline(50);
        let branch = branch_at(25.0);
        let regions = vec![
            VesselRegion::Main(main_cloud(50)),
            VesselRegion::Diverging(branch.clone()),
        ];
        let params = AreaParams::new(AreaMethod::area(50.0));

        let output = manipulate_area(&centerline, &regions, &params).unwrap();

        let translated = &output.cloud.points[50..];
        let shared = translated[0].position - branch.cloud.points[0].position;
        for (original, moved) in branch.cloud.points.iter().zip(translated.iter()) {
            let displacement = moved.position - original.position;
            assert_relative_eq!((displacement - shared).norm(), 0.0, epsilon = 1e-12);
            assert_relative_eq!(moved.radius, original.radius, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_empty_centerline_rejected() {
        let regions = vec![VesselRegion::Main(main_cloud(10))];
        let err = manipulate_area(
            &Centerline::default(),
            &regions,
            &AreaParams::new(AreaMethod::area(50.0)),
        )
        .unwrap_err();
        assert_eq!(err, AreaError::EmptyCenterline);
    }

    #[test]
    fn test_missing_main_region_rejected() {
        let centerline = straight_centerline(50);
        let params = AreaParams::new(AreaMethod::area(50.0));

        let err = manipulate_area(&centerline, &[], &params).unwrap_err();
        assert_eq!(err, AreaError::EmptyCloud);

        let branch_only = vec![VesselRegion::Diverging(branch_at(10.0))];
        let err = manipulate_area(&centerline, &branch_only, &params).unwrap_err();
        assert_eq!(err, AreaError::EmptyCloud);

        let empty_main = vec![VesselRegion::Main(PointCloud::new())];
        let err = manipulate_area(&centerline, &empty_main, &params).unwrap_err();
        assert_eq!(err, AreaError::EmptyCloud);
    }

    #[test]
    fn test_invalid_params_rejected_before_computation() {
        let centerline = straight_centerline(50);
        let regions = vec![VesselRegion::Main(main_cloud(50))];

        // Stenosis without region points.
        let params = AreaParams::new(AreaMethod::stenosis(50.0));
        let err = manipulate_area(&centerline, &regions, &params).unwrap_err();
        assert!(matches!(err, AreaError::RegionPointCount { .. }));
    }

    #[test]
    fn test_displacement_metrics() {
        let centerline = straight_centerline(50);
        let regions = vec![VesselRegion::Main(main_cloud(50))];
        let params = AreaParams::new(AreaMethod::area(50.0));

        let output = manipulate_area(&centerline, &regions, &params).unwrap();

        // Interior points move from 1.0 to 1.5 off the axis.
        assert_relative_eq!(output.max_displacement, 0.5, epsilon = 1e-9);
        assert!(output.mean_displacement > 0.0);
        assert!(output.mean_displacement <= output.max_displacement);
        assert_eq!(output.total_points(), 50);
    }
}
