//! Nearest-sample lookup over centerline positions.

use kiddo::{KdTree, SquaredEuclidean};
use nalgebra::Point3;
use vessel_types::Centerline;

use crate::error::{AreaError, AreaResult};

/// A build-once, query-many nearest-sample index over a centerline.
///
/// Every sample position is loaded into a KD-tree at construction; queries
/// never mutate the index, so one locator serves any number of lookups
/// (and any number of threads).
///
/// # Example
///
/// ```
/// use vessel_area::CenterlineLocator;
/// use vessel_types::Centerline;
/// use nalgebra::Point3;
///
/// let positions: Vec<_> = (0..20)
///     .map(|i| Point3::new(f64::from(i), 0.0, 0.0))
///     .collect();
/// let centerline = Centerline::from_positions(&positions, &[1.0; 20], &[0.5; 20]).unwrap();
///
/// let locator = CenterlineLocator::build(&centerline).unwrap();
/// assert_eq!(locator.nearest(&Point3::new(7.2, 3.0, 0.0)), 7);
/// ```
#[derive(Debug)]
pub struct CenterlineLocator {
    tree: KdTree<f64, 3>,
}

impl CenterlineLocator {
    /// Builds a locator over all samples of a centerline.
    ///
    /// # Errors
    ///
    /// Returns [`AreaError::EmptyCenterline`] if the centerline has no
    /// samples.
    pub fn build(centerline: &Centerline) -> AreaResult<Self> {
        if centerline.is_empty() {
            return Err(AreaError::EmptyCenterline);
        }

        let mut tree: KdTree<f64, 3> = KdTree::new();
        for (i, sample) in centerline.samples().iter().enumerate() {
            let p = sample.position;
            #[allow(clippy::cast_possible_truncation)]
            tree.add(&[p.x, p.y, p.z], i as u64);
        }

        Ok(Self { tree })
    }

    /// Returns the index of the sample nearest to `point`.
    ///
    /// Ties between equidistant samples resolve by the tree's traversal
    /// order, which is fixed once the locator is built: the same query on
    /// the same locator always returns the same index.
    #[must_use]
    pub fn nearest(&self, point: &Point3<f64>) -> usize {
        let hit = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[point.x, point.y, point.z]);
        #[allow(clippy::cast_possible_truncation)]
        {
            hit.item as usize
        }
    }
}
