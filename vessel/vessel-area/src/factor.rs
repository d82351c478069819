//! Scaling factor field computation.
//!
//! The factor field assigns one positive scalar per centerline sample. A
//! factor of 1 leaves the geometry untouched; values below 1 narrow the
//! vessel, values above 1 widen it. Factors scale the inscribed radius, so
//! area-level targets enter through a square root.
//!
//! The area array is low-pass filtered before any factor is derived, and
//! the ends of the manipulated segment ramp linearly back to the identity
//! factor so the deformed region joins the untouched geometry without a
//! step.

use vessel_types::Centerline;

use crate::error::{AreaError, AreaResult};
use crate::params::{AreaMethod, AreaParams, RegionMode, VariationTarget};
use crate::smoothing::gaussian_smooth;

/// Standard deviation of the area-smoothing kernel, in samples.
pub const SMOOTHING_SIGMA: f64 = 5.0;

/// Number of smoothing passes applied to the area array.
const SMOOTHING_PASSES: usize = 2;

/// Fraction of the segment reserved at each end for the identity ramp.
const TRANSITION_FRACTION: f64 = 0.10;

/// Per-sample radius scaling factors, aligned to a centerline by index.
///
/// Every value is positive and finite; construction rejects anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorField {
    values: Vec<f64>,
}

impl FactorField {
    /// Creates a factor field, validating every value.
    ///
    /// # Errors
    ///
    /// Returns [`AreaError::NonPositiveFactor`] if any value is not a
    /// positive finite number.
    pub fn try_new(values: Vec<f64>) -> AreaResult<Self> {
        for (index, &value) in values.iter().enumerate() {
            if !(value > 0.0 && value.is_finite()) {
                return Err(AreaError::NonPositiveFactor { index, value });
            }
        }
        Ok(Self { values })
    }

    /// Returns the number of factors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the field has no factors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the factors as a slice.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the factor for the sample at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn factor(&self, index: usize) -> f64 {
        self.values[index]
    }
}

/// Computes the factor field for a centerline segment.
///
/// The cross-sectional area array is smoothed, the method-specific raw
/// factor is evaluated per sample, and the segment ends are blended
/// linearly back to the identity factor (only the trailing end for
/// [`RegionMode::FirstLine`] regions, which start at the inlet).
///
/// # Errors
///
/// Returns an error if the parameters are inconsistent (see
/// [`AreaParams::validate`]), the centerline is empty, the ratio solve is
/// degenerate, or any computed factor is not positive and finite.
///
/// # Example
///
/// ```
/// use vessel_area::{compute_factor_field, AreaMethod, AreaParams};
/// use vessel_types::Centerline;
/// use nalgebra::Point3;
///
/// let positions: Vec<_> = (0..101)
///     .map(|i| Point3::new(f64::from(i) * 0.1, 0.0, 0.0))
///     .collect();
/// let centerline = Centerline::from_positions(&positions, &[1.0; 101], &[0.5; 101]).unwrap();
///
/// let params = AreaParams::new(AreaMethod::area(50.0));
/// let factors = compute_factor_field(&centerline, &params).unwrap();
///
/// assert_eq!(factors.len(), centerline.len());
/// // Interior samples carry the full scaling, the boundary none.
/// assert!((factors.factor(50) - 1.5).abs() < 1e-12);
/// assert!((factors.factor(0) - 1.0).abs() < 1e-12);
/// ```
pub fn compute_factor_field(
    centerline: &Centerline,
    params: &AreaParams,
) -> AreaResult<FactorField> {
    params.validate()?;
    if centerline.is_empty() {
        return Err(AreaError::EmptyCenterline);
    }

    let mut area = centerline.areas();
    for _ in 0..SMOOTHING_PASSES {
        area = gaussian_smooth(&area, SMOOTHING_SIGMA);
    }

    let raw = raw_factors(centerline, &area, params)?;
    let weights = transition_weights(centerline.len(), params.region_mode);

    let blended = raw
        .iter()
        .zip(weights.iter())
        .map(|(&factor, &weight)| factor.mul_add(1.0 - weight, weight))
        .collect();

    FactorField::try_new(blended)
}

/// Evaluates the method-specific factor before boundary blending.
fn raw_factors(
    centerline: &Centerline,
    area: &[f64],
    params: &AreaParams,
) -> AreaResult<Vec<f64>> {
    #[allow(clippy::cast_precision_loss)]
    let mean_area = area.iter().sum::<f64>() / area.len() as f64;

    match params.method {
        AreaMethod::Variation(target) => {
            let beta = match target {
                VariationTarget::Beta(beta) => beta,
                VariationTarget::Ratio(ratio) => solve_variation_exponent(area, ratio)?,
            };
            Ok(area.iter().map(|&a| (a / mean_area).powf(beta)).collect())
        }
        AreaMethod::Stenosis { percentage } => {
            stenosis_factors(centerline, area, percentage, params.region_points.len())
        }
        AreaMethod::Area { percentage } => Ok(vec![1.0 + percentage / 100.0; area.len()]),
    }
}

/// Solves the variation exponent from a target max/min area ratio.
///
/// One closed-form step: `beta = (ln ratio / ln R_old - 1) / 2`. The target
/// ratio is only approximately achieved; the bias of this approximation is
/// kept as observable behavior.
fn solve_variation_exponent(area: &[f64], ratio: f64) -> AreaResult<f64> {
    let max = area.iter().fold(f64::MIN, |acc, &a| acc.max(a));
    let min = area.iter().fold(f64::MAX, |acc, &a| acc.min(a));
    let current = max / min;

    if ratio <= 0.0 || current <= 1.0 {
        return Err(AreaError::DegenerateAreaRatio { ratio, current });
    }

    Ok(0.5 * (ratio.ln() / current.ln() - 1.0))
}

/// Evaluates the stenosis factor profile.
///
/// One region point: a symmetric sine bump over the whole segment. Two
/// region points: the target area interpolates linearly in arc length
/// between the endpoint areas, removing whatever narrowing lies between.
fn stenosis_factors(
    centerline: &Centerline,
    area: &[f64],
    percentage: f64,
    region_point_count: usize,
) -> AreaResult<Vec<f64>> {
    let n = area.len();
    match region_point_count {
        1 => Ok((0..n)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let t = if n > 1 {
                    std::f64::consts::PI * i as f64 / (n - 1) as f64
                } else {
                    0.0
                };
                1.0 - t.sin() * percentage / 100.0
            })
            .collect()),
        2 => {
            let span = centerline.arc_span();
            if span <= 0.0 {
                return Err(AreaError::ZeroArcSpan);
            }
            let arcs = centerline.arc_lengths();
            let (first, last) = (area[0], area[n - 1]);

            Ok(area
                .iter()
                .zip(arcs.iter())
                .map(|(&a, &arc)| {
                    let t = (arc - arcs[0]) / span;
                    let target = (last - first).mul_add(t, first);
                    (target / a).sqrt()
                })
                .collect())
        }
        actual => Err(AreaError::RegionPointCount {
            expected: "1 or 2",
            actual,
        }),
    }
}

/// Computes the per-sample identity-blend weight.
///
/// Weight 1 at the segment boundary means "keep the original geometry";
/// weight 0 in the interior applies the raw factor unchanged. The ramp
/// covers `round(0.10 * n)` samples at each end, endpoints inclusive;
/// first-line regions ramp only at the trailing end.
fn transition_weights(n: usize, mode: RegionMode) -> Vec<f64> {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let k = (TRANSITION_FRACTION * n as f64).round() as usize;

    let mut weights = vec![0.0; n];
    if k == 0 {
        return weights;
    }

    #[allow(clippy::cast_precision_loss)]
    let ramp = |step: usize| {
        if k == 1 {
            1.0
        } else {
            step as f64 / (k - 1) as f64
        }
    };

    if mode != RegionMode::FirstLine {
        for i in 0..k {
            weights[i] = ramp(k - 1 - i);
        }
    }
    for j in 0..k {
        weights[n - k + j] = ramp(j);
    }

    weights
}
