//! Manipulation parameters and configuration.
//!
//! This module provides [`AreaParams`] for configuring an area manipulation,
//! along with the [`AreaMethod`] and [`RegionMode`] selectors resolved by
//! upstream tooling.

use std::str::FromStr;

use nalgebra::Point3;

use crate::error::{AreaError, AreaResult};

/// Default exponent for [`AreaMethod::Variation`].
pub const DEFAULT_BETA: f64 = 0.5;

/// Default area change percentage for stenosis and uniform scaling.
pub const DEFAULT_PERCENTAGE: f64 = 50.0;

/// Default stenosis length, in multiples of the inscribed sphere radius at
/// the selected point.
pub const DEFAULT_STENOSIS_LENGTH: f64 = 2.0;

/// Target of a variation manipulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VariationTarget {
    /// Exponent applied to the normalized area profile.
    ///
    /// Negative values flatten the area variation along the segment,
    /// positive values amplify it.
    Beta(f64),
    /// Desired max/min cross-sectional area ratio.
    ///
    /// The exponent is solved from the target ratio with a single
    /// closed-form step; the achieved ratio is approximate.
    Ratio(f64),
}

/// The area manipulation method.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum AreaMethod {
    /// Amplify or dampen the area variation along the segment.
    Variation(VariationTarget),
    /// Create or remove a local narrowing.
    ///
    /// With one region point the narrowing is a symmetric sine bump
    /// centered in the segment; with two region points the area profile is
    /// linearly interpolated between the endpoint areas.
    Stenosis {
        /// Percentage by which the narrowing changes the area.
        percentage: f64,
    },
    /// Inflate or deflate the whole region uniformly.
    Area {
        /// Percentage by which the area changes.
        percentage: f64,
    },
}

impl AreaMethod {
    /// Creates a variation method with an explicit exponent.
    #[must_use]
    pub const fn variation(beta: f64) -> Self {
        Self::Variation(VariationTarget::Beta(beta))
    }

    /// Creates a variation method targeting a max/min area ratio.
    #[must_use]
    pub const fn variation_with_ratio(ratio: f64) -> Self {
        Self::Variation(VariationTarget::Ratio(ratio))
    }

    /// Creates a stenosis method.
    #[must_use]
    pub const fn stenosis(percentage: f64) -> Self {
        Self::Stenosis { percentage }
    }

    /// Creates a uniform area scaling method.
    #[must_use]
    pub const fn area(percentage: f64) -> Self {
        Self::Area { percentage }
    }

    /// Returns the selector name of the method.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Variation(_) => "variation",
            Self::Stenosis { .. } => "stenosis",
            Self::Area { .. } => "area",
        }
    }
}

impl FromStr for AreaMethod {
    type Err = AreaError;

    /// Parses an upstream method selector, with the upstream default
    /// parameters for each method.
    fn from_str(s: &str) -> AreaResult<Self> {
        match s {
            "variation" => Ok(Self::variation(DEFAULT_BETA)),
            "stenosis" => Ok(Self::stenosis(DEFAULT_PERCENTAGE)),
            "area" => Ok(Self::area(DEFAULT_PERCENTAGE)),
            _ => Err(AreaError::UnknownMethod(s.to_owned())),
        }
    }
}

/// How the region of interest was resolved upstream.
///
/// The region itself arrives as an already-restricted centerline segment;
/// the mode only influences boundary blending (a first-line region starts
/// at the inlet, so only its trailing end blends back to the untouched
/// geometry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegionMode {
    /// Region picked interactively.
    Manual,
    /// Region given as explicit start/end points.
    Commandline,
    /// Region runs from the inlet to the first bifurcation.
    FirstLine,
}

impl RegionMode {
    /// Returns the selector name of the mode.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Commandline => "commandline",
            Self::FirstLine => "first_line",
        }
    }
}

impl FromStr for RegionMode {
    type Err = AreaError;

    fn from_str(s: &str) -> AreaResult<Self> {
        match s {
            "manual" => Ok(Self::Manual),
            "commandline" => Ok(Self::Commandline),
            "first_line" => Ok(Self::FirstLine),
            _ => Err(AreaError::UnknownRegionMode(s.to_owned())),
        }
    }
}

/// Parameters for one area manipulation call.
///
/// # Examples
///
/// ```
/// use vessel_area::{AreaMethod, AreaParams, RegionMode};
///
/// let params = AreaParams::new(AreaMethod::variation(-0.4))
///     .with_region_mode(RegionMode::Commandline);
///
/// assert!(params.validate().is_ok());
/// ```
///
/// Stenosis parameters carry the resolved region points:
///
/// ```
/// use vessel_area::{AreaMethod, AreaParams};
/// use nalgebra::Point3;
///
/// let params = AreaParams::new(AreaMethod::stenosis(30.0))
///     .with_region_point(Point3::new(12.0, 4.5, -1.0));
///
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AreaParams {
    /// The manipulation method.
    pub method: AreaMethod,
    /// How the region of interest was resolved.
    pub region_mode: RegionMode,
    /// Resolved region points; only stenosis interprets them.
    pub region_points: Vec<Point3<f64>>,
    /// Length of the affected stenosis area, in multiples of the inscribed
    /// sphere radius at the selected point. Carried for reporting; the
    /// region is already resolved upstream.
    pub stenosis_length: f64,
}

impl AreaParams {
    /// Creates parameters for the given method with upstream defaults.
    #[must_use]
    pub const fn new(method: AreaMethod) -> Self {
        Self {
            method,
            region_mode: RegionMode::Manual,
            region_points: Vec::new(),
            stenosis_length: DEFAULT_STENOSIS_LENGTH,
        }
    }

    /// Sets the region mode.
    #[must_use]
    pub const fn with_region_mode(mut self, mode: RegionMode) -> Self {
        self.region_mode = mode;
        self
    }

    /// Sets the resolved region points.
    #[must_use]
    pub fn with_region_points(mut self, points: Vec<Point3<f64>>) -> Self {
        self.region_points = points;
        self
    }

    /// Adds a single region point.
    #[must_use]
    pub fn with_region_point(mut self, point: Point3<f64>) -> Self {
        self.region_points.push(point);
        self
    }

    /// Sets the stenosis length.
    #[must_use]
    pub const fn with_stenosis_length(mut self, length: f64) -> Self {
        self.stenosis_length = length;
        self
    }

    /// Validates the parameter combination.
    ///
    /// # Errors
    ///
    /// Returns an error if stenosis is combined with the first-line region
    /// mode, or if the region point count does not match the method.
    pub fn validate(&self) -> AreaResult<()> {
        if let AreaMethod::Stenosis { .. } = self.method {
            if self.region_mode == RegionMode::FirstLine {
                return Err(AreaError::StenosisOnFirstLine);
            }
            if !(1..=2).contains(&self.region_points.len()) {
                return Err(AreaError::RegionPointCount {
                    expected: "1 or 2",
                    actual: self.region_points.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing() {
        assert_eq!(
            "variation".parse::<AreaMethod>().unwrap(),
            AreaMethod::variation(DEFAULT_BETA)
        );
        assert_eq!(
            "stenosis".parse::<AreaMethod>().unwrap(),
            AreaMethod::stenosis(DEFAULT_PERCENTAGE)
        );
        assert_eq!(
            "area".parse::<AreaMethod>().unwrap(),
            AreaMethod::area(DEFAULT_PERCENTAGE)
        );

        let err = "inflate".parse::<AreaMethod>().unwrap_err();
        assert!(matches!(err, AreaError::UnknownMethod(name) if name == "inflate"));
    }

    #[test]
    fn test_region_mode_parsing() {
        assert_eq!("manual".parse::<RegionMode>().unwrap(), RegionMode::Manual);
        assert_eq!(
            "commandline".parse::<RegionMode>().unwrap(),
            RegionMode::Commandline
        );
        assert_eq!(
            "first_line".parse::<RegionMode>().unwrap(),
            RegionMode::FirstLine
        );

        assert!("firstline".parse::<RegionMode>().is_err());
    }

    #[test]
    fn test_method_names_round_trip() {
        for method in [
            AreaMethod::variation(0.5),
            AreaMethod::stenosis(50.0),
            AreaMethod::area(50.0),
        ] {
            assert_eq!(method.name().parse::<AreaMethod>().unwrap().name(), method.name());
        }
    }

    #[test]
    fn test_params_defaults() {
        let params = AreaParams::new(AreaMethod::area(25.0));
        assert_eq!(params.region_mode, RegionMode::Manual);
        assert!(params.region_points.is_empty());
        assert!((params.stenosis_length - DEFAULT_STENOSIS_LENGTH).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stenosis_rejects_first_line() {
        let params = AreaParams::new(AreaMethod::stenosis(50.0))
            .with_region_mode(RegionMode::FirstLine)
            .with_region_point(Point3::origin());

        assert_eq!(params.validate(), Err(AreaError::StenosisOnFirstLine));
    }

    #[test]
    fn test_stenosis_region_point_count() {
        let base = AreaParams::new(AreaMethod::stenosis(50.0));

        assert!(matches!(
            base.clone().validate(),
            Err(AreaError::RegionPointCount { actual: 0, .. })
        ));

        let one = base.clone().with_region_point(Point3::origin());
        assert!(one.validate().is_ok());

        let two = one.clone().with_region_point(Point3::new(1.0, 0.0, 0.0));
        assert!(two.validate().is_ok());

        let three = two.with_region_point(Point3::new(2.0, 0.0, 0.0));
        assert!(matches!(
            three.validate(),
            Err(AreaError::RegionPointCount { actual: 3, .. })
        ));
    }

    #[test]
    fn test_other_methods_ignore_region_points() {
        let params = AreaParams::new(AreaMethod::variation(0.5))
            .with_region_points(vec![Point3::origin(); 4]);
        assert!(params.validate().is_ok());
    }
}
