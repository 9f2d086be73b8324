//! Conversion of user supplied coordinates into the normalized map space.

use crate::{PlannerError, Point};

/// What to do with a coordinate outside of `[0, input_range]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutOfRange {
    /// reject the coordinate with [`PlannerError::InvalidInput`] (default)
    Reject,
    /// move the coordinate to the closest boundary
    Clamp,
}

/// The contract for coordinates handed to the [`RoutePlanner`](crate::RoutePlanner).
///
/// A value `v` is normalized to `v / input_range`, so with the default range of `100` the inputs
/// are percentages of the map's bounding box. Both boundaries are inclusive.
///
/// Default options:
/// ```
/// # use route_planner::coords::{CoordinateConfig, OutOfRange};
/// assert_eq!(
///     CoordinateConfig {
///         input_range: 100.0,
///         out_of_range: OutOfRange::Reject,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateConfig {
    /// The input value that corresponds to the far edge of the map (defaults to `100`)
    pub input_range: f64,
    /// How inputs outside of `[0, input_range]` are handled (defaults to [`OutOfRange::Reject`])
    pub out_of_range: OutOfRange,
}

impl CoordinateConfig {
    /// Inputs are percentages of the bounding box
    pub const PERCENT: CoordinateConfig = CoordinateConfig {
        input_range: 100.0,
        out_of_range: OutOfRange::Reject,
    };
    /// Inputs are already normalized to `[0, 1]`
    pub const NORMALIZED: CoordinateConfig = CoordinateConfig {
        input_range: 1.0,
        out_of_range: OutOfRange::Reject,
    };

    /// Converts a single input value into `[0, 1]`.
    ///
    /// ## Examples
    /// ```
    /// # use route_planner::coords::{CoordinateConfig, OutOfRange};
    /// let config = CoordinateConfig::PERCENT;
    /// assert_eq!(config.normalize_value(25.0), Ok(0.25));
    /// assert!(config.normalize_value(101.0).is_err());
    ///
    /// let clamping = CoordinateConfig { out_of_range: OutOfRange::Clamp, ..config };
    /// assert_eq!(clamping.normalize_value(101.0), Ok(1.0));
    /// ```
    pub fn normalize_value(&self, value: f64) -> Result<f64, PlannerError> {
        if !(self.input_range.is_finite() && self.input_range > 0.0) {
            return Err(PlannerError::invalid_input(format!(
                "coordinate input range must be positive, got {}",
                self.input_range
            )));
        }
        if !value.is_finite() {
            return Err(PlannerError::invalid_input(format!(
                "coordinate {} is not a finite number",
                value
            )));
        }
        let value = if (0.0..=self.input_range).contains(&value) {
            value
        } else {
            match self.out_of_range {
                OutOfRange::Reject => {
                    return Err(PlannerError::invalid_input(format!(
                        "coordinate {} is outside of [0, {}]",
                        value, self.input_range
                    )))
                }
                OutOfRange::Clamp => value.clamp(0.0, self.input_range),
            }
        };
        Ok(value / self.input_range)
    }

    /// Converts an `(x, y)` pair into the normalized map space
    pub fn normalize(&self, (x, y): Point) -> Result<Point, PlannerError> {
        Ok((self.normalize_value(x)?, self.normalize_value(y)?))
    }
}

impl Default for CoordinateConfig {
    fn default() -> CoordinateConfig {
        CoordinateConfig::PERCENT
    }
}
