//! Shared input validation helpers.

use crate::error::OpsError;

/// Largest accepted search radius in kilometers (half the Earth's
/// circumference covers every point).
pub(crate) const MAX_SEARCH_RADIUS_KM: f64 = 20_000.0;

/// Accepted result-limit range across operations.
pub(crate) const LIMIT_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

/// Accepted lookback range for the parametric search, in days.
pub(crate) const DAYS_RANGE: std::ops::RangeInclusive<u32> = 1..=365;

pub(crate) fn check_latitude(value: f64) -> Result<(), OpsError> {
    if !value.is_finite() || !(-90.0..=90.0).contains(&value) {
        return Err(OpsError::invalid(
            "latitude",
            format!("must be within [-90, 90], got {value}"),
        ));
    }
    Ok(())
}

pub(crate) fn check_longitude(value: f64) -> Result<(), OpsError> {
    if !value.is_finite() || !(-180.0..=180.0).contains(&value) {
        return Err(OpsError::invalid(
            "longitude",
            format!("must be within [-180, 180], got {value}"),
        ));
    }
    Ok(())
}

pub(crate) fn check_limit(value: u32) -> Result<(), OpsError> {
    if !LIMIT_RANGE.contains(&value) {
        return Err(OpsError::invalid(
            "limit",
            format!(
                "must be within [{}, {}], got {value}",
                LIMIT_RANGE.start(),
                LIMIT_RANGE.end()
            ),
        ));
    }
    Ok(())
}

pub(crate) fn check_min_magnitude(value: f64) -> Result<(), OpsError> {
    if !value.is_finite() || value < 0.0 {
        return Err(OpsError::invalid(
            "min_magnitude",
            format!("must be a non-negative number, got {value}"),
        ));
    }
    Ok(())
}

pub(crate) fn check_magnitude_bounds(min: f64, max: Option<f64>) -> Result<(), OpsError> {
    check_min_magnitude(min)?;
    if let Some(max) = max {
        if !max.is_finite() || max < min {
            return Err(OpsError::invalid(
                "max_magnitude",
                format!("must be a number >= min_magnitude ({min}), got {max}"),
            ));
        }
    }
    Ok(())
}
