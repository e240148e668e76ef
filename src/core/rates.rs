use super::error::PlanError;

/// Annual real rates above 50% are almost certainly a data-entry mistake
/// (e.g. "5" where "0.05" was meant), so they are rejected outright.
pub const MAX_ANNUAL_RATE: f64 = 0.5;

/// Converts an annual compounding rate to its equivalent monthly rate.
pub fn monthly_rate(annual_rate: f64) -> Result<f64, PlanError> {
    if !annual_rate.is_finite() || annual_rate <= 0.0 || annual_rate > MAX_ANNUAL_RATE {
        return Err(PlanError::InvalidRate { rate: annual_rate });
    }
    Ok((1.0 + annual_rate).powf(1.0 / 12.0) - 1.0)
}
