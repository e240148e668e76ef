use serde::Serialize;

use super::engine::simulate;
use super::error::PlanError;
use super::types::{GoalMode, PlanInputs, Projection, TaxRegime};

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_contribution: f64,
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_contribution: 100_000.0,
            tolerance: 1.0,
            max_iterations: 100,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), PlanError> {
        if !self.max_contribution.is_finite() || self.max_contribution <= 0.0 {
            return Err(PlanError::invalid("max_contribution", "must be > 0"));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(PlanError::invalid("tolerance", "must be > 0"));
        }
        if self.max_iterations == 0 {
            return Err(PlanError::invalid("max_iterations", "must be > 0"));
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchStatus {
    /// The bisection met tolerance and the goal is reachable.
    Solved,
    /// Even the contribution cap leaves final wealth short of the goal.
    Infeasible,
    /// The iteration cap was hit before tolerance was met; the result is
    /// reported as infeasible with low confidence.
    IterationLimit,
}

#[derive(Debug, Clone, Copy)]
pub struct ContributionSearch {
    pub contribution: Option<f64>,
    pub status: SearchStatus,
    pub iterations: u32,
}

/// Terminal-wealth target for the chosen objective.
pub fn resolve_target(
    mode: GoalMode,
    wealth_at_retirement: f64,
    target_value: Option<f64>,
) -> Result<f64, PlanError> {
    match mode {
        GoalMode::Preserve => Ok(wealth_at_retirement),
        GoalMode::Deplete => Ok(0.0),
        GoalMode::Target => target_value.ok_or(PlanError::MissingTarget),
    }
}

/// Bisection over the monthly contribution in `[0, max_contribution]`.
///
/// Relies on final wealth being non-decreasing in the contribution. The
/// target is re-resolved per candidate because the preserve objective
/// tracks wealth at retirement, which itself moves with the
/// contribution. `monthly_contribution` on `inputs` is ignored.
pub fn find_contribution(
    inputs: &PlanInputs,
    regime: TaxRegime,
    mode: GoalMode,
    target_value: Option<f64>,
    config: &SearchConfig,
) -> Result<ContributionSearch, PlanError> {
    config.validate()?;
    if mode == GoalMode::Target && target_value.is_none() {
        return Err(PlanError::MissingTarget);
    }

    let shortfall = |contribution: f64| -> Result<f64, PlanError> {
        let mut candidate = inputs.clone();
        candidate.monthly_contribution = contribution;
        let projection = simulate(&candidate, regime)?;
        let target = resolve_target(mode, projection.wealth_at_retirement, target_value)?;
        Ok(projection.final_wealth - target)
    };

    // Existing savings may already cover the goal; answer 0 outright
    // instead of letting bisection creep toward it.
    if shortfall(0.0)? >= -config.tolerance {
        return Ok(ContributionSearch {
            contribution: Some(0.0),
            status: SearchStatus::Solved,
            iterations: 0,
        });
    }

    let mut lo = 0.0_f64;
    let mut hi = config.max_contribution;
    let mut iterations = 0;
    while hi - lo > config.tolerance && iterations < config.max_iterations {
        iterations += 1;
        let mid = (lo + hi) / 2.0;
        if shortfall(mid)? > 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    if shortfall(hi)? < -config.tolerance {
        return Ok(ContributionSearch {
            contribution: None,
            status: SearchStatus::Infeasible,
            iterations,
        });
    }

    if hi - lo > config.tolerance {
        return Ok(ContributionSearch {
            contribution: None,
            status: SearchStatus::IterationLimit,
            iterations,
        });
    }

    Ok(ContributionSearch {
        contribution: Some(round_cents((lo + hi) / 2.0)),
        status: SearchStatus::Solved,
        iterations,
    })
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone)]
pub struct RegimePlan {
    pub contribution: Option<f64>,
    pub regime: Option<TaxRegime>,
    pub status: SearchStatus,
    pub projection: Option<Projection>,
}

/// Runs the contribution search under both tax regimes and keeps the
/// cheaper one; ties go to the progressive table. The returned
/// projection is re-simulated at the winning contribution.
pub fn select_best_regime(
    inputs: &PlanInputs,
    mode: GoalMode,
    target_value: Option<f64>,
    config: &SearchConfig,
) -> Result<RegimePlan, PlanError> {
    let progressive = find_contribution(inputs, TaxRegime::Progressive, mode, target_value, config)?;
    let regressive = find_contribution(inputs, TaxRegime::Regressive, mode, target_value, config)?;

    let winner = match (progressive.contribution, regressive.contribution) {
        (Some(p), Some(r)) if p <= r => Some((p, TaxRegime::Progressive)),
        (_, Some(r)) => Some((r, TaxRegime::Regressive)),
        (Some(p), None) => Some((p, TaxRegime::Progressive)),
        (None, None) => None,
    };

    match winner {
        Some((contribution, regime)) => {
            let mut chosen = inputs.clone();
            chosen.monthly_contribution = contribution;
            let projection = simulate(&chosen, regime)?;
            Ok(RegimePlan {
                contribution: Some(contribution),
                regime: Some(regime),
                status: SearchStatus::Solved,
                projection: Some(projection),
            })
        }
        None => {
            let status = if progressive.status == SearchStatus::IterationLimit
                || regressive.status == SearchStatus::IterationLimit
            {
                SearchStatus::IterationLimit
            } else {
                SearchStatus::Infeasible
            };
            Ok(RegimePlan {
                contribution: None,
                regime: None,
                status,
                projection: None,
            })
        }
    }
}
