use serde::Serialize;

use super::error::PlanError;
use super::rates::monthly_rate;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TaxRegime {
    Progressive,
    Regressive,
}

impl TaxRegime {
    pub fn label(self) -> &'static str {
        match self {
            TaxRegime::Progressive => "progressive",
            TaxRegime::Regressive => "regressive",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GoalMode {
    /// Final wealth should match wealth at retirement: live off growth only.
    Preserve,
    /// Final wealth should reach exactly zero at life expectancy.
    Deplete,
    /// Final wealth should reach a caller-supplied amount.
    Target,
}

impl GoalMode {
    pub fn label(self) -> &'static str {
        match self {
            GoalMode::Preserve => "preserve",
            GoalMode::Deplete => "deplete",
            GoalMode::Target => "target",
        }
    }
}

/// How a desired net income is converted into the pre-tax withdrawal.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GrossUpMethod {
    /// Tax rate looked up from the net amount, `gross = net / (1 - rate)`.
    /// This is the reference behavior; the lookup on net instead of gross
    /// makes it an approximation for the progressive table.
    Approximate,
    /// Closed-form inversion of the progressive schedule so that
    /// `gross - tax(gross) == net` holds exactly.
    Exact,
}

/// The source family of simulators disagrees on two conventions; this
/// struct pins them down per run instead of multiplying variants.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SimulatorConfig {
    /// Years added to the accumulation span: 0 retires at the birthday,
    /// 1 contributes through the retirement year as well.
    pub age_offset: u32,
    pub gross_up: GrossUpMethod,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            age_offset: 0,
            gross_up: GrossUpMethod::Approximate,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlanInputs {
    pub current_age: u32,
    pub retirement_age: u32,
    pub life_expectancy: u32,
    pub initial_wealth: f64,
    pub monthly_contribution: f64,
    /// Net income required from the portfolio each month of decumulation,
    /// after pensions and other passive income.
    pub desired_monthly_income: f64,
    pub annual_return_rate: f64,
    pub config: SimulatorConfig,
}

impl PlanInputs {
    pub fn months_total(&self) -> usize {
        ((self.life_expectancy - self.current_age) * 12) as usize
    }

    pub fn months_to_retirement(&self) -> usize {
        ((self.retirement_age - self.current_age + self.config.age_offset) * 12) as usize
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        if self.current_age >= self.retirement_age {
            return Err(PlanError::invalid(
                "current_age",
                "must be less than retirement_age",
            ));
        }
        if self.retirement_age >= self.life_expectancy {
            return Err(PlanError::invalid(
                "retirement_age",
                "must be less than life_expectancy",
            ));
        }
        for (field, value) in [
            ("initial_wealth", self.initial_wealth),
            ("monthly_contribution", self.monthly_contribution),
            ("desired_monthly_income", self.desired_monthly_income),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlanError::invalid(field, "must be a non-negative amount"));
            }
        }
        if self.config.age_offset > 1 {
            return Err(PlanError::invalid("age_offset", "must be 0 or 1"));
        }
        monthly_rate(self.annual_return_rate)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub wealth_by_month: Vec<f64>,
    pub wealth_at_retirement: f64,
    pub final_wealth: f64,
    pub total_tax_paid: f64,
}
