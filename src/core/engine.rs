use super::error::PlanError;
use super::rates::monthly_rate;
use super::tax::{WithdrawalContext, gross_up};
use super::types::{PlanInputs, Projection, TaxRegime};

/// Runs the month-by-month wealth trajectory: growth plus contributions
/// until retirement, growth minus grossed-up withdrawals afterwards.
///
/// Wealth is deliberately not clamped at zero; a negative tail is the
/// signal the contribution search uses to detect an unreachable goal.
pub fn simulate(inputs: &PlanInputs, regime: TaxRegime) -> Result<Projection, PlanError> {
    inputs.validate()?;
    let rate = monthly_rate(inputs.annual_return_rate)?;

    let months_total = inputs.months_total();
    let months_to_retirement = inputs.months_to_retirement().min(months_total);

    let mut wealth = inputs.initial_wealth;
    let mut wealth_at_retirement = inputs.initial_wealth;
    let mut total_tax_paid = 0.0;
    let mut wealth_by_month = Vec::with_capacity(months_total);

    for month in 0..months_total {
        wealth *= 1.0 + rate;

        if month < months_to_retirement {
            wealth += inputs.monthly_contribution;
        } else {
            let ctx = WithdrawalContext {
                months_since_start: month as u32,
            };
            let withdrawal = gross_up(
                regime,
                inputs.desired_monthly_income,
                ctx,
                inputs.config.gross_up,
            );
            wealth -= withdrawal.gross;
            total_tax_paid += withdrawal.tax;
        }

        wealth_by_month.push(wealth);

        if month + 1 == months_to_retirement {
            wealth_at_retirement = wealth;
        }
    }

    Ok(Projection {
        wealth_by_month,
        wealth_at_retirement,
        final_wealth: wealth,
        total_tax_paid,
    })
}
