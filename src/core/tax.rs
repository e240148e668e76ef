use super::types::{GrossUpMethod, TaxRegime};

/// One row of a marginal-rate table: amounts up to `ceiling` pay
/// `rate * amount - deduction`, floored at zero.
#[derive(Debug, Clone, Copy)]
pub struct Bracket {
    pub ceiling: f64,
    pub rate: f64,
    pub deduction: f64,
}

/// Monthly progressive income-tax table, 2024 schedule.
pub const PROGRESSIVE_MONTHLY_2024: [Bracket; 5] = [
    Bracket {
        ceiling: 2_112.0,
        rate: 0.0,
        deduction: 0.0,
    },
    Bracket {
        ceiling: 2_826.65,
        rate: 0.075,
        deduction: 158.40,
    },
    Bracket {
        ceiling: 3_751.05,
        rate: 0.15,
        deduction: 370.40,
    },
    Bracket {
        ceiling: 4_664.68,
        rate: 0.225,
        deduction: 651.73,
    },
    Bracket {
        ceiling: f64::INFINITY,
        rate: 0.275,
        deduction: 884.96,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct HoldingBand {
    pub max_months: u32,
    pub rate: f64,
}

/// Regressive schedule: the rate decays with holding time, bottoming out
/// at 10% after ten years.
pub const REGRESSIVE_SCHEDULE: [HoldingBand; 5] = [
    HoldingBand {
        max_months: 24,
        rate: 0.35,
    },
    HoldingBand {
        max_months: 48,
        rate: 0.30,
    },
    HoldingBand {
        max_months: 72,
        rate: 0.25,
    },
    HoldingBand {
        max_months: 96,
        rate: 0.20,
    },
    HoldingBand {
        max_months: 120,
        rate: 0.15,
    },
];

pub const REGRESSIVE_FLOOR_RATE: f64 = 0.10;

/// Holding context for time-dependent tax. The regressive rate is keyed
/// on months elapsed since the plan started, a FIFO proxy for the age of
/// the money being withdrawn.
#[derive(Debug, Clone, Copy)]
pub struct WithdrawalContext {
    pub months_since_start: u32,
}

pub fn progressive_tax(amount: f64) -> f64 {
    for bracket in &PROGRESSIVE_MONTHLY_2024 {
        if amount <= bracket.ceiling {
            return (amount * bracket.rate - bracket.deduction).max(0.0);
        }
    }
    0.0
}

pub fn regressive_rate(months_held: u32) -> f64 {
    for band in &REGRESSIVE_SCHEDULE {
        if months_held <= band.max_months {
            return band.rate;
        }
    }
    REGRESSIVE_FLOOR_RATE
}

impl TaxRegime {
    pub fn tax_on_withdrawal(self, gross: f64, ctx: WithdrawalContext) -> f64 {
        match self {
            TaxRegime::Progressive => progressive_tax(gross),
            TaxRegime::Regressive => gross * regressive_rate(ctx.months_since_start),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GrossWithdrawal {
    pub gross: f64,
    pub tax: f64,
}

/// Converts a desired net withdrawal into the pre-tax amount to take out.
///
/// The regressive rate does not depend on the amount, so
/// `net / (1 - rate)` is exact there under either method. For the
/// progressive table, `Approximate` looks the rate up from the net
/// amount, while `Exact` inverts the piecewise-linear schedule.
pub fn gross_up(
    regime: TaxRegime,
    net: f64,
    ctx: WithdrawalContext,
    method: GrossUpMethod,
) -> GrossWithdrawal {
    if net <= 0.0 {
        return GrossWithdrawal {
            gross: 0.0,
            tax: 0.0,
        };
    }
    let gross = match (regime, method) {
        (TaxRegime::Regressive, _) => net / (1.0 - regressive_rate(ctx.months_since_start)),
        (TaxRegime::Progressive, GrossUpMethod::Approximate) => {
            let effective_rate = progressive_tax(net) / net;
            net / (1.0 - effective_rate)
        }
        (TaxRegime::Progressive, GrossUpMethod::Exact) => invert_progressive(net),
    };
    GrossWithdrawal {
        gross,
        tax: gross - net,
    }
}

/// Solves `gross - progressive_tax(gross) == net`. Within each bracket
/// the net amount is `gross * (1 - rate) + deduction`, so the inverse is
/// linear; the deductions make the schedule continuous across ceilings.
fn invert_progressive(net: f64) -> f64 {
    for bracket in &PROGRESSIVE_MONTHLY_2024 {
        let gross = (net - bracket.deduction) / (1.0 - bracket.rate);
        if gross <= bracket.ceiling {
            return gross.max(net);
        }
    }
    net
}
