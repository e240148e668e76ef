mod engine;
mod error;
mod rates;
mod solver;
mod tax;
mod types;

pub use engine::simulate;
pub use error::PlanError;
pub use rates::{MAX_ANNUAL_RATE, monthly_rate};
pub use solver::{
    ContributionSearch, RegimePlan, SearchConfig, SearchStatus, find_contribution, resolve_target,
    select_best_regime,
};
pub use tax::{
    Bracket, GrossWithdrawal, HoldingBand, PROGRESSIVE_MONTHLY_2024, REGRESSIVE_SCHEDULE,
    WithdrawalContext, gross_up, progressive_tax, regressive_rate,
};
pub use types::{GoalMode, GrossUpMethod, PlanInputs, Projection, SimulatorConfig, TaxRegime};
