use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    GoalMode, GrossUpMethod, PlanError, PlanInputs, SearchConfig, SearchStatus, SimulatorConfig,
    select_best_regime,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliGoalMode {
    Preserve,
    Deplete,
    Target,
}

impl From<CliGoalMode> for GoalMode {
    fn from(value: CliGoalMode) -> Self {
        match value {
            CliGoalMode::Preserve => GoalMode::Preserve,
            CliGoalMode::Deplete => GoalMode::Deplete,
            CliGoalMode::Target => GoalMode::Target,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliGrossUpMethod {
    Approximate,
    Exact,
}

impl From<CliGrossUpMethod> for GrossUpMethod {
    fn from(value: CliGrossUpMethod) -> Self {
        match value {
            CliGrossUpMethod::Approximate => GrossUpMethod::Approximate,
            CliGrossUpMethod::Exact => GrossUpMethod::Exact,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiGoalMode {
    #[serde(alias = "manter")]
    Preserve,
    #[serde(alias = "zerar")]
    Deplete,
    #[serde(alias = "atingir")]
    Target,
}

impl From<ApiGoalMode> for CliGoalMode {
    fn from(value: ApiGoalMode) -> Self {
        match value {
            ApiGoalMode::Preserve => CliGoalMode::Preserve,
            ApiGoalMode::Deplete => CliGoalMode::Deplete,
            ApiGoalMode::Target => CliGoalMode::Target,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiGrossUpMethod {
    #[serde(alias = "approx")]
    Approximate,
    Exact,
}

impl From<ApiGrossUpMethod> for CliGrossUpMethod {
    fn from(value: ApiGrossUpMethod) -> Self {
        match value {
            ApiGrossUpMethod::Approximate => CliGrossUpMethod::Approximate,
            ApiGrossUpMethod::Exact => CliGrossUpMethod::Exact,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PlanPayload {
    current_age: Option<u32>,
    retirement_age: Option<u32>,
    life_expectancy: Option<u32>,

    initial_wealth: Option<f64>,
    desired_monthly_income: Option<f64>,
    other_passive_income: Option<f64>,
    current_monthly_income: Option<f64>,

    annual_return_rate: Option<f64>,
    annual_inflation_rate: Option<f64>,

    goal_mode: Option<ApiGoalMode>,
    target_value: Option<f64>,

    max_contribution: Option<f64>,
    tolerance: Option<f64>,
    max_iterations: Option<u32>,
    age_offset: Option<u32>,
    gross_up: Option<ApiGrossUpMethod>,
}

#[derive(Parser, Debug)]
#[command(
    name = "nestegg",
    about = "Retirement contribution planner: bisection over a deterministic monthly wealth projection, comparing progressive and regressive tax regimes"
)]
struct Cli {
    #[arg(long)]
    current_age: u32,
    #[arg(long)]
    retirement_age: u32,
    #[arg(long, default_value_t = 90)]
    life_expectancy: u32,
    #[arg(long, default_value_t = 0.0)]
    initial_wealth: f64,
    #[arg(long, help = "Desired net monthly income during retirement")]
    desired_monthly_income: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Pension, rent and other passive income; subtracted from the desired income"
    )]
    other_passive_income: f64,
    #[arg(
        long,
        help = "Current monthly income; used only for plausibility warnings"
    )]
    current_monthly_income: Option<f64>,
    #[arg(
        long,
        default_value_t = 5.0,
        help = "Annual real return in percent, e.g. 5"
    )]
    annual_return_rate: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Annual inflation in percent, compounded with the real return"
    )]
    annual_inflation_rate: f64,
    #[arg(long, value_enum, default_value_t = CliGoalMode::Preserve)]
    goal_mode: CliGoalMode,
    #[arg(long, help = "Terminal wealth goal; required when --goal-mode=target")]
    target_value: Option<f64>,
    #[arg(
        long,
        default_value_t = 100_000.0,
        help = "Upper bound of the contribution search"
    )]
    max_contribution: f64,
    #[arg(
        long,
        default_value_t = 1.0,
        help = "Bisection tolerance on the monthly contribution"
    )]
    tolerance: f64,
    #[arg(long, default_value_t = 100)]
    max_iterations: u32,
    #[arg(
        long,
        default_value_t = 0,
        help = "Accumulation boundary convention: 0 retires at the birthday, 1 contributes through the retirement year"
    )]
    age_offset: u32,
    #[arg(long, value_enum, default_value_t = CliGrossUpMethod::Approximate)]
    gross_up: CliGrossUpMethod,
}

#[derive(Debug)]
struct ApiRequest {
    inputs: PlanInputs,
    goal_mode: GoalMode,
    target_value: Option<f64>,
    search: SearchConfig,
    advisory: AdvisoryContext,
}

/// Raw figures the plausibility checks need but the simulator does not.
#[derive(Debug, Clone, Copy)]
struct AdvisoryContext {
    requested_income: f64,
    passive_income: f64,
    current_monthly_income: Option<f64>,
    real_return_rate: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanResponse {
    monthly_contribution: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    regime: Option<&'static str>,
    search_status: SearchStatus,
    goal_mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    wealth_at_retirement: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_tax_paid: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wealth_trajectory: Option<Vec<f64>>,
    warnings: Vec<String>,
    notes: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_request(cli: Cli) -> Result<ApiRequest, PlanError> {
    if !cli.desired_monthly_income.is_finite() || cli.desired_monthly_income < 0.0 {
        return Err(PlanError::invalid(
            "desired_monthly_income",
            "must be a non-negative amount",
        ));
    }

    if !cli.other_passive_income.is_finite() || cli.other_passive_income < 0.0 {
        return Err(PlanError::invalid(
            "other_passive_income",
            "must be a non-negative amount",
        ));
    }

    if let Some(income) = cli.current_monthly_income {
        if !income.is_finite() || income <= 0.0 {
            return Err(PlanError::invalid(
                "current_monthly_income",
                "must be > 0 when provided",
            ));
        }
    }

    if let Some(value) = cli.target_value {
        if !value.is_finite() || value < 0.0 {
            return Err(PlanError::invalid(
                "target_value",
                "must be a non-negative amount",
            ));
        }
    }

    if !cli.annual_inflation_rate.is_finite() || cli.annual_inflation_rate < 0.0 {
        return Err(PlanError::invalid(
            "annual_inflation_rate",
            "must be >= 0 percent",
        ));
    }

    let goal_mode: GoalMode = GoalMode::from(cli.goal_mode);
    if goal_mode == GoalMode::Target && cli.target_value.is_none() {
        return Err(PlanError::MissingTarget);
    }

    let real_return_rate = cli.annual_return_rate / 100.0;
    let inflation_rate = cli.annual_inflation_rate / 100.0;
    let nominal_rate = (1.0 + real_return_rate) * (1.0 + inflation_rate) - 1.0;

    let net_income = (cli.desired_monthly_income - cli.other_passive_income).max(0.0);

    let inputs = PlanInputs {
        current_age: cli.current_age,
        retirement_age: cli.retirement_age,
        life_expectancy: cli.life_expectancy,
        initial_wealth: cli.initial_wealth,
        monthly_contribution: 0.0,
        desired_monthly_income: net_income,
        annual_return_rate: nominal_rate,
        config: SimulatorConfig {
            age_offset: cli.age_offset,
            gross_up: cli.gross_up.into(),
        },
    };
    inputs.validate()?;

    let search = SearchConfig {
        max_contribution: cli.max_contribution,
        tolerance: cli.tolerance,
        max_iterations: cli.max_iterations,
    };
    search.validate()?;

    Ok(ApiRequest {
        inputs,
        goal_mode,
        target_value: cli.target_value,
        search,
        advisory: AdvisoryContext {
            requested_income: cli.desired_monthly_income,
            passive_income: cli.other_passive_income,
            current_monthly_income: cli.current_monthly_income,
            real_return_rate,
        },
    })
}

fn compute_plan(request: &ApiRequest) -> Result<PlanResponse, PlanError> {
    let plan = select_best_regime(
        &request.inputs,
        request.goal_mode,
        request.target_value,
        &request.search,
    )?;

    let mut warnings = Vec::new();
    let mut notes = Vec::new();

    match plan.status {
        SearchStatus::Solved => {}
        SearchStatus::Infeasible => warnings.push(
            "No contribution up to the search cap reaches the goal; lower the income target, \
             extend the accumulation window, or raise the cap."
                .to_string(),
        ),
        SearchStatus::IterationLimit => warnings.push(
            "The contribution search hit its iteration cap before converging; treat the goal \
             as unreachable and narrow the parameter ranges."
                .to_string(),
        ),
    }

    plausibility_checks(request, plan.contribution, &mut warnings, &mut notes);

    let (wealth_at_retirement, total_tax_paid, wealth_trajectory) = match plan.projection {
        Some(projection) => (
            Some(projection.wealth_at_retirement),
            Some(projection.total_tax_paid),
            Some(projection.wealth_by_month),
        ),
        None => (None, None, None),
    };

    Ok(PlanResponse {
        monthly_contribution: plan.contribution,
        regime: plan.regime.map(|r| r.label()),
        search_status: plan.status,
        goal_mode: request.goal_mode.label(),
        wealth_at_retirement,
        total_tax_paid,
        wealth_trajectory,
        warnings,
        notes,
    })
}

/// Sanity checks surfaced alongside the result, never as failures.
fn plausibility_checks(
    request: &ApiRequest,
    contribution: Option<f64>,
    warnings: &mut Vec<String>,
    notes: &mut Vec<String>,
) {
    let inputs = &request.inputs;
    let advisory = &request.advisory;
    let accumulation_years = inputs.retirement_age - inputs.current_age;

    if advisory.real_return_rate > 0.10 {
        warnings.push("High real return assumption; double-check the rate.".to_string());
    }
    if accumulation_years < 5 {
        warnings.push("Very short accumulation window before retirement.".to_string());
    }
    if accumulation_years > 50 {
        warnings.push("Very long accumulation window before retirement.".to_string());
    }

    if let Some(current_income) = advisory.current_monthly_income {
        if advisory.requested_income > 10.0 * current_income {
            warnings.push("Desired income far exceeds current income.".to_string());
        }
        if let Some(contribution) = contribution {
            if contribution > current_income {
                warnings.push(
                    "Required contribution exceeds the current income; the plan is not \
                     affordable as stated."
                        .to_string(),
                );
            } else if contribution > 0.5 * current_income {
                warnings
                    .push("Required contribution exceeds half of the current income.".to_string());
            }
        }
    }

    if let Some(contribution) = contribution {
        if contribution < 10.0 {
            notes.push(
                "Required contribution is negligible; existing savings nearly cover the goal."
                    .to_string(),
            );
        }
        if contribution > 0.0
            && inputs.initial_wealth > contribution * inputs.months_to_retirement() as f64
        {
            notes.push(
                "Initial savings already exceed the total of all planned contributions."
                    .to_string(),
            );
        }
    }

    if inputs.desired_monthly_income == 0.0 {
        if advisory.passive_income >= advisory.requested_income && advisory.passive_income > 0.0 {
            notes.push(
                "Passive income already covers the desired income; nothing to fund.".to_string(),
            );
        } else {
            notes.push("Desired income is zero; nothing to fund.".to_string());
        }
    }
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/api/plan", get(plan_get_handler).post(plan_post_handler))
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    println!("nestegg HTTP API listening on http://{addr}");
    println!("Local access: http://127.0.0.1:{port}/api/plan");

    axum::serve(listener, app).await
}

pub fn run_cli_plan(args: &[String]) -> Result<(), String> {
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;
    let request = build_request(cli).map_err(|e| e.to_string())?;
    let response = compute_plan(&request).map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(&response).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn plan_get_handler(Query(payload): Query<PlanPayload>) -> Response {
    plan_handler_impl(payload).await
}

async fn plan_post_handler(Json(payload): Json<PlanPayload>) -> Response {
    plan_handler_impl(payload).await
}

async fn plan_handler_impl(payload: PlanPayload) -> Response {
    let request = match api_request_from_payload(payload) {
        Ok(request) => request,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    match compute_plan(&request) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(e) => error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn api_request_from_json(json: &str) -> Result<ApiRequest, String> {
    let payload = serde_json::from_str::<PlanPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    api_request_from_payload(payload).map_err(|e| e.to_string())
}

fn api_request_from_payload(payload: PlanPayload) -> Result<ApiRequest, PlanError> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.current_age {
        cli.current_age = v;
    }
    if let Some(v) = payload.retirement_age {
        cli.retirement_age = v;
    }
    if let Some(v) = payload.life_expectancy {
        cli.life_expectancy = v;
    }

    if let Some(v) = payload.initial_wealth {
        cli.initial_wealth = v;
    }
    if let Some(v) = payload.desired_monthly_income {
        cli.desired_monthly_income = v;
    }
    if let Some(v) = payload.other_passive_income {
        cli.other_passive_income = v;
    }
    if let Some(v) = payload.current_monthly_income {
        cli.current_monthly_income = Some(v);
    }

    if let Some(v) = payload.annual_return_rate {
        cli.annual_return_rate = v;
    }
    if let Some(v) = payload.annual_inflation_rate {
        cli.annual_inflation_rate = v;
    }

    if let Some(v) = payload.goal_mode {
        cli.goal_mode = v.into();
    }
    if let Some(v) = payload.target_value {
        cli.target_value = Some(v);
    }

    if let Some(v) = payload.max_contribution {
        cli.max_contribution = v;
    }
    if let Some(v) = payload.tolerance {
        cli.tolerance = v;
    }
    if let Some(v) = payload.max_iterations {
        cli.max_iterations = v;
    }
    if let Some(v) = payload.age_offset {
        cli.age_offset = v;
    }
    if let Some(v) = payload.gross_up {
        cli.gross_up = v.into();
    }

    build_request(cli)
}

fn default_cli_for_api() -> Cli {
    Cli {
        current_age: 30,
        retirement_age: 65,
        life_expectancy: 90,
        initial_wealth: 0.0,
        desired_monthly_income: 5_000.0,
        other_passive_income: 0.0,
        current_monthly_income: None,
        annual_return_rate: 5.0,
        annual_inflation_rate: 0.0,
        goal_mode: CliGoalMode::Preserve,
        target_value: None,
        max_contribution: 100_000.0,
        tolerance: 1.0,
        max_iterations: 100,
        age_offset: 0,
        gross_up: CliGrossUpMethod::Approximate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn sample_cli() -> Cli {
        default_cli_for_api()
    }

    #[test]
    fn build_request_converts_percent_rates_and_composes_inflation() {
        let mut cli = sample_cli();
        cli.annual_return_rate = 4.0;
        cli.annual_inflation_rate = 5.0;

        let request = build_request(cli).expect("valid request");
        assert_approx(request.inputs.annual_return_rate, 1.04 * 1.05 - 1.0);
        assert_approx(request.advisory.real_return_rate, 0.04);
    }

    #[test]
    fn build_request_subtracts_passive_income_with_a_floor_at_zero() {
        let mut cli = sample_cli();
        cli.desired_monthly_income = 5_000.0;
        cli.other_passive_income = 1_500.0;
        let request = build_request(cli).expect("valid request");
        assert_approx(request.inputs.desired_monthly_income, 3_500.0);

        let mut cli = sample_cli();
        cli.desired_monthly_income = 1_000.0;
        cli.other_passive_income = 2_000.0;
        let request = build_request(cli).expect("valid request");
        assert_approx(request.inputs.desired_monthly_income, 0.0);
    }

    #[test]
    fn build_request_rejects_bad_age_ordering() {
        let mut cli = sample_cli();
        cli.current_age = 65;
        cli.retirement_age = 65;
        let err = build_request(cli).expect_err("must reject");
        assert!(err.to_string().contains("current_age"));
    }

    #[test]
    fn build_request_rejects_negative_amounts() {
        let mut cli = sample_cli();
        cli.initial_wealth = -1.0;
        assert!(build_request(cli).is_err());

        let mut cli = sample_cli();
        cli.other_passive_income = -1.0;
        assert!(build_request(cli).is_err());
    }

    #[test]
    fn build_request_rejects_out_of_range_combined_rate() {
        let mut cli = sample_cli();
        cli.annual_return_rate = 40.0;
        cli.annual_inflation_rate = 10.0;
        let err = build_request(cli).expect_err("must reject 54% nominal rate");
        assert!(matches!(err, PlanError::InvalidRate { .. }));
    }

    #[test]
    fn build_request_requires_a_target_value_in_target_mode() {
        let mut cli = sample_cli();
        cli.goal_mode = CliGoalMode::Target;
        cli.target_value = None;
        let err = build_request(cli).expect_err("must reject");
        assert_eq!(err, PlanError::MissingTarget);
    }

    #[test]
    fn build_request_rejects_degenerate_search_settings() {
        let mut cli = sample_cli();
        cli.tolerance = 0.0;
        assert!(build_request(cli).is_err());

        let mut cli = sample_cli();
        cli.max_iterations = 0;
        assert!(build_request(cli).is_err());
    }

    #[test]
    fn api_request_from_json_parses_web_keys() {
        let json = r#"{
          "currentAge": 35,
          "retirementAge": 60,
          "lifeExpectancy": 85,
          "initialWealth": 80000,
          "desiredMonthlyIncome": 6000,
          "otherPassiveIncome": 1000,
          "currentMonthlyIncome": 12000,
          "annualReturnRate": 4.5,
          "annualInflationRate": 3.0,
          "goalMode": "deplete",
          "grossUp": "exact",
          "maxContribution": 50000,
          "tolerance": 0.5,
          "ageOffset": 1
        }"#;
        let request = api_request_from_json(json).expect("json should parse");
        let inputs = &request.inputs;

        assert_eq!(inputs.current_age, 35);
        assert_eq!(inputs.retirement_age, 60);
        assert_eq!(inputs.life_expectancy, 85);
        assert_approx(inputs.initial_wealth, 80_000.0);
        assert_approx(inputs.desired_monthly_income, 5_000.0);
        assert_approx(inputs.annual_return_rate, 1.045 * 1.03 - 1.0);
        assert_eq!(request.goal_mode, GoalMode::Deplete);
        assert_eq!(inputs.config.gross_up, GrossUpMethod::Exact);
        assert_eq!(inputs.config.age_offset, 1);
        assert_approx(request.search.max_contribution, 50_000.0);
        assert_approx(request.search.tolerance, 0.5);
        assert_eq!(request.advisory.current_monthly_income, Some(12_000.0));
    }

    #[test]
    fn api_request_from_json_accepts_legacy_mode_aliases() {
        let request = api_request_from_json(r#"{"goalMode": "zerar"}"#).expect("alias parses");
        assert_eq!(request.goal_mode, GoalMode::Deplete);

        let request = api_request_from_json(r#"{"goalMode": "manter"}"#).expect("alias parses");
        assert_eq!(request.goal_mode, GoalMode::Preserve);
    }

    #[test]
    fn api_request_from_json_rejects_unknown_goal_mode() {
        let err = api_request_from_json(r#"{"goalMode": "forever"}"#).expect_err("must reject");
        assert!(err.contains("Invalid API JSON payload"));
    }

    #[test]
    fn plan_response_serialization_contains_expected_fields() {
        let mut cli = sample_cli();
        cli.initial_wealth = 50_000.0;
        cli.desired_monthly_income = 2_000.0;

        let request = build_request(cli).expect("valid request");
        let response = compute_plan(&request).expect("must plan");
        assert_eq!(response.search_status, SearchStatus::Solved);

        let json = serde_json::to_string(&response).expect("response should serialize");
        assert!(json.contains("\"monthlyContribution\""));
        assert!(json.contains("\"regime\""));
        assert!(json.contains("\"searchStatus\":\"solved\""));
        assert!(json.contains("\"goalMode\":\"preserve\""));
        assert!(json.contains("\"wealthAtRetirement\""));
        assert!(json.contains("\"totalTaxPaid\""));
        assert!(json.contains("\"wealthTrajectory\""));
        assert!(json.contains("\"warnings\""));
        assert!(json.contains("\"notes\""));
    }

    #[test]
    fn infeasible_plan_serializes_a_null_contribution_and_a_warning() {
        let mut cli = sample_cli();
        cli.current_age = 64;
        cli.retirement_age = 65;
        cli.life_expectancy = 90;
        cli.initial_wealth = 50_000.0;
        cli.desired_monthly_income = 15_000.0;
        cli.goal_mode = CliGoalMode::Deplete;

        let request = build_request(cli).expect("valid request");
        let response = compute_plan(&request).expect("must plan");

        assert_eq!(response.monthly_contribution, None);
        assert_eq!(response.search_status, SearchStatus::Infeasible);
        assert!(!response.warnings.is_empty());

        let json = serde_json::to_string(&response).expect("response should serialize");
        assert!(json.contains("\"monthlyContribution\":null"));
        assert!(!json.contains("\"wealthTrajectory\""));
        assert!(!json.contains("\"regime\""));
    }

    #[test]
    fn short_accumulation_window_produces_a_plausibility_warning() {
        let mut cli = sample_cli();
        cli.current_age = 62;
        cli.retirement_age = 65;
        cli.initial_wealth = 1_000_000.0;
        cli.desired_monthly_income = 2_000.0;
        cli.goal_mode = CliGoalMode::Deplete;

        let request = build_request(cli).expect("valid request");
        let response = compute_plan(&request).expect("must plan");
        assert!(
            response
                .warnings
                .iter()
                .any(|w| w.contains("short accumulation window"))
        );
    }

    #[test]
    fn unaffordable_contribution_produces_an_income_warning() {
        let mut cli = sample_cli();
        cli.current_monthly_income = Some(2_000.0);
        cli.desired_monthly_income = 10_000.0;
        cli.goal_mode = CliGoalMode::Preserve;

        let request = build_request(cli).expect("valid request");
        let response = compute_plan(&request).expect("must plan");
        let contribution = response
            .monthly_contribution
            .expect("goal is reachable over 35 years");
        assert!(contribution > 2_000.0, "scenario should be expensive");
        assert!(
            response
                .warnings
                .iter()
                .any(|w| w.contains("exceeds the current income"))
        );
    }

    #[test]
    fn covered_income_goal_notes_that_there_is_nothing_to_fund() {
        let mut cli = sample_cli();
        cli.desired_monthly_income = 1_000.0;
        cli.other_passive_income = 1_500.0;
        cli.goal_mode = CliGoalMode::Deplete;
        cli.initial_wealth = 10_000.0;

        let request = build_request(cli).expect("valid request");
        let response = compute_plan(&request).expect("must plan");
        assert_eq!(response.monthly_contribution, Some(0.0));
        assert!(
            response
                .notes
                .iter()
                .any(|n| n.contains("nothing to fund"))
        );
    }
}
