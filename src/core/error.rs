use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("invalid {field}: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    #[error("annual return rate {rate} is outside the supported range (0, 0.5]")]
    InvalidRate { rate: f64 },

    #[error("goal mode 'target' requires a target value")]
    MissingTarget,
}

impl PlanError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        PlanError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}
