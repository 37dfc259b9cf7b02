use thiserror::Error;

#[derive(Error, Debug)]
pub enum PremiumError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid tier table: {reason}")]
    InvalidTierTable { reason: String },

    #[error("Invalid rate '{name}': {value}")]
    InvalidRate { name: String, value: f64 },

    #[error("Employee '{id}' not found")]
    EmployeeNotFound { id: String },

    #[error("Employee id '{id}' appears more than once on the roster")]
    DuplicateEmployee { id: String },

    #[error("Cannot remove the last employee on the roster")]
    LastEmployee,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type PremiumResult<T> = Result<T, PremiumError>;
