use thiserror::Error;

pub type AfResult<T> = Result<T, AfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative value for {what}: {value}")]
    Negative { what: &'static str, value: f64 },
}
