use thiserror::Error;

pub type PwResult<T> = Result<T, PwError>;

#[derive(Error, Debug)]
pub enum PwError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
