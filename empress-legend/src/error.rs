use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LegendError {
    #[error("{0}")]
    InvalidInput(String),
}
