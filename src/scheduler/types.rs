use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid date range: end must be strictly after start")]
    InvalidRange,
    #[error("empty staff pool: {0}")]
    EmptyStaffPool(&'static str),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
