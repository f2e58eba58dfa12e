use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid padding `{0}`: expected a pixel number or a percentage such as `15%`")]
    InvalidPadding(String),

    #[error("invalid color `{0}`")]
    InvalidColor(String),
}
