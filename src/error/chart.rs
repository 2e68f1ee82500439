use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to draw chart '{id}': {message}")]
    Draw { id: String, message: String },
    #[error("Chart '{id}' has {labels} labels but {values} values.")]
    Misaligned {
        id: String,
        labels: usize,
        values: usize,
    },
}
