use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("malformed results row {line}: {reason}")]
    InvalidRow { line: u64, reason: String },

    #[error("PNG encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("chart is too small: {width}x{height} (minimum {min_width}x{min_height})")]
    ChartTooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },

    #[error("chart is too large: {width}x{height} (maximum {max_width}x{max_height})")]
    ChartTooLarge {
        width: u32,
        height: u32,
        max_width: u32,
        max_height: u32,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
