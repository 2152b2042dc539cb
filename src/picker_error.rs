use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickerError {
    #[error("Invalid target '{0}'. Use 60, 80..120 or 85%140.")]
    InvalidTarget(String),
    #[error("Unknown plate family '{0}'.")]
    UnknownFamily(String),
    #[error("Could not read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}
