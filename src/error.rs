use thiserror::Error;

#[derive(Debug, Error)]
pub enum WelldayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Logging setup failed: {0}")]
    Telemetry(#[from] crate::telemetry::TelemetryError),

    #[error("No meals logged")]
    NoMeals,

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("A recipe named '{0}' already exists")]
    DuplicateRecipe(String),
}

pub type Result<T> = std::result::Result<T, WelldayError>;
