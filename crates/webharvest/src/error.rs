use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarvestError>;

#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("session start failed: {0}")]
    SessionStart(String),

    #[error("navigation failed: {url}")]
    Navigation {
        url: String,
        #[source]
        source: thirtyfour::error::WebDriverError,
    },

    #[error("javascript evaluation failed: {0}")]
    JsEval(String),

    #[error("unknown {param} '{given}': valid levels are DEBUG, INFO, WARNING, ERROR, CRITICAL")]
    InvalidLogLevel { param: &'static str, given: String },

    #[error("logging initialization failed: {0}")]
    LoggingInit(String),

    #[error("not a tabular value: {0}")]
    NotTabular(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
