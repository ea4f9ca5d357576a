use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedwatchError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    // Feed errors
    #[error("Feed fetch failed: {0}")]
    Fetch(reqwest::Error),

    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    // Storage errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    // Notification errors
    #[error("Email send failed: {0}")]
    EmailSend(#[from] lettre::transport::smtp::Error),

    #[error("Email message error: {0}")]
    EmailMessage(#[from] lettre::error::Error),

    #[error("Invalid mail address: {0}")]
    InvalidAddress(#[from] lettre::address::AddressError),

    #[error("Telegram send failed: {0}")]
    TelegramSend(String),

    #[error("Telegram TLS certificate error: {0}")]
    Certificate(String),

    #[error("Run finished with {0} failed notifications")]
    RunFailed(usize),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FeedwatchResult<T> = Result<T, FeedwatchError>;
