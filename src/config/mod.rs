use crate::errors::{FeedwatchError, FeedwatchResult};

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub api_url: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: String,
    pub feed_title: String,
    pub db_path: String,
    pub email: Option<EmailConfig>,
    pub telegram: Option<TelegramConfig>,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    fn require(name: &str) -> FeedwatchResult<String> {
        std::env::var(name).map_err(|_| FeedwatchError::MissingEnvVar(name.to_string()))
    }

    pub fn from_env() -> FeedwatchResult<Self> {
        let exe_dir = Self::exe_dir();

        // Try to load .env from executable's directory first
        if let Some(ref dir) = exe_dir {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let feed_url = Self::require("FEEDWATCH_FEED_URL")?;
        url::Url::parse(&feed_url).map_err(|e| FeedwatchError::InvalidUrl(e.to_string()))?;

        let feed_title =
            std::env::var("FEEDWATCH_FEED_TITLE").unwrap_or_else(|_| "Feed".to_string());

        // Default db_path is relative to executable directory
        let db_path = std::env::var("FEEDWATCH_DB_PATH").unwrap_or_else(|_| {
            exe_dir
                .map(|d| d.join("feedwatch.db").to_string_lossy().into_owned())
                .unwrap_or_else(|| "./feedwatch.db".to_string())
        });

        // The email channel is enabled by setting FEEDWATCH_SMTP_HOST; the
        // remaining mail variables are then required.
        let email = match std::env::var("FEEDWATCH_SMTP_HOST") {
            Ok(smtp_host) => {
                let smtp_port = match std::env::var("FEEDWATCH_SMTP_PORT") {
                    Ok(v) => v.parse::<u16>().map_err(|_| {
                        FeedwatchError::Config(format!("Invalid FEEDWATCH_SMTP_PORT: {}", v))
                    })?,
                    Err(_) => 587,
                };

                Some(EmailConfig {
                    smtp_host,
                    smtp_port,
                    username: Self::require("FEEDWATCH_SMTP_USERNAME")?,
                    password: Self::require("FEEDWATCH_SMTP_PASSWORD")?,
                    from: Self::require("FEEDWATCH_MAIL_FROM")?,
                    to: Self::require("FEEDWATCH_MAIL_TO")?,
                })
            }
            Err(_) => None,
        };

        // Likewise the Telegram channel is enabled by the bot token.
        let telegram = match std::env::var("FEEDWATCH_TELEGRAM_BOT_TOKEN") {
            Ok(bot_token) => Some(TelegramConfig {
                bot_token,
                chat_id: Self::require("FEEDWATCH_TELEGRAM_CHAT_ID")?,
                api_url: std::env::var("FEEDWATCH_TELEGRAM_API_URL")
                    .unwrap_or_else(|_| "https://api.telegram.org".to_string()),
            }),
            Err(_) => None,
        };

        Ok(Self {
            feed_url,
            feed_title,
            db_path,
            email,
            telegram,
        })
    }
}
