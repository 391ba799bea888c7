use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiscordError>;

#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("request to Discord failed: {0}")]
    Network(String),

    #[error("Discord returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("rate limited by Discord, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: f64 },

    #[error("failed to decode Discord response: {0}")]
    Parse(String),
}

/// Shape of Discord's 429 body; `retry_after` is the cooldown in seconds.
#[derive(serde::Deserialize)]
struct RateLimitBody {
    retry_after: f64,
}

impl DiscordError {
    /// Map a non-success response to an error. A 429 whose body carries a
    /// `retry_after` becomes [`DiscordError::RateLimited`]; everything else
    /// keeps the raw status and body.
    pub fn from_response(status: u16, body: String) -> Self {
        if status == 429 {
            if let Ok(limit) = serde_json::from_str::<RateLimitBody>(&body) {
                return DiscordError::RateLimited {
                    retry_after_secs: limit.retry_after,
                };
            }
        }
        DiscordError::Api {
            status,
            message: body,
        }
    }
}

impl From<reqwest::Error> for DiscordError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DiscordError::Parse(err.to_string())
        } else {
            DiscordError::Network(err.to_string())
        }
    }
}
