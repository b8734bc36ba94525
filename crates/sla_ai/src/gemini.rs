use sla_core::error::AppError;

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_BASE_URL: &str = "GEMINI_BASE_URL";
pub const ENV_MODEL: &str = "GEMINI_MODEL";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Connection settings for the Gemini generateContent endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a validated client. The base URL must be bare scheme-plus-host;
    /// plain http is limited to `127.0.0.1`.
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Result<Self, AppError> {
        let base_url = validate_base_url(base_url)?;

        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(AppError::new(
                "CONFIG_API_KEY_MISSING",
                "Gemini API key is empty",
            ));
        }

        let model = model.trim();
        if model.is_empty() {
            return Err(AppError::new(
                "CONFIG_MODEL_INVALID",
                "Gemini model name is empty",
            ));
        }

        Ok(Self {
            base_url,
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    /// Read settings from `GEMINI_API_KEY`, `GEMINI_BASE_URL` and
    /// `GEMINI_MODEL`. Only the key is required; the other two fall back to
    /// the public endpoint and the default model.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = std::env::var(ENV_API_KEY).unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(AppError::new(
                "CONFIG_API_KEY_MISSING",
                "GEMINI_API_KEY environment variable is not set",
            ));
        }
        let base_url =
            std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var(ENV_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(&base_url, &api_key, &model)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

fn validate_base_url(raw: &str) -> Result<String, AppError> {
    let base_url = raw.trim().trim_end_matches('/').to_string();

    let host = if let Some(host) = base_url.strip_prefix("https://") {
        host
    } else if let Some(host) = base_url.strip_prefix("http://") {
        // Plain http is only accepted for a local stub server.
        let local = host == "127.0.0.1"
            || host
                .strip_prefix("127.0.0.1:")
                .map(|port| !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()))
                .unwrap_or(false);
        if !local {
            return Err(AppError::new(
                "CONFIG_BASE_URL_INVALID",
                "plain http base URL must be localhost (127.0.0.1)",
            )
            .with_details(format!("base_url={base_url}")));
        }
        host
    } else {
        return Err(AppError::new(
            "CONFIG_BASE_URL_INVALID",
            "base URL must start with https:// or http://127.0.0.1",
        )
        .with_details(format!("base_url={base_url}")));
    };

    if host.is_empty() || host.contains('/') {
        return Err(AppError::new(
            "CONFIG_BASE_URL_INVALID",
            "base URL must be scheme and host only, without a path",
        )
        .with_details(format!("base_url={base_url}")));
    }

    Ok(base_url)
}
