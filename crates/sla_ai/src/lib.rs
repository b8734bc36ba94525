pub mod enrich;
pub mod gemini;
pub mod llm;
pub mod orchestrate;
pub mod schema;

#[cfg(test)]
mod tests {
    use super::gemini::{
        GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL, ENV_API_KEY, ENV_BASE_URL, ENV_MODEL,
    };

    #[test]
    fn client_accepts_https_and_local_http_only() {
        let client = GeminiClient::new(DEFAULT_BASE_URL, "key", DEFAULT_MODEL).expect("https");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);

        let client =
            GeminiClient::new("https://example.test/", "key", DEFAULT_MODEL).expect("trailing /");
        assert_eq!(client.base_url(), "https://example.test");

        let client =
            GeminiClient::new("http://127.0.0.1:8080", "key", DEFAULT_MODEL).expect("local http");
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");

        let err = GeminiClient::new("http://example.test", "key", DEFAULT_MODEL)
            .expect_err("remote http");
        assert_eq!(err.code, "CONFIG_BASE_URL_INVALID");

        let err = GeminiClient::new("https://example.test/v1beta", "key", DEFAULT_MODEL)
            .expect_err("path not allowed");
        assert_eq!(err.code, "CONFIG_BASE_URL_INVALID");

        let err = GeminiClient::new("ftp://example.test", "key", DEFAULT_MODEL)
            .expect_err("unknown scheme");
        assert_eq!(err.code, "CONFIG_BASE_URL_INVALID");

        let err =
            GeminiClient::new("http://127.0.0.1:abc", "key", DEFAULT_MODEL).expect_err("bad port");
        assert_eq!(err.code, "CONFIG_BASE_URL_INVALID");
    }

    #[test]
    fn client_requires_key_and_model() {
        let err = GeminiClient::new(DEFAULT_BASE_URL, "  ", DEFAULT_MODEL).expect_err("no key");
        assert_eq!(err.code, "CONFIG_API_KEY_MISSING");

        let err = GeminiClient::new(DEFAULT_BASE_URL, "key", "").expect_err("no model");
        assert_eq!(err.code, "CONFIG_MODEL_INVALID");
    }

    // Environment mutation lives in a single test so parallel test threads
    // never observe each other's variables.
    #[test]
    fn from_env_requires_key_and_applies_defaults() {
        std::env::remove_var(ENV_API_KEY);
        std::env::remove_var(ENV_BASE_URL);
        std::env::remove_var(ENV_MODEL);

        let err = GeminiClient::from_env().expect_err("missing key");
        assert_eq!(err.code, "CONFIG_API_KEY_MISSING");

        std::env::set_var(ENV_API_KEY, "test-key");
        let client = GeminiClient::from_env().expect("defaults");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.model(), DEFAULT_MODEL);
        assert_eq!(client.api_key(), "test-key");

        std::env::set_var(ENV_BASE_URL, "http://127.0.0.1:9090/");
        std::env::set_var(ENV_MODEL, "gemini-2.5-pro");
        let client = GeminiClient::from_env().expect("overrides");
        assert_eq!(client.base_url(), "http://127.0.0.1:9090");
        assert_eq!(client.model(), "gemini-2.5-pro");

        std::env::remove_var(ENV_API_KEY);
        std::env::remove_var(ENV_BASE_URL);
        std::env::remove_var(ENV_MODEL);
    }
}
