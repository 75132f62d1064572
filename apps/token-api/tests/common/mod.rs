use axum::Router;
use token_api::config::Config;
use token_api::AppState;

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_API_SECRET: &str = "test-secret-for-integration-tests";

/// Configuration with fixed test credentials, independent of the process environment.
pub fn test_config() -> Config {
    Config {
        livekit_api_key: TEST_API_KEY.to_string(),
        livekit_api_secret: TEST_API_SECRET.to_string(),
        ..Config::default()
    }
}

/// Build the full application [`Router`] (routes + middleware) for `config`.
pub fn app_with(config: Config) -> Router {
    token_api::app(AppState::new(config))
}

pub fn test_app() -> Router {
    app_with(test_config())
}
