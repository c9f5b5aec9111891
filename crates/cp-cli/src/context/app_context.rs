use std::sync::Arc;

use cp_client::ApiClient;
use cp_config::CoparentConfig;
use cp_session::SessionStore;

/// Shared resources for one CLI invocation.
pub struct AppContext {
    pub config: CoparentConfig,
    pub session: Arc<SessionStore>,
    pub client: ApiClient,
}

impl AppContext {
    /// Open the session directory and bind an API client to it.
    pub fn init(config: CoparentConfig) -> anyhow::Result<Self> {
        super::warn_unconfigured(&config);

        let session = Arc::new(SessionStore::file(config.session.resolve_dir())?);
        warn_if_token_expired(&session);

        let client = ApiClient::from_config(&config.api, Arc::clone(&session));
        tracing::debug!(base_url = client.base_url(), "api client ready");

        Ok(Self {
            config,
            session,
            client,
        })
    }
}

fn warn_if_token_expired(session: &SessionStore) {
    let Some(token) = session.token() else {
        return;
    };
    if let Some(expiry) = cp_session::token_expiry(&token)
        && cp_session::is_expired(&token, chrono::Utc::now())
    {
        tracing::warn!(
            expired_at = %expiry.to_rfc3339(),
            "session token has expired; run `coparent auth login` again"
        );
    }
}
