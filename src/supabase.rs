//! Optional Supabase client configuration.
//!
//! The client is built only when both credentials are present. It is never
//! used for data access; the REST backend stays the source of truth and the
//! UI only reports whether the client is configured.

use crate::config::SupabaseConfig;
use crate::constants::SUPABASE_CONFIGURED;

/// Credentials for a Supabase project.
#[derive(Clone, PartialEq, Eq)]
pub struct SupabaseClient {
    url: String,
    anon_key: String,
}

// Keep the key out of logs
impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

impl SupabaseClient {
    /// Build a client when both the URL and the public key are non-empty.
    pub fn from_credentials(url: Option<String>, anon_key: Option<String>) -> Option<Self> {
        let url = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty())?;
        let anon_key = anon_key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())?;
        Some(Self { url, anon_key })
    }

    /// Build a client from the environment variables named in the config.
    pub fn from_env(config: &SupabaseConfig) -> Option<Self> {
        let (url, anon_key) = config.credentials_from_env();
        Self::from_credentials(url, anon_key)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupabaseStatus {
    Configured,
    NotConfigured,
}

impl SupabaseStatus {
    pub fn of(client: Option<&SupabaseClient>) -> Self {
        if client.is_some() {
            Self::Configured
        } else {
            Self::NotConfigured
        }
    }

}

/// The optional client together with the settings it was looked up from
#[derive(Debug, Clone, Default)]
pub struct SupabaseCheck {
    client: Option<SupabaseClient>,
    config: SupabaseConfig,
}

impl SupabaseCheck {
    pub fn new(config: SupabaseConfig, client: Option<SupabaseClient>) -> Self {
        Self { client, config }
    }

    pub fn from_env(config: &SupabaseConfig) -> Self {
        Self::new(config.clone(), SupabaseClient::from_env(config))
    }

    pub fn status(&self) -> SupabaseStatus {
        SupabaseStatus::of(self.client.as_ref())
    }

    /// Panel text; names the variables actually read when unconfigured
    pub fn message(&self) -> String {
        match self.status() {
            SupabaseStatus::Configured => SUPABASE_CONFIGURED.to_string(),
            SupabaseStatus::NotConfigured => format!(
                "Set {} and {} to use the client here.",
                self.config.url_env, self.config.anon_key_env
            ),
        }
    }
}
