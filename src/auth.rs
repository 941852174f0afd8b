use thiserror::Error;
use tokio::sync::watch;
use tracing::info;

pub const TOKEN_ENV: &str = "CLICKWHEEL_ACCESS_TOKEN";
pub const DEFAULT_PROVIDER: &str = "google";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStatus {
    #[default]
    Unauthenticated,
    Loading,
    Authenticated,
}

/// Snapshot of the signed-in account 🔑
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub access_token: Option<String>,
    pub user_name: Option<String>,
    pub status: AuthStatus,
    /// Bumped on every sign-in / sign-out so late catalog answers can be
    /// matched against the session that asked for them.
    pub generation: u64,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated && self.access_token.is_some()
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("unsupported sign-in provider: {0}")]
    UnsupportedProvider(String),
    #[error("no access token configured (pass --token or set {TOKEN_ENV})")]
    MissingToken,
}

/// Account collaborator. Session changes are published on the watch channel.
pub trait AuthProvider: Send + Sync {
    fn sign_in(&self, provider: &str) -> Result<(), AuthError>;
    fn sign_out(&self) -> Result<(), AuthError>;
    fn subscribe(&self) -> watch::Receiver<Session>;
}

/// Signs in with a pre-issued OAuth bearer token.
pub struct TokenAuth {
    token: Option<String>,
    user_name: Option<String>,
    tx: watch::Sender<Session>,
}

impl TokenAuth {
    pub fn new(token: Option<String>, user_name: Option<String>) -> Self {
        let (tx, _rx) = watch::channel(Session::default());
        Self { token, user_name, tx }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

impl AuthProvider for TokenAuth {
    fn sign_in(&self, provider: &str) -> Result<(), AuthError> {
        if provider != DEFAULT_PROVIDER {
            return Err(AuthError::UnsupportedProvider(provider.to_string()));
        }
        let token = self.token.clone().ok_or(AuthError::MissingToken)?;

        self.tx.send_modify(|s| s.status = AuthStatus::Loading);
        self.tx.send_modify(|s| {
            s.access_token = Some(token);
            s.user_name = self.user_name.clone();
            s.status = AuthStatus::Authenticated;
            s.generation += 1;
        });
        info!(provider, "signed in");
        Ok(())
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        self.tx.send_modify(|s| {
            s.access_token = None;
            s.user_name = None;
            s.status = AuthStatus::Unauthenticated;
            s.generation += 1;
        });
        info!("signed out");
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }
}

/// Token lookup order: command line, environment, config file.
pub fn resolve_token(cli: Option<&str>, config: Option<&str>) -> Option<String> {
    pick_token(cli, std::env::var(TOKEN_ENV).ok().as_deref(), config)
}

/// First non-blank of the three sources.
fn pick_token(cli: Option<&str>, env: Option<&str>, config: Option<&str>) -> Option<String> {
    [cli, env, config]
        .into_iter()
        .flatten()
        .find(|t| !t.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_publishes_session() {
        let auth = TokenAuth::new(Some("tok".to_string()), Some("Ada Lovelace".to_string()));
        let rx = auth.subscribe();
        auth.sign_in(DEFAULT_PROVIDER).unwrap();

        let s = rx.borrow().clone();
        assert!(s.is_authenticated());
        assert_eq!(s.access_token.as_deref(), Some("tok"));
        assert_eq!(s.user_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(s.generation, 1);
    }

    #[test]
    fn test_sign_out_clears_token() {
        let auth = TokenAuth::new(Some("tok".to_string()), None);
        let rx = auth.subscribe();
        auth.sign_in(DEFAULT_PROVIDER).unwrap();
        auth.sign_out().unwrap();

        let s = rx.borrow().clone();
        assert_eq!(s.status, AuthStatus::Unauthenticated);
        assert!(s.access_token.is_none());
        assert_eq!(s.generation, 2);
    }

    #[test]
    fn test_sign_in_without_token_fails() {
        let auth = TokenAuth::new(None, None);
        assert!(matches!(auth.sign_in(DEFAULT_PROVIDER), Err(AuthError::MissingToken)));
        assert!(matches!(
            auth.sign_in("myspace"),
            Err(AuthError::UnsupportedProvider(_))
        ));
    }

    #[test]
    fn test_cli_token_wins() {
        assert_eq!(
            resolve_token(Some("cli"), Some("cfg")).as_deref(),
            Some("cli")
        );
    }

    #[test]
    fn test_blank_token_falls_through() {
        assert_eq!(pick_token(Some(""), Some("env"), Some("cfg")).as_deref(), Some("env"));
        assert_eq!(pick_token(Some("  "), None, Some("cfg")).as_deref(), Some("cfg"));
        assert_eq!(pick_token(Some(""), Some(" "), None), None);
    }
}
