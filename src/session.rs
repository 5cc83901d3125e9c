//! Process-wide auth session provider.
//!
//! One shared handle is injected into every page controller; nothing else
//! in the crate reads ambient global state.

use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use crate::error::{MarketError, Result};
use crate::gateway::AuthGateway;
use crate::models::{Session, SignUpRequest, UserRole};
use crate::validation;

pub struct SessionProvider {
    auth: Arc<dyn AuthGateway>,
    current: RwLock<Option<Session>>,
}

impl SessionProvider {
    pub fn new(auth: Arc<dyn AuthGateway>) -> Arc<Self> {
        Arc::new(Self {
            auth,
            current: RwLock::new(None),
        })
    }

    /// Snapshot of the current session, if signed in.
    pub fn current(&self) -> Option<Session> {
        self.current.read().ok().and_then(|guard| guard.clone())
    }

    pub fn role(&self) -> Option<UserRole> {
        self.current().map(|session| session.role)
    }

    fn store(&self, session: Option<Session>) {
        if let Ok(mut guard) = self.current.write() {
            *guard = session;
        }
    }

    /// Validates credentials locally, then signs in against the gateway.
    /// The generic invalid-credentials response is rewritten into
    /// something a person can act on.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        validation::validate_credentials(email, password)?;

        match self.auth.sign_in(email.trim(), password).await {
            Ok(session) => {
                info!("Session established for {}", session.email);
                self.store(Some(session.clone()));
                Ok(session)
            }
            Err(MarketError::Gateway(msg)) if msg.contains("Invalid login credentials") => {
                warn!("Sign-in rejected for {}", email);
                Err(MarketError::Gateway(
                    "Invalid email or password. Please try again.".to_string(),
                ))
            }
            Err(e) => Err(e),
        }
    }

    /// Validates the sign-up form (sellers must leave a phone number),
    /// then registers and establishes the session.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<Session> {
        validation::validate_sign_up(request)?;

        match self.auth.sign_up(request).await {
            Ok(session) => {
                info!("Account created for {}", session.email);
                self.store(Some(session.clone()));
                Ok(session)
            }
            Err(MarketError::Gateway(msg)) if msg.contains("already registered") => {
                Err(MarketError::Gateway(
                    "This email is already registered. Please try logging in instead.".to_string(),
                ))
            }
            Err(e) => Err(e),
        }
    }

    /// Ends the session. Local state is cleared even when the remote call
    /// fails; a stale token must not keep pages in a signed-in view.
    pub async fn sign_out(&self) -> Result<()> {
        let result = self.auth.sign_out().await;
        self.store(None);
        if let Err(e) = &result {
            warn!("Remote sign-out failed: {}", e);
        }
        result
    }
}
