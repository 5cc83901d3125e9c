//! Sign-in / sign-up form controller.

use std::sync::Arc;

use crate::models::{SignUpRequest, UserRole};
use crate::pages::{failure_toast, Toast};
use crate::routes::{redirect_for, Route};
use crate::session::SessionProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    SignUp,
}

pub struct AuthPage {
    sessions: Arc<SessionProvider>,
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
    pub role: UserRole,
    loading: bool,
    toast: Option<Toast>,
}

impl AuthPage {
    pub fn new(sessions: Arc<SessionProvider>) -> Self {
        Self {
            sessions,
            mode: AuthMode::Login,
            email: String::new(),
            password: String::new(),
            full_name: String::new(),
            phone: String::new(),
            role: UserRole::Buyer,
            loading: false,
            toast: None,
        }
    }

    /// Someone already signed in has no business on this page.
    pub fn mount(&self) -> Option<Route> {
        redirect_for(&Route::Auth, self.sessions.current().as_ref())
    }

    /// Submits the active form. Returns the route to navigate to on
    /// success; on failure the toast explains and the user stays put.
    pub async fn submit(&mut self) -> Option<Route> {
        self.loading = true;
        let outcome = match self.mode {
            AuthMode::Login => self.submit_login().await,
            AuthMode::SignUp => self.submit_sign_up().await,
        };
        self.loading = false;
        outcome
    }

    async fn submit_login(&mut self) -> Option<Route> {
        match self.sessions.sign_in(&self.email, &self.password).await {
            Ok(_) => {
                self.toast = Some(Toast::success(
                    "Welcome back!",
                    "You have successfully logged in.",
                ));
                Some(Route::Home)
            }
            Err(e) => {
                self.toast = Some(failure_toast("Login Failed", &e));
                None
            }
        }
    }

    async fn submit_sign_up(&mut self) -> Option<Route> {
        let request = SignUpRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            full_name: self.full_name.clone(),
            role: self.role,
            // Buyers never submit a phone, whatever the form field holds
            phone: match self.role {
                UserRole::Seller => Some(self.phone.clone()),
                UserRole::Buyer => None,
            },
        };
        match self.sessions.sign_up(&request).await {
            Ok(_) => {
                self.toast = Some(Toast::success(
                    "Account Created!",
                    "You have successfully signed up.",
                ));
                Some(Route::Home)
            }
            Err(e) => {
                self.toast = Some(failure_toast("Signup Failed", &e));
                None
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn take_toast(&mut self) -> Option<Toast> {
        self.toast.take()
    }
}
