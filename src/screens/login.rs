//! Login screen state holder.
//!
//! Auth failures are routed into the `session` resource (and logged) so the
//! view always has an error to show; they are never silently dropped.

use std::sync::Arc;

use log::{info, warn};

use crate::core::resource::Resource;
use crate::store::{AuthSession, DocumentStore, Identity, UserProfile};

pub struct LoginScreen {
    identity: Arc<dyn Identity>,
    store: Arc<dyn DocumentStore>,
    /// Latest authentication outcome.
    pub session: Resource<AuthSession>,
    busy: bool,
}

impl LoginScreen {
    pub fn new(identity: Arc<dyn Identity>, store: Arc<dyn DocumentStore>) -> Self {
        LoginScreen {
            identity,
            store,
            session: Resource::Loading(false),
            busy: false,
        }
    }

    /// Signs in; on success invokes `on_success` with the fresh session
    /// (the caller's navigation trigger).
    pub async fn sign_in(
        &mut self,
        email: &str,
        password: &str,
        on_success: impl FnOnce(&AuthSession),
    ) {
        self.session = Resource::Loading(true);
        let outcome = self.identity.sign_in(email, password).await;
        match outcome {
            Ok(session) => {
                info!("Signed in as {}", session.user_id);
                on_success(&session);
                self.session = Resource::Success(session);
            }
            Err(e) => {
                warn!("Sign-in failed: {}", e);
                self.session = Resource::Error(e.to_string());
            }
        }
    }

    /// Creates the account, then its profile document in the `users`
    /// collection (display name = email local part). No-ops while a prior
    /// sign-up is still in flight.
    pub async fn sign_up(
        &mut self,
        email: &str,
        password: &str,
        on_success: impl FnOnce(&AuthSession),
    ) {
        if self.busy {
            return;
        }
        self.busy = true;
        self.session = Resource::Loading(true);

        let outcome = self.identity.sign_up(email, password).await;
        match outcome {
            Ok(session) => {
                let profile = UserProfile::new(&session.user_id, session.display_name());
                let created = self.store.add_user(&profile).await;
                match created {
                    Ok(_) => {
                        info!("Created account {}", session.user_id);
                        on_success(&session);
                        self.session = Resource::Success(session);
                    }
                    Err(e) => {
                        warn!("Profile creation failed: {}", e);
                        self.session = Resource::Error(e.to_string());
                    }
                }
            }
            Err(e) => {
                warn!("Sign-up failed: {}", e);
                self.session = Resource::Error(e.to_string());
            }
        }

        self.busy = false;
    }
}
