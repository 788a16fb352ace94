use crate::error;
use crate::routes;
use crate::validation::{AuthError, PasswordStrength, MIN_STRENGTH_SCORE};
use rideover_core::latency::SimulatedDelay;
use rideover_core::repository::SessionRepository;
use rideover_core::session::Session;
use rideover_core::CoreResult;
use rideover_notify::{Notification, NotificationSurface};
use rideover_shared::Secret;

/// Signup form state.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: Secret,
    pub confirm_password: Secret,
}

impl RegisterForm {
    /// Precondition checks, in the order the form reports them: required
    /// fields, then confirmation match, then strength.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.full_name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(AuthError::MissingFields);
        }

        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        if PasswordStrength::evaluate(self.password.reveal()).score() < MIN_STRENGTH_SCORE {
            return Err(AuthError::WeakPassword);
        }

        Ok(())
    }
}

/// Signup page controller.
#[derive(Debug, Default)]
pub struct RegisterPage {
    pub form: RegisterForm,
}

impl RegisterPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validation plus the simulated signup call. Fails before the delay
    /// with state unchanged; on success the new session has been written.
    pub async fn create_account(
        &self,
        sessions: &dyn SessionRepository,
        delay: &SimulatedDelay,
    ) -> CoreResult<Session> {
        self.form.validate()?;

        delay.wait().await;

        let session = Session::new(self.form.full_name.clone(), self.form.email.clone());
        sessions.save(&session);
        tracing::info!("Account created for {}", session.email);
        Ok(session)
    }

    /// Form submit: create the account and report the outcome. Returns the
    /// path to navigate to on success.
    pub async fn submit(
        &self,
        sessions: &dyn SessionRepository,
        delay: &SimulatedDelay,
        notifications: &mut NotificationSurface,
    ) -> Option<&'static str> {
        match self.create_account(sessions, delay).await {
            Ok(_) => {
                notifications.push(Notification::success(
                    "Success",
                    "Your account has been created successfully",
                ));
                Some(routes::HOME_PATH)
            }
            Err(err) => {
                error::report(err, notifications);
                None
            }
        }
    }
}
