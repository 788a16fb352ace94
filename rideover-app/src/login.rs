use crate::error;
use crate::routes;
use crate::validation::AuthError;
use rideover_core::latency::SimulatedDelay;
use rideover_core::repository::SessionRepository;
use rideover_core::session::Session;
use rideover_core::CoreResult;
use rideover_notify::{Notification, NotificationSurface};
use rideover_shared::Secret;

/// Sign-in form state. Same write-a-session pattern as registration,
/// without the confirmation and strength checks.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: Secret,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        Ok(())
    }

    /// Display name for a mock sign-in: the address's local part.
    fn display_name(&self) -> String {
        self.email
            .split('@')
            .next()
            .unwrap_or(&self.email)
            .to_string()
    }
}

/// Sign-in page controller.
#[derive(Debug, Default)]
pub struct LoginPage {
    pub form: LoginForm,
}

impl LoginPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validation plus the simulated sign-in call. On success the session
    /// has been written.
    pub async fn sign_in(
        &self,
        sessions: &dyn SessionRepository,
        delay: &SimulatedDelay,
    ) -> CoreResult<Session> {
        self.form.validate()?;

        delay.wait().await;

        let session = Session::new(self.form.display_name(), self.form.email.clone());
        sessions.save(&session);
        tracing::info!("User signed in as {}", session.email);
        Ok(session)
    }

    /// Form submit: sign in and report the outcome. Returns the path to
    /// navigate to on success.
    pub async fn submit(
        &self,
        sessions: &dyn SessionRepository,
        delay: &SimulatedDelay,
        notifications: &mut NotificationSurface,
    ) -> Option<&'static str> {
        match self.sign_in(sessions, delay).await {
            Ok(_) => {
                notifications.push(Notification::success(
                    "Success",
                    "You have been signed in successfully",
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_the_email_local_part() {
        let form = LoginForm {
            email: "ama@example.com".to_string(),
            password: Secret::from("whatever"),
        };
        assert_eq!(form.display_name(), "ama");
    }

    #[test]
    fn empty_fields_fail_validation() {
        let form = LoginForm::default();
        assert_eq!(form.validate(), Err(AuthError::MissingFields));
    }
}
