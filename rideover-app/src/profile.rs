use crate::routes;
use rideover_catalog::account::{self, RewardOffer, RewardsAccount, WalletSummary};
use rideover_catalog::history::{self, RideHistoryEntry};
use rideover_core::latency::SimulatedDelay;
use rideover_core::repository::SessionRepository;
use rideover_core::session::Session;
use rideover_notify::{Notification, NotificationSurface};

/// Which face of the profile page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMode {
    Viewing,
    Editing,
}

/// Profile page controller: account details with an edit form, plus the
/// read-only history, wallet, and rewards tabs.
#[derive(Debug)]
pub struct ProfilePage {
    session: Option<Session>,
    mode: ProfileMode,
    draft: Option<Session>,
}

impl ProfilePage {
    /// Mount the page with whatever session is currently stored.
    pub fn mount(sessions: &dyn SessionRepository) -> Self {
        Self {
            session: sessions.load(),
            mode: ProfileMode::Viewing,
            draft: None,
        }
    }

    pub fn mode(&self) -> ProfileMode {
        self.mode
    }

    pub fn user(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Switch to the edit form, seeded with a copy of the current session.
    pub fn edit_profile(&mut self) {
        if let Some(session) = &self.session {
            self.draft = Some(session.clone());
            self.mode = ProfileMode::Editing;
        }
    }

    /// The draft being edited, if the form is open.
    pub fn draft_mut(&mut self) -> Option<&mut Session> {
        self.draft.as_mut()
    }

    /// Persist the draft, fully replacing the stored session, then return
    /// to the read view.
    pub async fn save_profile(
        &mut self,
        sessions: &dyn SessionRepository,
        delay: &SimulatedDelay,
        notifications: &mut NotificationSurface,
    ) {
        if let Some(draft) = self.draft.take() {
            delay.wait().await;

            sessions.save(&draft);
            self.session = Some(draft);
            self.mode = ProfileMode::Viewing;

            notifications.push(Notification::success(
                "Success",
                "Your profile has been updated successfully",
            ));
        }
    }

    /// Discard the draft without touching the stored session.
    pub fn cancel_edit(&mut self) {
        self.draft = None;
        self.mode = ProfileMode::Viewing;
    }

    /// Clear the session and leave for the login page.
    pub fn logout(&mut self, sessions: &dyn SessionRepository) -> &'static str {
        sessions.clear();
        self.session = None;
        tracing::info!("User logged out");
        routes::LOGIN_PATH
    }

    pub fn ride_history(&self) -> Vec<RideHistoryEntry> {
        history::ride_history()
    }

    pub fn wallet(&self) -> WalletSummary {
        account::wallet_summary()
    }

    pub fn rewards(&self) -> (RewardsAccount, Vec<RewardOffer>) {
        (account::rewards_account(), account::reward_offers())
    }
}
