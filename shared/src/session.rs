//! The navigation state machine at the root of the portal.
//!
//! [`Session`] exclusively owns the in-memory user record and the
//! current page. Pages receive read-only snapshots and callback handles;
//! they never hold a mutable reference to session state. Nothing is
//! persisted — a reload starts a fresh session by design.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::ServiceType;
use crate::error::PaymentError;
use crate::setup::{PricingEntry, ProfileDraft};

/// Email used for the placeholder account when the sign-up form had no
/// email typed in.
pub const DEFAULT_SIGNUP_EMAIL: &str = "new-user@example.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Login,
    Payment,
    Setup,
    Dashboard,
}

/// The session-scoped provider account. Created at the mock sign-up
/// step, filled in by setup-form submission, dropped on logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub business_name: String,
    pub phone: String,
    pub service_area: Option<String>,
    pub service_type: Option<ServiceType>,
    pub services: Option<Vec<String>>,
    pub service_pricing: Option<BTreeMap<String, PricingEntry>>,
}

impl User {
    /// The mock account handed to the payment page right after sign-up.
    pub fn placeholder(email: &str) -> Self {
        let email = if email.trim().is_empty() {
            DEFAULT_SIGNUP_EMAIL.to_string()
        } else {
            email.trim().to_string()
        };
        User {
            email,
            business_name: "New Business".to_string(),
            phone: "+1234567890".to_string(),
            service_area: None,
            service_type: None,
            services: None,
            service_pricing: None,
        }
    }

    /// Display name for the account owner: the business name when one is
    /// known, otherwise the local part of the email.
    pub fn owner_name(&self) -> String {
        if !self.business_name.trim().is_empty() {
            self.business_name.clone()
        } else {
            self.email.split('@').next().unwrap_or_default().to_string()
        }
    }
}

/// `local@domain.tld` shape check, applied before any simulated network
/// call is made.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Root state machine: `login → payment → setup → dashboard`, with
/// logout and back-navigation returning to `login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Session {
    page: Page,
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// The page to render. Never reports `Dashboard` without a user: a
    /// session that lost its user record lands back on `Login` instead
    /// of rendering a broken dashboard.
    pub fn current_page(&self) -> Page {
        match self.page {
            Page::Dashboard if self.user.is_none() => Page::Login,
            page => page,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// `login → payment`: creates the placeholder account from the typed
    /// email (or the default) and moves to the payment step.
    pub fn sign_up(&mut self, email: &str) {
        self.user = Some(User::placeholder(email));
        self.page = Page::Payment;
    }

    /// `payment → setup`: accepts the opaque payment-method token minted
    /// by the payment collaborator. An empty token is rejected and the
    /// page does not advance.
    pub fn payment_succeeded(&mut self, payment_method_id: &str) -> Result<(), PaymentError> {
        if payment_method_id.trim().is_empty() {
            return Err(PaymentError::MissingPaymentMethod);
        }
        self.page = Page::Setup;
        Ok(())
    }

    /// `setup → dashboard`: merges the validated profile into the user
    /// record. The caller is responsible for only invoking this after
    /// the setup form validated and the submission collaborator
    /// accepted the profile.
    pub fn setup_complete(&mut self, profile: ProfileDraft) {
        let email = self
            .user
            .as_ref()
            .map(|user| user.email.clone())
            .unwrap_or_else(|| profile.email.clone());
        self.user = Some(User {
            email,
            business_name: profile.business_name,
            phone: profile.phone,
            service_area: Some(profile.service_area),
            service_type: Some(profile.service_type),
            services: Some(profile.services),
            service_pricing: Some(profile.service_pricing),
        });
        self.page = Page::Dashboard;
    }

    /// `dashboard → login`: drops the user record entirely.
    pub fn logout(&mut self) {
        self.user = None;
        self.page = Page::Login;
    }

    /// Direct navigation requested by a child page. Navigating to the
    /// dashboard without a user redirects to `login`.
    pub fn navigate(&mut self, page: Page) {
        self.page = match page {
            Page::Dashboard if self.user.is_none() => Page::Login,
            page => page,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ServiceType;
    use crate::setup::SetupDraft;

    fn valid_profile() -> ProfileDraft {
        let mut draft = SetupDraft {
            business_name: "Elite Auto".to_string(),
            phone: "+15551234567".to_string(),
            service_area: "Dallas".to_string(),
            ..SetupDraft::default()
        };
        draft.toggle_service("battery-jump-start");
        draft.set_price("battery-jump-start", "45");
        draft.into_profile(Some(&User::placeholder("owner@elite.com")))
    }

    #[test]
    fn test_initial_state_is_login_without_user() {
        let session = Session::new();
        assert_eq!(session.current_page(), Page::Login);
        assert!(session.user().is_none());
    }

    #[test]
    fn test_sign_up_creates_placeholder_and_moves_to_payment() {
        let mut session = Session::new();
        session.sign_up("owner@elite.com");
        assert_eq!(session.current_page(), Page::Payment);
        assert_eq!(session.user().unwrap().email, "owner@elite.com");
        assert_eq!(session.user().unwrap().business_name, "New Business");
    }

    #[test]
    fn test_sign_up_with_empty_email_uses_default() {
        let mut session = Session::new();
        session.sign_up("  ");
        assert_eq!(session.user().unwrap().email, DEFAULT_SIGNUP_EMAIL);
    }

    #[test]
    fn test_payment_requires_nonempty_token() {
        let mut session = Session::new();
        session.sign_up("owner@elite.com");
        assert_eq!(
            session.payment_succeeded(""),
            Err(PaymentError::MissingPaymentMethod)
        );
        assert_eq!(session.current_page(), Page::Payment);
        assert_eq!(session.payment_succeeded("pm_x7f2k91ab"), Ok(()));
        assert_eq!(session.current_page(), Page::Setup);
    }

    #[test]
    fn test_setup_complete_merges_profile_and_moves_to_dashboard() {
        let mut session = Session::new();
        session.sign_up("owner@elite.com");
        session.payment_succeeded("pm_x7f2k91ab").unwrap();
        session.setup_complete(valid_profile());
        assert_eq!(session.current_page(), Page::Dashboard);
        let user = session.user().unwrap();
        assert_eq!(user.email, "owner@elite.com");
        assert_eq!(user.business_name, "Elite Auto");
        assert_eq!(user.service_type, Some(ServiceType::Mobile));
        assert_eq!(
            user.services.as_deref(),
            Some(&["battery-jump-start".to_string()][..])
        );
    }

    #[test]
    fn test_logout_clears_user_and_returns_to_login() {
        let mut session = Session::new();
        session.sign_up("owner@elite.com");
        session.payment_succeeded("pm_x7f2k91ab").unwrap();
        session.setup_complete(valid_profile());
        session.logout();
        assert_eq!(session.current_page(), Page::Login);
        assert!(session.user().is_none());
    }

    #[test]
    fn test_dashboard_without_user_redirects_to_login() {
        let mut session = Session::new();
        session.navigate(Page::Dashboard);
        assert_eq!(session.current_page(), Page::Login);
    }

    #[test]
    fn test_any_page_can_navigate_back_to_login() {
        let mut session = Session::new();
        session.sign_up("owner@elite.com");
        session.navigate(Page::Login);
        assert_eq!(session.current_page(), Page::Login);
        // The user record survives back-navigation; only logout drops it.
        assert!(session.user().is_some());
    }

    #[test]
    fn test_owner_name_falls_back_to_email_local_part() {
        let mut user = User::placeholder("jo.ann@elite-auto.com");
        assert_eq!(user.owner_name(), "New Business");
        user.business_name.clear();
        assert_eq!(user.owner_name(), "jo.ann");
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("ab.co"));
        assert!(!is_valid_email("a @b.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email(""));
    }
}
