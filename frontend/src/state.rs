//! Yew-side wrapper around the shared navigation state machine.
//!
//! The root component owns a single [`SessionStore`] through
//! `use_reducer`; pages dispatch [`SessionAction`]s instead of touching
//! session state directly.

use std::rc::Rc;

use shared::{Page, ProfileDraft, Session};
use yew::prelude::*;

pub enum SessionAction {
    SignUp { email: String },
    PaymentSucceeded { payment_method_id: String },
    SetupComplete(ProfileDraft),
    Navigate(Page),
    Logout,
}

#[derive(Clone, PartialEq, Default)]
pub struct SessionStore(pub Session);

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        let mut session = self.0.clone();
        match action {
            SessionAction::SignUp { email } => session.sign_up(&email),
            SessionAction::PaymentSucceeded { payment_method_id } => {
                // Pages validate the payment method before dispatching;
                // a rejected token here means a wiring bug, so log it
                // and stay put.
                if let Err(error) = session.payment_succeeded(&payment_method_id) {
                    gloo::console::error!("payment transition rejected:", error.to_string());
                }
            }
            SessionAction::SetupComplete(profile) => session.setup_complete(profile),
            SessionAction::Navigate(page) => session.navigate(page),
            SessionAction::Logout => session.logout(),
        }
        Rc::new(SessionStore(session))
    }
}
