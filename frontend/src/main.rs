mod components;
mod services;
mod state;

use shared::Page;
use yew::prelude::*;

use components::{Dashboard, LoginPage, PaymentPage, SetupForm};
use services::address::resolve_address_lookup;
use state::{SessionAction, SessionStore};

/// Root component. Owns the session reducer and mounts exactly one page
/// for the session's current state; all transitions arrive as dispatched
/// actions from the pages.
#[function_component(App)]
fn app() -> Html {
    let session = use_reducer(SessionStore::default);
    // Capabilities are resolved once at startup, not per render.
    let address_lookup = use_memo((), |_| resolve_address_lookup());

    let on_sign_up = {
        let session = session.clone();
        Callback::from(move |email: String| session.dispatch(SessionAction::SignUp { email }))
    };

    let on_payment_success = {
        let session = session.clone();
        Callback::from(move |payment_method_id: String| {
            session.dispatch(SessionAction::PaymentSucceeded { payment_method_id })
        })
    };

    let on_setup_complete = {
        let session = session.clone();
        Callback::from(move |profile| session.dispatch(SessionAction::SetupComplete(profile)))
    };

    let on_navigate = {
        let session = session.clone();
        Callback::from(move |page: Page| session.dispatch(SessionAction::Navigate(page)))
    };

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: ()| session.dispatch(SessionAction::Logout))
    };

    match session.0.current_page() {
        Page::Login => html! { <LoginPage on_sign_up={on_sign_up} /> },
        Page::Payment => html! {
            <PaymentPage
                user={session.0.user().cloned()}
                on_payment_success={on_payment_success}
                on_navigate={on_navigate}
            />
        },
        Page::Setup => html! {
            <SetupForm
                user={session.0.user().cloned()}
                on_complete={on_setup_complete}
                on_navigate={on_navigate}
                address_lookup={(*address_lookup).clone()}
            />
        },
        // current_page() never reports Dashboard without a user; the
        // empty arm only satisfies the type checker.
        Page::Dashboard => match session.0.user().cloned() {
            Some(user) => html! { <Dashboard user={user} on_logout={on_logout} /> },
            None => html! {},
        },
    }
}

fn main() {
    gloo::console::log!("starting Roadr Partner portal");
    yew::Renderer::<App>::new().render();
}
