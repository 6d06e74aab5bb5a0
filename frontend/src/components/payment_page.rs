use shared::{Page, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::payment;

#[derive(Properties, PartialEq)]
pub struct PaymentPageProps {
    pub user: Option<User>,
    /// Fired with the freshly minted payment-method token.
    pub on_payment_success: Callback<String>,
    pub on_navigate: Callback<Page>,
}

/// Subscription checkout. The demo card tile is the only selectable
/// payment method; paying runs the mocked charge and advances the flow
/// with its token.
#[function_component(PaymentPage)]
pub fn payment_page(props: &PaymentPageProps) -> Html {
    let payment_method = use_state(|| Option::<String>::None);
    let processing = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let select_demo_card = {
        let payment_method = payment_method.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            payment_method.set(Some("card_demo".to_string()));
            error.set(None);
        })
    };

    let on_pay = {
        let payment_method = payment_method.clone();
        let processing = processing.clone();
        let error = error.clone();
        let on_payment_success = props.on_payment_success.clone();
        Callback::from(move |_: MouseEvent| {
            if payment_method.is_none() || *processing {
                return;
            }
            let processing = processing.clone();
            let error = error.clone();
            let on_payment_success = on_payment_success.clone();
            spawn_local(async move {
                processing.set(true);
                error.set(None);
                match payment::initiate_payment().await {
                    Ok(token) => on_payment_success.emit(token),
                    Err(payment_error) => {
                        error.set(Some(payment_error.to_string()));
                        processing.set(false);
                    }
                }
            });
        })
    };

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Login))
    };

    let account_email = props
        .user
        .as_ref()
        .map(|user| user.email.clone())
        .unwrap_or_default();

    html! {
        <div class="page payment-page">
            <header class="page-header">
                <span class="brand">{"Roadr Partner"}</span>
                <button type="button" class="btn btn-link" onclick={on_back} disabled={*processing}>
                    {"Back to Login"}
                </button>
            </header>

            <main class="payment-main">
                <div class="card">
                    <h1>{"Activate your subscription"}</h1>
                    {if account_email.is_empty() {
                        html! {}
                    } else {
                        html! { <p class="muted">{format!("Account: {account_email}")}</p> }
                    }}

                    <div class="order-summary">
                        <div class="summary-row">
                            <span>{"Roadr Partner Subscription"}</span>
                            <span class="price">{"$49.99/month"}</span>
                        </div>
                        <p class="muted">
                            {"Unlimited job leads, dashboard access, and customer messaging."}
                        </p>
                    </div>

                    {if let Some(message) = (*error).as_ref() {
                        html! { <div class="alert error">{message}</div> }
                    } else { html! {} }}

                    <h3>{"Payment Method"}</h3>
                    <div
                        class={classes!(
                            "payment-method-tile",
                            payment_method.is_some().then_some("selected")
                        )}
                        onclick={select_demo_card}
                    >
                        <div class="card-number">{"•••• •••• •••• 4242"}</div>
                        <div class="muted">{"Demo Card (Visa)"}</div>
                        {if payment_method.is_some() {
                            html! { <span class="check">{"✓"}</span> }
                        } else { html! {} }}
                    </div>

                    <button
                        type="button"
                        class="btn btn-primary"
                        onclick={on_pay}
                        disabled={payment_method.is_none() || *processing}
                    >
                        {if *processing { "Processing payment..." } else { "Pay $49.99" }}
                    </button>
                </div>
            </main>
        </div>
    }
}
