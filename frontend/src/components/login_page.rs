use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::auth::{self, LoginRole};

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    /// Sign-up action: carries whatever email was typed into the form.
    pub on_sign_up: Callback<String>,
}

/// Sign-in screen with provider/admin tabs. Authentication is mocked;
/// a well-formed email and any password are accepted after a simulated
/// delay. The sign-up link hands the typed email to the navigation
/// machine.
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let loading = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let role = use_state(LoginRole::default);

    let on_email_input = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            error.set(None);
        })
    };

    let on_password_input = {
        let password = password.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
            error.set(None);
        })
    };

    let toggle_show_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let select_role = |next: LoginRole| {
        let role = role.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            role.set(next);
            // Switching tabs starts the form over.
            email.set(String::new());
            password.set(String::new());
            error.set(None);
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        let error = error.clone();
        let role = role.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = email.clone();
            let password = password.clone();
            let loading = loading.clone();
            let error = error.clone();
            let role = *role;
            spawn_local(async move {
                loading.set(true);
                error.set(None);
                if let Err(auth_error) =
                    auth::login(&email, &password, role).await
                {
                    error.set(Some(auth_error.to_string()));
                }
                loading.set(false);
            });
        })
    };

    let on_sign_up = {
        let email = email.clone();
        let on_sign_up = props.on_sign_up.clone();
        Callback::from(move |_: MouseEvent| on_sign_up.emit((*email).clone()))
    };

    html! {
        <div class="page login-page">
            <header class="page-header">
                <span class="brand">{"Roadr Partner"}</span>
            </header>

            <main class="login-main">
                <div class="login-hero">
                    <h1>{"Welcome back"}</h1>
                    <p class="muted">{"Sign in to your registered account"}</p>
                </div>

                <div class="card">
                    <div class="tab-list" role="tablist">
                        <button
                            type="button"
                            class={classes!("tab", (*role == LoginRole::Provider).then_some("active"))}
                            onclick={select_role(LoginRole::Provider)}
                        >
                            {"Provider"}
                        </button>
                        <button
                            type="button"
                            class={classes!("tab", (*role == LoginRole::Admin).then_some("active"))}
                            onclick={select_role(LoginRole::Admin)}
                        >
                            {"Admin"}
                        </button>
                    </div>

                    {if let Some(message) = (*error).as_ref() {
                        html! { <div class="alert error">{message}</div> }
                    } else { html! {} }}

                    <form onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="email">{"Email Address"}</label>
                            <input
                                type="email"
                                id="email"
                                placeholder={role.email_placeholder()}
                                value={(*email).clone()}
                                oninput={on_email_input}
                                disabled={*loading}
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">{"Password"}</label>
                            <div class="password-field">
                                <input
                                    type={if *show_password { "text" } else { "password" }}
                                    id="password"
                                    placeholder="Enter your password"
                                    value={(*password).clone()}
                                    oninput={on_password_input}
                                    disabled={*loading}
                                />
                                <button
                                    type="button"
                                    class="password-toggle"
                                    onclick={toggle_show_password}
                                    disabled={*loading}
                                >
                                    {if *show_password { "Hide" } else { "Show" }}
                                </button>
                            </div>
                        </div>

                        <button type="submit" class="btn btn-primary" disabled={*loading}>
                            {if *loading {
                                "Signing in...".to_string()
                            } else {
                                format!("Sign in as {}", role.label())
                            }}
                        </button>
                    </form>

                    {if *role == LoginRole::Provider {
                        html! {
                            <p class="signup-prompt muted">
                                {"Don't have an account? "}
                                <a class="signup-link" onclick={on_sign_up}>{"Sign up"}</a>
                            </p>
                        }
                    } else { html! {} }}

                    <div class="demo-credentials">
                        <h4>{"Demo Credentials:"}</h4>
                        <div class="muted">
                            <div><strong>{"Admin:"}</strong>{" admin@roadr.com / admin123"}</div>
                            <div><strong>{"Provider:"}</strong>{" demo@provider.com / demo123"}</div>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}
