use shared::address::suggestions_for;
use shared::catalog::{self, ServiceType};
use shared::phone;
use shared::setup::{SetupDraft, PRICE_UNIT_CHOICES};
use shared::{AddressSuggestion, Page, User};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::address::AddressLookupHandle;
use crate::services::profile;

#[derive(Properties, PartialEq)]
pub struct SetupFormProps {
    pub user: Option<User>,
    /// Fired with the completed profile once the mocked submission
    /// accepts it.
    pub on_complete: Callback<shared::ProfileDraft>,
    pub on_navigate: Callback<Page>,
    pub address_lookup: AddressLookupHandle,
}

/// Business setup form: profile fields, service-type choice, the
/// filtered service listings with per-service pricing, and the guarded
/// submit. All draft state lives in a single [`SetupDraft`] so the
/// submit button can watch one validity predicate.
#[function_component(SetupForm)]
pub fn setup_form(props: &SetupFormProps) -> Html {
    let draft = use_state(SetupDraft::default);
    let submitting = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let suggestions = use_state(Vec::<AddressSuggestion>::new);
    let show_suggestions = use_state(|| false);

    let edit = |apply: fn(&mut SetupDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };

    let on_business_name = edit(|draft, value| draft.business_name = value);
    let on_service_area = edit(|draft, value| draft.service_area = value);

    let on_phone_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.phone = phone::format_phone(&input.value());
            draft.set(next);
        })
    };

    let on_phone_keydown = Callback::from(|e: KeyboardEvent| {
        // Shortcuts like copy and paste pass through untouched.
        if e.ctrl_key() || e.meta_key() || e.alt_key() {
            return;
        }
        let input: HtmlInputElement = e.target_unchecked_into();
        let at_field_start =
            input.value().is_empty() || matches!(input.selection_start(), Ok(Some(0)));
        if !phone::is_allowed_phone_key(&e.key(), at_field_start) {
            e.prevent_default();
        }
    });

    let select_type = |service_type: ServiceType| {
        let draft = draft.clone();
        let suggestions = suggestions.clone();
        let show_suggestions = show_suggestions.clone();
        Callback::from(move |_: Event| {
            let mut next = (*draft).clone();
            next.set_service_type(service_type);
            draft.set(next);
            suggestions.set(Vec::new());
            show_suggestions.set(false);
        })
    };

    let on_address_input = {
        let draft = draft.clone();
        let suggestions = suggestions.clone();
        let show_suggestions = show_suggestions.clone();
        let lookup = props.address_lookup.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            let found = suggestions_for(lookup.0.as_ref(), &value);
            show_suggestions.set(!found.is_empty());
            suggestions.set(found);
            let mut next = (*draft).clone();
            next.business_address = value;
            draft.set(next);
        })
    };

    let pick_suggestion = |description: String| {
        let draft = draft.clone();
        let show_suggestions = show_suggestions.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.business_address = description.clone();
            draft.set(next);
            show_suggestions.set(false);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let user = props.user.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !draft.is_valid() || *submitting {
                return;
            }
            let profile = (*draft).clone().into_profile(user.as_ref());
            let submitting = submitting.clone();
            let error = error.clone();
            let on_complete = on_complete.clone();
            spawn_local(async move {
                submitting.set(true);
                error.set(None);
                match profile::submit_profile(&profile).await {
                    Ok(()) => on_complete.emit(profile),
                    Err(submission_error) => {
                        error.set(Some(submission_error.to_string()));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Login))
    };

    let selected_count = draft.services.len();
    let earnings = catalog::estimated_earnings(draft.services.iter().map(String::as_str));
    let phone_hint = !draft.phone.trim().is_empty() && !phone::is_valid_phone(&draft.phone);

    html! {
        <div class="page setup-page">
            <header class="page-header">
                <span class="brand">{"Roadr Partner"}</span>
                <button type="button" class="btn btn-link" onclick={on_back} disabled={*submitting}>
                    {"Back to Login"}
                </button>
            </header>

            <main class="setup-main">
                <div class="card">
                    <h1>{"Set up your business"}</h1>
                    <p class="muted">
                        {"Tell customers what you offer. You can change everything later from the dashboard."}
                    </p>

                    {if let Some(message) = (*error).as_ref() {
                        html! { <div class="alert error">{message}</div> }
                    } else { html! {} }}

                    <form onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="business-name">{"Business Name"}</label>
                            <input
                                type="text"
                                id="business-name"
                                placeholder="e.g. Elite Auto Services"
                                value={draft.business_name.clone()}
                                oninput={on_business_name}
                                disabled={*submitting}
                            />
                        </div>

                        <div class="form-group">
                            <label for="phone">{"Business Phone"}</label>
                            <input
                                type="tel"
                                id="phone"
                                placeholder={phone::phone_placeholder()}
                                value={draft.phone.clone()}
                                oninput={on_phone_input}
                                onkeydown={on_phone_keydown}
                                disabled={*submitting}
                            />
                            {if phone_hint {
                                html! { <span class="field-hint">{"Enter 7 to 15 digits"}</span> }
                            } else { html! {} }}
                        </div>

                        <div class="form-group">
                            <label for="service-area">{"Service Area"}</label>
                            <input
                                type="text"
                                id="service-area"
                                placeholder="e.g. Dallas-Fort Worth"
                                value={draft.service_area.clone()}
                                oninput={on_service_area}
                                disabled={*submitting}
                            />
                        </div>

                        <fieldset class="form-group">
                            <legend>{"How do you operate?"}</legend>
                            <label class="radio">
                                <input
                                    type="radio"
                                    name="service-type"
                                    checked={draft.service_type == ServiceType::Mobile}
                                    onchange={select_type(ServiceType::Mobile)}
                                    disabled={*submitting}
                                />
                                <span>{"Mobile"}</span>
                                <span class="muted">{"I travel to customers"}</span>
                            </label>
                            <label class="radio">
                                <input
                                    type="radio"
                                    name="service-type"
                                    checked={draft.service_type == ServiceType::Shop}
                                    onchange={select_type(ServiceType::Shop)}
                                    disabled={*submitting}
                                />
                                <span>{"In-Shop"}</span>
                                <span class="muted">{"Customers come to my shop"}</span>
                            </label>
                        </fieldset>

                        {if draft.service_type == ServiceType::Shop {
                            html! {
                                <div class="form-group address-group">
                                    <label for="business-address">{"Business Address"}</label>
                                    <input
                                        type="text"
                                        id="business-address"
                                        placeholder="Start typing your address"
                                        autocomplete="off"
                                        value={draft.business_address.clone()}
                                        oninput={on_address_input}
                                        disabled={*submitting}
                                    />
                                    {if *show_suggestions {
                                        html! {
                                            <ul class="address-suggestions">
                                                {for suggestions.iter().map(|suggestion| html! {
                                                    <li
                                                        key={suggestion.id.clone()}
                                                        onclick={pick_suggestion(suggestion.description.clone())}
                                                    >
                                                        {&suggestion.description}
                                                    </li>
                                                })}
                                            </ul>
                                        }
                                    } else { html! {} }}
                                </div>
                            }
                        } else { html! {} }}

                        <div class="services-header">
                            <h3>{"Services Offered"}</h3>
                            <span class="muted">
                                {format!("{selected_count} selected")}
                            </span>
                        </div>

                        {for draft.grouped_offerings().into_iter().map(|(category, services)| {
                            html! {
                                <div class="service-category" key={category.label()}>
                                    <h4>{category.label()}</h4>
                                    {for services.into_iter().map(|service| {
                                        let selected = draft.is_selected(service.id);
                                        let toggle = {
                                            let draft = draft.clone();
                                            let id = service.id;
                                            Callback::from(move |_: Event| {
                                                let mut next = (*draft).clone();
                                                next.toggle_service(id);
                                                draft.set(next);
                                            })
                                        };
                                        html! {
                                            <div class="service-row" key={service.id}>
                                                <label class="checkbox">
                                                    <input
                                                        type="checkbox"
                                                        checked={selected}
                                                        onchange={toggle}
                                                        disabled={*submitting}
                                                    />
                                                    <span class="service-name">{service.name}</span>
                                                    <span class="muted">
                                                        {format!(
                                                            "avg. {}",
                                                            catalog::format_service_price(
                                                                service.base_price,
                                                                service.price_unit,
                                                            )
                                                        )}
                                                    </span>
                                                </label>
                                                {if selected {
                                                    pricing_inputs(&draft, service, *submitting)
                                                } else { html! {} }}
                                            </div>
                                        }
                                    })}
                                </div>
                            }
                        })}

                        {if selected_count > 0 {
                            html! {
                                <div class="earnings-estimate">
                                    {format!("Estimated earnings potential: ${earnings}/month")}
                                </div>
                            }
                        } else { html! {} }}

                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled={!draft.is_valid() || *submitting}
                        >
                            {if *submitting { "Saving..." } else { "Complete Setup" }}
                        </button>
                    </form>
                </div>
            </main>
        </div>
    }
}

/// Pricing inputs rendered under a selected service: price plus unit for
/// everything, and the hook-up fee / per-mile pair for towing-style
/// services.
fn pricing_inputs(
    draft: &UseStateHandle<SetupDraft>,
    service: &'static catalog::ServiceItem,
    submitting: bool,
) -> Html {
    let Some(entry) = draft.service_pricing.get(service.id) else {
        return html! {};
    };

    let on_price = {
        let draft = draft.clone();
        let id = service.id;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.set_price(id, &input.value());
            draft.set(next);
        })
    };

    if service.is_towing_style() {
        let on_mileage = {
            let draft = draft.clone();
            let id = service.id;
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*draft).clone();
                next.set_mileage_rate(id, &input.value());
                draft.set(next);
            })
        };
        html! {
            <div class="pricing-inputs towing">
                <label>
                    {"Hook Up Fee ($)"}
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        value={entry.price.clone()}
                        oninput={on_price}
                        disabled={submitting}
                    />
                </label>
                <label>
                    {"Per Mile Rate ($)"}
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        value={entry.mileage_rate.clone().unwrap_or_default()}
                        oninput={on_mileage}
                        disabled={submitting}
                    />
                </label>
            </div>
        }
    } else {
        let on_unit = {
            let draft = draft.clone();
            let id = service.id;
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                let mut next = (*draft).clone();
                next.set_unit(id, &select.value());
                draft.set(next);
            })
        };
        html! {
            <div class="pricing-inputs">
                <label>
                    {"Your Price ($)"}
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        value={entry.price.clone()}
                        oninput={on_price}
                        disabled={submitting}
                    />
                </label>
                <label>
                    {"Unit"}
                    <select onchange={on_unit} disabled={submitting}>
                        {for PRICE_UNIT_CHOICES.iter().map(|(value, label)| html! {
                            <option
                                value={*value}
                                selected={entry.unit == *value}
                            >
                                {*label}
                            </option>
                        })}
                    </select>
                </label>
            </div>
        }
    }
}
