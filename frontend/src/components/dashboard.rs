use shared::dashboard::{ActivityStatus, BusinessInfo};
use shared::{DashboardState, DashboardTab, User};
use shared::catalog;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub user: User,
    pub on_logout: Callback<()>,
}

/// Provider dashboard: header with notifications and the user menu,
/// plus the overview, services, analytics, and billing tabs. Service
/// management runs through [`DashboardState`]; the rest of the page is
/// demo data seeded once per session.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let state = {
        let services = props.user.services.clone();
        use_state(move || {
            let mut state = DashboardState::new();
            if let Some(ids) = &services {
                state.add_services(ids.iter().map(String::as_str));
            }
            state
        })
    };
    let active_tab = use_state(DashboardTab::default);
    let show_notifications = use_state(|| false);
    let show_user_menu = use_state(|| false);
    let show_service_modal = use_state(|| false);

    let business = BusinessInfo::from_user(Some(&props.user));

    let toggle_notifications = {
        let show_notifications = show_notifications.clone();
        let show_user_menu = show_user_menu.clone();
        Callback::from(move |_: MouseEvent| {
            show_notifications.set(!*show_notifications);
            show_user_menu.set(false);
        })
    };

    let toggle_user_menu = {
        let show_user_menu = show_user_menu.clone();
        let show_notifications = show_notifications.clone();
        Callback::from(move |_: MouseEvent| {
            show_user_menu.set(!*show_user_menu);
            show_notifications.set(false);
        })
    };

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    let select_tab = |tab: DashboardTab| {
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| active_tab.set(tab))
    };

    let open_service_modal = {
        let show_service_modal = show_service_modal.clone();
        Callback::from(move |_: MouseEvent| show_service_modal.set(true))
    };

    let close_service_modal = {
        let show_service_modal = show_service_modal.clone();
        Callback::from(move |_: MouseEvent| show_service_modal.set(false))
    };

    let commit_services = {
        let state = state.clone();
        let show_service_modal = show_service_modal.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            next.commit_selection();
            state.set(next);
            show_service_modal.set(false);
        })
    };

    html! {
        <div class="page dashboard-page">
            <header class="dashboard-header">
                <div class="header-identity">
                    <span class="brand">{"Roadr Partner"}</span>
                    <div class="business-summary">
                        <strong>{&business.company_name}</strong>
                        <span class="verified-badge" title="Verified provider">{"✓ Verified"}</span>
                        <span class="muted">{&business.service_area}</span>
                    </div>
                </div>

                <div class="header-actions">
                    <button type="button" class="icon-btn" onclick={toggle_notifications}>
                        {"🔔"}
                        {if state.unread_count() > 0 {
                            html! { <span class="badge">{state.unread_count()}</span> }
                        } else { html! {} }}
                    </button>
                    {if *show_notifications {
                        notifications_popover(&state)
                    } else { html! {} }}

                    <button type="button" class="icon-btn" onclick={toggle_user_menu}>
                        {"👤"}
                    </button>
                    {if *show_user_menu {
                        html! {
                            <div class="popover user-menu">
                                <div class="user-menu-email muted">{&business.email}</div>
                                <button type="button" class="btn btn-link" onclick={on_logout}>
                                    {"Sign Out"}
                                </button>
                            </div>
                        }
                    } else { html! {} }}
                </div>
            </header>

            <nav class="tab-list" role="tablist">
                {for DashboardTab::ALL.iter().map(|tab| html! {
                    <button
                        type="button"
                        key={tab.label()}
                        class={classes!("tab", (*active_tab == *tab).then_some("active"))}
                        onclick={select_tab(*tab)}
                    >
                        {tab.label()}
                    </button>
                })}
            </nav>

            <main class="dashboard-main">
                {match *active_tab {
                    DashboardTab::Overview => overview_tab(&state, &business),
                    DashboardTab::Services => services_tab(&state, open_service_modal),
                    DashboardTab::Analytics => analytics_tab(&state),
                    DashboardTab::Billing => billing_tab(&state),
                }}
            </main>

            {if *show_service_modal {
                service_modal(&state, close_service_modal, commit_services)
            } else { html! {} }}
        </div>
    }
}

fn overview_tab(state: &UseStateHandle<DashboardState>, business: &BusinessInfo) -> Html {
    let stats = state.stats;
    html! {
        <div class="tab-panel overview">
            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-value">{stats.total_jobs}</span>
                    <span class="stat-label">{"Total Jobs"}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{format!("${}", thousands(stats.total_earnings))}</span>
                    <span class="stat-label">{"Total Earnings"}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{format!("{:.1}", stats.average_rating)}</span>
                    <span class="stat-label">{"Average Rating"}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{stats.total_reviews}</span>
                    <span class="stat-label">{"Reviews"}</span>
                </div>
            </div>

            <div class="card business-info">
                <h3>{"Business Information"}</h3>
                <dl>
                    <dt>{"Company"}</dt><dd>{&business.company_name}</dd>
                    <dt>{"Phone"}</dt><dd>{&business.phone}</dd>
                    <dt>{"Email"}</dt><dd>{&business.email}</dd>
                    <dt>{"Service Area"}</dt><dd>{&business.service_area}</dd>
                    <dt>{"Hours"}</dt><dd>{&business.hours}</dd>
                </dl>
            </div>

            <div class="card recent-activity">
                <h3>{"Recent Activity"}</h3>
                <ul>
                    {for state.recent_activity.iter().map(|item| html! {
                        <li key={item.id} class="activity-row">
                            <div class="activity-text">
                                <strong>{&item.title}</strong>
                                <span class="muted">{&item.description}</span>
                                <span class="muted">{&item.time}</span>
                            </div>
                            <div class="activity-meta">
                                {if let Some(amount) = &item.amount {
                                    html! { <span class="amount">{amount}</span> }
                                } else { html! {} }}
                                <span class={classes!(
                                    "status",
                                    match item.status {
                                        ActivityStatus::Completed => "completed",
                                        ActivityStatus::Pending => "pending",
                                    }
                                )}>
                                    {match item.status {
                                        ActivityStatus::Completed => "Completed",
                                        ActivityStatus::Pending => "Pending",
                                    }}
                                </span>
                            </div>
                        </li>
                    })}
                </ul>
            </div>
        </div>
    }
}

fn services_tab(state: &UseStateHandle<DashboardState>, open_modal: Callback<MouseEvent>) -> Html {
    html! {
        <div class="tab-panel services">
            <div class="panel-header">
                <h3>{"Your Services"}</h3>
                <button type="button" class="btn btn-primary" onclick={open_modal}>
                    {"Add Services"}
                </button>
            </div>

            {if state.services.is_empty() {
                html! {
                    <p class="muted empty-state">
                        {"No services yet. Add the services you offer to start receiving requests."}
                    </p>
                }
            } else {
                html! {
                    <ul class="service-list">
                        {for state.services.iter().map(|service| {
                            let remove = {
                                let state = state.clone();
                                let id = service.id.clone();
                                Callback::from(move |_: MouseEvent| {
                                    let mut next = (*state).clone();
                                    next.remove_service(&id);
                                    state.set(next);
                                })
                            };
                            html! {
                                <li key={service.id.clone()} class="service-row">
                                    <div class="service-text">
                                        <strong>{&service.name}</strong>
                                        <span class="muted">{&service.description}</span>
                                    </div>
                                    <div class="service-meta">
                                        <span class="price">{price_display(service)}</span>
                                        <button type="button" class="btn btn-link danger" onclick={remove}>
                                            {"Remove"}
                                        </button>
                                    </div>
                                </li>
                            }
                        })}
                    </ul>
                }
            }}
        </div>
    }
}

fn analytics_tab(state: &UseStateHandle<DashboardState>) -> Html {
    let analytics = state.analytics;
    html! {
        <div class="tab-panel analytics">
            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-value">{thousands(analytics.total_views)}</span>
                    <span class="stat-label">{"Profile Views"}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{analytics.leads_generated}</span>
                    <span class="stat-label">{"Leads Generated"}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{format!("{:.1} hrs", analytics.avg_response_hours)}</span>
                    <span class="stat-label">{"Avg Response Time"}</span>
                </div>
            </div>
        </div>
    }
}

fn billing_tab(state: &UseStateHandle<DashboardState>) -> Html {
    let billing = &state.billing;
    html! {
        <div class="tab-panel billing">
            <div class="card billing-card">
                <div class="panel-header">
                    <h3>{&billing.plan}</h3>
                    {if billing.active {
                        html! { <span class="status completed">{"Active"}</span> }
                    } else {
                        html! { <span class="status pending">{"Inactive"}</span> }
                    }}
                </div>
                <p class="price">{&billing.monthly_price}</p>
                <p class="muted">{format!("Next billing date: {}", billing.next_billing_date)}</p>
                <p class="muted">{"Payment method: •••• •••• •••• 4242"}</p>
            </div>
        </div>
    }
}

fn notifications_popover(state: &UseStateHandle<DashboardState>) -> Html {
    html! {
        <div class="popover notifications">
            <h4>{"Notifications"}</h4>
            <ul>
                {for state.notifications.iter().map(|notification| html! {
                    <li
                        key={notification.id}
                        class={classes!("notification", notification.unread.then_some("unread"))}
                    >
                        <strong>{&notification.title}</strong>
                        <span>{&notification.message}</span>
                        <span class="muted">{&notification.time}</span>
                    </li>
                })}
            </ul>
        </div>
    }
}

fn service_modal(
    state: &UseStateHandle<DashboardState>,
    on_close: Callback<MouseEvent>,
    on_commit: Callback<MouseEvent>,
) -> Html {
    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="panel-header">
                    <h3>{"Add Services"}</h3>
                    <button type="button" class="icon-btn" onclick={on_close.clone()}>{"✕"}</button>
                </div>

                <div class="modal-body">
                    {for catalog::group_by_category().into_iter().map(|(category, services)| html! {
                        <div class="service-category" key={category.label()}>
                            <h4>{category.label()}</h4>
                            {for services.into_iter().map(|service| {
                                let toggle = {
                                    let state = state.clone();
                                    let id = service.id;
                                    Callback::from(move |_: Event| {
                                        let mut next = (*state).clone();
                                        next.toggle_selected(id);
                                        state.set(next);
                                    })
                                };
                                html! {
                                    <label class="checkbox" key={service.id}>
                                        <input
                                            type="checkbox"
                                            checked={state.is_selected(service.id)}
                                            onchange={toggle}
                                        />
                                        <span>{service.name}</span>
                                        <span class="muted">{service.description}</span>
                                    </label>
                                }
                            })}
                        </div>
                    })}
                </div>

                <div class="modal-footer">
                    <button type="button" class="btn" onclick={on_close}>{"Cancel"}</button>
                    <button type="button" class="btn btn-primary" onclick={on_commit}>
                        {"Add Selected Services"}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn price_display(service: &shared::DashboardService) -> String {
    if service.price.trim().is_empty() {
        return "Price not set".to_string();
    }
    match service.mileage_rate.as_deref() {
        Some(rate) if !rate.trim().is_empty() => {
            format!("${} + ${rate}/mile", service.price)
        }
        _ => format!("${}", service.price),
    }
}

fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_thousands_grouping() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(18_250), "18,250");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[wasm_bindgen_test]
    fn test_price_display_variants() {
        let mut service = shared::DashboardService {
            id: "towing-standard".to_string(),
            name: "Standard Towing".to_string(),
            price: String::new(),
            mileage_rate: Some(String::new()),
            description: String::new(),
        };
        assert_eq!(price_display(&service), "Price not set");
        service.price = "95".to_string();
        assert_eq!(price_display(&service), "$95");
        service.mileage_rate = Some("3.50".to_string());
        assert_eq!(price_display(&service), "$95 + $3.50/mile");
    }
}
