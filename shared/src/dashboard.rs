//! Dashboard state: the provider's chosen services plus the mocked
//! business metrics, notifications, and recent activity shown on the
//! overview tabs.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, ServiceItem};
use crate::phone::format_phone;
use crate::session::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    #[default]
    Overview,
    Services,
    Analytics,
    Billing,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Overview,
        DashboardTab::Services,
        DashboardTab::Analytics,
        DashboardTab::Billing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Services => "Services",
            DashboardTab::Analytics => "Analytics",
            DashboardTab::Billing => "Billing",
        }
    }
}

/// A service the provider offers on the dashboard, carrying its own
/// locally-entered pricing. Deliberately independent from the pricing
/// captured by the setup form; the two records are not synchronized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardService {
    pub id: String,
    pub name: String,
    pub price: String,
    pub mileage_rate: Option<String>,
    pub description: String,
}

impl DashboardService {
    fn seeded_from(service: &ServiceItem) -> Self {
        DashboardService {
            id: service.id.to_string(),
            name: service.name.to_string(),
            price: String::new(),
            mileage_rate: service.is_towing_style().then(String::new),
            description: service.description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Request,
    Payment,
    Completion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub time: String,
    pub kind: NotificationKind,
    pub unread: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    ServiceCompleted,
    BookingRequest,
    PaymentReceived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Completed,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: u32,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub time: String,
    pub amount: Option<String>,
    pub status: ActivityStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverviewStats {
    pub total_jobs: u32,
    pub total_earnings: u32,
    pub average_rating: f32,
    pub total_reviews: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsStats {
    pub total_views: u32,
    pub leads_generated: u32,
    pub avg_response_hours: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingInfo {
    pub plan: String,
    pub monthly_price: String,
    pub next_billing_date: String,
    pub active: bool,
}

/// Header display values, with demo fallbacks for fields the user never
/// filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub company_name: String,
    pub phone: String,
    pub email: String,
    pub service_area: String,
    pub hours: String,
}

impl BusinessInfo {
    pub fn from_user(user: Option<&User>) -> Self {
        let company_name = user
            .map(|user| user.business_name.clone())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "ABC Auto Services".to_string());
        let phone = user
            .map(|user| user.phone.clone())
            .filter(|phone| !phone.trim().is_empty())
            .unwrap_or_else(|| "+1 555 123 4567".to_string());
        let email = user
            .map(|user| user.email.clone())
            .filter(|email| !email.trim().is_empty())
            .unwrap_or_else(|| "contact@abcauto.com".to_string());
        let service_area = user
            .and_then(|user| user.service_area.clone())
            .filter(|area| !area.trim().is_empty())
            .unwrap_or_else(|| "Los Angeles, CA".to_string());
        BusinessInfo {
            company_name,
            phone: format_phone(&phone),
            email,
            service_area,
            hours: "Mon-Fri 8:00 AM - 6:00 PM, Sat 9:00 AM - 4:00 PM".to_string(),
        }
    }
}

/// All state behind the dashboard page. Service management mutates the
/// `services` list and `selected` set; everything else is demo data
/// seeded once per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    pub services: Vec<DashboardService>,
    pub selected: Vec<String>,
    pub stats: OverviewStats,
    pub analytics: AnalyticsStats,
    pub billing: BillingInfo,
    pub notifications: Vec<Notification>,
    pub recent_activity: Vec<ActivityItem>,
}

impl Default for DashboardState {
    fn default() -> Self {
        DashboardState::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        DashboardState {
            services: Vec::new(),
            selected: Vec::new(),
            stats: OverviewStats {
                total_jobs: 156,
                total_earnings: 18_250,
                average_rating: 4.8,
                total_reviews: 142,
            },
            analytics: AnalyticsStats {
                total_views: 2_217,
                leads_generated: 314,
                avg_response_hours: 2.5,
            },
            billing: BillingInfo {
                plan: "Monthly Verification".to_string(),
                monthly_price: "$49.99/month".to_string(),
                next_billing_date: "January 1, 2025".to_string(),
                active: true,
            },
            notifications: demo_notifications(),
            recent_activity: demo_recent_activity(),
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|selected| selected == id)
    }

    pub fn has_service(&self, id: &str) -> bool {
        self.services.iter().any(|service| service.id == id)
    }

    /// Pure set-membership flip on the modal's selection set.
    pub fn toggle_selected(&mut self, id: &str) {
        if let Some(position) = self.selected.iter().position(|selected| selected == id) {
            self.selected.remove(position);
        } else {
            self.selected.push(id.to_string());
        }
    }

    /// Adds offerings for every id not already present, seeded from the
    /// catalog with empty price fields. Ids already present are left
    /// untouched, so re-adding is idempotent. Unknown ids are skipped.
    pub fn add_services<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for id in ids {
            if self.has_service(id) {
                continue;
            }
            if let Some(service) = catalog::service_by_id(id) {
                self.services.push(DashboardService::seeded_from(service));
                if !self.is_selected(id) {
                    self.selected.push(id.to_string());
                }
            }
        }
    }

    /// Removes a service from both the displayed list and the selection
    /// set.
    pub fn remove_service(&mut self, id: &str) {
        self.services.retain(|service| service.id != id);
        self.selected.retain(|selected| selected != id);
    }

    /// The "Add Selected Services" commit: the displayed list becomes
    /// the previously-kept services still selected, followed by fresh
    /// entries for newly selected ids. A previously added service that
    /// was deselected in the modal disappears on save.
    pub fn commit_selection(&mut self) {
        let selected = &self.selected;
        let mut next: Vec<DashboardService> = self
            .services
            .iter()
            .filter(|service| selected.iter().any(|id| *id == service.id))
            .cloned()
            .collect();
        for id in &self.selected {
            if next.iter().any(|service| &service.id == id) {
                continue;
            }
            if let Some(service) = catalog::service_by_id(id) {
                next.push(DashboardService::seeded_from(service));
            }
        }
        self.services = next;
    }

    pub fn unread_count(&self) -> usize {
        self.notifications
            .iter()
            .filter(|notification| notification.unread)
            .count()
    }
}

fn demo_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            title: "New Customer Request".to_string(),
            message: "John Smith requested an oil change service in Los Angeles".to_string(),
            time: "5 minutes ago".to_string(),
            kind: NotificationKind::Request,
            unread: true,
        },
        Notification {
            id: 2,
            title: "Payment Received".to_string(),
            message: "Payment of $75.00 received for brake inspection".to_string(),
            time: "2 hours ago".to_string(),
            kind: NotificationKind::Payment,
            unread: true,
        },
        Notification {
            id: 3,
            title: "Service Completed".to_string(),
            message: "Mike Davis confirmed tire rotation service completion".to_string(),
            time: "1 day ago".to_string(),
            kind: NotificationKind::Completion,
            unread: false,
        },
    ]
}

fn demo_recent_activity() -> Vec<ActivityItem> {
    vec![
        ActivityItem {
            id: 1,
            kind: ActivityKind::ServiceCompleted,
            title: "Service completed".to_string(),
            description: "Oil change for John Smith".to_string(),
            time: "2 hours ago".to_string(),
            amount: Some("+$45".to_string()),
            status: ActivityStatus::Completed,
        },
        ActivityItem {
            id: 2,
            kind: ActivityKind::BookingRequest,
            title: "New booking request".to_string(),
            description: "Brake service requested by Mike Johnson".to_string(),
            time: "4 hours ago".to_string(),
            amount: None,
            status: ActivityStatus::Pending,
        },
        ActivityItem {
            id: 3,
            kind: ActivityKind::PaymentReceived,
            title: "Payment received".to_string(),
            description: "Tire rotation payment from Sarah Davis".to_string(),
            time: "6 hours ago".to_string(),
            amount: Some("+$35".to_string()),
            status: ActivityStatus::Completed,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_remove_leaves_nothing_behind() {
        let mut state = DashboardState::new();
        state.add_services(["oil-change-synthetic"]);
        assert_eq!(state.services.len(), 1);
        assert!(state.is_selected("oil-change-synthetic"));

        state.remove_service("oil-change-synthetic");
        assert!(state.services.is_empty());
        assert!(state.selected.is_empty());
    }

    #[test]
    fn test_add_services_is_idempotent() {
        let mut state = DashboardState::new();
        state.add_services(["brake-inspection"]);
        state.services[0].price = "65".to_string();
        state.add_services(["brake-inspection", "tire-rotation"]);
        assert_eq!(state.services.len(), 2);
        // Re-adding left the existing entry untouched.
        assert_eq!(state.services[0].price, "65");
    }

    #[test]
    fn test_add_services_seeds_from_catalog() {
        let mut state = DashboardState::new();
        state.add_services(["towing-standard", "bogus-id"]);
        assert_eq!(state.services.len(), 1);
        let service = &state.services[0];
        assert_eq!(service.name, "Standard Towing");
        assert_eq!(service.price, "");
        assert_eq!(service.mileage_rate.as_deref(), Some(""));
    }

    #[test]
    fn test_toggle_selected_flips_membership() {
        let mut state = DashboardState::new();
        state.toggle_selected("oil-change-synthetic");
        assert!(state.is_selected("oil-change-synthetic"));
        state.toggle_selected("oil-change-synthetic");
        assert!(!state.is_selected("oil-change-synthetic"));
    }

    #[test]
    fn test_commit_selection_adds_new_and_drops_deselected() {
        let mut state = DashboardState::new();
        state.add_services(["oil-change-synthetic"]);
        state.services[0].price = "85".to_string();

        // Deselect the existing offering, pick a new one, save.
        state.toggle_selected("oil-change-synthetic");
        state.toggle_selected("brake-inspection");
        state.commit_selection();

        assert_eq!(state.services.len(), 1);
        assert_eq!(state.services[0].id, "brake-inspection");
    }

    #[test]
    fn test_commit_selection_keeps_edited_entries_for_kept_services() {
        let mut state = DashboardState::new();
        state.add_services(["oil-change-synthetic"]);
        state.services[0].price = "85".to_string();
        state.toggle_selected("tire-rotation");
        state.commit_selection();

        assert_eq!(state.services.len(), 2);
        assert_eq!(state.services[0].price, "85");
        assert_eq!(state.services[1].id, "tire-rotation");
    }

    #[test]
    fn test_unread_count() {
        let mut state = DashboardState::new();
        assert_eq!(state.unread_count(), 2);
        for notification in &mut state.notifications {
            notification.unread = false;
        }
        assert_eq!(state.unread_count(), 0);
    }

    #[test]
    fn test_business_info_fallbacks() {
        let info = BusinessInfo::from_user(None);
        assert_eq!(info.company_name, "ABC Auto Services");
        assert_eq!(info.phone, "+1 555 123 4567");
        assert_eq!(info.email, "contact@abcauto.com");
        assert_eq!(info.service_area, "Los Angeles, CA");
    }

    #[test]
    fn test_business_info_formats_user_phone() {
        let mut user = crate::session::User::placeholder("owner@elite.com");
        user.business_name = "Elite Auto".to_string();
        user.phone = "+15551234567".to_string();
        let info = BusinessInfo::from_user(Some(&user));
        assert_eq!(info.company_name, "Elite Auto");
        assert_eq!(info.phone, "+1 555 123 4567");
        assert_eq!(info.email, "owner@elite.com");
    }
}
