//! Setup-form draft state, validation, and the typed submit payload.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{self, ServiceCategory, ServiceItem, ServiceType};
use crate::session::User;

/// Unit assigned when a service is first selected.
pub const DEFAULT_PRICE_UNIT: &str = "per_service";

/// `(value, label)` choices for the pricing unit selector.
pub const PRICE_UNIT_CHOICES: [(&str, &str); 12] = [
    ("per_service", "Per Service"),
    ("per_hour", "Per Hour"),
    ("per_mile", "Per Mile"),
    ("per_vehicle", "Per Vehicle"),
    ("per_axle", "Per Axle"),
    ("per_pair", "Per Pair"),
    ("per_tire", "Per Tire"),
    ("per_repair", "Per Repair"),
    ("per_window", "Per Window"),
    ("per_caliper", "Per Caliper"),
    ("per_gallon", "Per Gallon"),
    ("per_session", "Per Session"),
];

/// Generic entries redundant with their category heading, hidden from
/// the setup form's service listings.
const LISTING_EXCLUDED_IDS: [&str; 1] = ["roadside-assistance"];

/// Provider-entered pricing for one selected service. `mileage_rate` is
/// present exactly for towing-style services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PricingEntry {
    pub price: String,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mileage_rate: Option<String>,
}

impl PricingEntry {
    /// The entry created when a service is toggled on: empty price,
    /// default unit, and an empty mileage rate for towing-style
    /// services.
    pub fn for_service(service: &ServiceItem) -> Self {
        PricingEntry {
            price: String::new(),
            unit: DEFAULT_PRICE_UNIT.to_string(),
            mileage_rate: service.is_towing_style().then(String::new),
        }
    }

    fn is_complete(&self, towing_style: bool) -> bool {
        let base = !self.price.trim().is_empty() && !self.unit.trim().is_empty();
        if towing_style {
            base && self
                .mileage_rate
                .as_deref()
                .is_some_and(|rate| !rate.trim().is_empty())
        } else {
            base
        }
    }
}

/// The concrete payload handed to the profile-submission collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub business_name: String,
    pub phone: String,
    pub service_area: String,
    pub business_address: String,
    pub service_type: ServiceType,
    pub services: Vec<String>,
    pub service_pricing: BTreeMap<String, PricingEntry>,
    pub email: String,
    pub owner_name: String,
}

/// In-progress business profile held in memory while the setup form is
/// open. Selected service ids and their pricing entries move together:
/// toggling a service off removes its entry, so no orphaned pricing can
/// outlive a deselection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SetupDraft {
    pub business_name: String,
    pub phone: String,
    pub service_area: String,
    pub business_address: String,
    pub service_type: ServiceType,
    pub services: Vec<String>,
    pub service_pricing: BTreeMap<String, PricingEntry>,
}

impl SetupDraft {
    pub fn is_selected(&self, id: &str) -> bool {
        self.services.iter().any(|selected| selected == id)
    }

    /// Flips selection for a catalog service. Selecting inserts a
    /// defaulted pricing entry; deselecting removes both the id and its
    /// entry. Re-selecting always starts from the defaults, never from
    /// stale values. Unknown ids are ignored.
    pub fn toggle_service(&mut self, id: &str) {
        if let Some(position) = self.services.iter().position(|selected| selected == id) {
            self.services.remove(position);
            self.service_pricing.remove(id);
        } else if let Some(service) = catalog::service_by_id(id) {
            self.services.push(id.to_string());
            self.service_pricing
                .insert(id.to_string(), PricingEntry::for_service(service));
        }
    }

    /// Pricing edits apply only to currently selected services; edits
    /// against deselected ids are dropped rather than creating orphans.
    pub fn set_price(&mut self, id: &str, value: &str) {
        if let Some(entry) = self.service_pricing.get_mut(id) {
            entry.price = value.to_string();
        }
    }

    pub fn set_unit(&mut self, id: &str, value: &str) {
        if let Some(entry) = self.service_pricing.get_mut(id) {
            entry.unit = value.to_string();
        }
    }

    pub fn set_mileage_rate(&mut self, id: &str, value: &str) {
        if let Some(entry) = self.service_pricing.get_mut(id) {
            entry.mileage_rate = Some(value.to_string());
        }
    }

    pub fn set_service_type(&mut self, service_type: ServiceType) {
        self.service_type = service_type;
    }

    /// The submission predicate. Submission stays disabled until this
    /// holds:
    /// - business name, phone and service area are non-empty;
    /// - at least one service is selected;
    /// - every selected service has a complete pricing entry, including
    ///   a mileage rate for towing-style services;
    /// - in-shop providers have entered a business address.
    pub fn is_valid(&self) -> bool {
        let pricing_complete = self.services.iter().all(|id| {
            let towing_style = catalog::service_by_id(id)
                .is_some_and(|service| service.is_towing_style());
            self.service_pricing
                .get(id)
                .is_some_and(|entry| entry.is_complete(towing_style))
        });
        let address_ok = self.service_type != ServiceType::Shop
            || !self.business_address.trim().is_empty();
        !self.business_name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.service_area.trim().is_empty()
            && !self.services.is_empty()
            && pricing_complete
            && address_ok
    }

    /// The offerings shown by the form: the catalog filtered to the
    /// current service type, grouped by category, with generic entries
    /// hidden from the listings.
    pub fn grouped_offerings(&self) -> Vec<(ServiceCategory, Vec<&'static ServiceItem>)> {
        catalog::group_by_category_for_type(self.service_type)
            .into_iter()
            .filter_map(|(category, services)| {
                let services: Vec<_> = services
                    .into_iter()
                    .filter(|service| !LISTING_EXCLUDED_IDS.contains(&service.id))
                    .collect();
                if services.is_empty() {
                    None
                } else {
                    Some((category, services))
                }
            })
            .collect()
    }

    /// Merges the draft with the identity of the signed-up user into the
    /// typed submit payload.
    pub fn into_profile(self, user: Option<&User>) -> ProfileDraft {
        ProfileDraft {
            business_name: self.business_name,
            phone: self.phone,
            service_area: self.service_area,
            business_address: self.business_address,
            service_type: self.service_type,
            services: self.services,
            service_pricing: self.service_pricing,
            email: user.map(|user| user.email.clone()).unwrap_or_default(),
            owner_name: user.map(User::owner_name).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::User;

    fn filled_mobile_draft() -> SetupDraft {
        let mut draft = SetupDraft {
            business_name: "Elite Auto".to_string(),
            phone: "+15551234567".to_string(),
            service_area: "Dallas".to_string(),
            ..SetupDraft::default()
        };
        draft.toggle_service("battery-jump-start");
        draft.set_price("battery-jump-start", "45");
        draft
    }

    #[test]
    fn test_valid_mobile_draft_passes() {
        let draft = filled_mobile_draft();
        assert_eq!(draft.service_type, ServiceType::Mobile);
        assert!(draft.is_valid());
    }

    #[test]
    fn test_missing_pricing_blocks_submission() {
        let mut draft = filled_mobile_draft();
        draft.service_pricing.clear();
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_blank_required_fields_block_submission() {
        for field in ["business_name", "phone", "service_area"] {
            let mut draft = filled_mobile_draft();
            match field {
                "business_name" => draft.business_name.clear(),
                "phone" => draft.phone.clear(),
                _ => draft.service_area.clear(),
            }
            assert!(!draft.is_valid(), "expected invalid with blank {field}");
        }
    }

    #[test]
    fn test_no_services_blocks_submission() {
        let mut draft = filled_mobile_draft();
        draft.toggle_service("battery-jump-start");
        assert!(draft.services.is_empty());
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_towing_service_requires_mileage_rate() {
        let mut draft = filled_mobile_draft();
        draft.toggle_service("towing-standard");
        draft.set_price("towing-standard", "95");
        // Price and unit set, mileage rate still empty.
        assert!(!draft.is_valid());
        draft.set_mileage_rate("towing-standard", "3.50");
        assert!(draft.is_valid());
    }

    #[test]
    fn test_shop_requires_business_address() {
        let mut draft = filled_mobile_draft();
        draft.set_service_type(ServiceType::Shop);
        assert!(!draft.is_valid());
        draft.business_address = "123 Main St, Dallas, TX 75201".to_string();
        assert!(draft.is_valid());
    }

    #[test]
    fn test_toggle_on_seeds_default_pricing() {
        let mut draft = SetupDraft::default();
        draft.toggle_service("towing-standard");
        let entry = &draft.service_pricing["towing-standard"];
        assert_eq!(entry.price, "");
        assert_eq!(entry.unit, DEFAULT_PRICE_UNIT);
        assert_eq!(entry.mileage_rate.as_deref(), Some(""));

        draft.toggle_service("oil-change-synthetic");
        let entry = &draft.service_pricing["oil-change-synthetic"];
        assert_eq!(entry.mileage_rate, None);
    }

    #[test]
    fn test_toggle_off_removes_pricing_entry() {
        let mut draft = SetupDraft::default();
        draft.toggle_service("battery-jump-start");
        draft.set_price("battery-jump-start", "45");
        draft.toggle_service("battery-jump-start");
        assert!(draft.service_pricing.is_empty());
    }

    #[test]
    fn test_retoggle_resets_pricing_to_defaults() {
        let mut draft = SetupDraft::default();
        draft.toggle_service("battery-jump-start");
        draft.set_price("battery-jump-start", "45");
        draft.set_unit("battery-jump-start", "per_hour");
        draft.toggle_service("battery-jump-start");
        draft.toggle_service("battery-jump-start");
        let entry = &draft.service_pricing["battery-jump-start"];
        assert_eq!(entry.price, "");
        assert_eq!(entry.unit, DEFAULT_PRICE_UNIT);
    }

    #[test]
    fn test_pricing_edit_for_deselected_service_is_dropped() {
        let mut draft = SetupDraft::default();
        draft.set_price("battery-jump-start", "45");
        assert!(draft.service_pricing.is_empty());
    }

    #[test]
    fn test_unknown_service_id_is_ignored() {
        let mut draft = SetupDraft::default();
        draft.toggle_service("no-such-service");
        assert!(draft.services.is_empty());
        assert!(draft.service_pricing.is_empty());
    }

    #[test]
    fn test_grouped_offerings_hide_generic_roadside_entry() {
        let draft = SetupDraft::default();
        for (_, services) in draft.grouped_offerings() {
            assert!(!services.iter().any(|service| service.id == "roadside-assistance"));
        }
    }

    #[test]
    fn test_grouped_offerings_follow_service_type() {
        let mut draft = SetupDraft::default();
        draft.set_service_type(ServiceType::Shop);
        assert!(!draft
            .grouped_offerings()
            .iter()
            .any(|(category, _)| *category == ServiceCategory::Roadside));
    }

    #[test]
    fn test_into_profile_merges_identity() {
        let profile = filled_mobile_draft().into_profile(Some(&User::placeholder("owner@elite.com")));
        assert_eq!(profile.email, "owner@elite.com");
        assert_eq!(profile.owner_name, "New Business");
        assert_eq!(profile.services, vec!["battery-jump-start".to_string()]);
    }

    #[test]
    fn test_into_profile_owner_name_falls_back_to_email_local_part() {
        let mut user = User::placeholder("owner@elite.com");
        user.business_name.clear();
        let profile = filled_mobile_draft().into_profile(Some(&user));
        assert_eq!(profile.owner_name, "owner");
    }

    #[test]
    fn test_into_profile_without_user() {
        let profile = filled_mobile_draft().into_profile(None);
        assert_eq!(profile.email, "");
        assert_eq!(profile.owner_name, "");
    }
}
