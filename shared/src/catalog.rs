//! The fixed catalog of offerable automotive services.
//!
//! The table is a process-lifetime constant: ids, names, categories and
//! default pricing metadata are never mutated at runtime. Both the setup
//! form and the dashboard read from it through the lookup functions here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Price unit marking a two-part (hook-up fee plus per-mile) service.
pub const MILEAGE_PRICED_UNIT: &str = "base fee + per mile";

/// How a provider operates: traveling to customers or hosting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    #[default]
    Mobile,
    Shop,
}

impl ServiceType {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Mobile => "Mobile Service",
            ServiceType::Shop => "In-Shop Service",
        }
    }
}

/// The 18 fixed service categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCategory {
    Roadside,
    Engine,
    OilAndFluids,
    CoolingSystem,
    Brakes,
    TiresAndWheels,
    SuspensionAndSteering,
    Transmission,
    ElectricalAndBattery,
    AcAndHeating,
    FiltersAndMaintenance,
    ExhaustSystem,
    InspectionAndTesting,
    DetailingAndAppearance,
    GlassAndWindows,
    PerformanceAndModifications,
    FleetAndCommercial,
    FuelServices,
}

impl ServiceCategory {
    /// All categories in display order.
    pub const ALL: [ServiceCategory; 18] = [
        ServiceCategory::Roadside,
        ServiceCategory::Engine,
        ServiceCategory::OilAndFluids,
        ServiceCategory::CoolingSystem,
        ServiceCategory::Brakes,
        ServiceCategory::TiresAndWheels,
        ServiceCategory::SuspensionAndSteering,
        ServiceCategory::Transmission,
        ServiceCategory::ElectricalAndBattery,
        ServiceCategory::AcAndHeating,
        ServiceCategory::FiltersAndMaintenance,
        ServiceCategory::ExhaustSystem,
        ServiceCategory::InspectionAndTesting,
        ServiceCategory::DetailingAndAppearance,
        ServiceCategory::GlassAndWindows,
        ServiceCategory::PerformanceAndModifications,
        ServiceCategory::FleetAndCommercial,
        ServiceCategory::FuelServices,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Roadside => "Roadside",
            ServiceCategory::Engine => "Engine",
            ServiceCategory::OilAndFluids => "Oil & Fluids",
            ServiceCategory::CoolingSystem => "Cooling System",
            ServiceCategory::Brakes => "Brakes",
            ServiceCategory::TiresAndWheels => "Tires & Wheels",
            ServiceCategory::SuspensionAndSteering => "Suspension & Steering",
            ServiceCategory::Transmission => "Transmission",
            ServiceCategory::ElectricalAndBattery => "Electrical & Battery",
            ServiceCategory::AcAndHeating => "A/C & Heating",
            ServiceCategory::FiltersAndMaintenance => "Filters & Maintenance",
            ServiceCategory::ExhaustSystem => "Exhaust System",
            ServiceCategory::InspectionAndTesting => "Inspection & Testing",
            ServiceCategory::DetailingAndAppearance => "Detailing & Appearance",
            ServiceCategory::GlassAndWindows => "Glass & Windows",
            ServiceCategory::PerformanceAndModifications => "Performance & Modifications",
            ServiceCategory::FleetAndCommercial => "Fleet & Commercial",
            ServiceCategory::FuelServices => "Fuel Services",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog entry. Immutable once the table is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ServiceItem {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ServiceCategory,
    pub description: &'static str,
    pub base_price: u32,
    pub price_unit: &'static str,
}

impl ServiceItem {
    /// Towing-style services carry a hook-up fee plus a per-mile rate
    /// and require two-part pricing input everywhere they appear.
    pub fn is_towing_style(&self) -> bool {
        self.price_unit == MILEAGE_PRICED_UNIT
    }
}

const fn svc(
    id: &'static str,
    name: &'static str,
    category: ServiceCategory,
    description: &'static str,
    base_price: u32,
    price_unit: &'static str,
) -> ServiceItem {
    ServiceItem { id, name, category, description, base_price, price_unit }
}

use ServiceCategory as C;

/// Every service a provider can offer, with marketplace default pricing.
pub static SERVICES: &[ServiceItem] = &[
    // Roadside assistance (mobile only)
    svc("roadside-assistance", "Roadside Assistance", C::Roadside, "General roadside assistance services", 85, "per call"),
    svc("battery-jump-start", "Battery Jump Start", C::Roadside, "Jump start dead batteries on-site", 45, "per service"),
    svc("tire-change-spare", "Tire Change – Spare Tire", C::Roadside, "Install spare tire for flat tires", 65, "per tire"),
    svc("tire-change-new", "Tire Change – New Tire", C::Roadside, "Install new tire replacement", 85, "per tire"),
    svc("lockout-service", "Vehicle Lockout Service", C::Roadside, "Unlock vehicles for locked out customers", 75, "per service"),
    svc("key-replacement", "Lost Key Replacement", C::Roadside, "Key replacement and lockout services", 125, "per service"),
    svc("towing-standard", "Standard Towing", C::Roadside, "Standard vehicle towing services", 95, MILEAGE_PRICED_UNIT),
    svc("towing-flatbed", "Flatbed Towing", C::Roadside, "Flatbed towing for special vehicles", 135, MILEAGE_PRICED_UNIT),
    svc("winch-out", "Winch Out Service", C::Roadside, "Recovery service for stuck vehicles", 125, "per service"),
    // Engine
    svc("engine-diagnostics", "Engine Diagnostics", C::Engine, "Complete engine diagnostic and trouble code analysis", 125, "per service"),
    svc("engine-tune-up", "Engine Tune-Up", C::Engine, "Complete engine tune-up service", 185, "per service"),
    svc("engine-repair", "Engine Repair", C::Engine, "General engine repair services", 145, "per hour"),
    svc("timing-belt", "Timing Belt Replacement", C::Engine, "Timing belt and related components replacement", 485, "per service"),
    svc("spark-plugs", "Spark Plug Replacement", C::Engine, "Spark plug replacement service", 125, "per service"),
    svc("fuel-injector-cleaning", "Fuel Injector Cleaning", C::Engine, "Fuel system and injector cleaning service", 165, "per service"),
    // Oil & fluids
    svc("oil-change-synthetic", "Synthetic Oil Change", C::OilAndFluids, "Full synthetic oil change service", 85, "per service"),
    svc("oil-change-conventional", "Conventional Oil Change", C::OilAndFluids, "Conventional oil change service", 65, "per service"),
    svc("oil-change-blend", "Synthetic Blend Oil Change", C::OilAndFluids, "Synthetic blend oil change service", 75, "per service"),
    svc("transmission-fluid", "Transmission Fluid Change", C::OilAndFluids, "Transmission fluid change and filter replacement", 185, "per service"),
    svc("brake-fluid", "Brake Fluid Change", C::OilAndFluids, "Brake fluid flush and replacement", 95, "per service"),
    svc("power-steering-fluid", "Power Steering Fluid", C::OilAndFluids, "Power steering fluid change", 85, "per service"),
    svc("differential-fluid", "Differential Fluid Change", C::OilAndFluids, "Differential fluid change service", 125, "per service"),
    // Cooling system
    svc("coolant-flush", "Coolant System Flush", C::CoolingSystem, "Complete cooling system flush and refill", 145, "per service"),
    svc("radiator-repair", "Radiator Repair", C::CoolingSystem, "Radiator repair and replacement", 285, "per service"),
    svc("thermostat-replacement", "Thermostat Replacement", C::CoolingSystem, "Engine thermostat replacement", 165, "per service"),
    svc("water-pump", "Water Pump Replacement", C::CoolingSystem, "Water pump replacement service", 385, "per service"),
    svc("radiator-hoses", "Radiator Hose Replacement", C::CoolingSystem, "Radiator hose replacement", 125, "per service"),
    // Brakes
    svc("brake-pads-front", "Front Brake Pads", C::Brakes, "Front brake pad replacement", 185, "per axle"),
    svc("brake-pads-rear", "Rear Brake Pads", C::Brakes, "Rear brake pad replacement", 165, "per axle"),
    svc("brake-rotors-front", "Front Brake Rotors", C::Brakes, "Front brake rotor replacement", 285, "per axle"),
    svc("brake-rotors-rear", "Rear Brake Rotors", C::Brakes, "Rear brake rotor replacement", 245, "per axle"),
    svc("brake-inspection", "Brake System Inspection", C::Brakes, "Complete brake system inspection", 65, "per service"),
    svc("brake-caliper", "Brake Caliper Service", C::Brakes, "Brake caliper repair or replacement", 245, "per caliper"),
    // Tires & wheels
    svc("tire-mounting-balancing", "Tire Mount & Balance", C::TiresAndWheels, "Tire mounting and balancing service", 35, "per tire"),
    svc("tire-rotation", "Tire Rotation", C::TiresAndWheels, "Tire rotation service", 45, "per vehicle"),
    svc("tire-repair", "Tire Repair/Patch", C::TiresAndWheels, "Tire puncture repair and patching", 25, "per tire"),
    svc("wheel-alignment", "Wheel Alignment", C::TiresAndWheels, "Front-end or 4-wheel alignment", 125, "per service"),
    svc("tire-pressure-monitoring", "TPMS Service", C::TiresAndWheels, "Tire pressure monitoring system service", 85, "per service"),
    svc("new-tire-sales", "New Tire Sales", C::TiresAndWheels, "New tire sales with installation", 145, "per tire"),
    svc("used-tire-sales", "Used Tire Sales", C::TiresAndWheels, "Used tire sales with installation", 85, "per tire"),
    // Suspension & steering
    svc("shock-absorbers", "Shock Absorber Replacement", C::SuspensionAndSteering, "Shock absorber replacement service", 285, "per pair"),
    svc("struts", "Strut Replacement", C::SuspensionAndSteering, "Strut assembly replacement", 385, "per pair"),
    svc("tie-rod-ends", "Tie Rod End Replacement", C::SuspensionAndSteering, "Tie rod end replacement", 165, "per service"),
    svc("ball-joints", "Ball Joint Replacement", C::SuspensionAndSteering, "Ball joint replacement service", 245, "per service"),
    svc("sway-bar-links", "Sway Bar Links", C::SuspensionAndSteering, "Sway bar link replacement", 125, "per service"),
    // Transmission
    svc("transmission-service", "Transmission Service", C::Transmission, "Complete transmission service", 245, "per service"),
    svc("transmission-repair", "Transmission Repair", C::Transmission, "Transmission repair services", 185, "per hour"),
    svc("clutch-replacement", "Clutch Replacement", C::Transmission, "Manual transmission clutch replacement", 1285, "per service"),
    svc("cv-joint", "CV Joint Replacement", C::Transmission, "CV joint and axle replacement", 385, "per service"),
    // Electrical & battery
    svc("battery-replacement", "Battery Replacement", C::ElectricalAndBattery, "Car battery replacement service", 185, "per service"),
    svc("alternator-replacement", "Alternator Replacement", C::ElectricalAndBattery, "Alternator replacement service", 485, "per service"),
    svc("starter-replacement", "Starter Replacement", C::ElectricalAndBattery, "Starter motor replacement", 385, "per service"),
    svc("electrical-diagnostics", "Electrical Diagnostics", C::ElectricalAndBattery, "Electrical system diagnostics", 125, "per hour"),
    svc("wiring-repair", "Wiring Repair", C::ElectricalAndBattery, "Electrical wiring repair service", 145, "per hour"),
    // A/C & heating
    svc("ac-recharge", "A/C Recharge", C::AcAndHeating, "Air conditioning refrigerant recharge", 125, "per service"),
    svc("ac-repair", "A/C System Repair", C::AcAndHeating, "Air conditioning system repair", 185, "per hour"),
    svc("heater-repair", "Heater Repair", C::AcAndHeating, "Heating system repair service", 165, "per hour"),
    svc("cabin-air-filter", "Cabin Air Filter", C::AcAndHeating, "Cabin air filter replacement", 45, "per service"),
    // Filters & maintenance
    svc("air-filter", "Engine Air Filter", C::FiltersAndMaintenance, "Engine air filter replacement", 35, "per service"),
    svc("fuel-filter", "Fuel Filter Replacement", C::FiltersAndMaintenance, "Fuel filter replacement service", 85, "per service"),
    svc("pcv-valve", "PCV Valve Replacement", C::FiltersAndMaintenance, "PCV valve replacement", 45, "per service"),
    svc("belts-hoses", "Belts & Hoses Inspection", C::FiltersAndMaintenance, "Belt and hose inspection and replacement", 125, "per service"),
    // Exhaust system
    svc("muffler-replacement", "Muffler Replacement", C::ExhaustSystem, "Muffler replacement service", 285, "per service"),
    svc("catalytic-converter", "Catalytic Converter", C::ExhaustSystem, "Catalytic converter replacement", 885, "per service"),
    svc("exhaust-pipe-repair", "Exhaust Pipe Repair", C::ExhaustSystem, "Exhaust pipe repair and replacement", 185, "per service"),
    // Inspection & testing
    svc("state-inspection", "State Safety Inspection", C::InspectionAndTesting, "Official state safety inspection", 25, "per service"),
    svc("emissions-test", "Emissions Testing", C::InspectionAndTesting, "Vehicle emissions testing", 35, "per service"),
    svc("pre-purchase-inspection", "Pre-Purchase Inspection", C::InspectionAndTesting, "Comprehensive pre-purchase vehicle inspection", 165, "per service"),
    // Detailing & appearance
    svc("basic-wash", "Basic Car Wash", C::DetailingAndAppearance, "Basic exterior car wash", 25, "per vehicle"),
    svc("full-detail", "Full Detailing Service", C::DetailingAndAppearance, "Complete interior and exterior detailing", 285, "per vehicle"),
    svc("interior-cleaning", "Interior Deep Clean", C::DetailingAndAppearance, "Deep interior cleaning service", 125, "per vehicle"),
    svc("wax-polish", "Wax & Polish", C::DetailingAndAppearance, "Vehicle waxing and polishing service", 85, "per vehicle"),
    // Glass & windows
    svc("windshield-replacement", "Windshield Replacement", C::GlassAndWindows, "Complete windshield replacement", 385, "per service"),
    svc("windshield-repair", "Windshield Chip Repair", C::GlassAndWindows, "Windshield chip and crack repair", 85, "per repair"),
    svc("window-tinting", "Window Tinting", C::GlassAndWindows, "Professional window tinting service", 285, "per vehicle"),
    svc("window-repair", "Window Repair", C::GlassAndWindows, "Side window repair and replacement", 185, "per window"),
    // Performance & modifications
    svc("performance-tuning", "Performance Tuning", C::PerformanceAndModifications, "Engine performance tuning and optimization", 285, "per service"),
    svc("cold-air-intake", "Cold Air Intake Install", C::PerformanceAndModifications, "Cold air intake system installation", 185, "per service"),
    svc("exhaust-upgrade", "Performance Exhaust", C::PerformanceAndModifications, "Performance exhaust system installation", 485, "per service"),
    // Fleet & commercial
    svc("fleet-maintenance", "Fleet Maintenance", C::FleetAndCommercial, "Commercial fleet maintenance services", 125, "per hour"),
    svc("dot-inspection", "DOT Inspection", C::FleetAndCommercial, "Department of Transportation vehicle inspection", 85, "per vehicle"),
    svc("commercial-diagnostics", "Commercial Vehicle Diagnostics", C::FleetAndCommercial, "Heavy duty vehicle diagnostics", 165, "per hour"),
    // Fuel services (mobile only)
    svc("fuel-delivery", "Emergency Fuel Delivery", C::FuelServices, "Emergency fuel delivery service", 45, "plus fuel cost"),
    svc("premium-gasoline", "Premium Gasoline Delivery", C::FuelServices, "Premium grade gasoline delivery", 50, "plus fuel cost"),
    svc("regular-gasoline", "Regular Gasoline Delivery", C::FuelServices, "Regular grade gasoline delivery", 45, "plus fuel cost"),
    svc("diesel-delivery", "Diesel Fuel Delivery", C::FuelServices, "Diesel fuel delivery service", 55, "plus fuel cost"),
];

/// Categories excluded entirely for in-shop providers.
const SHOP_EXCLUDED_CATEGORIES: [ServiceCategory; 2] =
    [ServiceCategory::Roadside, ServiceCategory::FuelServices];

/// Shop-bound services excluded for mobile providers.
const MOBILE_EXCLUDED_IDS: [&str; 4] =
    ["new-tire-sales", "used-tire-sales", "state-inspection", "emissions-test"];

pub fn service_by_id(id: &str) -> Option<&'static ServiceItem> {
    SERVICES.iter().find(|service| service.id == id)
}

pub fn services_by_category(category: ServiceCategory) -> Vec<&'static ServiceItem> {
    SERVICES.iter().filter(|service| service.category == category).collect()
}

/// Resolves ids against the catalog, silently skipping unknown ones.
pub fn services_by_ids<'a, I>(ids: I) -> Vec<&'static ServiceItem>
where
    I: IntoIterator<Item = &'a str>,
{
    ids.into_iter().filter_map(service_by_id).collect()
}

/// The catalog subset offerable by the given provider type.
pub fn services_for_type(service_type: ServiceType) -> Vec<&'static ServiceItem> {
    match service_type {
        ServiceType::Shop => SERVICES
            .iter()
            .filter(|service| !SHOP_EXCLUDED_CATEGORIES.contains(&service.category))
            .collect(),
        ServiceType::Mobile => SERVICES
            .iter()
            .filter(|service| !MOBILE_EXCLUDED_IDS.contains(&service.id))
            .collect(),
    }
}

/// All services grouped by category, in display order. Empty categories
/// are omitted.
pub fn group_by_category() -> Vec<(ServiceCategory, Vec<&'static ServiceItem>)> {
    group(SERVICES.iter().collect())
}

/// Like [`group_by_category`], restricted to the given provider type.
pub fn group_by_category_for_type(
    service_type: ServiceType,
) -> Vec<(ServiceCategory, Vec<&'static ServiceItem>)> {
    group(services_for_type(service_type))
}

fn group(services: Vec<&'static ServiceItem>) -> Vec<(ServiceCategory, Vec<&'static ServiceItem>)> {
    ServiceCategory::ALL
        .iter()
        .filter_map(|&category| {
            let members: Vec<_> = services
                .iter()
                .copied()
                .filter(|service| service.category == category)
                .collect();
            if members.is_empty() {
                None
            } else {
                Some((category, members))
            }
        })
        .collect()
}

/// Display names for a list of service ids, skipping unknown ids.
pub fn service_names<'a, I>(ids: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    services_by_ids(ids).into_iter().map(|service| service.name).collect()
}

/// Sum of catalog base prices over the given ids.
pub fn estimated_earnings<'a, I>(ids: I) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    services_by_ids(ids).into_iter().map(|service| service.base_price).sum()
}

pub fn format_service_price(price: u32, unit: &str) -> String {
    if unit.is_empty() {
        format!("${price}")
    } else {
        format!("${price} {unit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, service) in SERVICES.iter().enumerate() {
            assert!(
                !SERVICES[i + 1..].iter().any(|other| other.id == service.id),
                "duplicate id {}",
                service.id
            );
        }
    }

    #[test]
    fn test_catalog_covers_all_categories() {
        for category in ServiceCategory::ALL {
            assert!(
                !services_by_category(category).is_empty(),
                "no services in {}",
                category
            );
        }
    }

    #[test]
    fn test_service_by_id() {
        let service = service_by_id("battery-jump-start").unwrap();
        assert_eq!(service.name, "Battery Jump Start");
        assert_eq!(service.category, ServiceCategory::Roadside);
        assert_eq!(service.base_price, 45);
        assert!(service_by_id("no-such-service").is_none());
    }

    #[test]
    fn test_towing_style_detection() {
        assert!(service_by_id("towing-standard").unwrap().is_towing_style());
        assert!(service_by_id("towing-flatbed").unwrap().is_towing_style());
        assert!(!service_by_id("winch-out").unwrap().is_towing_style());
    }

    #[test]
    fn test_shop_excludes_roadside_and_fuel() {
        for service in services_for_type(ServiceType::Shop) {
            assert_ne!(service.category, ServiceCategory::Roadside, "{}", service.id);
            assert_ne!(service.category, ServiceCategory::FuelServices, "{}", service.id);
        }
    }

    #[test]
    fn test_mobile_excludes_shop_bound_ids() {
        let offered = services_for_type(ServiceType::Mobile);
        for excluded in MOBILE_EXCLUDED_IDS {
            assert!(!offered.iter().any(|service| service.id == excluded));
        }
        // Roadside stays available to mobile providers.
        assert!(offered.iter().any(|service| service.id == "towing-standard"));
    }

    #[test]
    fn test_grouping_preserves_display_order_and_drops_empty() {
        let grouped = group_by_category_for_type(ServiceType::Shop);
        assert!(!grouped.iter().any(|(category, _)| *category == ServiceCategory::Roadside));
        let positions: Vec<usize> = grouped
            .iter()
            .map(|(category, _)| {
                ServiceCategory::ALL.iter().position(|c| c == category).unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_estimated_earnings_skips_unknown_ids() {
        let total = estimated_earnings(["battery-jump-start", "oil-change-synthetic", "bogus"]);
        assert_eq!(total, 45 + 85);
    }

    #[test]
    fn test_format_service_price() {
        assert_eq!(format_service_price(85, "per service"), "$85 per service");
        assert_eq!(format_service_price(95, ""), "$95");
    }
}
