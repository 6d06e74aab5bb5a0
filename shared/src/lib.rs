//! Shared domain logic for the Roadr Partner portal.
//!
//! Everything in this crate is framework-free: the navigation state
//! machine, the service catalog, setup-form validation, dashboard state,
//! and the formatting utilities all compile on native targets so the
//! logic test suite runs with plain `cargo test`. The `frontend` crate
//! renders these types and wires user events to their transitions.

pub mod address;
pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod phone;
pub mod session;
pub mod setup;

pub use address::{AddressLookup, AddressSuggestion, DemoAddressLookup, NullAddressLookup};
pub use catalog::{ServiceCategory, ServiceItem, ServiceType};
pub use dashboard::{DashboardService, DashboardState, DashboardTab};
pub use error::{AuthError, PaymentError, SubmissionError};
pub use session::{Page, Session, User};
pub use setup::{PricingEntry, ProfileDraft, SetupDraft};
