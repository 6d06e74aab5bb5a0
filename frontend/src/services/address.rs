use std::rc::Rc;

use shared::address::{AddressLookup, DemoAddressLookup};

/// Shared handle to the address-lookup capability, comparable by
/// identity so it can ride along in component props.
#[derive(Clone)]
pub struct AddressLookupHandle(pub Rc<dyn AddressLookup>);

impl PartialEq for AddressLookupHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Resolves the optional geocoding capability once at startup. This
/// build has no real integration, so the canned demo table backs the
/// suggestion dropdown; `NullAddressLookup` is the drop-in for shipping
/// without suggestions entirely.
pub fn resolve_address_lookup() -> AddressLookupHandle {
    AddressLookupHandle(Rc::new(DemoAddressLookup))
}
