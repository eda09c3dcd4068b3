//! Items used by the code `pb_reflect_derive` generates.
//!
//! Not public API.

#[doc(hidden)]
pub mod alloc_utils {
    pub use alloc::boxed::Box;
    pub use alloc::string::String;
}

#[cfg(feature = "auto_register")]
#[doc(hidden)]
pub mod auto_register {
    pub use inventory;

    use crate::registry::TypeRegistry;

    /// A registration submitted by `#[reflect(auto_register)]`.
    pub struct AutoRegistration(pub fn(&mut TypeRegistry));

    inventory::collect!(AutoRegistration);

    /// Runs every submitted registration.
    pub fn register_types(registry: &mut TypeRegistry) {
        for registration in inventory::iter::<AutoRegistration> {
            (registration.0)(registry);
        }
    }
}
