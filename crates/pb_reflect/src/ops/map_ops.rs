use alloc::boxed::Box;

use crate::Reflect;

/// A key-value mapping.
pub trait Map: Reflect {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Iterates the entries in the map's own order.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;
}
