use crate::Reflect;

/// A value that may be absent.
pub trait OptionValue: Reflect {
    /// Returns the held value, if any.
    fn value(&self) -> Option<&dyn Reflect>;
}
