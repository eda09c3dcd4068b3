use crate::Reflect;

/// A fixed-arity product.
pub trait Tuple: Reflect {
    /// Returns the field at `index`.
    fn field(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at `index` mutably.
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of fields.
    fn field_len(&self) -> usize;
}
