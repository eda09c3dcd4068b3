use crate::Reflect;

/// A struct with named members.
///
/// `field` only yields readable members and `field_mut` only writable ones,
/// so the [`Access`](crate::info::Access) policy is enforced at the source.
/// Members inherited from a base are reachable by name as well.
///
/// # Example
///
/// ```
/// use pb_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Account {
///     #[reflect(readonly)]
///     id: u64,
///     owner: String,
/// }
///
/// let mut account = Account { id: 7, owner: "ann".into() };
/// assert!(account.field("id").is_some());
/// assert!(account.field_mut("id").is_none());
///
/// account.field_mut("owner").unwrap().set(Box::new(String::from("bo"))).unwrap();
/// assert_eq!(account.owner, "bo");
/// ```
pub trait Struct: Reflect {
    /// Returns the readable member named `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the writable member named `name`.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;
}

impl dyn Struct {
    /// Returns the member named `name` downcast to `T`.
    pub fn get_field<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name)?.downcast_ref::<T>()
    }
}
