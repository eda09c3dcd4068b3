use alloc::string::String;
use alloc::vec::Vec;

/// Which type names a binder may resolve.
///
/// Namespaces are matched as path prefixes on `::` boundaries: `shop` allows
/// `shop::Item` and `shop::cart::Line`, but not `shopping::Item`.
/// The default denies everything.
///
/// # Example
///
/// ```
/// use pb_reflect::binder::AllowList;
///
/// let allow = AllowList::namespaces(["shop", "geo::shapes"]);
/// assert!(allow.allows("shop::Item"));
/// assert!(allow.allows("geo::shapes::Circle"));
/// assert!(!allow.allows("shopping::Item"));
/// assert!(!allow.allows("geo::Evil"));
///
/// assert!(!AllowList::default().allows("shop::Item"));
/// assert!(AllowList::any_registered().allows("anything::At::All"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AllowList {
    /// Nothing is allowed.
    #[default]
    DenyAll,
    /// Every registered type is allowed. Only for trusted payloads.
    AnyRegistered,
    /// Types under one of these namespaces.
    Namespaces(Vec<String>),
}

impl AllowList {
    #[inline]
    pub fn deny_all() -> Self {
        Self::DenyAll
    }

    #[inline]
    pub fn any_registered() -> Self {
        Self::AnyRegistered
    }

    /// Allows the types under the given namespaces.
    pub fn namespaces<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Namespaces(namespaces.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if `type_path` may be resolved.
    pub fn allows(&self, type_path: &str) -> bool {
        match self {
            Self::DenyAll => false,
            Self::AnyRegistered => true,
            Self::Namespaces(namespaces) => namespaces
                .iter()
                .any(|ns| in_namespace(type_path, ns)),
        }
    }
}

fn in_namespace(type_path: &str, namespace: &str) -> bool {
    let namespace = namespace.trim_end_matches("::");
    if namespace.is_empty() {
        return false;
    }
    type_path
        .strip_prefix(namespace)
        .is_some_and(|rest| rest.starts_with("::"))
}

#[cfg(test)]
mod tests {
    use super::AllowList;

    #[test]
    fn trailing_separator_and_empty_namespace() {
        let allow = AllowList::namespaces(["shop::", ""]);
        assert!(allow.allows("shop::Item"));
        assert!(!allow.allows("Item"));
        assert!(!allow.allows("shop"));
    }

    #[test]
    fn generic_arguments_do_not_widen_the_match() {
        let allow = AllowList::namespaces(["alloc::vec"]);
        assert!(allow.allows("alloc::vec::Vec<evil::Gadget>"));
        assert!(!AllowList::namespaces(["evil"]).allows("alloc::vec::Vec<evil::Gadget>"));
    }
}
