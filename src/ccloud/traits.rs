//! Common traits for Confluent Cloud resources

/// Common trait for resources addressable by server-assigned id and
/// user-supplied name (environments, clusters).
///
/// Backs the lookup-by-name path used by read-only queries where the
/// control plane has no direct get-by-name affordance.
pub trait NamedResource {
    /// Get the server-assigned resource id
    fn id(&self) -> &str;

    /// Get the user-supplied name
    fn name(&self) -> &str;
}

/// Find the first resource whose name matches exactly.
///
/// First match wins; the control plane does not guarantee name uniqueness,
/// so with duplicate names the result is whichever the API listed first.
/// Avoiding that ambiguity is the caller's responsibility.
pub(crate) fn first_by_name<T: NamedResource>(items: Vec<T>, name: &str) -> Option<T> {
    items.into_iter().find(|item| item.name() == name)
}
