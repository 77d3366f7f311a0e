//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. Two
/// `Money` amounts of 12 000 cents are the same amount; there is nothing else
/// to distinguish them.
///
/// The `Send + Sync` bound keeps every value object shareable across threads
/// without coordination, which the catalog functions rely on.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + Send + Sync {}
