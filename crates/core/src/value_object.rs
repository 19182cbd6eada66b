//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and defined entirely by their attribute values:
/// two [`crate::Money`] amounts of `$85.000` are the same money, while two
/// product records that happen to share a name are still distinct entities.
/// To "change" a value object, build a new one.
///
/// The supertraits capture the contract: cheap to copy around (`Clone`),
/// compared by value (`PartialEq`), printable in logs and tests (`Debug`).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
