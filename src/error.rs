use crate::datatypes::EntityKind;

/// Errors from looking entities up by name.
///
/// Geometric non-existence is never an error; it travels as `None` through
/// the resolution results instead.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// No entity with this name was ever registered.
    #[error("Nothing named {name} was added to this construction")]
    Undefined {
        /// The name that could not be found.
        name: String,
    },
    /// The name is registered, but to an entity of a different kind.
    #[error("Expected {name} to be a {expected}, but it is a {found}")]
    WrongKind {
        /// The name that was looked up.
        name: String,
        /// The kind the caller asked for.
        expected: EntityKind,
        /// The kind actually registered under the name.
        found: EntityKind,
    },
}
