use crate::datatypes::EntityKind;

/// A non-fatal diagnostic about a builder call that could not take effect.
///
/// The offending call is a no-op: its target name stays unregistered, so
/// later references to that name produce further warnings rather than a
/// crash.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Warning {
    /// The name the builder call was trying to register, if it got that far.
    pub about: Option<String>,
    /// What went wrong.
    pub content: WarningContent,
}

/// Each kind of builder misuse the engine reports.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(PartialEq))]
#[non_exhaustive]
pub enum WarningContent {
    /// A dependency name that was never registered.
    UnknownReference {
        /// The name that could not be resolved.
        name: String,
    },
    /// The name is already taken. Registration is refused rather than
    /// silently overwriting the existing entity.
    DuplicateName {
        /// The already-registered name.
        name: String,
    },
    /// User-chosen names may not contain the separator reserved for
    /// compound constructors' auxiliary entities.
    ReservedSeparator {
        /// The rejected name.
        name: String,
    },
    /// A dependency was an entity of the wrong kind.
    WrongKind {
        /// The dependency's name.
        name: String,
        /// What the builder call needed it to be.
        expected: EntityKind,
        /// What it actually is.
        found: EntityKind,
    },
    /// Both intersection operands were points; two points don't define an
    /// intersection.
    PointIntersection {
        /// First operand.
        object1: String,
        /// Second operand.
        object2: String,
    },
}

impl std::fmt::Display for WarningContent {
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarningContent::UnknownReference { name } => {
                write!(f, "You referred to {name} but it was never added to this construction")
            }
            WarningContent::DuplicateName { name } => {
                write!(f, "Something named {name} was already added to this construction")
            }
            WarningContent::ReservedSeparator { name } => {
                write!(
                    f,
                    "The name {name} contains '{}', which is reserved for auxiliary entities",
                    crate::construction::AUX_SEPARATOR
                )
            }
            WarningContent::WrongKind {
                name,
                expected,
                found,
            } => {
                write!(f, "Expected {name} to be a {expected}, but it is a {found}")
            }
            WarningContent::PointIntersection { object1, object2 } => {
                write!(
                    f,
                    "Cannot intersect {object1} with {object2}: two points don't define an intersection"
                )
            }
        }
    }
}
