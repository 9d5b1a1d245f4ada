//! Strongly-typed value objects used by domain entities.
//!
//! Identifiers are wrapped so that once a value reaches the domain layer it is
//! known to be positive and can be treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// A persisted record was expected to carry an identifier.
    #[error("missing id")]
    MissingId,
    /// A required value was absent.
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(OwnerId, "Unique identifier for a pet owner.");
id_newtype!(PetId, "Unique identifier for a pet.");
id_newtype!(PetTypeId, "Unique identifier for a pet type.");
id_newtype!(VisitId, "Unique identifier for a visit.");

/// Converts an optional wire identifier into a required domain identifier.
pub fn require_id<T>(value: Option<i32>) -> Result<T, TypeConstraintError>
where
    T: TryFrom<i32, Error = TypeConstraintError>,
{
    value.ok_or(TypeConstraintError::MissingId).and_then(T::try_from)
}
