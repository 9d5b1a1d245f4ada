//! Request decision logic: validation, existence checks and delegation to the
//! repository. Every function is generic over the repository traits it needs.

use crate::domain::types::TypeConstraintError;

pub mod errors;
pub mod owners;
pub mod pets;
pub mod visits;

pub use errors::{ServiceError, ServiceResult};

/// Parses a path identifier. Values that can never name a record resolve to
/// [`ServiceError::NotFound`].
fn path_id<T>(value: i32) -> ServiceResult<T>
where
    T: TryFrom<i32, Error = TypeConstraintError>,
{
    T::try_from(value).map_err(|_| ServiceError::NotFound)
}
