//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so
//! the `From` impls bridging them live here instead.

use crate::domain::types::TypeConstraintError;
use crate::forms::fruits::FruitFormError;
use crate::repository::errors::RepositoryError;
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::Validation(val.to_string())
    }
}

impl From<FruitFormError> for ServiceError {
    fn from(val: FruitFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
