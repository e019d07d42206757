//! Custom Axum extractors
//!
//! Bodies and path parameters are validated here, before any handler
//! builds bind parameters.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{ProfessorId, StudentNum, ValidationError};

/// JSON body whose decoding failures surface as 400 validation errors
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                ApiError::Validation(ValidationError::Body {
                    reason: rejection.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}

/// Extract and validate a student number from path
pub struct ValidStudentNum(pub StudentNum);

impl<S> FromRequestParts<S> for ValidStudentNum
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(num): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "studentNum" }))?;

        Ok(Self(StudentNum::new(&num)?))
    }
}

/// Extract and validate a professor id from path
pub struct ValidProfessorId(pub ProfessorId);

impl<S> FromRequestParts<S> for ValidProfessorId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "professorID" }))?;

        Ok(Self(ProfessorId::new(&id)?))
    }
}
