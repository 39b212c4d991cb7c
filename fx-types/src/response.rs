//! Uniform success/error envelope for engine operations.

use serde::{Deserialize, Serialize};

use crate::error::{FxErrorCode, ServiceError};

/// The standard response shape for every engine operation.
///
/// Exactly one of data/error is present. Callers branch on the envelope
/// rather than on panics or ad-hoc error types; `into_result` bridges to
/// `Result` for callers that prefer `?`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceResponse<T> {
    Data(T),
    Error(ServiceError),
}

impl<T> ServiceResponse<T> {
    /// Creates a successful response carrying `data`.
    pub fn succeed(data: T) -> Self {
        Self::Data(data)
    }

    /// Creates a failed response carrying a typed error.
    pub fn fail(code: FxErrorCode, message: impl Into<String>) -> Self {
        Self::Error(ServiceError::new(code, message))
    }

    /// True iff no error is present.
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Data(_))
    }

    /// The payload, if the operation succeeded.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Error(_) => None,
        }
    }

    /// The error, if the operation failed.
    pub fn error(&self) -> Option<&ServiceError> {
        match self {
            Self::Data(_) => None,
            Self::Error(err) => Some(err),
        }
    }

    /// Converts the envelope into a plain `Result`.
    pub fn into_result(self) -> Result<T, ServiceError> {
        match self {
            Self::Data(data) => Ok(data),
            Self::Error(err) => Err(err),
        }
    }
}

impl<T> From<Result<T, ServiceError>> for ServiceResponse<T> {
    fn from(result: Result<T, ServiceError>) -> Self {
        match result {
            Ok(data) => Self::Data(data),
            Err(err) => Self::Error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_side_readable() {
        let ok = ServiceResponse::succeed(42);
        assert!(ok.is_successful());
        assert_eq!(ok.data(), Some(&42));
        assert!(ok.error().is_none());

        let err = ServiceResponse::<i32>::fail(FxErrorCode::UnexpectedError, "boom");
        assert!(!err.is_successful());
        assert!(err.data().is_none());
        assert_eq!(err.error().unwrap().code, FxErrorCode::UnexpectedError);
    }

    #[test]
    fn test_into_result() {
        let err = ServiceResponse::<i32>::fail(FxErrorCode::InvalidDate, "bad date");
        assert_eq!(err.into_result().unwrap_err().code, FxErrorCode::InvalidDate);
        assert_eq!(ServiceResponse::succeed(7).into_result().unwrap(), 7);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ServiceResponse::<i32>::fail(FxErrorCode::InvalidDate, "bad date");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["error"]["code"], "invalid_date");
        assert_eq!(json["error"]["message"], "bad date");

        let ok = ServiceResponse::succeed(7);
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["data"], 7);
    }
}
