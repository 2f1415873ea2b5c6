//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use keyring::Error as KeyringError;
use prodboard_domain::ProdboardError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

use crate::api::ApiError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ProdboardError);

impl From<InfraError> for ProdboardError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ProdboardError> for InfraError {
    fn from(value: ProdboardError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoProdboardError {
    fn into_prodboard(self) -> ProdboardError;
}

/* -------------------------------------------------------------------------- */
/* keyring::Error → ProdboardError */
/* -------------------------------------------------------------------------- */

impl IntoProdboardError for KeyringError {
    fn into_prodboard(self) -> ProdboardError {
        use KeyringError::{
            Ambiguous, BadEncoding, Invalid, NoEntry, NoStorageAccess, PlatformFailure, TooLong,
        };

        let description = self.to_string();

        match self {
            NoEntry => ProdboardError::NotFound("keychain entry not found".into()),
            BadEncoding(_) => {
                ProdboardError::Storage("token in keychain is not valid UTF-8".into())
            }
            TooLong(name, limit) => ProdboardError::Storage(format!(
                "keychain attribute '{name}' exceeds platform limit ({limit})"
            )),
            Invalid(attr, reason) => {
                ProdboardError::Storage(format!("keychain attribute '{attr}' is invalid: {reason}"))
            }
            Ambiguous(entries) => ProdboardError::Storage(format!(
                "multiple keychain entries matched request ({} results)",
                entries.len()
            )),
            PlatformFailure(err) => {
                ProdboardError::Storage(format!("keychain platform error: {err}"))
            }
            NoStorageAccess(err) => {
                ProdboardError::Storage(format!("unable to access secure storage: {err}"))
            }
            _ => ProdboardError::Storage(description),
        }
    }
}

impl From<KeyringError> for InfraError {
    fn from(value: KeyringError) -> Self {
        InfraError(value.into_prodboard())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ProdboardError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(ApiError::from(value).into())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → ProdboardError */
/* -------------------------------------------------------------------------- */

impl IntoProdboardError for IoError {
    fn into_prodboard(self) -> ProdboardError {
        match self.kind() {
            ErrorKind::NotFound => ProdboardError::NotFound(self.to_string()),
            ErrorKind::PermissionDenied => {
                ProdboardError::Storage(format!("permission denied: {self}"))
            }
            _ => ProdboardError::Storage(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_prodboard())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → ProdboardError */
/* -------------------------------------------------------------------------- */

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(ProdboardError::Storage(format!("malformed JSON: {value}")))
    }
}

/// Shorthand for `map_err(|e| ProdboardError::from(InfraError::from(e)))`
pub(crate) fn to_domain<E>(err: E) -> ProdboardError
where
    InfraError: From<E>,
{
    InfraError::from(err).into()
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
