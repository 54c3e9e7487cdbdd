use thiserror::Error;

use super::ZoneId;
use crate::db::repository::RepoError;
use crate::utils::validation::FieldViolation;
use crate::utils::{AppError, ErrorCode};

/// Errors raised by zone commands and queries
#[derive(Debug, Error)]
pub enum ZoneError {
    #[error(
        "One or more required fields for zone are missing. Missing fields are: {}",
        .fields.join(", ")
    )]
    MissingRequiredFields { fields: Vec<String> },

    #[error("Zone contains invalid field values")]
    InvalidValues { violation: FieldViolation },

    #[error("Zone with id \"{0}\" was not found")]
    NotFound(ZoneId),

    #[error("Zone id {0} is invalid. Zone id must be a positive integer")]
    InvalidId(i64),

    #[error("Unable to toggle status of zone with id \"{id}\": {reason}")]
    CannotToggleStatus { id: ZoneId, reason: String },

    #[error("Unable to delete zone with id \"{id}\": {reason}")]
    CannotDelete { id: ZoneId, reason: String },

    #[error("Unable to delete zones with ids: {}", join_ids(.ids))]
    CannotBulkDelete { ids: Vec<ZoneId> },

    #[error("Unable to toggle status of zones with ids: {}", join_ids(.ids))]
    CannotBulkToggle { ids: Vec<ZoneId> },

    #[error(transparent)]
    Repository(#[from] RepoError),
}

fn join_ids(ids: &[ZoneId]) -> String {
    ids.iter()
        .map(ZoneId::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn raw_ids(ids: &[ZoneId]) -> Vec<i64> {
    ids.iter().map(ZoneId::value).collect()
}

impl From<ZoneError> for AppError {
    fn from(err: ZoneError) -> Self {
        let message = err.to_string();
        match err {
            ZoneError::MissingRequiredFields { fields } => {
                AppError::with_message(ErrorCode::RequiredField, message)
                    .with_detail("fields", fields)
            }
            ZoneError::InvalidValues { violation } => {
                AppError::with_message(ErrorCode::ValidationFailed, message)
                    .with_detail("field", violation.field)
                    .with_detail("reason", violation.to_string())
            }
            ZoneError::NotFound(id) => AppError::with_message(ErrorCode::ZoneNotFound, message)
                .with_detail("zone_id", id.value()),
            ZoneError::InvalidId(value) => {
                AppError::with_message(ErrorCode::ZoneInvalidId, message)
                    .with_detail("zone_id", value)
            }
            ZoneError::CannotToggleStatus { id, .. } => {
                AppError::with_message(ErrorCode::ZoneCannotToggleStatus, message)
                    .with_detail("zone_id", id.value())
            }
            ZoneError::CannotDelete { id, .. } => {
                AppError::with_message(ErrorCode::ZoneCannotDelete, message)
                    .with_detail("zone_id", id.value())
            }
            ZoneError::CannotBulkDelete { ids } => {
                AppError::with_message(ErrorCode::ZoneBulkDeleteFailed, message)
                    .with_detail("zone_ids", raw_ids(&ids))
            }
            ZoneError::CannotBulkToggle { ids } => {
                AppError::with_message(ErrorCode::ZoneBulkToggleFailed, message)
                    .with_detail("zone_ids", raw_ids(&ids))
            }
            ZoneError::Repository(RepoError::NotFound(msg)) => AppError::not_found(msg),
            ZoneError::Repository(RepoError::Duplicate(msg)) => AppError::already_exists(msg),
            ZoneError::Repository(RepoError::Validation(msg)) => AppError::validation(msg),
            ZoneError::Repository(RepoError::Database(msg)) => AppError::database(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::ViolationReason;

    fn id(value: i64) -> ZoneId {
        ZoneId::new(value).unwrap()
    }

    #[test]
    fn test_missing_fields_message_lists_fields() {
        let err = ZoneError::MissingRequiredFields {
            fields: vec!["name".into()],
        };
        assert_eq!(
            err.to_string(),
            "One or more required fields for zone are missing. Missing fields are: name"
        );

        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::RequiredField);
        assert_eq!(
            app.details.unwrap()["fields"],
            serde_json::json!(["name"])
        );
    }

    #[test]
    fn test_invalid_values_message_is_generic() {
        let err = ZoneError::InvalidValues {
            violation: FieldViolation {
                field: "name",
                reason: ViolationReason::InvalidCharacters,
            },
        };
        assert_eq!(err.to_string(), "Zone contains invalid field values");

        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::ValidationFailed);
        assert_eq!(app.details.unwrap()["field"], "name");
    }

    #[test]
    fn test_bulk_errors_carry_ids() {
        let err = ZoneError::CannotBulkDelete {
            ids: vec![id(2), id(5)],
        };
        assert_eq!(err.to_string(), "Unable to delete zones with ids: 2, 5");

        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::ZoneBulkDeleteFailed);
        assert_eq!(app.details.unwrap()["zone_ids"], serde_json::json!([2, 5]));
    }

    #[test]
    fn test_not_found_maps_to_404_code() {
        let app: AppError = ZoneError::NotFound(id(9)).into();
        assert_eq!(app.code, ErrorCode::ZoneNotFound);
        assert_eq!(app.message, "Zone with id \"9\" was not found");
        assert_eq!(app.http_status(), http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_repository_errors_map_to_system_codes() {
        let app: AppError = ZoneError::from(RepoError::Database("disk full".into())).into();
        assert_eq!(app.code, ErrorCode::DatabaseError);
    }
}
