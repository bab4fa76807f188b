use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::access_requests::{
    domain::model::{
        entities::access_request::{AccessRequest, AccessRequestRestoreParts},
        enums::{
            access_request_domain_error::AccessRequestDomainError,
            access_request_status::AccessRequestStatus, decision_kind::DecisionKind,
        },
        value_objects::{
            access_request_decision::AccessRequestDecision, access_request_id::AccessRequestId,
            approval_notes::ApprovalNotes, approver_name::ApproverName,
            justification::Justification, requester_email::RequesterEmail,
            requester_name::RequesterName,
        },
    },
    infrastructure::persistence::repositories::access_request_repository::{
        AccessRequestRepository, StatusUpdateOutcome,
    },
};

const SELECT_COLUMNS: &str = "id, name, email, access_type, justification, status, created_at, \
     approved_by, approval_notes, decided_at";

pub struct SqlxAccessRequestRepositoryImpl {
    pool: PgPool,
}

impl SqlxAccessRequestRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(
        row: sqlx::postgres::PgRow,
    ) -> Result<AccessRequest, AccessRequestDomainError> {
        let id: Uuid = row.try_get("id").map_err(map_infra_error)?;
        let name_raw: String = row.try_get("name").map_err(map_infra_error)?;
        let email_raw: String = row.try_get("email").map_err(map_infra_error)?;
        let access_type_raw: String = row.try_get("access_type").map_err(map_infra_error)?;
        let justification_raw: String = row.try_get("justification").map_err(map_infra_error)?;
        let status_raw: String = row.try_get("status").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;
        let approved_by_raw: Option<String> = row.try_get("approved_by").map_err(map_infra_error)?;
        let approval_notes_raw: Option<String> =
            row.try_get("approval_notes").map_err(map_infra_error)?;
        let decided_at: Option<DateTime<Utc>> =
            row.try_get("decided_at").map_err(map_infra_error)?;

        let status: AccessRequestStatus = status_raw
            .parse()
            .map_err(|_| corrupt_row(id, "unknown status stored"))?;

        let decision = match status {
            AccessRequestStatus::Pending => None,
            AccessRequestStatus::Approved | AccessRequestStatus::Rejected => {
                let kind = if status == AccessRequestStatus::Approved {
                    DecisionKind::Approve
                } else {
                    DecisionKind::Reject
                };
                let (Some(approved_by_raw), Some(decided_at)) = (approved_by_raw, decided_at)
                else {
                    return Err(corrupt_row(id, "decided request without approver"));
                };
                let decision = AccessRequestDecision::new(
                    kind,
                    ApproverName::new(approved_by_raw)
                        .map_err(|_| corrupt_row(id, "blank approver stored"))?,
                    ApprovalNotes::new(approval_notes_raw),
                    decided_at,
                )
                .map_err(|_| corrupt_row(id, "rejection without notes stored"))?;
                Some(decision)
            }
        };

        Ok(AccessRequest::restore(AccessRequestRestoreParts {
            id: AccessRequestId::from_uuid(id),
            name: RequesterName::new(name_raw)
                .map_err(|_| corrupt_row(id, "blank name stored"))?,
            email: RequesterEmail::new(email_raw)
                .map_err(|_| corrupt_row(id, "invalid email stored"))?,
            access_type: access_type_raw
                .parse()
                .map_err(|_| corrupt_row(id, "unknown access type stored"))?,
            justification: Justification::new(Some(justification_raw)),
            created_at,
            decision,
        }))
    }
}

#[async_trait]
impl AccessRequestRepository for SqlxAccessRequestRepositoryImpl {
    async fn create(&self, request: &AccessRequest) -> Result<(), AccessRequestDomainError> {
        let statement = r#"
            INSERT INTO access_requests
                (id, name, email, access_type, justification, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#;

        sqlx::query(statement)
            .bind(request.id().value())
            .bind(request.name().value())
            .bind(request.email().value())
            .bind(request.access_type().as_str())
            .bind(request.justification().value())
            .bind(request.status().as_str())
            .bind(request.created_at())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: AccessRequestId,
    ) -> Result<Option<AccessRequest>, AccessRequestDomainError> {
        let statement = format!("SELECT {SELECT_COLUMNS} FROM access_requests WHERE id = $1");

        let maybe_row = sqlx::query(&statement)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn list(
        &self,
        status: Option<AccessRequestStatus>,
    ) -> Result<Vec<AccessRequest>, AccessRequestDomainError> {
        let statement = format!(
            "SELECT {SELECT_COLUMNS} FROM access_requests \
             WHERE $1::VARCHAR IS NULL OR status = $1 \
             ORDER BY sequence_number ASC"
        );

        let rows = sqlx::query(&statement)
            .bind(status.map(|status| status.as_str()))
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn update_status(
        &self,
        id: AccessRequestId,
        decision: &AccessRequestDecision,
    ) -> Result<StatusUpdateOutcome, AccessRequestDomainError> {
        let statement = format!(
            "UPDATE access_requests \
             SET status = $2, approved_by = $3, approval_notes = $4, decided_at = $5 \
             WHERE id = $1 AND status = 'pending' \
             RETURNING {SELECT_COLUMNS}"
        );

        let maybe_row = sqlx::query(&statement)
            .bind(id.value())
            .bind(decision.status().as_str())
            .bind(decision.approved_by().value())
            .bind(decision.notes().map(ApprovalNotes::value))
            .bind(decision.decided_at())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        if let Some(row) = maybe_row {
            return Ok(StatusUpdateOutcome::Updated(Self::row_to_entity(row)?));
        }

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM access_requests WHERE id = $1)",
        )
        .bind(id.value())
        .fetch_one(&self.pool)
        .await
        .map_err(map_infra_error)?;

        if exists {
            Ok(StatusUpdateOutcome::Conflict)
        } else {
            Ok(StatusUpdateOutcome::NotFound)
        }
    }
}

fn map_infra_error(error: sqlx::Error) -> AccessRequestDomainError {
    AccessRequestDomainError::InfrastructureError(error.to_string())
}

fn corrupt_row(id: Uuid, reason: &str) -> AccessRequestDomainError {
    AccessRequestDomainError::InfrastructureError(format!("access request {id}: {reason}"))
}
