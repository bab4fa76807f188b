use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use validator::{Validate, ValidationErrors};

use crate::access_requests::{
    domain::{
        model::{
            commands::{
                decide_access_request_command::DecideAccessRequestCommand,
                submit_access_request_command::SubmitAccessRequestCommand,
            },
            enums::{
                access_request_domain_error::AccessRequestDomainError, decision_kind::DecisionKind,
            },
            queries::{
                get_access_request_query::GetAccessRequestQuery,
                list_access_requests_query::ListAccessRequestsQuery,
            },
        },
        services::{
            access_request_command_service::AccessRequestCommandService,
            access_request_query_service::AccessRequestQueryService,
        },
    },
    interfaces::rest::resources::{
        access_request_error_response_resource::AccessRequestErrorResponseResource,
        access_request_resource::{
            AccessRequestListResource, AccessRequestResource, ListAccessRequestsQueryResource,
        },
        decide_access_request_request_resource::DecideAccessRequestRequestResource,
        submit_access_request_request_resource::SubmitAccessRequestRequestResource,
    },
};

type ErrorResponse = (StatusCode, Json<AccessRequestErrorResponseResource>);

#[derive(Clone)]
pub struct AccessRequestRestControllerState {
    pub command_service: Arc<dyn AccessRequestCommandService>,
    pub query_service: Arc<dyn AccessRequestQueryService>,
}

pub fn router(state: AccessRequestRestControllerState) -> Router {
    Router::new()
        .route("/api/requests", post(submit_access_request))
        .route("/api/requests", get(list_access_requests))
        .route("/api/requests/:request_id", get(get_access_request))
        .route(
            "/api/requests/:request_id/approve",
            post(approve_access_request),
        )
        .route(
            "/api/requests/:request_id/reject",
            post(reject_access_request),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/requests",
    tag = "access-requests",
    request_body = SubmitAccessRequestRequestResource,
    responses(
        (status = 201, description = "Access request created", body = AccessRequestResource),
        (status = 400, description = "Invalid request", body = AccessRequestErrorResponseResource),
        (status = 500, description = "Storage failure", body = AccessRequestErrorResponseResource)
    )
)]
pub async fn submit_access_request(
    State(state): State<AccessRequestRestControllerState>,
    payload: Result<Json<SubmitAccessRequestRequestResource>, JsonRejection>,
) -> Result<(StatusCode, Json<AccessRequestResource>), ErrorResponse> {
    let Json(request) = payload.map_err(map_json_rejection)?;
    request.validate().map_err(map_validation_errors)?;

    let command = SubmitAccessRequestCommand::new(
        request.name,
        request.email,
        request.access_type,
        request.justification,
    )
    .map_err(map_domain_error)?;

    let created = state
        .command_service
        .handle_submit(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    get,
    path = "/api/requests",
    tag = "access-requests",
    params(("status" = Option<String>, Query, description = "Only return requests in this status")),
    responses(
        (status = 200, description = "Access requests in submission order", body = AccessRequestListResource),
        (status = 400, description = "Invalid status filter", body = AccessRequestErrorResponseResource),
        (status = 500, description = "Storage failure", body = AccessRequestErrorResponseResource)
    )
)]
pub async fn list_access_requests(
    State(state): State<AccessRequestRestControllerState>,
    Query(query): Query<ListAccessRequestsQueryResource>,
) -> Result<Json<AccessRequestListResource>, ErrorResponse> {
    let query = ListAccessRequestsQuery::new(query.status).map_err(map_domain_error)?;

    let requests: Vec<AccessRequestResource> = state
        .query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?
        .into_iter()
        .map(AccessRequestResource::from)
        .collect();

    Ok(Json(AccessRequestListResource {
        total: requests.len(),
        requests,
    }))
}

#[utoipa::path(
    get,
    path = "/api/requests/{request_id}",
    tag = "access-requests",
    params(("request_id" = String, Path, description = "Access request identifier")),
    responses(
        (status = 200, description = "Access request", body = AccessRequestResource),
        (status = 404, description = "Access request not found", body = AccessRequestErrorResponseResource),
        (status = 500, description = "Storage failure", body = AccessRequestErrorResponseResource)
    )
)]
pub async fn get_access_request(
    State(state): State<AccessRequestRestControllerState>,
    Path(request_id): Path<String>,
) -> Result<Json<AccessRequestResource>, ErrorResponse> {
    let query = GetAccessRequestQuery::new(request_id).map_err(map_domain_error)?;

    let request = state
        .query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(request.into()))
}

#[utoipa::path(
    post,
    path = "/api/requests/{request_id}/approve",
    tag = "access-requests",
    params(("request_id" = String, Path, description = "Access request identifier")),
    request_body = DecideAccessRequestRequestResource,
    responses(
        (status = 200, description = "Access request approved", body = AccessRequestResource),
        (status = 400, description = "Invalid decision", body = AccessRequestErrorResponseResource),
        (status = 404, description = "Access request not found", body = AccessRequestErrorResponseResource),
        (status = 409, description = "Access request already decided", body = AccessRequestErrorResponseResource),
        (status = 500, description = "Storage failure", body = AccessRequestErrorResponseResource)
    )
)]
pub async fn approve_access_request(
    State(state): State<AccessRequestRestControllerState>,
    Path(request_id): Path<String>,
    payload: Result<Json<DecideAccessRequestRequestResource>, JsonRejection>,
) -> Result<Json<AccessRequestResource>, ErrorResponse> {
    let Json(request) = payload.map_err(map_json_rejection)?;
    decide_access_request(state, request_id, DecisionKind::Approve, request).await
}

#[utoipa::path(
    post,
    path = "/api/requests/{request_id}/reject",
    tag = "access-requests",
    params(("request_id" = String, Path, description = "Access request identifier")),
    request_body = DecideAccessRequestRequestResource,
    responses(
        (status = 200, description = "Access request rejected", body = AccessRequestResource),
        (status = 400, description = "Invalid decision or missing notes", body = AccessRequestErrorResponseResource),
        (status = 404, description = "Access request not found", body = AccessRequestErrorResponseResource),
        (status = 409, description = "Access request already decided", body = AccessRequestErrorResponseResource),
        (status = 500, description = "Storage failure", body = AccessRequestErrorResponseResource)
    )
)]
pub async fn reject_access_request(
    State(state): State<AccessRequestRestControllerState>,
    Path(request_id): Path<String>,
    payload: Result<Json<DecideAccessRequestRequestResource>, JsonRejection>,
) -> Result<Json<AccessRequestResource>, ErrorResponse> {
    let Json(request) = payload.map_err(map_json_rejection)?;
    decide_access_request(state, request_id, DecisionKind::Reject, request).await
}

async fn decide_access_request(
    state: AccessRequestRestControllerState,
    request_id: String,
    kind: DecisionKind,
    request: DecideAccessRequestRequestResource,
) -> Result<Json<AccessRequestResource>, ErrorResponse> {
    request.validate().map_err(map_validation_errors)?;

    let command =
        DecideAccessRequestCommand::new(request_id, kind, request.approved_by, request.notes)
            .map_err(map_domain_error)?;

    let decided = state
        .command_service
        .handle_decide(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(decided.into()))
}

// Malformed JSON, wrong field types and a missing content type all count as bad input.
fn map_json_rejection(rejection: JsonRejection) -> ErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(AccessRequestErrorResponseResource {
            error: rejection.body_text(),
            fields: Vec::new(),
        }),
    )
}

fn map_validation_errors(errors: ValidationErrors) -> ErrorResponse {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();

    (
        StatusCode::BAD_REQUEST,
        Json(AccessRequestErrorResponseResource {
            error: errors.to_string(),
            fields,
        }),
    )
}

fn map_domain_error(error: AccessRequestDomainError) -> ErrorResponse {
    let status = match error {
        AccessRequestDomainError::InvalidRequesterName
        | AccessRequestDomainError::InvalidRequesterEmail
        | AccessRequestDomainError::InvalidAccessType
        | AccessRequestDomainError::InvalidApproverName
        | AccessRequestDomainError::RejectionNotesRequired
        | AccessRequestDomainError::InvalidStatusFilter => StatusCode::BAD_REQUEST,
        AccessRequestDomainError::AccessRequestNotFound => StatusCode::NOT_FOUND,
        AccessRequestDomainError::InvalidStatusTransition => StatusCode::CONFLICT,
        AccessRequestDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(AccessRequestErrorResponseResource {
            error: error.to_string(),
            fields: error.field().map(str::to_string).into_iter().collect(),
        }),
    )
}
