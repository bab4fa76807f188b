use chrono::Utc;
use iam_access_portal::access_requests::{
    domain::model::{
        enums::{access_request_status::AccessRequestStatus, decision_kind::DecisionKind},
        value_objects::{
            access_request_decision::AccessRequestDecision, approval_notes::ApprovalNotes,
            approver_name::ApproverName,
        },
    },
    infrastructure::persistence::repositories::{
        access_request_repository::{AccessRequestRepository, StatusUpdateOutcome},
        in_memory::in_memory_access_request_repository_impl::InMemoryAccessRequestRepositoryImpl,
        postgres::sqlx_access_request_repository_impl::SqlxAccessRequestRepositoryImpl,
    },
};
use sqlx::PgPool;

use crate::support::pending_request;

fn decision(kind: DecisionKind, approver: &str) -> AccessRequestDecision {
    AccessRequestDecision::new(
        kind,
        ApproverName::new(approver.to_string()).expect("valid approver"),
        ApprovalNotes::new(Some("reviewed".to_string())),
        Utc::now(),
    )
    .expect("valid decision")
}

#[tokio::test]
async fn update_status_applies_once_then_reports_conflict() {
    let request = pending_request("Alice");
    let repository = InMemoryAccessRequestRepositoryImpl::with_entries(vec![request.clone()]);

    let first = repository
        .update_status(request.id(), &decision(DecisionKind::Reject, "Bob"))
        .await
        .expect("store reachable");
    let second = repository
        .update_status(request.id(), &decision(DecisionKind::Approve, "Carol"))
        .await
        .expect("store reachable");

    assert!(matches!(
        first,
        StatusUpdateOutcome::Updated(updated) if updated.status() == AccessRequestStatus::Rejected
    ));
    assert!(matches!(second, StatusUpdateOutcome::Conflict));

    let stored = repository
        .find_by_id(request.id())
        .await
        .expect("store reachable")
        .expect("request stored");
    assert_eq!(stored.status(), AccessRequestStatus::Rejected);
    assert_eq!(stored.approved_by().map(ApproverName::value), Some("Bob"));
}

#[tokio::test]
async fn update_status_reports_unknown_request() {
    let repository = InMemoryAccessRequestRepositoryImpl::new();

    let outcome = repository
        .update_status(
            pending_request("Nobody").id(),
            &decision(DecisionKind::Approve, "Bob"),
        )
        .await
        .expect("store reachable");

    assert!(matches!(outcome, StatusUpdateOutcome::NotFound));
}

#[tokio::test]
async fn create_keeps_insertion_order_and_refuses_duplicates() {
    let repository = InMemoryAccessRequestRepositoryImpl::new();
    let first = pending_request("Alice");
    let second = pending_request("Bob");

    repository.create(&first).await.expect("first insert");
    repository.create(&second).await.expect("second insert");
    let duplicate = repository.create(&first).await;

    let listed: Vec<_> = repository
        .list(None)
        .await
        .expect("store reachable")
        .iter()
        .map(|request| request.id())
        .collect();
    assert_eq!(listed, vec![first.id(), second.id()]);
    assert!(duplicate.is_err());
}

// The PostgreSQL tests need a server: `DATABASE_URL=postgres://... cargo test -- --ignored`.
// `sqlx::test` creates a fresh database per test and applies ./migrations to it.

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn postgres_update_status_applies_once_then_reports_conflict(pool: PgPool) {
    let request = pending_request("Alice");
    let repository = SqlxAccessRequestRepositoryImpl::new(pool);
    repository.create(&request).await.expect("insert");

    let first = repository
        .update_status(request.id(), &decision(DecisionKind::Reject, "Bob"))
        .await
        .expect("store reachable");
    let second = repository
        .update_status(request.id(), &decision(DecisionKind::Approve, "Carol"))
        .await
        .expect("store reachable");

    assert!(matches!(
        first,
        StatusUpdateOutcome::Updated(updated) if updated.status() == AccessRequestStatus::Rejected
    ));
    assert!(matches!(second, StatusUpdateOutcome::Conflict));

    let stored = repository
        .find_by_id(request.id())
        .await
        .expect("store reachable")
        .expect("request stored");
    assert_eq!(stored.status(), AccessRequestStatus::Rejected);
    assert_eq!(stored.approved_by().map(ApproverName::value), Some("Bob"));
    assert_eq!(
        stored.approval_notes().map(ApprovalNotes::value),
        Some("reviewed")
    );
    assert!(stored.decided_at().is_some());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn postgres_update_status_reports_unknown_request(pool: PgPool) {
    let repository = SqlxAccessRequestRepositoryImpl::new(pool);

    let outcome = repository
        .update_status(
            pending_request("Nobody").id(),
            &decision(DecisionKind::Approve, "Bob"),
        )
        .await
        .expect("store reachable");

    assert!(matches!(outcome, StatusUpdateOutcome::NotFound));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn postgres_create_keeps_insertion_order_and_refuses_duplicates(pool: PgPool) {
    let repository = SqlxAccessRequestRepositoryImpl::new(pool);
    let first = pending_request("Alice");
    let second = pending_request("Bob");

    repository.create(&first).await.expect("first insert");
    repository.create(&second).await.expect("second insert");
    let duplicate = repository.create(&first).await;

    let listed: Vec<_> = repository
        .list(None)
        .await
        .expect("store reachable")
        .iter()
        .map(|request| request.id())
        .collect();
    assert_eq!(listed, vec![first.id(), second.id()]);
    assert!(duplicate.is_err());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn postgres_list_filters_by_status_and_decodes_rows(pool: PgPool) {
    let repository = SqlxAccessRequestRepositoryImpl::new(pool);
    let requests = [
        pending_request("Alice"),
        pending_request("Bob"),
        pending_request("Carol"),
    ];
    for request in &requests {
        repository.create(request).await.expect("insert");
    }
    repository
        .update_status(requests[1].id(), &decision(DecisionKind::Approve, "Dave"))
        .await
        .expect("store reachable");

    let pending: Vec<String> = repository
        .list(Some(AccessRequestStatus::Pending))
        .await
        .expect("store reachable")
        .iter()
        .map(|request| request.name().value().to_string())
        .collect();
    assert_eq!(pending, vec!["Alice", "Carol"]);

    let approved = repository
        .list(Some(AccessRequestStatus::Approved))
        .await
        .expect("store reachable");
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].id(), requests[1].id());
    assert_eq!(approved[0].approved_by().map(ApproverName::value), Some("Dave"));

    assert!(
        repository
            .list(Some(AccessRequestStatus::Rejected))
            .await
            .expect("store reachable")
            .is_empty()
    );

    let stored = repository
        .find_by_id(requests[0].id())
        .await
        .expect("store reachable")
        .expect("request stored");
    assert_eq!(stored.status(), AccessRequestStatus::Pending);
    assert_eq!(stored.email().value(), requests[0].email().value());
    assert_eq!(stored.access_type(), requests[0].access_type());
    assert_eq!(
        stored.justification().value(),
        requests[0].justification().value()
    );
    assert!(stored.approved_by().is_none());
    assert!(stored.decided_at().is_none());
}
