use std::sync::Arc;

use iam_access_portal::access_requests::domain::{
    model::{
        enums::{
            access_request_domain_error::AccessRequestDomainError,
            access_request_status::AccessRequestStatus,
        },
        queries::list_access_requests_query::ListAccessRequestsQuery,
        value_objects::approver_name::ApproverName,
    },
    services::{
        access_request_command_service::AccessRequestCommandService,
        access_request_query_service::AccessRequestQueryService,
    },
};
use tokio::sync::Barrier;

use crate::support::{
    approve_command, create_harness, pending_request, reject_command, submit_command,
};

const CONTENDERS: usize = 16;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_decisions_on_one_request_have_exactly_one_winner() {
    let request = pending_request("Alice");
    let harness = create_harness(vec![request.clone()]);
    let barrier = Arc::new(Barrier::new(CONTENDERS));

    let mut handles = Vec::with_capacity(CONTENDERS);
    for contender in 0..CONTENDERS {
        let service = harness.command_service.clone();
        let barrier = barrier.clone();
        let approver = format!("approver-{contender}");
        let command = if contender % 2 == 0 {
            approve_command(&request, &approver, None)
        } else {
            reject_command(&request, &approver, "not needed")
        };
        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            service.handle_decide(command).await
        }));
    }

    let mut winners = Vec::new();
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.expect("decision task panicked") {
            Ok(decided) => winners.push(decided),
            Err(AccessRequestDomainError::InvalidStatusTransition) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(winners.len(), 1);
    assert_eq!(conflicts, CONTENDERS - 1);

    let winner = &winners[0];
    let stored = harness
        .query_service
        .handle_list(ListAccessRequestsQuery::all())
        .await
        .expect("list should succeed")
        .into_iter()
        .find(|stored| stored.id() == request.id())
        .expect("request stored");
    assert_eq!(stored.status(), winner.status());
    assert_eq!(
        stored.approved_by().map(ApproverName::value),
        winner.approved_by().map(ApproverName::value)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn decisions_on_different_requests_all_succeed() {
    let requests: Vec<_> = (0..CONTENDERS)
        .map(|index| pending_request(&format!("requester-{index}")))
        .collect();
    let harness = create_harness(requests.clone());
    let barrier = Arc::new(Barrier::new(CONTENDERS));

    let handles: Vec<_> = requests
        .iter()
        .map(|request| {
            let service = harness.command_service.clone();
            let barrier = barrier.clone();
            let command = approve_command(request, "Bob", Some("batch review"));
            tokio::spawn(async move {
                barrier.wait().await;
                service.handle_decide(command).await
            })
        })
        .collect();

    for handle in handles {
        let decided = handle
            .await
            .expect("decision task panicked")
            .expect("independent decisions should succeed");
        assert_eq!(decided.status(), AccessRequestStatus::Approved);
    }

    let pending = harness
        .query_service
        .handle_list(ListAccessRequestsQuery::with_status(
            AccessRequestStatus::Pending,
        ))
        .await
        .expect("list should succeed");
    assert!(pending.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_submissions_are_all_stored_once() {
    let harness = create_harness(vec![]);

    let handles: Vec<_> = (0..CONTENDERS)
        .map(|index| {
            let service = harness.command_service.clone();
            tokio::spawn(async move {
                service
                    .handle_submit(submit_command(&format!("requester-{index}")))
                    .await
            })
        })
        .collect();

    let mut created_ids = Vec::new();
    for handle in handles {
        let created = handle
            .await
            .expect("submission task panicked")
            .expect("submission should succeed");
        created_ids.push(created.id());
    }

    let listed = harness
        .query_service
        .handle_list(ListAccessRequestsQuery::all())
        .await
        .expect("list should succeed");
    assert_eq!(listed.len(), CONTENDERS);
    for id in created_ids {
        assert_eq!(listed.iter().filter(|request| request.id() == id).count(), 1);
    }
}
