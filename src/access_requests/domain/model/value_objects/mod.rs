pub mod access_request_decision;
pub mod access_request_id;
pub mod approval_notes;
pub mod approver_name;
pub mod justification;
pub mod requester_email;
pub mod requester_name;
