pub mod access_request_domain_error;
pub mod access_request_status;
pub mod access_type;
pub mod decision_kind;
