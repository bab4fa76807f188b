pub mod get_access_request_query;
pub mod list_access_requests_query;
