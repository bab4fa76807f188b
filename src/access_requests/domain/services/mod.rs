pub mod access_request_command_service;
pub mod access_request_query_service;
