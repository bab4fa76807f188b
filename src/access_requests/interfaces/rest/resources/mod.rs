pub mod access_request_error_response_resource;
pub mod access_request_resource;
pub mod decide_access_request_request_resource;
pub mod submit_access_request_request_resource;
