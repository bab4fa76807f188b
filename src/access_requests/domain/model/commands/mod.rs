pub mod decide_access_request_command;
pub mod submit_access_request_command;
