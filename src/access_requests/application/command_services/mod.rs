pub mod access_request_command_service_impl;
