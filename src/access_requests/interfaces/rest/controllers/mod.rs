pub mod access_request_rest_controller;
