pub mod access_request;
