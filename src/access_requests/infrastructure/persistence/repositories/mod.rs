pub mod access_request_repository;
pub mod in_memory;
pub mod postgres;
