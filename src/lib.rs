pub mod access_requests;
pub mod config;
pub mod shared;
