#[path = "support/harness.rs"]
pub mod harness;

pub use fixtures::{
    approve_command, decided_request, pending_request, reject_command, submit_command,
};
pub use harness::{create_harness, create_harness_with_repository};
