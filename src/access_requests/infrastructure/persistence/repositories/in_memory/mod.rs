pub mod in_memory_access_request_repository_impl;
