pub mod sqlx_access_request_repository_impl;
