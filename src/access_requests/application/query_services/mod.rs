pub mod access_request_query_service_impl;
