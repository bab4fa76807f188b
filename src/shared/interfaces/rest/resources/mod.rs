pub mod health_resource;
