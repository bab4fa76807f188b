pub mod health_rest_controller;
