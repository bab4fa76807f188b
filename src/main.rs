use axum::Router;
use dotenvy::dotenv;
use iam_access_portal::{
    access_requests::{
        build_access_requests_router,
        interfaces::rest::resources::{
            access_request_error_response_resource::AccessRequestErrorResponseResource,
            access_request_resource::{
                AccessRequestListResource, AccessRequestResource, ListAccessRequestsQueryResource,
            },
            decide_access_request_request_resource::DecideAccessRequestRequestResource,
            submit_access_request_request_resource::SubmitAccessRequestRequestResource,
        },
    },
    config::app_config::AppConfig,
    shared::interfaces::rest::{
        controllers::health_rest_controller, resources::health_resource::HealthResource,
    },
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        iam_access_portal::shared::interfaces::rest::controllers::health_rest_controller::health_check,
        iam_access_portal::access_requests::interfaces::rest::controllers::access_request_rest_controller::submit_access_request,
        iam_access_portal::access_requests::interfaces::rest::controllers::access_request_rest_controller::list_access_requests,
        iam_access_portal::access_requests::interfaces::rest::controllers::access_request_rest_controller::get_access_request,
        iam_access_portal::access_requests::interfaces::rest::controllers::access_request_rest_controller::approve_access_request,
        iam_access_portal::access_requests::interfaces::rest::controllers::access_request_rest_controller::reject_access_request
    ),
    components(
        schemas(
            HealthResource,
            SubmitAccessRequestRequestResource,
            DecideAccessRequestRequestResource,
            ListAccessRequestsQueryResource,
            AccessRequestResource,
            AccessRequestListResource,
            AccessRequestErrorResponseResource
        )
    ),
    tags(
        (name = "health", description = "Service liveness"),
        (name = "access-requests", description = "Access request submission and approval lifecycle")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    let access_requests_router = match build_access_requests_router(&config).await {
        Ok(router) => router,
        Err(message) => {
            error!(%message, "failed to build access requests router");
            std::process::exit(1);
        }
    };

    let app = Router::new()
        .merge(health_rest_controller::router())
        .merge(access_requests_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = match tokio::net::TcpListener::bind(config.bind_address()).await {
        Ok(listener) => listener,
        Err(bind_error) => {
            error!(address = %config.bind_address(), %bind_error, "failed to bind server address");
            std::process::exit(1);
        }
    };

    info!("server listening on http://localhost:{}", config.port);
    info!(
        "Swagger UI available at http://localhost:{}/swagger-ui",
        config.port
    );

    if let Err(serve_error) = axum::serve(listener, app).await {
        error!(%serve_error, "server stopped unexpectedly");
        std::process::exit(1);
    }
}
