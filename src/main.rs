use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{delete, get, post},
};
use faculty_backend::{
    AppState,
    config::Config,
    mail::Mailer,
    middleware::{auth_middleware, log_errors, require_admin, require_faculty},
    routes,
};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("Failed to load configuration");

    #[cfg(debug_assertions)]
    tracing::info!("Running in debug mode with CORS enabled");

    #[cfg(not(debug_assertions))]
    tracing::info!("Running in production mode with CORS disabled");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to Postgres");

    let mailer = Arc::new(Mailer::from_config(&config));
    if !mailer.is_configured() {
        tracing::warn!("Generated faculty passwords will be returned inline");
    }

    let state = AppState {
        pool,
        config: config.clone(),
        mailer,
    };

    let public_routes = Router::new()
        .route("/login", post(routes::auth::login))
        .route("/health", get(routes::health));

    // Reachable by either principal class.
    let authed_routes = Router::new()
        .route("/me", get(routes::auth::me))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    let admin_routes = Router::new()
        .route(
            "/generate-password",
            post(routes::auth::generate_faculty_password),
        )
        .route("/admin/faculty", get(routes::admin::list_faculty))
        .route(
            "/admin/faculty/{faculty_id}",
            get(routes::admin::faculty_details),
        )
        .route(
            "/admin/export/faculty/{faculty_id}/pdf",
            get(routes::admin::export_faculty_pdf),
        )
        .route(
            "/admin/export/all/excel",
            get(routes::admin::export_all_excel),
        )
        .route("/admin/export/all/pdf", get(routes::admin::export_all_pdf))
        .route(
            "/admin/academic-years",
            get(routes::admin::academic_years),
        )
        .route("/admin/departments", get(routes::admin::departments))
        .route_layer(from_fn(require_admin))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    let faculty_routes = Router::new()
        .route(
            "/faculty/profile",
            get(routes::faculty::get_profile).post(routes::faculty::update_profile),
        )
        .route(
            "/faculty/publications",
            get(routes::faculty::list_publications).post(routes::faculty::add_publication),
        )
        .route(
            "/faculty/publications/{publication_id}",
            delete(routes::faculty::delete_publication),
        )
        .route(
            "/faculty/awards",
            get(routes::faculty::list_awards).post(routes::faculty::add_award),
        )
        .route(
            "/faculty/research-projects",
            get(routes::faculty::list_research_projects)
                .post(routes::faculty::add_research_project),
        )
        .route(
            "/faculty/patents",
            get(routes::faculty::list_patents).post(routes::faculty::add_patent),
        )
        .route(
            "/faculty/conferences",
            get(routes::faculty::list_conferences).post(routes::faculty::add_conference),
        )
        .route("/faculty/all-data", get(routes::faculty::all_data))
        .route(
            "/faculty/export/my-pdf",
            get(routes::faculty::export_my_pdf),
        )
        .route_layer(from_fn(require_faculty))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    let router = Router::new().nest(
        "/api",
        Router::new()
            .merge(public_routes)
            .merge(authed_routes)
            .merge(admin_routes)
            .merge(faculty_routes),
    );

    let router = router.layer(from_fn(log_errors));

    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(CorsLayer::permissive())
    };

    let app = router.with_state(state.clone());

    let addr = SocketAddr::new(
        state.config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        state.config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}
