use axum::{http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todolist_api::{config::Config, db, routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let pool = db::create_pool(&config.database_url()).await?;
    db::ensure_tables(&pool).await?;
    info!("Database connected and tables ensured");

    let state = AppState { db: pool };

    // Public API, callable from any origin.
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .allow_origin(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        // Activity groups
        .route(
            "/activity-groups",
            get(routes::activities::list_activities).post(routes::activities::create_activity),
        )
        .route(
            "/activity-groups/{id}",
            get(routes::activities::get_activity)
                .patch(routes::activities::patch_activity)
                .delete(routes::activities::delete_activity),
        )
        // Todo items
        .route(
            "/todo-items",
            get(routes::todos::list_todos).post(routes::todos::create_todo),
        )
        .route(
            "/todo-items/{id}",
            get(routes::todos::get_todo)
                .patch(routes::todos::patch_todo)
                .delete(routes::todos::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("todolist API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
