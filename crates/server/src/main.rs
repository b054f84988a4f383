use std::net::SocketAddr;

use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use server::{create_app_router, AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    logging::init("info", "compact").expect("Failed to initialize logging");

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let db = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection established");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    let state = AppState::new(db);

    if std::env::var("MEMBER_SEARCH_DEMO_DATA").is_ok_and(|v| v == "1" || v == "true") {
        server::seed::seed_demo_members(&state)
            .await
            .expect("Failed to seed demo data");
    }

    let app = create_app_router(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()
        .expect("PORT must be a number");

    let addr = SocketAddr::new(host.parse().expect("Invalid HOST"), port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
