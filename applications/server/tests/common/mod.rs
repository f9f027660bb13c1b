/// Common test utilities and fixtures
use roster_server::{create_router, services::UserService, state::AppState};
use roster_storage::LocalStorageContext;
use std::sync::Arc;
use tempfile::TempDir;

/// Service backed by a file SQLite database that lives as long as the `TempDir`
pub async fn create_test_service() -> (Arc<UserService>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let pool = roster_storage::create_pool(&db_url).await.unwrap();
    roster_storage::run_migrations(&pool).await.unwrap();

    let service = UserService::new(Arc::new(LocalStorageContext::new(pool)));
    (Arc::new(service), temp_dir)
}

/// Router wired to a fresh database
pub async fn create_test_app() -> (axum::Router, Arc<UserService>, TempDir) {
    let (service, temp_dir) = create_test_service().await;
    let app = create_router(AppState::new(Arc::clone(&service)));
    (app, service, temp_dir)
}

pub mod fixtures {
    pub const ANN_NAME: &str = "Ann";
    pub const ANN_EMAIL: &str = "ann@x.com";
}
