use std::sync::Arc;

use poem::listener::TcpListener;
use poem::Server;

use crate::api::build_app;
use crate::app_data::AppData;
use crate::cli::seed::{sample_items, seed_sample_items};
use crate::config::{connect_database, migrate_database, BootstrapSettings, SecretManager};
use crate::stores::ItemStore;
use crate::types::internal::context::RequestContext;

/// Build application data and run the HTTP server until it stops
///
/// With `in_memory` the sample menu is served from a process-local store
/// and the database is never touched.
pub async fn run_server(
    settings: &BootstrapSettings,
    secret_manager: Arc<SecretManager>,
    in_memory: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let app_data = if in_memory {
        AppData::in_memory(sample_items(), secret_manager)?
    } else {
        let db = connect_database(settings).await?;
        migrate_database(&db).await?;

        if settings.seed_sample_items() {
            let ctx = RequestContext::for_system("startup_seed");
            seed_sample_items(&ItemStore::new(db.clone()), &ctx).await?;
        }

        AppData::init(db, secret_manager)?
    };

    let address = settings.server_address();
    let public_url = format!("http://localhost:{}", settings.server_port());
    let app = build_app(&app_data, &public_url);

    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Item catalog available at {}/Item/Table", public_url);
    tracing::info!("Swagger UI available at {}/swagger", public_url);

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}
