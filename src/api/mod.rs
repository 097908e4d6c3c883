// HTTP layer: catalog pages, sign-in, health API, auth middleware
pub mod account;
pub mod health;
pub mod items;
pub mod middleware;

use std::sync::Arc;

use poem::middleware::Tracing;
use poem::{get, Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

pub use account::account_routes;
pub use health::HealthApi;
pub use items::{item_routes, ItemsState};
pub use middleware::{RequestContextLayer, RequireAuthenticated};

use crate::app_data::AppData;
use crate::coordinators::ItemCoordinator;
use crate::services::ItemValidator;

/// Compose the full application endpoint from shared [`AppData`]
///
/// `/` redirects to the item table, catalog pages live under `/Item`,
/// the access-cookie sign-in under `/Account`, the health API under
/// `/api` and its Swagger UI under `/swagger`.
pub fn build_app(app_data: &AppData, server_url: &str) -> impl Endpoint {
    let state = Arc::new(ItemsState {
        coordinator: ItemCoordinator::new(app_data.item_repository.clone(), ItemValidator::new()),
        renderer: app_data.renderer.clone(),
    });

    let api_service = OpenApiService::new(
        HealthApi::new(app_data.db.clone()),
        "MyShop Catalog API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{}/api", server_url));
    let ui = api_service.swagger_ui();

    Route::new()
        .at("/", get(items::index))
        .nest("/Item", item_routes())
        .nest("/Account", account_routes())
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .data(state)
        .data(app_data.token_provider.clone())
        .with(RequestContextLayer::new(app_data.token_provider.clone()))
        .with(Tracing)
}
