use std::sync::Arc;

use poem::http::StatusCode;
use poem::web::{Data, Form, Html, Query, Redirect};
use poem::{get, handler, post, EndpointExt, IntoResponse, Response, Result, Route};

use crate::api::middleware::RequireAuthenticated;
use crate::coordinators::ItemCoordinator;
use crate::types::dto::items::{ItemForm, ItemIdQuery};
use crate::types::internal::context::RequestContext;
use crate::types::internal::{Outcome, ViewName};
use crate::views::ViewRenderer;

/// Shared state behind the `/Item` routes
pub struct ItemsState {
    pub coordinator: ItemCoordinator,
    pub renderer: Arc<dyn ViewRenderer>,
}

/// Path of the action that renders `view`
pub fn action_path(view: ViewName) -> &'static str {
    match view {
        ViewName::Table => "/Item/Table",
        ViewName::Grid => "/Item/Grid",
        ViewName::Details => "/Item/Details",
        ViewName::Create => "/Item/Create",
        ViewName::Update => "/Item/Update",
        ViewName::Delete => "/Item/Delete",
    }
}

/// Routes mounted under `/Item`; create, update and delete are gated
pub fn item_routes() -> Route {
    Route::new()
        .at("/Table", get(table))
        .at("/Grid", get(grid))
        .at("/Details", get(details))
        .at("/Create", get(create_form).post(create).with(RequireAuthenticated))
        .at("/Update", get(update_form).post(update).with(RequireAuthenticated))
        .at("/Delete", get(delete_form).with(RequireAuthenticated))
        .at("/DeleteConfirmed", post(delete_confirmed).with(RequireAuthenticated))
}

#[handler]
pub async fn index() -> Redirect {
    Redirect::see_other(action_path(ViewName::Table))
}

#[handler]
async fn table(Data(state): Data<&Arc<ItemsState>>, Data(ctx): Data<&RequestContext>) -> Result<Response> {
    let outcome = state.coordinator.table(ctx).await;
    respond(outcome, state.renderer.as_ref())
}

#[handler]
async fn grid(Data(state): Data<&Arc<ItemsState>>, Data(ctx): Data<&RequestContext>) -> Result<Response> {
    let outcome = state.coordinator.grid(ctx).await;
    respond(outcome, state.renderer.as_ref())
}

#[handler]
async fn details(
    Data(state): Data<&Arc<ItemsState>>,
    Data(ctx): Data<&RequestContext>,
    Query(query): Query<ItemIdQuery>,
) -> Result<Response> {
    let outcome = state.coordinator.details(ctx, query.id).await;
    respond(outcome, state.renderer.as_ref())
}

#[handler]
async fn create_form(Data(state): Data<&Arc<ItemsState>>) -> Result<Response> {
    respond(state.coordinator.create_form(), state.renderer.as_ref())
}

#[handler]
async fn create(
    Data(state): Data<&Arc<ItemsState>>,
    Data(ctx): Data<&RequestContext>,
    Form(form): Form<ItemForm>,
) -> Result<Response> {
    let outcome = state.coordinator.create(ctx, form).await;
    respond(outcome, state.renderer.as_ref())
}

#[handler]
async fn update_form(
    Data(state): Data<&Arc<ItemsState>>,
    Data(ctx): Data<&RequestContext>,
    Query(query): Query<ItemIdQuery>,
) -> Result<Response> {
    let outcome = state.coordinator.update_form(ctx, query.id).await;
    respond(outcome, state.renderer.as_ref())
}

#[handler]
async fn update(
    Data(state): Data<&Arc<ItemsState>>,
    Data(ctx): Data<&RequestContext>,
    Form(form): Form<ItemForm>,
) -> Result<Response> {
    let outcome = state.coordinator.update(ctx, form).await;
    respond(outcome, state.renderer.as_ref())
}

#[handler]
async fn delete_form(
    Data(state): Data<&Arc<ItemsState>>,
    Data(ctx): Data<&RequestContext>,
    Query(query): Query<ItemIdQuery>,
) -> Result<Response> {
    let outcome = state.coordinator.delete_form(ctx, query.id).await;
    respond(outcome, state.renderer.as_ref())
}

#[handler]
async fn delete_confirmed(
    Data(state): Data<&Arc<ItemsState>>,
    Data(ctx): Data<&RequestContext>,
    Query(query): Query<ItemIdQuery>,
) -> Result<Response> {
    let outcome = state.coordinator.delete_confirmed(ctx, query.id).await;
    respond(outcome, state.renderer.as_ref())
}

/// Map an [`Outcome`] onto an HTTP response
///
/// Render failures surface as a plain 500.
pub fn respond(outcome: Outcome, renderer: &dyn ViewRenderer) -> Result<Response> {
    match outcome {
        Outcome::View { view, model } => {
            let body = renderer.render(view, &model).map_err(|e| {
                tracing::error!(error = %e, "View rendering failed");
                poem::Error::from_string(e.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
            })?;
            Ok(Html(body).into_response())
        }
        Outcome::RedirectToAction(view) => Ok(Redirect::see_other(action_path(view)).into_response()),
        Outcome::NotFound(message) => Ok(plain_text(StatusCode::NOT_FOUND, message)),
        Outcome::BadRequest(message) => Ok(plain_text(StatusCode::BAD_REQUEST, message)),
    }
}

fn plain_text(status: StatusCode, message: &'static str) -> Response {
    Response::builder()
        .status(status)
        .content_type("text/plain; charset=utf-8")
        .body(message)
}
