use std::sync::Arc;

use poem::http::{header, StatusCode};
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

use crate::providers::TokenProvider;
use crate::types::internal::context::RequestContext;

/// Attaches a [`RequestContext`] to every request's extensions
pub struct RequestContextLayer {
    token_provider: Arc<TokenProvider>,
}

impl RequestContextLayer {
    pub fn new(token_provider: Arc<TokenProvider>) -> Self {
        Self { token_provider }
    }
}

impl<E: Endpoint> Middleware<E> for RequestContextLayer {
    type Output = RequestContextEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        RequestContextEndpoint {
            inner: ep,
            token_provider: self.token_provider.clone(),
        }
    }
}

pub struct RequestContextEndpoint<E> {
    inner: E,
    token_provider: Arc<TokenProvider>,
}

impl<E: Endpoint> Endpoint for RequestContextEndpoint<E> {
    type Output = E::Output;

    async fn call(&self, mut req: Request) -> Result<Self::Output> {
        let ctx = RequestContext::from_request(&req, &self.token_provider);
        req.extensions_mut().insert(ctx);
        self.inner.call(req).await
    }
}

/// Rejects callers without a valid bearer token before the handler runs
///
/// Must sit inside [`RequestContextLayer`]; a request with no context is
/// treated as anonymous.
pub struct RequireAuthenticated;

impl<E: Endpoint> Middleware<E> for RequireAuthenticated {
    type Output = RequireAuthenticatedEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        RequireAuthenticatedEndpoint { inner: ep }
    }
}

pub struct RequireAuthenticatedEndpoint<E> {
    inner: E,
}

impl<E: Endpoint> Endpoint for RequireAuthenticatedEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        let authenticated = req
            .extensions()
            .get::<RequestContext>()
            .is_some_and(|ctx| ctx.authenticated);

        if !authenticated {
            tracing::info!(
                method = %req.method(),
                path = %req.uri().path(),
                "Rejected unauthenticated request"
            );
            return Ok(Response::builder()
                .status(StatusCode::UNAUTHORIZED)
                .header(header::WWW_AUTHENTICATE, "Bearer")
                .content_type("text/plain; charset=utf-8")
                .body("Unauthorized"));
        }

        self.inner.call(req).await.map(IntoResponse::into_response)
    }
}
