use std::net::IpAddr;

use poem::http::header;
use poem::web::cookie::Cookie;
use poem::Request;
use poem_openapi::auth::Bearer;

use crate::providers::token_provider::ACCESS_TOKEN_COOKIE;
use crate::providers::TokenProvider;
use crate::types::internal::auth::Claims;

use super::{request_id::RequestId, request_source::RequestSource};

/// Request context that flows from the HTTP layer into coordinators
///
/// Carries what logging and the authorization gate need to know about
/// the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    /// IP address of the client making the request
    pub ip_address: Option<IpAddr>,

    /// Unique identifier for this request (for log correlation)
    pub request_id: RequestId,

    /// Whether the request carried a valid bearer token
    pub authenticated: bool,

    /// Source of the request (API, CLI, or System)
    pub source: RequestSource,

    /// Actor who initiated the operation
    pub actor_id: String,
}

impl RequestContext {
    /// Unauthenticated API context
    pub fn new() -> Self {
        Self {
            ip_address: None,
            request_id: RequestId::new(),
            authenticated: false,
            source: RequestSource::API,
            actor_id: "unknown".to_owned(),
        }
    }

    /// Create a RequestContext for CLI operations
    pub fn for_cli(command_name: &str) -> Self {
        Self {
            source: RequestSource::CLI,
            actor_id: format!("cli:{}", command_name),
            ..Self::new()
        }
    }

    /// Create a RequestContext for system operations
    pub fn for_system(operation_name: &str) -> Self {
        Self {
            source: RequestSource::System,
            actor_id: format!("system:{}", operation_name),
            ..Self::new()
        }
    }

    /// Build the context for an inbound HTTP request
    ///
    /// The token is read from `Authorization: Bearer`, or from the
    /// `access_token` cookie set by the sign-in form. A token that fails
    /// validation leaves the context unauthenticated; rejecting the
    /// request is the gate's decision.
    pub fn from_request(req: &Request, token_provider: &TokenProvider) -> Self {
        let mut ctx = Self::new();
        if let Some(ip) = Self::extract_ip_address(req) {
            ctx = ctx.with_ip_address(ip);
        }

        if let Some(bearer) = Self::extract_bearer(req).or_else(|| Self::extract_cookie_token(req)) {
            if let Ok(claims) = token_provider.validate_jwt(&bearer.token) {
                ctx = ctx.with_auth(claims);
            }
        }

        tracing::trace!("Request context created: {:?}", ctx);
        ctx
    }

    fn extract_bearer(req: &Request) -> Option<Bearer> {
        let value = req.header("Authorization")?;
        let (scheme, token) = value.split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("bearer") || token.trim().is_empty() {
            return None;
        }
        Some(Bearer {
            token: token.trim().to_string(),
        })
    }

    fn extract_cookie_token(req: &Request) -> Option<Bearer> {
        req.headers()
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| Cookie::parse(pair.trim()).ok())
            .find(|cookie| cookie.name() == ACCESS_TOKEN_COOKIE && !cookie.value_str().is_empty())
            .map(|cookie| Bearer {
                token: cookie.value_str().to_string(),
            })
    }

    /// Checks X-Forwarded-For, X-Real-IP, and falls back to remote address.
    fn extract_ip_address(req: &Request) -> Option<IpAddr> {
        // Proxy/load balancer
        if let Some(forwarded) = req.header("X-Forwarded-For") {
            if let Some(ip) = forwarded.split(',').next() {
                return ip.trim().parse().ok();
            }
        }

        // nginx
        if let Some(real_ip) = req.header("X-Real-IP") {
            return real_ip.trim().parse().ok();
        }

        req.remote_addr().as_socket_addr().map(|addr| addr.ip())
    }

    pub fn with_ip_address(mut self, ip_address: IpAddr) -> Self {
        self.ip_address = Some(ip_address);
        self
    }

    /// Client address for log events, `unknown` when none was found
    pub fn client_ip(&self) -> String {
        self.ip_address
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "unknown".to_owned())
    }

    /// Mark authenticated; the token subject becomes the actor
    pub fn with_auth(mut self, claims: Claims) -> Self {
        self.authenticated = true;
        self.actor_id = claims.sub;
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
