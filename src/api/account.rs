use std::sync::Arc;

use poem::http::{header, StatusCode};
use poem::web::cookie::{Cookie, SameSite};
use poem::web::{Data, Form};
use poem::{handler, post, Response, Route};
use serde::Deserialize;

use crate::api::items::action_path;
use crate::providers::token_provider::ACCESS_TOKEN_COOKIE;
use crate::providers::TokenProvider;
use crate::types::internal::ViewName;

/// Token pasted into the layout's sign-in form
#[derive(Debug, Deserialize)]
pub struct SignInForm {
    #[serde(default)]
    pub token: String,
}

/// Routes mounted under `/Account`
pub fn account_routes() -> Route {
    Route::new()
        .at("/SignIn", post(sign_in))
        .at("/SignOut", post(sign_out))
}

/// Store a valid token from `myshop issue-token` in the access cookie
#[handler]
async fn sign_in(Data(token_provider): Data<&Arc<TokenProvider>>, Form(form): Form<SignInForm>) -> Response {
    let token = form.token.trim();
    let claims = match token_provider.validate_jwt(token) {
        Ok(claims) => claims,
        Err(_) => {
            tracing::info!("Rejected sign-in with an invalid access token");
            return Response::builder()
                .status(StatusCode::UNAUTHORIZED)
                .content_type("text/plain; charset=utf-8")
                .body("Invalid access token");
        }
    };

    let mut cookie = Cookie::new_with_str(ACCESS_TOKEN_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Strict);

    tracing::info!(actor = %claims.sub, "Signed in");
    redirect_to_table(cookie)
}

#[handler]
async fn sign_out() -> Response {
    let mut cookie = Cookie::named(ACCESS_TOKEN_COOKIE);
    cookie.set_path("/");
    cookie.make_removal();
    redirect_to_table(cookie)
}

fn redirect_to_table(cookie: Cookie) -> Response {
    Response::builder()
        .status(StatusCode::SEE_OTHER)
        .header(header::LOCATION, action_path(ViewName::Table))
        .header(header::SET_COOKIE, cookie.to_string())
        .finish()
}
