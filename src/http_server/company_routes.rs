//! Company HTTP Routes
//!
//! Every request is handed to the company router as method + path + raw
//! body. Path matching is done there rather than by axum, so the router
//! alone decides between 400, 404 and 405.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    Router,
};

use crate::observability::Event;
use crate::router::route;
use crate::store::CompanyStore;

/// Create company routes backed by `store`
pub fn company_routes<S: CompanyStore + 'static>(store: Arc<S>) -> Router {
    Router::new()
        .fallback(dispatch_handler::<S>)
        .with_state(store)
}

async fn dispatch_handler<S: CompanyStore + 'static>(
    State(store): State<Arc<S>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let path = uri.path();

    match route(store.as_ref(), &method, path, &body) {
        Ok(outcome) => outcome.into_response(),
        Err(err) => {
            tracing::debug!(
                event = %Event::RequestRejected,
                %method,
                path,
                status = err.status_code().as_u16(),
                reason = %err
            );
            err.into_response()
        }
    }
}
