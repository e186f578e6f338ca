//! HTTP server and route table

use axum::{
    extract::Request,
    routing::{get, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub const HOME_PATH: &str = "/";
pub const ACTIVATE_PATH: &str = "/activate";
pub const HEALTH_PATH: &str = "/health";

/// Pages the front end can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Activation,
}

impl Page {
    fn method_router(self) -> MethodRouter<AppState> {
        match self {
            Page::Home => get(handlers::home),
            Page::Activation => get(handlers::activation_page).post(handlers::confirm),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
}

/// Immutable path -> page table, built once at startup and handed to [`mount`]
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// `/` -> home, `/activate` -> activation page
    pub fn standard() -> Self {
        Self::new(vec![
            Route {
                path: HOME_PATH,
                page: Page::Home,
            },
            Route {
                path: ACTIVATE_PATH,
                page: Page::Activation,
            },
        ])
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Exact literal match; there are no dynamic segments.
    pub fn resolve(&self, path: &str) -> Option<Page> {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| route.page)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Build the router for `table` using the provided application state
pub fn mount(table: &RouteTable, state: AppState) -> Router {
    let pages = table
        .routes()
        .iter()
        .fold(Router::<AppState>::new(), |router, route| {
            router.route(route.path, route.page.method_router())
        });

    pages
        .route(HEALTH_PATH, get(handlers::health))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .with_state(state)
}

// Path only: the query string carries the activation token.
fn request_span(request: &Request) -> tracing::Span {
    tracing::debug_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        version = ?request.version(),
    )
}

/// Convenience helper: standard route table talking to the backend over HTTP
pub fn create_router(backend_url: &str) -> Router {
    mount(&RouteTable::standard(), AppState::http(backend_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_resolves_both_pages() {
        let table = RouteTable::standard();

        assert_eq!(table.routes().len(), 2);
        assert_eq!(table.resolve("/"), Some(Page::Home));
        assert_eq!(table.resolve("/activate"), Some(Page::Activation));
    }

    #[test]
    fn test_resolve_is_literal() {
        let table = RouteTable::standard();

        assert_eq!(table.resolve("/activate/"), None);
        assert_eq!(table.resolve("/activate/abc123"), None);
        assert_eq!(table.resolve("/health"), None);
        assert_eq!(table.resolve(""), None);
    }
}
