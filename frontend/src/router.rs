//! The two pages and their paths.
//!
//! Navigation goes through the History API so `/reports` can be bookmarked;
//! the host falls back to `index.html` for unknown paths.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Reports,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Dashboard, Route::Reports];

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Reports => "/reports",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Reports => "Reports",
        }
    }

    /// Unknown paths land on the dashboard.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/reports" => Route::Reports,
            _ => Route::Dashboard,
        }
    }
}

pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|p| Route::from_path(&p))
        .unwrap_or(Route::Dashboard)
}

/// Records `route` in the browser history without reloading.
pub fn push_route(route: Route) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        history
            .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path()))
            .ok();
    }
}
