//! Route listing served at `/`.

use axum::response::Html;
use tracing::debug;

/// HTML listing of every data route
pub const ROUTE_LISTING: &str = concat!(
    "Welcome to the Hawaii weather analysis homework API!<br/><br/>",
    "Available Routes:<br/>",
    "/api/v1.0/precipitation<br/>",
    "/api/v1.0/stations<br/>",
    "/api/v1.0/tobs<br/>",
    "/api/v1.0/yyyy-mm-dd<br/>",
    "/api/v1.0/yyyy-mm-dd/yyyy-mm-dd",
);

/// Handle GET / requests
pub async fn home_handler() -> Html<&'static str> {
    debug!(endpoint = "/", "Serving route listing");
    Html(ROUTE_LISTING)
}
