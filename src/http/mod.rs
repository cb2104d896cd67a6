//! # HTTP Transport
//!
//! An `axum` router over a [`CatalogClient`]. Handlers translate requests into
//! client calls and [`FrameworkError`](crate::framework::FrameworkError)s into
//! status codes; they hold no catalog state of their own.
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `GET` | `/api/cities` | 200 |
//! | `GET` | `/api/cities/{city_id}` | 200 |
//! | `GET` | `/api/cities/{city_id}/pointsofinterest` | 200 |
//! | `GET` | `/api/cities/{city_id}/pointsofinterest/{id}` | 200 |
//! | `POST` | `/api/cities/{city_id}/pointsofinterest` | 201 + `Location` |
//! | `PUT` | `/api/cities/{city_id}/pointsofinterest/{id}` | 204 |
//! | `PATCH` | `/api/cities/{city_id}/pointsofinterest/{id}` | 204 |
//! | `DELETE` | `/api/cities/{city_id}/pointsofinterest/{id}` | 204 |
//!
//! Failures are described in [`problem`].

mod handlers;
pub mod problem;

use crate::framework::CatalogClient;
use axum::routing::get;
use axum::Router;

pub use problem::ApiError;

/// Builds the service's router. Every route shares `client`.
pub fn router(client: CatalogClient) -> Router {
    Router::new()
        .route("/api/cities", get(handlers::list_cities))
        .route("/api/cities/{city_id}", get(handlers::get_city))
        .route(
            "/api/cities/{city_id}/pointsofinterest",
            get(handlers::list_points_of_interest).post(handlers::create_point_of_interest),
        )
        .route(
            "/api/cities/{city_id}/pointsofinterest/{id}",
            get(handlers::get_point_of_interest)
                .put(handlers::replace_point_of_interest)
                .patch(handlers::patch_point_of_interest)
                .delete(handlers::delete_point_of_interest),
        )
        .with_state(client)
}
