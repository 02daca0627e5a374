use axum::{routing::get, Router};

use crate::{
    handlers::{category, health},
    state::AppState,
};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/v1/categories",
            get(category::list_categories_handler).post(category::create_category_handler),
        )
        .route(
            "/v1/categories/:id",
            get(category::get_category_handler)
                .put(category::update_category_handler)
                .delete(category::delete_category_handler),
        )
        .with_state(state)
}
