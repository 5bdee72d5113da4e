//! Basic demo routes: path echo, paged items, and mock resources. No database.

use crate::handlers::{basic, not_found, resources};
use crate::routes::{common_routes, with_layers};
use crate::state::DemoState;
use axum::{routing::get, Router};

pub fn basic_routes(state: DemoState) -> Router {
    let app = Router::new()
        .route("/", get(basic::index))
        .route("/users/:id", get(basic::get_user))
        .route("/users/:user_id/posts/:post_id", get(basic::get_user_post))
        .route("/items", get(basic::list_items))
        .route("/resources", get(resources::list).post(resources::create))
        .route(
            "/resources/:id",
            get(resources::read).put(resources::update).delete(resources::delete),
        )
        .merge(common_routes())
        .fallback(not_found)
        .with_state(state);
    with_layers(app)
}
