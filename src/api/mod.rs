pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::{create_router, with_frontend};
pub use state::AppState;
