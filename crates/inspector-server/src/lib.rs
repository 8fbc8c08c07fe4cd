pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod store;

pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
pub use store::{ComparisonStore, StoreError};
