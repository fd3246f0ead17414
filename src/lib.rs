//! Student-management REST backend: uniform CRUD over six related entities.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use error::AppError;
pub use migration::{apply_migrations, ensure_database_exists};
pub use response::{ApiError, ApiSuccess};
pub use routes::{common_routes, entity_routes};
pub use service::{CrudService, EntityProfile};
pub use state::AppState;
pub use store::EntityStore;
