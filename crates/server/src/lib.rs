pub mod app;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod utils;

pub use app::{BIND_ADDR, PATH_DATA, PATH_HEALTH, PATH_ROOT, app};
pub use error::ServerError;
