//! Mock implementations shared by the integration tests.

mod clients;
mod models;
mod repositories;

pub use clients::*;
pub use models::*;
pub use repositories::*;
