pub mod routes;
pub mod startup;
pub mod state;
pub mod errors;
pub mod validation;
pub mod observability;
pub mod openapi;

pub use startup::run;
pub use state::AppState;
