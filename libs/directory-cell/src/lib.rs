pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::*;
pub use router::directory_routes;
pub use services::catalog::{BOOKING_TIME_SLOTS, SPECIALTIES};
pub use services::directory::{search, SpecialistDirectory};
