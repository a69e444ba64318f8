pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::*;
pub use router::{sanction_routes, SanctionState};
pub use services::ledger::SanctionLedger;
