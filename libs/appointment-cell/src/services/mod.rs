pub mod ledger;
pub mod lifecycle;
