//! Audit database: one `log` table recording every roster mutation.

pub mod log;
pub mod migrate;
pub mod pool;

pub use migrate::run_pending_migrations;
