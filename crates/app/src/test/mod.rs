//! Test support shared by service and store tests.


pub use context::TestContext;
pub use db::TestDb;
