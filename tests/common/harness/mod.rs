//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, programmatic document creation,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod document;
mod env;

#[allow(unused_imports)]
pub use command::MdpaneCommand;
#[allow(unused_imports)]
pub use document::TestDocument;
#[allow(unused_imports)]
pub use env::TestEnv;
