mod suite;
pub use suite::{SuiteError, TestSuite};
