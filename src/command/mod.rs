pub mod release;

pub use release::{execute, execute_with, set_versions};
