//! Adapters binding application ports to the real system.

mod process_env;

pub use process_env::ProcessEnvironment;
