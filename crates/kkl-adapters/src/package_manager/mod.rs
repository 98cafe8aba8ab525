//! Package-manager adapters.

mod process;

pub use process::ProcessInstaller;
