// Opening a dependency's local documentation in the browser
pub mod browser;
pub mod config;
pub mod docs;
pub mod error;
pub mod runner;

pub use browser::{BrowserOpener, SystemBrowserOpener};
pub use config::Config;
pub use docs::{fetch_and_open, DocsOpener};
pub use error::Error;
pub use runner::{CommandError, CommandRunner, SystemCommandRunner};

/// Result type alias for everything in pudding-core
pub type Result<T> = std::result::Result<T, Error>;
