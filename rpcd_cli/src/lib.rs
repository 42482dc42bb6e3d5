//! Native client for the rpcd API: a `reqwest` transport for [`rpcd::Api`],
//! a status poller and the `rpcd-cli` command line.

pub mod app;
pub mod cli;
pub mod exit;
pub mod output;
pub mod poller;
pub mod transport;

pub use app::{api_for, run};
pub use cli::{Action, Cli};
pub use exit::{exit_code_for, ExitCode, UsageError};
pub use poller::{StatusPoller, StatusSource};
pub use transport::ReqwestTransport;
