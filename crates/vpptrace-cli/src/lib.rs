//! Crate implementing the CLI commands.

mod cli;
mod config;
mod dump;
mod executor;
mod run;

pub use self::cli::{CliAction, CliOpts};
pub use self::config::{TraceConfig, TraceNode};
pub use self::dump::{dump_to_kdl, evaluate_parse, write_kdl};
pub use self::executor::{Vppctl, VppctlError};
pub use self::run::{evaluate_nodes, evaluate_run};
