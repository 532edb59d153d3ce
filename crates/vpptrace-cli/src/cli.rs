use std::path::PathBuf;

/// The VPP packet tracer.
#[derive(clap::Parser)]
pub struct CliOpts {
    /// The command to run.
    #[clap(subcommand)]
    pub action: CliAction,
}

/// The command to run.
#[derive(clap::Subcommand)]
pub enum CliAction {
    /// Command to trace packets entering VPP.
    Run {
        /// Tracing configuration (KDL format).
        ///
        /// If it ends with `.kdl`, it is treated as a path to a configuration
        /// file for the tracing operation. Otherwise it is directly parsed as
        /// inline KDL-formatted configuration.
        #[clap(short, long, value_name = "CONTENT/PATH")]
        config: Option<String>,

        /// Path to the optional destination of the trace.
        #[clap(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Whether to output the trace dump as returned by VPP.
        #[clap(long)]
        raw: bool,
    },

    /// Command to parse a trace dump previously returned by VPP.
    Parse {
        /// Path to the trace dump to parse.
        #[clap(short, long, value_name = "PATH")]
        input: PathBuf,

        /// Path to the optional destination of the parsed trace.
        #[clap(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Command to list the known trace input nodes.
    Nodes,
}

impl CliOpts {
    /// Parses the CLI from the command-line.
    ///
    /// # Warning
    ///
    /// Exits on error.
    pub fn parse_from_cmdline() -> Self {
        <Self as clap::Parser>::parse()
    }
}
