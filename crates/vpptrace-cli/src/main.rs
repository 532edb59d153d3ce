#![allow(missing_docs)]
#![allow(clippy::print_stderr)]

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use miette::IntoDiagnostic;

use vpptrace_cli::{CliAction, CliOpts};

use tracing_subscriber::EnvFilter;

fn main() {
    let cli = CliOpts::parse_from_cmdline();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_env_var("VPPTRACE_LOG")
                .from_env_lossy(),
        )
        .init();

    let res = match cli.action {
        CliAction::Run {
            config,
            output,
            raw,
        } => with_output(output, |out| vpptrace_cli::evaluate_run(config, out, raw)),
        CliAction::Parse { input, output } => evaluate_parse(input, output),
        CliAction::Nodes => vpptrace_cli::evaluate_nodes(std::io::stdout()),
    };

    if let Err(e) = res {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn evaluate_parse(input: PathBuf, output: Option<PathBuf>) -> miette::Result<()> {
    let input = File::open(input).into_diagnostic()?;

    with_output(output, |out| vpptrace_cli::evaluate_parse(input, out))
}

fn with_output(
    output: Option<PathBuf>,
    f: impl FnOnce(Box<dyn Write>) -> miette::Result<()>,
) -> miette::Result<()> {
    if let Some(output) = output {
        let file = File::create(output).into_diagnostic()?;
        f(Box::new(file))
    } else {
        f(Box::new(std::io::stdout()))
    }
}
