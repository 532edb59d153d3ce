use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use miette::IntoDiagnostic;
use vpptrace_tracer::nodes;
use vpptrace_tracer::tracer::Tracer;

use crate::{TraceConfig, Vppctl, write_kdl};

/// Runs the subcommand for tracing packets.
pub fn evaluate_run(
    config: Option<String>,
    mut output: impl Write,
    raw: bool,
) -> miette::Result<()> {
    let config = parse_run_config(config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .into_diagnostic()?;

    let trace = runtime.block_on(async {
        let cli = Vppctl::new(&config.vppctl).with_socket(config.socket.as_deref());

        let mut tracer = Tracer::builder()
            .with_executor(cli)
            .num_packets(config.num_packets)
            .build();

        tracer
            .begin_trace(config.node_names())
            .await
            .into_diagnostic()?;

        tokio::time::sleep(Duration::from_millis(config.duration_ms)).await;

        tracer.end_trace().await.into_diagnostic()
    })?;

    if trace.is_empty() {
        tracing::warn!("no packet traced");
    }

    if raw {
        output
            .write_all(trace.raw_trace.as_bytes())
            .into_diagnostic()
    } else {
        write_kdl(&trace, output)
    }
}

/// Runs the subcommand for listing the trace input nodes.
pub fn evaluate_nodes(mut output: impl Write) -> miette::Result<()> {
    for node in nodes::AVAILABLE {
        let marker = if nodes::ALL.contains(node) { "*" } else { " " };
        writeln!(output, "{marker} {node}").into_diagnostic()?;
    }

    Ok(())
}

fn parse_run_config(config: Option<String>) -> miette::Result<TraceConfig> {
    let Some(config) = config else {
        return Ok(knus::parse("<content>", "")?);
    };

    let path = Path::new(&config);

    let config = if let Some((filename, "kdl")) = path
        .file_name()
        .and_then(OsStr::to_str)
        .zip(path.extension().and_then(OsStr::to_str))
    {
        let content = std::fs::read_to_string(path).into_diagnostic()?;
        knus::parse(filename, &content)?
    } else {
        knus::parse("<content>", &config)?
    };

    Ok(config)
}
