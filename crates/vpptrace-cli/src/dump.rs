use std::io::{Read, Write};

use kdl::{KdlDocument, KdlEntry, KdlNode};
use miette::IntoDiagnostic;
use vpptrace_tracer::model::{Capture, Packet, TraceResult};
use vpptrace_tracer::parser::parse_trace;

/// Runs the subcommand for parsing a trace dump.
pub fn evaluate_parse(mut input: impl Read, output: impl Write) -> miette::Result<()> {
    let mut raw_trace = String::new();
    input.read_to_string(&mut raw_trace).into_diagnostic()?;

    let trace = parse_trace(&raw_trace).into_diagnostic()?;

    write_kdl(&trace, output)
}

/// Writes the packets of a trace in KDL format.
pub fn write_kdl(trace: &TraceResult, mut output: impl Write) -> miette::Result<()> {
    let mut kdl = dump_to_kdl(trace);

    kdl.autoformat();

    output
        .write_all(kdl.to_string().as_bytes())
        .into_diagnostic()?;

    Ok(())
}

/// Converts the packets of a trace to a KDL document.
///
/// Each packet is dumped as a `packet` node, with one `capture` child node
/// per visited graph node.
pub fn dump_to_kdl(trace: &TraceResult) -> KdlDocument {
    let mut kdl = KdlDocument::new();

    for packet in trace.packets.iter() {
        kdl.nodes_mut().push(dump_packet_to_kdl_node(packet));
    }

    kdl
}

fn dump_packet_to_kdl_node(packet: &Packet) -> KdlNode {
    let mut node = KdlNode::new("packet");

    node.entries_mut().push(i128::from(packet.id).into());
    node.entries_mut()
        .push(KdlEntry::new_prop("start", packet.start.to_string()));

    for capture in packet.captures.iter() {
        node.ensure_children()
            .nodes_mut()
            .push(dump_capture_to_kdl_node(capture));
    }

    node
}

fn dump_capture_to_kdl_node(capture: &Capture) -> KdlNode {
    let mut node = KdlNode::new("capture");

    node.entries_mut().push(KdlEntry::new(capture.name.clone()));
    node.entries_mut()
        .push(KdlEntry::new_prop("start", capture.start.to_string()));

    if !capture.content.is_empty() {
        node.entries_mut()
            .push(KdlEntry::new(capture.content.clone()));
    }

    node
}
