//! This crate allows to capture packets traversing a VPP instance and to
//! parse the resulting trace dump.
//!
//! Two main components are provided:
//! - A [Tracer](self::tracer::Tracer), driving the `trace add`/`show trace`
//!   lifecycle through any [CliExecutor](self::executor::CliExecutor).
//! - A [trace dump parser](self::parser::parse_trace), turning the textual
//!   output of `show trace` into [packets](self::model::Packet) and their
//!   [captures](self::model::Capture).
//!
//! # Tracing packets
//!
//! ```no_run
//! use vpptrace_tracer::executor::CliExecutor;
//! use vpptrace_tracer::nodes;
//! use vpptrace_tracer::tracer::Tracer;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut tracer = Tracer::builder()
//!         .with_executor(CustomExecutor)
//!         .num_packets(100)
//!         .build();
//!
//!     tracer.begin_trace(nodes::ALL).await.unwrap();
//!
//!     //
//!     // let some traffic flow
//!     //
//!
//!     let trace = tracer.end_trace().await.unwrap();
//!
//!     for packet in trace.packets {
//!         println!("packet {} went through {} nodes", packet.id, packet.captures.len());
//!     }
//! }
//!
//! struct CustomExecutor;
//!
//! impl CliExecutor for CustomExecutor {
//!     type Error = std::io::Error;
//!
//!     async fn run_cli(&mut self, _command: &str) -> Result<String, Self::Error> {
//!         //
//!         // send the command to VPP (e.g., over the CLI socket)
//!         //
//!
//!         Ok(String::new())
//!     }
//! }
//! ```
//!
//! # Parsing a trace dump
//!
//! If the dump was already retrieved by other means, it can be parsed
//! directly with [parse_trace](self::parser::parse_trace).

mod error;

/// Module containing the trait for sending commands to VPP.
pub mod executor;

/// Module containing the trace data model.
pub mod model;

/// Module containing the names of the trace input nodes.
pub mod nodes;

/// Module implementing the trace dump parser.
pub mod parser;

/// Module containing the duration type used by traces.
pub mod time;

/// Module implementing the packet tracer.
pub mod tracer;

pub use self::error::{Error, ExecutorError, ParseError, Result};
