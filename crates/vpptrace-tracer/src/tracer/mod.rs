mod builder;

pub use self::builder::Builder;
use self::builder::NeedsExecutor;
use crate::error::ExecutorError;
use crate::executor::CliExecutor;
use crate::model::TraceResult;
use crate::parser::parse_trace;

/// Default maximum number of packets to trace per input node.
pub const DEFAULT_NUM_PACKETS: usize = 5000;

/// Packet tracer.
///
/// Tracing is started with [begin_trace](Self::begin_trace), and the traced
/// packets are retrieved with [end_trace](Self::end_trace).
///
/// # Note
///
/// If no input node could be traced, [end_trace](Self::end_trace) still
/// retrieves up to [num_packets](Self::num_packets) packets.
pub struct Tracer<C> {
    /// CLI executor connected to VPP.
    pub(super) cli: C,

    /// Maximum number of packets to trace per input node.
    pub(super) num_packets: usize,

    /// Number of packets requested since the last call to
    /// [begin_trace](Self::begin_trace).
    pub(super) to_retrieve: usize,
}

impl Tracer<()> {
    /// Creates a tracer builder.
    pub const fn builder() -> Builder<NeedsExecutor> {
        Builder::new()
    }
}

impl<C: CliExecutor> Tracer<C> {
    /// Creates a tracer with the default configuration.
    pub fn new(cli: C) -> Self {
        Tracer::builder().with_executor(cli).build()
    }

    /// Returns the maximum number of packets to trace per input node.
    pub const fn num_packets(&self) -> usize {
        self.num_packets
    }

    /// Sets the maximum number of packets to trace per input node.
    ///
    /// A value of `0` is ignored.
    pub fn set_num_packets(&mut self, num_packets: usize) {
        if num_packets > 0 {
            self.num_packets = num_packets;
        }
    }

    /// Returns a reference over the inner CLI executor.
    pub const fn cli(&self) -> &C {
        &self.cli
    }

    /// Consumes the tracer, returning the inner CLI executor.
    pub fn into_cli(self) -> C {
        self.cli
    }

    /// Clears the previous trace and starts tracing packets at the given
    /// input nodes.
    ///
    /// See [nodes](crate::nodes) for the available input nodes.
    ///
    /// # Note
    ///
    /// Input nodes which can't be traced (e.g., not part of the VPP build)
    /// are reported as warnings and skipped. This function succeeds even if
    /// no input node could be traced.
    #[tracing::instrument(name = "BeginTrace", skip_all)]
    pub async fn begin_trace<I, S>(&mut self, nodes: I) -> crate::Result<(), C::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let nodes = nodes.into_iter().collect::<Vec<_>>();

        if nodes.is_empty() {
            return Err(crate::Error::EmptyNodeSet);
        }

        self.cli
            .run_cli("clear trace")
            .await
            .map_err(ExecutorError)?;

        self.to_retrieve = 0;

        for node in nodes {
            let node = node.as_ref();

            let command = format!("trace add {node} {}", self.num_packets);

            match self.cli.run_cli(&command).await {
                Ok(_) => {
                    tracing::debug!(node, "tracing node");
                    self.to_retrieve += self.num_packets;
                }
                Err(e) => {
                    tracing::warn!(node, %e, "failed to trace node");
                }
            }
        }

        tracing::info!(packets = self.to_retrieve, "trace started");

        Ok(())
    }

    /// Retrieves the traced packets.
    ///
    /// Up to `max(N * num_packets, num_packets)` packets are retrieved,
    /// `N` being the number of input nodes successfully traced by the last
    /// call to [begin_trace](Self::begin_trace).
    ///
    /// # Note
    ///
    /// Capture times are relative to their packet's first capture. Use
    /// [Packet::capture_time](crate::model::Packet::capture_time) to get
    /// absolute times.
    #[tracing::instrument(name = "EndTrace", skip_all)]
    pub async fn end_trace(&mut self) -> crate::Result<TraceResult, C::Error> {
        let max = self.to_retrieve.max(self.num_packets);

        let reply = self
            .cli
            .run_cli(&format!("show trace max {max}"))
            .await
            .map_err(ExecutorError)?;

        let trace = parse_trace(&reply.replace("\r\n", "\n"))?;

        tracing::info!(packets = trace.packets.len(), "trace retrieved");

        Ok(trace)
    }
}
