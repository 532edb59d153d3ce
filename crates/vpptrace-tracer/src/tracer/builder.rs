use super::{DEFAULT_NUM_PACKETS, Tracer};
use crate::executor::CliExecutor;

/// Builder for [Tracer].
///
/// It is usually created by calling [Tracer::builder], and allows to
/// specify which CLI executor to use for controlling VPP's packet tracer.
pub struct Builder<S> {
    state: S,
}

impl Builder<NeedsExecutor> {
    pub(super) const fn new() -> Self {
        Self {
            state: NeedsExecutor,
        }
    }

    /// Specifies the CLI executor to use for sending commands to VPP.
    pub const fn with_executor<C: CliExecutor>(self, cli: C) -> Builder<Ready<C>> {
        Builder {
            state: Ready {
                cli,
                num_packets: DEFAULT_NUM_PACKETS,
            },
        }
    }
}

impl<C: CliExecutor> Builder<Ready<C>> {
    /// Specifies the maximum number of packets to trace per input node.
    ///
    /// A value of `0` is ignored, the default being
    /// [`DEFAULT_NUM_PACKETS`](super::DEFAULT_NUM_PACKETS).
    pub fn num_packets(mut self, num_packets: usize) -> Self {
        if num_packets > 0 {
            self.state.num_packets = num_packets;
        }
        self
    }

    /// Builds the tracer.
    pub fn build(self) -> Tracer<C> {
        Tracer {
            cli: self.state.cli,
            num_packets: self.state.num_packets,
            to_retrieve: 0,
        }
    }
}

pub struct NeedsExecutor;

pub struct Ready<C> {
    cli: C,
    num_packets: usize,
}
