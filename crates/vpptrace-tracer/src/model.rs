use crate::time::Duration;

/// Visit of a packet to a single graph node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Capture {
    /// Name of the graph node.
    pub name: String,

    /// Time of the capture, relative to the packet's first capture.
    ///
    /// See [Packet::capture_time] for the absolute time.
    pub start: Duration,

    /// Content traced by the graph node, without its left-margin
    /// indentation.
    ///
    /// Every line ends with a newline, and empty lines are removed.
    pub content: String,
}

/// Traced packet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Packet {
    /// Packet ID reported by VPP.
    pub id: u32,

    /// Time of the packet's first capture, since VPP started.
    pub start: Duration,

    /// Graph nodes visited by the packet, in emission order.
    pub captures: Vec<Capture>,
}

impl Packet {
    /// Returns the time of the given capture, since VPP started.
    pub fn capture_time(&self, capture: &Capture) -> Duration {
        self.start + capture.start
    }
}

/// Result of a packet trace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraceResult {
    /// Trace dump, as returned by VPP.
    pub raw_trace: String,

    /// Packets parsed from the trace dump, across all threads.
    pub packets: Vec<Packet>,
}

impl TraceResult {
    /// Returns whether no packet was traced.
    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }
}
