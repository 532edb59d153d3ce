use vpptrace_tracer::tracer::DEFAULT_NUM_PACKETS;

/// Configuration of packet tracing.
#[derive(Debug, PartialEq, knus::Decode)]
pub struct TraceConfig {
    /// Maximum number of packets to trace per input node.
    #[knus(child, default = DEFAULT_NUM_PACKETS, unwrap(argument))]
    pub num_packets: usize,

    /// Time to wait for packets to be traced, in milliseconds.
    #[knus(child, default = 1000, unwrap(argument))]
    pub duration_ms: u64,

    /// Path of the `vppctl` program.
    #[knus(child, default = "vppctl".into(), unwrap(argument))]
    pub vppctl: String,

    /// Path of VPP's CLI socket.
    #[knus(child, unwrap(argument))]
    pub socket: Option<String>,

    /// Input nodes to trace.
    ///
    /// If none is given, the commonly available input nodes are traced.
    #[knus(children(name = "node"))]
    pub nodes: Vec<TraceNode>,
}

/// Configuration of an input node to trace.
#[derive(Debug, PartialEq, knus::Decode)]
pub struct TraceNode {
    /// Name of the input node.
    #[knus(argument)]
    pub name: String,
}

impl TraceConfig {
    /// Returns the names of the input nodes to trace.
    pub fn node_names(&self) -> Vec<&str> {
        if self.nodes.is_empty() {
            vpptrace_tracer::nodes::ALL.to_vec()
        } else {
            self.nodes.iter().map(|node| node.name.as_str()).collect()
        }
    }
}
