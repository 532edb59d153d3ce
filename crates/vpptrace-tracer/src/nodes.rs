//! Graph input nodes at which packets can be traced.
//!
//! The names are passed verbatim to `trace add <node> <count>`.

/// AF_PACKET interfaces.
pub const AF_PACKET_INPUT: &str = "af-packet-input";
/// Intel Adaptive Virtual Function interfaces.
pub const AVF_INPUT: &str = "avf-input";
/// Bonded interfaces.
pub const BOND_PROCESS: &str = "bond-process";
/// DPDK crypto devices.
pub const DPDK_CRYPTO_INPUT: &str = "dpdk-crypto-input";
/// DPDK interfaces.
pub const DPDK_INPUT: &str = "dpdk-input";
/// Packets handed off between worker threads.
pub const HANDOFF_TRACE: &str = "handoff-trace";
/// Intel 82599 interfaces.
pub const IXGE_INPUT: &str = "ixge-input";
/// Shared memory packet interfaces.
pub const MEMIF_INPUT: &str = "memif-input";
/// Marvell PP2 interfaces.
pub const MRVL_PP2_INPUT: &str = "mrvl-pp2-input";
/// Netmap interfaces.
pub const NETMAP_INPUT: &str = "netmap-input";
/// Point-to-point ethernet sub-interfaces.
pub const P2P_ETHERNET_INPUT: &str = "p2p-ethernet-input";
/// Packet generator.
pub const PG_INPUT: &str = "pg-input";
/// Punt sockets.
pub const PUNT_SOCKET_RX: &str = "punt-socket-rx";
/// RDMA interfaces.
pub const RDMA_INPUT: &str = "rdma-input";
/// Host stack sessions.
pub const SESSION_QUEUE: &str = "session-queue";
/// TUN/TAP interfaces.
pub const TUNTAP_RX: &str = "tuntap-rx";
/// Vhost-user interfaces.
pub const VHOST_USER_INPUT: &str = "vhost-user-input";
/// Virtio interfaces.
pub const VIRTIO_INPUT: &str = "virtio-input";
/// VMware vmxnet3 interfaces.
pub const VMXNET3_INPUT: &str = "vmxnet3-input";

/// Commonly useful input nodes.
///
/// Optional hardware or feature nodes, which are not present in every VPP
/// build, are left out.
pub const ALL: &[&str] = &[
    AF_PACKET_INPUT,
    AVF_INPUT,
    BOND_PROCESS,
    MEMIF_INPUT,
    P2P_ETHERNET_INPUT,
    PG_INPUT,
    PUNT_SOCKET_RX,
    RDMA_INPUT,
    SESSION_QUEUE,
    TUNTAP_RX,
    VHOST_USER_INPUT,
    VIRTIO_INPUT,
    VMXNET3_INPUT,
];

/// Every known input node.
pub const AVAILABLE: &[&str] = &[
    AF_PACKET_INPUT,
    AVF_INPUT,
    BOND_PROCESS,
    DPDK_CRYPTO_INPUT,
    DPDK_INPUT,
    HANDOFF_TRACE,
    IXGE_INPUT,
    MEMIF_INPUT,
    MRVL_PP2_INPUT,
    NETMAP_INPUT,
    P2P_ETHERNET_INPUT,
    PG_INPUT,
    PUNT_SOCKET_RX,
    RDMA_INPUT,
    SESSION_QUEUE,
    TUNTAP_RX,
    VHOST_USER_INPUT,
    VIRTIO_INPUT,
    VMXNET3_INPUT,
];
