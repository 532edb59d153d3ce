use indoc::indoc;
use test_log::test;
use vpptrace_tracer::model::{Capture, Packet, TraceResult};
use vpptrace_tracer::parser::parse_trace;
use vpptrace_tracer::time::Duration;

use crate::common::TWO_THREADS_TRACE;

fn parse(trace: &str) -> TraceResult {
    parse_trace(trace).expect("parse trace")
}

#[test]
fn single_packet_single_capture() {
    let trace = parse(indoc! {"
        ---- Start of thread 0 vpp_main ----
        Packet 1
        00:00:01:000123: memif-input
          memif: hw_if_index 1
    "});

    assert_eq!(
        trace.packets,
        [Packet {
            id: 1,
            start: Duration::from_secs(1) + Duration::from_micros(123),
            captures: vec![Capture {
                name: "memif-input".into(),
                start: Duration::ZERO,
                content: "memif: hw_if_index 1\n".into(),
            }],
        }]
    );
}

#[test]
fn relative_capture_times() {
    let trace = parse(indoc! {"
        ---- Start of thread 0 vpp_main ----
        Packet 1
        00:00:01:000123: memif-input
          memif: hw_if_index 1
        00:00:01:000456: ip4-input
          UDP: 10.0.0.1 -> 10.0.0.2
    "});

    let [packet] = trace.packets.as_slice() else {
        panic!("expected a single packet, got {:?}", trace.packets);
    };

    assert_eq!(packet.captures.len(), 2);
    assert_eq!(packet.captures[1].name, "ip4-input");
    assert_eq!(packet.captures[1].start, Duration::from_micros(333));
    assert_eq!(packet.captures[1].content, "UDP: 10.0.0.1 -> 10.0.0.2\n");
    assert_eq!(
        packet.capture_time(&packet.captures[1]),
        Duration::from_micros(1_000_456)
    );
}

#[test]
fn packets_of_every_thread() {
    let trace = parse(indoc! {"
        ---- Start of thread 0 vpp_main ----
        Packet 1
        00:00:01:000000: pg-input
          stream s0, 98 bytes

        ---- Start of thread 1 vpp_wk_0 ----
        Packet 2
        00:00:02:000000: pg-input
          stream s1, 98 bytes
    "});

    assert_eq!(
        trace.packets.iter().map(|p| p.id).collect::<Vec<_>>(),
        [1, 2]
    );
    assert_eq!(trace.packets[1].start, Duration::from_secs(2));
}

#[test]
fn duplicate_packet_ids_across_threads() {
    let trace = parse(indoc! {"
        ---- Start of thread 0 vpp_main ----
        Packet 1
        00:00:01:000000: pg-input
          stream s0

        ---- Start of thread 1 vpp_wk_0 ----
        Packet 1
        00:00:01:000000: pg-input
          stream s0
    "});

    assert_eq!(trace.packets.len(), 2);
    assert_eq!(trace.packets[0], trace.packets[1]);
}

#[test]
fn realistic_dump() {
    let trace = parse(TWO_THREADS_TRACE);

    assert_eq!(
        trace.packets,
        [
            Packet {
                id: 1,
                start: Duration::from_secs(62) + Duration::from_micros(10),
                captures: vec![
                    Capture {
                        name: "af-packet-input".into(),
                        start: Duration::ZERO,
                        content: String::from(indoc! {"
                            af_packet: hw_if_index 1 next-index 4
                              tpacket2_hdr:
                                status 0x20000001 len 98 snaplen 98 mac 66 net 80
                        "}),
                    },
                    Capture {
                        name: "ethernet-input".into(),
                        start: Duration::from_micros(20),
                        content: "IP4: 02:fe:3c:7a:1b:01 -> 02:fe:8e:15:4f:02\n".into(),
                    },
                    Capture {
                        name: "ip4-input".into(),
                        start: Duration::from_micros(15),
                        content: String::from(indoc! {"
                            ICMP: 10.0.0.1 -> 10.0.0.2
                              tos 0x00, ttl 64, length 84, checksum 0x1b3c
                        "}),
                    },
                ],
            },
            Packet {
                id: 2,
                start: Duration::from_secs(63),
                captures: vec![Capture {
                    name: "af-packet-input".into(),
                    start: Duration::ZERO,
                    content: "af_packet: hw_if_index 1 next-index 4\n".into(),
                }],
            },
        ]
    );
}

#[test]
fn first_capture_starts_at_zero() {
    let trace = parse(TWO_THREADS_TRACE);

    assert!(!trace.is_empty());
    assert!(
        trace
            .packets
            .iter()
            .all(|packet| packet.captures[0].start == Duration::ZERO)
    );
}

#[test]
fn malformed_capture_header_is_not_a_capture() {
    let trace = parse(indoc! {"
        ---- Start of thread 0 vpp_main ----
        Packet 1
        00:00:01:000100: memif-input
          memif: hw_if_index 1
        bad:time: node
          dropped
        00:00:01:000300: ip4-input
          UDP: 10.0.0.1 -> 10.0.0.2
    "});

    let [packet] = trace.packets.as_slice() else {
        panic!("expected a single packet, got {:?}", trace.packets);
    };

    assert_eq!(
        packet.captures.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        ["memif-input", "ip4-input"]
    );
    assert_eq!(packet.captures[1].start, Duration::from_micros(200));
}

#[test]
fn malformed_timestamp_drops_capture() {
    let trace = parse(indoc! {"
        ---- Start of thread 0 vpp_main ----
        Packet 1
        00:00:00:01:000050: bogus-node
          bogus
        00:00:01:000100: memif-input
          memif: hw_if_index 1
        00:00:00:01:000200: bogus-node
          bogus
        00:00:01:000300: ip4-input
          UDP: 10.0.0.1 -> 10.0.0.2
    "});

    assert_eq!(
        trace.packets,
        [Packet {
            id: 1,
            start: Duration::from_micros(1_000_100),
            captures: vec![
                Capture {
                    name: "memif-input".into(),
                    start: Duration::ZERO,
                    content: "memif: hw_if_index 1\n".into(),
                },
                Capture {
                    name: "ip4-input".into(),
                    start: Duration::from_micros(200),
                    content: "UDP: 10.0.0.1 -> 10.0.0.2\n".into(),
                },
            ],
        }]
    );
}

#[test]
fn malformed_packet_header_is_skipped() {
    let trace = parse(indoc! {"
        ---- Start of thread 0 vpp_main ----
        Packet one

        Packet 2

        00:00:01:000000: pg-input
          stream s0
    "});

    assert_eq!(
        trace.packets.iter().map(|p| p.id).collect::<Vec<_>>(),
        [2]
    );
}

#[test]
fn chunk_without_captures_after_packet() {
    let trace = parse(concat!(
        "---- Start of thread 0 vpp_main ----\n",
        "Packet 1\n",
        "\n",
        "00:00:01:000000: pg-input\n",
        "  stream s0\n",
        "\n",
        "  trailing text after blank line\n",
        "\n",
        "Packet 2\n",
        "\n",
        "00:00:02:000000: pg-input\n",
        "  stream s1\n",
    ));

    assert_eq!(
        trace.packets.iter().map(|p| p.id).collect::<Vec<_>>(),
        [1, 2]
    );
    assert_eq!(trace.packets[0].captures.len(), 1);
    assert_eq!(trace.packets[0].captures[0].content, "stream s0\n");
}

#[test]
fn capture_header_after_100_hours() {
    let trace = parse(indoc! {"
        ---- Start of thread 0 vpp_main ----
        Packet 1
        100:00:01:000123: memif-input
          memif: hw_if_index 1
        100:00:01:000456: ip4-input
          UDP: 10.0.0.1 -> 10.0.0.2
    "});

    let [packet] = trace.packets.as_slice() else {
        panic!("expected a single packet, got {:?}", trace.packets);
    };

    assert_eq!(
        packet.start,
        Duration::from_secs(100 * 3600 + 1) + Duration::from_micros(123)
    );
    assert_eq!(
        packet.captures.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        ["memif-input", "ip4-input"]
    );
    assert_eq!(packet.captures[1].start, Duration::from_micros(333));
}

#[test]
fn captures_before_packet_header() {
    let trace = parse(indoc! {"
        ---- Start of thread 0 vpp_main ----
        00:00:01:000000: pg-input
          stream s0
    "});

    assert_eq!(trace.packets.len(), 1);
    assert_eq!(trace.packets[0].id, 0);
    assert_eq!(trace.packets[0].captures[0].name, "pg-input");
}

#[test]
fn capture_without_content() {
    let trace = parse("---- Start of thread 0 vpp_main ----\nPacket 7\n\n00:00:00:000001: error-drop");

    assert_eq!(
        trace.packets,
        [Packet {
            id: 7,
            start: Duration::from_micros(1),
            captures: vec![Capture {
                name: "error-drop".into(),
                start: Duration::ZERO,
                content: String::new(),
            }],
        }]
    );
}

#[test]
fn chunks_without_captures_are_ignored() {
    let trace = parse(indoc! {"
        ------------------- Start of thread 0 vpp_main -------------------
        No packets in trace buffer
    "});

    assert!(trace.is_empty());
}

#[test]
fn empty_input() {
    let trace = parse("");

    assert!(trace.packets.is_empty());
    assert_eq!(trace.raw_trace, "");
}

#[test]
fn input_without_thread_banner() {
    let trace = parse("Packet 1\n00:00:01:000000: pg-input\n  stream s0\n");

    assert!(trace.is_empty());
}

#[test]
fn raw_trace_is_preserved() {
    for input in [
        TWO_THREADS_TRACE.to_owned(),
        TWO_THREADS_TRACE.replace('\n', "\r\n"),
        "garbage\r\nwith \r stray carriage returns".to_owned(),
    ] {
        assert_eq!(parse(&input).raw_trace, input);
    }
}

#[test]
fn crlf_line_endings() {
    let lf = parse(TWO_THREADS_TRACE);
    let crlf = parse(&TWO_THREADS_TRACE.replace('\n', "\r\n"));

    assert_eq!(lf.packets, crlf.packets);
}

#[test]
fn parse_from_str() {
    let trace = TWO_THREADS_TRACE
        .parse::<TraceResult>()
        .expect("parse trace");

    assert_eq!(trace, parse(TWO_THREADS_TRACE));
}

#[test]
fn content_has_no_blank_lines() {
    let trace = parse(concat!(
        "---- Start of thread 0 vpp_main ----\n",
        "Packet 1\n",
        "00:00:01:000000: pg-input\n",
        "  stream s0, 98 bytes\n",
        "   \n",
        "  current data 0, length 98\n",
    ));

    let content = &trace.packets[0].captures[0].content;

    assert_eq!(content, "stream s0, 98 bytes\ncurrent data 0, length 98\n");
    assert!(!content.starts_with('\n'));
    assert!(!content.contains("\n\n"));
}
