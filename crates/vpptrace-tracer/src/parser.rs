//! Parser of the trace dump returned by `show trace`.
//!
//! A dump is made of one section per VPP thread:
//!
//! ```text
//! ------------------- Start of thread 0 vpp_main -------------------
//! Packet 1
//!
//! 00:00:01:000123: memif-input
//!   memif: hw_if_index 1 next-index 4
//! 00:00:01:000456: ethernet-input
//!   IP4: 02:fe:3c:7a:1b:01 -> 02:fe:8e:15:4f:02
//!
//! Packet 2
//! ...
//! ```
//!
//! Malformed packet headers and capture headers are logged and skipped,
//! the rest of the dump is still parsed.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::ParseError;
use crate::model::{Capture, Packet, TraceResult};
use crate::time::Duration;

/// Banner line starting a thread section.
#[allow(clippy::unwrap_used)]
static THREAD_BANNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^-+ Start of thread (\d+) (\w+) -+$").unwrap());

/// Header line starting a capture.
///
/// The hours field grows past two digits once VPP has been up for 100 hours.
#[allow(clippy::unwrap_used)]
static CAPTURE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^((?:\d{2,}:)+\d{6}): (\S+)(?:\n|\z)").unwrap());

const PACKET_HEADER: &str = "Packet ";

const PACKET_DELIMITER: &str = "\n\n";

/// Parses a trace dump.
///
/// Both `\n` and `\r\n` line endings are supported. The returned
/// [TraceResult] holds the unmodified dump in
/// [raw_trace](TraceResult::raw_trace).
///
/// # Note
///
/// Parsing is best-effort: a malformed capture or packet header is
/// reported as a warning and skipped.
#[tracing::instrument(name = "ParseTrace", skip_all, fields(len = trace.len()))]
pub fn parse_trace(trace: &str) -> Result<TraceResult, ParseError> {
    let text = trace.replace('\r', "");

    let mut packets = Vec::new();

    for section in ThreadSection::split(&text) {
        let _span =
            tracing::debug_span!("Thread", tid = section.thread_id, thread = section.thread_name)
                .entered();

        section.parse_packets(&mut packets);
    }

    tracing::debug!(packets = packets.len(), "trace parsed");

    Ok(TraceResult {
        raw_trace: trace.to_owned(),
        packets,
    })
}

impl FromStr for TraceResult {
    type Err = ParseError;

    fn from_str(trace: &str) -> Result<Self, Self::Err> {
        parse_trace(trace)
    }
}

/// Part of the dump emitted by a single VPP thread.
struct ThreadSection<'a> {
    thread_id: &'a str,
    thread_name: &'a str,
    body: &'a str,
}

impl<'a> ThreadSection<'a> {
    /// Splits the dump on thread banners.
    ///
    /// Text preceding the first banner is ignored.
    fn split(text: &'a str) -> Vec<Self> {
        let banners = THREAD_BANNER.captures_iter(text).collect::<Vec<_>>();

        banners
            .iter()
            .enumerate()
            .map(|(i, banner)| {
                let (_, [thread_id, thread_name]) = banner.extract();

                let body_start = banner.get_match().end();
                let body_end = banners
                    .get(i + 1)
                    .map_or(text.len(), |next| next.get_match().start());

                Self {
                    thread_id,
                    thread_name,
                    body: &text[body_start..body_end],
                }
            })
            .collect()
    }

    /// Parses the packets of this section, appending them to `packets`.
    fn parse_packets(&self, packets: &mut Vec<Packet>) {
        let mut packet = Packet::default();

        for chunk in self.body.trim().split(PACKET_DELIMITER) {
            let captures = if let Some(header) = chunk.strip_prefix(PACKET_HEADER) {
                // captures may directly follow the header
                let (id, captures) = header.split_once('\n').unwrap_or((header, ""));

                match parse_packet_id(id) {
                    Ok(id) => {
                        packet = Packet {
                            id,
                            ..Packet::default()
                        };
                    }
                    Err(e) => {
                        tracing::warn!(%e, "skipping packet header");
                        continue;
                    }
                }

                captures
            } else {
                chunk
            };

            if parse_captures(captures, &mut packet) > 0 {
                packets.push(packet.clone());
            }
        }
    }
}

fn parse_packet_id(id: &str) -> Result<u32, ParseError> {
    id.trim()
        .parse()
        .map_err(|source| ParseError::PacketId {
            value: id.to_owned(),
            source,
        })
}

/// Parses every capture found in `text`, appending them to `packet`.
///
/// Returns the number of captures appended.
fn parse_captures(text: &str, packet: &mut Packet) -> usize {
    let parsed = packet.captures.len();

    let headers = CAPTURE_HEADER.captures_iter(text).collect::<Vec<_>>();

    for (i, header) in headers.iter().enumerate() {
        let (_, [timestamp, name]) = header.extract();

        let time = match Duration::parse_timestamp(timestamp) {
            Ok(time) => time,
            Err(e) => {
                tracing::warn!(%e, node = name, "skipping capture");
                continue;
            }
        };

        if packet.captures.is_empty() {
            packet.start = time;
        }

        let content_start = header.get_match().end();
        let content_end = headers
            .get(i + 1)
            .map_or(text.len(), |next| next.get_match().start());

        packet.captures.push(Capture {
            name: name.to_owned(),
            start: time - packet.start,
            content: strip_indent(&text[content_start..content_end]),
        });
    }

    packet.captures.len() - parsed
}

/// Removes the left-margin indentation of a capture's content.
///
/// The indentation of the first line is removed from every line. Trailing
/// whitespaces and empty lines are removed as well.
fn strip_indent(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or_default();
    let indent = &first_line[..first_line.len() - first_line.trim_start_matches(' ').len()];

    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .fold(String::new(), |mut stripped, line| {
            stripped.push_str(line.strip_prefix(indent).unwrap_or(line));
            stripped.push('\n');
            stripped
        })
}
