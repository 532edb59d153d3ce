/// CLI executor error.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct ExecutorError<E>(pub E);

/// Error type of this crate.
#[derive(thiserror::Error, Debug)]
pub enum Error<E> {
    /// A CLI executor error occurred.
    #[error(transparent)]
    Executor(#[from] ExecutorError<E>),

    /// No trace input node was given.
    #[error("No trace input node given")]
    EmptyNodeSet,

    /// The trace dump could not be parsed.
    #[error("parsing trace failed: {0}")]
    Parse(#[from] ParseError),
}

/// Trace dump parsing error.
///
/// These are mostly reported as warnings by the parser, which skips the
/// offending fragment and carries on.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A capture header holds a malformed timestamp.
    #[error("Invalid timestamp {0:?}")]
    Timestamp(String),

    /// A packet header holds a malformed packet ID.
    #[error("Invalid packet ID {value:?}: {source}")]
    PacketId {
        /// Text following the `Packet ` header.
        value: String,

        /// Integer parsing error.
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Result type of this crate.
pub type Result<T, E> = core::result::Result<T, Error<E>>;
