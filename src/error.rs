use crate::RequestState;

/// This is the enumeration of all the different kinds of errors which this
/// crate generates.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The byte source ran out of input before the blank line terminating
    /// the headers was received.
    #[error("incomplete request, input ended in state {state:?} with {buffered} unparsed bytes")]
    IncompleteRequest {
        /// This is the point the parser had reached when input ended.
        state: RequestState,

        /// This is the number of bytes received but not yet parsed.
        buffered: usize,
    },

    /// The attached header line has no colon, or has whitespace between the
    /// field name and the colon.
    #[error("invalid header line")]
    InvalidHeaderFormat(String),

    /// The attached header field name contains a character which is not
    /// allowed in a token.
    #[error("invalid character in header field name")]
    InvalidHeaderCharacter(String),

    /// The method in the attached request line is not made up entirely of
    /// uppercase letters.
    #[error("invalid method in request line")]
    InvalidMethod(String),

    /// The attached request line does not have exactly three parts separated
    /// by single spaces.
    #[error("invalid request line")]
    InvalidRequestLine(String),

    /// The request was given more input after it was already complete.
    #[error("trying to parse data after the request is complete")]
    ParseAfterDone,

    /// The byte source failed for a reason other than running out of input.
    #[error("unable to read from byte source")]
    Read(#[source] std::io::Error),

    /// The protocol in the attached request line is not `HTTP/1.1`.
    #[error("unsupported protocol version in request line")]
    UnsupportedVersion(String),
}
