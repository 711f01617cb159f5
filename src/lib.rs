#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! Incremental parsing of HTTP/1.1 request heads.
//!
//! Bytes are pulled from any [`std::io::Read`] in whatever chunks the source
//! happens to deliver, accumulated in a growable buffer, and fed to a request
//! state machine which consumes the request line and header lines as soon as
//! each one is complete.  Parsing stops at the blank line ending the headers;
//! no body is read.

mod buffer;
mod error;
mod headers;
mod reader;
mod request;
mod request_line;

pub use crate::buffer::GrowableBuffer;
pub use crate::error::Error;
pub use crate::headers::Headers;
pub use crate::reader::{
    request_from_reader,
    RequestReader,
    DEFAULT_INITIAL_BUFFER_SIZE,
};
pub use crate::request::{
    Request,
    RequestState,
};
pub use crate::request_line::{
    parse_request_line,
    RequestLine,
};

// This is the character sequence corresponding to a carriage return (CR)
// followed by a line feed (LF), which officially delimits each
// line of an HTTP request.
const CRLF: &str = "\r\n";

/// This indicates whether a parse step reached the end of what it was
/// looking for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseStatus {
    /// The blank line ending the request head has been consumed.
    Complete,

    /// More input is needed before parsing can finish.
    Incomplete,
}

fn find_crlf<T>(message: T) -> Option<usize>
    where T: AsRef<[u8]>
{
    message.as_ref()
        .windows(CRLF.len())
        .position(|window| window == CRLF.as_bytes())
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn find_crlf_in_middle() {
        assert_eq!(Some(3), find_crlf("abc\r\ndef"));
    }

    #[test]
    fn find_crlf_at_start() {
        assert_eq!(Some(0), find_crlf("\r\n"));
    }

    #[test]
    fn find_crlf_missing_or_split() {
        assert_eq!(None, find_crlf(""));
        assert_eq!(None, find_crlf("\r"));
        assert_eq!(None, find_crlf("abc\r"));
        assert_eq!(None, find_crlf("abc\n\r"));
    }

}
