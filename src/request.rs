use super::error::Error;
use super::headers::Headers;
use super::request_line::{
    parse_request_line,
    RequestLine,
};
use super::ParseStatus;

/// This is how far parsing of a request has progressed.  States are only
/// ever visited in the order they are declared.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequestState {
    /// Waiting for the request line.
    RequestLine,

    /// The request line is done; waiting for header lines or the blank line
    /// ending them.
    Headers,

    /// The blank line ending the headers has been consumed.
    Complete,
}

enum ParseStatusInternal {
    CompletePart,
    CompleteWhole,
    Incomplete,
}

/// This is an HTTP/1.1 request head, built up incrementally by
/// [`parse`](#method.parse).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    pub headers: Headers,
    pub request_line: RequestLine,
    state: RequestState,
}

impl Request {
    /// Parse as much of the request as the bytes in `raw_message` allow.
    ///
    /// Returns whether the request is now complete, and how many bytes from
    /// the front of `raw_message` were used.  Bytes which were not used must
    /// be presented again, with more appended, in the next call.  Bytes after
    /// the blank line ending the headers are never used.
    pub fn parse<T>(
        &mut self,
        raw_message: T
    ) -> Result<(ParseStatus, usize), Error>
        where T: AsRef<[u8]>
    {
        if self.state == RequestState::Complete {
            return Err(Error::ParseAfterDone);
        }
        let raw_message = raw_message.as_ref();
        let mut total_consumed = 0;
        loop {
            let raw_message_remainder = &raw_message[total_consumed..];
            let (parse_status, consumed) = match self.state {
                RequestState::RequestLine => {
                    self.parse_message_for_request_line(raw_message_remainder)?
                },
                RequestState::Headers => {
                    self.parse_message_for_headers(raw_message_remainder)?
                },
                RequestState::Complete => return Err(Error::ParseAfterDone),
            };
            total_consumed += consumed;
            log::trace!("bytes parsed: {}", total_consumed);
            match parse_status {
                ParseStatusInternal::CompletePart => (),
                ParseStatusInternal::CompleteWhole => {
                    return Ok((ParseStatus::Complete, total_consumed));
                },
                ParseStatusInternal::Incomplete => {
                    return Ok((ParseStatus::Incomplete, total_consumed));
                },
            };
        }
    }

    fn parse_message_for_headers(
        &mut self,
        raw_message: &[u8]
    ) -> Result<(ParseStatusInternal, usize), Error> {
        match self.headers.parse(raw_message)? {
            (ParseStatus::Complete, consumed) => {
                log::debug!("end of headers reached after {} fields", self.headers.len());
                self.state = RequestState::Complete;
                Ok((ParseStatusInternal::CompleteWhole, consumed))
            },
            (ParseStatus::Incomplete, 0) => Ok((ParseStatusInternal::Incomplete, 0)),
            (ParseStatus::Incomplete, consumed) => {
                Ok((ParseStatusInternal::CompletePart, consumed))
            },
        }
    }

    fn parse_message_for_request_line(
        &mut self,
        raw_message: &[u8]
    ) -> Result<(ParseStatusInternal, usize), Error> {
        match parse_request_line(raw_message)? {
            Some((request_line, consumed)) => {
                log::debug!(
                    "request line parsed: {} {} HTTP/{}",
                    request_line.method,
                    request_line.target,
                    request_line.version
                );
                self.request_line = request_line;
                self.state = RequestState::Headers;
                Ok((ParseStatusInternal::CompletePart, consumed))
            },
            None => Ok((ParseStatusInternal::Incomplete, 0)),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == RequestState::Complete
    }

    #[must_use]
    pub fn new() -> Self {
        Self{
            headers: Headers::new(),
            request_line: RequestLine::default(),
            state: RequestState::RequestLine,
        }
    }

    #[must_use]
    pub fn state(&self) -> RequestState {
        self.state
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::new()
    }
}
