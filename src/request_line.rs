use super::error::Error;
use super::{
    find_crlf,
    CRLF,
};

const PROTOCOL: &str = "HTTP/1.1";

/// This is the first line of a request, broken into its three parts.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RequestLine {
    /// This is the method token, made up only of uppercase letters.
    pub method: String,

    /// This is the request target as it appeared on the wire.  It is not
    /// validated; bytes which are not UTF-8 become U+FFFD.
    pub target: String,

    /// This is the protocol version, without the `HTTP/` prefix.
    pub version: String,
}

fn request_line_from_bytes(request_line: &[u8]) -> Result<RequestLine, Error> {
    let invalid_line = || String::from_utf8_lossy(request_line).into_owned();
    let parts = request_line.split(|&c| c == b' ').collect::<Vec<_>>();
    let (method, target, protocol) = match parts.as_slice() {
        [method, target, protocol] => (*method, *target, *protocol),
        _ => return Err(Error::InvalidRequestLine(invalid_line())),
    };
    if method.is_empty() || !method.iter().all(u8::is_ascii_uppercase) {
        return Err(Error::InvalidMethod(invalid_line()));
    }
    if protocol != PROTOCOL.as_bytes() {
        return Err(Error::UnsupportedVersion(invalid_line()));
    }
    let version = PROTOCOL.split_once('/')
        .map_or(PROTOCOL, |(_, version)| version);
    Ok(RequestLine{
        method: String::from_utf8_lossy(method).into_owned(),
        target: String::from_utf8_lossy(target).into_owned(),
        version: version.into(),
    })
}

/// Parse the request line from the front of `raw_message`.
///
/// `Ok(None)` means `raw_message` does not yet contain a whole line, and
/// nothing should be consumed until more input arrives.  Otherwise the parsed
/// line is returned along with the number of bytes it took up, including the
/// line terminator.
pub fn parse_request_line<T>(
    raw_message: T
) -> Result<Option<(RequestLine, usize)>, Error>
    where T: AsRef<[u8]>
{
    let raw_message = raw_message.as_ref();
    let request_line_end = match find_crlf(raw_message) {
        Some(request_line_end) => request_line_end,
        None => return Ok(None),
    };
    let request_line = request_line_from_bytes(&raw_message[..request_line_end])?;
    Ok(Some((request_line, request_line_end + CRLF.len())))
}
