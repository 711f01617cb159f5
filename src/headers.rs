use std::collections::HashMap;
use super::error::Error;
use super::{
    find_crlf,
    ParseStatus,
    CRLF,
};

fn is_token_char(c: u8) -> bool {
    c.is_ascii_alphanumeric()
    || matches!(
        c,
        b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~'
    )
}

fn trim_spaces(mut text: &[u8]) -> &[u8] {
    while let [b' ', rest @ ..] = text {
        text = rest;
    }
    while let [rest @ .., b' '] = text {
        text = rest;
    }
    text
}

fn parse_header_line(header_line: &[u8]) -> Result<(String, String), Error> {
    let delimiter = header_line.iter()
        .position(|&c| c == b':')
        .ok_or_else(|| Error::InvalidHeaderFormat(String::from_utf8_lossy(header_line).into()))?;
    let name = &header_line[..delimiter];
    if name.ends_with(b" ") {
        return Err(Error::InvalidHeaderFormat(String::from_utf8_lossy(header_line).into()));
    }
    let name = trim_spaces(name);
    if name.is_empty() || !name.iter().copied().all(is_token_char) {
        return Err(Error::InvalidHeaderCharacter(String::from_utf8_lossy(name).into()));
    }
    // Field values may carry obs-text, which is kept rather than rejected.
    let value = trim_spaces(&header_line[delimiter + 1..]);
    Ok((
        String::from_utf8_lossy(name).into(),
        String::from_utf8_lossy(value).into(),
    ))
}

/// This holds the header fields of a request, keyed by lowercased field name.
/// A field which appears more than once has all of its values joined into one,
/// separated by a comma and a space, in the order they arrived.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Headers {
    fields: HashMap<String, String>,
}

impl Headers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume at most one line from the front of `raw_message`.
    ///
    /// Nothing is consumed if `raw_message` does not yet hold a complete
    /// line.  A header line is stored and its length (including the line
    /// terminator) returned with [`ParseStatus::Incomplete`].  The blank line
    /// ending the headers returns [`ParseStatus::Complete`].
    pub fn parse<T>(
        &mut self,
        raw_message: T
    ) -> Result<(ParseStatus, usize), Error>
        where T: AsRef<[u8]>
    {
        let raw_message = raw_message.as_ref();
        match find_crlf(raw_message) {
            None => Ok((ParseStatus::Incomplete, 0)),
            Some(0) => Ok((ParseStatus::Complete, CRLF.len())),
            Some(line_end) => {
                let (name, value) = parse_header_line(&raw_message[..line_end])?;
                self.set(name, value);
                Ok((ParseStatus::Incomplete, line_end + CRLF.len()))
            },
        }
    }

    /// Store a value under the lowercased `name`.  If the name is already
    /// present, the new value is appended to the old one rather than
    /// replacing it.
    pub fn set<N, V>(&mut self, name: N, value: V)
        where N: Into<String>, V: AsRef<str>
    {
        let mut name = name.into();
        name.make_ascii_lowercase();
        let value = value.as_ref();
        self.fields.entry(name)
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    /// Look up a header value, ignoring the case of `name`.
    #[must_use]
    pub fn get<T>(&self, name: T) -> Option<&str>
        where T: AsRef<str>
    {
        self.fields.get(&name.as_ref().to_ascii_lowercase())
            .map(String::as_str)
    }

    #[must_use]
    pub fn contains<T>(&self, name: T) -> bool
        where T: AsRef<str>
    {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Visit every field as a (lowercased name, value) pair, in no particular
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
