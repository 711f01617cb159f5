use std::io::{
    ErrorKind,
    Read,
};
use super::buffer::GrowableBuffer;
use super::error::Error;
use super::request::Request;

/// This is the number of bytes the read buffer starts out able to hold.  It is
/// deliberately tiny so that partial reads are the normal case.
pub const DEFAULT_INITIAL_BUFFER_SIZE: usize = 8;

/// This reads a single request head from a byte source.
#[derive(Clone, Debug)]
pub struct RequestReader {
    /// This is the starting capacity of the read buffer.  The buffer doubles
    /// whenever it fills up, so this only affects how often that happens.
    pub initial_buffer_size: usize,
}

impl RequestReader {
    #[must_use]
    pub fn new() -> Self {
        Self{
            initial_buffer_size: DEFAULT_INITIAL_BUFFER_SIZE,
        }
    }

    /// Pull bytes from `reader` until a whole request head has been parsed.
    ///
    /// A read is only issued when the bytes already buffered do not hold a
    /// complete line.  Any bytes the reader delivers after the blank line
    /// ending the headers are discarded.
    ///
    /// # Errors
    ///
    /// [`Error::IncompleteRequest`](enum.Error.html#variant.IncompleteRequest)
    /// is returned if the reader runs out of input first, and
    /// [`Error::Read`](enum.Error.html#variant.Read) for any other failure
    /// of the reader.  Malformed input is reported with the grammar error
    /// that rejected it.
    pub fn read<R>(&self, mut reader: R) -> Result<Request, Error>
        where R: Read
    {
        let mut request = Request::new();
        let mut buffer = GrowableBuffer::with_capacity(self.initial_buffer_size);
        while !request.is_complete() {
            buffer.ensure_capacity_for(1);
            let bytes_read = match reader.read(buffer.unfilled_mut()) {
                Ok(0) => None,
                Ok(bytes_read) => Some(bytes_read),
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) if error.kind() == ErrorKind::UnexpectedEof => None,
                Err(error) => return Err(Error::Read(error)),
            };
            let bytes_read = match bytes_read {
                Some(bytes_read) => bytes_read,
                None => {
                    return Err(Error::IncompleteRequest{
                        state: request.state(),
                        buffered: buffer.len(),
                    });
                },
            };
            buffer.advance(bytes_read);
            let (_, consumed) = request.parse(buffer.filled())?;
            buffer.consume(consumed);
            log::trace!(
                "read {} bytes, consumed {}, {} left over of {} capacity",
                bytes_read,
                consumed,
                buffer.len(),
                buffer.capacity()
            );
        }
        if !buffer.is_empty() {
            log::debug!("discarding {} bytes after end of headers", buffer.len());
        }
        Ok(request)
    }
}

impl Default for RequestReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a single request head from `reader` using the default settings.
pub fn request_from_reader<R>(reader: R) -> Result<Request, Error>
    where R: Read
{
    RequestReader::new().read(reader)
}
