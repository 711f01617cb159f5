/// This is an expandable accumulator for bytes read from a source but not yet
/// parsed.  New bytes are written after the write cursor, and parsed bytes are
/// removed from the front by shifting whatever remains down to offset zero.
#[derive(Debug)]
pub struct GrowableBuffer {
    storage: Vec<u8>,
    filled: usize,
}

impl GrowableBuffer {
    /// Create an empty buffer able to hold `capacity` bytes before it has to
    /// grow.  A capacity of zero is bumped up to one so that doubling always
    /// makes progress.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self{
            storage: vec![0; capacity.max(1)],
            filled: 0,
        }
    }

    /// Double the backing storage until at least `additional` bytes are free
    /// after the write cursor.
    pub fn ensure_capacity_for(&mut self, additional: usize) {
        let mut capacity = self.storage.len();
        while capacity - self.filled < additional {
            capacity *= 2;
        }
        if capacity != self.storage.len() {
            self.storage.resize(capacity, 0);
        }
    }

    /// Mark the first `count` bytes of the region returned by
    /// [`unfilled_mut`](#method.unfilled_mut) as holding data.  `count` must
    /// not exceed the length of that region.
    pub fn advance(&mut self, count: usize) {
        debug_assert!(
            count <= self.storage.len() - self.filled,
            "advanced {} bytes past the write cursor with only {} free",
            count,
            self.storage.len() - self.filled
        );
        self.filled += count;
    }

    /// Remove the first `count` bytes, moving the rest to the front.
    pub fn consume(&mut self, count: usize) {
        let count = count.min(self.filled);
        self.storage.copy_within(count..self.filled, 0);
        self.filled -= count;
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    #[must_use]
    pub fn filled(&self) -> &[u8] {
        &self.storage[..self.filled]
    }

    pub fn unfilled_mut(&mut self) -> &mut [u8] {
        &mut self.storage[self.filled..]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filled
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn write(buffer: &mut GrowableBuffer, bytes: &[u8]) {
        buffer.ensure_capacity_for(bytes.len());
        buffer.unfilled_mut()[..bytes.len()].copy_from_slice(bytes);
        buffer.advance(bytes.len());
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let buffer = GrowableBuffer::with_capacity(0);
        assert_eq!(1, buffer.capacity());
        assert!(buffer.is_empty());
    }

    #[test]
    fn no_growth_while_space_remains() {
        let mut buffer = GrowableBuffer::with_capacity(8);
        write(&mut buffer, b"GET ");
        buffer.ensure_capacity_for(1);
        assert_eq!(8, buffer.capacity());
        assert_eq!(4, buffer.unfilled_mut().len());
    }

    #[test]
    fn doubles_when_write_cursor_reaches_capacity() {
        let mut buffer = GrowableBuffer::with_capacity(8);
        write(&mut buffer, b"GET / HT");
        assert_eq!(8, buffer.capacity());
        buffer.ensure_capacity_for(1);
        assert_eq!(16, buffer.capacity());
        assert_eq!(b"GET / HT", buffer.filled());
    }

    #[test]
    fn doubles_repeatedly_for_large_requests() {
        let mut buffer = GrowableBuffer::with_capacity(8);
        write(&mut buffer, b"GET /");
        buffer.ensure_capacity_for(20);
        assert_eq!(32, buffer.capacity());
        assert_eq!(b"GET /", buffer.filled());
    }

    #[test]
    fn consume_shifts_remaining_bytes_to_front() {
        let mut buffer = GrowableBuffer::with_capacity(8);
        write(&mut buffer, b"ab\r\ncd");
        buffer.consume(4);
        assert_eq!(b"cd", buffer.filled());
        assert_eq!(2, buffer.len());
        write(&mut buffer, b"ef");
        assert_eq!(b"cdef", buffer.filled());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "past the write cursor")]
    fn advance_beyond_free_space_panics() {
        let mut buffer = GrowableBuffer::with_capacity(8);
        write(&mut buffer, b"GET ");
        buffer.advance(5);
    }

    #[test]
    fn consume_everything_or_more() {
        let mut buffer = GrowableBuffer::with_capacity(8);
        write(&mut buffer, b"abc");
        buffer.consume(0);
        assert_eq!(b"abc", buffer.filled());
        buffer.consume(10);
        assert!(buffer.is_empty());
    }

}
