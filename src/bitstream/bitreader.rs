//! BitReader: bit-level input for huffzip.
//!
//! Reads a packed bitstream most-significant-bit first from an in-memory
//! buffer. End of data is signalled by `None` from every read function; the
//! compression pipeline treats that as its normal end-of-input marker during
//! counting and as a format error during decoding.
//!
//! The whole input is held in memory so that `reset()` (needed between the
//! frequency-counting pass and the encoding pass) is a cursor rewind.

const BIT_MASK: u8 = 0xff;

/// Reads a bit-packed buffer, one bit or n bits at a time.
#[derive(Debug)]
pub struct BitReader {
    buffer: Vec<u8>,
    cursor: usize,
    bit_index: usize,
}

impl BitReader {
    /// Creates a new BitReader over the given data.
    pub fn new(buffer: Vec<u8>) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Creates a new BitReader by reading the source to its end.
    pub fn from_source<R: std::io::Read>(mut source: R) -> std::io::Result<Self> {
        let mut buffer = Vec::new();
        source.read_to_end(&mut buffer)?;
        Ok(Self::new(buffer))
    }

    /// True while there is at least one unread bit left.
    fn have_data(&self) -> bool {
        self.cursor < self.buffer.len()
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read.
    pub fn bit(&mut self) -> Option<usize> {
        if !self.have_data() {
            return None;
        }
        let bit = (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return Option<bool> *true* if the next bit is 1, *false* if 0, consuming
    /// the bit, or None if there is no more data to read.
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Return Option<usize> of the next n bits, most-significant first, or None
    /// if the data runs out before n bits are read.
    pub fn bint(&mut self, mut n: usize) -> Option<usize> {
        /*
        This is used to read magic numbers and the 9 bit leaf values in the tree
        header. It is optimized to read as many bits as possible per step: first
        whatever is left of the current partial byte, then full bytes, then a
        leading slice of the next byte.
        */
        let mut result = 0_usize;

        // Test if we are mid-byte. If we are, read from the current byte first.
        if self.bit_index > 0 {
            if !self.have_data() {
                return None;
            }
            // Set up to read the minimum of the partial byte and what we need
            let needed = n.min(8 - self.bit_index);

            result = ((self.buffer[self.cursor] & BIT_MASK >> self.bit_index)
                >> (8 - self.bit_index - needed)) as usize;
            self.bit_index += needed;
            if self.bit_index == 8 {
                self.cursor += 1;
            }
            self.bit_index %= 8;

            if n == needed {
                return Some(result);
            }
            n -= needed;
        }
        // If we are here, we are byte aligned. Get as many full bytes as we need.
        while n >= 8 {
            if !self.have_data() {
                return None;
            }
            result = result << 8 | (self.buffer[self.cursor]) as usize;
            self.cursor += 1;
            n -= 8;
        }
        // If we still need a partial byte, get whatever bits we still need.
        if n > 0 {
            if !self.have_data() {
                return None;
            }
            result = result << n | (self.buffer[self.cursor] >> (8 - n)) as usize;
            self.bit_index += n;
        }
        Some(result)
    }

    /// Returns a byte as an Option<u8>, or None if there is no more data to
    /// read. This is a convenience function, and calls bint(8).
    pub fn byte(&mut self) -> Option<u8> {
        self.bint(8).map(|byte| byte as u8)
    }

    /// Rewind the reader to the first bit of the input.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.bit_index = 0;
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn basic_test() {
        let mut br = BitReader::new(vec![0b10000001_u8]);
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn bint_test() {
        let mut br = BitReader::new(vec![0b00011011]);
        assert_eq!(br.bint(5), Some(3));
        assert_eq!(br.bint(1), Some(0));
        assert_eq!(br.bint(2), Some(3));
    }

    #[test]
    fn bint_across_bytes_test() {
        let mut br = BitReader::new(vec![0xfa, 0xce, 0x82, 0x01]);
        assert_eq!(br.bint(32), Some(0xface8201));
        assert_eq!(br.bint(1), None);
    }

    #[test]
    fn bint_truncated_test() {
        let mut br = BitReader::new(vec![0xff]);
        assert_eq!(br.bint(3), Some(7));
        assert_eq!(br.bint(9), None);
    }

    #[test]
    fn byte_test() {
        let mut br = BitReader::new("Hello, world!".as_bytes().to_vec());
        assert_eq!(br.byte(), Some(b'H'));
        assert_eq!(br.byte(), Some(b'e'));
        assert_eq!(br.byte(), Some(b'l'));
        assert_eq!(br.byte(), Some(b'l'));
    }

    #[test]
    fn reset_test() {
        let mut br = BitReader::new("Hello".as_bytes().to_vec());
        while br.byte().is_some() {}
        assert_eq!(br.byte(), None);
        br.reset();
        assert_eq!(br.byte(), Some(b'H'));
    }

    #[test]
    fn loc_test() {
        let mut br = BitReader::new("Hello, world!".as_bytes().to_vec());
        for _ in 0..5 {
            br.byte();
        }
        br.bit();
        assert_eq!(br.loc(), "[5.1]");
    }

    #[test]
    fn bool_bit_test() {
        let mut br = BitReader::new(vec![0b01010000]);
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
    }
}
