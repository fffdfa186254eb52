//! BitWriter: bit-level output for huffzip.
//!
//! Packs variable-length codes into bytes most-significant-bit first. Bits
//! accumulate in a u64 queue and drain into the output buffer a byte at a
//! time; `flush()` zero-pads whatever is left of the final byte and MUST be
//! called before the output is used, or trailing bits stay in the queue.

/// Creates a bitstream for output.
pub struct BitWriter {
    pub output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
}

impl BitWriter {
    /// Create a new BitWriter with an output buffer of the size specified.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal bitstream write function common to all out.XX functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Writes the low-order `count` bits of `data`, most significant bit
    /// first. `count` may be 0 (nothing is written, used by zero-length codes)
    /// up to 57, which covers the longest Huffman code a u32-weighted tree can
    /// produce as well as the 32 bit magic number.
    pub fn out_bits(&mut self, count: u8, data: u64) {
        debug_assert!(count <= 57, "bit queue can only accept 57 bits at a time");
        if count == 0 {
            return;
        }
        self.queue <<= count; //shift queue by bit length
        self.queue |= data & (u64::MAX >> (64 - count)); //add data portion to queue
        self.q_bits += count; //update depth of queue bits
        self.write_stream();
    }

    /// Puts a byte of pre-packed binary encoded data on the stream.
    pub fn out8(&mut self, data: u8) {
        self.out_bits(8, data as u64);
    }

    /// Puts a 32 bit word of pre-packed binary encoded data on the stream.
    pub fn out32(&mut self, data: u32) {
        self.out_bits(32, data as u64);
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the
    /// least significant bits. Flush MUST be called before reading the output
    /// or data may be left in the internal queue.
    pub fn flush(&mut self) {
        self.write_stream();
        if self.q_bits > 0 {
            let byte = ((self.queue << (8 - self.q_bits)) & 0xff) as u8;
            self.output.push(byte);
            self.q_bits = 0;
        }
    }

    /// Debugging function. Report current bit position in the output.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.output.len(), self.q_bits)
    }
}

#[cfg(test)]
mod test {
    use super::BitWriter;

    #[test]
    fn out8_test() {
        let mut bw = BitWriter::new(8);
        bw.out8(b'x');
        bw.flush();
        assert_eq!(bw.output, "x".as_bytes());
    }

    #[test]
    fn last_bits_test() {
        let mut bw = BitWriter::new(8);
        bw.out8(255);
        bw.out8(1);
        bw.out8(128);
        bw.out8(255);
        bw.out_bits(3, 7);
        bw.flush();
        assert_eq!(bw.output, vec![255, 1, 128, 255, 224]);
    }

    #[test]
    fn odd_bits_test() {
        let mut bw = BitWriter::new(8);
        bw.out_bits(8, 0xff);
        bw.out_bits(2, 0b11);
        bw.flush();
        assert_eq!(bw.output, vec![0b1111_1111, 0b1100_0000]);
    }

    #[test]
    fn zero_length_test() {
        // A zero-length code writes nothing at all.
        let mut bw = BitWriter::new(8);
        bw.out_bits(0, 0b101);
        bw.flush();
        assert!(bw.output.is_empty());
        bw.out_bits(1, 1);
        bw.out_bits(0, 0xffff);
        bw.flush();
        assert_eq!(bw.output, vec![0b1000_0000]);
    }

    #[test]
    fn out32_test() {
        let mut bw = BitWriter::new(8);
        bw.out32(0xface8201);
        bw.flush();
        assert_eq!(bw.output, vec![0xfa, 0xce, 0x82, 0x01]);
    }

    #[test]
    fn masks_high_bits_test() {
        // Bits above `count` must not leak into the stream.
        let mut bw = BitWriter::new(8);
        bw.out_bits(4, 0xffff_fff5);
        bw.out_bits(4, 0x5);
        bw.flush();
        assert_eq!(bw.output, vec![0b0101_0101]);
    }
}
