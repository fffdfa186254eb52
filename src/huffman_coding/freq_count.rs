use crate::bitstream::bitreader::BitReader;

use super::{ALPH_SIZE, PSEUDO_EOF};

/// Returns a frequency count of the input data, indexed by symbol value.
///
/// Reads 8 bit symbols until the reader reports end of data. Running out of
/// input here is the normal termination signal for the counting pass, not an
/// error. The pseudo-EOF count is forced to exactly 1 since it never occurs
/// in real input but must always receive a code. The reader is left at the
/// end of the data; callers rewind it with reset() before the encoding pass.
pub fn freqs(br: &mut BitReader) -> Vec<u32> {
    let mut freqs = vec![0_u32; ALPH_SIZE + 1];
    while let Some(byte) = br.byte() {
        freqs[byte as usize] += 1;
    }
    freqs[PSEUDO_EOF] = 1;
    freqs
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn freqs_test() {
        let mut br = BitReader::new("abracadabra".as_bytes().to_vec());
        let freqs = freqs(&mut br);
        assert_eq!(freqs[b'a' as usize], 5);
        assert_eq!(freqs[b'b' as usize], 2);
        assert_eq!(freqs[b'r' as usize], 2);
        assert_eq!(freqs[b'c' as usize], 1);
        assert_eq!(freqs[b'd' as usize], 1);
        assert_eq!(freqs[b'z' as usize], 0);
        assert_eq!(freqs[PSEUDO_EOF], 1);
    }

    #[test]
    fn empty_input_test() {
        let mut br = BitReader::new(vec![]);
        let freqs = freqs(&mut br);
        assert_eq!(freqs.iter().sum::<u32>(), 1);
        assert_eq!(freqs[PSEUDO_EOF], 1);
    }

    #[test]
    fn reader_rewinds_after_counting() {
        let data = vec![1_u8, 2, 3];
        let mut br = BitReader::new(data);
        let _ = freqs(&mut br);
        br.reset();
        assert_eq!(br.byte(), Some(1));
    }
}
