// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{VectEncError, VectEncResult};

/// Exclusive upper bound on a digit at one position.
pub type Modulus = u32;
/// A single bounded digit.
pub type Digit = u32;

/// Merged radices are reduced by emitting bytes until they drop below this bound.
pub const LIMIT: u64 = 16384;

/// Encoder for digit vectors bounded by a fixed list of moduli.
///
/// The encoder owns its own copy of the moduli, so callers are free to reuse or drop the
/// slice it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorEncoder {
    moduli: Vec<Modulus>,
    encoded_len: usize,
}

impl VectorEncoder {
    /// Build an encoder for `moduli`. Every modulus must be at least 1.
    pub fn new(moduli: &[Modulus]) -> VectEncResult<Self> {
        if let Some(position) = moduli.iter().position(|&m| m == 0) {
            return Err(VectEncError::ZeroModulus { position });
        }

        let mut radices: Vec<u64> = moduli.iter().map(|&m| u64::from(m)).collect();
        let mut zeros = vec![0u64; radices.len()];
        let mut encoded_len = 0usize;
        pack(&mut zeros, &mut radices, |_| encoded_len += 1);

        Ok(Self {
            moduli: moduli.to_vec(),
            encoded_len,
        })
    }

    /// Number of bytes produced by [`VectorEncoder::encode`] for any valid digit vector.
    pub fn encoded_len(&self) -> usize {
        self.encoded_len
    }

    pub fn moduli(&self) -> &[Modulus] {
        &self.moduli
    }

    pub fn len(&self) -> usize {
        self.moduli.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moduli.is_empty()
    }

    /// Encode `digits`, consuming them.
    ///
    /// The digit buffer is used as scratch space while merging, so nothing meaningful is
    /// left of it afterwards; callers that still need the digits must regenerate them.
    pub fn encode(&self, digits: Vec<Digit>) -> VectEncResult<Vec<u8>> {
        if digits.len() != self.moduli.len() {
            return Err(VectEncError::LengthMismatch {
                expected: self.moduli.len(),
                actual: digits.len(),
            });
        }
        for (position, (&digit, &modulus)) in digits.iter().zip(&self.moduli).enumerate() {
            if digit >= modulus {
                return Err(VectEncError::DigitOutOfRange {
                    position,
                    digit,
                    modulus,
                });
            }
        }

        let mut values: Vec<u64> = digits.into_iter().map(u64::from).collect();
        let mut radices: Vec<u64> = self.moduli.iter().map(|&m| u64::from(m)).collect();
        let mut out = Vec::with_capacity(self.encoded_len);
        pack(&mut values, &mut radices, |byte| out.push(byte));

        debug_assert_eq!(out.len(), self.encoded_len);
        Ok(out)
    }
}

/// Run the merge levels over `values`/`radices` in place, handing every output byte to
/// `emit` in order.
///
/// Products fit in `u64`: at the first level both radices are below `2^32`, and afterwards
/// at most one side of a pair is an original radix while the other is below [`LIMIT`].
fn pack(values: &mut Vec<u64>, radices: &mut Vec<u64>, mut emit: impl FnMut(u8)) {
    while radices.len() > 1 {
        let len = radices.len();
        let pairs = len / 2;

        for i in 0..pairs {
            let (m0, m1) = (radices[2 * i], radices[2 * i + 1]);
            let mut m = m0 * m1;
            let mut r = values[2 * i] + m0 * values[2 * i + 1];
            while m >= LIMIT {
                emit((r & 0xff) as u8);
                r >>= 8;
                m = (m + 255) >> 8;
            }
            values[i] = r;
            radices[i] = m;
        }

        let next_len = if len % 2 == 1 {
            values[pairs] = values[len - 1];
            radices[pairs] = radices[len - 1];
            pairs + 1
        } else {
            pairs
        };
        values.truncate(next_len);
        radices.truncate(next_len);
    }

    if let (Some(&r), Some(&m)) = (values.first(), radices.first()) {
        let (mut r, mut m) = (r, m);
        while m > 1 {
            emit((r & 0xff) as u8);
            r >>= 8;
            m = (m + 255) >> 8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encode_hex(moduli: &[u32], digits: &[u32]) -> String {
        let encoder = VectorEncoder::new(moduli).unwrap();
        hex::encode(encoder.encode(digits.to_vec()).unwrap())
    }

    #[test]
    fn test_known_encodings() {
        assert_eq!(encode_hex(&[256], &[200]), "c8");
        assert_eq!(encode_hex(&[300], &[299]), "2b01");
        assert_eq!(encode_hex(&[1], &[0]), "");
        assert_eq!(encode_hex(&[2, 3], &[1, 2]), "05");
        assert_eq!(encode_hex(&[16384, 16384], &[1, 2]), "01800000");
        assert_eq!(encode_hex(&[5, 7, 9], &[4, 6, 8]), "3a01");
        assert_eq!(encode_hex(&[200, 200, 200], &[1, 2, 3]), "91d801");
        assert_eq!(encode_hex(&[4591; 4], &[1, 2, 3, 4]), "df23bf47000000");
        assert_eq!(encode_hex(&[4, 3, 2], &[0, 2, 1]), "14");
    }

    #[test]
    fn test_empty_vector_encodes_to_nothing() {
        let encoder = VectorEncoder::new(&[]).unwrap();
        assert!(encoder.is_empty());
        assert_eq!(encoder.encoded_len(), 0);
        assert_eq!(encoder.encode(Vec::new()).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_ntru_prime_sizes() {
        // Streamlined NTRU Prime public key sizes
        assert_eq!(VectorEncoder::new(&[4591; 761]).unwrap().encoded_len(), 1158);
        assert_eq!(VectorEncoder::new(&[4621; 653]).unwrap().encoded_len(), 994);
        assert_eq!(VectorEncoder::new(&[5167; 857]).unwrap().encoded_len(), 1322);
    }

    #[test]
    fn test_zero_modulus_rejected() {
        assert_eq!(
            VectorEncoder::new(&[3, 0, 5]),
            Err(VectEncError::ZeroModulus { position: 1 })
        );
    }

    #[test]
    fn test_encode_validates_input() {
        let encoder = VectorEncoder::new(&[3, 5]).unwrap();
        assert_eq!(
            encoder.encode(vec![1]),
            Err(VectEncError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            encoder.encode(vec![1, 5]),
            Err(VectEncError::DigitOutOfRange {
                position: 1,
                digit: 5,
                modulus: 5
            })
        );
    }

    #[test]
    fn test_largest_moduli_do_not_overflow() {
        let encoder = VectorEncoder::new(&[u32::MAX, u32::MAX, u32::MAX]).unwrap();
        let bytes = encoder
            .encode(vec![u32::MAX - 1, u32::MAX - 1, u32::MAX - 1])
            .unwrap();
        assert_eq!(bytes.len(), encoder.encoded_len());
    }

    fn arb_moduli_and_digits() -> impl Strategy<Value = (Vec<u32>, Vec<u32>)> {
        prop::collection::vec(1u32..70000, 0..40).prop_flat_map(|moduli| {
            let digits: Vec<_> = moduli.iter().map(|&m| 0..m).collect();
            (Just(moduli), digits)
        })
    }

    proptest! {
        #[test]
        fn encoded_length_matches_declared((moduli, digits) in arb_moduli_and_digits()) {
            let encoder = VectorEncoder::new(&moduli).unwrap();
            let bytes = encoder.encode(digits).unwrap();
            prop_assert_eq!(bytes.len(), encoder.encoded_len());
        }

        #[test]
        fn encoding_is_deterministic((moduli, digits) in arb_moduli_and_digits()) {
            let encoder = VectorEncoder::new(&moduli).unwrap();
            let first = encoder.encode(digits.clone()).unwrap();
            let second = encoder.encode(digits).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
