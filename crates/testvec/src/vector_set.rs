// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{TestVecError, TestVecResult};
use crate::moduli::ModuliSpec;
use pqcr_vectenc::{Modulus, VectorEncoder};
use tracing::debug;

/// Longest vector-set name kept; longer names are truncated.
pub const MAX_NAME_LEN: usize = 63;

/// A named family of bounded digit vectors together with the encoder for it.
///
/// Immutable once built. The moduli live in the encoder only.
#[derive(Debug, Clone)]
pub struct VectorSet {
    name: String,
    encoder: VectorEncoder,
}

impl VectorSet {
    /// Validate `name` and build the encoder for `moduli`.
    pub fn build(name: &str, moduli: Vec<Modulus>) -> TestVecResult<Self> {
        let name = normalize_name(name)?;
        let encoder =
            VectorEncoder::new(&moduli).map_err(|e| TestVecError::encoder(name.clone(), e))?;
        debug!(
            name = %name,
            positions = encoder.len(),
            encoded_len = encoder.encoded_len(),
            "Built vector-set"
        );

        Ok(Self { name, encoder })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn moduli(&self) -> &[Modulus] {
        self.encoder.moduli()
    }

    pub fn encoder(&self) -> &VectorEncoder {
        &self.encoder
    }

    /// Bytes per encoded vector
    pub fn encoded_len(&self) -> usize {
        self.encoder.encoded_len()
    }
}

impl TryFrom<ModuliSpec> for VectorSet {
    type Error = TestVecError;

    fn try_from(spec: ModuliSpec) -> Result<Self, Self::Error> {
        VectorSet::build(&spec.name, spec.moduli)
    }
}

fn normalize_name(name: &str) -> TestVecResult<String> {
    if name.is_empty() {
        return Err(TestVecError::InvalidName {
            name: name.to_string(),
            reason: "name is empty".to_string(),
        });
    }
    if let Some(c) = name.chars().find(|c| !c.is_ascii_graphic()) {
        return Err(TestVecError::InvalidName {
            name: name.to_string(),
            reason: format!("character {c:?} is not printable ASCII"),
        });
    }
    // ASCII only, so byte truncation stays on a char boundary
    Ok(name[..name.len().min(MAX_NAME_LEN)].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moduli::constant;

    #[test]
    fn test_build_vector_set() {
        let set = VectorSet::try_from(constant(4591, 761).unwrap()).unwrap();
        assert_eq!(set.name(), "const_4591_761");
        assert_eq!(set.moduli().len(), 761);
        assert_eq!(set.encoded_len(), 1158);
        assert_eq!(set.encoder().moduli(), set.moduli());
        assert!(set.moduli().iter().all(|&m| m == 4591));
    }

    #[test]
    fn test_encoded_len_depends_on_moduli_only() {
        let a = VectorSet::build("first", vec![17, 300, 4591, 2]).unwrap();
        let b = VectorSet::build("second", vec![17, 300, 4591, 2]).unwrap();
        assert_eq!(a.encoded_len(), b.encoded_len());
    }

    #[test]
    fn test_long_names_are_truncated() {
        let long = "x".repeat(100);
        let set = VectorSet::build(&long, vec![3]).unwrap();
        assert_eq!(set.name().len(), MAX_NAME_LEN);
    }

    #[test]
    fn test_invalid_names_rejected() {
        assert!(matches!(
            VectorSet::build("", vec![3]),
            Err(TestVecError::InvalidName { .. })
        ));
        assert!(matches!(
            VectorSet::build("has space", vec![3]),
            Err(TestVecError::InvalidName { .. })
        ));
        assert!(matches!(
            VectorSet::build("caf\u{e9}", vec![3]),
            Err(TestVecError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_encoder_failure_names_the_set() {
        let err = VectorSet::build("broken", vec![3, 0]).unwrap_err();
        assert!(matches!(err, TestVecError::Encoder { ref name, .. } if name == "broken"));
        assert!(err.to_string().contains("broken"));
    }
}
