// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Generators for named modulus arrays.
//!
//! Each strategy derives its vector-set name from its parameters, so identical parameters
//! always yield an identically named and identically defined set.

use crate::errors::{TestVecError, TestVecResult};
use crate::sampling::sample;
use pqcr_vectenc::Modulus;

/// A named modulus array, ready to be turned into a vector-set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuliSpec {
    pub name: String,
    pub moduli: Vec<Modulus>,
}

/// `count` positions all bounded by `value`.
pub fn constant(value: Modulus, count: usize) -> TestVecResult<ModuliSpec> {
    if value == 0 {
        return Err(TestVecError::invalid_moduli("constant modulus must be at least 1"));
    }
    Ok(ModuliSpec {
        name: format!("const_{value}_{count}"),
        moduli: vec![value; count],
    })
}

/// Radix of a rounded NTRU Prime coefficient for modulus `q`, or `None` if `q` is divisible
/// by 3.
pub fn try_rounded(q: Modulus) -> Option<Modulus> {
    match q % 3 {
        1 => Some((q - 1) / 2),
        2 => Some(((u64::from(q) + 1) / 2) as Modulus),
        _ => None,
    }
}

/// Radix of a rounded NTRU Prime coefficient for modulus `q`.
///
/// # Panics
///
/// Panics if `q` is divisible by 3; no valid NTRU Prime modulus is.
pub fn rounded(q: Modulus) -> Modulus {
    match try_rounded(q) {
        Some(m) => m,
        None => panic!("{q} is divisible by 3 and cannot be a valid value of q"),
    }
}

/// Moduli `[n, n-1, ..., 2]` for a permutation of `n` elements written as a sequence of
/// remaining-choice indices.
pub fn squished_perm(n: Modulus) -> TestVecResult<ModuliSpec> {
    if n == 0 {
        return Err(TestVecError::invalid_moduli(
            "a squished permutation needs at least one element",
        ));
    }
    Ok(ModuliSpec {
        name: format!("squished_perm_{n}"),
        moduli: (2..=n).rev().collect(),
    })
}

/// `count` moduli drawn from `[lower, upper]` using `label` as the sampling seed.
pub fn random_range(
    count: usize,
    lower: Modulus,
    upper: Modulus,
    label: &str,
) -> TestVecResult<ModuliSpec> {
    if lower == 0 {
        return Err(TestVecError::invalid_moduli(
            "lower bound of a random range must be at least 1",
        ));
    }
    if upper < lower {
        return Err(TestVecError::invalid_moduli(format!(
            "empty random range [{lower}, {upper}]"
        )));
    }

    let width = upper - lower + 1;
    let offsets = sample(label.as_bytes(), &vec![width; count])?;
    Ok(ModuliSpec {
        name: format!("random_{count}_{lower}_{upper}_{label}"),
        moduli: offsets.into_iter().map(|r| r + lower).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_constant() {
        let spec = constant(4591, 761).unwrap();
        assert_eq!(spec.name, "const_4591_761");
        assert_eq!(spec.moduli.len(), 761);
        assert!(spec.moduli.iter().all(|&m| m == 4591));

        assert!(constant(0, 3).is_err());
        assert!(constant(7, 0).unwrap().moduli.is_empty());
    }

    #[test]
    fn test_rounded() {
        assert_eq!(rounded(4591), 2295);
        assert_eq!(rounded(4621), 2310);
        assert_eq!(rounded(5167), 2583);
        assert_eq!(rounded(7), 3);
        assert_eq!(rounded(5), 3);
        assert_eq!(rounded(8), 4);
        assert_eq!(rounded(u32::MAX - 1), u32::MAX / 2);
        assert_eq!(try_rounded(9), None);
    }

    #[test]
    #[should_panic(expected = "divisible by 3")]
    fn test_rounded_rejects_multiple_of_three() {
        rounded(4593);
    }

    #[test]
    fn test_squished_perm() {
        let spec = squished_perm(55).unwrap();
        assert_eq!(spec.name, "squished_perm_55");
        assert_eq!(spec.moduli.len(), 54);
        assert_eq!(spec.moduli.first(), Some(&55));
        assert_eq!(spec.moduli.last(), Some(&2));
        assert!(spec.moduli.windows(2).all(|w| w[0] == w[1] + 1));

        assert!(squished_perm(1).unwrap().moduli.is_empty());
        assert!(squished_perm(0).is_err());
    }

    #[test]
    fn test_random_range_fixtures() {
        let spec = random_range(128, 2, 15, "foobar").unwrap();
        assert_eq!(spec.name, "random_128_2_15_foobar");
        assert_eq!(
            &spec.moduli[..16],
            &[15, 8, 3, 6, 11, 2, 2, 7, 11, 11, 10, 9, 15, 10, 9, 10]
        );

        let spec = random_range(768, 2048, 2048 + 256, "foo").unwrap();
        assert_eq!(spec.name, "random_768_2048_2304_foo");
        assert_eq!(
            &spec.moduli[..8],
            &[2089, 2086, 2218, 2192, 2066, 2186, 2296, 2293]
        );
    }

    #[test]
    fn test_random_range_rejects_bad_bounds() {
        assert!(random_range(4, 0, 10, "x").is_err());
        assert!(random_range(4, 11, 10, "x").is_err());
        assert_eq!(random_range(3, 9, 9, "x").unwrap().moduli, vec![9, 9, 9]);
    }

    proptest! {
        #[test]
        fn squished_perm_is_strictly_descending(n in 1u32..2000) {
            let spec = squished_perm(n).unwrap();
            prop_assert_eq!(spec.moduli.len(), (n - 1) as usize);
            for (i, &m) in spec.moduli.iter().enumerate() {
                prop_assert_eq!(m, n - i as u32);
            }
        }

        #[test]
        fn random_range_is_stable_and_bounded(
            count in 0usize..200,
            lower in 1u32..5000,
            span in 0u32..5000,
            label in "[a-z]{1,12}",
        ) {
            let upper = lower + span;
            let first = random_range(count, lower, upper, &label).unwrap();
            let second = random_range(count, lower, upper, &label).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert!(first.moduli.iter().all(|&m| lower <= m && m <= upper));
        }
    }
}
