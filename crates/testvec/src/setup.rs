// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The fixed list of vector-sets for the target schemes.

use crate::catalog::Catalog;
use crate::errors::TestVecResult;
use crate::moduli::{constant, random_range, rounded, squished_perm};
use pqcr_vectenc::Modulus;
use tracing::info;

/// Streamlined NTRU Prime `(q, p)` pairs: coefficient modulus and polynomial length.
pub const NTRU_PRIME: [(Modulus, usize); 3] = [(4591, 761), (4621, 653), (5167, 857)];

/// pkpsig `(q, n)` pairs: z vector modulus and permutation length.
pub const PKPSIG: [(Modulus, usize); 4] = [(797, 55), (977, 61), (1409, 87), (1789, 111)];

/// `(count, lower, upper, label)` for the random-moduli coverage sets.
pub const RANDOM_RANGES: [(usize, Modulus, Modulus, &str); 2] =
    [(128, 2, 15, "foobar"), (768, 2048, 2048 + 256, "foo")];

/// Build the catalog of every known vector-set, in its canonical order.
pub fn default_catalog() -> TestVecResult<Catalog> {
    let mut catalog = Catalog::new();
    populate(&mut catalog)?;
    info!(sets = catalog.len(), "Vector-set catalog ready");
    Ok(catalog)
}

/// Append every known vector-set to `catalog`.
pub fn populate(catalog: &mut Catalog) -> TestVecResult<()> {
    // NTRU Prime, unrounded
    for (q, p) in NTRU_PRIME {
        catalog.define(constant(q, p)?)?;
    }

    // NTRU Prime, rounded
    for (q, p) in NTRU_PRIME {
        catalog.define(constant(rounded(q), p)?)?;
    }

    // pkpsig z vectors
    for (q, n) in PKPSIG {
        catalog.define(constant(q, n)?)?;
    }

    // pkpsig rho vectors, unsquished
    for (_, n) in PKPSIG {
        catalog.define(constant(n as Modulus, n)?)?;
    }

    // pkpsig rho vectors, squished
    for (_, n) in PKPSIG {
        catalog.define(squished_perm(n as Modulus)?)?;
    }

    for (count, lower, upper, label) in RANDOM_RANGES {
        catalog.define(random_range(count, lower, upper, label)?)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order_and_sizes() {
        let catalog = default_catalog().unwrap();
        let expected = [
            ("const_4591_761", 761, 1158),
            ("const_4621_653", 653, 994),
            ("const_5167_857", 857, 1322),
            ("const_2295_761", 761, 1063),
            ("const_2310_653", 653, 913),
            ("const_2583_857", 857, 1215),
            ("const_797_55", 55, 67),
            ("const_977_61", 61, 76),
            ("const_1409_87", 87, 114),
            ("const_1789_111", 111, 150),
            ("const_55_55", 55, 40),
            ("const_61_61", 61, 46),
            ("const_87_87", 87, 71),
            ("const_111_111", 111, 95),
            ("squished_perm_55", 54, 31),
            ("squished_perm_61", 60, 35),
            ("squished_perm_87", 86, 55),
            ("squished_perm_111", 110, 75),
            ("random_128_2_15_foobar", 128, 47),
            ("random_768_2048_2304_foo", 768, 1065),
        ];

        assert_eq!(catalog.len(), expected.len());
        for (set, (name, positions, encoded_len)) in catalog.iter().zip(expected) {
            assert_eq!(set.name(), name);
            assert_eq!(set.moduli().len(), positions, "{name}");
            assert_eq!(set.encoded_len(), encoded_len, "{name}");
        }
    }

    #[test]
    fn test_default_catalog_is_reproducible() {
        let first = default_catalog().unwrap();
        let second = default_catalog().unwrap();
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.name(), b.name());
            assert_eq!(a.moduli(), b.moduli());
        }
    }
}
