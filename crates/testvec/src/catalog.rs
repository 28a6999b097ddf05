// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{TestVecError, TestVecResult};
use crate::moduli::ModuliSpec;
use crate::vector_set::VectorSet;
use std::collections::HashMap;

/// Ordered, name-indexed collection of vector-sets.
///
/// Iteration follows insertion order.
#[derive(Debug, Default)]
pub struct Catalog {
    sets: Vec<VectorSet>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vector-set. Names must be unique.
    pub fn insert(&mut self, set: VectorSet) -> TestVecResult<&VectorSet> {
        if self.index.contains_key(set.name()) {
            return Err(TestVecError::DuplicateName(set.name().to_string()));
        }
        let position = self.sets.len();
        self.index.insert(set.name().to_string(), position);
        self.sets.push(set);
        Ok(&self.sets[position])
    }

    /// Build a vector-set from `spec` and append it. Nothing is added if building fails.
    pub fn define(&mut self, spec: ModuliSpec) -> TestVecResult<&VectorSet> {
        let set = VectorSet::try_from(spec)?;
        self.insert(set)
    }

    /// Exact-match lookup.
    pub fn get(&self, name: &str) -> Option<&VectorSet> {
        self.index.get(name).map(|&i| &self.sets[i])
    }

    /// Resolve every name, failing on the first one the catalog does not contain.
    pub fn resolve<I, S>(&self, names: I) -> TestVecResult<Vec<&VectorSet>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .ok_or_else(|| TestVecError::UnknownVectorSet(name.to_string()))
            })
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VectorSet> {
        self.sets.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.sets.iter().map(VectorSet::name).collect()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a VectorSet;
    type IntoIter = std::slice::Iter<'a, VectorSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
