use std::collections::BTreeSet;

use recon_model::CategoryMap;

/// Translates secondary-dataset category codes into full names.
///
/// The mapper owns its table and holds no other state; misses are recorded
/// by the caller in an [`UnmappedCodes`] accumulator.
#[derive(Debug, Clone)]
pub struct CategoryMapper {
    map: CategoryMap,
}

impl CategoryMapper {
    pub fn new(map: CategoryMap) -> Self {
        Self { map }
    }

    /// Exact, case-sensitive lookup of an already normalized code.
    ///
    /// An entry whose full name is blank counts as a miss.
    pub fn map_category(&self, code: &str) -> Option<&str> {
        self.map
            .get(code)
            .filter(|name| !name.trim().is_empty())
    }
}

/// Distinct category codes without a mapping, kept sorted for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnmappedCodes {
    codes: BTreeSet<String>,
}

impl UnmappedCodes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, code: &str) {
        if !self.codes.contains(code) {
            self.codes.insert(code.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Codes in sorted order.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        self.codes.iter().cloned().collect()
    }
}
