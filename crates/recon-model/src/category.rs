//! Short category code to full category name lookup table.

use std::collections::BTreeMap;

/// Built-in `QSCAT` code table used when no configuration overrides it.
const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("AIMS01", "Alberta Infant Motor Scale (AIMS)"),
    ("DEVM01", "CDC Developmental Milestones Checklist"),
    ("PRE1", "Pre-Examination Questionnaire"),
    ("HEAD01", "Measurement of Head Circumference"),
    ("GMFM88", "Gross Motor Function Measure 88-items (GMFM-88)"),
    (
        "HINE02",
        "Hammersmith Infant Neurological Examination, Section 2 (HINE-2)",
    ),
    ("RSS01", "Response to Sensory Stimuli"),
    ("IMP01", "Infant Motor Profile (IMP)"),
    ("POST1", "Post Examination Questionnaire"),
    ("Bayley-4", "Bayley-4 Cognitive, Language and Motor"),
    (
        "TIMP1",
        "Test of Infant Motor Performance Screening Items (TIMPSI)",
    ),
    (
        "Vineland-3 Comprehensive",
        "Vineland-3 Comprehensive Interview Form",
    ),
];

/// Mapping from secondary-dataset category codes to the full names used by
/// the primary dataset. Lookups are exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(transparent)]
pub struct CategoryMap {
    entries: BTreeMap<String, String>,
}

impl CategoryMap {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        DEFAULT_CATEGORIES
            .iter()
            .map(|(code, name)| ((*code).to_string(), (*name).to_string()))
            .collect()
    }
}

impl FromIterator<(String, String)> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
