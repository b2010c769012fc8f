use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Named entities found in one text.
///
/// Entities are kept ordered so report cells come out the same on every run.
/// A text with no entities at all is represented as `Option::<EntitySet>::None`
/// by the extractors, never as an empty set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntitySet(BTreeSet<String>);

impl EntitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Entities present in either set.
    pub fn union(&self, other: &EntitySet) -> EntitySet {
        EntitySet(self.0.union(&other.0).cloned().collect())
    }

    /// Entities present in `self` but not in `other`.
    pub fn difference(&self, other: &EntitySet) -> EntitySet {
        EntitySet(self.0.difference(&other.0).cloned().collect())
    }

    pub fn intersection(&self, other: &EntitySet) -> EntitySet {
        EntitySet(self.0.intersection(&other.0).cloned().collect())
    }
}

impl<S: Into<String>> FromIterator<S> for EntitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        EntitySet(iter.into_iter().map(Into::into).collect())
    }
}

/// Special outcomes of the unique-to-output / unique-to-ground-truth operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiffStatus {
    /// Both sides hold exactly the same entities.
    AllAttested,
    /// Every output entity also appears in the ground truth.
    NoneInOutput,
    /// Every ground-truth entity also appears in the output.
    NoneInGroundTruth,
    /// The output text had no entities.
    NoEntitiesInOutput,
    /// The ground-truth text had no entities.
    NoEntitiesInGroundTruth,
}

impl DiffStatus {
    /// Status text written into report cells.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffStatus::AllAttested => "all_attested",
            DiffStatus::NoneInOutput => "No_Unique_Entities in Output",
            DiffStatus::NoneInGroundTruth => "No_Unique_entities in Ground_truth",
            DiffStatus::NoEntitiesInOutput => "no_named_entities in Output",
            DiffStatus::NoEntitiesInGroundTruth => "no_named_entities in Ground_truth",
        }
    }
}

impl fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a one-sided set difference: either real entities or a status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Difference {
    Entities(EntitySet),
    Status(DiffStatus),
}

impl Difference {
    pub fn entities(&self) -> Option<&EntitySet> {
        match self {
            Difference::Entities(entities) => Some(entities),
            Difference::Status(_) => None,
        }
    }

    pub fn status(&self) -> Option<DiffStatus> {
        match self {
            Difference::Entities(_) => None,
            Difference::Status(status) => Some(*status),
        }
    }
}
