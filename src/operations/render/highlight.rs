use std::collections::BTreeSet;

use crate::error::Result;
use crate::geometry::{Facing, ViewType};

/// The set of facings drawn on the highlight layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    facings: BTreeSet<Facing>,
}

impl HighlightSet {
    /// Creates an empty set; every wall lands on the base layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every exterior label. `Inner` is not included.
    #[must_use]
    pub fn all_exterior() -> Self {
        Facing::EXTERIOR.into_iter().collect()
    }

    /// Parses a list of labels such as `["North", "South"]`.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::UnknownFacing` for the first label that is
    /// not part of the vocabulary. Labels are case-sensitive.
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let facings = labels
            .into_iter()
            .map(|label| label.as_ref().parse::<Facing>())
            .collect::<std::result::Result<BTreeSet<_>, _>>()?;
        Ok(Self { facings })
    }

    /// Adds a facing, returning `false` if it was already present.
    pub fn insert(&mut self, facing: Facing) -> bool {
        self.facings.insert(facing)
    }

    #[must_use]
    pub fn contains(&self, facing: Facing) -> bool {
        self.facings.contains(&facing)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facings.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.facings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Facing> + '_ {
        self.facings.iter().copied()
    }
}

impl FromIterator<Facing> for HighlightSet {
    fn from_iter<T: IntoIterator<Item = Facing>>(iter: T) -> Self {
        Self {
            facings: iter.into_iter().collect(),
        }
    }
}

impl From<ViewType> for HighlightSet {
    fn from(view: ViewType) -> Self {
        std::iter::once(view.facing()).collect()
    }
}
