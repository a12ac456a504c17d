use serde::{Deserialize, Serialize};

use super::catalog::ExtraId;

/// Toggle state for each catalog extra.
///
/// Holds exactly one flag per [`ExtraId`]; there is no way to add or drop a
/// key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtraSelections([bool; ExtraId::COUNT]);

impl ExtraSelections {
    pub fn is_selected(
        &self,
        extra: ExtraId,
    ) -> bool {
        self.0[extra.index()]
    }

    /// Returns a copy with one flag changed.
    pub fn with(
        mut self,
        extra: ExtraId,
        selected: bool,
    ) -> Self {
        self.0[extra.index()] = selected;
        self
    }

    pub fn toggled(
        self,
        extra: ExtraId,
    ) -> Self {
        let current = self.is_selected(extra);
        self.with(extra, !current)
    }

    /// Every key with its flag, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (ExtraId, bool)> + '_ {
        ExtraId::ALL.into_iter().map(move |id| (id, self.is_selected(id)))
    }

    /// Selected extras in catalog order.
    pub fn selected(&self) -> impl Iterator<Item = ExtraId> + '_ {
        self.iter()
            .filter_map(|(id, selected)| selected.then_some(id))
    }

    pub fn any_selected(&self) -> bool {
        self.0.iter().any(|selected| *selected)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ExtraId> for ExtraSelections {
    fn from_iter<I: IntoIterator<Item = ExtraId>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |selections, id| selections.with(id, true))
    }
}
