// src/core/state/store.rs

//! The authoritative local mirror of the server's selection state.

use crate::core::region::Region;
use indexmap::IndexMap;
use uuid::Uuid;

/// Holds the primary selection and the keyed regions of multi-region mode.
///
/// The primary selection is never absent; "no selection" is an empty region. The
/// active key, when set, always names an entry in `regions`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionStore {
    selection: Region,
    regions: IndexMap<Uuid, Region>,
    active: Option<Uuid>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a selection change.
    ///
    /// - No id: replaces the primary selection (`None` resets it to an empty cuboid).
    /// - Id without region: removes that keyed region and clears the active key.
    /// - Id and region: inserts or overwrites the keyed region and makes it active.
    pub fn set_selection(&mut self, id: Option<Uuid>, region: Option<Region>) {
        let Some(id) = id else {
            self.selection = region.unwrap_or_default();
            return;
        };

        match region {
            None => {
                self.regions.shift_remove(&id);
                self.active = None;
            }
            Some(region) => {
                self.regions.insert(id, region);
                self.active = Some(id);
            }
        }
    }

    /// Resets the primary selection. Keyed regions are untouched.
    pub fn clear_selection(&mut self) {
        self.selection = Region::default();
    }

    /// Drops every keyed region and the active key. The primary selection is untouched.
    pub fn clear_regions(&mut self) {
        self.active = None;
        self.regions.clear();
    }

    /// Resets everything; used on world or player change.
    pub fn clear(&mut self) {
        self.clear_selection();
        self.clear_regions();
    }

    /// The active keyed region when `multi`, otherwise the primary selection.
    pub fn get_selection(&self, multi: bool) -> Option<&Region> {
        if multi {
            self.active.and_then(|id| self.regions.get(&id))
        } else {
            Some(&self.selection)
        }
    }

    pub fn selection(&self) -> &Region {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Region {
        &mut self.selection
    }

    pub fn active_id(&self) -> Option<Uuid> {
        self.active
    }

    pub fn active_region_mut(&mut self) -> Option<&mut Region> {
        let id = self.active?;
        self.regions.get_mut(&id)
    }

    pub fn region(&self, id: &Uuid) -> Option<&Region> {
        self.regions.get(id)
    }

    /// Keyed regions in insertion order.
    pub fn regions(&self) -> impl Iterator<Item = (&Uuid, &Region)> {
        self.regions.iter()
    }

    /// Number of keyed regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
