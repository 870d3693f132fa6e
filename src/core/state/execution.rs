// src/core/state/execution.rs

use crate::core::CuiError;
use crate::core::options::OptionTable;
use crate::core::region::Region;
use crate::core::state::SelectionStore;

/// Everything a command may read or mutate while it executes.
pub struct ExecutionContext<'a> {
    pub store: &'a mut SelectionStore,
    pub options: &'a OptionTable,
    /// Whether the message carried the multi-region prefix.
    pub multi: bool,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(store: &'a mut SelectionStore, options: &'a OptionTable, multi: bool) -> Self {
        Self {
            store,
            options,
            multi,
        }
    }

    /// The region this message addresses.
    pub fn target(&self) -> Result<&Region, CuiError> {
        self.store
            .get_selection(self.multi)
            .ok_or(CuiError::NoActiveRegion)
    }

    pub fn target_mut(&mut self) -> Result<&mut Region, CuiError> {
        if self.multi {
            self.store
                .active_region_mut()
                .ok_or(CuiError::NoActiveRegion)
        } else {
            Ok(self.store.selection_mut())
        }
    }
}
