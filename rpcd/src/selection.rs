//! Radio-list selection keyed by item name.

use crate::{Command, DisplayLayouts, Layout};

/// Items that can appear in a selectable list.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Layout {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Command {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for DisplayLayouts {
    fn name(&self) -> &str {
        &self.display
    }
}

/// Selection state of one radio list.
///
/// The selection is stored by name so it stays correct when the list is
/// re-fetched and indices shift. Every method that can change the selection
/// returns the newly selected item exactly when the list's change handler
/// has to run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSelection {
    selected: Option<String>,
}

impl ListSelection {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.as_deref() == Some(name)
    }

    /// (Re)render: the first item becomes selected and is reported once.
    pub fn populate<'a, T: Named>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let first = items.first();
        self.selected = first.map(|item| item.name().to_string());
        first
    }

    /// User picked `name`. Re-picking the current item and unknown names
    /// report nothing.
    pub fn select<'a, T: Named>(&mut self, items: &'a [T], name: &str) -> Option<&'a T> {
        let item = items.iter().find(|item| item.name() == name)?;
        if self.is_selected(name) {
            return None;
        }
        self.selected = Some(name.to_string());
        Some(item)
    }

    /// The selected item, if it is still part of `items`.
    pub fn current<'a, T: Named>(&self, items: &'a [T]) -> Option<&'a T> {
        let name = self.selected.as_deref()?;
        items.iter().find(|item| item.name() == name)
    }
}
