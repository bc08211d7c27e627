//! Item catalog with per-entry selection
//!
//! Only selected entries take part in a run, and their order fixes the gene
//! order of every individual.

use serde::{Deserialize, Serialize};
use spacefit_optimization::Item;

/// A catalog row: the item plus whether it is offered to the solver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default = "default_selected")]
    pub selected: bool,
    #[serde(flatten)]
    pub item: Item,
}

fn default_selected() -> bool {
    true
}

impl CatalogEntry {
    pub fn new(item: Item) -> Self {
        Self {
            selected: true,
            item,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Built-in appliance showroom used when no catalog is supplied.
    pub fn default_showroom() -> Self {
        let items = [
            (1, "Mini fridge", 0.25, 40.0, 20),
            (2, "32\" television", 0.1125, 60.0, 6),
            (3, "Washing machine", 0.36, 90.0, 3),
            (4, "Microwave", 0.20, 25.0, 8),
            (5, "Air conditioner", 0.27, 110.0, 2),
            (6, "Blender", 0.04, 8.0, 10),
            (7, "Large fridge", 0.6, 220.0, 2),
            (8, "Electric oven", 0.36, 65.0, 3),
            (9, "Vacuum cleaner", 0.0875, 28.0, 6),
            (10, "Iron", 0.06, 10.0, 12),
            (11, "Gas stove", 0.48, 130.0, 2),
            (12, "Kitchen extractor", 0.18, 45.0, 4),
        ];
        items
            .into_iter()
            .map(|(id, name, area, profit, stock)| {
                CatalogEntry::new(Item::new(id, name, area, profit, stock))
            })
            .collect()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Toggle selection by item id. Returns false if no entry has that id.
    pub fn set_selected(&mut self, id: u64, selected: bool) -> bool {
        match self.entries.iter_mut().find(|e| e.item.id == id) {
            Some(entry) => {
                entry.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Selected items, in catalog order.
    pub fn selected_items(&self) -> Vec<Item> {
        self.entries
            .iter()
            .filter(|e| e.selected)
            .map(|e| e.item.clone())
            .collect()
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
