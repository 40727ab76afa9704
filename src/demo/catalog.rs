//! Demo list items and the catalog that serves them by position

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// One entry shown in the composite-row list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoListItem {
    pub id: String,
    /// Image resource name for the icon slot
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl DemoListItem {
    pub fn new(
        id: impl Into<String>,
        icon: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Immutable, ordered, non-empty sequence of list items
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListCatalog {
    items: Vec<DemoListItem>,
}

impl ListCatalog {
    pub fn new(items: Vec<DemoListItem>) -> Result<Self, DomainError> {
        if items.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }
        Ok(Self { items })
    }

    /// The four stock entries of the demo
    pub fn demo() -> Self {
        Self {
            items: vec![
                DemoListItem::new(
                    "list_item_01",
                    "ic_bubble_chart_white_48dp",
                    "Bubble Chart",
                    "Circles of every size",
                ),
                DemoListItem::new(
                    "list_item_02",
                    "ic_ac_unit_white_48dp",
                    "AC Unit",
                    "Keeping things cool",
                ),
                DemoListItem::new("list_item_03", "ic_spa_white_48dp", "Spa", "Relax and unwind"),
                DemoListItem::new(
                    "list_item_04",
                    "ic_whatshot_white_48dp",
                    "What's Hot",
                    "Trending right now",
                ),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for the `len` convention
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `position`, or the first item when `position` is out of range
    pub fn item(&self, position: isize) -> &DemoListItem {
        let in_range = usize::try_from(position)
            .ok()
            .and_then(|index| self.items.get(index));

        match in_range {
            Some(item) => item,
            None => {
                crate::log!("List position {} out of range, showing first item", position);
                &self.items[0]
            }
        }
    }
}
