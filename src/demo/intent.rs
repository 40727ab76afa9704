//! Navigation between demo screens
//!
//! A counter screen is opened with two extras: which layout to show and
//! whether clicks pop a toast.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::DomainError;
use crate::widget::counter::CounterVariant;

pub const EXTRA_LAYOUT_RES_ID: &str = "layoutResId";
pub const EXTRA_TOAST_ON_CLICK: &str = "toastOnClick";

/// Counter screen layouts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoLayout {
    #[default]
    Drawn,
    Invalidated,
    Measured,
    Attributed,
    Interacted,
}

impl DemoLayout {
    /// Counter variant placed in this layout
    pub fn counter_variant(&self) -> CounterVariant {
        match self {
            DemoLayout::Drawn | DemoLayout::Invalidated => CounterVariant::Invalidated,
            DemoLayout::Measured => CounterVariant::Measured,
            DemoLayout::Attributed | DemoLayout::Interacted => CounterVariant::Attributed,
        }
    }

    /// Whether the counter itself reacts to taps
    pub fn is_interactive(&self) -> bool {
        matches!(self, DemoLayout::Interacted)
    }
}

/// Parameters passed when starting the counter screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoIntent {
    #[serde(rename = "layoutResId", default)]
    pub layout: DemoLayout,
    #[serde(rename = "toastOnClick", default)]
    pub toast_on_click: bool,
}

impl DemoIntent {
    pub fn new(layout: DemoLayout, toast_on_click: bool) -> Self {
        Self {
            layout,
            toast_on_click,
        }
    }

    /// Encode as an extras map
    pub fn to_extras(&self) -> Result<Map<String, Value>, DomainError> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(DomainError::InvalidArgument(format!(
                "intent encoded as non-object: {}",
                other
            ))),
        }
    }

    /// Decode from an extras map; missing extras take their defaults
    pub fn from_extras(extras: &Map<String, Value>) -> Result<Self, DomainError> {
        Ok(serde_json::from_value(Value::Object(extras.clone()))?)
    }
}

/// Buttons on the launcher screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    Drawn,
    Invalidated,
    Measured,
    Attributed,
    Interacted,
    Grouped,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 6] = [
        MenuEntry::Drawn,
        MenuEntry::Invalidated,
        MenuEntry::Measured,
        MenuEntry::Attributed,
        MenuEntry::Interacted,
        MenuEntry::Grouped,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MenuEntry::Drawn => "drawn",
            MenuEntry::Invalidated => "invalidated",
            MenuEntry::Measured => "measured",
            MenuEntry::Attributed => "attributed",
            MenuEntry::Interacted => "interacted",
            MenuEntry::Grouped => "grouped",
        }
    }
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MenuEntry {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuEntry::ALL
            .into_iter()
            .find(|entry| entry.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownDemo(s.to_string()))
    }
}

/// Where a launcher click leads
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    TallyCounter(DemoIntent),
    ListScreen,
}

/// Launcher screen that directs to the individual demos
#[derive(Clone, Copy, Debug, Default)]
pub struct MainMenu;

impl MainMenu {
    /// Destination for a launcher click; only the drawn demo toasts
    pub fn on_click(&self, entry: MenuEntry) -> Destination {
        let (layout, toast_on_click) = match entry {
            MenuEntry::Grouped => return Destination::ListScreen,
            MenuEntry::Drawn => (DemoLayout::Drawn, true),
            MenuEntry::Invalidated => (DemoLayout::Invalidated, false),
            MenuEntry::Measured => (DemoLayout::Measured, false),
            MenuEntry::Attributed => (DemoLayout::Attributed, false),
            MenuEntry::Interacted => (DemoLayout::Interacted, false),
        };
        crate::log!("Launching {:?} (toast={})", layout, toast_on_click);
        Destination::TallyCounter(DemoIntent::new(layout, toast_on_click))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_menu_mapping() {
        let menu = MainMenu;
        assert_eq!(
            menu.on_click(MenuEntry::Drawn),
            Destination::TallyCounter(DemoIntent::new(DemoLayout::Drawn, true))
        );
        assert_eq!(
            menu.on_click(MenuEntry::Measured),
            Destination::TallyCounter(DemoIntent::new(DemoLayout::Measured, false))
        );
        assert_eq!(menu.on_click(MenuEntry::Grouped), Destination::ListScreen);
    }

    #[test]
    fn test_extras_keys() {
        let extras = DemoIntent::new(DemoLayout::Attributed, true).to_extras().unwrap();
        assert_eq!(extras[EXTRA_LAYOUT_RES_ID], json!("attributed"));
        assert_eq!(extras[EXTRA_TOAST_ON_CLICK], json!(true));
    }

    #[test]
    fn test_missing_extras_take_defaults() {
        let intent = DemoIntent::from_extras(&Map::new()).unwrap();
        assert_eq!(intent, DemoIntent::new(DemoLayout::Drawn, false));

        let mut extras = Map::new();
        extras.insert(EXTRA_LAYOUT_RES_ID.to_string(), json!("measured"));
        let intent = DemoIntent::from_extras(&extras).unwrap();
        assert_eq!(intent, DemoIntent::new(DemoLayout::Measured, false));
    }

    #[test]
    fn test_bad_extras_rejected() {
        let mut extras = Map::new();
        extras.insert(EXTRA_LAYOUT_RES_ID.to_string(), json!("nope"));
        assert!(matches!(
            DemoIntent::from_extras(&extras),
            Err(DomainError::Serialization(_))
        ));
    }

    #[test]
    fn test_menu_entry_from_str() {
        assert_eq!("Measured".parse::<MenuEntry>().unwrap(), MenuEntry::Measured);
        assert!(matches!(
            "bogus".parse::<MenuEntry>(),
            Err(DomainError::UnknownDemo(_))
        ));
        for entry in MenuEntry::ALL {
            assert_eq!(entry.to_string().parse::<MenuEntry>().unwrap(), entry);
        }
    }

    #[test]
    fn test_layout_variants() {
        assert_eq!(DemoLayout::Drawn.counter_variant(), CounterVariant::Invalidated);
        assert_eq!(DemoLayout::Measured.counter_variant(), CounterVariant::Measured);
        assert!(DemoLayout::Interacted.is_interactive());
        assert!(!DemoLayout::Attributed.is_interactive());
    }
}
