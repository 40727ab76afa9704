//! Demo shell: launcher navigation, the counter screen and the list screen
//!
//! Headless stand-ins for the app's screens; each run ends in a list of
//! recorded draw operations.

pub mod catalog;
pub mod intent;
pub mod list;
pub mod screens;

use crate::domain::DomainError;
use crate::shared::config::AppConfig;
use crate::widget::canvas::DrawOp;
use crate::widget::Widget;

pub use catalog::{DemoListItem, ListCatalog};
pub use intent::{DemoIntent, DemoLayout, Destination, MainMenu, MenuEntry};
pub use list::{ListItemAdapter, ListRow, ListScreen};
pub use screens::{Button, TallyCounterScreen, Toast};

/// Window size a demo is rendered into
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 640.0,
        }
    }
}

impl Viewport {
    /// Whether both extents are finite and non-negative
    pub fn is_valid(&self) -> bool {
        [self.width, self.height]
            .iter()
            .all(|extent| extent.is_finite() && *extent >= 0.0)
    }
}

/// Outcome of a scripted demo run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DemoRun {
    pub toasts: Vec<Toast>,
    pub ops: Vec<DrawOp>,
}

/// Open a launcher entry, click `clicks` times and render
///
/// Clicks press the increment button, except on the interacted layout where
/// they tap the middle of the counter itself.
pub fn run_demo(
    entry: MenuEntry,
    clicks: u32,
    viewport: Viewport,
    config: &AppConfig,
) -> Result<DemoRun, DomainError> {
    crate::log_fn!("run_demo", "{} clicks={}", entry, clicks);

    if !viewport.is_valid() {
        return Err(DomainError::InvalidArgument(format!(
            "viewport {}x{} must be finite and non-negative",
            viewport.width, viewport.height
        )));
    }

    match MainMenu.on_click(entry) {
        Destination::TallyCounter(intent) => {
            // Extras go through the same encoding a real launch would use.
            let intent = DemoIntent::from_extras(&intent.to_extras()?)?;
            let mut screen = TallyCounterScreen::from_intent(intent, config)?;
            let mut toasts = Vec::new();
            if intent.layout.is_interactive() {
                // Taps hit-test against the laid-out frame.
                screen.render(viewport.width, viewport.height);
                let frame = screen.counter().frame();
                let (x, y) = (frame.width() * 0.5, frame.height() * 0.5);
                for _ in 0..clicks {
                    screen.on_counter_tap(x, y);
                }
            } else {
                toasts = (0..clicks)
                    .filter_map(|_| screen.on_button(Button::Increment))
                    .collect();
            }
            let ops = screen.render(viewport.width, viewport.height).into_ops();
            Ok(DemoRun { toasts, ops })
        }
        Destination::ListScreen => {
            let adapter = ListItemAdapter::new(
                ListCatalog::demo(),
                config.list_item.clone(),
                &config.resources(),
            );
            let ops = ListScreen::new(adapter).render(viewport.width).into_ops();
            Ok(DemoRun {
                toasts: Vec::new(),
                ops,
            })
        }
    }
}
