//! Counter demo screen: one tally counter plus increment and reset buttons

use crate::domain::value_objects::Rect;
use crate::domain::DomainError;
use crate::shared::config::AppConfig;
use crate::widget::base::MeasureSpec;
use crate::widget::canvas::RecordingCanvas;
use crate::widget::counter::{CounterStyle, CounterVariant, TallyCounter, TallyCounterView};
use crate::widget::{EventResult, Widget};

use super::intent::DemoIntent;

/// Text of the toast shown on increment when the intent asks for it
pub const CLICK_TOAST: &str = "Click!";

/// Buttons below the counter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Increment,
    Reset,
}

/// Short-lived message surfaced to the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast(pub String);

/// Screen hosting a single counter chosen by the intent's layout
#[derive(Clone, Debug)]
pub struct TallyCounterScreen {
    intent: DemoIntent,
    counter: TallyCounterView,
}

impl TallyCounterScreen {
    pub fn from_intent(intent: DemoIntent, config: &AppConfig) -> Result<Self, DomainError> {
        let resources = config.resources();
        let variant = intent.layout.counter_variant();
        let style = match variant {
            CounterVariant::Attributed => config.counter.resolve(&resources)?,
            CounterVariant::Invalidated | CounterVariant::Measured => {
                CounterStyle::from_resources(&resources)
            }
        };

        crate::log!("Opening counter screen {:?} with {:?}", intent.layout, variant);

        let counter =
            TallyCounterView::new(variant, style).with_interaction(intent.layout.is_interactive());
        Ok(Self { intent, counter })
    }

    pub fn counter(&self) -> &TallyCounterView {
        &self.counter
    }

    /// Dispatch a button press, returning a toast if one should show
    pub fn on_button(&mut self, button: Button) -> Option<Toast> {
        match button {
            Button::Increment => {
                self.counter.increment();
                self.intent
                    .toast_on_click
                    .then(|| Toast(CLICK_TOAST.to_string()))
            }
            Button::Reset => {
                self.counter.reset();
                None
            }
        }
    }

    /// Forward a tap on the counter itself
    pub fn on_counter_tap(&mut self, x: f32, y: f32) -> EventResult {
        self.counter.handle_click(x, y)
    }

    /// Measure the counter inside a `width` x `height` window, position it at
    /// the origin and record its drawing
    ///
    /// Content-measuring variants get at-most specs so they can shrink to fit;
    /// the others fill the window.
    pub fn render(&mut self, width: f32, height: f32) -> RecordingCanvas {
        let (width_spec, height_spec) = if self.counter.variant().measures_content() {
            (MeasureSpec::AtMost(width), MeasureSpec::AtMost(height))
        } else {
            (MeasureSpec::Exactly(width), MeasureSpec::Exactly(height))
        };

        let measured = self.counter.measure(width_spec, height_spec);
        self.counter.position(Rect::from_pos_size(0.0, 0.0, measured.size));
        self.counter.take_redraw();

        let mut canvas = RecordingCanvas::new();
        self.counter.draw(&mut canvas);
        canvas
    }
}
