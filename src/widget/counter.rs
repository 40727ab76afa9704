//! Tally counter widgets
//!
//! One bounded count model, drawn as a rounded panel with a baseline and the
//! zero-padded count centered on it. The variants only differ in how they
//! measure and whether they draw font guide lines.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Insets, Rect, Size};
use crate::theme::resources::{Resources, Typeface, COLOR_ACCENT, COLOR_PRIMARY, COLOR_WHITE};
use crate::theme::types::Color;

use super::base::{round_px, MeasureSpec, MeasuredSize};
use super::canvas::{Canvas, Paint};
use super::text::TextPaint;
use super::{EventResult, Widget};

/// Largest count a counter will hold
pub const MAX_COUNT: i32 = 9999;

/// Widest text a counter ever shows, used for intrinsic sizing
const MAX_COUNT_TEXT: &str = "9999";

/// Baseline position as a fraction of the counter's height
const BASELINE_RATIO: f32 = 0.6;

/// Operations every tally counter supports
pub trait TallyCounter {
    /// Reset the counter to zero
    fn reset(&mut self);

    /// Add one, stopping at [`MAX_COUNT`]
    fn increment(&mut self);

    /// Current count
    fn count(&self) -> i32;

    /// Set the count; values above [`MAX_COUNT`] are clamped
    fn set_count(&mut self, count: i32);
}

/// Bounded count with its display text kept in sync
///
/// Only the upper bound is enforced. Negative values passed to `set_count`
/// are stored as-is and format with a leading minus (`-5` shows `-005`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterState {
    count: i32,
    display_text: String,
    redraw_requested: bool,
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterState {
    pub fn new() -> Self {
        let mut state = Self {
            count: 0,
            display_text: String::new(),
            redraw_requested: false,
        };
        state.set_count(0);
        state
    }

    /// Zero-padded, four-digit rendering of the count
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Whether a mutation has happened since the last [`take_redraw`](Self::take_redraw)
    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    /// Consume the pending redraw request
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}

impl TallyCounter for CounterState {
    fn reset(&mut self) {
        self.set_count(0);
    }

    fn increment(&mut self) {
        self.set_count(self.count.saturating_add(1));
    }

    fn count(&self) -> i32 {
        self.count
    }

    fn set_count(&mut self, count: i32) {
        self.count = count.min(MAX_COUNT);
        self.display_text = format!("{:04}", self.count);
        self.redraw_requested = true;
    }
}

/// How a counter measures and decorates itself
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CounterVariant {
    /// Takes whatever size the parent offers
    #[default]
    Invalidated,
    /// Sizes itself to fit "9999" and draws font top/bottom guides
    Measured,
    /// Sizes itself like `Measured`, styled from attributes
    Attributed,
}

impl CounterVariant {
    pub fn measures_content(&self) -> bool {
        matches!(self, CounterVariant::Measured | CounterVariant::Attributed)
    }

    pub fn draws_guides(&self) -> bool {
        matches!(self, CounterVariant::Measured)
    }
}

/// Visual attributes of a counter
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterStyle {
    pub background_color: Color,
    pub baseline_color: Color,
    pub baseline_width: f32,
    pub text_color: Color,
    pub text_size: f32,
    pub corner_radius: f32,
    pub typeface: Typeface,
    pub padding: Insets,
}

impl CounterStyle {
    /// Stock style: primary background, accent baseline, 64sp white digits
    pub fn from_resources(resources: &Resources) -> Self {
        let metrics = resources.metrics();
        Self {
            background_color: resources.color(COLOR_PRIMARY),
            baseline_color: resources.color(COLOR_ACCENT),
            baseline_width: 1.0,
            text_color: resources.color(COLOR_WHITE),
            text_size: round_px(metrics.sp(64.0)),
            corner_radius: round_px(metrics.dp(2.0)),
            typeface: Typeface::Default,
            padding: Insets::ZERO,
        }
    }
}

impl Default for CounterStyle {
    fn default() -> Self {
        Self::from_resources(&Resources::default())
    }
}

/// Drawn tally counter widget
#[derive(Clone, Debug)]
pub struct TallyCounterView {
    variant: CounterVariant,
    state: CounterState,
    padding: Insets,
    corner_radius: f32,
    background_paint: Paint,
    line_paint: Paint,
    number_paint: TextPaint,
    /// Count up when tapped
    interactive: bool,
    measured: MeasuredSize,
    frame: Rect,
}

impl TallyCounterView {
    pub fn new(variant: CounterVariant, style: CounterStyle) -> Self {
        Self {
            variant,
            state: CounterState::new(),
            padding: style.padding,
            corner_radius: style.corner_radius,
            background_paint: Paint::fill(style.background_color),
            line_paint: Paint::stroke(style.baseline_color, style.baseline_width),
            number_paint: TextPaint::new(style.text_color, style.text_size)
                .with_typeface(style.typeface),
            interactive: false,
            measured: MeasuredSize::default(),
            frame: Rect::zero(),
        }
    }

    /// Let taps on the counter increment it
    pub fn with_interaction(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn variant(&self) -> CounterVariant {
        self.variant
    }

    pub fn display_text(&self) -> &str {
        self.state.display_text()
    }

    /// Consume the pending redraw request from the last mutation
    pub fn take_redraw(&mut self) -> bool {
        self.state.take_redraw()
    }

    /// Size needed to show the widest count with room for guides
    fn content_size(&self) -> Size {
        let max_text_width = self.number_paint.measure_text(MAX_COUNT_TEXT);
        let max_text_height = self.number_paint.font_metrics().height();
        Size::new(
            round_px(max_text_width + self.padding.horizontal()),
            round_px(max_text_height * 2.0 + self.padding.vertical()),
        )
    }
}

impl TallyCounter for TallyCounterView {
    fn reset(&mut self) {
        self.state.reset();
    }

    fn increment(&mut self) {
        self.state.increment();
    }

    fn count(&self) -> i32 {
        self.state.count()
    }

    fn set_count(&mut self, count: i32) {
        self.state.set_count(count);
    }
}

impl Widget for TallyCounterView {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> MeasuredSize {
        self.measured = if self.variant.measures_content() {
            let desired = self.content_size();
            MeasuredSize::new(width.resolve(desired.width), height.resolve(desired.height))
        } else {
            MeasuredSize::new(width.default_size(0.0), height.default_size(0.0))
        };
        self.measured
    }

    fn measured_size(&self) -> Size {
        self.measured.size
    }

    fn position(&mut self, bounds: Rect) {
        self.frame = bounds;
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let canvas_width = self.frame.width();
        let canvas_height = self.frame.height();
        let center_x = canvas_width * 0.5;

        canvas.draw_round_rect(
            self.frame.at_origin(),
            self.corner_radius,
            self.corner_radius,
            &self.background_paint,
        );

        let baseline_y = round_px(canvas_height * BASELINE_RATIO);
        canvas.draw_line(0.0, baseline_y, canvas_width, baseline_y, &self.line_paint);

        if self.variant.draws_guides() {
            let metrics = self.number_paint.font_metrics();
            let top_y = round_px(baseline_y + metrics.top);
            let bottom_y = round_px(baseline_y + metrics.bottom);
            canvas.draw_line(0.0, top_y, canvas_width, top_y, &self.line_paint);
            canvas.draw_line(0.0, bottom_y, canvas_width, bottom_y, &self.line_paint);
        }

        let text = self.state.display_text();
        let text_width = self.number_paint.measure_text(text);
        let text_x = round_px(center_x - text_width * 0.5);
        canvas.draw_text(text, text_x, baseline_y, &self.number_paint);
    }

    fn handle_click(&mut self, x: f32, y: f32) -> EventResult {
        if !self.interactive || !self.frame.at_origin().contains(x, y) {
            return EventResult::none();
        }
        self.increment();
        crate::log!("Counter tapped, count={}", self.count());
        EventResult::repaint()
    }

    fn widget_name(&self) -> &str {
        "tally_counter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::canvas::{DrawOp, RecordingCanvas};

    fn style() -> CounterStyle {
        CounterStyle {
            text_size: 20.0,
            ..CounterStyle::default()
        }
    }

    fn laid_out(variant: CounterVariant, width: f32, height: f32) -> TallyCounterView {
        let mut view = TallyCounterView::new(variant, style());
        view.measure(MeasureSpec::Exactly(width), MeasureSpec::Exactly(height));
        view.position(Rect::new(0.0, 0.0, width, height));
        view
    }

    #[test]
    fn test_new_state_shows_zeroes() {
        let state = CounterState::new();
        assert_eq!(state.count(), 0);
        assert_eq!(state.display_text(), "0000");
    }

    #[test]
    fn test_increment_clamps_at_max() {
        let mut state = CounterState::new();
        for n in 1..=10_005 {
            state.increment();
            assert_eq!(state.count(), n.min(MAX_COUNT));
            assert_eq!(state.display_text().len(), 4);
        }
        assert_eq!(state.display_text(), "9999");
    }

    #[test]
    fn test_reset() {
        let mut state = CounterState::new();
        state.set_count(42);
        state.reset();
        assert_eq!(state.count(), 0);
        assert_eq!(state.display_text(), "0000");
    }

    #[test]
    fn test_set_count_above_max() {
        let mut state = CounterState::new();
        state.set_count(10_000);
        assert_eq!(state.count(), 9999);
        assert_eq!(state.display_text(), "9999");
    }

    #[test]
    fn test_set_count_negative_is_not_clamped() {
        let mut state = CounterState::new();
        state.set_count(-5);
        assert_eq!(state.count(), -5);
        assert_eq!(state.display_text(), "-005");

        state.increment();
        assert_eq!(state.count(), -4);
    }

    #[test]
    fn test_display_text_padding() {
        let mut state = CounterState::new();
        state.set_count(7);
        assert_eq!(state.display_text(), "0007");
        state.set_count(123);
        assert_eq!(state.display_text(), "0123");
    }

    #[test]
    fn test_every_mutation_requests_redraw() {
        let mut state = CounterState::new();
        assert!(state.take_redraw());
        assert!(!state.take_redraw());

        state.increment();
        assert!(state.redraw_requested());
        state.take_redraw();

        state.reset();
        assert!(state.take_redraw());

        state.set_count(9999);
        state.increment();
        assert!(state.take_redraw());
    }

    #[test]
    fn test_invalidated_passes_constraints_through() {
        let mut view = TallyCounterView::new(CounterVariant::Invalidated, style());
        let measured = view.measure(MeasureSpec::AtMost(300.0), MeasureSpec::Exactly(120.0));
        assert_eq!(measured.size, Size::new(300.0, 120.0));

        let measured = view.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(measured.size, Size::ZERO);
    }

    #[test]
    fn test_measured_sizes_to_max_text() {
        let mut view = TallyCounterView::new(
            CounterVariant::Measured,
            CounterStyle {
                padding: Insets::new(5.0, 2.0, 5.0, 2.0),
                ..style()
            },
        );
        // "9999" at 20px: 4 * 10 wide; line height 25, doubled
        let measured = view.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(measured.size, Size::new(50.0, 54.0));

        let measured = view.measure(MeasureSpec::AtMost(30.0), MeasureSpec::Exactly(80.0));
        assert_eq!(measured.size, Size::new(30.0, 80.0));
    }

    #[test]
    fn test_draw_order_and_positions() {
        let mut view = laid_out(CounterVariant::Invalidated, 200.0, 100.0);
        view.set_count(42);

        let mut canvas = RecordingCanvas::new();
        view.draw(&mut canvas);
        let ops = canvas.ops();

        assert_eq!(ops.len(), 3);
        assert!(matches!(
            &ops[0],
            DrawOp::RoundRect { rect, radius, .. }
                if *rect == Rect::new(0.0, 0.0, 200.0, 100.0) && *radius == 2.0
        ));
        assert_eq!(canvas.line_ys(), vec![(60.0, 60.0)]);
        // "0042" is 40px wide, centered on 100
        assert!(matches!(
            &ops[2],
            DrawOp::Text { text, x, y, .. } if text == "0042" && *x == 80.0 && *y == 60.0
        ));
    }

    #[test]
    fn test_measured_variant_draws_font_guides() {
        let view = laid_out(CounterVariant::Measured, 200.0, 100.0);
        let mut canvas = RecordingCanvas::new();
        view.draw(&mut canvas);

        // baseline 60, top 60 - 20, bottom 60 + 5
        assert_eq!(
            canvas.line_ys(),
            vec![(60.0, 60.0), (40.0, 40.0), (65.0, 65.0)]
        );
    }

    #[test]
    fn test_attributed_variant_has_no_guides() {
        let view = laid_out(CounterVariant::Attributed, 200.0, 100.0);
        let mut canvas = RecordingCanvas::new();
        view.draw(&mut canvas);
        assert_eq!(canvas.line_ys().len(), 1);
    }

    #[test]
    fn test_baseline_rounds_half_up() {
        let view = laid_out(CounterVariant::Invalidated, 50.0, 45.0);
        let mut canvas = RecordingCanvas::new();
        view.draw(&mut canvas);
        // 45 * 0.6 = 27
        assert_eq!(canvas.line_ys(), vec![(27.0, 27.0)]);
    }

    #[test]
    fn test_click_only_counts_when_interactive() {
        let mut view = laid_out(CounterVariant::Attributed, 100.0, 100.0);
        assert_eq!(view.handle_click(10.0, 10.0), EventResult::none());
        assert_eq!(view.count(), 0);

        let mut view = laid_out(CounterVariant::Attributed, 100.0, 100.0).with_interaction(true);
        assert_eq!(view.handle_click(10.0, 10.0), EventResult::repaint());
        assert_eq!(view.count(), 1);
        assert_eq!(view.handle_click(150.0, 10.0), EventResult::none());
        assert_eq!(view.count(), 1);
    }

    #[test]
    fn test_style_from_resources_scales_with_density() {
        let resources = Resources::new(crate::theme::resources::DisplayMetrics {
            density: 2.0,
            scaled_density: 2.5,
        });
        let style = CounterStyle::from_resources(&resources);
        assert_eq!(style.text_size, 160.0);
        assert_eq!(style.corner_radius, 4.0);
        assert_eq!(style.baseline_width, 1.0);
    }
}
