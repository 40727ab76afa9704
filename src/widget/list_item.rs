//! SimpleListItem - composite row with an icon, a title and a subtitle
//!
//! Lays out its three children in a single measure pass and a single position
//! pass, with no nested relative-layout rounds:
//!
//! ```text
//! +------+---------------+
//! | icon | title         |
//! |      | subtitle      |
//! +------+---------------+
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Insets, Rect, Size};

use super::base::{LayoutBox, LayoutParams, MeasureSpec, MeasuredSize};
use super::canvas::Canvas;
use super::image_view::ImageView;
use super::text_view::TextView;
use super::{draw_child, Widget};

/// Which padding edges count toward the row's desired width
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidthPadding {
    /// top + bottom, as the row has always computed it
    #[default]
    Vertical,
    /// left + right
    Horizontal,
}

/// A child widget together with its layout params and last layout result
#[derive(Clone, Debug)]
pub struct Slot<W> {
    widget: W,
    params: LayoutParams,
    layout: LayoutBox,
}

impl<W: Widget> Slot<W> {
    pub fn new(widget: W, params: LayoutParams) -> Self {
        Self {
            widget,
            params,
            layout: LayoutBox {
                margins: params.margins,
                ..Default::default()
            },
        }
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn layout_box(&self) -> &LayoutBox {
        &self.layout
    }

    fn margins(&self) -> &Insets {
        &self.params.margins
    }

    fn measured(&self) -> Size {
        self.layout.measured
    }

    fn set_frame(&mut self, x: f32, y: f32) {
        let frame = Rect::from_pos_size(x, y, self.layout.measured);
        self.widget.position(frame);
        self.layout.frame = frame;
    }
}

/// Row widget with icon, title and subtitle slots bound at construction
#[derive(Clone, Debug)]
pub struct SimpleListItem<I = ImageView, T = TextView> {
    icon: Slot<I>,
    title: Slot<T>,
    subtitle: Slot<T>,
    padding: Insets,
    width_padding: WidthPadding,
    measured: MeasuredSize,
    frame: Rect,
}

impl<I: Widget, T: Widget> SimpleListItem<I, T> {
    /// Create a row from its three children, each wrapping its content with
    /// no margins
    pub fn new(icon: I, title: T, subtitle: T) -> Self {
        Self::with_params(
            Slot::new(icon, LayoutParams::default()),
            Slot::new(title, LayoutParams::default()),
            Slot::new(subtitle, LayoutParams::default()),
        )
    }

    /// Create a row from fully specified slots
    pub fn with_params(icon: Slot<I>, title: Slot<T>, subtitle: Slot<T>) -> Self {
        Self {
            icon,
            title,
            subtitle,
            padding: Insets::ZERO,
            width_padding: WidthPadding::default(),
            measured: MeasuredSize::default(),
            frame: Rect::zero(),
        }
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_width_padding(mut self, width_padding: WidthPadding) -> Self {
        self.width_padding = width_padding;
        self
    }

    pub fn icon(&self) -> &Slot<I> {
        &self.icon
    }

    pub fn title(&self) -> &Slot<T> {
        &self.title
    }

    pub fn subtitle(&self) -> &Slot<T> {
        &self.subtitle
    }

    pub fn icon_mut(&mut self) -> &mut Slot<I> {
        &mut self.icon
    }

    pub fn title_mut(&mut self) -> &mut Slot<T> {
        &mut self.title
    }

    pub fn subtitle_mut(&mut self) -> &mut Slot<T> {
        &mut self.subtitle
    }

    /// Measure a child, accounting for this row's padding, the child's
    /// margins and space already used by earlier siblings
    fn measure_child_with_margins<W: Widget>(
        slot: &mut Slot<W>,
        padding: &Insets,
        width_spec: MeasureSpec,
        width_used: f32,
        height_spec: MeasureSpec,
        height_used: f32,
    ) {
        let margins = *slot.margins();
        let child_width = width_spec.for_child(
            padding.horizontal() + margins.horizontal() + width_used,
            slot.params.width,
        );
        let child_height = height_spec.for_child(
            padding.vertical() + margins.vertical() + height_used,
            slot.params.height,
        );

        let measured = slot.widget.measure(child_width, child_height);
        slot.layout = LayoutBox {
            frame: slot.layout.frame,
            margins,
            measured: measured.size,
        };
    }

    fn width_padding_sum(&self) -> f32 {
        match self.width_padding {
            WidthPadding::Vertical => self.padding.vertical(),
            WidthPadding::Horizontal => self.padding.horizontal(),
        }
    }
}

impl<I: Widget, T: Widget> Widget for SimpleListItem<I, T> {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> MeasuredSize {
        let padding = self.padding;

        // Icon first, against the full constraints.
        Self::measure_child_with_margins(&mut self.icon, &padding, width, 0.0, height, 0.0);

        let width_used = self.icon.measured().width + self.icon.margins().horizontal();

        Self::measure_child_with_margins(&mut self.title, &padding, width, width_used, height, 0.0);

        // Subtitle sits below the title, so the title's height is spent.
        let title_height = self.title.measured().height;
        Self::measure_child_with_margins(
            &mut self.subtitle,
            &padding,
            width,
            width_used,
            height,
            title_height,
        );

        let icon = self.icon.layout.footprint();
        let title = self.title.layout.footprint();
        let subtitle = self.subtitle.layout.footprint();

        let desired_width = self.width_padding_sum() + icon.width + title.width.max(subtitle.width);
        let desired_height =
            padding.vertical() + icon.height.max(title.height + subtitle.height);

        self.measured = MeasuredSize::new(width.resolve(desired_width), height.resolve(desired_height));

        crate::log!(
            "SimpleListItem measured {}x{} (desired {}x{})",
            self.measured.width(),
            self.measured.height(),
            desired_width,
            desired_height
        );

        self.measured
    }

    fn measured_size(&self) -> Size {
        self.measured.size
    }

    fn position(&mut self, bounds: Rect) {
        self.frame = bounds;

        let icon_margins = *self.icon.margins();
        let mut x = self.padding.left + icon_margins.left;
        let mut y = self.padding.top + icon_margins.top;
        self.icon.set_frame(x, y);

        // Title starts right of the icon's right edge and margin.
        x += self.icon.measured().width + icon_margins.right;
        let title_margins = *self.title.margins();
        x += title_margins.left;
        y = self.padding.top + title_margins.top;
        self.title.set_frame(x, y);

        // Subtitle shares the title's x.
        y += self.title.measured().height + title_margins.bottom;
        y += self.subtitle.margins().top;
        self.subtitle.set_frame(x, y);
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        draw_child(&self.icon.widget, canvas);
        draw_child(&self.title.widget, canvas);
        draw_child(&self.subtitle.widget, canvas);
    }

    fn widget_name(&self) -> &str {
        "simple_list_item"
    }
}
