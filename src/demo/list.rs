//! List of composite rows backed by the demo catalog
//!
//! Rows are created once and rebound to a catalog position on every layout,
//! the way a recycling list reuses its row views.

use crate::domain::value_objects::{Rect, Size};
use crate::shared::config::ListItemConfig;
use crate::theme::resources::{Resources, COLOR_WHITE};
use crate::widget::base::{LayoutParams, MeasureSpec};
use crate::widget::canvas::{Canvas, RecordingCanvas};
use crate::widget::image_view::ImageView;
use crate::widget::list_item::{SimpleListItem, Slot};
use crate::widget::text::TextPaint;
use crate::widget::text_view::TextView;
use crate::widget::{draw_child, Widget};

use super::catalog::ListCatalog;

/// Concrete row type shown in the list
pub type ListRow = SimpleListItem<ImageView, TextView>;

/// Creates rows and binds catalog items into them
#[derive(Clone, Debug)]
pub struct ListItemAdapter {
    catalog: ListCatalog,
    config: ListItemConfig,
    title_paint: TextPaint,
    subtitle_paint: TextPaint,
}

impl ListItemAdapter {
    pub fn new(catalog: ListCatalog, config: ListItemConfig, resources: &Resources) -> Self {
        let text_color = resources.color(COLOR_WHITE);
        let title_paint = TextPaint::new(text_color, config.title_text_size);
        let subtitle_paint = TextPaint::new(text_color, config.subtitle_text_size);
        Self {
            catalog,
            config,
            title_paint,
            subtitle_paint,
        }
    }

    pub fn item_count(&self) -> usize {
        self.catalog.len()
    }

    /// Build an empty row with the configured margins and padding
    pub fn create_row(&self) -> ListRow {
        let icon = Slot::new(
            ImageView::new("", self.config.icon_size),
            LayoutParams::with_margins(self.config.icon_margins),
        );
        let title = Slot::new(
            TextView::new("", self.title_paint),
            LayoutParams::with_margins(self.config.title_margins),
        );
        let subtitle = Slot::new(
            TextView::new("", self.subtitle_paint),
            LayoutParams::with_margins(self.config.subtitle_margins),
        );

        SimpleListItem::with_params(icon, title, subtitle)
            .with_padding(self.config.padding)
            .with_width_padding(self.config.width_padding)
    }

    /// Point a row's slots at the item for `position`
    pub fn bind_row(&self, row: &mut ListRow, position: isize) {
        let item = self.catalog.item(position);
        row.icon_mut().widget_mut().set_image(item.icon.as_str());
        row.title_mut().widget_mut().set_text(item.title.as_str());
        row.subtitle_mut().widget_mut().set_text(item.description.as_str());
    }
}

/// Vertically stacked list of rows, one per catalog item
#[derive(Clone, Debug)]
pub struct ListScreen {
    adapter: ListItemAdapter,
    rows: Vec<ListRow>,
}

impl ListScreen {
    pub fn new(adapter: ListItemAdapter) -> Self {
        Self {
            adapter,
            rows: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    /// Bind, measure and stack every row at the given width
    ///
    /// Returns the total content size.
    pub fn layout(&mut self, width: f32) -> Size {
        let count = self.adapter.item_count();
        while self.rows.len() < count {
            self.rows.push(self.adapter.create_row());
        }
        self.rows.truncate(count);

        let mut top = 0.0;
        for (position, row) in self.rows.iter_mut().enumerate() {
            self.adapter.bind_row(row, position as isize);
            let measured = row.measure(MeasureSpec::Exactly(width), MeasureSpec::Unspecified);
            row.position(Rect::from_pos_size(0.0, top, measured.size));
            top += measured.height();
        }

        crate::log!("ListScreen laid out {} rows, height {}", count, top);
        Size::new(width, top)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for row in &self.rows {
            draw_child(row, canvas);
        }
    }

    /// Lay out at `width` and record the drawing
    pub fn render(&mut self, width: f32) -> RecordingCanvas {
        self.layout(width);
        let mut canvas = RecordingCanvas::new();
        self.draw(&mut canvas);
        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Insets;
    use crate::widget::canvas::DrawOp;

    fn plain_config() -> ListItemConfig {
        ListItemConfig {
            padding: Insets::ZERO,
            icon_size: 40.0,
            icon_margins: Insets::ZERO,
            title_margins: Insets::ZERO,
            subtitle_margins: Insets::ZERO,
            title_text_size: 16.0,
            subtitle_text_size: 16.0,
            ..Default::default()
        }
    }

    fn screen(config: ListItemConfig) -> ListScreen {
        ListScreen::new(ListItemAdapter::new(
            ListCatalog::demo(),
            config,
            &Resources::default(),
        ))
    }

    #[test]
    fn test_bind_row_sets_all_slots() {
        let adapter = ListItemAdapter::new(ListCatalog::demo(), plain_config(), &Resources::default());
        let mut row = adapter.create_row();
        adapter.bind_row(&mut row, 2);

        assert_eq!(row.icon().widget().resource(), "ic_spa_white_48dp");
        assert_eq!(row.title().widget().text(), "Spa");
        assert_eq!(row.subtitle().widget().text(), "Relax and unwind");

        // Rebinding the same row replaces every slot
        adapter.bind_row(&mut row, 0);
        assert_eq!(row.title().widget().text(), "Bubble Chart");
    }

    #[test]
    fn test_bind_out_of_range_shows_first_item() {
        let adapter = ListItemAdapter::new(ListCatalog::demo(), plain_config(), &Resources::default());
        let mut row = adapter.create_row();
        adapter.bind_row(&mut row, 99);
        assert_eq!(row.title().widget().text(), "Bubble Chart");
    }

    #[test]
    fn test_rows_stack_vertically() {
        let mut screen = screen(plain_config());
        let size = screen.layout(320.0);

        // Icon 40 tall equals two 20px text lines, so every row is 40 tall
        assert_eq!(size, Size::new(320.0, 160.0));
        let tops: Vec<f32> = screen.rows().iter().map(|row| row.frame().top).collect();
        assert_eq!(tops, vec![0.0, 40.0, 80.0, 120.0]);
        assert!(screen.rows().iter().all(|row| row.frame().width() == 320.0));
    }

    #[test]
    fn test_relayout_reuses_rows() {
        let mut screen = screen(plain_config());
        screen.layout(320.0);
        let first = screen.rows()[1].title().layout_box().frame;
        screen.layout(320.0);
        assert_eq!(screen.rows().len(), 4);
        assert_eq!(screen.rows()[1].title().layout_box().frame, first);
    }

    #[test]
    fn test_render_offsets_rows() {
        let mut screen = screen(plain_config());
        let canvas = screen.render(320.0);

        let images: Vec<Rect> = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Image { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(images.len(), 4);
        assert_eq!(images[1], Rect::new(0.0, 40.0, 40.0, 80.0));
    }
}
