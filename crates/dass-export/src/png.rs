use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use crate::chart::{ChartLayout, Rect};
use crate::error::ExportError;
use crate::font;
use crate::styles::ChartStyle;
use crate::table::ResultRow;

pub const CONTENT_TYPE: &str = "image/png";

const TITLE_SCALE: u32 = 2;
const LABEL_SCALE: u32 = 2;
const TICK_SCALE: u32 = 1;
const TICK_LENGTH: u32 = 5;

/// Render the results as a bar chart and encode it as PNG.
pub fn generate_chart_png(rows: &[ResultRow], style: &ChartStyle) -> Result<Vec<u8>, ExportError> {
    let img = draw_chart(rows, style)?;

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;

    tracing::debug!(
        width = style.width,
        height = style.height,
        bytes = buf.get_ref().len(),
        "chart encoded"
    );
    Ok(buf.into_inner())
}

/// Rasterize the chart without encoding it.
pub fn draw_chart(rows: &[ResultRow], style: &ChartStyle) -> Result<RgbImage, ExportError> {
    style.validate()?;

    let layout = ChartLayout::compute(rows, style);
    let ink = Rgb(style.ink_color);
    let mut canvas = Canvas {
        img: RgbImage::from_pixel(style.width, style.height, Rgb(style.background)),
    };

    let plot = layout.plot;

    // Grid and tick labels first so bars paint over them.
    for tick in &layout.ticks {
        if tick.y != plot.bottom() {
            canvas.hline(plot.x, plot.right(), tick.y, Rgb(style.grid_color));
        }
        canvas.hline(plot.x - TICK_LENGTH, plot.x, tick.y, ink);

        let label = tick.value.to_string();
        let width = font::text_width(&label, TICK_SCALE);
        let x = plot.x.saturating_sub(TICK_LENGTH + 4 + width);
        let y = tick.y.saturating_sub(font::GLYPH_HEIGHT * TICK_SCALE / 2);
        canvas.text(&label, x, y, TICK_SCALE, ink);
    }

    for bar in &layout.bars {
        canvas.fill(bar.rect, Rgb(style.bar_color));

        let value = bar.value.to_string();
        let value_x = bar
            .rect
            .center_x()
            .saturating_sub(font::text_width(&value, LABEL_SCALE) / 2);
        let value_y = bar
            .rect
            .y
            .saturating_sub(font::GLYPH_HEIGHT * LABEL_SCALE + 6);
        canvas.text(&value, value_x, value_y, LABEL_SCALE, ink);

        let label_x = bar
            .slot
            .center_x()
            .saturating_sub(font::text_width(&bar.label, LABEL_SCALE) / 2);
        canvas.text(&bar.label, label_x, plot.bottom() + 14, LABEL_SCALE, ink);
    }

    // Axes.
    canvas.hline(plot.x, plot.right(), plot.bottom(), ink);
    canvas.vline(plot.x, plot.y, plot.bottom(), ink);

    let title_x = (style.width / 2).saturating_sub(font::text_width(&style.title, TITLE_SCALE) / 2);
    canvas.text(&style.title, title_x, 20, TITLE_SCALE, ink);

    let label_len = font::text_width(&style.y_label, LABEL_SCALE);
    let label_y = (plot.y + plot.height / 2 + label_len / 2).min(style.height.saturating_sub(1));
    canvas.text_vertical(&style.y_label, 16, label_y, LABEL_SCALE, ink);

    Ok(canvas.img)
}

struct Canvas {
    img: RgbImage,
}

impl Canvas {
    fn put(&mut self, x: u32, y: u32, color: Rgb<u8>) {
        if x < self.img.width() && y < self.img.height() {
            self.img.put_pixel(x, y, color);
        }
    }

    fn fill(&mut self, rect: Rect, color: Rgb<u8>) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.put(x, y, color);
            }
        }
    }

    fn hline(&mut self, x0: u32, x1: u32, y: u32, color: Rgb<u8>) {
        for x in x0..=x1 {
            self.put(x, y, color);
        }
    }

    fn vline(&mut self, x: u32, y0: u32, y1: u32, color: Rgb<u8>) {
        for y in y0..=y1 {
            self.put(x, y, color);
        }
    }

    fn text(&mut self, text: &str, x: u32, y: u32, scale: u32, color: Rgb<u8>) {
        for (dx, dy) in font::pixels(text, scale) {
            self.put(x + dx, y + dy, color);
        }
    }

    /// Text rotated a quarter turn counter-clockwise, reading bottom to top.
    /// `(x, y)` is the bottom-left corner of the rotated run.
    fn text_vertical(&mut self, text: &str, x: u32, y: u32, scale: u32, color: Rgb<u8>) {
        for (dx, dy) in font::pixels(text, scale) {
            if let Some(py) = y.checked_sub(dx) {
                self.put(x + dy, py, color);
            }
        }
    }
}
