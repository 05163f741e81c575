//! Bar chart geometry.
//!
//! Pure layout: where the plot area, ticks and bars go for a given image
//! size. Rasterizing is left to [`crate::png`].

use crate::styles::ChartStyle;
use crate::table::ResultRow;

const MARGIN_LEFT: u32 = 80;
const MARGIN_RIGHT: u32 = 30;
const MARGIN_TOP: u32 = 60;
const MARGIN_BOTTOM: u32 = 60;

/// Fraction of each category slot the bar fills, in percent.
const BAR_FILL_PERCENT: u32 = 60;

/// The y-axis never shows less than this range, so an all-zero result still
/// has a readable scale.
const MIN_AXIS_MAX: u32 = 10;

const MAX_TICKS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> u32 {
        self.x + self.width / 2
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub value: u32,
    /// Pixel row of the tick on the y-axis.
    pub y: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub label: String,
    pub value: u32,
    pub rect: Rect,
    /// Category slot the bar is centred in; the label goes under it.
    pub slot: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLayout {
    pub plot: Rect,
    pub axis_max: u32,
    pub ticks: Vec<Tick>,
    pub bars: Vec<Bar>,
}

impl ChartLayout {
    pub fn compute(rows: &[ResultRow], style: &ChartStyle) -> Self {
        let plot = Rect {
            x: MARGIN_LEFT,
            y: MARGIN_TOP,
            width: style.width.saturating_sub(MARGIN_LEFT + MARGIN_RIGHT),
            height: style.height.saturating_sub(MARGIN_TOP + MARGIN_BOTTOM),
        };

        let highest = rows.iter().map(|r| r.score).max().unwrap_or(0);
        let (axis_max, step) = y_axis(highest);

        let ticks = (0..=axis_max / step)
            .map(|i| {
                let value = i * step;
                Tick {
                    value,
                    y: value_to_y(&plot, axis_max, value),
                }
            })
            .collect();

        let slot_width = plot.width / (rows.len().max(1) as u32);
        let bar_width = slot_width * BAR_FILL_PERCENT / 100;

        let bars = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let slot = Rect {
                    x: plot.x + slot_width * i as u32,
                    y: plot.y,
                    width: slot_width,
                    height: plot.height,
                };
                let top = value_to_y(&plot, axis_max, row.score);
                Bar {
                    label: row.scale.to_string(),
                    value: row.score,
                    rect: Rect {
                        x: slot.x + (slot_width - bar_width) / 2,
                        y: top,
                        width: bar_width,
                        height: plot.bottom() - top,
                    },
                    slot,
                }
            })
            .collect();

        Self {
            plot,
            axis_max,
            ticks,
            bars,
        }
    }
}

/// Pick a round axis maximum and tick step covering `highest`.
pub fn y_axis(highest: u32) -> (u32, u32) {
    let highest = highest.max(MIN_AXIS_MAX);
    let step = [1, 2, 5, 10, 20, 25, 50, 100, 250, 500, 1000]
        .into_iter()
        .find(|step| highest.div_ceil(*step) <= MAX_TICKS)
        .unwrap_or_else(|| highest.div_ceil(MAX_TICKS));
    (highest.div_ceil(step) * step, step)
}

fn value_to_y(plot: &Rect, axis_max: u32, value: u32) -> u32 {
    let value = value.min(axis_max);
    let offset = u64::from(value) * u64::from(plot.height) / u64::from(axis_max.max(1));
    plot.bottom() - offset as u32
}
