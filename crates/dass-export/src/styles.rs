use serde::{Deserialize, Serialize};

use crate::error::ExportError;

pub const MIN_WIDTH: u32 = 320;
pub const MIN_HEIGHT: u32 = 240;
pub const MAX_WIDTH: u32 = 4096;
pub const MAX_HEIGHT: u32 = 4096;

/// Chart styling for the PNG export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Image width in pixels.
    pub width: u32,

    /// Image height in pixels.
    pub height: u32,

    /// Title drawn centred above the plot.
    pub title: String,

    /// Y-axis caption, drawn vertically left of the tick labels.
    pub y_label: String,

    /// RGB fill for the bars.
    pub bar_color: [u8; 3],

    /// RGB for axes, ticks and all text.
    pub ink_color: [u8; 3],

    /// RGB for horizontal grid lines.
    pub grid_color: [u8; 3],

    /// RGB page background.
    pub background: [u8; 3],
}

impl ChartStyle {
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.width < MIN_WIDTH || self.height < MIN_HEIGHT {
            return Err(ExportError::ChartTooSmall {
                width: self.width,
                height: self.height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }
        if self.width > MAX_WIDTH || self.height > MAX_HEIGHT {
            return Err(ExportError::ChartTooLarge {
                width: self.width,
                height: self.height,
                max_width: MAX_WIDTH,
                max_height: MAX_HEIGHT,
            });
        }
        Ok(())
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            title: "Your DASS Scale Scores".to_string(),
            y_label: "Score".to_string(),
            bar_color: [0, 0, 0],
            ink_color: [0, 0, 0],
            grid_color: [225, 225, 225],
            background: [255, 255, 255],
        }
    }
}
