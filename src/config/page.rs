use serde::{Deserialize, Serialize};

/// Fixed single-page layout, in PDF user-space units (1/72 inch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    pub width: u32,
    pub height: u32,
    /// One of the standard Type1 fonts; nothing is embedded.
    pub base_font: String,
    pub font_size: u32,
    /// Baseline of the first line.
    pub origin_x: u32,
    pub origin_y: u32,
    /// Distance between baselines, applied by `T*`.
    pub leading: u32,
}

impl PageGeometry {
    /// A4 portrait, 12pt Helvetica, 14pt leading.
    pub fn a4() -> Self {
        Self {
            width: 595,
            height: 842,
            base_font: "Helvetica".into(),
            font_size: 12,
            origin_x: 50,
            origin_y: 790,
            leading: 14,
        }
    }

    /// How many lines fit between the first baseline and the bottom edge.
    /// Content beyond this is still written; it just falls off the page.
    pub fn visible_lines(&self) -> usize {
        if self.leading == 0 {
            return usize::MAX;
        }
        (self.origin_y / self.leading) as usize + 1
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}
