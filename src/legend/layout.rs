use smallvec::SmallVec;

use crate::legend::{LegendEntry, LegendHandle};

// Paddings in units of the legend font size.
pub const BORDER_PAD_EM: f64 = 0.4;
pub const LABEL_SPACING_EM: f64 = 0.5;
pub const HANDLE_LENGTH_EM: f64 = 2.0;
pub const HANDLE_TEXT_PAD_EM: f64 = 0.8;
pub const COLUMN_SPACING_EM: f64 = 2.0;

#[must_use]
pub fn points_to_px(points: f64, dpi: f64) -> f64 {
    points * dpi / 72.0
}

/// Backend-independent glyph-width estimate.
#[must_use]
pub fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' | ':' | ';' | '\'' => 0.34,
            'i' | 'j' | 'l' | 'I' | '|' => 0.30,
            '-' | '+' | '%' => 0.42,
            'm' | 'w' | 'M' | 'W' => 0.86,
            ' ' => 0.33,
            ch if ch.is_uppercase() => 0.68,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px * 0.5)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTitle {
    pub text: String,
    pub font_px: f64,
    /// Horizontal center, relative to the legend's left edge.
    pub center_x: f64,
    /// Distance from the legend's top edge.
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedEntry {
    pub label: String,
    pub handle: LegendHandle,
    pub handle_x: f64,
    pub handle_width: f64,
    pub row_top: f64,
    pub row_height: f64,
    pub text_x: f64,
}

/// Size and inner arrangement of one legend box, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendLayout {
    pub width: f64,
    pub height: f64,
    pub font_px: f64,
    pub title: Option<PlacedTitle>,
    pub entries: Vec<PlacedEntry>,
}

/// Lays entries out column-major over `ncol` columns, title on top.
#[must_use]
pub fn layout_legend(
    entries: &[LegendEntry],
    ncol: usize,
    font_px: f64,
    title: Option<(&str, f64)>,
) -> LegendLayout {
    let pad = BORDER_PAD_EM * font_px;
    let label_spacing = LABEL_SPACING_EM * font_px;
    let handle_width = HANDLE_LENGTH_EM * font_px;
    let handle_text_pad = HANDLE_TEXT_PAD_EM * font_px;
    let column_spacing = COLUMN_SPACING_EM * font_px;

    let count = entries.len();
    let ncol = ncol.max(1).min(count.max(1));
    let rows = count.div_ceil(ncol);

    let mut column_widths: SmallVec<[f64; 8]> = SmallVec::with_capacity(ncol);
    for column in entries.chunks(rows.max(1)) {
        let widest = column
            .iter()
            .map(|entry| {
                handle_width + handle_text_pad + estimate_text_width_px(&entry.label, font_px)
            })
            .fold(0.0, f64::max);
        column_widths.push(widest);
    }

    let content_width = if column_widths.is_empty() {
        0.0
    } else {
        column_widths.iter().sum::<f64>() + (column_widths.len() - 1) as f64 * column_spacing
    };
    let content_height = if rows == 0 {
        0.0
    } else {
        rows as f64 * font_px + (rows - 1) as f64 * label_spacing
    };

    let (title_width, title_block) = match title {
        Some((text, title_px)) if !text.is_empty() => {
            let gap = if count > 0 { label_spacing } else { 0.0 };
            (estimate_text_width_px(text, title_px), title_px + gap)
        }
        _ => (0.0, 0.0),
    };

    let width = content_width.max(title_width) + 2.0 * pad;
    let height = content_height + title_block + 2.0 * pad;

    let placed_title = match title {
        Some((text, title_px)) if !text.is_empty() => Some(PlacedTitle {
            text: text.to_owned(),
            font_px: title_px,
            center_x: width / 2.0,
            top: pad,
        }),
        _ => None,
    };

    let mut placed = Vec::with_capacity(count);
    let mut column_x = pad;
    for (column_index, column) in entries.chunks(rows.max(1)).enumerate() {
        for (row_index, entry) in column.iter().enumerate() {
            placed.push(PlacedEntry {
                label: entry.label.clone(),
                handle: entry.handle,
                handle_x: column_x,
                handle_width,
                row_top: pad + title_block + row_index as f64 * (font_px + label_spacing),
                row_height: font_px,
                text_x: column_x + handle_width + handle_text_pad,
            });
        }
        column_x += column_widths[column_index] + column_spacing;
    }

    LegendLayout {
        width,
        height,
        font_px,
        title: placed_title,
        entries: placed,
    }
}
