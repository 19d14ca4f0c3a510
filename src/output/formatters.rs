//! Formatting utilities for terminal output

use crate::core::{GridShape, Letter};

/// Character shown for a cell
#[must_use]
pub fn cell_label(cell: Option<Letter>) -> char {
    cell.map_or('·', Letter::as_upper)
}

/// Format a cell path as `(row,col)` steps
///
/// # Panics
/// Panics if a cell index is outside `shape`
#[must_use]
pub fn format_path(shape: GridShape, cells: &[usize]) -> String {
    cells
        .iter()
        .map(|&cell| {
            let (row, col) = shape.coordinates(cell);
            format!("({row},{col})")
        })
        .collect::<Vec<_>>()
        .join("→")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_labels() {
        assert_eq!(cell_label(Some(Letter::new('q').unwrap())), 'Q');
        assert_eq!(cell_label(None), '·');
    }

    #[test]
    fn path_uses_row_and_column() {
        let shape = GridShape::new(5, 5).unwrap();
        assert_eq!(format_path(shape, &[0, 6, 12]), "(0,0)→(1,1)→(2,2)");
        assert_eq!(format_path(shape, &[]), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
