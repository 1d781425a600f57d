//! Skills accordion on the home page.

use folio_protocol::AccordionState;

/// Margin kept below a freshly opened row when the page scrolls to show it.
const OVERFLOW_MARGIN: f64 = 40.0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    rows: usize,
    open: Option<usize>,
}

impl Accordion {
    /// `open` is the row the markup ships expanded, if any.
    pub fn new(rows: usize, open: Option<usize>) -> Self {
        Self {
            rows,
            open: open.filter(|&i| i < rows),
        }
    }

    /// Clicking the open row closes it; clicking any other row opens that
    /// one and closes the rest. Unknown rows leave the state alone.
    pub fn toggle(&mut self, row: usize) -> AccordionState {
        if row < self.rows {
            self.open = if self.open == Some(row) { None } else { Some(row) };
        }
        self.state()
    }

    pub fn state(&self) -> AccordionState {
        AccordionState {
            open: self.open,
            has_active: self.open.is_some(),
        }
    }
}

/// Scroll needed so an expanded row's bottom edge clears the viewport.
/// `None` when the row already fits.
pub fn overflow_scroll(row_bottom: f64, viewport_height: f64) -> Option<f64> {
    if row_bottom > viewport_height {
        Some(row_bottom - viewport_height + OVERFLOW_MARGIN)
    } else {
        None
    }
}
