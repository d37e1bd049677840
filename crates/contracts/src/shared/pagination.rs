use serde::{Deserialize, Serialize};

/// One page of an in-memory list. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl PageWindow {
    /// `total_pages` is never below 1 and `page` is clamped into range.
    pub fn new(requested_page: usize, page_size: usize, total_items: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_items.div_ceil(page_size).max(1);
        let page = requested_page.clamp(1, total_pages);
        Self {
            page,
            page_size,
            total_items,
            total_pages,
        }
    }

    pub fn start(&self) -> usize {
        ((self.page - 1) * self.page_size).min(self.total_items)
    }

    pub fn end(&self) -> usize {
        (self.start() + self.page_size).min(self.total_items)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// "Showing 13-24 of 30"
    pub fn summary(&self) -> String {
        if self.total_items == 0 {
            return "Showing 0 of 0".to_string();
        }
        format!("Showing {}-{} of {}", self.start() + 1, self.end(), self.total_items)
    }
}

pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> (Vec<T>, PageWindow) {
    let window = PageWindow::new(page, page_size, items.len());
    (items[window.start()..window.end()].to_vec(), window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_one_page() {
        let (rows, w) = paginate::<u32>(&[], 3, 12);
        assert!(rows.is_empty());
        assert_eq!(w.total_pages, 1);
        assert_eq!(w.page, 1);
        assert_eq!(w.summary(), "Showing 0 of 0");
    }

    #[test]
    fn test_page_is_clamped() {
        let items: Vec<u32> = (1..=30).collect();
        let (rows, w) = paginate(&items, 9, 12);
        assert_eq!(w.total_pages, 3);
        assert_eq!(w.page, 3);
        assert_eq!(rows, (25..=30).collect::<Vec<_>>());
        assert!(!w.has_next());
        assert!(w.has_prev());

        let (rows, w) = paginate(&items, 0, 12);
        assert_eq!(w.page, 1);
        assert_eq!(rows.len(), 12);
        assert_eq!(w.summary(), "Showing 1-12 of 30");
    }
}
