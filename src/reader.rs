//! Reader Pagination
//!
//! Splits a book's text into pages and walks them with clamped next/prev.

/// Outcome of a forward page turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTurn {
    Advanced,
    /// Already on the last page; index unchanged, caller offers exit
    EndReached,
}

/// Zero-based cursor over a fixed page count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    index: usize,
    total: usize,
}

impl Paginator {
    /// A paginator always covers at least one page
    pub fn new(total_pages: usize) -> Self {
        Self {
            index: 0,
            total: total_pages.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_last_page(&self) -> bool {
        self.index + 1 == self.total
    }

    pub fn next(&mut self) -> PageTurn {
        if self.index + 1 < self.total {
            self.index += 1;
            PageTurn::Advanced
        } else {
            PageTurn::EndReached
        }
    }

    /// Decrement floored at 0
    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// (index + 1) / total, rounded to the nearest percent
    pub fn progress_percent(&self) -> u32 {
        (((self.index + 1) * 100 + self.total / 2) / self.total) as u32
    }
}

/// Split book text into pages on blank lines, dropping empty chunks
pub fn paginate(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|page| !page.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_to_the_last_page_then_signals_end() {
        let n = 4;
        let mut pager = Paginator::new(n);
        for expected in 1..n {
            assert_eq!(pager.next(), PageTurn::Advanced);
            assert_eq!(pager.index(), expected);
        }
        assert_eq!(pager.index(), n - 1);
        // One more turn stays put and reports end-of-book
        assert_eq!(pager.next(), PageTurn::EndReached);
        assert_eq!(pager.index(), n - 1);
    }

    #[test]
    fn prev_floors_at_zero() {
        let mut pager = Paginator::new(3);
        pager.prev();
        assert_eq!(pager.index(), 0);

        pager.next();
        pager.next();
        pager.prev();
        assert_eq!(pager.index(), 1);
    }

    #[test]
    fn single_page_book_is_immediately_at_the_end() {
        let mut pager = Paginator::new(1);
        assert!(pager.is_last_page());
        assert_eq!(pager.next(), PageTurn::EndReached);
        assert_eq!(pager.progress_percent(), 100);
    }

    #[test]
    fn zero_pages_clamps_to_one() {
        let pager = Paginator::new(0);
        assert_eq!(pager.total(), 1);
        assert_eq!(pager.progress_percent(), 100);
    }

    #[test]
    fn progress_rounds_to_nearest_percent() {
        let mut pager = Paginator::new(3);
        assert_eq!(pager.progress_percent(), 33); // 33.33..
        pager.next();
        assert_eq!(pager.progress_percent(), 67); // 66.66..
        pager.next();
        assert_eq!(pager.progress_percent(), 100);

        let mut pager = Paginator::new(8);
        assert_eq!(pager.progress_percent(), 13); // 12.5 rounds up
        pager.next();
        assert_eq!(pager.progress_percent(), 25);
    }

    #[test]
    fn paginate_splits_on_blank_lines() {
        let text = "Once upon a time.\n\nThe middle part.\n\n\n\nThe end.";
        let pages = paginate(text);
        assert_eq!(
            pages,
            vec!["Once upon a time.", "The middle part.", "The end."]
        );
    }

    #[test]
    fn paginate_trims_and_skips_whitespace_pages() {
        let pages = paginate("  first  \n\n   \n\nsecond");
        assert_eq!(pages, vec!["first", "second"]);
    }
}
