//! Two pagination styles used by the list screens.
//!
//! [`OffsetPager`] accumulates server pages behind a "load more" action.
//! [`PageIndex`] pages through rows already in memory.

/// Server-side offset paging with accumulated rows.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetPager<T> {
    limit: u32,
    skip: u32,
    total: u64,
    last_page_len: usize,
    items: Vec<T>,
}

impl<T> OffsetPager<T> {
    pub fn new(limit: u32) -> Self {
        Self {
            limit: limit.max(1),
            skip: 0,
            total: 0,
            last_page_len: 0,
            items: Vec::new(),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Offset of the most recently applied page.
    pub fn skip(&self) -> u32 {
        self.skip
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn has_more(&self) -> bool {
        (self.last_page_len as u64) + u64::from(self.skip) < self.total
    }

    /// Offset to request for "load more", if anything is left.
    pub fn next_skip(&self) -> Option<u32> {
        self.has_more().then(|| self.skip + self.limit)
    }

    /// Folds a fetched page in.
    ///
    /// `skip == 0` replaces the rows. A page past the end of what has been
    /// accumulated is out of order and is dropped; returns whether it applied.
    pub fn apply_page(&mut self, skip: u32, page: Vec<T>, total: u64) -> bool {
        if skip as usize > self.items.len() {
            return false;
        }
        self.items.truncate(skip as usize);
        self.last_page_len = page.len();
        self.items.extend(page);
        self.skip = skip;
        self.total = total;
        true
    }

    /// Back to the first page.
    pub fn reset(&mut self) {
        self.skip = 0;
        self.total = 0;
        self.last_page_len = 0;
        self.items.clear();
    }
}

/// Client-side paging over an in-memory row list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndex {
    page: usize,
    page_size: usize,
}

impl PageIndex {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Zero-based current page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn next(&mut self, len: usize) {
        if self.page + 1 < self.page_count(len) {
            self.page += 1;
        }
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Pulls the page back in range after the row count shrank.
    pub fn clamp(&mut self, len: usize) {
        self.page = self.page.min(self.page_count(len).saturating_sub(1));
    }
}
