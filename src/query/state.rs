//! Per-read request status and the list views derived from it.

/// Lifecycle of one read: `Idle → Loading → Success | Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryStatus<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for QueryStatus<T> {
    fn default() -> Self {
        QueryStatus::Idle
    }
}

impl<T> QueryStatus<T> {
    /// Status once a fetch is issued.
    ///
    /// Successful data stays visible during a refresh; anything else shows
    /// the loading state.
    pub fn begin(self) -> Self {
        match self {
            QueryStatus::Success(data) => QueryStatus::Success(data),
            _ => QueryStatus::Loading,
        }
    }

    /// Status once the fetch settles. An error replaces previous data.
    pub fn settle(result: Result<T, String>) -> Self {
        match result {
            Ok(data) => QueryStatus::Success(data),
            Err(message) => QueryStatus::Error(message),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryStatus::Idle | QueryStatus::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryStatus::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Derives what a list page should render.
    pub fn list_view<'a, I>(&'a self, rows: impl FnOnce(&'a T) -> &'a [I]) -> ListView<'a, I> {
        match self {
            QueryStatus::Idle | QueryStatus::Loading => ListView::Loading,
            QueryStatus::Error(message) => ListView::Error(message),
            QueryStatus::Success(data) => {
                let rows = rows(data);
                if rows.is_empty() {
                    ListView::Empty
                } else {
                    ListView::Rows(rows)
                }
            }
        }
    }

    /// List view over rows accumulated by a Load-More pager.
    ///
    /// A failed first page wins over whatever the pager still holds.
    pub fn accumulated_view<'a, I>(&'a self, items: &'a [I]) -> ListView<'a, I> {
        match self {
            QueryStatus::Error(message) => ListView::Error(message),
            _ if items.is_empty() => self.list_view(|_| <&[I]>::default()),
            _ => ListView::Rows(items),
        }
    }
}

/// What a list region shows.
#[derive(Debug, PartialEq)]
pub enum ListView<'a, I> {
    Loading,
    Error(&'a str),
    /// The read succeeded with zero rows.
    Empty,
    Rows(&'a [I]),
}

/// A page with several independent reads is loading while any of them is.
pub fn combined_loading<I>(flags: I) -> bool
where
    I: IntoIterator<Item = bool>,
{
    flags.into_iter().any(|loading| loading)
}
