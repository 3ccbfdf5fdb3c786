// web_app/state/mod.rs - View state for the product table
//
// All search, sort and pagination logic lives here as plain Rust so it can be
// exercised without a browser. Components own a `RwSignal<CatalogView>` and
// feed every UI event through `CatalogView::apply`.

pub mod tooltip;

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use crate::web_app::model::{Product, SortDirection, SortField};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Choices offered by the page-size selector
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Maximum number of numbered page buttons shown at once
pub const PAGE_WINDOW: usize = 5;

/// Text shown in place of the loading indicator when the fetch fails
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load data. Please try again later.";

pub const LOADING_MESSAGE: &str = "Loading products...";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("page size must be greater than zero, got {0}")]
    InvalidPageSize(usize),
}

/// A user interaction, decoupled from the DOM event that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogCommand {
    Search(String),
    Sort(SortField),
    SetPage(usize),
    SetPageSize(usize),
    NextPage,
    PrevPage,
}

/// Active sort column and direction; `None` means filter-order
pub type SortState = Option<(SortField, SortDirection)>;

/// Advances the per-field sort cycle `unsorted -> asc -> desc -> unsorted`.
///
/// Clicking a field other than the active one starts that field at `asc`.
pub fn next_sort_state(current: SortState, clicked: SortField) -> SortState {
    match current {
        Some((field, SortDirection::Asc)) if field == clicked => Some((clicked, SortDirection::Desc)),
        Some((field, SortDirection::Desc)) if field == clicked => None,
        _ => Some((clicked, SortDirection::Asc)),
    }
}

fn compare_by(field: SortField, a: &Product, b: &Product) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortField::Price => a.price.cmp(&b.price),
        SortField::Category => a
            .category_name()
            .to_lowercase()
            .cmp(&b.category_name().to_lowercase()),
    }
}

/// "Showing X-Y of Z" for the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl std::fmt::Display for PageSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Showing {}-{} of {}", self.first, self.last, self.total)
    }
}

/// Session-local view over the fetched products.
///
/// `visible` holds indices into `products`: the filtered subsequence in
/// filter-order, then reordered by the active sort. Indices keep the
/// unsorted state recoverable without a second copy of the list.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    products: Vec<Product>,
    visible: Vec<usize>,
    query: String,
    sort: SortState,
    page: usize,
    page_size: usize,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            visible: Vec::new(),
            query: String::new(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogView {
    pub fn new(products: Vec<Product>) -> Self {
        let mut view = Self::default();
        view.load(products);
        view
    }

    /// Replaces the full list, keeping query, sort and page size
    pub fn load(&mut self, products: Vec<Product>) {
        self.products = products;
        self.page = 1;
        self.refresh();
    }

    pub fn apply(&mut self, command: CatalogCommand) -> Result<(), CatalogError> {
        match command {
            CatalogCommand::Search(term) => self.search(term),
            CatalogCommand::Sort(field) => self.sort(field),
            CatalogCommand::SetPage(page) => self.set_page(page),
            CatalogCommand::SetPageSize(size) => return self.set_page_size(size),
            CatalogCommand::NextPage => self.next_page(),
            CatalogCommand::PrevPage => self.prev_page(),
        }
        Ok(())
    }

    pub fn search(&mut self, term: impl Into<String>) {
        self.query = term.into();
        self.page = 1;
        self.refresh();
    }

    pub fn sort(&mut self, field: SortField) {
        self.sort = next_sort_state(self.sort, field);
        self.page = 1;
        self.refresh();
    }

    /// Moves to `page`, clamped into `[1, page_count]`
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
    }

    pub fn set_page_size(&mut self, size: usize) -> Result<(), CatalogError> {
        if size == 0 {
            return Err(CatalogError::InvalidPageSize(size));
        }
        self.page_size = size;
        self.page = 1;
        Ok(())
    }

    pub fn next_page(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.has_prev() {
            self.page -= 1;
        }
    }

    fn refresh(&mut self) {
        let needle = self.query.to_lowercase();
        self.visible = self
            .products
            .iter()
            .enumerate()
            .filter(|(_, p)| p.title.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();

        if let Some((field, direction)) = self.sort {
            let products = &self.products;
            // Stable, so equal keys keep filter-order in both directions
            self.visible.sort_by(|&a, &b| {
                let ordering = compare_by(field, &products[a], &products[b]);
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        self.clamp_page();
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.page_count().max(1));
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Direction shown on the header for `field`, if it is the active one
    pub fn direction_for(&self, field: SortField) -> Option<SortDirection> {
        self.sort
            .filter(|(active, _)| *active == field)
            .map(|(_, direction)| direction)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of products matching the search
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Filtered and sorted products, across all pages
    pub fn visible(&self) -> impl Iterator<Item = &Product> + '_ {
        self.visible.iter().map(move |&i| &self.products[i])
    }

    /// Zero when nothing matches
    pub fn page_count(&self) -> usize {
        self.visible.len().div_ceil(self.page_size)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Products on the current page
    pub fn page_items(&self) -> impl Iterator<Item = &Product> + '_ {
        let start = (self.page - 1) * self.page_size;
        self.visible
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(move |&i| &self.products[i])
    }

    pub fn summary(&self) -> PageSummary {
        let total = self.visible.len();
        if total == 0 {
            return PageSummary { first: 0, last: 0, total };
        }
        let first = (self.page - 1) * self.page_size + 1;
        let last = (self.page * self.page_size).min(total);
        PageSummary { first, last, total }
    }

    /// Page numbers to render as buttons, at most `PAGE_WINDOW` wide and
    /// centred on the current page where possible. Empty when there are no
    /// pages.
    pub fn page_window(&self) -> RangeInclusive<usize> {
        let pages = self.page_count();
        let span = PAGE_WINDOW - 1;
        let mut start = self.page.saturating_sub(2).max(1);
        let end = (start + span).min(pages);
        if end.saturating_sub(start) < span {
            start = end.saturating_sub(span).max(1);
        }
        start..=end
    }
}

/// Where the initial fetch stands, as far as the page is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Failed,
    Ready,
}

impl LoadState {
    pub fn from_result<T, E>(result: Option<&Result<T, E>>) -> Self {
        match result {
            None => LoadState::Loading,
            Some(Err(_)) => LoadState::Failed,
            Some(Ok(_)) => LoadState::Ready,
        }
    }

    /// Text of the loading indicator, `None` once it is hidden
    pub fn indicator_text(&self) -> Option<&'static str> {
        match self {
            LoadState::Loading => Some(LOADING_MESSAGE),
            LoadState::Failed => Some(LOAD_ERROR_MESSAGE),
            LoadState::Ready => None,
        }
    }

    /// Table, search box and pagination are only shown after a successful fetch
    pub fn shows_table(&self) -> bool {
        matches!(self, LoadState::Ready)
    }
}
