//! Page controls and page slicing
//!
//! Pure functions that turn a `(current_page, total_pages)` pair into the
//! ordered list of controls a listing screen renders under its items, plus the
//! arithmetic needed to cut a collection into pages.
//!
//! Rendering never clamps: the previous control on the first page still
//! targets page `0`, and the next control on the last page targets
//! `total_pages + 1`. The `disabled` flag is only a hint for the view layer.
//! Range enforcement happens in [`activate`], which clamps the request before
//! reporting it.

use serde::Serialize;

/// Error type for page slicing
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("No items available for pagination")]
    Empty,
    #[error("Page {page} is out of range. Only {total_pages} pages available.")]
    OutOfRange { page: usize, total_pages: usize },
    #[error("Page size must be at least 1")]
    ZeroPageSize,
}

/// The caller-owned pair a paginator is rendered from.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub total_pages: usize,
}

impl PaginationState {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    /// Controls for this state. See [`render_pagination`].
    pub fn controls(&self) -> Vec<PageControl> {
        render_pagination(self.current_page, self.total_pages)
    }
}

/// What a control does when activated
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type", content = "page", rename_all = "snake_case")]
pub enum ControlKind {
    Previous,
    Page(usize),
    Next,
}

/// A single renderable page selector
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub kind: ControlKind,
    /// Page requested on activation, before clamping.
    pub target: usize,
    pub active: bool,
    pub disabled: bool,
}

impl PageControl {
    /// Label shown by text renderers.
    pub fn label(&self) -> String {
        match self.kind {
            ControlKind::Previous => "«".to_string(),
            ControlKind::Page(page) => page.to_string(),
            ControlKind::Next => "»".to_string(),
        }
    }
}

/// Build the control sequence for one render.
///
/// Returns an empty sequence when `total_pages <= 1`. Otherwise returns a
/// previous control, one control per page in ascending order and a next
/// control, in that order.
pub fn render_pagination(current_page: usize, total_pages: usize) -> Vec<PageControl> {
    if total_pages <= 1 {
        return vec![];
    }

    let mut controls = Vec::with_capacity(total_pages + 2);

    controls.push(PageControl {
        kind: ControlKind::Previous,
        target: current_page.saturating_sub(1),
        active: false,
        disabled: current_page == 1,
    });

    controls.extend((1..=total_pages).map(|page| PageControl {
        kind: ControlKind::Page(page),
        target: page,
        active: page == current_page,
        disabled: false,
    }));

    controls.push(PageControl {
        kind: ControlKind::Next,
        target: current_page.saturating_add(1),
        active: false,
        disabled: current_page == total_pages,
    });

    controls
}

/// Clamp a requested page to `[1, total_pages]`.
///
/// With no pages at all the result is `1`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Report a control activation through `on_paginate`.
///
/// The control's target is clamped to `[1, total_pages]` first, so a
/// previous/next control activated in spite of being disabled requests the
/// boundary page instead of leaving the range. Returns the page reported.
pub fn activate<F>(control: &PageControl, total_pages: usize, mut on_paginate: F) -> usize
where
    F: FnMut(usize),
{
    let page = clamp_page(control.target, total_pages);
    on_paginate(page);
    page
}

/// Number of pages needed for `total_items` at `page_size` items per page.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Calculate slice bounds for a given page
///
/// Returns `(start, end)` for slicing the items array. Page numbers are
/// 1-indexed; page `0` is treated as page `1`.
pub fn page_bounds(
    total_items: usize,
    page: usize,
    page_size: usize,
) -> Result<(usize, usize), PaginationError> {
    if page_size == 0 {
        return Err(PaginationError::ZeroPageSize);
    }

    if total_items == 0 {
        return Err(PaginationError::Empty);
    }

    let start = (page.max(1) - 1) * page_size;

    if start >= total_items {
        return Err(PaginationError::OutOfRange {
            page,
            total_pages: total_pages(total_items, page_size),
        });
    }

    let end = (start + page_size).min(total_items);
    Ok((start, end))
}
