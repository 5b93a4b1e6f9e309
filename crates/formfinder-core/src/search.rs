//! Query engine: filter, rank, and page the catalog.
//!
//! [`search`] runs the full pipeline:
//!
//! ```text
//! text terms ──► categories ──► sources ──► sort ──► page
//! ```
//!
//! Text matching is OR-of-terms substring matching over the lowercased
//! title, description, and tags. "Relevance" ordering is descending view
//! count; it does not look at how well the text matched. The `dateRange`
//! filter is carried through to the result but does not restrict anything.
//!
//! The remaining functions are fixed views over the same catalog.

use crate::catalog::Catalog;
use crate::types::{Form, SearchFilters, SearchResult, SortBy, SourceType};
use std::cmp::Reverse;
use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_POPULAR_LIMIT: usize = 10;
pub const DEFAULT_RELATED_LIMIT: usize = 4;
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

// ---------------------------------------------------------------------------
// Full search
// ---------------------------------------------------------------------------

/// Select, rank, and page forms from `catalog`.
///
/// `page` is 1-based. Page 0, or any page past the last match, yields an
/// empty `forms` list; `total_count` is reported regardless.
pub fn search(
    catalog: &Catalog,
    query: &str,
    filters: &SearchFilters,
    page: usize,
    limit: usize,
) -> SearchResult {
    let terms = query_terms(query);

    let mut matches: Vec<&Form> = catalog
        .indexed()
        .filter(|(_, haystack)| matches_terms(haystack, &terms))
        .map(|(form, _)| form)
        .filter(|form| matches_categories(form, &filters.categories))
        .filter(|form| matches_sources(form, &filters.sources))
        .collect();

    sort_forms(&mut matches, filters.sort_by);

    let total_count = matches.len();
    let forms = page_window(total_count, page, limit)
        .map(|window| matches[window].iter().map(|&f| f.clone()).collect())
        .unwrap_or_default();

    tracing::debug!(
        query,
        terms = terms.len(),
        sort_by = %filters.sort_by,
        page,
        limit,
        total_count,
        "search"
    );

    SearchResult {
        forms,
        total_count,
        query: query.to_string(),
        filters: filters.clone(),
    }
}

/// Lowercase whitespace-separated terms. Blank input yields no terms.
pub fn query_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

fn matches_terms(haystack: &str, terms: &[String]) -> bool {
    terms.is_empty() || terms.iter().any(|t| haystack.contains(t.as_str()))
}

fn matches_categories(form: &Form, wanted: &[String]) -> bool {
    wanted.is_empty() || wanted.iter().any(|c| form.in_category(c))
}

fn matches_sources(form: &Form, wanted: &[SourceType]) -> bool {
    wanted.is_empty() || wanted.contains(&form.source_type)
}

/// Stable sort on a single descending key.
fn sort_forms(forms: &mut [&Form], sort_by: SortBy) {
    match sort_by {
        SortBy::Popularity | SortBy::Downloads => forms.sort_by_key(|f| Reverse(f.download_count)),
        SortBy::Date => forms.sort_by_key(|f| Reverse(f.last_updated)),
        SortBy::Relevance => forms.sort_by_key(|f| Reverse(f.view_count)),
    }
}

/// Index range of page `page` within `total` items, or `None` when the page
/// lies entirely outside the match list.
fn page_window(total: usize, page: usize, limit: usize) -> Option<Range<usize>> {
    let start = page.checked_sub(1)?.checked_mul(limit)?;
    if start >= total {
        return None;
    }
    Some(start..start.saturating_add(limit).min(total))
}

// ---------------------------------------------------------------------------
// Fixed views
// ---------------------------------------------------------------------------

/// The whole catalog by descending download count, at most `limit` forms.
pub fn popular_forms(catalog: &Catalog, limit: usize) -> Vec<&Form> {
    let mut forms: Vec<&Form> = catalog.forms().iter().collect();
    sort_forms(&mut forms, SortBy::Downloads);
    forms.truncate(limit);
    forms
}

/// Every form filed under `category_id`, in catalog order.
pub fn forms_by_category<'a>(catalog: &'a Catalog, category_id: &str) -> Vec<&'a Form> {
    catalog
        .forms()
        .iter()
        .filter(|f| f.in_category(category_id))
        .collect()
}

/// Forms sharing at least one category with `form_id`, excluding the form
/// itself, in catalog order, at most `limit`. Unknown ids yield nothing.
pub fn related_forms<'a>(catalog: &'a Catalog, form_id: &str, limit: usize) -> Vec<&'a Form> {
    let Some(form) = catalog.form(form_id) else {
        return Vec::new();
    };

    catalog
        .forms()
        .iter()
        .filter(|f| f.id != form_id && f.shares_category_with(form))
        .take(limit)
        .collect()
}

/// Search-as-you-type suggestions: the first `limit` default-ranked matches,
/// or nothing for a blank query.
pub fn suggest(catalog: &Catalog, query: &str, limit: usize) -> Vec<Form> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    search(catalog, query, &SearchFilters::default(), 1, limit).forms
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
