//! Domain-specific assertion macros for formfinder harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* ordering or filter guarantee was violated.

use formfinder_core::SearchResult;

// ---------------------------------------------------------------------------
// Ordering assertions
// ---------------------------------------------------------------------------

/// Assert that a form list is non-increasing on a key.
///
/// ```rust
/// assert_sorted_desc!(result.forms, |f| f.download_count);
/// ```
#[macro_export]
macro_rules! assert_sorted_desc {
    ($forms:expr, $key:expr) => {{
        let forms: &[formfinder_core::Form] = &$forms;
        let key = $key;
        for pair in forms.windows(2) {
            if key(&pair[0]) < key(&pair[1]) {
                panic!(
                    "assert_sorted_desc! failed: {:?} sorts before {:?} but has a smaller key",
                    pair[0].id, pair[1].id
                );
            }
        }
    }};
}

// ---------------------------------------------------------------------------
// Result-set assertions
// ---------------------------------------------------------------------------

/// Assert that every form in a result set satisfies a predicate.
///
/// ```rust
/// assert_results_all!(result.forms, |f: &Form| f.in_category("cat_tax"));
/// ```
#[macro_export]
macro_rules! assert_results_all {
    ($forms:expr, $pred:expr) => {{
        let forms: &[formfinder_core::Form] = &$forms;
        let pred = $pred;
        let failing: Vec<&str> = forms
            .iter()
            .filter(|f| !pred(*f))
            .map(|f| f.id.as_str())
            .collect();
        if !failing.is_empty() {
            panic!(
                "assert_results_all! failed: {} of {} forms did not satisfy predicate: {:?}",
                failing.len(),
                forms.len(),
                failing
            );
        }
    }};
}

/// Assert the exact ids, in order, of a form list.
///
/// ```rust
/// assert_ids!(result.forms, ["form_b", "form_a"]);
/// ```
#[macro_export]
macro_rules! assert_ids {
    ($forms:expr, [$($id:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $forms.iter().map(|f| f.id.as_str()).collect();
        let expected: Vec<&str> = vec![$($id),*];
        pretty_assertions::assert_eq!(actual, expected);
    }};
}

// ---------------------------------------------------------------------------
// Shape invariants
// ---------------------------------------------------------------------------

/// Check the page-shape invariants every [`SearchResult`] must satisfy.
pub fn assert_page_shape(result: &SearchResult, limit: usize) {
    assert!(
        result.forms.len() <= limit,
        "page holds {} forms but limit is {}",
        result.forms.len(),
        limit
    );
    assert!(
        result.forms.len() <= result.total_count,
        "page holds {} forms but only {} matched",
        result.forms.len(),
        result.total_count
    );
}
