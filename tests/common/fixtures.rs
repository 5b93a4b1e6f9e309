//! Static catalogs used across harnesses.
//!
//! Each fixture is small enough to reason about by hand in an assertion.
//! [`generated_catalog`] is the exception: it exists for property tests and
//! benchmarks that need volume.

use super::builders::*;
use formfinder_core::{Catalog, SourceType};

/// Three forms with download counts [50, 200, 10], in that catalog order.
pub fn three_downloads_catalog() -> Catalog {
    catalog_of(vec![
        FormBuilder::new("form_a", "Alpha Form").downloads(50).views(1).build(),
        FormBuilder::new("form_b", "Beta Form").downloads(200).views(3).build(),
        FormBuilder::new("form_c", "Gamma Form").downloads(10).views(2).build(),
    ])
}

/// A small mixed catalog: tax, housing, and education forms across sources.
pub fn mixed_catalog() -> Catalog {
    catalog_of(vec![
        FormBuilder::new("form_1040", "Form 1040 Individual Income Tax Return")
            .description("Annual federal return")
            .tags(&["irs", "income"])
            .categories(&["cat_tax"])
            .downloads(1500)
            .views(4000)
            .updated(day(2024, 1, 15))
            .build(),
        FormBuilder::new("form_w4", "Form W-4 Withholding Certificate")
            .tags(&["payroll", "irs"])
            .categories(&["cat_tax", "cat_employment"])
            .downloads(1200)
            .views(3500)
            .updated(day(2024, 2, 1))
            .build(),
        FormBuilder::new("form_lease", "Residential Lease Agreement")
            .description("Landlord and tenant contract")
            .tags(&["rental", "tenant"])
            .categories(&["cat_housing", "cat_legal"])
            .source(SourceType::Legal)
            .downloads(800)
            .views(5000)
            .updated(day(2023, 6, 1))
            .build(),
        FormBuilder::new("form_rental_app", "Rental Application")
            .tags(&["tenant", "screening"])
            .categories(&["cat_housing"])
            .source(SourceType::UserSubmitted)
            .downloads(600)
            .views(900)
            .updated(day(2024, 3, 10))
            .build(),
        FormBuilder::new("form_fafsa", "FAFSA Student Aid Application")
            .description("Federal grants and loans for college")
            .tags(&["student", "grants"])
            .categories(&["cat_education"])
            .source(SourceType::Educational)
            .downloads(1100)
            .views(3900)
            .updated(day(2023, 10, 1))
            .build(),
        FormBuilder::new("form_sched_c", "Schedule C Business Profit or Loss")
            .tags(&["self-employment", "irs"])
            .categories(&["cat_tax"])
            .downloads(300)
            .views(700)
            .updated(day(2022, 12, 31))
            .build(),
    ])
}

/// `n` forms cycling through four categories and all source types, with
/// counters derived from the index so every ordering is exercised.
pub fn generated_catalog(n: usize) -> Catalog {
    const CATEGORIES: [&str; 4] = ["cat_tax", "cat_housing", "cat_legal", "cat_health"];
    const WORDS: [&str; 6] = ["tax", "lease", "permit", "claim", "return", "notice"];

    let forms = (0..n)
        .map(|i| {
            let word = WORDS[i % WORDS.len()];
            FormBuilder::new(format!("form_{i}"), format!("{word} form {i}"))
                .description(format!("generated {word} document"))
                .categories(&[CATEGORIES[i % CATEGORIES.len()]])
                .source(SourceType::ALL[i % SourceType::ALL.len()])
                .downloads((i as u64 * 7919) % 1000)
                .views((i as u64 * 104_729) % 5000)
                .updated(day(2020 + (i % 5) as i32, 1 + (i % 12) as u32, 1 + (i % 28) as u32))
                .build()
        })
        .collect();
    catalog_of(forms)
}
