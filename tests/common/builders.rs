//! Test builders: ergonomic constructors for `Form`, `Category`, and `Catalog`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{DateTime, TimeZone, Utc};
use formfinder_core::{Catalog, Category, Form, SourceType};

// ---------------------------------------------------------------------------
// FormBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Form`] test fixtures.
///
/// # Example
///
/// ```rust
/// let form = FormBuilder::new("form_1040", "Form 1040 Income Tax Return")
///     .categories(&["cat_tax"])
///     .source(SourceType::Government)
///     .downloads(200)
///     .build();
/// ```
pub struct FormBuilder {
    form: Form,
}

impl FormBuilder {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            form: Form {
                slug: id.replace('_', "-"),
                id,
                title: title.into(),
                description: String::new(),
                source_type: SourceType::Government,
                source_name: String::new(),
                source_url: String::new(),
                external_file_url: String::new(),
                category_ids: Vec::new(),
                tags: Vec::new(),
                last_updated: day(2024, 1, 1),
                download_count: 0,
                view_count: 0,
                save_count: 0,
                is_active: true,
                is_verified: false,
            },
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.form.description = description.into();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.form.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn categories(mut self, ids: &[&str]) -> Self {
        self.form.category_ids = ids.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn source(mut self, source: SourceType) -> Self {
        self.form.source_type = source;
        self
    }

    pub fn downloads(mut self, n: u64) -> Self {
        self.form.download_count = n;
        self
    }

    pub fn views(mut self, n: u64) -> Self {
        self.form.view_count = n;
        self
    }

    pub fn updated(mut self, ts: DateTime<Utc>) -> Self {
        self.form.last_updated = ts;
        self
    }

    pub fn build(self) -> Form {
        self.form
    }
}

/// Midnight UTC on the given day.
pub fn day(year: i32, month: u32, dom: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, dom, 0, 0, 0).unwrap()
}

// ---------------------------------------------------------------------------
// Categories + catalogs
// ---------------------------------------------------------------------------

pub fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        slug: id.replace('_', "-"),
        description: String::new(),
        form_count: 0,
        is_active: true,
        is_featured: false,
    }
}

/// Build a catalog from forms, deriving one category per distinct id the
/// forms reference (in first-seen order).
pub fn catalog_of(forms: Vec<Form>) -> Catalog {
    let mut categories: Vec<Category> = Vec::new();
    for id in forms.iter().flat_map(|f| f.category_ids.iter()) {
        if !categories.iter().any(|c| &c.id == id) {
            categories.push(category(id, id));
        }
    }
    Catalog::new(forms, categories).expect("test catalog must be valid")
}

/// Ids of a form list, for compact equality assertions.
pub fn ids<'a>(forms: impl IntoIterator<Item = &'a Form>) -> Vec<&'a str> {
    forms.into_iter().map(|f| f.id.as_str()).collect()
}
