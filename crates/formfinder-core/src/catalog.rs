//! Catalog: the immutable, preloaded set of [`Form`] and [`Category`] records.
//!
//! A catalog is built once (from a JSON document, or the embedded demo data)
//! and then shared read-only, typically as `Arc<Catalog>`. Nothing in this
//! crate mutates a catalog after construction, so every query path is a pure
//! function of the catalog and its inputs.
//!
//! # Document format
//!
//! ```json
//! {
//!   "categories": [{ "id": "cat_tax", "name": "Tax Forms", ... }],
//!   "forms": [{ "id": "form_1040", "title": "...", "sourceType": "government", ... }]
//! }
//! ```

use crate::error::CatalogError;
use crate::types::{Category, Form};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEMO_CATALOG_SRC: &str = include_str!("../data/catalog.json");

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    categories: Vec<Category>,
    forms: Vec<Form>,
}

/// The read-only form catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    forms: Vec<Form>,
    categories: Vec<Category>,
    /// Lowercased `title description tags…` per form, parallel to `forms`.
    haystacks: Vec<String>,
    form_index: HashMap<String, usize>,
    category_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate form or category ids.
    ///
    /// Forms that reference a category id absent from `categories` are kept
    /// (they still match category filters by id) but logged at `warn`.
    pub fn new(forms: Vec<Form>, categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut category_index = HashMap::with_capacity(categories.len());
        for (i, category) in categories.iter().enumerate() {
            if category_index.insert(category.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateCategoryId(category.id.clone()));
            }
        }

        let mut form_index = HashMap::with_capacity(forms.len());
        for (i, form) in forms.iter().enumerate() {
            if form_index.insert(form.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateFormId(form.id.clone()));
            }
            for category_id in &form.category_ids {
                if !category_index.contains_key(category_id) {
                    tracing::warn!(form = %form.id, category = %category_id, "form references unknown category");
                }
            }
        }

        let haystacks = forms.iter().map(searchable_text).collect();

        tracing::debug!(forms = forms.len(), categories = categories.len(), "catalog built");

        Ok(Self {
            forms,
            categories,
            haystacks,
            form_index,
            category_index,
        })
    }

    /// Parse a catalog document from a JSON string.
    pub fn from_json_str(src: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(src)?;
        Self::new(doc.forms, doc.categories)
    }

    /// Read and parse a catalog document from disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let src = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&src)?;
        tracing::info!(path = %path.display(), forms = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The demo catalog compiled into the binary.
    pub fn demo() -> Self {
        Self::from_json_str(DEMO_CATALOG_SRC).expect("embedded demo catalog must be valid")
    }

    /// All forms, in catalog (insertion) order.
    pub fn forms(&self) -> &[Form] {
        &self.forms
    }

    /// All categories, in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn form(&self, id: &str) -> Option<&Form> {
        self.form_index.get(id).map(|&i| &self.forms[i])
    }

    pub fn form_by_slug(&self, slug: &str) -> Option<&Form> {
        self.forms.iter().find(|f| !f.slug.is_empty() && f.slug == slug)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.category_index.get(id).map(|&i| &self.categories[i])
    }

    /// Featured categories in catalog order, at most `limit`.
    pub fn featured_categories(&self, limit: usize) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| c.is_featured)
            .take(limit)
            .collect()
    }

    /// The categories `form` is filed under, in the form's own order.
    /// Ids with no matching category are skipped.
    pub fn categories_of(&self, form: &Form) -> Vec<&Category> {
        form.category_ids
            .iter()
            .filter_map(|id| self.category(id))
            .collect()
    }

    /// The first category, in catalog order, that `form` belongs to.
    pub fn primary_category(&self, form: &Form) -> Option<&Category> {
        self.categories.iter().find(|c| form.in_category(&c.id))
    }

    /// Forms paired with their precomputed lowercase search text.
    pub(crate) fn indexed(&self) -> impl Iterator<Item = (&Form, &str)> {
        self.forms
            .iter()
            .zip(self.haystacks.iter().map(String::as_str))
    }
}

fn searchable_text(form: &Form) -> String {
    format!("{} {} {}", form.title, form.description, form.tags.join(" ")).to_lowercase()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
