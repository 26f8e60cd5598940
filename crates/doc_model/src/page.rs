//! Pages - Ordered page collection with a floor of one page
//!
//! Each page carries its own rich-text markup. Ids that no longer exist are
//! treated as stale references from the editing surface and ignored.

use crate::PageId;
use serde::{Deserialize, Serialize};

/// A single page of document content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    /// HTML content
    pub content: String,
}

impl Page {
    /// Create an empty page with a fresh id
    pub fn new() -> Self {
        Self {
            id: PageId::new(),
            content: String::new(),
        }
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            id: PageId::new(),
            content: content.into(),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered pages of a document. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DocumentPages {
    pages: Vec<Page>,
}

impl Default for DocumentPages {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentPages {
    /// A fresh document holding one empty page
    pub fn new() -> Self {
        Self {
            pages: vec![Page::new()],
        }
    }

    /// Build from existing pages; an empty list yields a single empty page
    pub fn from_pages(pages: Vec<Page>) -> Self {
        if pages.is_empty() {
            Self::new()
        } else {
            Self { pages }
        }
    }

    /// Append an empty page and return its id
    pub fn add_page(&mut self) -> PageId {
        let page = Page::new();
        let id = page.id;
        self.pages.push(page);
        tracing::debug!("Added page {} ({} pages)", id, self.pages.len());
        id
    }

    /// Remove a page by id. The last remaining page is never removed.
    ///
    /// Returns `true` if a page was removed.
    pub fn remove_page(&mut self, id: PageId) -> bool {
        if self.pages.len() <= 1 {
            tracing::debug!("Refusing to remove page {}: document needs at least one page", id);
            return false;
        }
        let before = self.pages.len();
        self.pages.retain(|page| page.id != id);
        let removed = self.pages.len() != before;
        if !removed {
            tracing::debug!("Ignoring removal of unknown page {}", id);
        }
        removed
    }

    /// Replace the content of a page. Unknown ids are ignored.
    ///
    /// Returns `true` if the page was found.
    pub fn update_page_content(&mut self, id: PageId, content: impl Into<String>) -> bool {
        match self.pages.iter_mut().find(|page| page.id == id) {
            Some(page) => {
                page.content = content.into();
                true
            }
            None => {
                tracing::debug!("Ignoring content update for unknown page {}", id);
                false
            }
        }
    }

    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == id)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn as_slice(&self) -> &[Page] {
        &self.pages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }

    /// Page contents in document order
    pub fn contents(&self) -> Vec<String> {
        self.pages.iter().map(|page| page.content.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a DocumentPages {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
