//! Print Document - Page and settings state with derived layout
//!
//! The document owns its pages, the print settings, and the handle to the
//! style host carrying the print geometry override. Every settings mutation
//! rewrites the override before any external subscriber is notified.

use crate::{InMemoryStyleHost, PageStyles, PrintGeometrySync, StyleHost, ViewportBudget};
use doc_model::{
    clamp_margin, DocumentPages, Orientation, Page, PageId, PaperFormat, PaperTable, PrintSettings,
};

/// Handle returned by [`PrintDocument::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type SettingsCallback = Box<dyn FnMut(&PrintSettings) + Send>;

/// A printable multi-page document
pub struct PrintDocument<H: StyleHost = InMemoryStyleHost> {
    pages: DocumentPages,
    settings: PrintSettings,
    paper: PaperTable,
    viewport: ViewportBudget,
    geometry: PrintGeometrySync<H>,
    subscribers: Vec<(SubscriptionId, SettingsCallback)>,
    next_subscription: u64,
}

impl PrintDocument<InMemoryStyleHost> {
    /// Create a document with one empty page, default settings, and an
    /// in-memory style host
    pub fn new() -> Self {
        Self::with_host(InMemoryStyleHost::new())
    }
}

impl Default for PrintDocument<InMemoryStyleHost> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: StyleHost> PrintDocument<H> {
    /// Create a document writing its print override into `host`
    pub fn with_host(host: H) -> Self {
        Self::with_settings(host, PrintSettings::default())
    }

    /// Create a document with initial settings
    pub fn with_settings(host: H, settings: PrintSettings) -> Self {
        let mut doc = Self {
            pages: DocumentPages::new(),
            settings: settings.normalized(),
            paper: PaperTable::default(),
            viewport: ViewportBudget::default(),
            geometry: PrintGeometrySync::new(host),
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        doc.geometry.apply(&doc.settings);
        doc
    }

    /// Replace the viewport budget used for the preview zoom
    pub fn with_viewport(mut self, viewport: ViewportBudget) -> Self {
        self.viewport = viewport;
        self
    }

    // -------------------------------------------------------------------------
    // Pages
    // -------------------------------------------------------------------------

    pub fn pages(&self) -> &[Page] {
        self.pages.as_slice()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.get(id)
    }

    /// Append an empty page
    pub fn add_page(&mut self) -> PageId {
        self.pages.add_page()
    }

    /// Remove a page unless it is the only one left
    pub fn remove_page(&mut self, id: PageId) -> bool {
        self.pages.remove_page(id)
    }

    /// Replace a page's HTML content; unknown ids are ignored
    pub fn update_page_content(&mut self, id: PageId, content: impl Into<String>) -> bool {
        self.pages.update_page_content(id, content)
    }

    // -------------------------------------------------------------------------
    // Settings
    // -------------------------------------------------------------------------

    pub fn settings(&self) -> &PrintSettings {
        &self.settings
    }

    pub fn paper(&self) -> &PaperTable {
        &self.paper
    }

    pub fn viewport(&self) -> &ViewportBudget {
        &self.viewport
    }

    pub fn set_format(&mut self, format: PaperFormat) {
        self.settings.format = format;
        self.settings_changed();
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.settings.orientation = orientation;
        self.settings_changed();
    }

    /// Set the page margin in millimeters; negative values become zero
    pub fn set_margins(&mut self, margins: f64) {
        self.settings.margins = clamp_margin(margins);
        self.settings_changed();
    }

    /// Replace all settings at once
    pub fn update_settings(&mut self, settings: PrintSettings) {
        self.settings = settings.normalized();
        self.settings_changed();
    }

    /// Register a callback run after every settings change
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&PrintSettings) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback; returns `false` if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    fn settings_changed(&mut self) {
        tracing::debug!(
            "Print settings changed: {} {} margins={}mm",
            self.settings.format,
            self.settings.orientation,
            self.settings.margins
        );
        self.geometry.apply(&self.settings);
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&self.settings);
        }
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// Physical page size, margin, and preview zoom for the current settings
    pub fn page_styles(&self) -> PageStyles {
        PageStyles::derive(&self.settings, &self.paper, &self.viewport)
    }

    /// Text of the print override block
    pub fn print_override_css(&self) -> Option<&str> {
        self.geometry.current_css()
    }

    pub fn style_host(&self) -> &H {
        self.geometry.host()
    }
}

impl<H: StyleHost + std::fmt::Debug> std::fmt::Debug for PrintDocument<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrintDocument")
            .field("pages", &self.pages)
            .field("settings", &self.settings)
            .field("viewport", &self.viewport)
            .field("geometry", &self.geometry)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
