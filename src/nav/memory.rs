use super::{Navigator, Page};

/// Navigation held as a plain value, set directly by whoever owns it.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    page: Page,
}

impl MemoryNavigator {
    pub fn new(page: Page) -> Self {
        MemoryNavigator { page }
    }

    /// Navigate by sidebar label ("Task Boards"). Unknown labels go Home.
    pub fn navigate_to_title(&mut self, title: &str) {
        self.page = Page::from_title(title);
    }
}

impl Navigator for MemoryNavigator {
    fn current_page(&self) -> Page {
        self.page
    }

    fn navigate(&mut self, page: Page) {
        self.page = page;
    }
}
