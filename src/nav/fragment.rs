use super::{Navigator, Page};

/// Handle returned by [`FragmentNavigator::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&str)>;

/// Navigation backed by a route fragment, like a browser location hash.
pub struct FragmentNavigator {
    fragment: String,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl FragmentNavigator {
    /// Start at `initial`, or at `#/home` when it is empty.
    pub fn new(initial: &str) -> Self {
        FragmentNavigator {
            fragment: normalize(initial),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The raw fragment, as last set
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// An external location change. The fragment is stored verbatim, so an
    /// unknown route is kept and reads as Home.
    pub fn set_fragment(&mut self, fragment: &str) {
        let fragment = normalize(fragment);
        if fragment == self.fragment {
            return;
        }
        self.fragment = fragment;
        tracing::debug!(fragment = %self.fragment, "route fragment changed");
        for (_, listener) in &mut self.listeners {
            listener(&self.fragment);
        }
    }

    /// Register a listener called with the new fragment on every change
    pub fn subscribe(&mut self, listener: impl FnMut(&str) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }
}

impl Default for FragmentNavigator {
    fn default() -> Self {
        FragmentNavigator::new("")
    }
}

impl Navigator for FragmentNavigator {
    fn current_page(&self) -> Page {
        Page::from_fragment(&self.fragment)
    }

    fn navigate(&mut self, page: Page) {
        self.set_fragment(&page.fragment());
    }
}

fn normalize(fragment: &str) -> String {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        Page::Home.fragment()
    } else {
        fragment.to_string()
    }
}
