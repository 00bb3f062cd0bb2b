use serde::{Deserialize, Serialize};
use std::fmt;

/// Creation-order key shared by every entity collection.
///
/// Keys are epoch milliseconds at creation time, bumped so that each key is
/// strictly greater than the one handed out before it. Sorting by id is
/// therefore sorting by creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(pub u64);

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out monotonically increasing ids.
#[derive(Debug, Clone, Default)]
pub struct IdGen {
    last: u64,
}

impl IdGen {
    pub fn new() -> Self {
        IdGen::default()
    }

    /// Next id, using `now_millis` when it is ahead of the previous key.
    pub fn next(&mut self, now_millis: u64) -> Id {
        let key = now_millis.max(self.last + 1);
        self.last = key;
        Id(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_even_within_same_millisecond() {
        let mut ids = IdGen::new();
        let a = ids.next(1_000);
        let b = ids.next(1_000);
        let c = ids.next(999);
        assert!(a < b && b < c);
        assert_eq!(a, Id(1_000));
        assert_eq!(c, Id(1_002));
    }

    #[test]
    fn ids_follow_the_clock_when_it_moves_ahead() {
        let mut ids = IdGen::new();
        ids.next(5);
        assert_eq!(ids.next(42), Id(42));
    }
}
