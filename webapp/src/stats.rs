use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use content::photos::PhotoId;

use crate::common::storage::KeyValueStore;

pub const IMAGE_STATS_KEY: &str = "imageStats";
pub const LIKED_IMAGES_KEY: &str = "likedImages";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageStat {
    pub likes: i64,
    pub views: i64,
}

// Per-photo like/view counters plus the set of ids this browser has
// liked.  Entries appear lazily on first interaction; both keys are
// rewritten in full on every mutation.
pub struct StatsStore<S> {
    stats: HashMap<PhotoId, ImageStat>,
    liked: HashSet<PhotoId>,
    store: S,
}

impl<S: KeyValueStore> StatsStore<S> {
    // if either key is missing or fails to parse, everything resets to
    // zero and the liked set empties; nothing is surfaced to the user
    pub fn load(store: S) -> Self {
        let loaded = store
            .get::<HashMap<PhotoId, ImageStat>>(IMAGE_STATS_KEY)
            .and_then(|stats| {
                store
                    .get::<Vec<PhotoId>>(LIKED_IMAGES_KEY)
                    .map(|liked| (stats, liked))
            });

        let (stats, liked) = match loaded {
            Ok((stats, liked)) => (stats, liked.into_iter().collect()),
            Err(err) => {
                debug!("resetting gallery counters: {err}");
                (HashMap::new(), HashSet::new())
            }
        };

        StatsStore { stats, liked, store }
    }

    pub fn likes(&self, id: PhotoId) -> i64 {
        self.stats.get(&id).copied().unwrap_or_default().likes
    }

    pub fn views(&self, id: PhotoId) -> i64 {
        self.stats.get(&id).copied().unwrap_or_default().views
    }

    pub fn is_liked(&self, id: PhotoId) -> bool {
        self.liked.contains(&id)
    }

    // every open counts, even for the same photo in the same session
    pub fn record_view(&mut self, id: PhotoId) {
        self.stats.entry(id).or_default().views += 1;
        self.persist();
    }

    // its own inverse; no clamping, so externally tampered counters can
    // go negative
    pub fn toggle_like(&mut self, id: PhotoId) {
        let stat = self.stats.entry(id).or_default();

        if self.liked.remove(&id) {
            stat.likes -= 1;
        } else {
            self.liked.insert(id);
            stat.likes += 1;
        }

        self.persist();
    }

    fn persist(&self) {
        self.store.set(IMAGE_STATS_KEY, &self.stats);
        self.store
            .set(LIKED_IMAGES_KEY, self.liked.iter().copied().collect::<Vec<_>>());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::storage::memory::MemoryStore;

    #[test]
    fn fresh_load_reads_zero() {
        let store = StatsStore::load(MemoryStore::new());

        assert_eq!(store.likes(1), 0);
        assert_eq!(store.views(1), 0);
        assert!(!store.is_liked(1));
    }

    #[test]
    fn record_view_counts_every_call() {
        let mut store = StatsStore::load(MemoryStore::new());

        for _ in 0..5 {
            store.record_view(2);
        }

        assert_eq!(store.views(2), 5);
        assert_eq!(store.likes(2), 0);
    }

    #[test]
    fn toggle_like_is_its_own_inverse() {
        let mut store = StatsStore::load(MemoryStore::new());

        store.toggle_like(3);
        assert_eq!(store.likes(3), 1);
        assert!(store.is_liked(3));

        store.toggle_like(3);
        assert_eq!(store.likes(3), 0);
        assert!(!store.is_liked(3));
    }

    #[test]
    fn counters_survive_reload() {
        let mem = MemoryStore::new();

        {
            let mut store = StatsStore::load(mem.clone());
            store.record_view(4);
            store.toggle_like(4);
        }

        let store = StatsStore::load(mem);
        assert_eq!(store.views(4), 1);
        assert_eq!(store.likes(4), 1);
        assert!(store.is_liked(4));
    }

    #[test]
    fn corrupt_stats_reset_everything() {
        let mem = MemoryStore::new();
        mem.raw_set(IMAGE_STATS_KEY, "{ definitely not json");
        mem.raw_set(LIKED_IMAGES_KEY, "[1, 2]");

        let store = StatsStore::load(mem);

        assert_eq!(store.likes(1), 0);
        assert_eq!(store.views(1), 0);
        assert!(!store.is_liked(1));
        assert!(!store.is_liked(2));
    }

    #[test]
    fn corrupt_liked_set_resets_everything() {
        let mem = MemoryStore::new();
        mem.raw_set(IMAGE_STATS_KEY, r#"{"1":{"likes":3,"views":7}}"#);
        mem.raw_set(LIKED_IMAGES_KEY, "not a list");

        let store = StatsStore::load(mem);

        assert_eq!(store.likes(1), 0);
        assert_eq!(store.views(1), 0);
    }

    #[test]
    fn unlike_without_clamping_can_go_negative() {
        let mem = MemoryStore::new();
        mem.raw_set(IMAGE_STATS_KEY, r#"{"5":{"likes":0,"views":0}}"#);
        mem.raw_set(LIKED_IMAGES_KEY, "[5]");

        let mut store = StatsStore::load(mem);
        store.toggle_like(5);

        assert_eq!(store.likes(5), -1);
        assert!(!store.is_liked(5));
    }
}
