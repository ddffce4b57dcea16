//! Built-in demo dataset.
//!
//! Hosts normally inject their own records; this list exists so tests and
//! demos have stock data without touching disk or network.

use crate::UserProfile;

pub fn demo_profiles() -> Vec<UserProfile> {
    [
        (0, "Michaela Runnings", "https://picsum.photos/id/1027/200", true),
        (1, "John Pestridge", "https://picsum.photos/id/1005/200", false),
        (2, "Manda Kyles", "https://picsum.photos/id/1011/200", true),
        (3, "Dan Spicer", "https://picsum.photos/id/1012/200", false),
        (4, "Keanu Dester", "https://picsum.photos/id/1025/200", true),
        (5, "Anichu Patel", "https://picsum.photos/id/1062/200", false),
    ]
    .into_iter()
    .map(|(id, name, drawable_id, status)| UserProfile {
        id,
        name: name.to_string(),
        drawable_id: drawable_id.to_string(),
        status,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProfileStore;

    #[test]
    fn demo_dataset_builds_a_valid_store() {
        let store = ProfileStore::new(demo_profiles()).unwrap();
        assert!(!store.is_empty());
        for p in store.all() {
            assert!(!p.name.trim().is_empty());
            assert!(!p.drawable_id.is_empty());
        }
    }
}
