//! On-disk layout tests.
//!
//! Fixtures may write files straight into the store directory; the store must
//! see them as objects.

#[cfg(test)]
mod tests {
    use mockstore_core::object::CONTENT_LENGTH;
    use mockstore_core::{LocalObjectStore, ObjectOptions, StoreConfig};

    use crate::test_store;

    #[test]
    fn test_should_place_objects_at_documented_path() {
        let (dir, store) = test_store();
        store
            .store("x/y/z.txt", "data", Some("bucket"), &ObjectOptions::default())
            .expect("store");

        let path = dir.path().join("tmp/mock-object-store/bucket/x/y/z.txt");
        assert_eq!(std::fs::read(&path).expect("read"), b"data");
        assert_eq!(store.path_for("x/y/z.txt", Some("bucket")), path);
    }

    #[test]
    fn test_should_see_fixture_written_directly() {
        let (dir, store) = test_store();
        let path = dir.path().join("tmp/mock-object-store/fixtures/seed.json");
        std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        std::fs::write(&path, "{}").expect("write");

        assert!(store.exists("seed.json", Some("fixtures")));
        assert_eq!(
            store
                .about("seed.json", Some("fixtures"))
                .expect("about")
                .get(CONTENT_LENGTH),
            Some("2")
        );
        assert!(store.find("seed.json", Some("fixtures")).is_ok());
    }

    #[test]
    fn test_should_share_files_between_stores_with_same_root() {
        let (dir, store) = test_store();
        store
            .store("shared", "v", Some("b"), &ObjectOptions::default())
            .expect("store");

        let other = LocalObjectStore::new(&StoreConfig::builder().root(dir.path()).build());
        assert!(other.exists("shared", Some("b")));
    }

    #[test]
    fn test_should_honor_configured_default_bucket() {
        let (dir, _store) = test_store();
        let store = LocalObjectStore::new(
            &StoreConfig::builder()
                .root(dir.path())
                .default_bucket("uploads")
                .build(),
        );
        store
            .store("k", "v", None, &ObjectOptions::default())
            .expect("store");

        assert!(dir.path().join("tmp/mock-object-store/uploads/k").is_file());
        assert_eq!(store.find("k", None).expect("find").bucket(), "uploads");
    }
}
