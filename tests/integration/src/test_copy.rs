//! Copy scenario tests.

#[cfg(test)]
mod tests {
    use mockstore_core::ObjectOptions;

    use crate::{test_content, test_store};

    #[test]
    fn test_should_copy_and_leave_source_untouched() {
        let (_dir, store) = test_store();
        let opts = ObjectOptions::default();
        let data = test_content(9000);

        store.store("src.bin", &data, Some("b"), &opts).expect("store");
        let size = store
            .copy("src.bin", "backup/src.bin", Some("b"), &opts)
            .expect("copy");
        assert_eq!(size, 9000);

        let copy = store
            .value("backup/src.bin", Some("b"), &opts)
            .expect("value");
        let original = store.value("src.bin", Some("b"), &opts).expect("value");
        assert_eq!(copy.body.as_ref(), data.as_slice());
        assert_eq!(original.body, copy.body);
    }

    #[test]
    fn test_should_keep_copy_after_source_delete() {
        let (_dir, store) = test_store();
        let opts = ObjectOptions::default();

        store.store("a", "content", Some("b"), &opts).expect("store");
        store.copy("a", "b", Some("b"), &opts).expect("copy");
        store.delete("a", Some("b"), &opts).expect("delete");

        assert!(!store.exists("a", Some("b")));
        assert_eq!(
            store.value("b", Some("b"), &opts).expect("value").as_str(),
            Some("content")
        );
    }

    #[test]
    fn test_should_overwrite_existing_destination() {
        let (_dir, store) = test_store();
        let opts = ObjectOptions::default();

        store.store("src", "new", Some("b"), &opts).expect("store");
        store
            .store("dst", "old and longer", Some("b"), &opts)
            .expect("store");
        store.copy("src", "dst", Some("b"), &opts).expect("copy");

        assert_eq!(
            store.value("dst", Some("b"), &opts).expect("value").as_str(),
            Some("new")
        );
    }

    #[test]
    fn test_should_copy_within_default_bucket() {
        let (_dir, store) = test_store();
        let opts = ObjectOptions::default();

        store.store("x", "y", None, &opts).expect("store");
        store.copy("x", "z", None, &opts).expect("copy");
        assert!(store.exists("z", Some("default")));
    }
}
