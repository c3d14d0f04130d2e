//! Streaming scenario tests.

#[cfg(test)]
mod tests {
    use bytes::BytesMut;
    use mockstore_core::chunks::CHUNK_SIZE;
    use mockstore_core::ObjectOptions;

    use crate::{test_content, test_store};

    #[test]
    fn test_should_concatenate_chunks_to_full_content() {
        let (_dir, store) = test_store();
        let opts = ObjectOptions::default();

        for len in [0, 4095, 4096, 10_000] {
            let key = format!("stream-{len}");
            store
                .store(&key, test_content(len), Some("b"), &opts)
                .expect("store");

            let mut joined = BytesMut::new();
            let mut calls = 0;
            store
                .stream_chunks(&key, Some("b"), &opts, |chunk| {
                    calls += 1;
                    joined.extend_from_slice(chunk);
                })
                .expect("stream_chunks");

            let fetched = store.value(&key, Some("b"), &opts).expect("value");
            assert_eq!(joined.freeze(), fetched.body, "len {len}");
            assert_eq!(calls, len.div_ceil(CHUNK_SIZE), "len {len}");
        }
    }

    #[test]
    fn test_should_deliver_full_chunks_before_the_last() {
        let (_dir, store) = test_store();
        let opts = ObjectOptions::default();
        store
            .store("k", test_content(10_000), Some("b"), &opts)
            .expect("store");

        let mut sizes = Vec::new();
        store
            .stream_chunks("k", Some("b"), &opts, |chunk| sizes.push(chunk.len()))
            .expect("stream_chunks");
        assert_eq!(sizes, vec![CHUNK_SIZE, CHUNK_SIZE, 10_000 - 2 * CHUNK_SIZE]);
    }

    #[test]
    fn test_should_stream_whole_body_without_consumer() {
        let (_dir, store) = test_store();
        let opts = ObjectOptions::default();
        store.store("k", "whole", Some("b"), &opts).expect("store");

        let body = store.stream("k", Some("b"), &opts).expect("stream");
        assert_eq!(body.as_ref(), b"whole");
    }

    #[test]
    fn test_should_allow_early_abandon_of_chunk_iterator() {
        let (_dir, store) = test_store();
        let opts = ObjectOptions::default();
        store
            .store("k", test_content(3 * CHUNK_SIZE), Some("b"), &opts)
            .expect("store");

        let first = store
            .open_chunks("k", Some("b"))
            .expect("open_chunks")
            .next()
            .expect("first chunk")
            .expect("read");
        assert_eq!(first.len(), CHUNK_SIZE);

        // The handle was released; the object can be removed and recreated.
        store.delete("k", Some("b"), &opts).expect("delete");
        store.store("k", "again", Some("b"), &opts).expect("store");
    }
}
