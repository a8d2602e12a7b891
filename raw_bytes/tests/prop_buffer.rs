//! Property-based tests for ByteBuffer

use proptest::prelude::*;
use raw_bytes::ByteBuffer;

fn bytes_and_range() -> impl Strategy<Value = (Vec<u8>, usize, usize)> {
    prop::collection::vec(any::<u8>(), 1..256).prop_flat_map(|bytes| {
        let len = bytes.len();
        (Just(bytes), 0..=len, 0..=len)
    })
}

proptest! {
    // -------------------------------------------------------------
    // 1. A buffer built from a vector hands the same bytes back.
    // -------------------------------------------------------------
    #[test]
    fn prop_from_vec_roundtrip(ref bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let buf = ByteBuffer::from_vec(bytes.clone());
        prop_assert_eq!(buf.len(), bytes.len());
        prop_assert_eq!(buf.is_empty(), bytes.is_empty());
        prop_assert_eq!(buf.as_slice(), &bytes[..]);
        prop_assert_eq!(buf.into_vec(), bytes.clone());
    }

    // -------------------------------------------------------------
    // 2. Resizing keeps the common prefix and zero-fills growth.
    // -------------------------------------------------------------
    #[test]
    fn prop_resize_keeps_prefix(
        ref bytes in prop::collection::vec(any::<u8>(), 0..256),
        new_len in 0usize..512
    ) {
        let mut buf = ByteBuffer::from_vec(bytes.clone());
        buf.try_resize(new_len).unwrap();

        prop_assert_eq!(buf.len(), new_len);
        let kept = bytes.len().min(new_len);
        prop_assert_eq!(&buf.as_slice()[..kept], &bytes[..kept]);
        prop_assert!(buf.as_slice()[kept..].iter().all(|&b| b == 0));
    }

    // -------------------------------------------------------------
    // 3. fill() touches exactly the requested range.
    // -------------------------------------------------------------
    #[test]
    fn prop_fill_range((bytes, a, b) in bytes_and_range(), value in any::<u8>()) {
        let (start, end) = (a.min(b), a.max(b));
        let mut buf = ByteBuffer::from_vec(bytes.clone());
        buf.fill(start..end, value);

        for (i, &orig) in bytes.iter().enumerate() {
            let expected = if (start..end).contains(&i) { value } else { orig };
            prop_assert_eq!(buf.as_slice()[i], expected);
        }
    }

    // -------------------------------------------------------------
    // 4. invert() is its own inverse and only flips the range.
    // -------------------------------------------------------------
    #[test]
    fn prop_invert_range((bytes, a, b) in bytes_and_range()) {
        let (start, end) = (a.min(b), a.max(b));
        let mut buf = ByteBuffer::from_vec(bytes.clone());

        buf.invert(start..end);
        for (i, &orig) in bytes.iter().enumerate() {
            let expected = if (start..end).contains(&i) { !orig } else { orig };
            prop_assert_eq!(buf.as_slice()[i], expected);
        }

        buf.invert(start..end);
        prop_assert_eq!(buf.as_slice(), &bytes[..]);
    }

    // -------------------------------------------------------------
    // 5. A fallible clone is an independent copy.
    // -------------------------------------------------------------
    #[test]
    fn prop_try_clone_is_independent(ref bytes in prop::collection::vec(any::<u8>(), 1..128)) {
        let original = ByteBuffer::from_vec(bytes.clone());
        let mut copy = original.try_clone().unwrap();
        prop_assert_eq!(&copy, &original);

        copy.invert(0..1);
        prop_assert_eq!(original.as_slice(), &bytes[..]);
        prop_assert_ne!(copy.as_slice()[0], original.as_slice()[0]);
    }
}
