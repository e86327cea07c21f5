use proptest::prelude::*;
use repokit_fs::{NormalizedPath, validate_relative_path};

proptest! {
    #[test]
    fn test_normalized_path_never_contains_backslash(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        prop_assert!(!path.as_str().contains('\\'));
    }

    #[test]
    fn test_native_round_trip(s in "[a-zA-Z0-9_./-]{0,40}") {
        let path = NormalizedPath::new(&s);
        let roundtripped = NormalizedPath::new(path.to_native());
        prop_assert_eq!(path, roundtripped);
    }

    #[test]
    fn test_validated_paths_never_escape(segments in prop::collection::vec("[a-zA-Z0-9_.-]{1,8}", 1..5)) {
        let raw = segments.join("/");
        if let Ok(path) = validate_relative_path(&raw) {
            prop_assert!(!path.as_str().starts_with('/'));
            prop_assert!(!path.as_str().split('/').any(|seg| seg == ".."));
        }
    }
}
