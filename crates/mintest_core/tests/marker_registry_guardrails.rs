use std::collections::HashMap;

use mintest_core::markers::{self, MarkerId};

#[test]
fn marker_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, MarkerId> = HashMap::new();

    for info in markers::MARKERS {
        assert_eq!(
            markers::from_str(info.canonical),
            Some(info.id),
            "marker canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            markers::as_str(info.id),
            info.canonical,
            "marker as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate marker spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }

        for &alias in info.aliases {
            assert_eq!(
                markers::from_str(alias),
                Some(info.id),
                "marker alias not resolvable: {}",
                alias
            );
            if let Some(prev) = seen.insert(alias, info.id) {
                panic!("duplicate marker alias spelling {:?}: {:?} and {:?}", alias, prev, info.id);
            }
        }
    }
}

#[test]
fn unknown_marker_does_not_resolve() {
    assert_eq!(markers::from_str("fixture"), None);
    assert_eq!(markers::from_str(""), None);
}
