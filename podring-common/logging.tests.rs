use super::*;

#[test]
fn default_filter_test() {
    let filter = default_filter("podring");

    assert!(filter.starts_with("warn,podring=info"));
    if cfg!(debug_assertions) {
        assert_eq!("warn,podring=info,podring_kube=info", filter);
    } else {
        assert_eq!("warn,podring=info", filter);
    }
}

#[test]
fn default_filter_crate_name_test() {
    assert!(default_filter("pod-ring").starts_with("warn,pod_ring=info"));
}

