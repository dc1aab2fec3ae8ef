//! Registration order is priority order.

use crate::helpers::resolver_helpers::*;

#[test]
fn test_earlier_namespace_entry_wins() {
    let (resolver, fs) = memory_resolver(
        &["/general/Foo/Bar/Baz.php", "/specific/Foo/Bar/Baz.php"],
        |b| {
            b.register_namespace("Foo", "/general")?;
            b.register_namespace("Foo\\Bar", "/specific")?;
            Ok(())
        },
    );

    assert_resolves(&resolver, "Foo\\Bar\\Baz", "/general/Foo/Bar/Baz.php");
    assert!(
        !fs.was_probed(&path("/specific/Foo/Bar/Baz.php")),
        "Later entry must not be probed after a hit"
    );
}

#[test]
fn test_later_entry_used_when_earlier_misses() {
    let (resolver, _fs) = memory_resolver(&["/specific/Foo/Bar/Baz.php"], |b| {
        b.register_namespace("Foo", "/general")?;
        b.register_namespace("Foo\\Bar", "/specific")?;
        Ok(())
    });

    assert_resolves(&resolver, "Foo\\Bar\\Baz", "/specific/Foo/Bar/Baz.php");
}

#[test]
fn test_directory_list_order_within_entry() {
    let (resolver, fs) = memory_resolver(&["/a/Foo/X.php", "/b/Foo/X.php"], |b| {
        b.register_namespace("Foo", vec!["/b", "/a"])?;
        Ok(())
    });

    assert_resolves(&resolver, "Foo\\X", "/b/Foo/X.php");
    assert_eq!(fs.probe_count(), 1);
}

#[test]
fn test_reregistration_keeps_first_position() {
    let (resolver, _fs) = memory_resolver(&["/one/Foo/X.php", "/two/Foo/X.php"], |b| {
        b.register_namespace("Foo", "/stale")?;
        b.register_namespace("Fo", "/two")?;
        b.register_namespace("Foo", "/one")?;
        Ok(())
    });

    let keys: Vec<_> = resolver.namespaces().keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["Foo", "Fo"]);
    assert_resolves(&resolver, "Foo\\X", "/one/Foo/X.php");
}

#[test]
fn test_prefix_priority() {
    let (resolver, fs) = memory_resolver(
        &["/generic/Zend/Cache/Core.php", "/cache/Zend/Cache/Core.php"],
        |b| {
            b.register_prefixes(vec![("Zend_", "/generic"), ("Zend_Cache_", "/cache")])?;
            Ok(())
        },
    );

    assert_resolves(&resolver, "Zend_Cache_Core", "/generic/Zend/Cache/Core.php");
    assert!(!fs.was_probed(&path("/cache/Zend/Cache/Core.php")));
}

#[test]
fn test_raw_prefix_match_is_not_segment_aware() {
    // Known caveat: "Foo" also claims namespace "FooBar"
    let (resolver, _fs) = memory_resolver(&["/foo/FooBar/Thing.php"], |b| {
        b.register_namespace("Foo", "/foo")?;
        Ok(())
    });

    assert_resolves(&resolver, "FooBar\\Thing", "/foo/FooBar/Thing.php");
}

#[test]
fn test_non_matching_entries_are_skipped() {
    let (resolver, fs) = memory_resolver(&["/acme/Acme/Mail.php"], |b| {
        b.register_namespace("Other", "/other")?;
        b.register_namespace("Acme", "/acme")?;
        Ok(())
    });

    assert_resolves(&resolver, "Acme\\Mail", "/acme/Acme/Mail.php");
    assert_eq!(fs.probes(), vec![path("/acme/Acme/Mail.php")]);
}
