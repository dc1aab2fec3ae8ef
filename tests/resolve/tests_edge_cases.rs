//! Unusual symbols must fall through to "not found", never panic.

use crate::helpers::resolver_helpers::*;
use rstest::rstest;

#[test]
fn test_empty_symbol_without_prefixes() {
    let (resolver, fs) = memory_resolver(&["/lib/.php"], |b| {
        b.register_prefix("Foo_", "/lib")?;
        Ok(())
    });

    assert_unresolved(&resolver, "");
    assert_eq!(fs.probe_count(), 0);
}

#[test]
fn test_empty_prefix_key_matches_empty_symbol() {
    let (resolver, fs) = memory_resolver(&[], |b| {
        b.register_prefix("", "/lib")?;
        Ok(())
    });

    assert_unresolved(&resolver, "");
    assert_eq!(fs.probes(), vec![path("/lib/.php")]);
}

#[test]
fn test_empty_prefix_key_matches_any_flat_symbol() {
    let (resolver, _fs) = memory_resolver(&["/lib/Any/Thing.php"], |b| {
        b.register_prefix("", "/lib")?;
        Ok(())
    });

    assert_resolves(&resolver, "Any_Thing", "/lib/Any/Thing.php");
}

#[rstest]
#[case("\\Foo\\Bar")]
#[case("Foo\\Bar")]
fn test_leading_separator_is_ignored(#[case] symbol: &str) {
    let (resolver, _fs) = memory_resolver(&["/lib/Foo/Bar.php"], |b| {
        b.register_namespace("Foo", "/lib")?;
        Ok(())
    });

    assert_resolves(&resolver, symbol, "/lib/Foo/Bar.php");
}

#[test]
fn test_only_one_leading_separator_stripped() {
    let (resolver, _fs) = memory_resolver(&["/lib/Foo/Bar.php"], |b| {
        b.register_namespace("Foo", "/lib")?;
        Ok(())
    });

    // "\\Foo\\Bar" after one strip has namespace "\Foo", which "Foo" does not prefix
    assert_unresolved(&resolver, "\\\\Foo\\Bar");
}

#[rstest]
#[case("\\")]
#[case("\\\\")]
#[case("Foo\\")]
#[case("_")]
#[case("__")]
#[case("Foo\\\\Bar")]
#[case("Foo\\/etc/passwd")]
fn test_malformed_symbols_do_not_panic(#[case] symbol: &str) {
    let (resolver, _fs) = memory_resolver(&[], |b| {
        b.register_namespace("", "/lib")?;
        b.register_prefix("", "/lib")?;
        b.register_namespace_fallbacks(vec!["/fb"]);
        b.register_prefix_fallbacks(vec!["/fb"]);
        Ok(())
    });

    assert_unresolved(&resolver, symbol);
}

#[test]
fn test_candidates_stay_inside_registered_directory() {
    let (resolver, fs) = memory_resolver(&[], |b| {
        b.register_namespace("Foo", "/lib")?;
        Ok(())
    });

    resolver.resolve("Foo\\/etc\\passwd");
    assert!(fs.probes().iter().all(|p| p.starts_with("/lib")));
    assert!(fs.probes().iter().all(|p| !has_parent_dir(p)));
}

#[rstest]
#[case("..\\..\\etc\\passwd", "/lib/etc/passwd.php")]
#[case("Foo\\..\\..\\passwd", "/lib/Foo/passwd.php")]
#[case("a/../../etc\\passwd", "/lib/a/etc/passwd.php")]
fn test_parent_segments_never_climb_out(#[case] symbol: &str, #[case] expected: &str) {
    let (resolver, fs) = memory_resolver(&[], |b| {
        b.register_namespace("", "/lib")?;
        Ok(())
    });

    assert_unresolved(&resolver, symbol);
    assert_eq!(fs.probes(), vec![path(expected)]);
    assert!(fs.probes().iter().all(|p| !has_parent_dir(p)));
}

#[test]
fn test_non_ascii_symbol() {
    let (resolver, _fs) = memory_resolver(&["/lib/Ünïcode/Klasse.php"], |b| {
        b.register_namespace("Ünïcode", "/lib")?;
        Ok(())
    });

    assert_resolves(&resolver, "Ünïcode\\Klasse", "/lib/Ünïcode/Klasse.php");
}

#[test]
fn test_nonexistent_registered_directory_is_not_an_error() {
    let mut builder = autoload::Resolver::builder();
    builder
        .register_namespace("Foo", "/definitely/not/here")
        .expect("Registration never checks the disk");
    let resolver = builder.build();

    assert_unresolved(&resolver, "Foo\\Bar");
}

#[test]
fn test_empty_directory_list_fails_fast() {
    let mut builder = autoload::Resolver::builder();
    let err = builder
        .register_prefix("Cache_", Vec::<String>::new())
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "prefix 'Cache_' registered with an empty directory list"
    );
}
