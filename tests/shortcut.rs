extern crate locus;

use locus::shortcut::ShortcutResolver;

#[test]
fn basic() {
    let mut shortcuts = ShortcutResolver::new();
    assert!(shortcuts.is_empty());

    shortcuts.add("home:", "file://docs/").unwrap();
    shortcuts.add("aa:", "home:").unwrap();
    shortcuts.add("bb:", "aa:locus/").unwrap();

    assert!(shortcuts.has("home:"));
    assert!(shortcuts.has("aa:"));
    assert!(shortcuts.has("bb:"));
    assert!(!shortcuts.has("abc:"));
    assert_eq!(shortcuts.len(), 3);

    assert_eq!(shortcuts.resolve("home:"), Some("file://docs/".into()));
    assert_eq!(shortcuts.resolve("bb:"), Some("file://docs/locus/".into()));
    assert_eq!(
        shortcuts.resolve("bb:a.nfo"),
        Some("file://docs/locus/a.nfo".into())
    );

    shortcuts.add("home:", "http://www.rust-lang.org/").unwrap();
    assert_eq!(
        shortcuts.resolve("bb:"),
        Some("http://www.rust-lang.org/locus/".into())
    );
}

#[test]
fn passthrough() {
    let mut shortcuts = ShortcutResolver::new();
    shortcuts.add("assets:", "classpath:assets/").unwrap();

    // Plain paths and drive letters are left untouched.
    assert_eq!(shortcuts.resolve("/tmp/a.nfo"), Some("/tmp/a.nfo".into()));
    assert_eq!(shortcuts.resolve("c:/tmp/a.nfo"), Some("c:/tmp/a.nfo".into()));
    // Unknown shortcuts.
    assert_eq!(shortcuts.resolve("other:a.nfo"), None);
    // Expansion stops at the first unknown prefix.
    assert_eq!(
        shortcuts.resolve("assets:a.nfo"),
        Some("classpath:assets/a.nfo".into())
    );
}

#[test]
fn cyclic() {
    let mut shortcuts = ShortcutResolver::new();
    shortcuts.add("aa:", "bb:").unwrap();
    shortcuts.add("bb:", "aa:").unwrap();
    assert_eq!(shortcuts.resolve("aa:a.nfo"), None);
}

#[test]
fn err() {
    let mut shortcuts = ShortcutResolver::new();
    // Shortcut MUST ends with a colon (':').
    assert!(shortcuts.add("home", "file://docs/").is_err());
    // Shortcut MUST be at least 2 chars to not be confused with DOS drive letters.
    assert!(shortcuts.add(":", "file://docs/").is_err());
    assert!(shortcuts.add("c:", "file://docs/").is_err());
    // Fullname must end in a '/' (dir) or ':' (other shortcut).
    assert!(shortcuts.add("home:", "file://docs").is_err());
    assert!(shortcuts.is_empty());
}
