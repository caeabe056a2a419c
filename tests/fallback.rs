extern crate locus;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use locus::bundle::Manifest;
use locus::errors::*;
use locus::fs::MemoryFS;
use locus::prelude::*;

fn classpath() -> Arc<dyn Loader> {
    let mut manifest = Manifest::new("app");
    manifest.insert("META-INF/x.nfo");
    Arc::new(ClasspathLoader::new(Arc::new(manifest)))
}

/// A loader that resolves the `known` locations and records every attempt.
fn recorder(known: &'static [&'static str]) -> (Arc<dyn Loader>, Arc<Mutex<Vec<String>>>) {
    let attempts = Arc::new(Mutex::new(Vec::new()));
    let recorded = attempts.clone();

    let func = move |location: &str, _: &mut Context| {
        recorded.lock().unwrap().push(location.to_owned());
        if known.iter().any(|v| *v == location) {
            Url::new(format!("mem://recorder/{}", location)).ok()
        } else {
            None
        }
    };

    let loader: Arc<dyn Loader> = Arc::new(FnLoader::new("Recorder", func));

    (loader, attempts)
}

#[test]
fn scheme_stripping() {
    let loader = FallbackLoader::new(classpath(), "META-INF").unwrap();
    let mut ctx = Context::new();

    let expected = Url::new("classpath://app/META-INF/x.nfo").unwrap();
    for v in &["classpath:META-INF/x.nfo", "META-INF/x.nfo", "classpath:x.nfo", "x.nfo"] {
        let info = loader.resolve(v, &mut ctx);
        assert_eq!(info.url(), Some(&expected), "{}", v);
        // Attributed to the wrapped loader.
        assert_eq!(info.source_entity(), "ClasspathLoader");
    }

    assert!(!loader.resolve("classpath:y.nfo", &mut ctx).is_resolved());
    assert_eq!(loader.name(), "FallbackLoader(ClasspathLoader)");
    assert_eq!(loader.scheme(), Some("classpath"));
}

#[test]
fn foreign_scheme() {
    let (inner, attempts) = recorder(&["META-INF/x.nfo"]);
    let loader = FallbackLoader::new(inner, "META-INF").unwrap();

    let info = loader.resolve("unknown:x.nfo", &mut Context::new());
    assert!(info.is_resolved());
    assert_eq!(info.search_path(), "META-INF/x.nfo");
    assert_eq!(*attempts.lock().unwrap(), vec!["unknown:x.nfo", "META-INF/x.nfo"]);

    // The same holds for a loader claiming another scheme.
    let loader = FallbackLoader::new(classpath(), "META-INF").unwrap();
    let info = loader.resolve("file:x.nfo", &mut Context::new());
    assert_eq!(info.url().unwrap().as_str(), "classpath://app/META-INF/x.nfo");
    assert_eq!(info.source_entity(), "ClasspathLoader");
}

#[test]
fn attempts() {
    let (inner, attempts) = recorder(&["root/x.nfo"]);
    let loader = FallbackLoader::with_prefixes(inner, vec!["root", "other"]).unwrap();
    let mut ctx = Context::new();

    // Stops at the first success.
    let info = loader.resolve("x.nfo", &mut ctx);
    assert!(info.is_resolved());
    assert_eq!(info.search_path(), "root/x.nfo");
    assert_eq!(info.source_entity(), "Recorder");
    assert_eq!(*attempts.lock().unwrap(), vec!["x.nfo", "root/x.nfo"]);

    // Tries every prefix and returns the last failure.
    attempts.lock().unwrap().clear();
    let info = loader.resolve("mem:y.nfo", &mut ctx);
    assert!(!info.is_resolved());
    assert_eq!(info.search_path(), "other/y.nfo");
    assert_eq!(info.source_entity(), "Unknown");
    assert_eq!(
        *attempts.lock().unwrap(),
        vec!["mem:y.nfo", "root/y.nfo", "other/y.nfo"]
    );

    // Skips the prefixes the location already starts with.
    attempts.lock().unwrap().clear();
    assert!(!loader.resolve("root/y.nfo", &mut ctx).is_resolved());
    assert_eq!(*attempts.lock().unwrap(), vec!["root/y.nfo", "other/root/y.nfo"]);

    attempts.lock().unwrap().clear();
    assert!(!loader.resolve("mem:other/y.nfo", &mut ctx).is_resolved());
    assert_eq!(
        *attempts.lock().unwrap(),
        vec!["mem:other/y.nfo", "root/other/y.nfo"]
    );
}

#[test]
fn resolved_directly() {
    let (inner, attempts) = recorder(&["x.nfo"]);
    let loader = FallbackLoader::new(inner, "root").unwrap();

    assert!(loader.resolve("x.nfo", &mut Context::new()).is_resolved());
    assert_eq!(*attempts.lock().unwrap(), vec!["x.nfo"]);
}

#[test]
fn separators() {
    let fs = MemoryFS::unix();
    fs.create_dir("/tmp/inner");
    fs.write("/tmp/inner/a.nfo", "").unwrap();

    let local = Arc::new(LocalLoader::with_filesystem(Arc::new(fs)));
    let loader = FallbackLoader::new(local, "/tmp/inner/").unwrap();
    let mut ctx = Context::new();

    let expected = Url::new("file:///tmp/inner/a.nfo").unwrap();
    assert_eq!(loader.resolve("a.nfo", &mut ctx).url(), Some(&expected));
    assert_eq!(loader.resolve("file:a.nfo", &mut ctx).url(), Some(&expected));
    assert_eq!(loader.resolve("/a.nfo", &mut ctx).url(), Some(&expected));

    let fs = MemoryFS::windows();
    fs.create_dir("c:\\tmp");
    fs.write("c:\\tmp\\TestFile.txt", "").unwrap();

    let local = Arc::new(LocalLoader::with_filesystem(Arc::new(fs)));
    let loader = FallbackLoader::new(local, "c:\\tmp").unwrap();

    let info = loader.resolve("TestFile.txt", &mut ctx);
    assert_eq!(info.search_path(), "c:\\tmp\\TestFile.txt");
    assert_eq!(info.url().unwrap().as_str(), "file:///c:/tmp/TestFile.txt");
}

#[test]
fn err() {
    match FallbackLoader::new(classpath(), "") {
        Err(Error::EmptyFallback) => {}
        _ => panic!("empty prefixes should be rejected."),
    }

    let mut loader = FallbackLoader::with_prefixes(classpath(), Vec::<String>::new()).unwrap();
    assert!(loader.prefixes().is_empty());
    assert!(loader.add_prefix("").is_err());
    loader.add_prefix("META-INF").unwrap();
    assert_eq!(loader.prefixes(), &["META-INF".to_owned()]);

    let counter = Arc::new(AtomicUsize::new(0));
    let calls = counter.clone();
    let inner = FnLoader::new("Never", move |_: &str, _: &mut Context| {
        calls.fetch_add(1, Ordering::SeqCst);
        None
    });

    let loader = FallbackLoader::with_prefixes(Arc::new(inner), vec!["a", "b", "c"]).unwrap();
    assert!(!loader.resolve("x.nfo", &mut Context::new()).is_resolved());
    assert_eq!(counter.load(Ordering::SeqCst), 4);
}
