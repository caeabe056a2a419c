extern crate locus;
extern crate rand;

use std::fs;

use locus::fs::*;

#[test]
fn memory() {
    let fs = MemoryFS::unix();
    assert!(fs.exists("/"));
    assert!(!fs.exists("/tmp"));
    assert!(!fs.exists(""));

    fs.create_dir("/tmp/inner");
    assert!(fs.exists("/tmp"));
    assert!(fs.exists("/tmp/inner"));

    fs.write("/tmp/inner/a.nfo", "Hello, World!").unwrap();
    assert!(fs.exists("/tmp/inner/a.nfo"));
    assert!(fs.exists("/tmp//inner/./a.nfo"));
    assert!(fs.exists("/tmp/../tmp/inner/a.nfo"));
    assert_eq!(fs.read("/tmp/inner/a.nfo"), Some(b"Hello, World!".to_vec()));

    // The parent directory must exist.
    assert!(fs.write("/var/a.nfo", "").is_err());
    // Directories could not be overwritten.
    assert!(fs.write("/tmp/inner", "").is_err());

    assert!(fs.remove("/tmp/inner"));
    assert!(!fs.exists("/tmp/inner/a.nfo"));
    assert!(fs.exists("/tmp"));
    assert!(!fs.remove("/tmp/inner"));
}

#[test]
fn memory_working_dir() {
    let fs = MemoryFS::unix().with_working_dir("/tmp");
    assert!(fs.exists("/tmp"));
    assert_eq!(fs.working_dir().to_string(), "/tmp");

    fs.write("a.nfo", "").unwrap();
    assert!(fs.exists("/tmp/a.nfo"));
    assert!(fs.exists("a.nfo"));
    assert!(fs.exists("./a.nfo"));
    assert_eq!(fs.absolute("../b.nfo").to_string(), "/b.nfo");

    assert_eq!(fs.to_url("a.nfo").unwrap().as_str(), "file:///tmp/a.nfo");
}

#[test]
fn memory_windows() {
    let fs = MemoryFS::windows();
    assert_eq!(fs.separator(), "\\");
    assert!(fs.exists("c:\\"));

    fs.create_dir("c:\\tmp");
    fs.write("c:\\tmp\\TestFile.txt", "").unwrap();
    assert!(fs.exists("c:\\tmp\\TestFile.txt"));
    assert!(fs.exists("c:/tmp/TestFile.txt"));
    assert!(fs.exists("tmp\\TestFile.txt"));
    assert!(!fs.exists("d:\\tmp\\TestFile.txt"));

    assert_eq!(
        fs.to_url("c:\\tmp\\TestFile.txt").unwrap().as_str(),
        "file:///c:/tmp/TestFile.txt"
    );
}

#[test]
fn disk() {
    let dir = std::env::temp_dir().join(format!("locus-{}", rand::random::<u64>()));
    fs::create_dir_all(dir.join("inner")).unwrap();
    fs::write(dir.join("inner").join("a.nfo"), "Hello, World!").unwrap();

    let root = dir.to_str().unwrap();
    let disk = DiskFS::new();

    let file = format!("{}{}inner{}a.nfo", root, disk.separator(), disk.separator());
    assert!(disk.exists(root));
    assert!(disk.exists(&file));
    assert!(!disk.exists(&format!("{}{}b.nfo", root, disk.separator())));

    let url = disk.to_url(&file).unwrap();
    assert_eq!(url.schema(), "file");
    assert!(url.path().ends_with("/inner/a.nfo"));
    assert!(disk.working_dir().is_absolute());

    fs::remove_dir_all(&dir).unwrap();
}
