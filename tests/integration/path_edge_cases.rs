use dupsweep::actions::DeletionRecord;
use dupsweep::duplicates::{SweepConfig, Sweeper};
use std::fs::{self, File};
use tempfile::tempdir;

#[test]
fn test_names_with_spaces_and_unicode() {
    let dir = tempdir().unwrap();
    for name in [
        "take one.wav",
        "take one 2.wav",
        "café 🦀.wav",
        "café 🦀 2.wav",
        "special_!@#$%^&()_+.wav",
        "special_!@#$%^&()_+ 2.wav",
    ] {
        File::create(dir.path().join(name)).unwrap();
    }

    let summary = Sweeper::new(SweepConfig::new(dir.path()))
        .run(&mut Vec::<DeletionRecord>::new())
        .unwrap();

    assert_eq!(summary.removed_count(), 3);
    assert!(dir.path().join("café 🦀.wav").exists());
    assert!(!dir.path().join("café 🦀 2.wav").exists());
}

#[test]
fn test_copy_of_copy_chain() {
    let dir = tempdir().unwrap();
    for name in ["a.wav", "a 2.wav", "a 2 2.wav"] {
        File::create(dir.path().join(name)).unwrap();
    }

    Sweeper::new(SweepConfig::new(dir.path()))
        .run(&mut Vec::<DeletionRecord>::new())
        .unwrap();

    // `a 2 2.wav` is matched against `a 2.wav`, which sorts after it and is
    // itself removed against `a.wav`.
    assert!(dir.path().join("a.wav").exists());
    assert!(!dir.path().join("a 2.wav").exists());
    assert!(!dir.path().join("a 2 2.wav").exists());
}

#[test]
fn test_marker_named_directory_is_not_deleted() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("a.wav")).unwrap();
    fs::create_dir(dir.path().join("a 2.wav")).unwrap();

    let summary = Sweeper::new(SweepConfig::new(dir.path()))
        .run(&mut Vec::<DeletionRecord>::new())
        .unwrap();

    assert_eq!(summary.matched, 0);
    assert!(dir.path().join("a 2.wav").is_dir());
}

#[test]
fn test_deeply_nested_path() {
    let dir = tempdir().unwrap();
    let mut deep = dir.path().to_path_buf();
    for i in 0..20 {
        deep.push(format!("level_{i}"));
    }
    fs::create_dir_all(&deep).unwrap();
    File::create(deep.join("x.wav")).unwrap();
    File::create(deep.join("x 2.wav")).unwrap();

    let summary = Sweeper::new(SweepConfig::new(dir.path()))
        .run(&mut Vec::<DeletionRecord>::new())
        .unwrap();

    assert_eq!(summary.removed, vec![deep.join("x 2.wav")]);
}

#[cfg(unix)]
#[test]
fn test_invalid_utf8_duplicate_is_removed() {
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    let odd = std::ffi::OsStr::from_bytes(b"\xff\xfe 2.wav");
    let odd_original = std::ffi::OsStr::from_bytes(b"\xff\xfe.wav");

    // If the filesystem doesn't support this, skip the test
    if File::create(dir.path().join(odd)).is_ok() {
        File::create(dir.path().join(odd_original)).unwrap();

        let summary = Sweeper::new(SweepConfig::new(dir.path()))
            .run(&mut Vec::<DeletionRecord>::new())
            .unwrap();

        assert_eq!(summary.visited, 2);
        assert_eq!(summary.matched, 1);
        assert_eq!(summary.removed, vec![dir.path().join(odd)]);
        assert!(!dir.path().join(odd).exists());
        assert!(dir.path().join(odd_original).exists());
    }
}

#[cfg(unix)]
#[test]
fn test_invalid_utf8_duplicate_without_original_is_kept() {
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    let odd = std::ffi::OsStr::from_bytes(b"\xfa 2.wav");

    if File::create(dir.path().join(odd)).is_ok() {
        let summary = Sweeper::new(SweepConfig::new(dir.path()))
            .run(&mut Vec::<DeletionRecord>::new())
            .unwrap();

        assert_eq!(summary.kept, 1);
        assert!(dir.path().join(odd).exists());
    }
}
