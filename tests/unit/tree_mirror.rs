use std::fs;
use svgconv::mirror_directory_tree;
use tempfile::TempDir;
use walkdir::WalkDir;

fn relative_dirs(root: &std::path::Path) -> Vec<std::path::PathBuf> {
    let mut dirs: Vec<_> = WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    dirs.sort();
    dirs
}

#[test]
fn test_every_source_directory_is_mirrored() {
    let src = TempDir::new().unwrap();
    for dir in ["icons/sub", "icons/empty", "brands/a/b/c", "misc"] {
        fs::create_dir_all(src.path().join(dir)).unwrap();
    }
    fs::write(src.path().join("icons/a.svg"), "<svg/>").unwrap();

    let out = TempDir::new().unwrap();
    let target = out.path().join("mirror");
    mirror_directory_tree(src.path(), &target).unwrap();

    assert_eq!(relative_dirs(src.path()), relative_dirs(&target));
    assert!(!target.join("icons/a.svg").exists());
}

#[test]
fn test_mirror_is_idempotent_and_keeps_existing_content() {
    let src = TempDir::new().unwrap();
    fs::create_dir_all(src.path().join("icons")).unwrap();

    let out = TempDir::new().unwrap();
    fs::create_dir_all(out.path().join("icons")).unwrap();
    fs::write(out.path().join("icons/keep.png"), b"previous").unwrap();

    let first = mirror_directory_tree(src.path(), out.path()).unwrap();
    let second = mirror_directory_tree(src.path(), out.path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(fs::read(out.path().join("icons/keep.png")).unwrap(), b"previous");
}
