#![allow(non_snake_case)]

use super::*;
use crate::fsio::MemoryFs;

#[test]
fn discover_scripts___returns_scripts_sorted_by_filename() {
    let fs = MemoryFs::new();
    fs.insert_file("/src/redis/push.lua", b"push".to_vec());
    fs.insert_file("/src/redis/ack.lua", b"ack".to_vec());
    fs.insert_file("/src/redis/lock.lua", b"lock".to_vec());

    let scripts = discover_scripts(&fs, Path::new("/src/redis")).unwrap();

    let names: Vec<&str> = scripts.iter().map(|s| s.file_name.as_str()).collect();
    assert_eq!(names, vec!["ack.lua", "lock.lua", "push.lua"]);
}

#[test]
fn discover_scripts___ignores_non_lua_files() {
    let fs = MemoryFs::new();
    fs.insert_file("/src/lock.lua", b"lock".to_vec());
    fs.insert_file("/src/README.md", b"docs".to_vec());
    fs.insert_file("/src/notes.txt", b"notes".to_vec());

    let scripts = discover_scripts(&fs, Path::new("/src")).unwrap();

    assert_eq!(scripts.len(), 1);
    assert_eq!(scripts[0].file_name, "lock.lua");
    assert_eq!(scripts[0].path, PathBuf::from("/src/lock.lua"));
}

#[test]
fn discover_scripts___missing_source_directory_yields_empty() {
    let fs = MemoryFs::new();

    let scripts = discover_scripts(&fs, Path::new("/absent")).unwrap();

    assert!(scripts.is_empty());
}

#[test]
fn discover_scripts___empty_directory_yields_empty() {
    let fs = MemoryFs::new();
    fs.insert_dir("/src/redis");

    let scripts = discover_scripts(&fs, Path::new("/src/redis")).unwrap();

    assert!(scripts.is_empty());
}

#[test]
fn discover_scripts___does_not_recurse_into_subdirectories() {
    let fs = MemoryFs::new();
    fs.insert_file("/src/lock.lua", b"lock".to_vec());
    fs.insert_file("/src/vendor/extra.lua", b"extra".to_vec());

    let scripts = discover_scripts(&fs, Path::new("/src")).unwrap();

    assert_eq!(scripts.len(), 1);
    assert_eq!(scripts[0].file_name, "lock.lua");
}

#[cfg(unix)]
#[test]
fn discover_scripts___non_utf8_filename_is_invalid_script_path() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let fs = MemoryFs::new();
    let bad = PathBuf::from("/src").join(OsStr::from_bytes(b"bad\xFFname.lua"));
    fs.insert_file(bad, b"x".to_vec());

    let err = discover_scripts(&fs, Path::new("/src")).unwrap_err();

    assert!(matches!(err, BundleError::InvalidScriptPath(_)));
}
