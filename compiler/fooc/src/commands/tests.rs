use super::*;
use pretty_assertions::assert_eq;

#[test]
fn missing_source_is_reported_by_path() {
    let path = std::env::temp_dir().join("fooc-no-such-dir/missing.foo");
    let path = path.to_string_lossy();
    assert_eq!(
        read_source(&path),
        Err(format!("fooc: no source file at '{path}'"))
    );
}

#[test]
fn existing_source_is_read() {
    let path = std::env::temp_dir().join(format!("fooc-read-{}.foo", std::process::id()));
    std::fs::write(&path, "let x = 1\n").unwrap();
    let read = read_source(&path.to_string_lossy());
    std::fs::remove_file(&path).unwrap();
    assert_eq!(read, Ok("let x = 1\n".to_string()));
}
