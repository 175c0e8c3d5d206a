use std::fs;
use std::io;
use std::path::PathBuf;
use predicates::function::FnPredicate;
use predicates::prelude::predicate;
use tempfile::TempDir;

/// A predicate that always passes, it prints the content so it shows up in the test output.
pub fn print(message: &str) -> FnPredicate<fn(&str) -> bool, str> {
    println!("{}:", message);
    predicate::function(|content| {
        println!("{}", content);
        true
    })
}

pub fn build_temp_file(temp_dir: &TempDir, base: &str, extension: &str) -> PathBuf {
    let mut path_buf = temp_dir.path().to_path_buf();
    path_buf.push(format!("{}.{}", base, extension));

    println!("{} file: {}",
        base.replace('_', " "),
        path_buf.display()
    );

    path_buf
}

/// Writes `content` to `<base>.json` in the temp dir.
pub fn write_temp_json_file(temp_dir: &TempDir, base: &str, content: &str) -> io::Result<PathBuf> {
    let path_buf = build_temp_file(temp_dir, base, "json");
    fs::write(&path_buf, content)?;

    Ok(path_buf)
}
