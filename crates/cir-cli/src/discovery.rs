//! Directory walk for project-mode parses (§5): skips VCS metadata, build
//! output, vendored trees, and generated files, matching the general shape
//! of `examples/allenanswerzq-llmcc/crates/llmcc-cli/src/discovery.rs`'s
//! own skip-list without adopting its graph-analysis-specific entries.

use std::collections::HashSet;
use std::path::Path;

use cir_error::{Error, Result};
use ignore::WalkBuilder;

const SKIP_DIRS: &[&str] = &[
    ".git",
    "target",
    "node_modules",
    "build",
    "dist",
    "vendor",
    ".venv",
    "venv",
    "__pycache__",
    "test",
    "tests",
    "testing",
    "fixture",
    "fixtures",
];

fn should_skip_dir(name: &str) -> bool {
    SKIP_DIRS.contains(&name)
}

/// Generated-file markers the CLI itself does not want to self-parse.
fn is_generated_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    name.ends_with("_pb2.py")
        || name.ends_with(".pb.go")
        || name.contains(".generated.")
        || name.ends_with("_generated.java")
}

/// Discover the files for one project-mode parse: `explicit` paths are
/// taken as-is, `dirs` are walked recursively, filtered to `extensions`.
/// Explicit paths and discovered paths are deduplicated together.
pub fn discover_files(dirs: &[String], explicit: &[String], extensions: &[&str]) -> Result<Vec<String>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut files = Vec::new();

    for file in explicit {
        if seen.insert(file.clone()) {
            files.push(file.clone());
        }
    }

    for dir in dirs {
        let mut builder = WalkBuilder::new(dir);
        builder
            .standard_filters(true)
            .follow_links(false)
            .filter_entry(|entry| {
                if entry.depth() == 0 {
                    return true;
                }
                match entry.file_type() {
                    Some(ft) if ft.is_dir() => entry
                        .file_name()
                        .to_str()
                        .map(|name| !should_skip_dir(name))
                        .unwrap_or(true),
                    _ => true,
                }
            });

        for entry in builder.build() {
            let entry = entry.map_err(|err| {
                Error::new(cir_error::ErrorKind::Io, format!("failed to walk {dir}"))
                    .with_operation("cir::discover_files")
                    .set_source(err)
            })?;

            if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
                continue;
            }

            let path = entry.path();
            let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if !extensions.contains(&ext) || is_generated_file(path) {
                continue;
            }

            let path_str = path.to_string_lossy().into_owned();
            if seen.insert(path_str.clone()) {
                files.push(path_str);
            }
        }
    }

    if files.is_empty() {
        return Err(Error::file_not_found("no input files matched the selected language")
            .with_operation("cir::discover_files"));
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn explicit_files_pass_through_deduplicated() {
        let files = discover_files(&[], &["a.java".to_string(), "a.java".to_string()], &["java"]).unwrap();
        assert_eq!(files, vec!["a.java".to_string()]);
    }

    #[test]
    fn walks_directory_and_skips_vendored_trees() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("Main.java"), "class Main {}").unwrap();

        let vendored = dir.path().join("node_modules").join("dep");
        fs::create_dir_all(&vendored).unwrap();
        fs::write(vendored.join("Lib.java"), "class Lib {}").unwrap();

        let files = discover_files(&[dir.path().to_string_lossy().into_owned()], &[], &["java"]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("Main.java"));
    }

    #[test]
    fn empty_result_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_files(&[dir.path().to_string_lossy().into_owned()], &[], &["java"]).unwrap_err();
        assert_eq!(err.kind(), cir_error::ErrorKind::FileNotFound);
    }
}
