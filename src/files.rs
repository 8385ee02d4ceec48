use std::path::{Path, PathBuf};
use anyhow::ensure;
use walkdir::WalkDir;

fn wanted(path: &Path, exts: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else { return false };
    if name.ends_with(".d.ts") {
        return false;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| exts.iter().any(|x| x.trim_start_matches('.') == e))
}

/// Source files under `dir` with one of `exts`, sorted by path. Type
/// declaration files (`.d.ts`) are never included.
pub fn collect(dir: &Path, exts: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    ensure!(dir.is_dir(), "{} is not a directory", dir.display());

    Ok(WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|p| wanted(p, exts))
        .collect())
}

pub fn relative<'a>(path: &'a Path, base: &Path) -> &'a Path {
    path.strip_prefix(base).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn collects_matching_sources() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("pages/admin")).unwrap();
        for f in ["App.tsx", "types.d.ts", "pages/Home.tsx", "pages/admin/api.ts", "pages/style.css", "README"] {
            fs::write(root.join(f), "").unwrap();
        }

        let exts = vec!["ts".to_owned(), ".tsx".to_owned()];
        let got = collect(root, &exts).unwrap()
            .iter()
            .map(|p| relative(p, root).to_string_lossy().replace('\\', "/"))
            .collect::<Vec<_>>();

        assert_eq!(got, ["App.tsx", "pages/Home.tsx", "pages/admin/api.ts"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect(&dir.path().join("nope"), &["ts".to_owned()]).is_err());
    }
}
