/// Shared filesystem helpers.
pub mod fs {
    use std::fs;
    use std::io;

    use camino::{Utf8Path, Utf8PathBuf};

    /// Ensure a directory exists, creating it and any missing ancestors.
    ///
    /// Succeeds when `path` is already a directory. Fails when `path` or one of
    /// its ancestors exists as something other than a directory.
    pub fn ensure_dir(path: &Utf8Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    /// Join a `/`-separated relative path onto `base` using host separators.
    ///
    /// Empty segments are dropped, so `a//b/` and `a/b` resolve to the same
    /// target.
    pub fn join_logical(base: &Utf8Path, relative: &str) -> Utf8PathBuf {
        relative
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(base.to_owned(), |path, segment| path.join(segment))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn join_logical_uses_host_components() {
            let base = Utf8Path::new("root");
            let joined = join_logical(base, "a/b/c");
            let expected: Utf8PathBuf = ["root", "a", "b", "c"].iter().collect();
            assert_eq!(joined, expected);
        }

        #[test]
        fn join_logical_skips_empty_segments() {
            let base = Utf8Path::new("root");
            assert_eq!(join_logical(base, "a//b/"), join_logical(base, "a/b"));
            assert_eq!(join_logical(base, ""), base.to_owned());
        }

        #[test]
        fn ensure_dir_is_idempotent() {
            let tmp = tempfile::TempDir::new().unwrap();
            let base = Utf8Path::from_path(tmp.path()).unwrap();
            let target = base.join("x").join("y");

            ensure_dir(&target).unwrap();
            ensure_dir(&target).unwrap();
            assert!(target.is_dir());
        }

        #[test]
        fn ensure_dir_rejects_file_in_the_way() {
            let tmp = tempfile::TempDir::new().unwrap();
            let base = Utf8Path::from_path(tmp.path()).unwrap();
            let blocker = base.join("blocker");
            fs::write(&blocker, b"not a directory").unwrap();

            assert!(ensure_dir(&blocker).is_err());
            assert!(ensure_dir(&blocker.join("child")).is_err());
        }
    }
}
