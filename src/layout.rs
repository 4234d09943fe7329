use anyhow::{Context, Result, anyhow, bail};
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde::Deserialize;

use crate::util::fs::join_logical;

#[derive(RustEmbed)]
#[folder = "layouts"]
struct Layouts;

const DEFAULT_LAYOUT: &str = "default.toml";

/// A base path plus the ordered, `/`-separated directories to create under it.
///
/// Layouts are compiled into the binary; nothing is read from disk at runtime.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layout {
    pub base: Utf8PathBuf,
    pub dirs: Vec<String>,
}

impl Layout {
    /// The layout provisioned when no overrides are given.
    pub fn builtin() -> Result<Self> {
        let file = Layouts::get(DEFAULT_LAYOUT)
            .ok_or_else(|| anyhow!("embedded layout `{}` missing", DEFAULT_LAYOUT))?;
        let raw = std::str::from_utf8(file.data.as_ref())
            .with_context(|| format!("decoding embedded layout `{}`", DEFAULT_LAYOUT))?;
        Self::parse(raw).with_context(|| format!("loading embedded layout `{}`", DEFAULT_LAYOUT))
    }

    fn parse(raw: &str) -> Result<Self> {
        let layout: Layout = toml::from_str(raw).context("parsing layout")?;
        layout.validate()?;
        Ok(layout)
    }

    fn validate(&self) -> Result<()> {
        if self.dirs.is_empty() {
            bail!("layout lists no directories");
        }
        for dir in &self.dirs {
            if dir.starts_with('/') || dir.contains('\\') {
                bail!("layout entry `{dir}` must be a relative, `/`-separated path");
            }
            if dir.split('/').any(|segment| segment == "..") {
                bail!("layout entry `{dir}` escapes the base path");
            }
        }
        Ok(())
    }

    /// Full target paths for every entry under `base`, in layout order.
    pub fn targets<'a>(&'a self, base: &'a Utf8Path) -> impl Iterator<Item = Utf8PathBuf> + 'a {
        self.dirs.iter().map(move |dir| join_logical(base, dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_layout_loads() {
        let layout = Layout::builtin().unwrap();
        assert_eq!(layout.base, Utf8PathBuf::from("mathquest/lib"));
        assert_eq!(layout.dirs.len(), 29);
        assert_eq!(layout.dirs.first().map(String::as_str), Some("core/constants"));
        assert_eq!(layout.dirs.last().map(String::as_str), Some("l10n"));
    }

    #[test]
    fn targets_follow_layout_order() {
        let layout = Layout::parse("base = 'x'\ndirs = ['a/b', 'a/c']\n").unwrap();
        let base = Utf8Path::new("/tmp/x");
        let targets: Vec<_> = layout.targets(base).collect();
        assert_eq!(targets, vec![base.join("a").join("b"), base.join("a").join("c")]);
    }

    #[test]
    fn rejects_parent_segments() {
        let err = Layout::parse("base = 'x'\ndirs = ['a/../b']\n").unwrap_err();
        assert!(err.to_string().contains("escapes"));
    }

    #[test]
    fn rejects_absolute_entries() {
        assert!(Layout::parse("base = 'x'\ndirs = ['/etc']\n").is_err());
    }

    #[test]
    fn rejects_empty_layout() {
        assert!(Layout::parse("base = 'x'\ndirs = []\n").is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(Layout::parse("base = 'x'\ndirs = ['a']\nfiles = ['b']\n").is_err());
    }
}
