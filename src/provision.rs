use std::fmt;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

use crate::util::fs::{ensure_dir, join_logical};

/// Why a single directory could not be provisioned.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Error creating {path}: {source}")]
    DirectoryCreation {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result of provisioning one layout entry.
#[derive(Debug)]
pub enum Outcome {
    Created(Utf8PathBuf),
    Failed(ProvisionError),
}

impl Outcome {
    pub fn path(&self) -> &Utf8Path {
        match self {
            Outcome::Created(path) => path,
            Outcome::Failed(ProvisionError::DirectoryCreation { path, .. }) => path,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Created(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created(path) => write!(f, "Created: {path}"),
            Outcome::Failed(err) => write!(f, "{err}"),
        }
    }
}

/// Lazily provisions each entry of `relative` under `base`, in order.
///
/// Every call to `next` performs the filesystem work for exactly one entry, so
/// the iterator is single-pass. Failures are yielded, never propagated.
pub fn provision<'a, I>(base: &'a Utf8Path, relative: I) -> Provision<'a, I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Provision {
        base,
        entries: relative.into_iter(),
    }
}

pub struct Provision<'a, I> {
    base: &'a Utf8Path,
    entries: I,
}

impl<I> Iterator for Provision<'_, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Outcome;

    fn next(&mut self) -> Option<Outcome> {
        let entry = self.entries.next()?;
        let path = join_logical(self.base, entry.as_ref());
        let outcome = match ensure_dir(&path) {
            Ok(()) => {
                tracing::debug!(%path, "directory ready");
                Outcome::Created(path)
            }
            Err(source) => {
                tracing::debug!(%path, error = %source, "directory creation failed");
                Outcome::Failed(ProvisionError::DirectoryCreation { path, source })
            }
        };
        Some(outcome)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}
