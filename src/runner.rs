use std::io::{self, Write};

use anyhow::{Context, Result};
use camino::Utf8Path;

use crate::cli::Cli;
use crate::layout::Layout;
use crate::provision::{Outcome, provision};

/// Counts gathered while writing a provisioning report.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    pub created: usize,
    pub failed: usize,
}

pub fn run(cli: Cli) -> Result<()> {
    let layout = Layout::builtin()?;
    let base = cli.base.as_deref().unwrap_or(layout.base.as_path());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        return write_targets(&layout, base, &mut out);
    }

    tracing::info!(%base, entries = layout.dirs.len(), "provisioning layout");
    let summary = report(provision(base, &layout.dirs), &mut out)?;
    tracing::info!(
        created = summary.created,
        failed = summary.failed,
        "provisioning finished"
    );
    Ok(())
}

/// Writes one line per outcome followed by a single `Done!` line.
///
/// Per-entry failures only show up in the report and the returned counts; the
/// only error returned is a failure to write to `out`.
pub fn report<I, W>(outcomes: I, out: &mut W) -> Result<Summary>
where
    I: IntoIterator<Item = Outcome>,
    W: Write,
{
    let mut summary = Summary::default();
    for outcome in outcomes {
        tracing::trace!(path = %outcome.path(), "reporting");
        if outcome.is_success() {
            summary.created += 1;
        } else {
            summary.failed += 1;
        }
        writeln!(out, "{outcome}").context("writing provisioning report")?;
    }
    writeln!(out, "Done!").context("writing provisioning report")?;
    out.flush().context("flushing provisioning report")?;
    Ok(summary)
}

fn write_targets<W: Write>(layout: &Layout, base: &Utf8Path, out: &mut W) -> Result<()> {
    for target in layout.targets(base) {
        writeln!(out, "{target}").context("writing target list")?;
    }
    out.flush().context("flushing target list")
}
