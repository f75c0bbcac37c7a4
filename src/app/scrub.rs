// PresetScrub - app/scrub.rs
//
// The load -> filter -> save pipeline. Steps run strictly in sequence and
// the first failure aborts the run: a load error means nothing is written.

use crate::core::filter;
use crate::core::rules::ExclusionRules;
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::Result;
use std::path::{Path, PathBuf};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrubReport {
    pub path: PathBuf,
    pub lines_read: usize,
    pub lines_removed: usize,
}

impl ScrubReport {
    pub fn lines_retained(&self) -> usize {
        self.lines_read - self.lines_removed
    }

    /// Human-readable confirmation, e.g. `Cleaned PresetManager.mqh`.
    pub fn confirmation(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        format!(
            "Cleaned {name} ({} removed, {} kept)",
            self.lines_removed,
            self.lines_retained()
        )
    }
}

/// Rewrite `path` without the lines matched by `rules`.
pub fn scrub_file(path: &Path, rules: &ExclusionRules) -> Result<ScrubReport> {
    tracing::info!(
        path = %path.display(),
        tokens = rules.tokens().len(),
        phrases = rules.phrases().len(),
        "Scrubbing file"
    );

    if rules.is_empty() {
        tracing::warn!(
            path = %path.display(),
            "Exclusion rule set is empty; no line will be removed"
        );
    }

    let lines = fs::load_lines(path)?;

    if tracing::enabled!(tracing::Level::DEBUG) {
        for removed in filter::removed_lines(&lines, rules) {
            if let Some(m) = rules.first_match(removed.text) {
                tracing::debug!(
                    line = removed.line_number,
                    kind = m.kind.label(),
                    rule = m.rule,
                    text = %preview(removed.text),
                    "Removing line"
                );
            }
        }
    }

    let retained = filter::filter_lines(&lines, rules);
    fs::save_lines(path, &retained)?;

    let report = ScrubReport {
        path: path.to_path_buf(),
        lines_read: lines.len(),
        lines_removed: lines.len() - retained.len(),
    };
    tracing::info!(
        path = %path.display(),
        read = report.lines_read,
        removed = report.lines_removed,
        retained = report.lines_retained(),
        "Scrub complete"
    );
    Ok(report)
}

/// Trim a line for log output.
fn preview(line: &str) -> &str {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.char_indices().nth(constants::DEBUG_MAX_LINE_PREVIEW) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}
