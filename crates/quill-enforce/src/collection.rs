use std::sync::Arc;

use quill_core::Finding;

/// Append-only list of findings in discovery order.
///
/// Sorting by unit line is stable, so findings on the same line keep the
/// order they were appended in. A dirty flag skips redundant sorts.
#[derive(Debug)]
pub struct FindingCollection {
    findings: Vec<Finding>,
    sorted: bool,
}

impl Default for FindingCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl FindingCollection {
    pub fn new() -> Self {
        Self {
            findings: Vec::new(),
            sorted: true,
        }
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        let before = self.findings.len();
        self.findings.extend(findings);
        if self.findings.len() != before {
            self.sorted = false;
        }
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn sort(&mut self) {
        if !self.sorted {
            self.findings.sort_by_key(|f| f.unit.line);
            self.sorted = true;
        }
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn as_slice(&self) -> &[Finding] {
        &self.findings
    }

    /// Sort, then freeze into a shareable slice.
    pub fn into_sorted(mut self) -> Arc<[Finding]> {
        self.sort();
        Arc::from(self.findings)
    }
}
