use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use globset::GlobSet;
use tracing::{debug, warn};

use quill_core::parser::{DocstringParser, ParserSet};
use quill_core::template::MessageTemplate;
use quill_core::{Finding, ParseError, QuillConfig, Strictness, Unit};
use quill_output::{ErrorReport, Verbosity};

use crate::checks::BATTERY;
use crate::checks_util::{Check, CheckContext};
use crate::collection::FindingCollection;
use crate::error::{CheckerError, RunFault};

/// Checks documented units against their docstrings on a bounded worker
/// pool and collects the findings into one deterministic report.
///
/// Runs share nothing but the result channel. `finalize` is the only
/// blocking point: it waits for every scheduled run, sorts, and closes the
/// checker for good.
pub struct IntegrityChecker {
    config: Arc<QuillConfig>,
    parser: Arc<dyn DocstringParser>,
    template: Option<MessageTemplate>,
    ignore_names: Option<GlobSet>,
    pool: rayon::ThreadPool,
    state: Mutex<CheckerState>,
}

struct RunOutcome {
    seq: u64,
    result: Result<Vec<Finding>, RunFault>,
}

struct OpenRuns {
    tx: Sender<RunOutcome>,
    rx: Receiver<RunOutcome>,
    next_seq: u64,
}

#[derive(Clone)]
struct ClosedRuns {
    findings: Arc<[Finding]>,
    fault: Option<RunFault>,
}

enum CheckerState {
    Open(OpenRuns),
    Closed(ClosedRuns),
}

impl IntegrityChecker {
    /// Validate `config` and build the checker. Every configuration problem
    /// surfaces here rather than per unit.
    pub fn new(config: QuillConfig, parsers: &ParserSet) -> Result<Self, CheckerError> {
        config.validate()?;
        let parser = parsers.select(config.style)?;
        let template = config.template()?;
        let ignore_names = config.ignore_name_set()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.worker_count())
            .thread_name(|i| format!("quill-check-{i}"))
            .build()?;
        let (tx, rx) = mpsc::channel();

        debug!(
            style = %config.style,
            workers = config.worker_count(),
            "integrity checker ready"
        );

        Ok(Self {
            config: Arc::new(config),
            parser,
            template,
            ignore_names,
            pool,
            state: Mutex::new(CheckerState::Open(OpenRuns {
                tx,
                rx,
                next_seq: 0,
            })),
        })
    }

    pub fn config(&self) -> &QuillConfig {
        &self.config
    }

    pub fn is_closed(&self) -> bool {
        matches!(*self.lock_state(), CheckerState::Closed(_))
    }

    /// Queue a check run for `unit`.
    ///
    /// Undocumented units and units matching `ignore_names` are skipped
    /// silently. Fails once the checker has been finalized.
    pub fn schedule(&self, unit: impl Into<Arc<Unit>>) -> Result<(), CheckerError> {
        let unit: Arc<Unit> = unit.into();
        let mut state = self.lock_state();
        let CheckerState::Open(open) = &mut *state else {
            return Err(CheckerError::Closed);
        };

        let Some(docstring) = unit.docstring.clone() else {
            return Ok(());
        };
        if self
            .ignore_names
            .as_ref()
            .is_some_and(|set| set.is_match(&unit.name))
        {
            debug!(unit = %unit.name, "skipping ignored unit");
            return Ok(());
        }

        let seq = open.next_seq;
        open.next_seq += 1;
        let tx = open.tx.clone();
        drop(state);

        let parser = Arc::clone(&self.parser);
        let config = Arc::clone(&self.config);
        self.pool.spawn(move || {
            let result = run_unit(&unit, &docstring, parser.as_ref(), &config);
            // The receiver lives until finalize has drained every run.
            let _ = tx.send(RunOutcome { seq, result });
        });
        Ok(())
    }

    /// Wait for all runs, sort the findings, and close the checker.
    ///
    /// Calling this again returns the same findings (or the same fault).
    pub fn finalize(&self) -> Result<Arc<[Finding]>, CheckerError> {
        let closed = self.lock_state().close(self.config.raise_errors);
        match closed.fault {
            Some(fault) => Err(CheckerError::Fault(fault)),
            None => Ok(closed.findings),
        }
    }

    /// Finalize and render. `template` overrides the configured template.
    pub fn finalize_and_report(
        &self,
        verbosity: Verbosity,
        source_name: &str,
        template: Option<&str>,
    ) -> Result<ErrorReport, CheckerError> {
        let template = match template {
            Some(raw) => Some(MessageTemplate::parse(raw)?),
            None => self.template.clone(),
        };
        let findings = self.finalize()?;
        Ok(ErrorReport::new(findings, verbosity, source_name, template))
    }

    fn lock_state(&self) -> MutexGuard<'_, CheckerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CheckerState {
    fn close(&mut self, raise_errors: bool) -> ClosedRuns {
        let placeholder = CheckerState::Closed(ClosedRuns {
            findings: Arc::from(Vec::new()),
            fault: None,
        });
        let closed = match std::mem::replace(self, placeholder) {
            CheckerState::Open(open) => open.drain(raise_errors),
            CheckerState::Closed(closed) => closed,
        };
        *self = CheckerState::Closed(closed.clone());
        closed
    }
}

impl OpenRuns {
    fn drain(self, raise_errors: bool) -> ClosedRuns {
        let OpenRuns { tx, rx, next_seq } = self;
        // Once our sender is gone the channel closes when the last run ends.
        drop(tx);
        let mut outcomes: Vec<RunOutcome> = rx.iter().collect();
        outcomes.sort_by_key(|o| o.seq);
        debug!(scheduled = next_seq, completed = outcomes.len(), "finalizing");

        let mut collection = FindingCollection::new();
        let mut fault = None;
        for outcome in outcomes {
            match outcome.result {
                Ok(findings) => collection.extend(findings),
                Err(err) if raise_errors => {
                    fault.get_or_insert(err);
                }
                Err(err) => warn!("{err}; unit skipped"),
            }
        }

        ClosedRuns {
            findings: collection.into_sorted(),
            fault,
        }
    }
}

/// One unit, start to finish: build the view, apply the short-circuits,
/// then run the battery.
pub(crate) fn run_unit(
    unit: &Arc<Unit>,
    docstring: &str,
    parser: &dyn DocstringParser,
    config: &QuillConfig,
) -> Result<Vec<Finding>, RunFault> {
    let fault = |error: ParseError| RunFault {
        unit: unit.name.clone(),
        line: unit.line,
        error,
    };
    let view = panic::catch_unwind(AssertUnwindSafe(|| parser.parse(unit, docstring)))
        .map_err(|_| fault(ParseError::Malformed("parser panicked".into())))?
        .map_err(fault)?;

    if config.strictness < Strictness::FullDescription && view.satisfies(config.strictness) {
        return Ok(Vec::new());
    }
    if view.ignore_all {
        return Ok(Vec::new());
    }

    let ctx = CheckContext::new(unit, &view, config);
    Ok(run_battery(&ctx, &BATTERY))
}

/// Run `battery` in order. A panicking check ends this unit's run but keeps
/// what earlier checks found.
pub(crate) fn run_battery(ctx: &CheckContext<'_>, battery: &[Check]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for check in battery {
        match panic::catch_unwind(AssertUnwindSafe(|| (check.run)(ctx))) {
            Ok(found) => findings.extend(found),
            Err(_) => {
                warn!(
                    unit = %ctx.unit.name,
                    check = check.name,
                    "check panicked; remaining checks skipped for this unit"
                );
                break;
            }
        }
    }
    findings
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;
