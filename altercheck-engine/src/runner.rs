//! Per-fixture pipeline: load → validate → execute → compare → report.
//!
//! Fixtures are independent: each gets its own freshly seeded
//! connection, and no fixture's failure stops the run. Only failure to
//! open or seed the database at all aborts.

use altercheck_core::config::HarnessConfig;
use altercheck_core::errors::{HarnessError, StorageError};
use altercheck_core::query_spec::QuerySpec;
use altercheck_core::validator::is_add_column_alter;

use crate::compare::{self, Comparison};
use crate::executor;
use crate::fixtures::FixtureStore;
use crate::loader;
use crate::seed::SeedDatabase;

/// The checks reported for every fixture, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    SourceExists,
    SourceNonEmpty,
    StatementShape,
    Execution,
    Schema,
    Types,
    Data,
}

impl CheckKind {
    pub fn name(self) -> &'static str {
        match self {
            CheckKind::SourceExists => "source-exists",
            CheckKind::SourceNonEmpty => "source-non-empty",
            CheckKind::StatementShape => "statement-shape",
            CheckKind::Execution => "execution",
            CheckKind::Schema => "schema",
            CheckKind::Types => "types",
            CheckKind::Data => "data",
        }
    }
}

/// Status of one check. `Skipped` means an earlier failure made the
/// check impossible; it still counts as failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Passed,
    Failed,
    Skipped,
}

/// One check's result, with explanation text on failure.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub kind: CheckKind,
    pub status: CheckStatus,
    pub detail: Option<String>,
}

impl CheckResult {
    fn passed(kind: CheckKind) -> Self {
        Self { kind, status: CheckStatus::Passed, detail: None }
    }

    fn failed(kind: CheckKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            status: CheckStatus::Failed,
            detail: Some(detail.into()),
        }
    }

    fn skipped(kind: CheckKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            status: CheckStatus::Skipped,
            detail: Some(detail.into()),
        }
    }

    /// True only for a pass; skipped checks count as failures.
    pub fn ok(&self) -> bool {
        self.status == CheckStatus::Passed
    }
}

/// Terminal state of one fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureState {
    Passed,
    Failed,
}

/// Full per-check report for one fixture.
#[derive(Debug, Clone)]
pub struct FixtureReport {
    pub fixture: String,
    pub state: FixtureState,
    pub checks: Vec<CheckResult>,
}

impl FixtureReport {
    fn from_checks(fixture: String, checks: Vec<CheckResult>) -> Self {
        let state = if checks.iter().all(CheckResult::ok) {
            FixtureState::Passed
        } else {
            FixtureState::Failed
        };
        Self { fixture, state, checks }
    }

    pub fn passed(&self) -> bool {
        self.state == FixtureState::Passed
    }

    /// Look up one check by kind.
    pub fn check(&self, kind: CheckKind) -> Option<&CheckResult> {
        self.checks.iter().find(|check| check.kind == kind)
    }

    /// Human-readable per-check block for console output.
    pub fn render(&self) -> String {
        let mut output = format!(
            "{} {}\n",
            if self.passed() { "✓" } else { "✗" },
            self.fixture
        );
        for check in &self.checks {
            let symbol = match check.status {
                CheckStatus::Passed => "✓",
                CheckStatus::Failed => "✗",
                CheckStatus::Skipped => "⊘",
            };
            output.push_str(&format!("  {} {}\n", symbol, check.kind.name()));
            if let Some(detail) = &check.detail {
                for line in detail.lines() {
                    output.push_str("      ");
                    output.push_str(line);
                    output.push('\n');
                }
            }
        }
        output
    }
}

/// Runs each query spec against a freshly seeded connection and
/// compares the dump against its name-keyed fixture.
pub struct Runner<'a> {
    seed: &'a SeedDatabase,
    store: FixtureStore,
}

impl<'a> Runner<'a> {
    pub fn new(seed: &'a SeedDatabase, store: FixtureStore) -> Self {
        Self { seed, store }
    }

    /// Evaluate every fixture to a terminal state, in order. Returns
    /// `Err` only when the seed database cannot be opened or seeded.
    pub fn run(&self, specs: &[QuerySpec]) -> Result<Vec<FixtureReport>, StorageError> {
        specs.iter().map(|spec| self.run_fixture(spec)).collect()
    }

    /// Run one fixture's pipeline to a terminal state.
    pub fn run_fixture(&self, spec: &QuerySpec) -> Result<FixtureReport, StorageError> {
        tracing::info!(fixture = %spec.fixture, target_table = %spec.target_table, "evaluating fixture");
        let mut checks = Vec::new();

        let Some(statement) = loader::load_source(&spec.source) else {
            let message = format!("The file '{}' was not found.", spec.source.display());
            checks.push(CheckResult::failed(CheckKind::SourceExists, message.clone()));
            skip_after(&mut checks, CheckKind::SourceExists, &message);
            return Ok(self.finish(spec, checks));
        };
        checks.push(CheckResult::passed(CheckKind::SourceExists));

        if statement.trim().is_empty() {
            let message = format!("The file '{}' contains no entries.", spec.source.display());
            checks.push(CheckResult::failed(CheckKind::SourceNonEmpty, message.clone()));
            skip_after(&mut checks, CheckKind::SourceNonEmpty, &message);
            return Ok(self.finish(spec, checks));
        }
        checks.push(CheckResult::passed(CheckKind::SourceNonEmpty));

        // Advisory check: a malformed statement can never pass overall,
        // but execution is still attempted below.
        if is_add_column_alter(&statement) {
            checks.push(CheckResult::passed(CheckKind::StatementShape));
        } else {
            checks.push(CheckResult::failed(
                CheckKind::StatementShape,
                "Query should contain a correct ALTER TABLE ADD COLUMN statement.",
            ));
        }

        let conn = self.seed.connect()?;
        let actual = executor::execute_alter(&conn, &statement, &spec.target_table);
        match &actual.error_message {
            Some(message) => {
                checks.push(CheckResult::failed(CheckKind::Execution, message.clone()));
            }
            None => checks.push(CheckResult::passed(CheckKind::Execution)),
        }

        match self.store.load_one(&spec.fixture) {
            Ok(expected) => {
                push_comparison(&mut checks, &compare::compare_captures(&expected, &actual));
            }
            Err(e) => {
                // Expected-side failure: hard failure for this fixture,
                // independent of the actual-side outcome.
                let message = e.to_string();
                tracing::warn!(fixture = %spec.fixture, error = %message, "expected fixture unavailable");
                skip_after(&mut checks, CheckKind::Execution, &message);
            }
        }

        Ok(self.finish(spec, checks))
    }

    fn finish(&self, spec: &QuerySpec, checks: Vec<CheckResult>) -> FixtureReport {
        let report = FixtureReport::from_checks(spec.fixture.clone(), checks);
        match report.state {
            FixtureState::Passed => {
                tracing::info!(fixture = %spec.fixture, "fixture passed");
            }
            FixtureState::Failed => {
                tracing::warn!(fixture = %spec.fixture, "fixture failed");
            }
        }
        report
    }
}

/// Record every check after `last` as skipped-failed with `reason`.
fn skip_after(checks: &mut Vec<CheckResult>, last: CheckKind, reason: &str) {
    const ORDER: [CheckKind; 7] = [
        CheckKind::SourceExists,
        CheckKind::SourceNonEmpty,
        CheckKind::StatementShape,
        CheckKind::Execution,
        CheckKind::Schema,
        CheckKind::Types,
        CheckKind::Data,
    ];
    let position = ORDER.iter().position(|kind| *kind == last).unwrap_or(0);
    for kind in &ORDER[position + 1..] {
        checks.push(CheckResult::skipped(*kind, reason));
    }
}

fn push_comparison(checks: &mut Vec<CheckResult>, comparison: &Comparison) {
    let axes = [
        (CheckKind::Schema, &comparison.schema),
        (CheckKind::Types, &comparison.types),
        (CheckKind::Data, &comparison.data),
    ];
    for (kind, outcome) in axes {
        if outcome.passed {
            checks.push(CheckResult::passed(kind));
        } else {
            checks.push(CheckResult::failed(kind, outcome.diff()));
        }
    }
}

/// Convenience entry point: seed, store, and specs all taken from the
/// harness configuration.
pub fn run_with_config(config: &HarnessConfig) -> Result<Vec<FixtureReport>, HarnessError> {
    let seed = SeedDatabase::from_script_file(&config.seed_script)?;
    let store = FixtureStore::new(&config.fixtures_dir);
    let runner = Runner::new(&seed, store);
    Ok(runner.run(&config.query_specs())?)
}
