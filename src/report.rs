//! Per-stage results returned to the orchestrator.
//!
//! Every mutating stage records what each of its steps did instead of
//! printing and forgetting. The orchestrator decides what to show.

use crate::error::ScaffoldError;
use strum::{Display, EnumIter};

/// The mutating stages of a scaffold run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Stage {
    #[strum(serialize = "layout")]
    Layout,
    #[strum(serialize = "backend")]
    Backend,
    #[strum(serialize = "frontend")]
    Frontend,
}

/// What happened to one step
#[derive(Debug)]
pub enum StepStatus {
    Done,
    /// Not attempted (skip-install or dry-run)
    Skipped,
    Failed(ScaffoldError),
}

/// One step of a stage, e.g. "npm install" or "write server.js"
#[derive(Debug)]
pub struct StepOutcome {
    pub step: String,
    pub status: StepStatus,
}

impl StepOutcome {
    pub fn done(step: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            status: StepStatus::Done,
        }
    }

    pub fn skipped(step: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            status: StepStatus::Skipped,
        }
    }

    pub fn failed(step: impl Into<String>, error: ScaffoldError) -> Self {
        Self {
            step: step.into(),
            status: StepStatus::Failed(error),
        }
    }

    pub fn error(&self) -> Option<&ScaffoldError> {
        match &self.status {
            StepStatus::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Outcomes for every step a stage attempted
#[derive(Debug)]
pub struct StageReport {
    pub stage: Stage,
    pub steps: Vec<StepOutcome>,
}

impl StageReport {
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            steps: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: StepOutcome) {
        self.steps.push(outcome);
    }

    /// Record a step result, logging failures at this boundary
    pub fn record(&mut self, step: impl Into<String>, result: crate::error::Result<()>) {
        let step = step.into();
        match result {
            Ok(()) => self.push(StepOutcome::done(step)),
            Err(e) => {
                tracing::error!(stage = %self.stage, "{} failed: {}", step, e);
                self.push(StepOutcome::failed(step, e));
            }
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps.iter().filter(|s| s.error().is_some())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Every stage report from one run, in execution order
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    pub stages: Vec<StageReport>,
}

impl ScaffoldReport {
    pub fn stage(&self, stage: Stage) -> Option<&StageReport> {
        self.stages.iter().find(|r| r.stage == stage)
    }

    pub fn is_success(&self) -> bool {
        self.stages.iter().all(StageReport::is_success)
    }

    pub fn failure_count(&self) -> usize {
        self.stages.iter().map(|s| s.failures().count()).sum()
    }

    /// Human-readable lines describing each failed step
    pub fn failure_lines(&self) -> Vec<String> {
        self.stages
            .iter()
            .flat_map(|stage| {
                stage.failures().filter_map(move |step| {
                    step.error()
                        .map(|e| format!("[{}] {}: {}", stage.stage, step.step, e))
                })
            })
            .collect()
    }
}
