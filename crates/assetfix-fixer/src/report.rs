//! Fix outcomes and run reports

use crate::normalizer::Stage;
use assetfix_asset::AssetEntity;

/// What a single stage did to an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixOutcome {
    /// On-disk state already matched; nothing was written
    Unchanged,
    /// The file at the entity's path was rewritten in place
    Rewritten,
    /// The entity's directory was moved; continue with this entity
    Renamed(AssetEntity),
}

impl FixOutcome {
    pub fn is_change(&self) -> bool {
        !matches!(self, FixOutcome::Unchanged)
    }
}

/// A stage that ran and its outcome
#[derive(Debug, Clone)]
pub struct FixAction {
    pub stage: Stage,
    pub outcome: FixOutcome,
}

/// All stages applied to one entity
#[derive(Debug, Clone)]
pub struct EntityRun {
    /// The entity as it stands after the run (rebound after a rename)
    pub entity: AssetEntity,
    pub actions: Vec<FixAction>,
}

impl EntityRun {
    pub fn changed(&self) -> bool {
        self.actions.iter().any(|a| a.outcome.is_change())
    }

    pub fn renamed(&self) -> bool {
        self.actions
            .iter()
            .any(|a| matches!(a.outcome, FixOutcome::Renamed(_)))
    }
}

/// An entity whose pass aborted
#[derive(Debug, Clone)]
pub struct Failure {
    pub entity: String,
    pub error: String,
}

/// Totals across a driver run
#[derive(Debug, Default)]
pub struct FixReport {
    pub visited: usize,
    pub changed: usize,
    pub renamed: usize,
    pub failures: Vec<Failure>,
}

impl FixReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, run: &EntityRun) {
        self.visited += 1;
        if run.changed() {
            self.changed += 1;
        }
        if run.renamed() {
            self.renamed += 1;
        }
    }

    pub fn record_failure(&mut self, entity: &AssetEntity, error: &dyn std::fmt::Display) {
        self.visited += 1;
        self.failures.push(Failure {
            entity: entity.to_string(),
            error: error.to_string(),
        });
    }

    /// No entity failed
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get a human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} entit{} visited: {} changed, {} renamed, {} failed",
            self.visited,
            if self.visited == 1 { "y" } else { "ies" },
            self.changed,
            self.renamed,
            self.failures.len(),
        )
    }
}
