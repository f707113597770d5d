// ABOUTME: Batch image removal with force-aware aggregation.
// ABOUTME: Removes images one by one, then folds per-image outcomes into one verdict.

use crate::error::{Error, Result};
use crate::output::RemovalSink;
use crate::runtime::{DeletionRecord, ErrorClassifier, ImageError, ImageRemover, RemoveOptions};
use crate::types::ImageName;
use nonempty::NonEmpty;
use std::fmt;

/// Failure to remove a single image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemError {
    pub identifier: ImageName,
    pub message: String,
    /// The image was already absent.
    pub not_found: bool,
}

/// Result of removing one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Removed(Vec<DeletionRecord>),
    Failed(ItemError),
}

impl ItemOutcome {
    pub fn error(&self) -> Option<&ItemError> {
        match self {
            ItemOutcome::Removed(_) => None,
            ItemOutcome::Failed(e) => Some(e),
        }
    }
}

/// Final decision for a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Succeeded,
    /// Only not-found errors occurred and force was set. Holds the joined messages.
    SucceededWithWarnings(String),
    /// Holds the joined messages of every error in the batch.
    Failed(String),
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Succeeded => write!(f, "succeeded"),
            Verdict::SucceededWithWarnings(_) => write!(f, "succeeded with warnings"),
            Verdict::Failed(_) => write!(f, "failed"),
        }
    }
}

/// Fold ordered per-image outcomes into a verdict.
///
/// Errors are joined with newlines in the order they occurred. Force only
/// tolerates not-found errors; any other error fails the batch.
pub fn aggregate(outcomes: &[ItemOutcome], force: bool) -> Verdict {
    let errors: Vec<&ItemError> = outcomes.iter().filter_map(ItemOutcome::error).collect();
    if errors.is_empty() {
        return Verdict::Succeeded;
    }

    let fatal = errors.iter().any(|e| !e.not_found);
    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    if !force || fatal {
        Verdict::Failed(message)
    } else {
        Verdict::SucceededWithWarnings(message)
    }
}

/// Outcomes of one batch, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    outcomes: Vec<ItemOutcome>,
    force: bool,
}

impl BatchReport {
    pub fn outcomes(&self) -> &[ItemOutcome] {
        &self.outcomes
    }

    pub fn verdict(&self) -> Verdict {
        aggregate(&self.outcomes, self.force)
    }

    /// Collapse the report into the single error surfaced to callers.
    pub fn into_result(self) -> Result<()> {
        match self.verdict() {
            Verdict::Failed(message) => Err(Error::Removal(message)),
            Verdict::Succeeded | Verdict::SucceededWithWarnings(_) => Ok(()),
        }
    }
}

/// Remove every image in `identifiers`, in order.
///
/// Each identifier is attempted exactly once, even after a failure. Deletion
/// records are written to `sink` as they arrive. If the batch only hit
/// not-found errors and `options.force` is set, the joined messages are
/// written to the sink's warning stream and the batch succeeds.
pub async fn remove_images<R, C, S>(
    remote: &R,
    classifier: &C,
    identifiers: &NonEmpty<ImageName>,
    options: RemoveOptions,
    sink: &mut S,
) -> BatchReport
where
    R: ImageRemover + ?Sized,
    C: ErrorClassifier<ImageError> + ?Sized,
    S: RemovalSink + ?Sized,
{
    let mut outcomes = Vec::with_capacity(identifiers.len());

    for identifier in identifiers.iter() {
        tracing::debug!(image = %identifier, "removing image");

        let outcome = match remote.remove_image(identifier, &options).await {
            Ok(records) => {
                for record in &records {
                    tracing::debug!(image = %identifier, "{record}");
                    sink.record(record);
                }
                ItemOutcome::Removed(records)
            }
            Err(e) => {
                let not_found = classifier.is_not_found(&e);
                tracing::warn!(image = %identifier, not_found, "{e}");
                ItemOutcome::Failed(ItemError {
                    identifier: identifier.clone(),
                    message: e.to_string(),
                    not_found,
                })
            }
        };
        outcomes.push(outcome);
    }

    let report = BatchReport {
        outcomes,
        force: options.force,
    };

    let verdict = report.verdict();
    tracing::info!(images = identifiers.len(), "removal {verdict}");
    if let Verdict::SucceededWithWarnings(message) = &verdict {
        sink.warning(message);
    }

    report
}

/// Remove every image and return the aggregate error, if any.
///
/// Convenience wrapper over [`remove_images`] for callers that only need
/// success or failure.
pub async fn remove<R, C, S>(
    remote: &R,
    classifier: &C,
    identifiers: &NonEmpty<ImageName>,
    options: RemoveOptions,
    sink: &mut S,
) -> Result<()>
where
    R: ImageRemover + ?Sized,
    C: ErrorClassifier<ImageError> + ?Sized,
    S: RemovalSink + ?Sized,
{
    remove_images(remote, classifier, identifiers, options, sink)
        .await
        .into_result()
}
