// ABOUTME: Error classification capability used by batch removal.
// ABOUTME: Separates "already gone" failures from everything else.

use super::image::ImageError;

/// Decides whether a removal error means the image was already absent.
///
/// Any `Fn(&E) -> bool` closure is a classifier, so callers can inject
/// their own predicate.
pub trait ErrorClassifier<E: ?Sized> {
    fn is_not_found(&self, error: &E) -> bool;
}

impl<E: ?Sized, F> ErrorClassifier<E> for F
where
    F: Fn(&E) -> bool,
{
    fn is_not_found(&self, error: &E) -> bool {
        self(error)
    }
}

/// Classifier for errors produced by the bollard runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeClassifier;

impl ErrorClassifier<ImageError> for RuntimeClassifier {
    fn is_not_found(&self, error: &ImageError) -> bool {
        error.is_not_found()
    }
}
