//! Confirmation port - asks the author before proceeding with a risky submit.

use async_trait::async_trait;

/// Source of the author's answer to the large-content warning.
///
/// An interactive client would prompt; the HTTP API answers from a flag the
/// client sent along with the submission.
#[async_trait]
pub trait Confirmation: Send + Sync {
    /// Return `true` to continue saving a post of `chars` characters.
    async fn confirm_large_content(&self, chars: usize) -> bool;
}

/// Fixed answer, used where the decision was made up front.
#[derive(Debug, Clone, Copy)]
pub struct Preconfirmed(pub bool);

#[async_trait]
impl Confirmation for Preconfirmed {
    async fn confirm_large_content(&self, _chars: usize) -> bool {
        self.0
    }
}
