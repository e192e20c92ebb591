//! Remove-long filter implementation.

use super::Filter;

use crate::analysis::token::TokenStream;

/// A filter that drops tokens whose text is longer than a byte limit.
///
/// Survivors keep their original positions, so dropping a token leaves a gap
/// in the position sequence.
#[derive(Clone, Debug)]
pub struct RemoveLongFilter {
    limit: usize,
}

impl RemoveLongFilter {
    /// Create a filter dropping tokens longer than `limit` bytes.
    pub fn new(limit: usize) -> Self {
        RemoveLongFilter { limit }
    }

    /// Get the limit in bytes.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Filter for RemoveLongFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let limit = self.limit;
        Box::new(tokens.filter(move |token| token.len() <= limit))
    }

    fn name(&self) -> &'static str {
        "remove_long"
    }
}
