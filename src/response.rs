//! Typed endpoint results.

use serde::Serialize;

use crate::envelope::Envelope;
use crate::error::Result;

/// Records returned by one endpoint call, with the envelope they came in.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct ApiResponse<T> {
    /// Envelope metadata (`get`, `parameters`, `results`, `paging`) and the
    /// raw payload.
    pub envelope: Envelope,
    /// The projected records.
    pub items: Vec<T>,
}

impl<T> ApiResponse<T> {
    /// Project the envelope payload into records.
    ///
    /// # Errors
    ///
    /// Returns a decoding error if the payload is not a list of `T`.
    pub fn from_envelope(envelope: Envelope) -> Result<Self>
    where
        T: serde::de::DeserializeOwned,
    {
        let items = envelope.project()?;
        Ok(Self { envelope, items })
    }

    /// Map the items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> ApiResponse<U> {
        ApiResponse {
            envelope: self.envelope,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Number of results announced by the API.
    pub fn results(&self) -> u64 {
        self.envelope.results
    }

    /// Returns true if the call returned no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for ApiResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ApiResponse<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
