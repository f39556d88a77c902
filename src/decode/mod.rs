//! Page envelope decoding
//!
//! One HTTP response carries one bounded slice of the total result set,
//! wrapped in the OData collection envelope. The envelope is generic over the
//! record type so the pagination loop is shared across resource types
//! (organizations, individuals, locations, ...).

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// One page of an OData collection response
///
/// Transient: exists only for the duration of one response's decoding.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    /// Total number of records matching the filter, from `@odata.count`.
    /// Informational only; never used for loop control.
    #[serde(default, rename = "@odata.count")]
    pub count: Option<i64>,

    /// The records on this page, in server order
    pub value: Vec<T>,
}

impl<T> Page<T> {
    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Whether this page carries no records
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Whether this page is shorter than the requested page size,
    /// which terminates the page loop
    pub fn is_short(&self, top: u32) -> bool {
        self.value.len() < top as usize
    }
}

/// Decode one page of `T` from a response body
///
/// A malformed body or an envelope that doesn't match the expected shape
/// surfaces as a decode failure, distinct from transport and status errors.
pub fn decode_page<T: DeserializeOwned>(body: &str) -> Result<Page<T>> {
    serde_json::from_str(body).map_err(|e| Error::decode(format!("invalid page envelope: {e}")))
}
