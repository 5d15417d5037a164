//! Turns one record line's JSON fragment into a typed record.

use changescan_core::{ChangeRecord, DecodeError};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Decodes the text of a single record line.
///
/// Implementations must not keep per-call state; the scanner may share one
/// decoder across every call on a stream.
pub trait RecordDecoder {
    type Record;

    fn decode(&self, text: &str) -> Result<Self::Record, DecodeError>;
}

/// `serde_json` decoder for any deserializable record type.
pub struct JsonDecoder<T = ChangeRecord> {
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonDecoder<T> {
    pub const fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }
}

impl<T> Default for JsonDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonDecoder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for JsonDecoder<T> {}

impl<T> std::fmt::Debug for JsonDecoder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonDecoder").finish()
    }
}

impl<T: DeserializeOwned> RecordDecoder for JsonDecoder<T> {
    type Record = T;

    fn decode(&self, text: &str) -> Result<T, DecodeError> {
        serde_json::from_str(text).map_err(|err| DecodeError::new(text, err))
    }
}

impl<D: RecordDecoder + ?Sized> RecordDecoder for &D {
    type Record = D::Record;

    fn decode(&self, text: &str) -> Result<Self::Record, DecodeError> {
        (**self).decode(text)
    }
}
