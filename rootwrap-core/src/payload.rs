//! Payload wrap/unwrap operations

use crate::error::{Result, WrapError};
use crate::key::WrapKey;
use serde_json::{Map, Value};

/// Attribute mapping: attribute name to JSON value.
///
/// Used for the model attribute set, unwrapped payloads and wrapped payloads
/// alike; a wrapped payload is an `Attributes` whose entry at the wrap key is
/// itself an object.
pub type Attributes = Map<String, Value>;

/// Test whether `payload` is wrapped: it carries an entry at the wrap key
/// whose value is an attribute object.
pub fn is_wrapped(payload: &Attributes, key: &WrapKey) -> bool {
    matches!(payload.get(key.as_str()), Some(Value::Object(_)))
}

/// Extract the attribute object nested under the wrap key.
///
/// Fails with [`WrapError::NotWrapped`] when the payload carries no object at
/// the key; callers that cannot rule that out should guard with
/// [`is_wrapped`] first.
pub fn unwrapped_attributes(payload: &Attributes, key: &WrapKey) -> Result<Attributes> {
    match payload.get(key.as_str()) {
        Some(Value::Object(attrs)) => Ok(attrs.clone()),
        _ => Err(WrapError::NotWrapped(key.to_string())),
    }
}

/// Nest a snapshot of `attrs` under the wrap key.
///
/// The returned payload owns an independent clone, so later mutation of the
/// source attributes does not alter it.
pub fn wrapped_attributes(attrs: &Attributes, key: &WrapKey) -> Attributes {
    let mut payload = Attributes::new();
    payload.insert(key.as_str().to_owned(), Value::Object(attrs.clone()));
    payload
}
