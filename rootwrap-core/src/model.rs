//! Model attribute store and wrap lifecycle hooks

use crate::error::{Result, WrapError};
use crate::key::WrapKey;
use crate::payload::{self, Attributes};
use serde_json::Value;

/// Attribute name the backend uses as a resource's identifier.
pub const ID_ATTRIBUTE: &str = "id";

/// Capability trait for model types that exchange root-key-wrapped JSON.
///
/// Types opt in by providing the two accessors; the wrap operations come for
/// free and delegate to [`crate::payload`].
pub trait Wrappable {
    /// Wrap key configured for this model type.
    fn wrap_key(&self) -> &WrapKey;

    /// Current attribute set.
    fn attributes(&self) -> &Attributes;

    /// Test whether `payload` is wrapped under this type's key.
    fn is_wrapped(&self, payload: &Attributes) -> bool {
        payload::is_wrapped(payload, self.wrap_key())
    }

    /// Extract the attribute object nested under this type's key.
    fn unwrapped_attributes(&self, payload: &Attributes) -> Result<Attributes> {
        payload::unwrapped_attributes(payload, self.wrap_key())
    }

    /// Nest a snapshot of the current attributes under this type's key.
    fn wrapped_attributes(&self) -> Attributes {
        payload::wrapped_attributes(self.attributes(), self.wrap_key())
    }
}

/// Options for attribute mutation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetOptions {
    /// Suppress change events and the previous-attributes refresh.
    pub silent: bool,
}

impl SetOptions {
    /// Options for a silent mutation.
    pub fn silent() -> Self {
        SetOptions { silent: true }
    }
}

/// Options for outbound serialization.
#[derive(Debug, Clone, Default)]
pub struct JsonOptions {
    /// Extra top-level fields merged into the payload as siblings of the
    /// wrap key (auth tokens, multi-resource writes).
    pub params: Option<Attributes>,
}

impl JsonOptions {
    /// Options carrying extra top-level params.
    pub fn with_params(params: Attributes) -> Self {
        JsonOptions {
            params: Some(params),
        }
    }
}

/// A recorded attribute change event.
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    /// Attribute name.
    pub name: String,
    /// Value before the change, if the attribute existed.
    pub old: Option<Value>,
    /// Value after the change; `None` for an unset.
    pub new: Option<Value>,
}

/// A model instance: an attribute set plus the wrap lifecycle hooks.
///
/// Owns its attributes exclusively. Change events are queued on the instance
/// and drained with [`Model::take_changes`]; silent mutations (and all
/// construction-time initialization) bypass the queue.
#[derive(Debug, Clone)]
pub struct Model {
    key: WrapKey,
    attributes: Attributes,
    previous: Attributes,
    changes: Vec<Change>,
}

impl Model {
    /// Create an empty model for the given wrap key.
    pub fn new(key: WrapKey) -> Self {
        Model {
            key,
            attributes: Attributes::new(),
            previous: Attributes::new(),
            changes: Vec::new(),
        }
    }

    /// Construct a model from initial data that may or may not be wrapped.
    ///
    /// Wrapped input is unwrapped silently: the nested object becomes the
    /// attribute set and the wrap key entry is consumed, never stored as an
    /// attribute. Anything else is stored as-is. Either way the
    /// previous-attributes snapshot matches the resulting attributes and no
    /// change events fire, since nothing observed the model before
    /// construction finished.
    pub fn with_initial(key: WrapKey, initial: Option<Attributes>) -> Self {
        let mut model = Model::new(key);
        if let Some(mut args) = initial {
            model.attributes = match args.remove(model.key.as_str()) {
                Some(Value::Object(mut nested)) => {
                    // The wrap key is consumed, never stored as an attribute,
                    // even when the nested object carries an entry by the
                    // same name.
                    nested.remove(model.key.as_str());
                    nested
                }
                Some(other) => {
                    // Non-object at the key means the input was not wrapped;
                    // put the entry back and keep the input unchanged.
                    args.insert(model.key.as_str().to_owned(), other);
                    args
                }
                None => args,
            };
            model.previous = model.attributes.clone();
        }
        model
    }

    /// Merge `attrs` into the attribute set.
    ///
    /// Non-silent calls refresh the previous-attributes snapshot first and
    /// queue a [`Change`] for every attribute whose value actually changed.
    pub fn set(&mut self, attrs: Attributes, opts: &SetOptions) {
        if attrs.is_empty() {
            return;
        }
        if !opts.silent {
            self.previous = self.attributes.clone();
        }
        for (name, value) in attrs {
            let old = self.attributes.insert(name.clone(), value.clone());
            if !opts.silent && old.as_ref() != Some(&value) {
                self.changes.push(Change {
                    name,
                    old,
                    new: Some(value),
                });
            }
        }
    }

    /// Remove one attribute.
    pub fn unset(&mut self, name: &str, opts: &SetOptions) {
        if !self.attributes.contains_key(name) {
            return;
        }
        if !opts.silent {
            self.previous = self.attributes.clone();
        }
        if let Some(old) = self.attributes.remove(name) {
            if !opts.silent {
                self.changes.push(Change {
                    name: name.to_owned(),
                    old: Some(old),
                    new: None,
                });
            }
        }
    }

    /// Look up one attribute value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Attribute snapshot from before the last non-silent mutation.
    pub fn previous_attributes(&self) -> &Attributes {
        &self.previous
    }

    /// Change events queued since the last drain.
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Drain the queued change events.
    pub fn take_changes(&mut self) -> Vec<Change> {
        std::mem::take(&mut self.changes)
    }

    /// Whether this model has never been persisted (no usable `id`).
    pub fn is_new(&self) -> bool {
        !matches!(self.attributes.get(ID_ATTRIBUTE), Some(v) if !v.is_null())
    }

    /// Inbound hook: unwrap a server response into the attribute mapping the
    /// store keeps.
    ///
    /// Fails fast with [`WrapError::NotWrapped`] when the response is not
    /// wrapped, rather than silently corrupting the attribute set.
    pub fn parse(&self, response: &Attributes) -> Result<Attributes> {
        payload::unwrapped_attributes(response, &self.key)
    }

    /// Outbound hook: wrap a snapshot of the current attributes, then merge
    /// any caller-supplied params at the top level, sibling to the wrap key.
    ///
    /// A param named identically to the wrap key would overwrite the nested
    /// resource and is rejected with [`WrapError::ParamCollision`].
    pub fn to_json(&self, options: &JsonOptions) -> Result<Attributes> {
        let mut object = self.wrapped_attributes();
        if let Some(params) = &options.params {
            for (name, value) in params {
                if name == self.key.as_str() {
                    return Err(WrapError::ParamCollision(name.clone()));
                }
                object.insert(name.clone(), value.clone());
            }
        }
        Ok(object)
    }
}

impl Wrappable for Model {
    fn wrap_key(&self) -> &WrapKey {
        &self.key
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key() -> WrapKey {
        WrapKey::new("post").unwrap()
    }

    fn attrs(value: serde_json::Value) -> Attributes {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_construction_is_silent() {
        let model = Model::with_initial(key(), Some(attrs(json!({"post": {"a": 1}}))));
        assert!(model.changes().is_empty());
        assert_eq!(model.previous_attributes(), model.attributes());
    }

    #[test]
    fn test_set_queues_changes() {
        let mut model = Model::new(key());
        model.set(attrs(json!({"a": 1})), &SetOptions::default());
        let changes = model.take_changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].name, "a");
        assert_eq!(changes[0].old, None);
        assert_eq!(changes[0].new, Some(json!(1)));
    }

    #[test]
    fn test_silent_set_queues_nothing() {
        let mut model = Model::new(key());
        model.set(attrs(json!({"a": 1})), &SetOptions::silent());
        assert!(model.changes().is_empty());
    }

    #[test]
    fn test_set_same_value_is_not_a_change() {
        let mut model = Model::new(key());
        model.set(attrs(json!({"a": 1})), &SetOptions::default());
        model.take_changes();
        model.set(attrs(json!({"a": 1})), &SetOptions::default());
        assert!(model.changes().is_empty());
    }

    #[test]
    fn test_unset_tracks_previous() {
        let mut model = Model::new(key());
        model.set(attrs(json!({"a": 1, "b": 2})), &SetOptions::default());
        model.take_changes();
        model.unset("a", &SetOptions::default());
        assert_eq!(model.get("a"), None);
        assert_eq!(
            Value::Object(model.previous_attributes().clone()),
            json!({"a": 1, "b": 2})
        );
        let changes = model.take_changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].new, None);
    }

    #[test]
    fn test_unset_missing_attribute_is_a_noop() {
        let mut model = Model::new(key());
        model.set(attrs(json!({"a": 1})), &SetOptions::default());
        model.take_changes();
        model.unset("zzz", &SetOptions::default());
        assert!(model.changes().is_empty());
    }

    #[test]
    fn test_is_new() {
        let mut model = Model::new(key());
        assert!(model.is_new());
        model.set(attrs(json!({"id": null})), &SetOptions::default());
        assert!(model.is_new());
        model.set(attrs(json!({"id": 7})), &SetOptions::default());
        assert!(!model.is_new());
    }

    #[test]
    fn test_to_json_rejects_wrap_key_param() {
        let mut model = Model::new(key());
        model.set(attrs(json!({"a": 1})), &SetOptions::silent());
        let options = JsonOptions::with_params(attrs(json!({"post": {"evil": true}})));
        let err = model.to_json(&options).unwrap_err();
        assert!(matches!(err, WrapError::ParamCollision(name) if name == "post"));
    }
}
