//! Per-session state for editing containers.

use std::collections::HashMap;
use std::sync::Arc;

use genvars_core::Generic;
use genvars_foundation::{Error, FieldDesc, Result, StructDesc, TypeDesc, TypeRegistry};
use tracing::debug;

use crate::instance::{InstanceStruct, VALUE_FIELD};

/// The type an editor edits a container as.
pub type PinType = TypeDesc;

/// Editing state shared by every container edited in one session.
#[derive(Debug)]
pub struct EditorSession {
    registry: TypeRegistry,
    struct_cache: HashMap<PinType, Arc<StructDesc>>,
    next_id: u64,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::with_registry(TypeRegistry::with_builtins())
    }
}

impl EditorSession {
    /// Creates a session that knows every built-in type.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session over a custom registry.
    #[must_use]
    pub fn with_registry(registry: TypeRegistry) -> Self {
        Self {
            registry,
            struct_cache: HashMap::new(),
            next_id: 0,
        }
    }

    /// Returns the type registry.
    #[must_use]
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Returns the type registry for registering additional types.
    pub fn registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.registry
    }

    /// Returns the number of generated structs.
    #[must_use]
    pub fn cached_struct_count(&self) -> usize {
        self.struct_cache.len()
    }

    /// Returns the generated struct for `pin`, creating it on first use.
    pub fn instance_struct_desc(&mut self, pin: &PinType) -> Arc<StructDesc> {
        if let Some(desc) = self.struct_cache.get(pin) {
            return Arc::clone(desc);
        }
        let name = format!("Generic_GEN_{}", self.next_id);
        self.next_id += 1;
        let desc = Arc::new(StructDesc::new(
            name,
            pin.size(),
            vec![FieldDesc::new(VALUE_FIELD, pin.clone())],
        ));
        debug!(target: "genvars::generic", pin = %pin, name = desc.name(), "generated edit struct");
        self.struct_cache.insert(pin.clone(), Arc::clone(&desc));
        desc
    }

    /// Returns the pin type shared by every container in `generics`, if
    /// any.
    #[must_use]
    pub fn common_pin_type(generics: &[Generic]) -> Option<PinType> {
        let (first, rest) = generics.split_first()?;
        let pin = first.edit_type()?;
        rest.iter()
            .all(|g| g.edit_type() == Some(pin))
            .then(|| pin.clone())
    }

    /// Builds an editable instance for `generic`. A non-empty container
    /// pre-fills the value; an empty one is seeded with the default.
    ///
    /// # Errors
    ///
    /// Fails when the container has no pin type or the registry cannot
    /// create a value of it.
    pub fn instance_for(&mut self, generic: &mut Generic) -> Result<InstanceStruct> {
        let pin = generic
            .edit_type()
            .cloned()
            .ok_or_else(|| Error::unconvertible("container without a pin type"))?;
        let mut value = self.registry.instantiate(&pin)?;
        if generic.is_empty() {
            generic.set_value(&*value);
            generic.set_edit_type(Some(pin.clone()));
        } else {
            generic.get_value(&mut *value);
        }
        Ok(InstanceStruct::new(self.instance_struct_desc(&pin), value))
    }

    /// Writes an edited instance back into `generic`.
    pub fn commit(&self, instance: &InstanceStruct, generic: &mut Generic) {
        generic.set_value(instance.value());
        generic.set_edit_type(Some(instance.value_type()));
    }

    /// Writes an edited instance back into every container.
    pub fn commit_all(&self, instance: &InstanceStruct, generics: &mut [Generic]) {
        for generic in generics {
            self.commit(instance, generic);
        }
    }

    /// Changes the pin type of `generic` and forgets its references. The
    /// stored data is left as is and is reinterpreted on the next read.
    pub fn change_type(&self, generic: &mut Generic, pin: PinType) {
        generic.set_edit_type(Some(pin));
        generic.clear_references();
    }
}
