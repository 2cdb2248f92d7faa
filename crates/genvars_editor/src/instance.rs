//! Instances of generated single-field structs.

use std::sync::Arc;

use genvars_foundation::text::{StructWriter, TextReader};
use genvars_foundation::{Reflect, Result, StructDesc, TypeDesc};

/// Name of the only field of a generated struct.
pub const VALUE_FIELD: &str = "Value";

/// A generated struct together with the value of its `Value` field.
#[derive(Clone)]
pub struct InstanceStruct {
    desc: Arc<StructDesc>,
    value: Box<dyn Reflect>,
}

impl InstanceStruct {
    pub(crate) fn new(desc: Arc<StructDesc>, value: Box<dyn Reflect>) -> Self {
        Self { desc, value }
    }

    /// Returns the generated struct descriptor.
    #[must_use]
    pub fn desc(&self) -> &Arc<StructDesc> {
        &self.desc
    }

    /// Returns the type of the `Value` field.
    #[must_use]
    pub fn value_type(&self) -> TypeDesc {
        self.value.type_desc()
    }

    /// Returns the edited value.
    #[must_use]
    pub fn value(&self) -> &dyn Reflect {
        &*self.value
    }

    /// Returns the edited value mutably.
    pub fn value_mut(&mut self) -> &mut dyn Reflect {
        &mut *self.value
    }

    /// Renders the instance as struct text, `(Value=...)`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut writer = StructWriter::begin(&mut out);
        writer.field(VALUE_FIELD, &*self.value);
        writer.finish();
        out
    }

    /// Applies an edit given as struct text. Fields other than `Value` are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the text is malformed; the value keeps
    /// whatever was imported before the failure.
    pub fn edit_text(&mut self, text: &str) -> Result<()> {
        let value = &mut self.value;
        let mut reader = TextReader::new(text);
        reader.read_struct(|reader, field| {
            if field == VALUE_FIELD {
                value.import_text(reader, true).map(|()| true)
            } else {
                Ok(false)
            }
        })
    }
}

impl std::fmt::Debug for InstanceStruct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.desc.name(), self.render())
    }
}
