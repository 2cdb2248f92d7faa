//! The reflection traits every storable value implements.
//!
//! [`Reflect`] is object safe and is what the storage engine works with: it
//! describes the value, exports and imports canonical text, and optionally
//! exposes a raw native-endian byte image. [`Reflected`] adds the static
//! descriptor for concrete types.

use std::any::Any;
use std::fmt::{self, Write as _};

use crate::error::{Error, Result};
use crate::object::SoftObjectPath;
use crate::text::{TextReader, write_quoted, write_string};
use crate::types::{TypeDesc, TypeKind};

/// A value the storage engine can describe, export, import and copy.
pub trait Reflect: ReflectClone + Send + Sync + 'static {
    /// Returns the value's type descriptor.
    fn type_desc(&self) -> TypeDesc;

    /// Appends the canonical text of this value. `nested` is true inside
    /// aggregates and containers.
    fn export_text(&self, out: &mut String, nested: bool);

    /// Replaces this value with one parsed from `reader`.
    ///
    /// # Errors
    ///
    /// Returns a parse error when the text does not describe a value of this
    /// type. The value may be partially written on failure.
    fn import_text(&mut self, reader: &mut TextReader<'_>, nested: bool) -> Result<()>;

    /// Resets the value to its default.
    fn clear_value(&mut self);

    /// Appends the native byte image. Returns false if the type has none.
    fn write_plain(&self, out: &mut Vec<u8>) -> bool {
        let _ = out;
        false
    }

    /// Reads the native byte image from the front of `bytes`, returning the
    /// number of bytes consumed.
    fn read_plain(&mut self, bytes: &[u8]) -> Option<usize> {
        let _ = bytes;
        None
    }

    /// Calls `visit` for each directly contained value.
    fn visit_children<'a>(&'a self, visit: &mut dyn FnMut(&'a dyn Reflect)) {
        let _ = visit;
    }

    /// Returns the soft path if this is a non-null object reference.
    fn soft_reference(&self) -> Option<SoftObjectPath> {
        None
    }
}

/// Object-safe cloning and downcasting, implemented for every
/// `Reflect + Clone` type.
pub trait ReflectClone {
    /// Boxes a copy of this value.
    fn clone_reflect(&self) -> Box<dyn Reflect>;

    /// Overwrites this value with `other` if both are the same concrete type.
    fn copy_from(&mut self, other: &dyn Reflect) -> bool;

    /// Upcasts to [`Any`].
    fn as_any(&self) -> &dyn Any;

    /// Upcasts to mutable [`Any`].
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Upcasts to [`Reflect`].
    fn as_reflect(&self) -> &dyn Reflect;
}

impl<T: Reflect + Clone> ReflectClone for T {
    fn clone_reflect(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    fn copy_from(&mut self, other: &dyn Reflect) -> bool {
        match other.as_any().downcast_ref::<T>() {
            Some(other) => {
                self.clone_from(other);
                true
            }
            None => false,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_reflect(&self) -> &dyn Reflect {
        self
    }
}

impl Clone for Box<dyn Reflect> {
    fn clone(&self) -> Self {
        (**self).clone_reflect()
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.type_desc(), to_text(self))
    }
}

/// Static descriptor for concrete reflected types.
pub trait Reflected: Reflect + Default {
    /// Returns the descriptor shared by every value of this type.
    fn static_type() -> TypeDesc;
}

/// Enums declared through [`reflect_enum!`](crate::reflect_enum).
pub trait ReflectEnum: Reflected + Copy {
    /// Width of the underlying integer in bytes.
    const WIDTH: usize;

    /// Every variant in declaration order.
    const VARIANTS: &'static [Self];

    /// Returns the underlying integer.
    fn to_underlying(self) -> i64;

    /// Maps an underlying integer to a variant; unknown values give the first
    /// variant.
    fn from_underlying(value: i64) -> Self;

    /// Returns the variant's name.
    fn variant_name(self) -> &'static str;

    /// Looks a variant up by name, accepting an `Enum::` qualifier.
    fn from_variant_name(name: &str) -> Option<Self> {
        let short = name.rsplit("::").next().unwrap_or(name);
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.variant_name() == short)
    }
}

/// Exports `value` as top-level canonical text.
#[must_use]
pub fn to_text(value: &dyn Reflect) -> String {
    let mut out = String::new();
    value.export_text(&mut out, false);
    out
}

/// Imports `value` from top-level canonical text.
///
/// The import overlays `value`: struct fields absent from the text keep
/// their current values. Call [`Reflect::clear_value`] first to import onto
/// defaults.
///
/// # Errors
///
/// Returns the import error with the target type attached as context.
pub fn from_text(value: &mut dyn Reflect, text: &str) -> Result<()> {
    let mut reader = TextReader::new(text);
    value.import_text(&mut reader, false).map_err(|e| {
        let offset = match &e.kind {
            crate::ErrorKind::Parse { offset, .. } => Some(*offset),
            _ => None,
        };
        let mut context = e
            .context
            .clone()
            .unwrap_or_default()
            .with_source(value.type_desc().to_string());
        context.offset = offset;
        Error {
            kind: e.kind,
            context: Some(context),
        }
    })
}

/// Imports an enum from a variant name or an underlying integer.
///
/// # Errors
///
/// Fails when the token is neither.
pub fn import_enum<E: ReflectEnum>(reader: &mut TextReader<'_>) -> Result<E> {
    let token = reader.read_token();
    if let Some(variant) = E::from_variant_name(token) {
        return Ok(variant);
    }
    token
        .parse::<i64>()
        .map(E::from_underlying)
        .map_err(|_| reader.error(format!("unknown variant '{token}'")))
}

macro_rules! impl_reflect_number {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Reflected for $ty {
                fn static_type() -> TypeDesc {
                    TypeDesc::new(TypeKind::$kind, std::mem::size_of::<$ty>())
                }
            }

            impl Reflect for $ty {
                fn type_desc(&self) -> TypeDesc {
                    <Self as Reflected>::static_type()
                }

                fn export_text(&self, out: &mut String, _nested: bool) {
                    let _ = write!(out, "{self}");
                }

                fn import_text(&mut self, reader: &mut TextReader<'_>, _nested: bool) -> Result<()> {
                    let token = reader.read_token();
                    *self = token.parse::<$ty>().map_err(|e| {
                        reader.error(format!("invalid {} '{token}': {e}", stringify!($ty)))
                    })?;
                    Ok(())
                }

                fn clear_value(&mut self) {
                    *self = <$ty>::default();
                }

                fn write_plain(&self, out: &mut Vec<u8>) -> bool {
                    out.extend_from_slice(&self.to_ne_bytes());
                    true
                }

                fn read_plain(&mut self, bytes: &[u8]) -> Option<usize> {
                    const N: usize = std::mem::size_of::<$ty>();
                    let raw: [u8; N] = bytes.get(..N)?.try_into().ok()?;
                    *self = <$ty>::from_ne_bytes(raw);
                    Some(N)
                }
            }
        )*
    };
}

impl_reflect_number!(
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float,
    f64 => Double,
);

impl Reflected for bool {
    fn static_type() -> TypeDesc {
        TypeDesc::bool()
    }
}

impl Reflect for bool {
    fn type_desc(&self) -> TypeDesc {
        Self::static_type()
    }

    fn export_text(&self, out: &mut String, _nested: bool) {
        out.push_str(if *self { "True" } else { "False" });
    }

    fn import_text(&mut self, reader: &mut TextReader<'_>, _nested: bool) -> Result<()> {
        let token = reader.read_token();
        *self = match token {
            "True" | "true" | "1" => true,
            "False" | "false" | "0" => false,
            _ => return Err(reader.error(format!("invalid bool '{token}'"))),
        };
        Ok(())
    }

    fn clear_value(&mut self) {
        *self = false;
    }

    fn write_plain(&self, out: &mut Vec<u8>) -> bool {
        out.push(u8::from(*self));
        true
    }

    fn read_plain(&mut self, bytes: &[u8]) -> Option<usize> {
        *self = *bytes.first()? != 0;
        Some(1)
    }
}

impl Reflected for String {
    fn static_type() -> TypeDesc {
        TypeDesc::new(TypeKind::Str, std::mem::size_of::<String>())
    }
}

impl Reflect for String {
    fn type_desc(&self) -> TypeDesc {
        Self::static_type()
    }

    fn export_text(&self, out: &mut String, nested: bool) {
        write_string(out, self, nested);
    }

    fn import_text(&mut self, reader: &mut TextReader<'_>, nested: bool) -> Result<()> {
        *self = reader.read_string(nested)?;
        Ok(())
    }

    fn clear_value(&mut self) {
        self.clear();
    }
}

/// Localizable text: a source string plus an optional namespace and key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocText {
    /// Localization namespace.
    pub namespace: String,
    /// Localization key.
    pub key: String,
    /// Source (display) string.
    pub source: String,
}

impl LocText {
    /// Creates culture-invariant text.
    #[must_use]
    pub fn invariant(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// Creates localized text.
    #[must_use]
    pub fn localized(
        namespace: impl Into<String>,
        key: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
            source: source.into(),
        }
    }

    /// Returns true if the text carries no namespace or key.
    #[must_use]
    pub fn is_invariant(&self) -> bool {
        self.namespace.is_empty() && self.key.is_empty()
    }
}

impl fmt::Display for LocText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Reflected for LocText {
    fn static_type() -> TypeDesc {
        TypeDesc::new(TypeKind::Text, std::mem::size_of::<LocText>())
    }
}

impl Reflect for LocText {
    fn type_desc(&self) -> TypeDesc {
        Self::static_type()
    }

    fn export_text(&self, out: &mut String, _nested: bool) {
        if self.is_invariant() {
            out.push_str("INVTEXT(");
        } else {
            out.push_str("NSLOCTEXT(");
            write_quoted(out, &self.namespace);
            out.push_str(", ");
            write_quoted(out, &self.key);
            out.push_str(", ");
        }
        write_quoted(out, &self.source);
        out.push(')');
    }

    fn import_text(&mut self, reader: &mut TextReader<'_>, nested: bool) -> Result<()> {
        let ahead = reader.remaining().trim_start();
        if ahead.starts_with("NSLOCTEXT") {
            reader.read_token();
            reader.expect('(')?;
            let namespace = reader.read_quoted()?;
            reader.expect(',')?;
            let key = reader.read_quoted()?;
            reader.expect(',')?;
            let source = reader.read_quoted()?;
            reader.expect(')')?;
            *self = Self::localized(namespace, key, source);
        } else if ahead.starts_with("INVTEXT") {
            reader.read_token();
            reader.expect('(')?;
            let source = reader.read_quoted()?;
            reader.expect(')')?;
            *self = Self::invariant(source);
        } else {
            *self = Self::invariant(reader.read_string(nested)?);
        }
        Ok(())
    }

    fn clear_value(&mut self) {
        *self = Self::default();
    }
}

/// Declares a reflected aggregate.
///
/// Each field maps to the name it carries in canonical text. The byte image
/// is the packed concatenation of the fields' images.
///
/// ```
/// genvars_foundation::reflect_struct! {
///     pub struct Stats as "Stats" {
///         pub health: i32 => "Health",
///         pub speed: f32 => "Speed",
///     }
/// }
///
/// let stats = Stats { health: 10, speed: 1.5 };
/// assert_eq!(genvars_foundation::to_text(&stats), "(Health=10,Speed=1.5)");
/// ```
#[macro_export]
macro_rules! reflect_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $ty:ident as $name:literal {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty => $fname:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        $vis struct $ty {
            $( $(#[$fmeta])* $fvis $field: $fty, )*
        }

        impl $crate::Reflected for $ty {
            fn static_type() -> $crate::TypeDesc {
                static DESC: $crate::__private::Lazy<$crate::TypeDesc> =
                    $crate::__private::Lazy::new(|| {
                        $crate::TypeDesc::structure($crate::StructDesc::packed(
                            $name,
                            vec![$(
                                $crate::FieldDesc::new(
                                    $fname,
                                    <$fty as $crate::Reflected>::static_type(),
                                ),
                            )*],
                        ))
                    });
                DESC.clone()
            }
        }

        #[allow(unused_variables, unused_mut)]
        impl $crate::Reflect for $ty {
            fn type_desc(&self) -> $crate::TypeDesc {
                <Self as $crate::Reflected>::static_type()
            }

            fn export_text(&self, out: &mut String, _nested: bool) {
                let mut writer = $crate::text::StructWriter::begin(out);
                $( writer.field($fname, &self.$field); )*
                writer.finish();
            }

            fn import_text(
                &mut self,
                reader: &mut $crate::text::TextReader<'_>,
                _nested: bool,
            ) -> $crate::Result<()> {
                reader.read_struct(|reader, field| match field {
                    $( $fname => $crate::Reflect::import_text(&mut self.$field, reader, true)
                        .map(|()| true), )*
                    _ => Ok(false),
                })
            }

            fn clear_value(&mut self) {
                *self = Self::default();
            }

            fn write_plain(&self, out: &mut Vec<u8>) -> bool {
                true $( && $crate::Reflect::write_plain(&self.$field, out) )*
            }

            fn read_plain(&mut self, bytes: &[u8]) -> Option<usize> {
                let mut offset = 0usize;
                $( offset += $crate::Reflect::read_plain(&mut self.$field, bytes.get(offset..)?)?; )*
                Some(offset)
            }

            fn visit_children<'a>(&'a self, visit: &mut dyn FnMut(&'a dyn $crate::Reflect)) {
                $( visit(&self.$field); )*
            }
        }
    };
}

/// Declares a reflected enum with an explicit underlying integer type.
///
/// The first variant is the default and the target for unknown underlying
/// values.
///
/// ```
/// genvars_foundation::reflect_enum! {
///     pub enum Mood as "EMood" : u8 {
///         Calm = 0,
///         Angry = 1,
///     }
/// }
///
/// assert_eq!(genvars_foundation::to_text(&Mood::Angry), "Angry");
/// ```
#[macro_export]
macro_rules! reflect_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $ty:ident as $name:literal : $repr:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr($repr)]
        $vis enum $ty {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl ::std::default::Default for $ty {
            fn default() -> Self {
                <Self as $crate::ReflectEnum>::VARIANTS[0]
            }
        }

        #[allow(clippy::cast_possible_wrap, clippy::cast_lossless)]
        impl $crate::ReflectEnum for $ty {
            const WIDTH: usize = ::std::mem::size_of::<$repr>();
            const VARIANTS: &'static [Self] = &[$( Self::$variant ),+];

            fn to_underlying(self) -> i64 {
                self as $repr as i64
            }

            fn from_underlying(value: i64) -> Self {
                $( if value == $value { return Self::$variant; } )+
                Self::default()
            }

            fn variant_name(self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )+
                }
            }
        }

        impl $crate::Reflected for $ty {
            fn static_type() -> $crate::TypeDesc {
                static DESC: $crate::__private::Lazy<$crate::TypeDesc> =
                    $crate::__private::Lazy::new(|| {
                        $crate::TypeDesc::enumeration($crate::EnumDesc {
                            name: $name.into(),
                            width: ::std::mem::size_of::<$repr>(),
                            variants: vec![$( (stringify!($variant).into(), $value), )+],
                        })
                    });
                DESC.clone()
            }
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
        impl $crate::Reflect for $ty {
            fn type_desc(&self) -> $crate::TypeDesc {
                <Self as $crate::Reflected>::static_type()
            }

            fn export_text(&self, out: &mut String, _nested: bool) {
                out.push_str($crate::ReflectEnum::variant_name(*self));
            }

            fn import_text(
                &mut self,
                reader: &mut $crate::text::TextReader<'_>,
                _nested: bool,
            ) -> $crate::Result<()> {
                *self = $crate::reflect::import_enum::<Self>(reader)?;
                Ok(())
            }

            fn clear_value(&mut self) {
                *self = Self::default();
            }

            fn write_plain(&self, out: &mut Vec<u8>) -> bool {
                out.extend_from_slice(&(*self as $repr).to_ne_bytes());
                true
            }

            fn read_plain(&mut self, bytes: &[u8]) -> Option<usize> {
                const N: usize = ::std::mem::size_of::<$repr>();
                let raw: [u8; N] = bytes.get(..N)?.try_into().ok()?;
                *self = <Self as $crate::ReflectEnum>::from_underlying(
                    <$repr>::from_ne_bytes(raw) as i64,
                );
                Some(N)
            }
        }
    };
}
