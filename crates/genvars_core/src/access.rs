//! Typed accessors.
//!
//! [`StoreGeneric`] and [`FromGeneric`] are implemented per supported type.
//! Numbers and booleans bypass reflection and take the byte fast path;
//! enums store their underlying integer; object and class references are
//! stored as their soft counterparts. Everything else routes through
//! [`Generic::set_value`] and [`Generic::get_value`].
//!
//! Reads coerce: an integer can be read back from a float-sized buffer, a
//! number from text, and a boolean from anything. The silent accessors
//! return a default on failure, the `try_` forms say why.

use genvars_foundation::{
    Array, Box2D, Box3, ClassRef, Color, DateTime, Error, FloatInterval, FloatRange,
    FloatRangeBound, Guid, Int32Interval, Int32Range, Int32RangeBound, IntPoint, IntVector,
    InterpCurveMode, InterpCurvePointFloat, LazyObjectRef, LinearColor, LocText, Map, Matrix,
    Name, ObjectRef, Plane, Quat, RangeBoundType, ReflectEnum, Reflected, Result,
    Rotator, Set, SoftClassRef, SoftObjectRef, Timespan, Transform, Vector, Vector2D, Vector4,
    WeakObjectRef,
};

use crate::generic::Generic;

/// Types that can be stored in a [`Generic`].
pub trait StoreGeneric {
    /// Replaces the contents of `generic` with `self`.
    fn store_into(&self, generic: &mut Generic);
}

/// Types that can be read back out of a [`Generic`].
pub trait FromGeneric: Sized {
    /// Reads the stored value, falling back to the type's default.
    fn from_generic(generic: &Generic) -> Self;

    /// Reads the stored value.
    ///
    /// # Errors
    ///
    /// Fails when the stored data cannot be interpreted as `Self`.
    fn try_from_generic(generic: &Generic) -> Result<Self>;
}

/// Types supported in both directions.
pub trait Storable: StoreGeneric + FromGeneric {}

impl<T: StoreGeneric + FromGeneric> Storable for T {}

impl Generic {
    /// Creates a container holding `value`.
    #[must_use]
    pub fn from_value<T: StoreGeneric + ?Sized>(value: &T) -> Self {
        let mut generic = Self::new();
        value.store_into(&mut generic);
        generic
    }

    /// Stores `value`, replacing the previous contents.
    pub fn set<T: StoreGeneric + ?Sized>(&mut self, value: &T) {
        value.store_into(self);
    }

    /// Reads the stored value as `T`, or `T`'s default if it does not
    /// convert.
    #[must_use]
    pub fn as_<T: FromGeneric>(&self) -> T {
        T::from_generic(self)
    }

    /// Reads the stored value as `T`.
    ///
    /// # Errors
    ///
    /// Returns `UndersizedSource`, `UnparsableText`, `Unconvertible` or
    /// `TypeNotSupported` depending on why the stored data does not convert.
    pub fn try_as<T: FromGeneric>(&self) -> Result<T> {
        T::try_from_generic(self)
    }
}

/// Parses the longest leading decimal integer of `text`, saturating on
/// overflow. Leading whitespace and a sign are accepted.
#[must_use]
pub fn parse_leading_i64(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        let digit = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    seen.then_some(value)
}

/// Parses the longest leading decimal float of `text`. Always uses `.` as
/// the decimal separator.
#[must_use]
pub fn parse_leading_f64(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-' | b'+')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}

/// Reinterprets the first `width` bytes as a signed native-endian integer.
fn signed_at(bytes: &[u8], width: usize) -> Option<i64> {
    let b = bytes.get(..width)?;
    Some(match width {
        1 => i64::from(i8::from_ne_bytes([b[0]])),
        2 => i64::from(i16::from_ne_bytes(b.try_into().ok()?)),
        4 => i64::from(i32::from_ne_bytes(b.try_into().ok()?)),
        8 => i64::from_ne_bytes(b.try_into().ok()?),
        _ => return None,
    })
}

/// Reads an integer from `generic`. Buffers of 1, 2, 4 or 8 bytes are read at
/// their own width; any other size at `native` width.
fn integer_value(generic: &Generic, native: usize, expected: &str) -> Result<i64> {
    let bytes = generic.plain.as_bytes();
    if bytes.is_empty() {
        if generic.text.is_empty() {
            return Ok(0);
        }
        return parse_leading_i64(&generic.text)
            .ok_or_else(|| Error::unparsable(expected, generic.text.clone()));
    }
    let width = match bytes.len() {
        n @ (1 | 2 | 4 | 8) => n,
        _ => native,
    };
    signed_at(bytes, width).ok_or_else(|| Error::undersized(native, bytes.len()))
}

/// Reads a float from `generic`.
fn float_value(generic: &Generic, native: usize, expected: &str) -> Result<f64> {
    let bytes = generic.plain.as_bytes();
    match bytes.len() {
        0 if generic.text.is_empty() => Ok(0.0),
        0 => parse_leading_f64(&generic.text)
            .ok_or_else(|| Error::unparsable(expected, generic.text.clone())),
        4 => Ok(f64::from(f32::from_ne_bytes(
            bytes.try_into().map_err(|_| Error::undersized(4, bytes.len()))?,
        ))),
        8 => Ok(f64::from_ne_bytes(
            bytes.try_into().map_err(|_| Error::undersized(8, bytes.len()))?,
        )),
        n if n < native => Err(Error::undersized(native, n)),
        n => Err(Error::unconvertible(format!("{n}-byte float"))),
    }
}

fn truthiness(generic: &Generic) -> bool {
    match generic.plain.as_bytes() {
        [] => !generic.text.is_empty(),
        [byte] => *byte != 0,
        bytes => bytes.iter().any(|b| *b != 0),
    }
}

macro_rules! impl_storable_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StoreGeneric for $ty {
                fn store_into(&self, generic: &mut Generic) {
                    generic.set_plain_bytes(&self.to_ne_bytes(), &<$ty as Reflected>::static_type());
                }
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::unnecessary_cast)]
            impl FromGeneric for $ty {
                fn from_generic(generic: &Generic) -> Self {
                    Self::try_from_generic(generic).unwrap_or_default()
                }

                fn try_from_generic(generic: &Generic) -> Result<Self> {
                    integer_value(generic, std::mem::size_of::<$ty>(), stringify!($ty))
                        .map(|raw| raw as $ty)
                }
            }

            impl From<$ty> for Generic {
                fn from(value: $ty) -> Self {
                    Generic::from_value(&value)
                }
            }
        )*
    };
}

impl_storable_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_storable_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StoreGeneric for $ty {
                fn store_into(&self, generic: &mut Generic) {
                    generic.set_plain_bytes(&self.to_ne_bytes(), &<$ty as Reflected>::static_type());
                }
            }

            #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
            impl FromGeneric for $ty {
                fn from_generic(generic: &Generic) -> Self {
                    Self::try_from_generic(generic).unwrap_or_default()
                }

                fn try_from_generic(generic: &Generic) -> Result<Self> {
                    float_value(generic, std::mem::size_of::<$ty>(), stringify!($ty))
                        .map(|raw| raw as $ty)
                }
            }

            impl From<$ty> for Generic {
                fn from(value: $ty) -> Self {
                    Generic::from_value(&value)
                }
            }
        )*
    };
}

impl_storable_float!(f32, f64);

impl StoreGeneric for bool {
    fn store_into(&self, generic: &mut Generic) {
        generic.set_plain_bytes(&[u8::from(*self)], &bool::static_type());
    }
}

impl FromGeneric for bool {
    fn from_generic(generic: &Generic) -> Self {
        truthiness(generic)
    }

    fn try_from_generic(generic: &Generic) -> Result<Self> {
        Ok(truthiness(generic))
    }
}

impl From<bool> for Generic {
    fn from(value: bool) -> Self {
        Generic::from_value(&value)
    }
}

impl StoreGeneric for str {
    fn store_into(&self, generic: &mut Generic) {
        generic.set_value(&self.to_owned());
    }
}

impl From<&str> for Generic {
    fn from(value: &str) -> Self {
        Generic::from_value(value)
    }
}

/// Stores an enum as its underlying integer.
pub fn store_enum<E: ReflectEnum>(value: E, generic: &mut Generic) {
    let mut image = Vec::with_capacity(E::WIDTH);
    if value.write_plain(&mut image) {
        generic.set_plain_bytes(&image, &E::static_type());
    } else {
        generic.set_value(&value);
    }
}

/// Reads an enum, falling back to its first variant.
#[must_use]
pub fn load_enum<E: ReflectEnum>(generic: &Generic) -> E {
    try_load_enum(generic).unwrap_or_default()
}

/// Reads an enum from its underlying integer or, for text, from a variant
/// name or a number.
///
/// # Errors
///
/// Fails like the integer accessors do.
pub fn try_load_enum<E: ReflectEnum>(generic: &Generic) -> Result<E> {
    let bytes = generic.plain.as_bytes();
    if bytes.len() == E::WIDTH {
        let mut value = E::default();
        if value.read_plain(bytes).is_some() {
            return Ok(value);
        }
    }
    if bytes.is_empty() {
        if let Some(variant) = E::from_variant_name(generic.text.trim()) {
            return Ok(variant);
        }
    }
    integer_value(generic, E::WIDTH, &E::static_type().to_string()).map(E::from_underlying)
}

/// Implements [`StoreGeneric`], [`FromGeneric`] and `From<T> for Generic`.
///
/// The `value:` form routes through [`Generic::set_value`] and
/// [`Generic::get_value`], which suits any [`Reflected`] type. The `enum:`
/// form stores the underlying integer of a
/// [`ReflectEnum`](genvars_foundation::ReflectEnum).
///
/// ```
/// use genvars_core::{Generic, impl_storable};
///
/// genvars_core::genvars_foundation::reflect_struct! {
///     pub struct Loadout as "Loadout" {
///         pub slots: i32 => "Slots",
///     }
/// }
/// impl_storable!(value: Loadout);
///
/// let g = Generic::from(Loadout { slots: 4 });
/// assert_eq!(g.as_::<Loadout>().slots, 4);
/// ```
#[macro_export]
macro_rules! impl_storable {
    (value: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::StoreGeneric for $ty {
                fn store_into(&self, generic: &mut $crate::Generic) {
                    generic.set_value(self);
                }
            }

            impl $crate::FromGeneric for $ty {
                fn from_generic(generic: &$crate::Generic) -> Self {
                    let mut value = <$ty as ::std::default::Default>::default();
                    generic.get_value(&mut value);
                    value
                }

                fn try_from_generic(generic: &$crate::Generic) -> $crate::Result<Self> {
                    let mut value = <$ty as ::std::default::Default>::default();
                    generic.try_get(&mut value)?;
                    Ok(value)
                }
            }

            impl ::std::convert::From<$ty> for $crate::Generic {
                fn from(value: $ty) -> Self {
                    $crate::Generic::from_value(&value)
                }
            }
        )+
    };
    (enum: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::StoreGeneric for $ty {
                fn store_into(&self, generic: &mut $crate::Generic) {
                    $crate::access::store_enum(*self, generic);
                }
            }

            impl $crate::FromGeneric for $ty {
                fn from_generic(generic: &$crate::Generic) -> Self {
                    $crate::access::load_enum(generic)
                }

                fn try_from_generic(generic: &$crate::Generic) -> $crate::Result<Self> {
                    $crate::access::try_load_enum(generic)
                }
            }

            impl ::std::convert::From<$ty> for $crate::Generic {
                fn from(value: $ty) -> Self {
                    $crate::Generic::from_value(&value)
                }
            }
        )+
    };
}

impl_storable!(value:
    String, Name, LocText, SoftObjectRef, SoftClassRef, WeakObjectRef, LazyObjectRef,
    Vector2D, Vector, Vector4, IntPoint, IntVector, Rotator, Quat, Transform, Plane, Matrix,
    LinearColor, Color, Guid, Box3, Box2D, DateTime, Timespan, FloatRangeBound, FloatRange,
    Int32RangeBound, Int32Range, FloatInterval, Int32Interval, InterpCurvePointFloat,
);

impl_storable!(enum: RangeBoundType, InterpCurveMode);

impl StoreGeneric for ObjectRef {
    fn store_into(&self, generic: &mut Generic) {
        generic.set_value(&SoftObjectRef::new(self.path()));
    }
}

impl FromGeneric for ObjectRef {
    fn from_generic(generic: &Generic) -> Self {
        ObjectRef::from(SoftObjectRef::from_generic(generic).load())
    }

    fn try_from_generic(generic: &Generic) -> Result<Self> {
        let soft = SoftObjectRef::try_from_generic(generic)?;
        Ok(ObjectRef::from(soft.load()))
    }
}

impl From<ObjectRef> for Generic {
    fn from(value: ObjectRef) -> Self {
        Generic::from_value(&value)
    }
}

impl StoreGeneric for ClassRef {
    fn store_into(&self, generic: &mut Generic) {
        generic.set_value(&SoftClassRef::new(self.path()));
    }
}

impl FromGeneric for ClassRef {
    fn from_generic(generic: &Generic) -> Self {
        Self::try_from_generic(generic).unwrap_or_default()
    }

    fn try_from_generic(generic: &Generic) -> Result<Self> {
        let soft = SoftClassRef::try_from_generic(generic)?;
        Ok(soft.load().map(|class| ClassRef::new(&class)).unwrap_or_default())
    }
}

impl From<ClassRef> for Generic {
    fn from(value: ClassRef) -> Self {
        Generic::from_value(&value)
    }
}

macro_rules! impl_storable_container {
    ($([$($generics:tt)*] $ty:ty;)+) => {
        $(
            impl<$($generics)*> StoreGeneric for $ty {
                fn store_into(&self, generic: &mut Generic) {
                    generic.set_value(self);
                }
            }

            impl<$($generics)*> FromGeneric for $ty {
                fn from_generic(generic: &Generic) -> Self {
                    let mut value = Self::default();
                    generic.get_value(&mut value);
                    value
                }

                fn try_from_generic(generic: &Generic) -> Result<Self> {
                    let mut value = Self::default();
                    generic.try_get(&mut value)?;
                    Ok(value)
                }
            }

            impl<$($generics)*> From<$ty> for Generic {
                fn from(value: $ty) -> Self {
                    Generic::from_value(&value)
                }
            }
        )+
    };
}

impl_storable_container! {
    [T: Reflected + Clone] Array<T>;
    [T: Reflected + Clone + Ord] Set<T>;
    [K: Reflected + Clone + Ord, V: Reflected + Clone] Map<K, V>;
}
