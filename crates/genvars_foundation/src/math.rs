//! Math and utility aggregates.
//!
//! Each type exports as `(Field=value,...)` with the engine's field names and
//! has a packed native byte image, so the storage engine can keep the
//! allowlisted ones as raw bytes.

#![allow(missing_docs)]

use crate::{reflect_enum, reflect_struct};

reflect_struct! {
    /// 2D vector.
    pub struct Vector2D as "Vector2D" {
        pub x: f64 => "X",
        pub y: f64 => "Y",
    }
}

reflect_struct! {
    /// 3D vector.
    pub struct Vector as "Vector" {
        pub x: f64 => "X",
        pub y: f64 => "Y",
        pub z: f64 => "Z",
    }
}

reflect_struct! {
    /// 4D vector.
    pub struct Vector4 as "Vector4" {
        pub x: f64 => "X",
        pub y: f64 => "Y",
        pub z: f64 => "Z",
        pub w: f64 => "W",
    }
}

reflect_struct! {
    /// Integer 2D point.
    pub struct IntPoint as "IntPoint" {
        pub x: i32 => "X",
        pub y: i32 => "Y",
    }
}

reflect_struct! {
    /// Integer 3D vector.
    pub struct IntVector as "IntVector" {
        pub x: i32 => "X",
        pub y: i32 => "Y",
        pub z: i32 => "Z",
    }
}

reflect_struct! {
    /// Euler rotation in degrees.
    pub struct Rotator as "Rotator" {
        pub pitch: f64 => "Pitch",
        pub yaw: f64 => "Yaw",
        pub roll: f64 => "Roll",
    }
}

reflect_struct! {
    /// Rotation quaternion.
    pub struct Quat as "Quat" {
        pub x: f64 => "X",
        pub y: f64 => "Y",
        pub z: f64 => "Z",
        pub w: f64 => "W",
    }
}

reflect_struct! {
    /// Rotation, translation and scale.
    pub struct Transform as "Transform" {
        pub rotation: Quat => "Rotation",
        pub translation: Vector => "Translation",
        pub scale: Vector => "Scale3D",
    }
}

reflect_struct! {
    /// Plane in `X*x + Y*y + Z*z = W` form.
    pub struct Plane as "Plane" {
        pub x: f64 => "X",
        pub y: f64 => "Y",
        pub z: f64 => "Z",
        pub w: f64 => "W",
    }
}

reflect_struct! {
    /// 4x4 matrix stored as four row planes.
    pub struct Matrix as "Matrix" {
        pub x_plane: Plane => "XPlane",
        pub y_plane: Plane => "YPlane",
        pub z_plane: Plane => "ZPlane",
        pub w_plane: Plane => "WPlane",
    }
}

reflect_struct! {
    /// Linear-space color.
    pub struct LinearColor as "LinearColor" {
        pub r: f32 => "R",
        pub g: f32 => "G",
        pub b: f32 => "B",
        pub a: f32 => "A",
    }
}

reflect_struct! {
    /// 8-bit sRGB color in BGRA order.
    pub struct Color as "Color" {
        pub b: u8 => "B",
        pub g: u8 => "G",
        pub r: u8 => "R",
        pub a: u8 => "A",
    }
}

reflect_struct! {
    /// 128-bit globally unique identifier.
    #[derive(Eq, Hash)]
    pub struct Guid as "Guid" {
        pub a: u32 => "A",
        pub b: u32 => "B",
        pub c: u32 => "C",
        pub d: u32 => "D",
    }
}

reflect_struct! {
    /// Axis-aligned 3D box.
    pub struct Box3 as "Box" {
        pub min: Vector => "Min",
        pub max: Vector => "Max",
        pub is_valid: bool => "IsValid",
    }
}

reflect_struct! {
    /// Axis-aligned 2D box.
    pub struct Box2D as "Box2D" {
        pub min: Vector2D => "Min",
        pub max: Vector2D => "Max",
        pub is_valid: bool => "bIsValid",
    }
}

reflect_struct! {
    /// Point in time, in 100ns ticks since 0001-01-01.
    #[derive(Eq, Hash)]
    pub struct DateTime as "DateTime" {
        pub ticks: i64 => "Ticks",
    }
}

reflect_struct! {
    /// Time span in 100ns ticks.
    #[derive(Eq, Hash)]
    pub struct Timespan as "Timespan" {
        pub ticks: i64 => "Ticks",
    }
}

reflect_enum! {
    /// Kind of a range bound.
    pub enum RangeBoundType as "ERangeBoundTypes" : u8 {
        Exclusive = 0,
        Inclusive = 1,
        Open = 2,
    }
}

reflect_struct! {
    /// One bound of a float range.
    pub struct FloatRangeBound as "FloatRangeBound" {
        pub kind: RangeBoundType => "Type",
        pub value: f32 => "Value",
    }
}

reflect_struct! {
    /// Float range with typed bounds.
    pub struct FloatRange as "FloatRange" {
        pub lower: FloatRangeBound => "LowerBound",
        pub upper: FloatRangeBound => "UpperBound",
    }
}

reflect_struct! {
    /// One bound of an integer range.
    pub struct Int32RangeBound as "Int32RangeBound" {
        pub kind: RangeBoundType => "Type",
        pub value: i32 => "Value",
    }
}

reflect_struct! {
    /// Integer range with typed bounds.
    pub struct Int32Range as "Int32Range" {
        pub lower: Int32RangeBound => "LowerBound",
        pub upper: Int32RangeBound => "UpperBound",
    }
}

reflect_struct! {
    /// Closed float interval.
    pub struct FloatInterval as "FloatInterval" {
        pub min: f32 => "Min",
        pub max: f32 => "Max",
    }
}

reflect_struct! {
    /// Closed integer interval.
    pub struct Int32Interval as "Int32Interval" {
        pub min: i32 => "Min",
        pub max: i32 => "Max",
    }
}

reflect_enum! {
    /// Interpolation mode of a curve point.
    pub enum InterpCurveMode as "EInterpCurveMode" : u8 {
        Linear = 0,
        CurveAuto = 1,
        Constant = 2,
        CurveUser = 3,
        CurveBreak = 4,
        CurveAutoClamped = 5,
    }
}

reflect_struct! {
    /// Keyframe of a float curve.
    pub struct InterpCurvePointFloat as "InterpCurvePointFloat" {
        pub in_val: f32 => "InVal",
        pub out_val: f32 => "OutVal",
        pub arrive_tangent: f32 => "ArriveTangent",
        pub leave_tangent: f32 => "LeaveTangent",
        pub interp_mode: InterpCurveMode => "InterpMode",
    }
}

impl Vector2D {
    /// Creates a vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// The unit-scale vector.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a vector.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Vector4 {
    /// Creates a vector.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }
}

impl IntPoint {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl IntVector {
    /// Creates a vector.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl Rotator {
    /// Creates a rotation from pitch, yaw and roll in degrees.
    #[must_use]
    pub const fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }
}

impl Quat {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        rotation: Quat::IDENTITY,
        translation: Vector::ZERO,
        scale: Vector::ONE,
    };
}

impl LinearColor {
    /// Creates a color.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Color {
    /// Creates a color from RGBA components.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }
}

impl Guid {
    /// Creates a GUID from four 32-bit words.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self { a, b, c, d }
    }
}
