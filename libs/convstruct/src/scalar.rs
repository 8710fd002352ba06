/// Complex number with real and imaginary parts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

/// A primitive value copied out of the source.
///
/// One variant per primitive width so a converted `u8` stays a `u8`.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    Complex32(Complex<f32>),
    Complex64(Complex<f64>),
    Char(char),
    String(String),
}

impl Scalar {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Any signed or unsigned integer that fits in `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Scalar::I8(v) => Some(v.into()),
            Scalar::I16(v) => Some(v.into()),
            Scalar::I32(v) => Some(v.into()),
            Scalar::I64(v) => Some(v),
            Scalar::I128(v) => i64::try_from(v).ok(),
            Scalar::Isize(v) => i64::try_from(v).ok(),
            Scalar::U8(v) => Some(v.into()),
            Scalar::U16(v) => Some(v.into()),
            Scalar::U32(v) => Some(v.into()),
            Scalar::U64(v) => i64::try_from(v).ok(),
            Scalar::U128(v) => i64::try_from(v).ok(),
            Scalar::Usize(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    /// Any non-negative integer that fits in `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Scalar::U8(v) => Some(v.into()),
            Scalar::U16(v) => Some(v.into()),
            Scalar::U32(v) => Some(v.into()),
            Scalar::U64(v) => Some(v),
            Scalar::U128(v) => u64::try_from(v).ok(),
            Scalar::Usize(v) => u64::try_from(v).ok(),
            Scalar::I8(v) => u64::try_from(v).ok(),
            Scalar::I16(v) => u64::try_from(v).ok(),
            Scalar::I32(v) => u64::try_from(v).ok(),
            Scalar::I64(v) => u64::try_from(v).ok(),
            Scalar::I128(v) => u64::try_from(v).ok(),
            Scalar::Isize(v) => u64::try_from(v).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Scalar::F32(v) => Some(v.into()),
            Scalar::F64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(v) => Some(v),
            _ => None,
        }
    }

    /// Short type name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "bool",
            Scalar::I8(_) => "i8",
            Scalar::I16(_) => "i16",
            Scalar::I32(_) => "i32",
            Scalar::I64(_) => "i64",
            Scalar::I128(_) => "i128",
            Scalar::Isize(_) => "isize",
            Scalar::U8(_) => "u8",
            Scalar::U16(_) => "u16",
            Scalar::U32(_) => "u32",
            Scalar::U64(_) => "u64",
            Scalar::U128(_) => "u128",
            Scalar::Usize(_) => "usize",
            Scalar::F32(_) => "f32",
            Scalar::F64(_) => "f64",
            Scalar::Complex32(_) => "complex32",
            Scalar::Complex64(_) => "complex64",
            Scalar::Char(_) => "char",
            Scalar::String(_) => "string",
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(v: $ty) -> Self {
                    Scalar::$variant(v)
                }
            }
        )*
    };
}

scalar_from! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    Complex<f32> => Complex32,
    Complex<f64> => Complex64,
    char => Char,
    String => String,
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::String(v.to_owned())
    }
}
