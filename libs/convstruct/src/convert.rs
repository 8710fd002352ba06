use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::mpsc;
use std::sync::Arc;

use crate::options::ConvertOptions;
use crate::scalar::{Complex, Scalar};
use crate::value::{Dict, DynamicValue, KeyKind, MapKey, Record};

/// Reduction of a typed value to a [`DynamicValue`] tree.
///
/// Implemented per shape:
/// - primitives and strings: `Scalar` copy
/// - `#[derive(Convert)]` structs: `Record`
/// - arrays, slices, `Vec`, `VecDeque`, sets, tuples: `List`
/// - `HashMap`, `BTreeMap`: `Dict`
/// - `&T`, `Box`, `Rc`, `Arc`, `Cow`: transparent
/// - `Option::None`, `()`: `Null`
/// - functions, raw pointers, channel endpoints: `Null`
///
/// `dyn Convert` plays the role of an untyped "any" value.
///
/// Conversion never fails. Cyclic `Rc`/`Arc` graphs are not detected and
/// recurse until the stack runs out.
pub trait Convert {
    fn convert_with(&self, options: &ConvertOptions) -> DynamicValue;
}

/// Convert `value` with `options`, or the default options (`json` tag label,
/// fallback to declared field names) when `None`.
pub fn convert<T: Convert + ?Sized>(value: &T, options: Option<&ConvertOptions>) -> DynamicValue {
    match options {
        Some(options) => value.convert_with(options),
        None => value.convert_with(&ConvertOptions::default()),
    }
}

/// Converter bound to one set of options.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn convert<T: Convert + ?Sized>(&self, value: &T) -> DynamicValue {
        value.convert_with(&self.options)
    }
}

pub(crate) fn non_representable(kind: &'static str) -> DynamicValue {
    tracing::trace!(kind, "non-representable value converted to null");
    DynamicValue::Null
}

fn convert_seq<'a, T, I>(items: I, options: &ConvertOptions) -> DynamicValue
where
    T: Convert + 'a,
    I: ExactSizeIterator<Item = &'a T>,
{
    let mut list = Vec::with_capacity(items.len());
    for item in items {
        list.push(item.convert_with(options));
    }
    DynamicValue::List(list)
}

fn convert_map<'a, K, V, I>(entries: I, options: &ConvertOptions) -> DynamicValue
where
    K: ConvertKey + 'a,
    V: Convert + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    let mut dict = Dict::new(K::KIND);
    for (key, value) in entries {
        dict.insert(key.to_map_key(), value.convert_with(options));
    }
    DynamicValue::Dict(dict)
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

macro_rules! convert_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Convert for $ty {
                fn convert_with(&self, _options: &ConvertOptions) -> DynamicValue {
                    DynamicValue::Scalar(Scalar::from(*self))
                }
            }
        )*
    };
}

convert_scalar!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char,
    Complex<f32>, Complex<f64>,
);

impl Convert for str {
    fn convert_with(&self, _options: &ConvertOptions) -> DynamicValue {
        DynamicValue::Scalar(Scalar::String(self.to_owned()))
    }
}

impl Convert for String {
    fn convert_with(&self, _options: &ConvertOptions) -> DynamicValue {
        DynamicValue::Scalar(Scalar::String(self.clone()))
    }
}

// ---------------------------------------------------------------------------
// Absent values and pointers
// ---------------------------------------------------------------------------

impl Convert for () {
    fn convert_with(&self, _options: &ConvertOptions) -> DynamicValue {
        DynamicValue::Null
    }
}

impl<T: Convert> Convert for Option<T> {
    fn convert_with(&self, options: &ConvertOptions) -> DynamicValue {
        match self {
            Some(value) => value.convert_with(options),
            None => DynamicValue::Null,
        }
    }
}

macro_rules! convert_transparent {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: Convert + ?Sized> Convert for $ptr {
                fn convert_with(&self, options: &ConvertOptions) -> DynamicValue {
                    (**self).convert_with(options)
                }
            }
        )*
    };
}

convert_transparent!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<B> Convert for Cow<'_, B>
where
    B: Convert + ToOwned + ?Sized,
{
    fn convert_with(&self, options: &ConvertOptions) -> DynamicValue {
        (**self).convert_with(options)
    }
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

impl<T: Convert> Convert for [T] {
    fn convert_with(&self, options: &ConvertOptions) -> DynamicValue {
        convert_seq(self.iter(), options)
    }
}

impl<T: Convert, const N: usize> Convert for [T; N] {
    fn convert_with(&self, options: &ConvertOptions) -> DynamicValue {
        convert_seq(self.iter(), options)
    }
}

impl<T: Convert> Convert for Vec<T> {
    fn convert_with(&self, options: &ConvertOptions) -> DynamicValue {
        convert_seq(self.iter(), options)
    }
}

impl<T: Convert> Convert for VecDeque<T> {
    fn convert_with(&self, options: &ConvertOptions) -> DynamicValue {
        convert_seq(self.iter(), options)
    }
}

impl<T: Convert, S> Convert for HashSet<T, S> {
    fn convert_with(&self, options: &ConvertOptions) -> DynamicValue {
        convert_seq(self.iter(), options)
    }
}

impl<T: Convert> Convert for BTreeSet<T> {
    fn convert_with(&self, options: &ConvertOptions) -> DynamicValue {
        convert_seq(self.iter(), options)
    }
}

macro_rules! convert_tuple {
    ($($idx:tt $name:ident),+) => {
        impl<$($name: Convert),+> Convert for ($($name,)+) {
            fn convert_with(&self, options: &ConvertOptions) -> DynamicValue {
                DynamicValue::List(vec![$(self.$idx.convert_with(options)),+])
            }
        }
    };
}

convert_tuple!(0 A);
convert_tuple!(0 A, 1 B);
convert_tuple!(0 A, 1 B, 2 C);
convert_tuple!(0 A, 1 B, 2 C, 3 D);
convert_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
convert_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
convert_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
convert_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

/// Map key types. `KIND` is recorded on the [`Dict`] so an empty map still
/// knows its key type.
pub trait ConvertKey {
    const KIND: KeyKind;

    fn to_map_key(&self) -> MapKey;
}

macro_rules! convert_key {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ConvertKey for $ty {
                const KIND: KeyKind = KeyKind::$variant;

                fn to_map_key(&self) -> MapKey {
                    MapKey::$variant(*self)
                }
            }
        )*
    };
}

convert_key! {
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
    char => Char,
}

impl ConvertKey for str {
    const KIND: KeyKind = KeyKind::String;

    fn to_map_key(&self) -> MapKey {
        MapKey::String(self.to_owned())
    }
}

impl ConvertKey for String {
    const KIND: KeyKind = KeyKind::String;

    fn to_map_key(&self) -> MapKey {
        MapKey::String(self.clone())
    }
}

impl ConvertKey for MapKey {
    const KIND: KeyKind = KeyKind::Any;

    fn to_map_key(&self) -> MapKey {
        self.clone()
    }
}

macro_rules! convert_key_transparent {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<K: ConvertKey + ?Sized> ConvertKey for $ptr {
                const KIND: KeyKind = K::KIND;

                fn to_map_key(&self) -> MapKey {
                    (**self).to_map_key()
                }
            }
        )*
    };
}

convert_key_transparent!(&K, Box<K>, Rc<K>, Arc<K>);

impl<K: ConvertKey, V: Convert, S> Convert for HashMap<K, V, S> {
    fn convert_with(&self, options: &ConvertOptions) -> DynamicValue {
        convert_map(self.iter(), options)
    }
}

impl<K: ConvertKey, V: Convert> Convert for BTreeMap<K, V> {
    fn convert_with(&self, options: &ConvertOptions) -> DynamicValue {
        convert_map(self.iter(), options)
    }
}

// ---------------------------------------------------------------------------
// Already-dynamic values
// ---------------------------------------------------------------------------

impl Convert for DynamicValue {
    fn convert_with(&self, _options: &ConvertOptions) -> DynamicValue {
        self.clone()
    }
}

impl Convert for Scalar {
    fn convert_with(&self, _options: &ConvertOptions) -> DynamicValue {
        DynamicValue::Scalar(self.clone())
    }
}

impl Convert for Record {
    fn convert_with(&self, _options: &ConvertOptions) -> DynamicValue {
        DynamicValue::Record(self.clone())
    }
}

impl Convert for Dict {
    fn convert_with(&self, _options: &ConvertOptions) -> DynamicValue {
        DynamicValue::Dict(self.clone())
    }
}

impl Convert for MapKey {
    fn convert_with(&self, _options: &ConvertOptions) -> DynamicValue {
        let scalar = match self.clone() {
            MapKey::Bool(v) => Scalar::Bool(v),
            MapKey::I8(v) => Scalar::I8(v),
            MapKey::I16(v) => Scalar::I16(v),
            MapKey::I32(v) => Scalar::I32(v),
            MapKey::I64(v) => Scalar::I64(v),
            MapKey::I128(v) => Scalar::I128(v),
            MapKey::Isize(v) => Scalar::Isize(v),
            MapKey::U8(v) => Scalar::U8(v),
            MapKey::U16(v) => Scalar::U16(v),
            MapKey::U32(v) => Scalar::U32(v),
            MapKey::U64(v) => Scalar::U64(v),
            MapKey::U128(v) => Scalar::U128(v),
            MapKey::Usize(v) => Scalar::Usize(v),
            MapKey::Char(v) => Scalar::Char(v),
            MapKey::String(v) => Scalar::String(v),
        };
        DynamicValue::Scalar(scalar)
    }
}

// ---------------------------------------------------------------------------
// Non-representable kinds
// ---------------------------------------------------------------------------

macro_rules! non_representable_fn {
    (@dyn $closure:ident [$($arg:ident),*]) => {
        impl<R, $($arg),*> Convert for dyn $closure($($arg),*) -> R {
            fn convert_with(&self, _options: &ConvertOptions) -> DynamicValue {
                non_representable("closure")
            }
        }

        impl<R, $($arg),*> Convert for dyn $closure($($arg),*) -> R + Send {
            fn convert_with(&self, _options: &ConvertOptions) -> DynamicValue {
                non_representable("closure")
            }
        }

        impl<R, $($arg),*> Convert for dyn $closure($($arg),*) -> R + Send + Sync {
            fn convert_with(&self, _options: &ConvertOptions) -> DynamicValue {
                non_representable("closure")
            }
        }
    };
    ($($arg:ident),*) => {
        impl<R, $($arg),*> Convert for fn($($arg),*) -> R {
            fn convert_with(&self, _options: &ConvertOptions) -> DynamicValue {
                non_representable("fn")
            }
        }

        impl<R, $($arg),*> Convert for unsafe fn($($arg),*) -> R {
            fn convert_with(&self, _options: &ConvertOptions) -> DynamicValue {
                non_representable("fn")
            }
        }

        non_representable_fn!(@dyn Fn [$($arg),*]);
        non_representable_fn!(@dyn FnMut [$($arg),*]);
        non_representable_fn!(@dyn FnOnce [$($arg),*]);
    };
}

non_representable_fn!();
non_representable_fn!(A);
non_representable_fn!(A, B);
non_representable_fn!(A, B, C);
non_representable_fn!(A, B, C, D);

impl<T: ?Sized> Convert for *const T {
    fn convert_with(&self, _options: &ConvertOptions) -> DynamicValue {
        non_representable("pointer")
    }
}

impl<T: ?Sized> Convert for *mut T {
    fn convert_with(&self, _options: &ConvertOptions) -> DynamicValue {
        non_representable("pointer")
    }
}

impl<T: ?Sized> Convert for NonNull<T> {
    fn convert_with(&self, _options: &ConvertOptions) -> DynamicValue {
        non_representable("pointer")
    }
}

macro_rules! channel_endpoint {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T> $crate::convert::Convert for $ty {
                fn convert_with(
                    &self,
                    _options: &$crate::options::ConvertOptions,
                ) -> $crate::value::DynamicValue {
                    $crate::convert::non_representable("channel")
                }
            }
        )*
    };
}

pub(crate) use channel_endpoint;

channel_endpoint!(mpsc::Sender<T>, mpsc::SyncSender<T>, mpsc::Receiver<T>);
