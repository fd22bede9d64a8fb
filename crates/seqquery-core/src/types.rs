//! Key types for query operations.
//!
//! `Scalar` is a dynamic primitive key for records whose key type is only
//! known at runtime (e.g. JSON). `Identity` gives composite values
//! reference-identity equality.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, Result};

/// A primitive value usable as an equality, grouping, or ordering key.
///
/// Equality is by value. `I64` and `F64` are one numeric domain compared
/// exactly, so `I64(1) == F64(1.0)` and `I64(2) < F64(2.5)`. Unlike IEEE
/// floats, `F64(NaN) == F64(NaN)` so that `Eq`, `Hash`, and `Ord` agree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Scalar {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    Str(String),
}

impl Scalar {
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Parse a JSON primitive into a key.
    pub fn parse_json(text: &str) -> Result<Scalar> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Scalar::try_from(&value)
    }

    fn type_order(&self) -> u8 {
        match self {
            Scalar::Null => 0,
            Scalar::Bool(_) => 1,
            Scalar::I64(_) | Scalar::F64(_) => 2,
            Scalar::Str(_) => 3,
        }
    }
}

const I64_EXCLUSIVE_MAX: f64 = 9_223_372_036_854_775_808.0;

/// Exact comparison of an integer against a float. NaN is greater than every
/// number.
fn cmp_int_float(i: i64, f: f64) -> Ordering {
    if f.is_nan() || f >= I64_EXCLUSIVE_MAX {
        return Ordering::Less;
    }
    if f < -I64_EXCLUSIVE_MAX {
        return Ordering::Greater;
    }
    let floor = f.floor();
    match i.cmp(&(floor as i64)) {
        Ordering::Equal if f > floor => Ordering::Less,
        other => other,
    }
}

/// `f` as an `i64` when it is integral and representable exactly.
fn integral_f64(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= -I64_EXCLUSIVE_MAX && f < I64_EXCLUSIVE_MAX {
        Some(f as i64)
    } else {
        None
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scalar {}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Nulls sort first, then booleans, numbers, and strings. NaN sorts after
/// every other number.
impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        use Scalar::*;
        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (I64(a), I64(b)) => a.cmp(b),
            (F64(a), F64(b)) => {
                if a.is_nan() && b.is_nan() {
                    Ordering::Equal
                } else if a.is_nan() {
                    Ordering::Greater
                } else if b.is_nan() {
                    Ordering::Less
                } else {
                    a.partial_cmp(b).unwrap_or(Ordering::Equal)
                }
            }
            (I64(a), F64(b)) => cmp_int_float(*a, *b),
            (F64(a), I64(b)) => cmp_int_float(*b, *a).reverse(),
            (Str(a), Str(b)) => a.cmp(b),
            _ => self.type_order().cmp(&other.type_order()),
        }
    }
}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_order().hash(state);
        match self {
            Scalar::Null => {}
            Scalar::Bool(b) => b.hash(state),
            Scalar::I64(i) => i.hash(state),
            Scalar::F64(f) => match integral_f64(*f) {
                // integral floats equal the matching I64; -0.0 lands here too
                Some(i) => i.hash(state),
                None => {
                    let canonical = if f.is_nan() { f64::NAN } else { *f };
                    canonical.to_bits().hash(state)
                }
            },
            Scalar::Str(s) => s.hash(state),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::I64(v) => write!(f, "{}", v),
            Scalar::F64(v) => write!(f, "{}", v),
            Scalar::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::I64(v as i64)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::I64(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::F64(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Scalar::Null)
    }
}

impl TryFrom<&serde_json::Value> for Scalar {
    type Error = QueryError;

    fn try_from(value: &serde_json::Value) -> Result<Self> {
        use serde_json::Value;
        match value {
            Value::Null => Ok(Scalar::Null),
            Value::Bool(b) => Ok(Scalar::Bool(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Scalar::I64(i)),
                None => n
                    .as_f64()
                    .map(Scalar::F64)
                    .ok_or_else(|| QueryError::UnsupportedKey(format!("number {}", n))),
            },
            Value::String(s) => Ok(Scalar::Str(s.clone())),
            Value::Array(_) => Err(QueryError::UnsupportedKey(
                "arrays have no value equality; select a primitive field".into(),
            )),
            Value::Object(_) => Err(QueryError::UnsupportedKey(
                "objects have no value equality; select a primitive field".into(),
            )),
        }
    }
}

/// Shared handle whose equality and hash are by allocation, not by content.
///
/// Use it when two structurally identical composite values must stay
/// distinct under `distinct`, set algebra, joins, and grouping.
pub struct Identity<T>(Rc<T>);

impl<T> Identity<T> {
    pub fn new(value: T) -> Self {
        Identity(Rc::new(value))
    }

    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        Identity(Rc::clone(&self.0))
    }
}

impl<T> Deref for Identity<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> PartialEq for Identity<T> {
    fn eq(&self, other: &Self) -> bool {
        Identity::ptr_eq(self, other)
    }
}

impl<T> Eq for Identity<T> {}

impl<T> Hash for Identity<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Rc::as_ptr(&self.0), state)
    }
}

impl<T: fmt::Debug> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identity").field(&*self.0).finish()
    }
}
