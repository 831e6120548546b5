use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use xs_typename::MAX_ARRAY_RANK;

use crate::info::TypeIdentity;
use crate::value::Value;

// -----------------------------------------------------------------------------
// ArrayValue

/// A rectangular array of any rank, stored in row-major order.
///
/// Items may be [`Value::Null`], and may themselves be arrays (jagged arrays).
///
/// # Examples
///
/// ```
/// use xs_codec::info::TypeIdentity;
/// use xs_codec::registry::builtin::I32;
/// use xs_codec::value::{ArrayValue, Value};
///
/// let grid = ArrayValue::with_lengths(
///     TypeIdentity::of(&I32),
///     vec![2, 3],
///     (0..6).map(Value::from).collect(),
/// )
/// .unwrap();
///
/// assert_eq!(grid.rank(), 2);
/// assert_eq!(grid.get(&[1, 0]), Some(&Value::from(3)));
/// assert_eq!(grid.type_identity().to_string(), "i32[,]");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayValue {
    element_type: TypeIdentity,
    lengths: Vec<usize>,
    items: Vec<Value>,
}

impl ArrayValue {
    /// Creates a one-dimensional array.
    #[inline]
    pub fn new(element_type: TypeIdentity, items: Vec<Value>) -> Self {
        Self {
            element_type,
            lengths: vec![items.len()],
            items,
        }
    }

    /// Creates a one-dimensional array from anything convertible to [`Value`].
    pub fn from_values<T: Into<Value>>(
        element_type: TypeIdentity,
        items: impl IntoIterator<Item = T>,
    ) -> Self {
        Self::new(element_type, items.into_iter().map(Into::into).collect())
    }

    /// Creates an array with one length per dimension.
    ///
    /// Returns `None` if the rank is not within `1..=32` or the product of
    /// `lengths` differs from the number of items.
    pub fn with_lengths(
        element_type: TypeIdentity,
        lengths: Vec<usize>,
        items: Vec<Value>,
    ) -> Option<Self> {
        if lengths.is_empty() || lengths.len() > usize::from(MAX_ARRAY_RANK) {
            return None;
        }
        let total = lengths
            .iter()
            .try_fold(1_usize, |total, &len| total.checked_mul(len))?;
        if total != items.len() {
            return None;
        }
        Some(Self {
            element_type,
            lengths,
            items,
        })
    }

    #[inline(always)]
    pub fn element_type(&self) -> &TypeIdentity {
        &self.element_type
    }

    #[inline]
    pub fn rank(&self) -> u8 {
        self.lengths.len() as u8
    }

    /// Length of each dimension, outermost first.
    #[inline(always)]
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Total number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in row-major order.
    #[inline(always)]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    #[inline]
    pub fn into_items(self) -> Vec<Value> {
        self.items
    }

    /// Returns the item at one index per dimension.
    pub fn get(&self, indices: &[usize]) -> Option<&Value> {
        if indices.len() != self.lengths.len() {
            return None;
        }
        let mut offset = 0_usize;
        for (&index, &len) in indices.iter().zip(&self.lengths) {
            if index >= len {
                return None;
            }
            offset = offset * len + index;
        }
        self.items.get(offset)
    }

    /// The array type, e.g. `i32[,]` for a two-dimensional array of `i32`.
    pub fn type_identity(&self) -> TypeIdentity {
        TypeIdentity::Array {
            element: Box::new(self.element_type.clone()),
            rank: self.rank(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::ArrayValue;
    use crate::info::TypeIdentity;
    use crate::registry::builtin::{I32, STRING};
    use crate::value::Value;

    #[test]
    fn lengths_must_match_items() {
        let i32 = TypeIdentity::of(&I32);
        let items: Vec<Value> = (0..6).map(Value::from).collect();

        assert!(ArrayValue::with_lengths(i32.clone(), vec![], vec![]).is_none());
        assert!(ArrayValue::with_lengths(i32.clone(), vec![4, 2], items.clone()).is_none());
        assert!(ArrayValue::with_lengths(i32.clone(), vec![1; 33], vec![Value::from(1)]).is_none());
        let overflow = vec![usize::MAX, 2];
        assert!(ArrayValue::with_lengths(i32.clone(), overflow, items.clone()).is_none());

        let cube = ArrayValue::with_lengths(i32, vec![1, 2, 3], items).unwrap();
        assert_eq!(cube.rank(), 3);
        assert_eq!(cube.len(), 6);
        assert_eq!(cube.get(&[0, 1, 2]), Some(&Value::from(5)));
        assert_eq!(cube.get(&[0, 2, 0]), None);
        assert_eq!(cube.get(&[0, 1]), None);
    }

    #[test]
    fn empty_dimensions() {
        let empty = ArrayValue::with_lengths(TypeIdentity::of(&I32), vec![3, 0], vec![]).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.lengths(), &[3, 0]);
    }

    #[test]
    fn jagged_type() {
        let inner = ArrayValue::from_values(TypeIdentity::of(&STRING), ["a", "b"]);
        let outer = ArrayValue::new(
            inner.type_identity(),
            vec![Value::from(inner), Value::Null],
        );
        assert_eq!(outer.type_identity().to_string(), "String[][]");
        assert!(outer.items()[1].is_null());
    }
}
