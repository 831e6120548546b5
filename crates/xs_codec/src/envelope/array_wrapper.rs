use alloc::borrow::Cow;
use alloc::format;
use alloc::vec::Vec;

use crate::error::EnvelopeError;
use crate::info::TypeIdentity;
use crate::registry::builtin::ARRAY_WRAPPER;
use crate::value::{ArrayValue, SerializationInfo};

const ELEMENT_TYPE: &str = "ElementType";
const RANK: &str = "Rank";
const TOTAL_LENGTH: &str = "TotalLength";

// -----------------------------------------------------------------------------
// ArrayWrapper

/// Gives an array the self-describing pathway of objects.
///
/// The codec wraps an array before encoding and unwraps the decoded wrapper
/// before returning; callers never receive one. The serialization info holds:
///
/// - `ElementType`: the element type, as a type value;
/// - `Rank`: a `u8`;
/// - `TotalLength`: a `u64`;
/// - `Length{d}`: the `u64` length of dimension `d`, outermost first;
/// - `Item{i}`: the `i`-th item in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayWrapper<'a> {
    array: Cow<'a, ArrayValue>,
}

impl<'a> ArrayWrapper<'a> {
    /// Borrows an array for encoding.
    #[inline]
    pub fn wrap(array: &'a ArrayValue) -> Self {
        Self {
            array: Cow::Borrowed(array),
        }
    }

    /// Type tag written for every wrapped array.
    #[inline]
    pub fn type_identity() -> TypeIdentity {
        TypeIdentity::of(&ARRAY_WRAPPER)
    }

    #[inline]
    pub fn array(&self) -> &ArrayValue {
        &self.array
    }

    /// Returns the wrapped array.
    #[inline]
    pub fn into_inner(self) -> ArrayValue {
        self.array.into_owned()
    }

    /// Writes the array into `info`.
    pub fn write_info(&self, info: &mut SerializationInfo) {
        let array = self.array();
        info.add(ELEMENT_TYPE, array.element_type().clone());
        info.add(RANK, array.rank());
        info.add(TOTAL_LENGTH, array.len() as u64);
        for (dimension, &len) in array.lengths().iter().enumerate() {
            info.add(format!("Length{dimension}"), len as u64);
        }
        for (index, item) in array.items().iter().enumerate() {
            info.add(format!("Item{index}"), item.clone());
        }
    }

    /// Rebuilds a wrapped array from `info`.
    pub fn from_info(info: &SerializationInfo) -> Result<ArrayWrapper<'static>, EnvelopeError> {
        let element_type: TypeIdentity = info.get(ELEMENT_TYPE)?;
        let rank: u8 = info.get(RANK)?;
        let total = to_usize(info.get(TOTAL_LENGTH)?)?;

        let lengths = (0..rank)
            .map(|dimension| to_usize(info.get(&format!("Length{dimension}"))?))
            .collect::<Result<Vec<_>, _>>()?;
        let items = (0..total)
            .map(|index| info.get_value(&format!("Item{index}")).cloned())
            .collect::<Result<Vec<_>, _>>()?;

        let array = ArrayValue::with_lengths(element_type, lengths, items).ok_or_else(|| {
            EnvelopeError::invalid_payload(
                ARRAY_WRAPPER.name(),
                format!("rank {rank} with {total} items is not a valid array shape"),
            )
        })?;

        Ok(ArrayWrapper {
            array: Cow::Owned(array),
        })
    }
}

fn to_usize(value: u64) -> Result<usize, EnvelopeError> {
    usize::try_from(value).map_err(|err| EnvelopeError::invalid_payload(ARRAY_WRAPPER.name(), err))
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::ArrayWrapper;
    use crate::error::EnvelopeError;
    use crate::info::TypeIdentity;
    use crate::registry::builtin::I32;
    use crate::value::{ArrayValue, SerializationInfo, Value};

    fn grid() -> ArrayValue {
        let items = (1..=6).map(Value::from).collect();
        ArrayValue::with_lengths(TypeIdentity::of(&I32), vec![3, 2], items).unwrap()
    }

    #[test]
    fn info_layout() {
        let grid = grid();
        let mut info = SerializationInfo::new();
        ArrayWrapper::wrap(&grid).write_info(&mut info);

        assert_eq!(info.len(), 3 + 2 + 6);
        assert_eq!(info.get::<TypeIdentity>("ElementType").unwrap(), TypeIdentity::of(&I32));
        assert_eq!(info.get::<u8>("Rank").unwrap(), 2);
        assert_eq!(info.get::<u64>("TotalLength").unwrap(), 6);
        assert_eq!(info.get::<u64>("Length0").unwrap(), 3);
        assert_eq!(info.get::<u64>("Length1").unwrap(), 2);
        assert_eq!(info.get::<i32>("Item5").unwrap(), 6);

        let back = ArrayWrapper::from_info(&info).unwrap().into_inner();
        assert_eq!(back, grid);
    }

    #[test]
    fn inconsistent_info() {
        let grid = grid();
        let mut info = SerializationInfo::new();
        ArrayWrapper::wrap(&grid).write_info(&mut info);

        let mut shorter = info.clone();
        shorter.add("TotalLength", 5_u64);
        assert!(matches!(
            ArrayWrapper::from_info(&shorter),
            Err(EnvelopeError::InvalidPayload { .. })
        ));

        let mut missing = SerializationInfo::new();
        missing.add("ElementType", TypeIdentity::of(&I32));
        missing.add("Rank", 1_u8);
        missing.add("TotalLength", 1_u64);
        missing.add("Length0", 1_u64);
        assert!(matches!(
            ArrayWrapper::from_info(&missing),
            Err(EnvelopeError::MissingMember(key)) if key == "Item0"
        ));

        let mut rankless = info;
        rankless.add("Rank", 0_u8);
        assert!(ArrayWrapper::from_info(&rankless).is_err());
    }
}
