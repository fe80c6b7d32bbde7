// src/numerics/codec.rs
// Serde plumbing for fixed-size arrays and the bincode binary codec.
//
// serde only implements its array traits up to length 32, so vectors and
// matrices go through a tuple of exactly N elements instead.

use core::fmt;

use bincode::config;
use serde::de::{self, DeserializeOwned, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};

use super::error::Result;

/// Serialize `[E; N]` as an N-tuple.
pub(crate) fn serialize_array<E, S, const N: usize>(
    elements: &[E; N],
    serializer: S,
) -> core::result::Result<S::Ok, S::Error>
where
    E: Serialize,
    S: Serializer,
{
    let mut tuple = serializer.serialize_tuple(N)?;
    for element in elements {
        tuple.serialize_element(element)?;
    }
    tuple.end()
}

/// Visitor collecting an N-tuple into `[E; N]` without allocating.
pub(crate) struct ArrayVisitor<E, const N: usize> {
    fill: E,
    what: &'static str,
}

impl<E, const N: usize> ArrayVisitor<E, N> {
    /// `fill` seeds the array before the elements arrive; `what` names the
    /// elements in error messages.
    pub(crate) fn new(fill: E, what: &'static str) -> Self {
        Self { fill, what }
    }
}

impl<'de, E, const N: usize> Visitor<'de> for ArrayVisitor<E, N>
where
    E: Copy + Deserialize<'de>,
{
    type Value = [E; N];

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a tuple of {} {}", N, self.what)
    }

    fn visit_seq<A>(self, mut seq: A) -> core::result::Result<[E; N], A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut elements = [self.fill; N];
        for (i, slot) in elements.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        Ok(elements)
    }
}

/// Encode a value with bincode's standard configuration.
pub fn encode_binary<V: Serialize + ?Sized>(value: &V) -> Result<Vec<u8>> {
    let bytes = bincode::serde::encode_to_vec(value, config::standard())?;
    tracing::trace!(len = bytes.len(), "encoded binary value");
    Ok(bytes)
}

/// Decode a value written by [`encode_binary`].
pub fn decode_binary<V: DeserializeOwned>(bytes: &[u8]) -> Result<V> {
    let (value, read) = bincode::serde::decode_from_slice(bytes, config::standard())
        .inspect_err(|err| tracing::debug!(error = %err, len = bytes.len(), "binary decode failed"))?;
    tracing::trace!(read, len = bytes.len(), "decoded binary value");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::error::NumericsError;

    #[derive(Debug, PartialEq)]
    struct Triple([u16; 3]);

    impl Serialize for Triple {
        fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
            serialize_array(&self.0, serializer)
        }
    }

    impl<'de> Deserialize<'de> for Triple {
        fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
        where
            De: serde::Deserializer<'de>,
        {
            deserializer
                .deserialize_tuple(3, ArrayVisitor::<u16, 3>::new(0, "integers"))
                .map(Triple)
        }
    }

    #[test]
    fn test_array_tuple_roundtrip() {
        let value = Triple([7, 8, 9]);
        let bytes = encode_binary(&value).unwrap();
        let decoded: Triple = decode_binary(&bytes).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_tuple_has_no_length_prefix() {
        // Standard configuration: varint u16 below 251 takes one byte.
        let bytes = encode_binary(&Triple([1, 2, 3])).unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[test]
    fn test_truncated_input_is_a_decode_error() {
        let result = decode_binary::<Triple>(&[1, 2]);
        assert!(matches!(result, Err(NumericsError::Decode(_))));
    }
}
