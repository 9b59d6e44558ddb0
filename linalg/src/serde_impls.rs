use crate::{Arithmetic, FixedMatrix, FixedVector};
use core::{fmt, marker::PhantomData};
use serde::{
    de::{self, Deserialize, Deserializer, SeqAccess, Visitor},
    ser::{Serialize, SerializeTuple, Serializer},
};

impl<const N: usize, T: Arithmetic + Serialize> Serialize for FixedVector<N, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_tuple(N)?;
        for v in self.iter() {
            seq.serialize_element(v)?;
        }
        seq.end()
    }
}

impl<const R: usize, const C: usize, T: Arithmetic + Serialize> Serialize
    for FixedMatrix<R, C, T>
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_tuple(R)?;
        for row in self.rows.iter() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

/// Reads exactly `N` elements of type `E`, rejecting shorter and longer sequences.
struct ExactSeq<const N: usize, E>(PhantomData<E>);

impl<'de, const N: usize, E: Deserialize<'de> + Copy + Default> Visitor<'de> for ExactSeq<N, E> {
    type Value = [E; N];

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence of {} elements", N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut values = [E::default(); N];
        for (n, value) in values.iter_mut().enumerate() {
            *value = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(n, &self))?;
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        Ok(values)
    }
}

impl<'de, const N: usize, T: Arithmetic + Deserialize<'de>> Deserialize<'de> for FixedVector<N, T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_tuple(N, ExactSeq::<N, T>(PhantomData))
            .map(FixedVector::from_array)
    }
}

impl<'de, const R: usize, const C: usize, T: Arithmetic + Deserialize<'de>> Deserialize<'de>
    for FixedMatrix<R, C, T>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_tuple(R, ExactSeq::<R, FixedVector<C, T>>(PhantomData))
            .map(FixedMatrix::from_row_vectors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_json() {
        let v = FixedVector::from([1, 2, 3]);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1,2,3]");
        let back: FixedVector<3, i32> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_vector_json_wrong_length() {
        assert!(serde_json::from_str::<FixedVector<3, i32>>("[1,2]").is_err());
        assert!(serde_json::from_str::<FixedVector<2, i32>>("[1,2,3]").is_err());
    }

    #[test]
    fn test_matrix_json() {
        let m = FixedMatrix::from([[1.5, 2.0], [3.0, 4.0]]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1.5,2.0],[3.0,4.0]]");
        let back: FixedMatrix<2, 2, f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert!(serde_json::from_str::<FixedMatrix<2, 2, f64>>("[[1.0,2.0],[3.0]]").is_err());
        assert!(serde_json::from_str::<FixedMatrix<1, 2, f64>>("[[1.0,2.0],[3.0,4.0]]").is_err());
    }
}
