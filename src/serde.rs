use std::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
};

use crate::StashVec;


impl<T: Serialize, const N: usize> Serialize for StashVec<T, N> {
    /// Serialize a `StashVec` as a sequence.
    ///
    /// The serialization format is identical for both storage
    /// representations.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for StashVec<T, N> {
    /// Deserialize a `StashVec` from a sequence.
    ///
    /// Sequences longer than the inline capacity `N` land on the heap.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StashVecVisitor<T, const N: usize> {
            _marker: PhantomData<T>,
        }

        impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for StashVecVisitor<T, N> {
            type Value = StashVec<T, N>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut stash = StashVec::new();
                if let Some(hint) = seq.size_hint() {
                    stash.reserve_exact(hint);
                }

                while let Some(element) = seq.next_element()? {
                    stash.push(element);
                }

                Ok(stash)
            }
        }

        deserializer.deserialize_seq(StashVecVisitor { _marker: PhantomData })
    }
}

#[cfg(test)]
mod tests {
    use crate::StashVec;

    #[test]
    fn roundtrip() {
        let stash = StashVec::<u32, 4>::from([1, 2, 3, 4, 5, 6]);
        let json = serde_json::to_string(&stash).unwrap();
        assert_eq!(json, "[1,2,3,4,5,6]");

        let back: StashVec<u32, 4> = serde_json::from_str(&json).unwrap();
        assert!(back.on_heap());
        assert_eq!(back, stash);

        // a larger inline capacity keeps the same payload on the stack
        let back: StashVec<u32, 8> = serde_json::from_str(&json).unwrap();
        assert!(back.on_stack());
        assert_eq!(back, [1, 2, 3, 4, 5, 6]);
    }
}
