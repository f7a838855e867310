use serde::Serialize;
use std::ops::{Deref, DerefMut};

/// An ordered, owned sequence of signed integers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IntegerList(Vec<i64>);

impl IntegerList {
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }
}

impl Deref for IntegerList {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.0
    }
}

impl DerefMut for IntegerList {
    fn deref_mut(&mut self) -> &mut [i64] {
        &mut self.0
    }
}

impl From<Vec<i64>> for IntegerList {
    fn from(values: Vec<i64>) -> Self {
        Self(values)
    }
}

impl From<IntegerList> for Vec<i64> {
    fn from(list: IntegerList) -> Self {
        list.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_plain_array() {
        let list = IntegerList::from(vec![3, -1, 2]);
        assert_eq!(serde_json::to_string(&list).unwrap(), "[3,-1,2]");
    }

    #[test]
    fn test_deref_mut_sorts_in_place() {
        let mut list = IntegerList::new(vec![2, 1]);
        list.swap(0, 1);
        assert_eq!(Vec::from(list), vec![1, 2]);
    }
}
