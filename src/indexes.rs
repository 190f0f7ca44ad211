use std::{collections::HashSet, rc::Rc};

use itertools::Itertools;

use crate::errors::{EoRasterError, Result};

/// Positional band selection.
///
/// With `drop` set, `selection` lists the bands to leave out.
#[derive(Clone, Debug)]
pub struct Indexes {
    selection: Rc<[usize]>,
    drop: bool,
}

impl<const N: usize> From<([usize; N], bool)> for Indexes {
    fn from(value: ([usize; N], bool)) -> Self {
        let selection = Rc::from(value.0);
        let drop = value.1;
        Indexes { selection, drop }
    }
}

impl From<(std::ops::Range<usize>, bool)> for Indexes {
    fn from(value: (std::ops::Range<usize>, bool)) -> Self {
        let selection = value.0.collect();
        let drop = value.1;
        Indexes { selection, drop }
    }
}

impl<const N: usize> From<[usize; N]> for Indexes {
    fn from(value: [usize; N]) -> Self {
        Self::from((value, false))
    }
}

impl From<std::ops::Range<usize>> for Indexes {
    fn from(value: std::ops::Range<usize>) -> Self {
        Self::from((value, false))
    }
}

impl From<Vec<usize>> for Indexes {
    fn from(value: Vec<usize>) -> Self {
        Indexes {
            selection: Rc::from(value),
            drop: false,
        }
    }
}

impl Indexes {
    pub fn all() -> Self {
        Self {
            selection: Rc::from([]),
            drop: true,
        }
    }

    /// Positions selected out of `collection_len` items, in selection order
    /// (ascending when dropping).
    pub fn indexes_from(&self, collection_len: usize) -> Result<Rc<[usize]>> {
        if let Some(&index) = self.selection.iter().find(|idx| **idx >= collection_len) {
            return Err(EoRasterError::IndexOutOfRange {
                index,
                len: collection_len,
            });
        }
        if self.drop {
            let drop_idxs: HashSet<usize> = self.selection.iter().copied().collect();
            Ok(Rc::from_iter(
                HashSet::<usize>::from_iter(0..collection_len)
                    .difference(&drop_idxs)
                    .sorted()
                    .copied(),
            ))
        } else {
            Ok(Rc::clone(&self.selection))
        }
    }

    pub fn select_from<'a, T>(&self, collection: &'a [T]) -> Result<Vec<&'a T>> {
        Ok(self
            .indexes_from(collection.len())?
            .iter()
            .map(|idx| &collection[*idx])
            .collect())
    }
}
