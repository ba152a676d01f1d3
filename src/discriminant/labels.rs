use crate::{Error, Labels, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassIndex {
    classes: Vec<i64>,
}

impl ClassIndex {
    pub fn from_labels(y: &Labels) -> Self {
        let mut classes: Vec<i64> = y.iter().copied().collect();
        classes.sort_unstable();
        classes.dedup();
        Self { classes }
    }

    pub fn new(mut classes: Vec<i64>) -> Self {
        classes.sort_unstable();
        classes.dedup();
        Self { classes }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    pub fn index_of(&self, label: i64) -> Option<usize> {
        self.classes.binary_search(&label).ok()
    }

    pub fn label(&self, index: usize) -> Option<i64> {
        self.classes.get(index).copied()
    }

    pub fn encode(&self, y: &Labels) -> Result<Vec<usize>> {
        y.iter()
            .map(|&label| {
                self.index_of(label).ok_or_else(|| {
                    Error::InvalidArgument(format!("unknown class label {}", label))
                })
            })
            .collect()
    }
}
