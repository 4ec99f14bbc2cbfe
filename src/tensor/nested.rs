//! Nested-list form of coefficient data
//!
//! `Nested<T>` is the literal "list of lists" shape that coefficient data has
//! at construction boundaries. Dense tensors require every level to be
//! rectangular; sequences accept ragged rows.

/// Arbitrarily nested list of values
#[derive(Clone, Debug, PartialEq)]
pub enum Nested<T> {
    /// A single value (a leaf of the nesting)
    Scalar(T),
    /// A list of nested values, one level deeper
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// A one-level list of scalars
    pub fn leaf(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Self::Scalar).collect())
    }

    /// A list of already nested rows
    pub fn list(rows: Vec<Nested<T>>) -> Self {
        Self::List(rows)
    }

    /// Nesting depth along the first branch: 0 for a scalar, 1 for a list of
    /// scalars, and so on. An empty list has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Scalar(_) => 0,
            Self::List(items) => 1 + items.first().map_or(0, Nested::depth),
        }
    }

    /// Whether every branch bottoms out in scalars exactly `depth` levels down.
    ///
    /// An empty list fits any depth of at least 1.
    pub fn fits_depth(&self, depth: usize) -> bool {
        match self {
            Self::Scalar(_) => depth == 0,
            Self::List(items) => depth >= 1 && items.iter().all(|item| item.fits_depth(depth - 1)),
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Scalar(value)
    }
}
