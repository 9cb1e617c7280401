//! System name interning.

/// Maps system names to dense indices for matrix lookups.
///
/// The origin is interned first and always receives index 0; every further
/// distinct name receives the next index in first-seen order. Mission data
/// references systems by name, while the solver and the distance matrix
/// work on these indices.
///
/// # Examples
///
/// ```
/// use sightseer::distance::SystemIndex;
///
/// let mut index = SystemIndex::new("Sol");
/// assert_eq!(index.intern("Barnard's Star"), 1);
/// assert_eq!(index.intern("Wolf 359"), 2);
/// assert_eq!(index.intern("Barnard's Star"), 1);
/// assert_eq!(index.origin(), 0);
/// assert_eq!(index.name(2), "Wolf 359");
/// assert_eq!(index.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SystemIndex {
    names: Vec<String>,
}

impl SystemIndex {
    /// Creates an index holding only the origin system.
    pub fn new(origin: &str) -> Self {
        Self {
            names: vec![origin.to_string()],
        }
    }

    /// Returns the index for a name, assigning the next free one if the
    /// name has not been seen before.
    pub fn intern(&mut self, name: &str) -> usize {
        match self.get(name) {
            Some(idx) => idx,
            None => {
                self.names.push(name.to_string());
                self.names.len() - 1
            }
        }
    }

    /// Returns the index for a name already interned, or `None`.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Returns the name behind an index.
    ///
    /// # Panics
    ///
    /// Panics if the index was never assigned.
    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// The origin's index. Always 0.
    pub fn origin(&self) -> usize {
        0
    }

    /// Number of distinct systems interned, origin included.
    pub fn size(&self) -> usize {
        self.names.len()
    }

    /// Iterates over all interned names in index order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
