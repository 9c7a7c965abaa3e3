/// Aggregate statistics over one filtered set.
///
/// Derived data only: recomputed from scratch after every configuration
/// change, never cached across them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivedStats {
    /// Size of the filtered set.
    pub total: usize,
    /// (length, count) pairs, ascending by numeric length.
    pub by_length: Vec<(usize, usize)>,
    /// (upper-cased first character, count) pairs, ascending.
    pub by_letter: Vec<(char, usize)>,
}
