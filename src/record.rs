use serde::Serialize;

/// A pair of adjacent words and the number of times it was seen.
///
/// Identity is the `(front, back)` pair after ASCII case folding; the table
/// never holds two records for the same pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BigramRecord {
    pub front: String,
    pub back: String,
    pub count: u32,
}

impl BigramRecord {
    /// Creates a record for a pair seen for the first time.
    pub fn new(front: &str, back: &str) -> Self {
        Self {
            front: front.to_owned(),
            back: back.to_owned(),
            count: 1,
        }
    }

    /// Whether this record stands for the given pair.
    #[inline]
    pub fn matches(&self, front: &str, back: &str) -> bool {
        self.front == front && self.back == back
    }
}
