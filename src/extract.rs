//! Word and word-pair extraction from a single line of text.

/// Characters that separate words. Runs of delimiters collapse, so no empty
/// word is ever produced.
pub const WORD_DELIMITERS: &[char] = &[
    '\n', '\r', ',', ';', ' ', '!', '.', ':', '?', '_', '\'', '"', '-',
];

#[inline]
fn is_delimiter(c: char) -> bool {
    WORD_DELIMITERS.contains(&c)
}

/// Cursor over the words of one line: maximal runs of non-delimiter
/// characters, in order.
///
/// ```
/// use bigrams::extract::Words;
///
/// let mut words = Words::new("the cat, sat!");
/// assert_eq!(words.next(), Some("the"));
/// assert_eq!(words.next(), Some("cat"));
/// assert_eq!(words.next(), Some("sat"));
/// assert_eq!(words.next(), None);
/// ```
pub struct Words<'a> {
    rest: &'a str,
}

impl<'a> Words<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { rest: line }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.find(|c: char| !is_delimiter(c))?;
        let rest = &self.rest[start..];
        let end = rest.find(is_delimiter).unwrap_or(rest.len());
        self.rest = &rest[end..];
        Some(&rest[..end])
    }
}

/// Sliding window of adjacent word pairs over one line.
///
/// Pair *k* is (word *k*, word *k+1*); the back word of one pair becomes the
/// front word of the next without re-scanning. The iterator is built per line,
/// so a pair never spans two lines. Case folding is the caller's job: feed it
/// an already lowercased line (see [`BigramMiner::mine_line`]).
///
/// ```
/// use bigrams::extract::WordPairs;
///
/// let pairs: Vec<_> = WordPairs::new("the cat sat").collect();
/// assert_eq!(pairs, vec![("the", "cat"), ("cat", "sat")]);
///
/// // Blank and one-word lines produce nothing.
/// assert_eq!(WordPairs::new("").count(), 0);
/// assert_eq!(WordPairs::new("alone").count(), 0);
/// ```
///
/// [`BigramMiner::mine_line`]: crate::BigramMiner::mine_line
pub struct WordPairs<'a> {
    words: Words<'a>,
    front: Option<&'a str>,
}

impl<'a> WordPairs<'a> {
    pub fn new(line: &'a str) -> Self {
        let mut words = Words::new(line);
        let front = words.next();
        Self { words, front }
    }
}

impl<'a> Iterator for WordPairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<(&'a str, &'a str)> {
        let front = self.front?;
        let back = self.words.next()?;
        self.front = Some(back);
        Some((front, back))
    }
}
