//! Single-pass orchestration: corpus lines in, ranked bigrams out.

use anyhow::Result;

use crate::corpus::CorpusSource;
use crate::extract::WordPairs;
use crate::table::{BigramTable, MergedList};

/// Mines adjacent word pairs from a line-oriented corpus into a
/// [`BigramTable`], then hands the counts over to merge and sort.
///
/// ```
/// use bigrams::corpus::CorpusTextLoader;
/// use bigrams::BigramMiner;
///
/// let corpus = CorpusTextLoader::new(b"the cat sat on the cat");
/// let mut miner = BigramMiner::new();
/// miner.mine(&corpus).unwrap();
///
/// assert_eq!(miner.pairs_seen(), 5);
/// assert_eq!(miner.distinct(), 4);
///
/// let ranking = miner.into_ranking();
/// let top = ranking.iter().next().unwrap();
/// assert_eq!((top.front.as_str(), top.back.as_str(), top.count), ("the", "cat", 2));
/// ```
pub struct BigramMiner {
    table: BigramTable,
    pairs_seen: u64,
}

impl BigramMiner {
    /// Creates a miner over a default-sized table.
    pub fn new() -> Self {
        Self {
            table: BigramTable::new(),
            pairs_seen: 0,
        }
    }

    /// Creates a miner over a table with a fixed bucket count.
    pub fn with_buckets(num_buckets: usize) -> Self {
        Self {
            table: BigramTable::with_buckets(num_buckets),
            pairs_seen: 0,
        }
    }

    /// Counts every adjacent word pair of one line. The line is ASCII
    /// case-folded here, once, before extraction. Lines with fewer than two
    /// words are simply skipped.
    pub fn mine_line(&mut self, line: &str) {
        let folded = line.to_ascii_lowercase();
        for (front, back) in WordPairs::new(&folded) {
            self.table.lookup_or_insert(front, back);
            self.pairs_seen += 1;
        }
    }

    /// Mines every line of a corpus.
    pub fn mine<S: CorpusSource>(&mut self, source: &S) -> Result<()> {
        for line in source.lines()? {
            self.mine_line(&line?);
        }
        Ok(())
    }

    /// Total adjacent word pairs seen, repeats included. Equals the sum of
    /// counts over all records at every later stage.
    #[inline]
    pub fn pairs_seen(&self) -> u64 {
        self.pairs_seen
    }

    /// The number of distinct bigrams recorded.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.table.len()
    }

    /// The underlying table, for occupancy diagnostics.
    pub fn table(&self) -> &BigramTable {
        &self.table
    }

    /// Consumes the miner: merges all buckets and sorts the result by
    /// descending count.
    pub fn into_ranking(self) -> MergedList {
        let mut merged = self.table.into_merged();
        merged.sort_descending();
        merged
    }
}

impl Default for BigramMiner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_before_counting() {
        let mut miner = BigramMiner::new();
        miner.mine_line("The Cat THE CAT");
        assert_eq!(miner.pairs_seen(), 3);
        // (the,cat), (cat,the) — "The Cat" and "THE CAT" collapse.
        assert_eq!(miner.distinct(), 2);
    }

    #[test]
    fn pairs_never_span_lines() {
        let mut miner = BigramMiner::new();
        miner.mine_line("the cat");
        miner.mine_line("sat down");
        // No (cat, sat) pair across the boundary.
        assert_eq!(miner.pairs_seen(), 2);
        assert_eq!(miner.distinct(), 2);
    }

    #[test]
    fn blank_and_one_word_lines_are_skipped() {
        let mut miner = BigramMiner::new();
        miner.mine_line("");
        miner.mine_line("   ");
        miner.mine_line("alone");
        miner.mine_line("!!..??");
        assert_eq!(miner.pairs_seen(), 0);
        assert_eq!(miner.distinct(), 0);
    }

    #[test]
    fn ranking_conserves_total_count() {
        let mut miner = BigramMiner::with_buckets(11);
        miner.mine_line("to be or not to be");
        miner.mine_line("to be is to do");
        let pairs = miner.pairs_seen();

        let ranking = miner.into_ranking();
        let total: u64 = ranking.iter().map(|r| u64::from(r.count)).sum();
        assert_eq!(total, pairs);
    }
}
