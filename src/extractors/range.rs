// src/extractors/range.rs
use serde::Deserialize;

pub const DEFAULT_GAP: usize = 10;
pub const DEFAULT_MIN_CANDIDATES: usize = 3;

/// How the last raw candidate is treated by the gap-bridging filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    /// The last candidate is never tested on its own; the selected range is
    /// widened by one page past the last retained index instead.
    #[default]
    Conservative,
    /// The last candidate is kept when its predecessor is within the gap,
    /// and the range ends exactly at the last retained index.
    Symmetric,
}

/// Inclusive range of zero-based page indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedRange {
    pub first: usize,
    pub last: usize,
}

impl SelectedRange {
    pub fn page_count(&self) -> usize {
        self.last - self.first + 1
    }
}

/// Why no range could be selected for a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoRange {
    TooFewCandidates { found: usize, required: usize },
    AllIsolated { found: usize },
}

/// Collapses candidate page indices into a single contiguous range.
#[derive(Debug, Clone)]
pub struct PageRangeSelector {
    gap: usize,
    min_candidates: usize,
    edge_mode: EdgeMode,
}

impl PageRangeSelector {
    pub fn new(gap: usize, min_candidates: usize, edge_mode: EdgeMode) -> Self {
        Self { gap, min_candidates, edge_mode }
    }

    /// Gap-bridging filter over an ascending list of candidate pages.
    ///
    /// Index `i` (not the last) is kept when its successor is closer than `gap`,
    /// or, for `i > 0`, when its predecessor is. In `Conservative` mode the last
    /// candidate falls outside the loop and is never kept.
    pub fn filter(&self, candidates: &[usize]) -> Vec<usize> {
        let close = |a: usize, b: usize| b.saturating_sub(a) < self.gap;
        let n = candidates.len();
        let mut kept = Vec::with_capacity(n);

        for i in 0..n.saturating_sub(1) {
            if close(candidates[i], candidates[i + 1])
                || (i > 0 && close(candidates[i - 1], candidates[i]))
            {
                kept.push(candidates[i]);
            }
        }

        if self.edge_mode == EdgeMode::Symmetric && n >= 2 && close(candidates[n - 2], candidates[n - 1]) {
            kept.push(candidates[n - 1]);
        }

        kept
    }

    /// Derives the inclusive page range to re-extract from the raw candidate list.
    pub fn select(&self, candidates: &[usize]) -> Result<SelectedRange, NoRange> {
        if candidates.len() < self.min_candidates {
            return Err(NoRange::TooFewCandidates {
                found: candidates.len(),
                required: self.min_candidates,
            });
        }

        let kept = self.filter(candidates);
        tracing::debug!("Filtro de distancia: se conservan {:?} de {:?}", kept, candidates);

        let (first, last) = match (kept.iter().min(), kept.iter().max()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Err(NoRange::AllIsolated { found: candidates.len() }),
        };

        let last = match self.edge_mode {
            EdgeMode::Conservative => last + 1,
            EdgeMode::Symmetric => last,
        };

        Ok(SelectedRange { first, last })
    }
}

impl Default for PageRangeSelector {
    fn default() -> Self {
        Self::new(DEFAULT_GAP, DEFAULT_MIN_CANDIDATES, EdgeMode::default())
    }
}
