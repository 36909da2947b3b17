// src/extractors/anchors.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;

// --- Constants ---
pub const DEFAULT_MAX_DISTANCE: usize = 4;

pub const SUPREME_COURT_ANCHOR: &str = "corte suprema de justicia de la nación";
pub const OVD_ANCHOR: &str = "oficina de violencia doméstica";

// Extracted text often splits letterhead phrases across lines or pads them with tabs.
static WHITESPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile WHITESPACE_RUN_RE"));

// --- Data Structures ---

/// Outcome of testing one page against both anchors.
/// Each distance is the best (lowest) edit distance found within the threshold,
/// or `None` when the anchor did not near-match anywhere on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMatch {
    pub first: Option<usize>,
    pub second: Option<usize>,
}

impl PageMatch {
    /// A page is a candidate only when both anchors near-match.
    pub fn is_candidate(&self) -> bool {
        self.first.is_some() && self.second.is_some()
    }
}

/// Fuzzy, case-insensitive detector for the two letterhead phrases of an OVD report.
#[derive(Debug, Clone)]
pub struct AnchorMatcher {
    anchors: [Vec<char>; 2],
    max_distance: usize,
}

impl AnchorMatcher {
    pub fn new(first: &str, second: &str, max_distance: usize) -> Self {
        Self {
            anchors: [fold(first), fold(second)],
            max_distance,
        }
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Tests both anchors against a page's raw extracted text.
    pub fn match_page(&self, page_text: &str) -> PageMatch {
        let text = fold(page_text);
        PageMatch {
            first: best_near_match(&self.anchors[0], &text, self.max_distance),
            second: best_near_match(&self.anchors[1], &text, self.max_distance),
        }
    }

    pub fn is_candidate(&self, page_text: &str) -> bool {
        self.match_page(page_text).is_candidate()
    }
}

impl Default for AnchorMatcher {
    fn default() -> Self {
        Self::new(SUPREME_COURT_ANCHOR, OVD_ANCHOR, DEFAULT_MAX_DISTANCE)
    }
}

/// Lowercases and collapses whitespace runs, returning the scalar values for matching.
fn fold(text: &str) -> Vec<char> {
    let lowered = text.to_lowercase();
    WHITESPACE_RUN_RE
        .replace_all(lowered.trim(), " ")
        .chars()
        .collect()
}

/// Approximate substring search (Sellers' variant of the Levenshtein DP).
///
/// Returns the smallest edit distance between `pattern` and any substring of `text`,
/// provided it is `<= max_distance`. The text prefix is free, so row 0 is reset to
/// zero on every column; the answer is read from the last row.
pub fn best_near_match(pattern: &[char], text: &[char], max_distance: usize) -> Option<usize> {
    let m = pattern.len();
    if m == 0 {
        return Some(0);
    }

    let mut column: Vec<usize> = (0..=m).collect();
    let mut best = column[m];

    for &c in text {
        let mut diagonal = column[0]; // D[i-1][j-1]
        column[0] = 0;
        for i in 1..=m {
            let above = column[i]; // D[i][j-1]
            let substitution = diagonal + usize::from(pattern[i - 1] != c);
            column[i] = substitution.min(above + 1).min(column[i - 1] + 1);
            diagonal = above;
        }
        best = best.min(column[m]);
        if best == 0 {
            break;
        }
    }

    (best <= max_distance).then_some(best)
}
