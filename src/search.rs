//! Substring search over streak codes with continuation tallies.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Reverse;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use tracing::debug;

use crate::error::SearchError;
use crate::options::WINDOW_LEN;

/// A continuation window and how often it followed the query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowCount {
    /// The characters that followed a match.
    pub window: String,
    /// Number of matches followed by this window.
    pub count: usize,
}

/// Result of a pattern search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Every match, including those too close to the end to have a window.
    pub total_matches: usize,
    /// Windows sorted by descending count; equal counts keep first-seen order.
    pub windows: Vec<WindowCount>,
}

/// Returns the first `n` characters of `s`, or `None` if `s` is shorter.
fn take_chars(s: &str, n: usize) -> Option<&str> {
    if n == 0 {
        return Some("");
    }
    let (last, c) = s.char_indices().nth(n - 1)?;
    Some(&s[..last + c.len_utf8()])
}

/// Searches the corpus for `query` and tallies the 12-character windows that
/// follow each match.
///
/// ```
/// use bacrs::search::search;
///
/// let result = search(&["111"], "11").unwrap();
/// assert_eq!(result.total_matches, 1);
/// ```
///
/// # Errors
///
/// Returns [`SearchError::EmptyQuery`] if the query is empty after trimming.
pub fn search<S: AsRef<str>>(corpus: &[S], query: &str) -> Result<SearchResult, SearchError> {
    search_with_window(corpus, query, WINDOW_LEN)
}

/// Searches the corpus for `query` and tallies the `window`-character
/// continuations that follow each match.
///
/// Scanning resumes after the end of each match, so occurrences that start
/// inside an already matched span are not counted.
///
/// # Errors
///
/// Returns [`SearchError::EmptyQuery`] if the query is empty after trimming.
pub fn search_with_window<S: AsRef<str>>(
    corpus: &[S],
    query: &str,
    window: usize,
) -> Result<SearchResult, SearchError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    let mut total_matches = 0;
    let mut windows: Vec<WindowCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in corpus {
        let record = record.as_ref();
        let mut pos = 0;

        while let Some(found) = record[pos..].find(query) {
            let after = pos + found + query.len();

            if let Some(tail) = take_chars(&record[after..], window) {
                if let Some(&slot) = index.get(tail) {
                    windows[slot].count += 1;
                } else {
                    index.insert(tail, windows.len());
                    windows.push(WindowCount {
                        window: tail.into(),
                        count: 1,
                    });
                }
            }

            total_matches += 1;
            pos = after;
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    windows.sort_by_key(|w| Reverse(w.count));

    debug!(
        query,
        records = corpus.len(),
        total_matches,
        distinct = windows.len(),
        "Search finished"
    );

    Ok(SearchResult {
        total_matches,
        windows,
    })
}
