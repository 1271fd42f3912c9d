//! Splitting of text runs into separator and non-separator lines.
//!
//! A run is split on each separator in turn; every pass re-splits every piece
//! produced by the previous one. Separators are never dropped: each occurrence
//! becomes a one-character piece of its own, and empty runs between
//! separators produce nothing. Concatenating the pieces gives back the input.

/// U+00A0 NO-BREAK SPACE
pub const NBSP: char = '\u{00A0}';

/// Separators applied to text runs, in order.
pub const SEPARATORS: [char; 2] = [' ', NBSP];

/// Split `run` on a single separator.
pub fn split_on(sep: char, run: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut runs = run.split(sep).peekable();
    while let Some(nsrun) = runs.next() {
        if !nsrun.is_empty() {
            pieces.push(nsrun.to_string());
        }
        if runs.peek().is_some() {
            pieces.push(sep.to_string());
        }
    }
    pieces
}

/// Split `run` successively on every separator in `separators`.
pub fn split_on_all(run: &str, separators: &[char]) -> Vec<String> {
    let mut pieces = vec![run.to_string()];
    for &sep in separators {
        pieces = pieces
            .iter()
            .flat_map(|piece| split_on(sep, piece))
            .collect();
    }
    pieces
}

/// Split `run` on the standard separators (space, then no-break space).
pub fn split_run(run: &str) -> Vec<String> {
    split_on_all(run, &SEPARATORS)
}
