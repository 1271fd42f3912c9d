//! Fragment merging ("shrink").
//!
//! Coalesces adjacent redundant fragments into a denser equivalent sequence:
//!
//! - adjacent text runs are concatenated, empty text runs are dropped;
//! - adjacent elements with the same tag and attributes, both with contents,
//!   become one element whose contents are the shrunk concatenation.
//!
//! Self-closing markers are never fused: two markers in a row mean two marks.
//! Order is preserved and the pass is idempotent.

use crate::ir::fragment::Fragment;

pub fn shrink(fragments: Vec<Fragment>) -> Vec<Fragment> {
    let mut out: Vec<Fragment> = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) if text.is_empty() => {}
            Fragment::Text(text) => match out.last_mut() {
                Some(Fragment::Text(prev)) => prev.push_str(&text),
                _ => out.push(Fragment::Text(text)),
            },
            Fragment::Element(element) => {
                if !element.contents.is_empty() {
                    if let Some(Fragment::Element(prev)) = out.last_mut() {
                        if !prev.contents.is_empty()
                            && prev.tag == element.tag
                            && prev.attrs == element.attrs
                        {
                            let mut contents = std::mem::take(&mut prev.contents);
                            contents.extend(element.contents);
                            prev.contents = shrink(contents);
                            continue;
                        }
                    }
                }
                out.push(Fragment::Element(element));
            }
        }
    }
    out
}
