// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Descending rankings.
//!
//! Every ranking in the solver (ingredient values, ingredient ratios) goes
//! through `sort_descending_by`, so they all share one tie rule: the sort is
//! stable and equal keys keep their input order.

use std::cmp::Ordering;

/// A list of `(key, score)` pairs ordered by descending score.
pub type Ranking<K, V> = Vec<(K, V)>;

/// Sorts `items` by descending `key`, keeping the input order of equal keys.
///
/// Keys that cannot be compared (`NaN`) are treated as equal.
#[inline]
pub fn sort_descending_by<E, K, F>(items: &mut [E], mut key: F)
where
    F: FnMut(&E) -> K,
    K: PartialOrd,
{
    items.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
}

/// Sorts ranking entries by descending score.
#[inline]
pub fn sort_ranking<K, V>(ranking: &mut [(K, V)])
where
    V: PartialOrd + Copy,
{
    sort_descending_by(ranking, |&(_, score)| score);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_descending() {
        let mut v = vec![("a", 1), ("b", 3), ("c", 2)];
        sort_ranking(&mut v);
        assert_eq!(v, vec![("b", 3), ("c", 2), ("a", 1)]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut v = vec![("x", 1.0), ("y", 2.0), ("z", 1.0), ("w", 2.0)];
        sort_ranking(&mut v);
        assert_eq!(v, vec![("y", 2.0), ("w", 2.0), ("x", 1.0), ("z", 1.0)]);
    }

    #[test]
    fn test_sort_by_custom_key() {
        let mut v = vec!["bb", "a", "ccc"];
        sort_descending_by(&mut v, |s| s.len());
        assert_eq!(v, vec!["ccc", "bb", "a"]);
    }
}
