use derive_new::new;
use std::ops::{Index, IndexMut, Range};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

pub trait DiffAlgorithm<T> {
    fn diff(&self) -> Vec<Edit<T>>;
}

/// Myers' O((N+M)D) shortest edit script in linear space
///
/// Instead of keeping one frontier per edit distance and backtracking, each
/// range is split at the middle snake of an optimal path and both halves are
/// solved recursively. Memory stays proportional to N+M.
///
/// The result is a minimal sequence of deletions and insertions, which makes
/// the equal items a longest common subsequence of both inputs.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

/// Furthest-reaching x per diagonal, indexed by diagonal number
struct Frontier {
    offset: isize,
    v: Vec<usize>,
}

impl Frontier {
    fn new(max_d: usize) -> Self {
        Frontier {
            offset: max_d as isize,
            v: vec![0; 2 * max_d + 1],
        }
    }
}

impl Index<isize> for Frontier {
    type Output = usize;

    fn index(&self, k: isize) -> &usize {
        &self.v[(self.offset + k) as usize]
    }
}

impl IndexMut<isize> for Frontier {
    fn index_mut(&mut self, k: isize) -> &mut usize {
        &mut self.v[(self.offset + k) as usize]
    }
}

/// Upper bound on the number of rounds needed to meet in the middle
fn max_d(n: usize, m: usize) -> usize {
    (n + m).div_ceil(2) + 1
}

impl<T: Eq + Clone> DiffAlgorithm<T> for MyersDiff<'_, T> {
    fn diff(&self) -> Vec<Edit<T>> {
        let mut edits = Vec::with_capacity(self.a.len().max(self.b.len()));

        let max_d = max_d(self.a.len(), self.b.len());
        let mut forward = Frontier::new(max_d);
        let mut backward = Frontier::new(max_d);

        self.conquer(
            0..self.a.len(),
            0..self.b.len(),
            &mut forward,
            &mut backward,
            &mut edits,
        );

        edits
    }
}

impl<T: Eq + Clone> MyersDiff<'_, T> {
    fn conquer(
        &self,
        mut a_range: Range<usize>,
        mut b_range: Range<usize>,
        forward: &mut Frontier,
        backward: &mut Frontier,
        edits: &mut Vec<Edit<T>>,
    ) {
        let prefix_len = self.common_prefix_len(a_range.clone(), b_range.clone());
        for value in &self.a[a_range.start..a_range.start + prefix_len] {
            edits.push(Edit::Equal {
                value: value.clone(),
            });
        }
        a_range.start += prefix_len;
        b_range.start += prefix_len;

        let suffix_len = self.common_suffix_len(a_range.clone(), b_range.clone());
        let suffix = a_range.end - suffix_len..a_range.end;
        a_range.end -= suffix_len;
        b_range.end -= suffix_len;

        if a_range.is_empty() || b_range.is_empty() {
            for value in &self.a[a_range] {
                edits.push(Edit::Delete {
                    value: value.clone(),
                });
            }
            for value in &self.b[b_range] {
                edits.push(Edit::Insert {
                    value: value.clone(),
                });
            }
        } else {
            let (x, y) = self.middle_snake(a_range.clone(), b_range.clone(), forward, backward);

            self.conquer(a_range.start..x, b_range.start..y, forward, backward, edits);
            self.conquer(x..a_range.end, y..b_range.end, forward, backward, edits);
        }

        for value in &self.a[suffix] {
            edits.push(Edit::Equal {
                value: value.clone(),
            });
        }
    }

    /// Find a point on an optimal path through the two ranges
    ///
    /// Both ranges are non-empty and differ in their first and last items, so
    /// the returned point always splits off a strictly smaller problem on
    /// either side.
    fn middle_snake(
        &self,
        a_range: Range<usize>,
        b_range: Range<usize>,
        forward: &mut Frontier,
        backward: &mut Frontier,
    ) -> (usize, usize) {
        let (n, m) = (a_range.len(), b_range.len());
        let delta = n as isize - m as isize;
        let odd = delta & 1 == 1;

        forward[1] = 0;
        backward[1] = 0;

        for d in 0..max_d(n, m) as isize {
            for k in (-d..=d).rev().step_by(2) {
                // we come either from k+1 (an insertion) or from k-1 (a deletion)
                let mut x = if k == -d || (k != d && forward[k - 1] < forward[k + 1]) {
                    forward[k + 1]
                } else {
                    forward[k - 1] + 1
                };
                let y = (x as isize - k) as usize;
                let (x0, y0) = (x, y);

                if x < n && y < m {
                    x += self.common_prefix_len(
                        a_range.start + x..a_range.end,
                        b_range.start + y..b_range.end,
                    );
                }
                forward[k] = x;

                if odd && (k - delta).abs() < d && forward[k] + backward[delta - k] >= n {
                    return (a_range.start + x0, b_range.start + y0);
                }
            }

            for k in (-d..=d).rev().step_by(2) {
                // x and y count items consumed from the end of each range
                let mut x = if k == -d || (k != d && backward[k - 1] < backward[k + 1]) {
                    backward[k + 1]
                } else {
                    backward[k - 1] + 1
                };
                let mut y = (x as isize - k) as usize;

                if x < n && y < m {
                    let snake = self.common_suffix_len(
                        a_range.start..a_range.start + n - x,
                        b_range.start..b_range.start + m - y,
                    );
                    x += snake;
                    y += snake;
                }
                backward[k] = x;

                if !odd && (k - delta).abs() <= d && backward[k] + forward[delta - k] >= n {
                    return (a_range.start + n - x, b_range.start + m - y);
                }
            }
        }

        // an optimal path always meets within max_d rounds
        (a_range.end, b_range.start)
    }

    fn common_prefix_len(&self, a_range: Range<usize>, b_range: Range<usize>) -> usize {
        self.a[a_range]
            .iter()
            .zip(&self.b[b_range])
            .take_while(|(a, b)| a == b)
            .count()
    }

    fn common_suffix_len(&self, a_range: Range<usize>, b_range: Range<usize>) -> usize {
        self.a[a_range]
            .iter()
            .rev()
            .zip(self.b[b_range].iter().rev())
            .take_while(|(a, b)| a == b)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn equal_items<T: Clone>(edits: &[Edit<T>]) -> Vec<T> {
        edits
            .iter()
            .filter_map(|edit| match edit {
                Edit::Equal { value } => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    fn old_side<T: Clone>(edits: &[Edit<T>]) -> Vec<T> {
        edits
            .iter()
            .filter_map(|edit| match edit {
                Edit::Equal { value } | Edit::Delete { value } => Some(value.clone()),
                Edit::Insert { .. } => None,
            })
            .collect()
    }

    fn new_side<T: Clone>(edits: &[Edit<T>]) -> Vec<T> {
        edits
            .iter()
            .filter_map(|edit| match edit {
                Edit::Equal { value } | Edit::Insert { value } => Some(value.clone()),
                Edit::Delete { .. } => None,
            })
            .collect()
    }

    fn lcs_len<T: Eq>(a: &[T], b: &[T]) -> usize {
        let mut row = vec![0; b.len() + 1];
        for item in a {
            let mut diagonal = 0;
            for (j, other) in b.iter().enumerate() {
                let above = row[j + 1];
                row[j + 1] = if item == other {
                    diagonal + 1
                } else {
                    row[j + 1].max(row[j])
                };
                diagonal = above;
            }
        }
        row[b.len()]
    }

    #[test]
    fn empty_inputs_produce_no_edits() {
        let empty: Vec<&str> = Vec::new();
        assert_eq!(MyersDiff::new(&empty, &empty).diff(), Vec::new());
    }

    #[test]
    fn one_sided_inputs_are_pure_inserts_or_deletes() {
        let empty: Vec<&str> = Vec::new();
        let lines = vec!["a", "b"];

        assert_eq!(
            MyersDiff::new(&empty, &lines).diff(),
            vec![Edit::Insert { value: "a" }, Edit::Insert { value: "b" }]
        );
        assert_eq!(
            MyersDiff::new(&lines, &empty).diff(),
            vec![Edit::Delete { value: "a" }, Edit::Delete { value: "b" }]
        );
    }

    #[test]
    fn shared_prefix_and_suffix_stay_in_place() {
        let a = vec!["head", "old", "tail"];
        let b = vec!["head", "new", "tail"];

        let edits = MyersDiff::new(&a, &b).diff();

        assert_eq!(edits.first(), Some(&Edit::Equal { value: "head" }));
        assert_eq!(edits.last(), Some(&Edit::Equal { value: "tail" }));
        assert_eq!(edits.len(), 4);
    }

    #[rstest]
    #[case("abcabba", "cbabac", 4)]
    #[case("abc", "xyz", 0)]
    #[case("xaxbx", "ab", 2)]
    #[case("ab", "ba", 1)]
    fn equal_items_form_a_longest_common_subsequence(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected_lcs: usize,
    ) {
        let a = a.chars().collect::<Vec<_>>();
        let b = b.chars().collect::<Vec<_>>();

        let edits = MyersDiff::new(&a, &b).diff();

        assert_eq!(equal_items(&edits).len(), expected_lcs);
        assert_eq!(old_side(&edits), a);
        assert_eq!(new_side(&edits), b);
    }

    #[test]
    fn fully_rewritten_inputs_are_diffed_without_quadratic_state() {
        let a = (0..4000).map(|i| format!("old {i}")).collect::<Vec<_>>();
        let b = (0..4000).map(|i| format!("new {i}")).collect::<Vec<_>>();

        let edits = MyersDiff::new(&a, &b).diff();

        assert_eq!(edits.len(), 8000);
        assert!(equal_items(&edits).is_empty());
        assert_eq!(old_side(&edits), a);
        assert_eq!(new_side(&edits), b);
    }

    proptest! {
        #[test]
        fn edit_scripts_are_minimal(
            a in proptest::collection::vec(0u8..4, 0..24),
            b in proptest::collection::vec(0u8..4, 0..24),
        ) {
            let edits = MyersDiff::new(&a, &b).diff();

            prop_assert_eq!(old_side(&edits), a.clone());
            prop_assert_eq!(new_side(&edits), b.clone());
            prop_assert_eq!(equal_items(&edits).len(), lcs_len(&a, &b));
        }
    }
}
