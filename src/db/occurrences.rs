/*!
Counts of the irredundant clauses in which each literal occurs.

A literal is 'added' when some irredundant (or original) clause containing the literal is stored, and 'removed' when such a clause is deleted.
Procedures such as elimination use the counts to find literals which no longer occur.

```rust
# use otter_clause_db::db::occurrences::Occurrences;
let mut occurrences = Occurrences::default();
occurrences.mark_added(&[1, -2, 3]);
occurrences.mark_added(&[1, 2]);
occurrences.mark_removed(&[1, 2]);

assert_eq!(occurrences.count(1), 1);
assert_eq!(occurrences.count(2), 0);
assert_eq!(occurrences.count(-2), 1);
```
*/

use crate::structures::literal::{CLiteral, Literal};

/// Counts of occurrences, indexed by [Literal::index].
#[derive(Default)]
pub struct Occurrences {
    counts: Vec<u32>,
}

impl Occurrences {
    /// The count of irredundant clauses containing `literal`.
    pub fn count(&self, literal: CLiteral) -> u32 {
        self.counts.get(literal.index()).copied().unwrap_or(0)
    }

    /// Notes an occurrence of each of `literals`.
    pub fn mark_added(&mut self, literals: &[CLiteral]) {
        for literal in literals {
            let index = literal.index();
            if index >= self.counts.len() {
                self.counts.resize((index | 1) + 1, 0);
            }
            self.counts[index] += 1;
        }
    }

    /// Notes the end of an occurrence of each of `literals`.
    pub fn mark_removed(&mut self, literals: &[CLiteral]) {
        for literal in literals {
            if let Some(count) = self.counts.get_mut(literal.index()) {
                debug_assert!(*count > 0);
                *count = count.saturating_sub(1);
            }
        }
    }
}
