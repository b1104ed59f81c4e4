/*!
The static strategy of reduction, by glue and size.

Each candidate is given a [rank], and candidates are sorted by rank.
A fixed percentage of candidates, from the front of the sort, is marked as garbage.

```rust
# use otter_clause_db::procedures::reduce::static_rank::rank;
// Higher glue is worse, and so sorts first.
assert!(rank(9, 3) < rank(2, 3));
// For equal glue, larger clauses are worse.
assert!(rank(4, 12) < rank(4, 3));
```

A candidate is a live redundant clause, which is not a reason, and is not kept.
Though, a clause with glue within the second tier which has been [used](crate::db::arena::record::Record::used) since the last reduction is granted a grace period.
The counter of use is decremented, and the clause is not a candidate for this reduction.
*/

use crate::{
    config::{Config, Glue, Percentage},
    db::{
        arena::record::{ClauseViewMut, Flag, Record},
        clause::ClauseDB,
        ClauseRef,
    },
    misc::log::targets::{self},
    types::err::ErrorKind,
};

use super::EvictionStrategy;

/// The rank of a clause of `size` literals with `glue`.
///
/// An ascending sort of ranks places clauses of higher glue first, and for equal glue larger clauses first.
pub fn rank(glue: Glue, size: usize) -> u64 {
    ((!glue) as u64) << 32 | (!(size as u32)) as u64
}

/// Candidates for removal, ranked by glue and size.
pub struct StaticEviction {
    tier2: Glue,
    use_ml: bool,
    generating: bool,
    fraction: Percentage,
    candidates: Vec<(u64, ClauseRef)>,
}

impl StaticEviction {
    pub fn new(config: &Config) -> Self {
        StaticEviction {
            tier2: config.clause_db.tier2.value,
            use_ml: config.prediction.use_ml_data.value,
            generating: config.prediction.gen_ml_data.value,
            fraction: config.reduction.reduce_fraction.value,
            candidates: Vec::default(),
        }
    }

    /// The count of candidates to remove.
    fn quota(&self) -> usize {
        self.candidates.len() * self.fraction as usize / 100
    }
}

impl EvictionStrategy for StaticEviction {
    fn consider(&mut self, reference: ClauseRef, record: &mut ClauseViewMut<'_>) {
        if record.flag(Flag::Keep) && !self.use_ml {
            return;
        }

        let glue = record.glue();
        let used = record.used();
        if used > 0 {
            record.set_used(used - 1);
            if !self.generating && glue <= self.tier2 {
                return;
            }
        }

        self.candidates.push((rank(glue, record.size()), reference));
    }

    fn has_candidates(&self) -> bool {
        !self.candidates.is_empty()
    }

    fn evict(&mut self, clause_db: &mut ClauseDB, _conflicts: u64) -> Result<usize, ErrorKind> {
        // Stable, so ties keep the order of the arena.
        self.candidates.sort_by_key(|(rank, _)| *rank);

        let quota = self.quota();
        log::debug!(target: targets::REDUCTION, "Removing {quota} of {} candidates", self.candidates.len());

        for (_, reference) in &self.candidates[..quota] {
            debug_assert!(clause_db.arena.clause(*reference).is_ok_and(|record| !record.is_garbage()));
            clause_db.mark_garbage(*reference)?;
        }

        Ok(quota)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glue_before_size() {
        assert!(rank(5, 100) > rank(6, 3));
        assert!(rank(5, 4) < rank(5, 3));
        assert_eq!(rank(5, 3), rank(5, 3));
    }

    #[test]
    fn quota_rounds_down() {
        let mut config = Config::default();
        config.reduction.reduce_fraction.value = 30;

        let mut strategy = StaticEviction::new(&config);
        for offset in 0..7 {
            strategy.candidates.push((0, ClauseRef::from_offset(offset * 12)));
        }
        assert_eq!(strategy.quota(), 2);

        config.reduction.reduce_fraction.value = 100;
        strategy.fraction = config.reduction.reduce_fraction.value;
        assert_eq!(strategy.quota(), 7);
    }
}
