/*!
A side table of extended statistics for redundant clauses.

Each row holds statistics of the use of a single redundant clause over a longer horizon than the counters of a [record](crate::db::arena::record), which are cleared on each reduction:
- Discounted averages of the use of the clause in propagation and as the reason for a first UIP, each as a pair of a fast and a slow average.
- Sums of use over the lifetime of the clause.
- Ranks of the clause among all rows, by four measures of use, each as a fraction with `0` the best.
- A cache of the last two scores given to the clause by a [predictor](crate::predictor).

A row is linked to a clause in both directions: the record of the clause holds the index of the row, and the row holds a reference to the clause (together with the identity of the clause).
Rows are created on the first scan of a clause by a reduction which collects statistics, and are dropped when the table is [compacted](SideTable::compact) after the clause is marked as garbage or made irredundant.

Ranking does not reorder rows.
Instead, a permutation of the rows is sorted by a key, and the ranks are written to the rows after sorting.
So, the link from a clause to a row is only revised by compaction of the table.
*/

use crate::{
    db::{
        arena::{
            record::{Record, ClauseViewMut},
            Arena,
        },
        clause::collect::Relocation,
        ClauseId, ClauseRef,
    },
    misc::log::targets::{self},
    types::err::{self},
};

/// The weight given to history by the fast discounted average, and to the present by the slow.
pub const DISCOUNT_RATE: f64 = 0.7;

/// The ranks of a row, each a fraction in `[0, 1)` with `0` the best.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ranks {
    /// By the fast discounted average of propagations.
    pub prop: f64,

    /// By the fast discounted average of uses as a first UIP reason.
    pub uip: f64,

    /// By the lifetime sum of propagations.
    pub props: f64,

    /// By the lifetime sum of uses as a first UIP reason.
    pub uips: f64,
}

/// A row of extended statistics.
#[derive(Clone, Debug)]
pub struct ExtData {
    /// The identity of the clause of the row.
    pub identity: ClauseId,

    /// The clause of the row.
    pub clause: ClauseRef,

    /// Whether the clause of the row is garbage (or no longer redundant).
    pub garbage: bool,

    /// Whether the row was found by the current scan.
    pub seen: bool,

    /// The count of conflicts when the row was made.
    pub born: u64,

    /// Discounted averages of propagations, fast then slow.
    pub discounted_props: [f64; 2],

    /// Discounted averages of uses as a first UIP reason, fast then slow.
    pub discounted_uips: [f64; 2],

    /// Propagations over the lifetime of the clause.
    pub sum_props: u64,

    /// Uses as a first UIP reason over the lifetime of the clause.
    pub sum_uips: u64,

    /// Propagations per conflict, over the last period.
    pub props_per_conflict: f64,

    /// Uses as a first UIP reason per conflict, over the last period.
    pub uips_per_conflict: f64,

    /// Propagations per conflict, over the lifetime of the clause.
    pub props_per_time: f64,

    /// Uses as a first UIP reason per conflict, over the lifetime of the clause.
    pub uips_per_time: f64,

    /// The count of conflicts when the clause was last used.
    pub last_touched: u64,

    /// Ranks among the rows of the table.
    pub ranks: Ranks,

    /// The last two scores from a predictor, most recent first.
    pub prediction: [f64; 2],
}

impl ExtData {
    /// A fresh row for the clause with `identity` at `clause`, made after `conflicts` conflicts.
    pub fn new(identity: ClauseId, clause: ClauseRef, conflicts: u64) -> Self {
        ExtData {
            identity,
            clause,
            garbage: false,
            seen: false,
            born: conflicts,
            discounted_props: [0.0; 2],
            discounted_uips: [0.0; 2],
            sum_props: 0,
            sum_uips: 0,
            props_per_conflict: 0.0,
            uips_per_conflict: 0.0,
            props_per_time: 0.0,
            uips_per_time: 0.0,
            last_touched: conflicts,
            ranks: Ranks::default(),
            prediction: [0.0; 2],
        }
    }

    /// Folds the use of a clause over the last period into the row.
    ///
    /// - `conflicts` is the current count of conflicts.
    /// - `last_reduction` is the count of conflicts at the end of the last reduction.
    ///
    /// The length of the period considered is the lesser of the time since the last reduction and the lifetime of the row.
    /// The history of an average is scaled by the share of the lifetime before the period, and the period by the share within.
    pub fn update(
        &mut self,
        props_used: u32,
        uip1_used: u32,
        last_touched: u64,
        conflicts: u64,
        last_reduction: u64,
    ) {
        let lifetime = conflicts.saturating_sub(self.born);
        let round = conflicts.saturating_sub(last_reduction);
        let clause_round = std::cmp::min(round, lifetime);

        self.sum_props += props_used as u64;
        self.sum_uips += uip1_used as u64;
        self.last_touched = last_touched;
        self.seen = true;

        if lifetime == 0 {
            self.props_per_conflict = 0.0;
            self.uips_per_conflict = 0.0;
            self.discounted_props = [0.0; 2];
            self.discounted_uips = [0.0; 2];
            self.props_per_time = 0.0;
            self.uips_per_time = 0.0;
            return;
        }

        let past = (lifetime - clause_round) as f64 / lifetime as f64;
        let now = clause_round as f64 / lifetime as f64;
        let rate = DISCOUNT_RATE;

        let props = props_used as f64;
        self.discounted_props[0] = self.discounted_props[0] * rate * past + props * (1.0 - rate) * now;
        self.discounted_props[1] = self.discounted_props[1] * (1.0 - rate) * past + props * rate * now;

        let uips = uip1_used as f64;
        self.discounted_uips[0] = self.discounted_uips[0] * rate * past + uips * (1.0 - rate) * now;
        self.discounted_uips[1] = self.discounted_uips[1] * (1.0 - rate) * past + uips * rate * now;

        (self.props_per_conflict, self.uips_per_conflict) = match clause_round {
            0 => (0.0, 0.0),
            _ => (props / clause_round as f64, uips / clause_round as f64),
        };

        self.props_per_time = self.sum_props as f64 / lifetime as f64;
        self.uips_per_time = self.sum_uips as f64 / lifetime as f64;
    }
}

impl std::fmt::Display for ExtData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} born {} props {:?}/{} uips {:?}/{} ranks {:.3} {:.3} {:.3} {:.3} prediction {:?}",
            self.identity,
            self.clause,
            self.born,
            self.discounted_props,
            self.sum_props,
            self.discounted_uips,
            self.sum_uips,
            self.ranks.prop,
            self.ranks.uip,
            self.ranks.props,
            self.ranks.uips,
            self.prediction,
        )?;
        if self.garbage {
            write!(f, " garbage")?;
        }
        Ok(())
    }
}

/// The side table.
#[derive(Default)]
pub struct SideTable {
    rows: Vec<ExtData>,
}

impl SideTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[ExtData] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&ExtData> {
        self.rows.get(index)
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [ExtData] {
        &mut self.rows
    }

    /// Marks the row at `index` as garbage, if the row exists.
    pub(crate) fn mark_garbage(&mut self, index: usize) {
        match self.rows.get_mut(index) {
            Some(row) => row.garbage = true,
            None => log::error!(target: targets::SIDE_TABLE, "Garbage marked on missing row {index}"),
        }
    }

    /// Clears the seen flag of every row, ahead of a scan.
    pub(crate) fn mark_unseen(&mut self) {
        for row in &mut self.rows {
            row.seen = false;
        }
    }

    /// The row linked to `record`, made if the record has no row.
    ///
    /// The link from the record to the row is set on making a row, and the link from the row to the clause is always revised.
    pub(crate) fn row_for(
        &mut self,
        record: &mut ClauseViewMut<'_>,
        reference: ClauseRef,
        conflicts: u64,
    ) -> Result<&mut ExtData, err::SideTableError> {
        let index = match record.side_table_index() {
            Some(index) => index,
            None => {
                let index = self.rows.len();
                self.rows.push(ExtData::new(record.identity(), reference, conflicts));
                record.set_side_table_index(Some(index));
                log::trace!(target: targets::SIDE_TABLE, "Row {index} made for #{}", record.identity());
                index
            }
        };

        let row = self.rows.get_mut(index).ok_or(err::SideTableError::MissingRow)?;
        if row.identity != record.identity() {
            log::error!(target: targets::SIDE_TABLE, "Row {index} has identity #{} for #{}", row.identity, record.identity());
            return Err(err::SideTableError::IdentityMismatch);
        }
        row.clause = reference;
        Ok(row)
    }

    /// Drops every row which is garbage or was not seen by the last scan, and revises the link from each clause to the row of the clause.
    ///
    /// A row which was not seen though is not garbage indicates a clause left the arena without being marked as garbage.
    /// Such rows are logged, and dropped.
    ///
    /// Returns the count of rows dropped.
    pub(crate) fn compact(&mut self, arena: &mut Arena) -> Result<usize, err::ErrorKind> {
        let before = self.rows.len();

        for row in self.rows.iter().filter(|row| !row.seen && !row.garbage) {
            log::error!(target: targets::SIDE_TABLE, "Row neither seen nor garbage: {row}");
        }

        self.rows.retain(|row| row.seen && !row.garbage);

        for (index, row) in self.rows.iter().enumerate() {
            let mut record = arena.clause_mut(row.clause)?;
            if record.identity() != row.identity {
                log::error!(target: targets::SIDE_TABLE, "Clause {} has identity #{} for row #{}", row.clause, record.identity(), row.identity);
                return Err(err::SideTableError::IdentityMismatch.into());
            }
            record.set_side_table_index(Some(index));
        }

        let dropped = before - self.rows.len();
        log::debug!(target: targets::SIDE_TABLE, "Compacted to {} rows, dropping {dropped}", self.rows.len());
        Ok(dropped)
    }

    /// Writes the rank of each row, by each of the four measures of use.
    ///
    /// Rows are ranked best first, and so the row with the most use has rank `0`.
    /// Ties are broken by the order of rows.
    pub(crate) fn rank(&mut self) {
        let prop = self.ranks_by(|row| row.discounted_props[0]);
        let uip = self.ranks_by(|row| row.discounted_uips[0]);
        let props = self.ranks_by(|row| row.sum_props as f64);
        let uips = self.ranks_by(|row| row.sum_uips as f64);

        for (index, row) in self.rows.iter_mut().enumerate() {
            row.ranks = Ranks {
                prop: prop[index],
                uip: uip[index],
                props: props[index],
                uips: uips[index],
            };
        }
    }

    /// The rank of each row by `key`, with greater values of the key ranked first.
    fn ranks_by(&self, key: impl Fn(&ExtData) -> f64) -> Vec<f64> {
        let keys = self.rows.iter().map(key).collect::<Vec<_>>();

        let mut order = (0..self.rows.len()).collect::<Vec<_>>();
        order.sort_by(|a, b| keys[*b].total_cmp(&keys[*a]));

        let total = self.rows.len() as f64;
        let mut ranks = vec![0.0; self.rows.len()];
        for (position, index) in order.into_iter().enumerate() {
            ranks[index] = position as f64 / total;
        }
        ranks
    }

    /// Revises the clause of each row after compaction of the arena.
    ///
    /// Rows of clauses dropped by compaction are given an invalid reference.
    pub(crate) fn relocate(&mut self, relocation: &Relocation) {
        for row in &mut self.rows {
            row.clause = relocation.get(row.clause).unwrap_or(ClauseRef::INVALID);
        }
    }
}
