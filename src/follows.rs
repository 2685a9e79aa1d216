/// Random "follows" relationships between persons.
///
/// Every person follows exactly `per_person` other persons, drawn uniformly
/// without repetition and never itself. Edges come out grouped by source in
/// id order, and in draw order within a source. The sampler is a lazy
/// iterator so callers can stream edges to disk instead of holding all
/// `persons * per_person` of them in memory.
use rand::Rng;
use tracing::debug;

use crate::error::{GenError, Result};
use crate::person::check_id_range;

/// Out-degree used when none is configured.
pub const DEFAULT_FOLLOWS_PER_PERSON: usize = 50;

/// A directed edge: `source` follows `target` (zero-based person ids).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Follow {
    pub source: u32,
    pub target: u32,
}

/// Fails unless `persons` persons can each get `per_person` distinct
/// targets other than themselves.
pub fn check_out_degree(persons: usize, per_person: usize) -> Result<()> {
    if persons > 0 && per_person > persons - 1 {
        return Err(GenError::NotEnoughTargets {
            per_person,
            persons,
        });
    }
    Ok(())
}

/// Lazy edge sampler.
pub struct Follows<'r, R: Rng + ?Sized> {
    rng: &'r mut R,
    persons: u32,
    per_person: usize,
    source: u32,
    /// Targets drawn for the current source, in draw order.
    chosen: Vec<u32>,
    /// `taken[t]` is set while `t` is in `chosen`.
    taken: Vec<bool>,
    rejected: u64,
}

impl<'r, R: Rng + ?Sized> Follows<'r, R> {
    pub fn new(rng: &'r mut R, persons: usize, per_person: usize) -> Result<Self> {
        check_id_range(persons)?;
        check_out_degree(persons, per_person)?;
        let persons = persons as u32;
        // Nothing to draw; start exhausted so `next` never spins over sources.
        let source = if per_person == 0 { persons } else { 0 };
        Ok(Self {
            rng,
            persons,
            per_person,
            source,
            chosen: Vec::with_capacity(per_person),
            taken: vec![false; if per_person == 0 { 0 } else { persons as usize }],
            rejected: 0,
        })
    }

    fn advance_source(&mut self) {
        for &t in &self.chosen {
            self.taken[t as usize] = false;
        }
        self.chosen.clear();
        self.source += 1;
        if self.source == self.persons {
            debug!(
                persons = self.persons,
                per_person = self.per_person,
                rejected = self.rejected,
                "sampled follows"
            );
        }
    }
}

impl<R: Rng + ?Sized> Iterator for Follows<'_, R> {
    type Item = Follow;

    fn next(&mut self) -> Option<Follow> {
        while self.source < self.persons {
            if self.chosen.len() == self.per_person {
                self.advance_source();
                continue;
            }
            let target = self.rng.gen_range(0..self.persons);
            if target == self.source || self.taken[target as usize] {
                self.rejected += 1;
                continue;
            }
            self.taken[target as usize] = true;
            self.chosen.push(target);
            return Some(Follow {
                source: self.source,
                target,
            });
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let sources_left = (self.persons - self.source) as usize;
        let remaining = sources_left
            .saturating_mul(self.per_person)
            .saturating_sub(self.chosen.len());
        (remaining, Some(remaining))
    }
}

/// Collect every edge for `persons` persons with out-degree `per_person`.
pub fn sample_follows<R: Rng + ?Sized>(
    rng: &mut R,
    persons: usize,
    per_person: usize,
) -> Result<Vec<Follow>> {
    Ok(Follows::new(rng, persons, per_person)?.collect())
}
