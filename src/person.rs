/// Person records and the unique-name sampler.
use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::error::{GenError, Result};
use crate::names::NamePools;

/// A generated person.
///
/// Borrows its names from the pools it was drawn from, so a person is three
/// words wide and display name / handle are rendered only when written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Person<'a> {
    id: u32,
    first: &'a str,
    last: &'a str,
}

impl<'a> Person<'a> {
    pub fn new(id: u32, first: &'a str, last: &'a str) -> Self {
        Self { id, first, last }
    }

    /// Zero-based id in generation order.
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn first(&self) -> &'a str {
        self.first
    }

    pub fn last(&self) -> &'a str {
        self.last
    }

    /// `"{first} {last}"`.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// `lowercase(last) + "_" + lowercase(first)`.
    pub fn handle(&self) -> String {
        let mut buf = String::with_capacity(self.first.len() + self.last.len() + 1);
        self.push_handle(&mut buf);
        buf
    }

    /// Append the handle to `buf` without allocating a fresh string.
    pub fn push_handle(&self, buf: &mut String) {
        push_lowercase(buf, self.last);
        buf.push('_');
        push_lowercase(buf, self.first);
    }
}

impl fmt::Display for Person<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

fn push_lowercase(buf: &mut String, s: &str) {
    if s.is_ascii() {
        buf.extend(s.bytes().map(|b| b.to_ascii_lowercase() as char));
    } else {
        buf.extend(s.chars().flat_map(char::to_lowercase));
    }
}

/// Marks (first index, last index) pairs already handed out.
struct UsedPairs {
    grid: Vec<bool>,
    stride: usize,
}

impl UsedPairs {
    fn new(first_len: usize, last_len: usize) -> Self {
        Self {
            grid: vec![false; first_len * last_len],
            stride: last_len,
        }
    }

    /// Returns `true` if the pair was not marked before.
    fn insert(&mut self, first: usize, last: usize) -> bool {
        let slot = &mut self.grid[first * self.stride + last];
        !std::mem::replace(slot, true)
    }
}

/// Draw `count` persons with pairwise distinct (first, last) name pairs.
///
/// Ids run `0..count` in generation order. Fails up front when the pools
/// cannot supply `count` distinct pairs.
pub fn sample_persons<'a, R: Rng + ?Sized>(
    pools: &NamePools<'a>,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Person<'a>>> {
    check_id_range(count)?;
    let available = pools.capacity().unwrap_or(usize::MAX);
    if count > available {
        return Err(GenError::NotEnoughNames {
            requested: count,
            available,
        });
    }

    let (first, last) = (pools.first(), pools.last());
    let mut persons = Vec::with_capacity(count);
    if count == 0 {
        return Ok(persons);
    }

    let mut used = UsedPairs::new(first.len(), last.len());
    let mut rejected: u64 = 0;
    while persons.len() < count {
        let f = rng.gen_range(0..first.len());
        let l = rng.gen_range(0..last.len());
        if !used.insert(f, l) {
            rejected += 1;
            continue;
        }
        persons.push(Person::new(persons.len() as u32, first[f], last[l]));
    }

    debug!(count, rejected, "sampled persons");
    Ok(persons)
}

/// Ids are `u32`; the one-based output id must fit as well.
pub(crate) fn check_id_range(count: usize) -> Result<()> {
    if count > u32::MAX as usize {
        return Err(GenError::TooManyPersons { requested: count });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn small_pools() -> NamePools<'static> {
        NamePools::new(&["Anna", "Ben"], &["Cole", "Drake"])
    }

    #[test]
    fn handle_is_last_underscore_first_lowercased() {
        let p = Person::new(0, "Anna", "McCole");
        assert_eq!(p.handle(), "mccole_anna");
        assert_eq!(p.name(), "Anna McCole");
    }

    #[test]
    fn handle_lowercases_non_ascii() {
        let p = Person::new(0, "Jörg", "Müller");
        assert_eq!(p.handle(), "müller_jörg");
    }

    #[test]
    fn push_handle_appends() {
        let mut buf = String::from("x,");
        Person::new(3, "Ben", "Drake").push_handle(&mut buf);
        assert_eq!(buf, "x,drake_ben");
    }

    #[test]
    fn samples_requested_count_with_distinct_pairs() {
        let mut rng = StdRng::seed_from_u64(7);
        let persons = sample_persons(&small_pools(), 3, &mut rng).unwrap();
        assert_eq!(persons.len(), 3);
        let pairs: HashSet<_> = persons.iter().map(|p| (p.first(), p.last())).collect();
        assert_eq!(pairs.len(), 3);
        let ids: Vec<u32> = persons.iter().map(Person::id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn exhausting_the_pools_still_terminates() {
        let mut rng = StdRng::seed_from_u64(1);
        let persons = sample_persons(&small_pools(), 4, &mut rng).unwrap();
        let handles: HashSet<_> = persons.iter().map(Person::handle).collect();
        assert_eq!(
            handles,
            HashSet::from([
                "cole_anna".to_string(),
                "cole_ben".to_string(),
                "drake_anna".to_string(),
                "drake_ben".to_string(),
            ])
        );
    }

    #[test]
    fn too_many_persons_fails_fast() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = sample_persons(&small_pools(), 5, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GenError::NotEnoughNames {
                requested: 5,
                available: 4
            }
        ));
    }

    #[test]
    fn zero_persons_from_empty_pools() {
        let pools = NamePools::new(&[], &[]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_persons(&pools, 0, &mut rng).unwrap().is_empty());
        assert!(sample_persons(&pools, 1, &mut rng).is_err());
    }

    #[test]
    fn same_seed_same_persons() {
        let pools = crate::names::builtin();
        let a = sample_persons(&pools, 200, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = sample_persons(&pools, 200, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }
}
