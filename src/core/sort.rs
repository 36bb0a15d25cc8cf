//! Orderings for the city listing.
//!
//! Every function copies its input into a fresh `Vec` and sorts that with the
//! standard library's stable sort, so equal keys keep their input order. They
//! accept owned records or references alike.

use crate::core::{CityRecord, SortKey};
use std::borrow::Borrow;

/// Ascending by name, ties broken by state code.
pub fn sort_by_name<R>(records: &[R]) -> Vec<R>
where
    R: Borrow<CityRecord> + Clone,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.borrow().cmp_by_name(b.borrow()));
    sorted
}

/// Ascending by population; equal populations stay in input order.
pub fn sort_by_population<R>(records: &[R]) -> Vec<R>
where
    R: Borrow<CityRecord> + Clone,
{
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|record| record.borrow().population);
    sorted
}

pub fn sort_records<R>(records: &[R], key: SortKey) -> Vec<R>
where
    R: Borrow<CityRecord> + Clone,
{
    match key {
        SortKey::ByName => sort_by_name(records),
        SortKey::ByPopulation => sort_by_population(records),
    }
}
