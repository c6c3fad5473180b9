// src/domain/statistics/aggregate.rs
//
// Aggregation Functions
//
// Pure functions over borrowed records. Callers pass either the filtered
// view or the full dataset; season trends and filter options are meant
// to be computed over the full dataset.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use super::entity::{
    AggregateSummary, FilterOptions, LabelCount, LabelMinutes, PresenterStats, SeasonStats,
};
use crate::domain::movie::MovieRecord;

/// Bucket for movies without an origin.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Label counter that remembers first-seen order, so stable sorts
/// break ties by first appearance.
#[derive(Default)]
struct OrderedTally<'a> {
    index: HashMap<&'a str, usize>,
    entries: Vec<(&'a str, usize)>,
}

impl<'a> OrderedTally<'a> {
    fn add(&mut self, label: &'a str) {
        match self.index.get(label) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(label, self.entries.len());
                self.entries.push((label, 1));
            }
        }
    }

    fn into_counts(self) -> Vec<LabelCount> {
        self.entries
            .into_iter()
            .map(|(label, count)| LabelCount {
                label: label.to_string(),
                count,
            })
            .collect()
    }

    /// Busiest first, ties in first-seen order, at most `limit` entries.
    fn into_top(self, limit: usize) -> Vec<LabelCount> {
        let mut counts = self.into_counts();
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(limit);
        counts
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Headline numbers for `records`.
pub fn summarize<'a, I>(records: I) -> AggregateSummary
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    let mut summary = AggregateSummary::default();
    let mut origins = HashSet::new();
    let mut presenters = HashSet::new();
    let mut rating_sum = 0.0;

    for movie in records {
        summary.total_movies += 1;
        summary.total_minutes += u64::from(movie.duration_minutes);

        if let Some(origin) = non_empty(movie.origin.as_deref()) {
            origins.insert(origin);
        }
        if let Some(presenter) = non_empty(movie.presented_by.as_deref()) {
            presenters.insert(presenter);
        }
        if let Some(rating) = movie.rating_percent {
            rating_sum += rating;
            summary.rated_movies += 1;
        }
    }

    summary.unique_origin_count = origins.len();
    summary.unique_presenter_count = presenters.len();
    summary.average_rating_percent = if summary.rated_movies > 0 {
        rating_sum / summary.rated_movies as f64
    } else {
        0.0
    };

    summary
}

/// Top `limit` genres. A movie listing two genres counts once for each.
pub fn group_by_genre<'a, I>(records: I, limit: usize) -> Vec<LabelCount>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    let mut tally = OrderedTally::default();
    for movie in records {
        for genre in movie.genres() {
            tally.add(genre);
        }
    }
    tally.into_top(limit)
}

/// Movies per origin in first-seen order. Missing origins count as "Unknown".
pub fn group_by_origin<'a, I>(records: I) -> Vec<LabelCount>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    let mut tally = OrderedTally::default();
    for movie in records {
        tally.add(non_empty(movie.origin.as_deref()).unwrap_or(UNKNOWN_LABEL));
    }
    tally.into_counts()
}

/// Top `limit` known origins, busiest first.
pub fn top_origins<'a, I>(records: I, limit: usize) -> Vec<LabelCount>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    let mut tally = OrderedTally::default();
    for movie in records {
        if let Some(origin) = non_empty(movie.origin.as_deref()) {
            tally.add(origin);
        }
    }
    tally.into_top(limit)
}

/// Top `limit` presenters by movie count, ties by name.
/// Presenters without a matching record never appear.
pub fn group_by_presenter<'a, I>(records: I, limit: usize) -> Vec<PresenterStats>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    let mut buckets: BTreeMap<&str, (usize, u64)> = BTreeMap::new();
    for movie in records {
        if let Some(presenter) = non_empty(movie.presented_by.as_deref()) {
            let bucket = buckets.entry(presenter).or_default();
            bucket.0 += 1;
            bucket.1 += u64::from(movie.duration_minutes);
        }
    }

    let mut stats: Vec<PresenterStats> = buckets
        .into_iter()
        .map(|(presenter, (movies, total_minutes))| PresenterStats {
            presenter: presenter.to_string(),
            movies,
            total_minutes,
        })
        .collect();

    stats.sort_by(|a, b| b.movies.cmp(&a.movies));
    stats.truncate(limit);
    stats
}

fn season_buckets<'a, I>(records: I) -> BTreeMap<&'a str, (usize, u64)>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    let mut buckets: BTreeMap<&str, (usize, u64)> = BTreeMap::new();
    for movie in records {
        if movie.season.is_empty() {
            continue;
        }
        let bucket = buckets.entry(movie.season.as_str()).or_default();
        bucket.0 += 1;
        bucket.1 += u64::from(movie.duration_minutes);
    }
    buckets
}

/// Count and duration per season, ordered by season label.
/// Pass the full dataset so the trend stays put while filters change.
pub fn group_by_season<'a, I>(records: I) -> Vec<SeasonStats>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    season_buckets(records)
        .into_iter()
        .map(|(season, (movies, total_minutes))| SeasonStats {
            season: season.to_string(),
            movies,
            total_minutes,
            average_minutes: if movies > 0 {
                total_minutes as f64 / movies as f64
            } else {
                0.0
            },
        })
        .collect()
}

/// Summed minutes per season, ordered by season label.
pub fn watch_time_by_season<'a, I>(records: I) -> Vec<LabelMinutes>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    season_buckets(records)
        .into_iter()
        .map(|(season, (_, total_minutes))| LabelMinutes {
            label: season.to_string(),
            total_minutes,
        })
        .collect()
}

/// Distinct non-empty seasons, sorted as strings.
pub fn distinct_seasons<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    records
        .into_iter()
        .map(|movie| movie.season.as_str())
        .filter(|season| !season.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct canonical presenters, sorted as strings.
pub fn distinct_presenters<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    records
        .into_iter()
        .filter_map(|movie| non_empty(movie.presented_by.as_deref()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn filter_options(records: &[MovieRecord]) -> FilterOptions {
    FilterOptions {
        seasons: distinct_seasons(records),
        presenters: distinct_presenters(records),
    }
}
