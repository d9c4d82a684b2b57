//! Tracking pipeline.
//!
//! The `Tracker` owns the only mutable state of the program: the current list of aircraft and
//! the set of every hex code seen since we started.  It is driven by the event loop, once per
//! iteration, and decides by itself whether it is time to fetch again.
//!

use std::collections::HashSet;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use skywatch_formats::TrackedAircraft;
use skywatch_sources::{fetch_or_empty, Fetchable, OwnerRegistry, Reference};

/// Every hex code seen during the session, never pruned.
///
#[derive(Debug, Default)]
pub struct SeenSet(HashSet<String>);

impl SeenSet {
    /// Add the hex code of every aircraft in `list`, aircraft without one are not counted.
    ///
    pub fn merge(&mut self, list: &[TrackedAircraft]) {
        self.0
            .extend(list.iter().filter_map(|a| a.hex.as_ref()).cloned());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Stable sort by increasing distance.
///
#[inline]
pub fn sort_by_distance(list: &mut [TrackedAircraft]) {
    list.sort_by(|a, b| a.distance.total_cmp(&b.distance));
}

/// State of the pipeline.
///
#[derive(Debug)]
pub struct Tracker {
    /// Current aircraft, sorted by distance
    aircraft: Vec<TrackedAircraft>,
    /// Everything seen so far
    seen: SeenSet,
    /// When we last fetched, `None` before the first fetch
    last_fetch: Option<Instant>,
    /// Delay between fetches
    refresh: Duration,
    /// Proximity alert distance
    proximity: f64,
}

impl Tracker {
    pub fn new(refresh: Duration, proximity: f64) -> Self {
        Tracker {
            aircraft: vec![],
            seen: SeenSet::default(),
            last_fetch: None,
            refresh,
            proximity,
        }
    }

    /// Is it time to fetch again?
    ///
    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_fetch {
            Some(last) => now.saturating_duration_since(last) >= self.refresh,
            None => true,
        }
    }

    /// Replace the current list with a new one.
    ///
    /// This happens after every fetch, successful or not: an empty list from a failed fetch
    /// clears the display until the next one.
    ///
    pub fn update(&mut self, mut list: Vec<TrackedAircraft>, now: Instant) {
        sort_by_distance(&mut list);
        self.seen.merge(&list);
        self.aircraft = list;
        self.last_fetch = Some(now);
        debug!(
            "{} aircraft, {} alerts, {} seen",
            self.aircraft.len(),
            self.alerts().len(),
            self.seen.len()
        );
    }

    /// One iteration of the pipeline: fetch from `src` if due.
    ///
    /// Returns whether a fetch happened.
    ///
    #[tracing::instrument(skip(self, src, registry))]
    pub fn tick(
        &mut self,
        src: &dyn Fetchable,
        registry: &OwnerRegistry,
        reference: &Reference,
        now: Instant,
    ) -> bool {
        if !self.is_due(now) {
            return false;
        }
        trace!("fetching from {}", src.name());
        let list = fetch_or_empty(src, registry, reference);
        self.update(list, now);
        true
    }

    /// Current aircraft, closest first
    ///
    #[inline]
    pub fn aircraft(&self) -> &[TrackedAircraft] {
        &self.aircraft
    }

    /// Aircraft within the proximity alert distance.
    ///
    /// As the list is sorted, this is always its head.
    ///
    #[inline]
    pub fn alerts(&self) -> &[TrackedAircraft] {
        let n = self
            .aircraft
            .partition_point(|a| a.distance <= self.proximity);
        &self.aircraft[..n]
    }

    /// Number of unique aircraft seen so far
    ///
    #[inline]
    pub fn seen(&self) -> usize {
        self.seen.len()
    }
}
