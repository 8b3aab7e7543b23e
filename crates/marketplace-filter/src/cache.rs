use std::collections::HashMap;
use std::sync::Arc;

use marketplace_catalog::{Catalog, Plugin};

use crate::criteria::FilterCriteria;
use crate::engine::filter_positions;

const DEFAULT_CAPACITY: usize = 256;

/// Memoizes filter results per criteria tuple for one catalog.
///
/// Once `capacity` distinct tuples have been stored the cache starts over.
#[derive(Debug)]
pub struct FilterCache {
    catalog: Arc<Catalog>,
    results: HashMap<FilterCriteria, Arc<[usize]>>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl FilterCache {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_capacity(catalog, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(catalog: Arc<Catalog>, capacity: usize) -> Self {
        Self {
            catalog,
            results: HashMap::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn positions(&mut self, criteria: &FilterCriteria) -> Arc<[usize]> {
        if let Some(found) = self.results.get(criteria) {
            self.hits += 1;
            return Arc::clone(found);
        }
        self.misses += 1;
        if self.results.len() >= self.capacity {
            log::trace!("filter cache full ({} entries), clearing", self.results.len());
            self.results.clear();
        }
        let positions: Arc<[usize]> = filter_positions(self.catalog.plugins(), criteria).into();
        self.results.insert(criteria.clone(), Arc::clone(&positions));
        positions
    }

    pub fn filter(&mut self, criteria: &FilterCriteria) -> Vec<&Plugin> {
        let positions = self.positions(criteria);
        let plugins = self.catalog.plugins();
        positions.iter().map(|position| &plugins[*position]).collect()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }
}
