use std::sync::{Arc, Mutex};

use refind_core::{DescriptorType, IMetric, IScore, Item, RefindError, RefindResult};
use tracing::debug;

use crate::strategies::shift_query;

/// Reference points derived from one feedback state.
#[derive(Debug)]
struct BayesReference {
    labeled: usize,
    /// The query after a centroid shift.
    shifted: Item,
    /// Database item farthest from `shifted`.
    farthest: Option<Arc<Item>>,
}

/// Relevance from the distance to the centroid-shifted query, scaled by the
/// distance to the database item farthest from it:
/// `(1 - e^(1 - d(shifted, x) / d(farthest, x))) / (1 - e)`.
///
/// The reference pair is recomputed whenever the query's labeled count
/// changes. Check and recompute happen under one lock, so concurrent callers
/// never see a half-updated pair. The caller's query is never modified.
pub struct BayesScore {
    metric: Arc<dyn IMetric>,
    database: Vec<Arc<Item>>,
    cache: Mutex<Option<Arc<BayesReference>>>,
}

impl BayesScore {
    pub fn new(metric: Arc<dyn IMetric>, database: Vec<Arc<Item>>) -> Self {
        Self {
            metric,
            database,
            cache: Mutex::new(None),
        }
    }

    fn reference(&self, query: &Item, ty: DescriptorType) -> RefindResult<Arc<BayesReference>> {
        let labeled = query.labeled_count();
        let mut cache = self.cache.lock().map_err(|e| RefindError::LockPoisoned {
            resource: format!("bayes score reference: {e}"),
        })?;
        if let Some(current) = cache.as_ref().filter(|c| c.labeled == labeled) {
            return Ok(Arc::clone(current));
        }

        let mut shifted = query.clone();
        shift_query(&mut shifted, ty)?;

        let mut farthest: Option<(f64, &Arc<Item>)> = None;
        for item in &self.database {
            let d = self.metric.distance(item, &shifted, ty)?;
            if farthest.map_or(true, |(best, _)| d > best) {
                farthest = Some((d, item));
            }
        }
        let reference = Arc::new(BayesReference {
            labeled,
            farthest: farthest.map(|(_, item)| Arc::clone(item)),
            shifted,
        });
        debug!(
            labeled,
            farthest = reference.farthest.as_ref().map(|f| f.id()),
            "recomputed bayes reference"
        );
        *cache = Some(Arc::clone(&reference));
        Ok(reference)
    }
}

impl IScore for BayesScore {
    fn score(&self, query: &Item, candidate: &Item, ty: DescriptorType) -> RefindResult<f64> {
        let reference = self.reference(query, ty)?;
        let Some(farthest) = reference.farthest.as_ref() else {
            return Ok(0.0);
        };
        let to_shifted = self.metric.distance(&reference.shifted, candidate, ty)?;
        let to_farthest = self.metric.distance(farthest, candidate, ty)?;
        if to_farthest == 0.0 {
            return Ok(0.0);
        }
        let e = std::f64::consts::E;
        Ok((1.0 - e.powf(1.0 - to_shifted / to_farthest)) / (1.0 - e))
    }
}
