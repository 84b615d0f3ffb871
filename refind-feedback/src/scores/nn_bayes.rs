use refind_core::{DescriptorType, IScore, Item, RefindResult};

use super::{BayesScore, NnScore};

/// Blend of the Bayes and NN scores. With `n` negatives out of `k` labels
/// the Bayes term weighs `(n/k) / (1 + n/k)` and the NN term
/// `1 / (1 + n/k)`. Without labels this is the NN score.
pub struct NnBayesScore {
    bayes: BayesScore,
    nn: NnScore,
}

impl NnBayesScore {
    pub fn new(bayes: BayesScore, nn: NnScore) -> Self {
        Self { bayes, nn }
    }
}

impl IScore for NnBayesScore {
    fn score(&self, query: &Item, candidate: &Item, ty: DescriptorType) -> RefindResult<f64> {
        let nn = self.nn.score(query, candidate, ty)?;
        let k = query.labeled_count();
        if k == 0 {
            return Ok(nn);
        }
        let bayes = self.bayes.score(query, candidate, ty)?;
        let ratio = query.negatives().len() as f64 / k as f64;
        Ok((ratio / (1.0 + ratio)) * bayes + (1.0 / (1.0 + ratio)) * nn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refind_core::Descriptor;
    use refind_metric::Euclidean;
    use std::sync::Arc;

    fn item(id: &str, v: &[f64]) -> Arc<Item> {
        Arc::new(
            Item::with_descriptors(id, [Descriptor::new(DescriptorType::Cedd, v.to_vec(), 1.0)])
                .unwrap(),
        )
    }

    #[test]
    fn blends_by_negative_ratio() {
        let db = vec![item("a", &[0.0]), item("b", &[4.0]), item("c", &[10.0])];
        let metric = Arc::new(Euclidean);
        let blended = NnBayesScore::new(
            BayesScore::new(metric.clone(), db.clone()),
            NnScore::new(metric.clone()),
        );
        let bayes = BayesScore::new(metric.clone(), db.clone());
        let nn = NnScore::new(metric);

        let mut query = item("q", &[0.0]).query_copy();
        query.record_feedback(&[Arc::clone(&db[0])], &[Arc::clone(&db[2])]);
        let candidate = &db[1];

        let expected = (0.5 / 1.5) * bayes.score(&query, candidate, DescriptorType::Cedd).unwrap()
            + (1.0 / 1.5) * nn.score(&query, candidate, DescriptorType::Cedd).unwrap();
        let got = blended.score(&query, candidate, DescriptorType::Cedd).unwrap();
        assert!((got - expected).abs() < 1e-12);
    }

    #[test]
    fn unlabeled_query_uses_nn_score() {
        let db = vec![item("a", &[0.0])];
        let metric = Arc::new(Euclidean);
        let blended = NnBayesScore::new(BayesScore::new(metric.clone(), db.clone()), NnScore::new(metric));
        let query = item("q", &[0.0]).query_copy();
        assert_eq!(blended.score(&query, &db[0], DescriptorType::Cedd).unwrap(), 0.0);
    }
}
