//! Bagged CART ensemble for binary playoff classification.
//!
//! Trees are grown to purity on bootstrap samples, choosing among a random
//! subset of `sqrt(n_features)` features at each split. Every random draw comes
//! from one seeded generator, so a given training set always yields the same
//! forest.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{
    analytics::filters::ascending_nan_last, errors::AppError, models::team::FeatureVector,
};

pub trait Classifier {
    fn fit(&mut self, features: &[FeatureVector], labels: &[bool]) -> Result<(), AppError>;

    // P(label = true) per row
    fn predict_probability(&self, features: &[FeatureVector]) -> Vec<f64>;
}

#[derive(Debug, Clone, Copy)]
pub struct ForestConfig {
    pub n_estimators: usize,
    pub seed: u64,
    pub min_samples_split: usize,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            seed: 42,
            min_samples_split: 2,
        }
    }
}

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        probability: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn predict(&self, x: &FeatureVector) -> f64 {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { probability } => return *probability,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if x[*feature] <= *threshold { left } else { right };
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct RandomForest {
    config: ForestConfig,
    trees: Vec<Node>,
}

impl Default for RandomForest {
    fn default() -> Self {
        Self::new(ForestConfig::default())
    }
}

impl RandomForest {
    pub fn new(config: ForestConfig) -> Self {
        Self {
            config,
            trees: Vec::new(),
        }
    }

    pub fn is_fitted(&self) -> bool {
        !self.trees.is_empty()
    }
}

impl Classifier for RandomForest {
    fn fit(&mut self, features: &[FeatureVector], labels: &[bool]) -> Result<(), AppError> {
        if features.is_empty() {
            return Err(AppError::NoTrainingData);
        }
        if features.len() != labels.len() {
            tracing::error!(
                "Feature/label length mismatch: {} vs {}",
                features.len(),
                labels.len()
            );
            return Err(AppError::InternalError);
        }

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let n = features.len();
        let builder = TreeBuilder {
            features,
            labels,
            min_samples_split: self.config.min_samples_split.max(2),
        };

        self.trees = (0..self.config.n_estimators.max(1))
            .map(|_| {
                let sample: Vec<usize> = (0..n).map(|_| rng.random_range(0..n)).collect();
                builder.grow(sample, &mut rng)
            })
            .collect();

        Ok(())
    }

    fn predict_probability(&self, features: &[FeatureVector]) -> Vec<f64> {
        if !self.is_fitted() {
            return vec![0.0; features.len()];
        }

        let n_trees = self.trees.len() as f64;
        features
            .iter()
            .map(|x| {
                let sum: f64 = self.trees.iter().map(|tree| tree.predict(x)).sum();
                (sum / n_trees).clamp(0.0, 1.0)
            })
            .collect()
    }
}

struct TreeBuilder<'a> {
    features: &'a [FeatureVector],
    labels: &'a [bool],
    min_samples_split: usize,
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

impl TreeBuilder<'_> {
    fn grow(&self, sample: Vec<usize>, rng: &mut StdRng) -> Node {
        if sample.is_empty() {
            return Node::Leaf { probability: 0.0 };
        }

        let positives = sample.iter().filter(|&&i| self.labels[i]).count();
        let probability = positives as f64 / sample.len() as f64;

        if sample.len() < self.min_samples_split || positives == 0 || positives == sample.len() {
            return Node::Leaf { probability };
        }

        let Some(split) = self.best_split(&sample, rng) else {
            return Node::Leaf { probability };
        };

        let (left, right): (Vec<usize>, Vec<usize>) = sample
            .into_iter()
            .partition(|&i| self.features[i][split.feature] <= split.threshold);

        Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left: Box::new(self.grow(left, rng)),
            right: Box::new(self.grow(right, rng)),
        }
    }

    // Falls back to the undrawn features when no drawn one separates the sample
    fn best_split(&self, sample: &[usize], rng: &mut StdRng) -> Option<BestSplit> {
        let n_features = self.features[0].len();
        let max_features = ((n_features as f64).sqrt() as usize).max(1);

        let mut order: Vec<usize> = (0..n_features).collect();
        order.shuffle(rng);

        let mut best: Option<BestSplit> = None;
        for (visited, &feature) in order.iter().enumerate() {
            if visited >= max_features && best.is_some() {
                break;
            }
            if let Some(candidate) = self.best_split_on(sample, feature) {
                if best
                    .as_ref()
                    .is_none_or(|b| candidate.impurity < b.impurity)
                {
                    best = Some(candidate);
                }
            }
        }
        best
    }

    fn best_split_on(&self, sample: &[usize], feature: usize) -> Option<BestSplit> {
        let mut values: Vec<(f64, bool)> = sample
            .iter()
            .map(|&i| (self.features[i][feature], self.labels[i]))
            .collect();
        values.sort_by(|a, b| ascending_nan_last(a.0, b.0));

        let total = values.len() as f64;
        let total_pos = values.iter().filter(|(_, y)| *y).count() as f64;

        let mut left_pos = 0.0;
        let mut best: Option<BestSplit> = None;

        for i in 0..values.len() - 1 {
            if values[i].1 {
                left_pos += 1.0;
            }
            // Only split between distinct values.
            if values[i].0 >= values[i + 1].0 {
                continue;
            }

            let left_n = (i + 1) as f64;
            let right_n = total - left_n;
            let right_pos = total_pos - left_pos;

            let impurity =
                (left_n * gini(left_pos, left_n) + right_n * gini(right_pos, right_n)) / total;

            if best.as_ref().is_none_or(|b| impurity < b.impurity) {
                let (low, high) = (values[i].0, values[i + 1].0);
                let mid = low + (high - low) / 2.0;
                best = Some(BestSplit {
                    feature,
                    threshold: if mid < high { mid } else { low },
                    impurity,
                });
            }
        }
        best
    }
}

fn gini(positives: f64, n: f64) -> f64 {
    if n == 0.0 {
        return 0.0;
    }
    let p = positives / n;
    2.0 * p * (1.0 - p)
}
