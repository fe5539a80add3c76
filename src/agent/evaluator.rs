use crate::tetrify::prelude::*;

/// A measurable defect of a board state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    FalsePositives,
    FalseNegatives,
    BuriedFalseNegatives,
    Wells,
    Towers,
}

impl Feature {
    /// Measures this feature on a board.
    pub fn measure(&self, board: &Board) -> i64 {
        let count = match self {
            Feature::FalsePositives => board.count_false_positives(),
            Feature::FalseNegatives => board.count_false_negatives(),
            Feature::BuriedFalseNegatives => board.count_buried_false_negatives(),
            Feature::Wells => board.count_wells(),
            Feature::Towers => board.count_towers(),
        };
        count as i64
    }
}

/// The tetrify evaluator for intermediate states: a weighted feature sum
/// where every weight is -1, so boards with fewer defects score higher.
///
/// The weight vector is deliberately a data path of its own; tuning it is
/// the obvious place to start if learning is ever bolted on.
#[derive(Clone, Debug)]
pub struct Evaluator {
    features: Vec<Feature>,
    weights: Vec<i64>,
}

impl Evaluator {
    /// The standard evaluator. `reduce_is` opts into the well and tower
    /// penalties that steer the search away from I-dependent artifacts.
    pub fn new(reduce_is: bool) -> Evaluator {
        let mut features = vec![
            Feature::FalsePositives,
            Feature::FalseNegatives,
            Feature::BuriedFalseNegatives,
        ];
        if reduce_is {
            features.extend([Feature::Wells, Feature::Towers]);
        }
        let weights = vec![-1; features.len()];
        Evaluator { features, weights }
    }

    /// The summed goodness of a board under this evaluator.
    pub fn state_value(&self, board: &Board) -> i64 {
        self.features
            .iter()
            .zip(self.weights.iter())
            .map(|(feature, weight)| weight * feature.measure(board))
            .sum()
    }
}
