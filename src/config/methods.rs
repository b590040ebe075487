//! Default algorithm choices

use serde::Deserialize;
use std::sync::Arc;

use super::EigenConfig;
use crate::domain::fuzzy_local::{
    FuzzyLocalWeightAlgorithm, FuzzyRowGeometricMean, GoalProgrammingModel,
};
use crate::domain::global::{DistributedSynthesis, GlobalWeightAlgorithm, MultiplicativeSynthesis};
use crate::domain::local::{ArithmeticNormalisation, LocalWeightAlgorithm, RowGeometricMean};
use crate::ports::LinearProgramSolver;

/// Crisp local weight method
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocalMethod {
    #[default]
    Eigenvalue,
    RowGeometricMean,
    ArithmeticNormalisation,
}

impl LocalMethod {
    /// Build the algorithm; the eigenvalue method takes its settings from `eigen`
    pub fn build(&self, eigen: &EigenConfig) -> Box<dyn LocalWeightAlgorithm> {
        match self {
            LocalMethod::Eigenvalue => Box::new(eigen.method()),
            LocalMethod::RowGeometricMean => Box::new(RowGeometricMean),
            LocalMethod::ArithmeticNormalisation => Box::new(ArithmeticNormalisation),
        }
    }
}

/// Crisp global synthesis method
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GlobalMethod {
    #[default]
    Distributed,
    Multiplicative,
}

impl GlobalMethod {
    pub fn build(&self) -> Box<dyn GlobalWeightAlgorithm> {
        match self {
            GlobalMethod::Distributed => Box::new(DistributedSynthesis),
            GlobalMethod::Multiplicative => Box::new(MultiplicativeSynthesis),
        }
    }
}

/// Fuzzy local weight method
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FuzzyLocalMethod {
    #[default]
    FuzzyRowGeometricMean,
    GoalProgramming,
}

impl FuzzyLocalMethod {
    /// Build the algorithm; only goal programming uses `solver`
    pub fn build(&self, solver: Arc<dyn LinearProgramSolver>) -> Box<dyn FuzzyLocalWeightAlgorithm> {
        match self {
            FuzzyLocalMethod::FuzzyRowGeometricMean => Box::new(FuzzyRowGeometricMean),
            FuzzyLocalMethod::GoalProgramming => Box::new(GoalProgrammingModel::new(solver)),
        }
    }
}

/// Algorithm selection
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct MethodsConfig {
    #[serde(default)]
    pub local: LocalMethod,

    #[serde(default)]
    pub global: GlobalMethod,

    #[serde(default)]
    pub fuzzy_local: FuzzyLocalMethod,
}
