//! HierarchyModel - Layered decision hierarchy and weight propagation.
//!
//! Layer 0 holds the goal; every following layer holds a fixed number of
//! elements. Judgments are registered against the parent that makes them,
//! addressed by the layer being compared plus the parent's element index
//! in the layer above:
//!
//! ```text
//! set_comparisons(layer = 2, element = 1, m)  ->  stored on node (1, 1),
//!                                                 m is |layer 2| x |layer 2|
//! ```
//!
//! Nodes live in one flat arena; parent/child relations are index arithmetic.

use std::fmt;

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::Node;
use crate::domain::foundation::{
    Artifact, FuzzyBand, FuzzyWeights, HierarchyError, Interval, IntervalWeights, NodeRef,
};
use crate::domain::fuzzy_global::FuzzyGlobalWeightAlgorithm;
use crate::domain::fuzzy_local::FuzzyLocalWeightAlgorithm;
use crate::domain::global::GlobalWeightAlgorithm;
use crate::domain::local::LocalWeightAlgorithm;

/// A goal plus one or more layers of criteria and alternatives.
///
/// Deserialization rebuilds the arena from `layer_sizes` and checks every
/// node's judgments against it; serialized offsets are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHierarchy")]
pub struct HierarchyModel {
    layer_sizes: Vec<usize>,
    layer_offsets: Vec<usize>,
    nodes: Vec<Node>,
}

impl HierarchyModel {
    /// Creates a hierarchy with a goal layer followed by one layer per size.
    ///
    /// # Errors
    ///
    /// `Configuration` if any layer size is zero.
    pub fn new(layer_sizes: &[usize]) -> Result<Self, HierarchyError> {
        if let Some(position) = layer_sizes.iter().position(|&size| size == 0) {
            return Err(HierarchyError::Configuration {
                layer: position + 1,
            });
        }

        let mut sizes = Vec::with_capacity(layer_sizes.len() + 1);
        sizes.push(1);
        sizes.extend_from_slice(layer_sizes);

        let mut offsets = Vec::with_capacity(sizes.len());
        let mut total = 0;
        for &size in &sizes {
            offsets.push(total);
            total += size;
        }

        Ok(Self {
            layer_sizes: sizes,
            layer_offsets: offsets,
            nodes: vec![Node::new(); total],
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Structure
    // ─────────────────────────────────────────────────────────────────────

    /// Number of layers, including the goal layer.
    pub fn num_layers(&self) -> usize {
        self.layer_sizes.len()
    }

    /// Number of elements in a layer.
    pub fn count_in_layer(&self, layer: usize) -> Result<usize, HierarchyError> {
        self.check_layer(layer)?;
        Ok(self.layer_sizes[layer])
    }

    /// The node at `(layer, element)`.
    pub fn node(&self, layer: usize, element: usize) -> Result<&Node, HierarchyError> {
        let index = self.index_of(layer, element)?;
        Ok(&self.nodes[index])
    }

    /// Labels the node at `(layer, element)`.
    pub fn set_name(
        &mut self,
        layer: usize,
        element: usize,
        name: impl Into<String>,
    ) -> Result<(), HierarchyError> {
        let index = self.index_of(layer, element)?;
        self.nodes[index].set_name(name.into());
        Ok(())
    }

    /// Label of the node at `(layer, element)`, if one was set.
    pub fn name(&self, layer: usize, element: usize) -> Result<Option<&str>, HierarchyError> {
        Ok(self.node(layer, element)?.name())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Judgments
    // ─────────────────────────────────────────────────────────────────────

    /// Registers the crisp judgments of parent `element` (in layer `layer - 1`)
    /// among the elements of `layer`.
    ///
    /// # Errors
    ///
    /// - `LayerOutOfRange` / `ElementOutOfRange` for invalid coordinates
    /// - `DimensionMismatch` if the matrix is not `count(layer)` square
    pub fn set_comparisons(
        &mut self,
        layer: usize,
        element: usize,
        matrix: DMatrix<f64>,
    ) -> Result<(), HierarchyError> {
        let index = self.judging_parent(layer, element)?;
        self.check_judgment_shape("comparison matrix", layer, &matrix)?;
        self.nodes[index].set_comparisons(matrix);
        Ok(())
    }

    /// Registers one band of the fuzzy judgments of parent `element` among
    /// the elements of `layer`.
    ///
    /// # Errors
    ///
    /// Same as [`set_comparisons`](Self::set_comparisons).
    pub fn set_fuzzy_comparisons(
        &mut self,
        layer: usize,
        element: usize,
        band: FuzzyBand,
        matrix: DMatrix<f64>,
    ) -> Result<(), HierarchyError> {
        let index = self.judging_parent(layer, element)?;
        self.check_judgment_shape("fuzzy comparison matrix", layer, &matrix)?;
        self.nodes[index].set_fuzzy_comparisons(band, matrix);
        Ok(())
    }

    /// Crisp judgments registered by parent `element` among `layer`.
    pub fn comparisons(
        &self,
        layer: usize,
        element: usize,
    ) -> Result<Option<&DMatrix<f64>>, HierarchyError> {
        let index = self.judging_parent(layer, element)?;
        Ok(self.nodes[index].comparisons())
    }

    /// One fuzzy band registered by parent `element` among `layer`.
    pub fn fuzzy_comparisons(
        &self,
        layer: usize,
        element: usize,
        band: FuzzyBand,
    ) -> Result<Option<&DMatrix<f64>>, HierarchyError> {
        let index = self.judging_parent(layer, element)?;
        Ok(self.nodes[index].fuzzy_comparisons(band))
    }

    /// Local weights parent `element` assigns to the elements of `layer`.
    pub fn local_weights(
        &self,
        layer: usize,
        element: usize,
    ) -> Result<Option<&DVector<f64>>, HierarchyError> {
        let index = self.judging_parent(layer, element)?;
        Ok(self.nodes[index].local_weights())
    }

    /// Consistency of the judgments parent `element` made among `layer`.
    pub fn consistency_index(
        &self,
        layer: usize,
        element: usize,
    ) -> Result<Option<f64>, HierarchyError> {
        let index = self.judging_parent(layer, element)?;
        Ok(self.nodes[index].consistency_index())
    }

    /// Fuzzy local weights parent `element` assigns to the elements of `layer`.
    pub fn fuzzy_local_weights(
        &self,
        layer: usize,
        element: usize,
    ) -> Result<Option<&FuzzyWeights>, HierarchyError> {
        let index = self.judging_parent(layer, element)?;
        Ok(self.nodes[index].fuzzy_local_weights())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Results
    // ─────────────────────────────────────────────────────────────────────

    pub fn global_weight(&self, layer: usize, element: usize) -> Result<Option<f64>, HierarchyError> {
        Ok(self.node(layer, element)?.global_weight())
    }

    /// Global weights of every element in a layer.
    ///
    /// # Errors
    ///
    /// `MissingData` if a global pass has not reached the layer.
    pub fn layer_global_weights(&self, layer: usize) -> Result<DVector<f64>, HierarchyError> {
        let count = self.count_in_layer(layer)?;
        let mut weights = DVector::zeros(count);
        for element in 0..count {
            weights[element] = self.nodes[self.layer_offsets[layer] + element]
                .global_weight()
                .ok_or_else(|| {
                    HierarchyError::missing(Artifact::GlobalWeight, NodeRef::new(layer, element))
                })?;
        }
        Ok(weights)
    }

    pub fn fuzzy_global_weight(
        &self,
        layer: usize,
        element: usize,
    ) -> Result<Option<Interval>, HierarchyError> {
        Ok(self.node(layer, element)?.fuzzy_global_weight())
    }

    /// Interval global weights of every element in a layer.
    ///
    /// # Errors
    ///
    /// `MissingData` if a fuzzy global pass has not reached the layer.
    pub fn layer_fuzzy_global_weights(
        &self,
        layer: usize,
    ) -> Result<IntervalWeights, HierarchyError> {
        let count = self.count_in_layer(layer)?;
        let intervals = (0..count)
            .map(|element| {
                self.nodes[self.layer_offsets[layer] + element]
                    .fuzzy_global_weight()
                    .ok_or_else(|| {
                        HierarchyError::missing(
                            Artifact::FuzzyGlobalWeight,
                            NodeRef::new(layer, element),
                        )
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(IntervalWeights::from_intervals(&intervals))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Passes
    // ─────────────────────────────────────────────────────────────────────

    /// Derives crisp local weights for every node that has children.
    ///
    /// # Errors
    ///
    /// `MissingData` for the first node without judgments; any algorithm
    /// error, tagged with the node's coordinates. Nodes processed before the
    /// failure keep their new weights.
    pub fn compute_all_local_weights(
        &mut self,
        algorithm: &dyn LocalWeightAlgorithm,
    ) -> Result<(), HierarchyError> {
        for node_ref in self.parent_nodes() {
            let index = self.flat_index(node_ref);
            let local = {
                let matrix = self.nodes[index]
                    .comparisons()
                    .ok_or_else(|| HierarchyError::missing(Artifact::Comparisons, node_ref))?;
                algorithm
                    .derive_local(matrix)
                    .map_err(|err| err.at(node_ref))?
            };
            debug!(
                node = %node_ref,
                consistency = local.consistency,
                "local weights computed"
            );
            self.nodes[index].set_local(local);
        }

        info!(
            method = algorithm.name(),
            layers = self.num_layers(),
            "local weight pass complete"
        );
        Ok(())
    }

    /// Derives fuzzy local weights for every node that has children.
    ///
    /// # Errors
    ///
    /// `MissingData` for the first node without a complete fuzzy triple; any
    /// algorithm error, tagged with the node's coordinates.
    pub fn compute_all_fuzzy_local_weights(
        &mut self,
        algorithm: &dyn FuzzyLocalWeightAlgorithm,
    ) -> Result<(), HierarchyError> {
        for node_ref in self.parent_nodes() {
            let index = self.flat_index(node_ref);
            let triple = self.nodes[index].fuzzy_comparison_triple(node_ref)?;
            let weights = algorithm
                .derive_fuzzy_local(&triple)
                .map_err(|err| err.at(node_ref))?;
            debug!(node = %node_ref, "fuzzy local weights computed");
            self.nodes[index].set_fuzzy_local(weights);
        }

        info!(
            method = algorithm.name(),
            layers = self.num_layers(),
            "fuzzy local weight pass complete"
        );
        Ok(())
    }

    /// Propagates crisp global weights from the goal down to the last layer.
    ///
    /// Every parent's local weights are checked before any node is touched.
    pub fn compute_all_global_weights(
        &mut self,
        algorithm: &dyn GlobalWeightAlgorithm,
    ) -> Result<(), HierarchyError> {
        let local = (0..self.num_layers() - 1)
            .map(|layer| self.local_weight_matrix(layer))
            .collect::<Result<Vec<_>, _>>()?;

        self.nodes[0].set_global_weight(1.0);
        let Some(goal_local) = local.first() else {
            debug!("goal-only hierarchy, global pass has nothing to propagate");
            return Ok(());
        };

        let mut current = goal_local.column(0).into_owned();
        self.assign_global_weights(1, &current);

        for layer in 1..self.num_layers() - 1 {
            let next = algorithm.synthesize_global(&current, &local[layer])?;
            self.check_layer_length("synthesized global weights", layer + 1, next.len())?;
            self.assign_global_weights(layer + 1, &next);
            debug!(layer = layer + 1, "global weights assigned");
            current = next;
        }

        info!(
            method = algorithm.name(),
            layers = self.num_layers(),
            "global weight pass complete"
        );
        Ok(())
    }

    /// Propagates interval global weights from the goal down to the last layer.
    ///
    /// Only the lower and upper bands of the fuzzy local weights propagate.
    pub fn compute_all_fuzzy_global_weights(
        &mut self,
        algorithm: &dyn FuzzyGlobalWeightAlgorithm,
    ) -> Result<(), HierarchyError> {
        let local = (0..self.num_layers() - 1)
            .map(|layer| self.fuzzy_local_weight_matrices(layer))
            .collect::<Result<Vec<_>, _>>()?;

        self.nodes[0].set_fuzzy_global_weight(Interval::point(1.0));
        let Some((goal_lower, goal_upper)) = local.first() else {
            debug!("goal-only hierarchy, fuzzy global pass has nothing to propagate");
            return Ok(());
        };

        let mut current = IntervalWeights::new(
            goal_lower.column(0).into_owned(),
            goal_upper.column(0).into_owned(),
        )?;
        self.assign_fuzzy_global_weights(1, &current);

        for layer in 1..self.num_layers() - 1 {
            let (lower, upper) = &local[layer];
            let next = algorithm.synthesize_fuzzy_global(&current, lower, upper)?;
            self.check_layer_length("synthesized interval weights", layer + 1, next.len())?;
            self.assign_fuzzy_global_weights(layer + 1, &next);
            debug!(layer = layer + 1, "interval global weights assigned");
            current = next;
        }

        info!(
            method = algorithm.name(),
            layers = self.num_layers(),
            "fuzzy global weight pass complete"
        );
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────

    fn check_layer(&self, layer: usize) -> Result<(), HierarchyError> {
        if layer >= self.num_layers() {
            return Err(HierarchyError::LayerOutOfRange {
                layer,
                num_layers: self.num_layers(),
            });
        }
        Ok(())
    }

    fn index_of(&self, layer: usize, element: usize) -> Result<usize, HierarchyError> {
        self.check_layer(layer)?;
        let count = self.layer_sizes[layer];
        if element >= count {
            return Err(HierarchyError::ElementOutOfRange {
                layer,
                element,
                count,
            });
        }
        Ok(self.layer_offsets[layer] + element)
    }

    /// Arena index of the parent `element` in layer `layer - 1`.
    fn judging_parent(&self, layer: usize, element: usize) -> Result<usize, HierarchyError> {
        if layer == 0 {
            return Err(HierarchyError::LayerOutOfRange {
                layer,
                num_layers: self.num_layers(),
            });
        }
        self.check_layer(layer)?;
        self.index_of(layer - 1, element)
    }

    fn check_judgment_shape(
        &self,
        subject: &'static str,
        layer: usize,
        matrix: &DMatrix<f64>,
    ) -> Result<(), HierarchyError> {
        let n = self.layer_sizes[layer];
        if matrix.shape() != (n, n) {
            return Err(HierarchyError::dimension_mismatch(
                subject,
                (n, n),
                matrix.shape(),
            ));
        }
        Ok(())
    }

    fn check_layer_length(
        &self,
        subject: &'static str,
        layer: usize,
        len: usize,
    ) -> Result<(), HierarchyError> {
        let count = self.layer_sizes[layer];
        if len != count {
            return Err(HierarchyError::dimension_mismatch(
                subject,
                (count, 1),
                (len, 1),
            ));
        }
        Ok(())
    }

    fn flat_index(&self, node_ref: NodeRef) -> usize {
        self.layer_offsets[node_ref.layer] + node_ref.element
    }

    /// Coordinates of every node that has children, goal first.
    fn parent_nodes(&self) -> Vec<NodeRef> {
        (0..self.num_layers() - 1)
            .flat_map(|layer| {
                (0..self.layer_sizes[layer]).map(move |element| NodeRef::new(layer, element))
            })
            .collect()
    }

    /// Columns are the local weight vectors of `layer`'s nodes.
    fn local_weight_matrix(&self, layer: usize) -> Result<DMatrix<f64>, HierarchyError> {
        let rows = self.layer_sizes[layer + 1];
        let cols = self.layer_sizes[layer];
        let mut matrix = DMatrix::zeros(rows, cols);

        for element in 0..cols {
            let node_ref = NodeRef::new(layer, element);
            let weights = self.nodes[self.flat_index(node_ref)]
                .local_weights()
                .ok_or_else(|| HierarchyError::missing(Artifact::LocalWeights, node_ref))?;
            if weights.len() != rows {
                return Err(HierarchyError::dimension_mismatch(
                    "local weights",
                    (rows, 1),
                    (weights.len(), 1),
                )
                .at(node_ref));
            }
            matrix.set_column(element, weights);
        }
        Ok(matrix)
    }

    /// Lower and upper band matrices of `layer`'s fuzzy local weights.
    fn fuzzy_local_weight_matrices(
        &self,
        layer: usize,
    ) -> Result<(DMatrix<f64>, DMatrix<f64>), HierarchyError> {
        let rows = self.layer_sizes[layer + 1];
        let cols = self.layer_sizes[layer];
        let mut lower = DMatrix::zeros(rows, cols);
        let mut upper = DMatrix::zeros(rows, cols);

        for element in 0..cols {
            let node_ref = NodeRef::new(layer, element);
            let weights = self.nodes[self.flat_index(node_ref)]
                .fuzzy_local_weights()
                .ok_or_else(|| HierarchyError::missing(Artifact::FuzzyLocalWeights, node_ref))?;
            for band in [FuzzyBand::Lower, FuzzyBand::Upper] {
                if weights.band(band).len() != rows {
                    return Err(HierarchyError::dimension_mismatch(
                        "fuzzy local weights",
                        (rows, 1),
                        (weights.band(band).len(), 1),
                    )
                    .at(node_ref));
                }
            }
            lower.set_column(element, &weights.lower);
            upper.set_column(element, &weights.upper);
        }
        Ok((lower, upper))
    }

    fn assign_global_weights(&mut self, layer: usize, weights: &DVector<f64>) {
        let offset = self.layer_offsets[layer];
        for (element, &weight) in weights.iter().enumerate() {
            self.nodes[offset + element].set_global_weight(weight);
        }
    }

    fn assign_fuzzy_global_weights(&mut self, layer: usize, weights: &IntervalWeights) {
        let offset = self.layer_offsets[layer];
        for (element, interval) in weights.iter().enumerate() {
            self.nodes[offset + element].set_fuzzy_global_weight(interval);
        }
    }
}

/// Serialized form of a hierarchy before its arena is validated.
#[derive(Deserialize)]
struct RawHierarchy {
    layer_sizes: Vec<usize>,
    nodes: Vec<Node>,
}

impl TryFrom<RawHierarchy> for HierarchyModel {
    type Error = HierarchyError;

    fn try_from(raw: RawHierarchy) -> Result<Self, Self::Error> {
        let goal_layer = raw.layer_sizes.first().copied().unwrap_or(0);
        if goal_layer != 1 {
            return Err(HierarchyError::dimension_mismatch(
                "goal layer",
                (1, 1),
                (goal_layer, 1),
            ));
        }

        let mut model = Self::new(&raw.layer_sizes[1..])?;
        if raw.nodes.len() != model.nodes.len() {
            return Err(HierarchyError::dimension_mismatch(
                "hierarchy nodes",
                (model.nodes.len(), 1),
                (raw.nodes.len(), 1),
            ));
        }

        let last = model.num_layers() - 1;
        for layer in 0..model.num_layers() {
            for element in 0..model.layer_sizes[layer] {
                let node_ref = NodeRef::new(layer, element);
                let node = &raw.nodes[model.flat_index(node_ref)];
                let fuzzy = FuzzyBand::ALL
                    .into_iter()
                    .filter_map(|band| node.fuzzy_comparisons(band));
                let judgments = node.comparisons().into_iter().chain(fuzzy);

                for matrix in judgments {
                    if layer == last {
                        return Err(HierarchyError::dimension_mismatch(
                            "comparison matrix",
                            (0, 0),
                            matrix.shape(),
                        )
                        .at(node_ref));
                    }
                    model
                        .check_judgment_shape("comparison matrix", layer + 1, matrix)
                        .map_err(|err| err.at(node_ref))?;
                }
            }
        }

        model.nodes = raw.nodes;
        Ok(model)
    }
}

impl fmt::Display for HierarchyModel {
    /// One line per layer, each element rendered as `{layer_element}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (layer, &count) in self.layer_sizes.iter().enumerate() {
            for element in 0..count {
                match self.nodes[self.layer_offsets[layer] + element].name() {
                    Some(name) => write!(f, "{{{}_{}:{}}} ", layer, element, name)?,
                    None => write!(f, "{{{}_{}}} ", layer, element)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::global::{DistributedSynthesis, MultiplicativeSynthesis};
    use crate::domain::local::{EigenvalueMethod, RowGeometricMean};

    fn pair(a: f64) -> DMatrix<f64> {
        DMatrix::from_row_slice(2, 2, &[1.0, a, 1.0 / a, 1.0])
    }

    /// Goal -> 2 criteria -> 2 alternatives, all judgments set.
    fn three_level() -> HierarchyModel {
        let mut model = HierarchyModel::new(&[2, 2]).unwrap();
        model.set_comparisons(1, 0, pair(3.0)).unwrap();
        model.set_comparisons(2, 0, pair(1.0)).unwrap();
        model.set_comparisons(2, 1, pair(4.0)).unwrap();
        model
    }

    // ─────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn new_prepends_goal_layer() {
        let model = HierarchyModel::new(&[3, 4]).unwrap();

        assert_eq!(model.num_layers(), 3);
        assert_eq!(model.count_in_layer(0).unwrap(), 1);
        assert_eq!(model.count_in_layer(1).unwrap(), 3);
        assert_eq!(model.count_in_layer(2).unwrap(), 4);
    }

    #[test]
    fn new_rejects_empty_layer() {
        let err = HierarchyModel::new(&[2, 0, 3]).unwrap_err();
        assert_eq!(err, HierarchyError::Configuration { layer: 2 });
    }

    #[test]
    fn count_in_layer_rejects_unknown_layer() {
        let model = HierarchyModel::new(&[2]).unwrap();
        assert!(matches!(
            model.count_in_layer(2),
            Err(HierarchyError::LayerOutOfRange { layer: 2, num_layers: 2 })
        ));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Judgments
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn set_comparisons_round_trips_through_getter() {
        let mut model = HierarchyModel::new(&[2]).unwrap();
        model.set_comparisons(1, 0, pair(3.0)).unwrap();

        assert_eq!(model.comparisons(1, 0).unwrap(), Some(&pair(3.0)));
        assert_eq!(model.node(0, 0).unwrap().comparisons(), Some(&pair(3.0)));
    }

    #[test]
    fn set_comparisons_rejects_wrong_size() {
        let mut model = HierarchyModel::new(&[2]).unwrap();
        let err = model
            .set_comparisons(1, 0, DMatrix::from_element(3, 3, 1.0))
            .unwrap_err();

        assert!(matches!(err, HierarchyError::DimensionMismatch { .. }));
        assert_eq!(model.comparisons(1, 0).unwrap(), None);
    }

    #[test]
    fn set_comparisons_rejects_non_square() {
        let mut model = HierarchyModel::new(&[2]).unwrap();
        let err = model
            .set_comparisons(1, 0, DMatrix::from_element(2, 3, 1.0))
            .unwrap_err();
        assert!(matches!(err, HierarchyError::DimensionMismatch { .. }));
    }

    #[test]
    fn set_comparisons_rejects_bad_coordinates() {
        let mut model = HierarchyModel::new(&[2, 2]).unwrap();

        assert!(matches!(
            model.set_comparisons(0, 0, pair(2.0)),
            Err(HierarchyError::LayerOutOfRange { .. })
        ));
        assert!(matches!(
            model.set_comparisons(3, 0, pair(2.0)),
            Err(HierarchyError::LayerOutOfRange { .. })
        ));
        assert!(matches!(
            model.set_comparisons(2, 2, pair(2.0)),
            Err(HierarchyError::ElementOutOfRange {
                layer: 1,
                element: 2,
                count: 2
            })
        ));
    }

    #[test]
    fn fuzzy_bands_are_set_independently() {
        let mut model = HierarchyModel::new(&[2]).unwrap();
        model
            .set_fuzzy_comparisons(1, 0, FuzzyBand::Modal, pair(2.0))
            .unwrap();

        assert_eq!(
            model.fuzzy_comparisons(1, 0, FuzzyBand::Modal).unwrap(),
            Some(&pair(2.0))
        );
        assert_eq!(model.fuzzy_comparisons(1, 0, FuzzyBand::Lower).unwrap(), None);
    }

    #[test]
    fn names_are_attached_to_nodes() {
        let mut model = HierarchyModel::new(&[2]).unwrap();
        model.set_name(1, 1, "Cost").unwrap();

        assert_eq!(model.name(1, 1).unwrap(), Some("Cost"));
        assert_eq!(model.name(1, 0).unwrap(), None);
        assert!(model.set_name(1, 2, "Risk").is_err());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Local pass
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn local_pass_on_two_element_layer() {
        let mut model = HierarchyModel::new(&[2]).unwrap();
        model.set_comparisons(1, 0, pair(3.0)).unwrap();

        model
            .compute_all_local_weights(&EigenvalueMethod::default())
            .unwrap();

        let weights = model.local_weights(1, 0).unwrap().unwrap();
        assert!((weights[0] - 0.75).abs() < 1e-9);
        assert!((weights[1] - 0.25).abs() < 1e-9);
        assert!(model.consistency_index(1, 0).unwrap().unwrap().abs() < 1e-9);
    }

    #[test]
    fn local_pass_reports_missing_judgments() {
        let mut model = HierarchyModel::new(&[2, 2]).unwrap();
        model.set_comparisons(1, 0, pair(3.0)).unwrap();
        model.set_comparisons(2, 0, pair(2.0)).unwrap();

        let err = model
            .compute_all_local_weights(&RowGeometricMean)
            .unwrap_err();

        assert_eq!(
            err,
            HierarchyError::missing(Artifact::Comparisons, NodeRef::new(1, 1))
        );
        // Nodes processed before the failure keep their results.
        assert!(model.local_weights(2, 0).unwrap().is_some());
    }

    #[test]
    fn local_pass_on_goal_only_hierarchy_is_a_no_op() {
        let mut model = HierarchyModel::new(&[]).unwrap();
        assert!(model.compute_all_local_weights(&RowGeometricMean).is_ok());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Global pass
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn goal_only_global_pass_sets_goal_to_one() {
        let mut model = HierarchyModel::new(&[]).unwrap();
        model.compute_all_global_weights(&DistributedSynthesis).unwrap();

        assert_eq!(model.num_layers(), 1);
        assert_eq!(model.global_weight(0, 0).unwrap(), Some(1.0));
    }

    #[test]
    fn first_layer_copies_goal_local_weights() {
        let mut model = HierarchyModel::new(&[2]).unwrap();
        model.set_comparisons(1, 0, pair(3.0)).unwrap();
        model.compute_all_local_weights(&RowGeometricMean).unwrap();
        model.compute_all_global_weights(&DistributedSynthesis).unwrap();

        let local = model.local_weights(1, 0).unwrap().unwrap().clone();
        assert_eq!(model.layer_global_weights(1).unwrap(), local);
        assert_eq!(model.global_weight(0, 0).unwrap(), Some(1.0));
    }

    #[test]
    fn distributed_pass_through_three_levels() {
        let mut model = three_level();
        model.compute_all_local_weights(&RowGeometricMean).unwrap();
        model.compute_all_global_weights(&DistributedSynthesis).unwrap();

        // Criteria (0.75, 0.25); alternatives under each: (0.5, 0.5) and (0.8, 0.2).
        let global = model.layer_global_weights(2).unwrap();
        assert!((global[0] - (0.75 * 0.5 + 0.25 * 0.8)).abs() < 1e-9);
        assert!((global[1] - (0.75 * 0.5 + 0.25 * 0.2)).abs() < 1e-9);
        assert!((global.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn multiplicative_pass_sums_to_one() {
        let mut model = three_level();
        model.compute_all_local_weights(&RowGeometricMean).unwrap();
        model
            .compute_all_global_weights(&MultiplicativeSynthesis)
            .unwrap();

        let global = model.layer_global_weights(2).unwrap();
        assert!((global.sum() - 1.0).abs() < 1e-9);
        assert!(global[0] > global[1]);
    }

    #[test]
    fn global_pass_checks_every_parent_before_writing() {
        let mut partial = HierarchyModel::new(&[2, 2]).unwrap();
        partial.set_comparisons(1, 0, pair(3.0)).unwrap();
        partial.compute_all_local_weights(&RowGeometricMean).unwrap_err();

        let err = partial
            .compute_all_global_weights(&DistributedSynthesis)
            .unwrap_err();

        assert_eq!(
            err,
            HierarchyError::missing(Artifact::LocalWeights, NodeRef::new(1, 0))
        );
        assert_eq!(partial.global_weight(0, 0).unwrap(), None);
        assert_eq!(partial.global_weight(1, 0).unwrap(), None);
    }

    #[test]
    fn layer_global_weights_requires_a_pass() {
        let model = HierarchyModel::new(&[2]).unwrap();
        assert!(matches!(
            model.layer_global_weights(1),
            Err(HierarchyError::MissingData {
                artifact: Artifact::GlobalWeight,
                ..
            })
        ));
        assert_eq!(model.global_weight(1, 0).unwrap(), None);
        assert!(model.global_weight(1, 5).is_err());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Serialization
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn serde_round_trip_preserves_results() {
        let mut model = three_level();
        model.compute_all_local_weights(&RowGeometricMean).unwrap();
        model.compute_all_global_weights(&DistributedSynthesis).unwrap();

        let json = serde_json::to_string(&model).unwrap();
        let restored: HierarchyModel = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.num_layers(), model.num_layers());
        assert!(restored.comparisons(2, 1).unwrap().is_some());
        let expected = model.layer_global_weights(2).unwrap();
        let actual = restored.layer_global_weights(2).unwrap();
        assert!((actual - expected).amax() < 1e-12);
    }

    #[test]
    fn deserialize_rejects_layer_sizes_disagreeing_with_nodes() {
        let mut value = serde_json::to_value(HierarchyModel::new(&[1]).unwrap()).unwrap();
        value["layer_sizes"] = serde_json::json!([1, 5]);

        let result = serde_json::from_value::<HierarchyModel>(value);
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_ignores_tampered_offsets() {
        let mut value = serde_json::to_value(HierarchyModel::new(&[2, 3]).unwrap()).unwrap();
        value["layer_offsets"] = serde_json::json!([0, 0, 0]);

        let model: HierarchyModel = serde_json::from_value(value).unwrap();
        assert_eq!(model.global_weight(2, 2).unwrap(), None);
        assert!(model.global_weight(1, 3).is_err());
    }

    #[test]
    fn deserialize_rejects_goal_layer_other_than_one() {
        let mut value = serde_json::to_value(HierarchyModel::new(&[]).unwrap()).unwrap();
        value["layer_sizes"] = serde_json::json!([]);
        value["nodes"] = serde_json::json!([]);

        assert!(serde_json::from_value::<HierarchyModel>(value).is_err());
    }

    #[test]
    fn deserialize_rejects_judgments_of_the_wrong_size() {
        let mut small = HierarchyModel::new(&[2]).unwrap();
        small.set_comparisons(1, 0, pair(3.0)).unwrap();
        let small = serde_json::to_value(&small).unwrap();

        let mut value = serde_json::to_value(HierarchyModel::new(&[3]).unwrap()).unwrap();
        value["nodes"][0] = small["nodes"][0].clone();

        let err = serde_json::from_value::<HierarchyModel>(value).unwrap_err();
        assert!(err.to_string().contains("comparison matrix"));
    }

    #[test]
    fn deserialize_rejects_judgments_on_terminal_nodes() {
        let mut parent = HierarchyModel::new(&[2]).unwrap();
        parent.set_comparisons(1, 0, pair(2.0)).unwrap();
        let parent = serde_json::to_value(&parent).unwrap();

        let mut value = serde_json::to_value(HierarchyModel::new(&[2]).unwrap()).unwrap();
        value["nodes"][1] = parent["nodes"][0].clone();

        assert!(serde_json::from_value::<HierarchyModel>(value).is_err());
    }

    #[test]
    fn display_renders_one_line_per_layer() {
        let mut model = HierarchyModel::new(&[2, 1]).unwrap();
        model.set_name(0, 0, "Goal").unwrap();

        assert_eq!(format!("{}", model), "{0_0:Goal} \n{1_0} {1_1} \n{2_0} \n");
    }
}
