//! Operation synthesis.
//!
//! Turns a task descriptor plus the sampled id pool into an ordered sequence
//! of abstract operations. The synthesizer owns its random source: a run
//! constructs one `Synthesizer` with a fixed seed and feeds every task through
//! it, so identical seed, pool, task order and counts reproduce the identical
//! operation sequence. Multiple independent runs can coexist in one process.

use crate::core::{AbstractOperation, OpType};
use crate::workload::sampler::IdPool;
use log::warn;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Prefix put on minted ADD_NODE ids so they cannot collide with
/// dataset-derived identifiers.
pub const MINTED_ID_PREFIX: &str = "new_";

/// Task name prefixes understood by `synthesize_for_task`. Both `_latency`
/// and `_throughput` variants resolve through the same prefix.
const TASK_PREFIXES: &[(&str, OpType)] = &[
    ("read_nbrs", OpType::ReadNbrs),
    ("add_nodes", OpType::AddNode),
    ("delete_nodes", OpType::DelNode),
    ("add_edges", OpType::AddEdge),
    ("delete_edges", OpType::DelEdge),
];

/// Ratio-spec keys in resolution order. Longer, more specific keys come
/// first so the substring fallback is a deterministic total rule.
const RATIO_KEYS: &[(&str, OpType)] = &[
    ("read_nbrs", OpType::ReadNbrs),
    ("insert_node", OpType::AddNode),
    ("delete_node", OpType::DelNode),
    ("insert_edge", OpType::AddEdge),
    ("delete_edge", OpType::DelEdge),
    ("add_node", OpType::AddNode),
    ("add_edge", OpType::AddEdge),
    ("read", OpType::ReadNbrs),
];

/// Resolves one user-facing ratio key to an operation type: exact
/// case-insensitive match first, then substring containment, first match
/// wins. Returns `None` for unrecognized keys.
pub fn resolve_ratio_key(key: &str) -> Option<OpType> {
    let norm = key.to_lowercase();
    if let Some((_, op)) = RATIO_KEYS.iter().find(|(k, _)| *k == norm) {
        return Some(*op);
    }
    RATIO_KEYS
        .iter()
        .find(|(k, _)| norm.contains(k))
        .map(|(_, op)| *op)
}

/// Deterministic workload synthesizer with an owned, explicitly seeded RNG.
pub struct Synthesizer {
    rng: StdRng,
}

impl Synthesizer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn draw_id(&mut self, pool: &IdPool) -> String {
        let ids = pool.ids();
        ids[self.rng.gen_range(0..ids.len())].clone()
    }

    fn mint_id(&mut self) -> String {
        // Wide range keeps collisions with dataset ids negligible in practice.
        format!(
            "{}{}",
            MINTED_ID_PREFIX,
            self.rng.gen_range(1_000_000u64..=99_999_999)
        )
    }

    fn create_op(&mut self, op_type: OpType, pool: &IdPool) -> AbstractOperation {
        match op_type {
            OpType::ReadNbrs | OpType::DelNode => {
                let id = self.draw_id(pool);
                AbstractOperation::node(op_type, id)
            }
            OpType::AddNode => {
                let id = self.mint_id();
                AbstractOperation::node(op_type, id)
            }
            OpType::AddEdge | OpType::DelEdge => {
                // Endpoints are drawn independently; self-loops are allowed.
                let src = self.draw_id(pool);
                let dst = self.draw_id(pool);
                AbstractOperation::edge(op_type, src, dst)
            }
        }
    }

    /// Produces `count` operations of a single type.
    pub fn synthesize_single(
        &mut self,
        op_type: OpType,
        pool: &IdPool,
        count: usize,
    ) -> Vec<AbstractOperation> {
        (0..count).map(|_| self.create_op(op_type, pool)).collect()
    }

    /// Produces `count` operations drawn i.i.d. from a weighted mix of
    /// categories. Unrecognized ratio keys are dropped; if nothing resolves
    /// (or the resolved weights cannot form a distribution) the whole ratio spec
    /// degrades to single-type READ_NBRS generation.
    pub fn synthesize_mixed(
        &mut self,
        pool: &IdPool,
        count: usize,
        ratios: &HashMap<String, f64>,
    ) -> Vec<AbstractOperation> {
        let mut population = Vec::new();
        let mut weights = Vec::new();

        // Fixed iteration order over the ratio keys keeps draws reproducible.
        let mut keys: Vec<&String> = ratios.keys().collect();
        keys.sort();

        for key in keys {
            match resolve_ratio_key(key) {
                Some(op) => {
                    population.push(op);
                    weights.push(ratios[key]);
                }
                None => warn!("Dropping unrecognized ratio key '{}'", key),
            }
        }

        let dist = match WeightedIndex::new(&weights) {
            Ok(dist) if !population.is_empty() => dist,
            _ => {
                warn!("Ratio spec resolved empty, falling back to READ_NBRS workload");
                return self.synthesize_single(OpType::ReadNbrs, pool, count);
            }
        };

        (0..count)
            .map(|_| {
                let op_type = population[dist.sample(&mut self.rng)];
                self.create_op(op_type, pool)
            })
            .collect()
    }

    /// Main entry point: parses the task name to decide the generation
    /// strategy. Names containing `mixed` route to the weighted mix
    /// (defaulting to 80% reads / 20% edge inserts when no ratios are
    /// configured); otherwise the task prefix selects a single type.
    pub fn synthesize_for_task(
        &mut self,
        task_name: &str,
        pool: &IdPool,
        count: usize,
        ratios: Option<&HashMap<String, f64>>,
    ) -> Vec<AbstractOperation> {
        if task_name.contains("mixed") {
            let default_ratios = || {
                HashMap::from([
                    ("read_nbrs".to_string(), 0.8),
                    ("add_edges".to_string(), 0.2),
                ])
            };
            return match ratios {
                Some(r) if !r.is_empty() => self.synthesize_mixed(pool, count, r),
                _ => self.synthesize_mixed(pool, count, &default_ratios()),
            };
        }

        if let Some((_, op)) = TASK_PREFIXES
            .iter()
            .find(|(prefix, _)| task_name.starts_with(prefix))
        {
            return self.synthesize_single(*op, pool, count);
        }

        warn!(
            "Unknown task type '{}', defaulting to READ_NBRS",
            task_name
        );
        self.synthesize_single(OpType::ReadNbrs, pool, count)
    }
}
