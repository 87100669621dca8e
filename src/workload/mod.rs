//! Workload generation: id sampling and deterministic operation synthesis.

pub mod sampler;
pub mod synthesizer;

pub use sampler::{sample_ids, IdPool, DEFAULT_SAMPLE_CAP};
pub use synthesizer::{resolve_ratio_key, Synthesizer, MINTED_ID_PREFIX};
