use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the FFP optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct FFPConfig {
    /// Order in which item types are fed to the placement loop
    pub item_order: ItemOrder,
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for FFPConfig {
    fn default() -> Self {
        Self {
            item_order: ItemOrder::Input,
            prng_seed: Some(0),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

/// Order in which item types are handed to the placement loop.
/// First-fit selection within the free-rectangle list is unaffected.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemOrder {
    /// As listed in the instance
    Input,
    /// Largest cell area first
    DescArea,
    /// Random order, seeded by `prng_seed`
    Shuffled,
}
