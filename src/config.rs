/// Process-wide tuning knobs for [`PolySet`](crate::PolySet) and the sampling
/// engine, bundled into a handle instead of read from globals.
///
/// Per the component design notes: thresholds are read-only after
/// construction and are passed explicitly to constructors rather than
/// threaded through every call as ad hoc arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// `INT` → `HASH` promotion threshold. A set stays `INT`-encoded only
    /// while every member is integer-valued and the cardinality does not
    /// exceed this value.
    pub int_max: usize,
    /// `POP-COUNT`'s strategy switch: strategy A (pick-and-remove) is used
    /// when `pop_strategy_ratio * remainder > k`, otherwise strategy B
    /// (keep survivors) is used.
    pub pop_strategy_ratio: u32,
    /// `RAND-COUNT`'s strategy switch: strategy D (up-sample) is used when
    /// `rand_strategy_ratio * k <= |S|`, otherwise strategy C (down-sample).
    pub rand_strategy_ratio: u32,
}

/// Default `INT` → `HASH` promotion threshold.
pub const DEFAULT_INT_MAX: usize = 512;

/// Default `POP-COUNT` strategy ratio.
pub const DEFAULT_POP_STRATEGY_RATIO: u32 = 5;

/// Default `RAND-COUNT` strategy ratio.
pub const DEFAULT_RAND_STRATEGY_RATIO: u32 = 3;

impl Default for Config {
    fn default() -> Self {
        Self {
            int_max: DEFAULT_INT_MAX,
            pop_strategy_ratio: DEFAULT_POP_STRATEGY_RATIO,
            rand_strategy_ratio: DEFAULT_RAND_STRATEGY_RATIO,
        }
    }
}
