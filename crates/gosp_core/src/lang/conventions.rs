//! Well-known identifiers that are not special forms but still have syntactic meaning.

/// Channel send operation; a `select` clause headed by it takes exactly two arguments (channel, value).
pub const CHAN_SEND: &str = "chan-send";

/// Channel receive operation; a `select` clause headed by it takes exactly one argument (channel).
pub const CHAN_RECV: &str = "chan-recv";

/// Marker for the fallback clause of a `select`.
pub const SELECT_DEFAULT: &str = "default";

/// Arguments a `chan-send` case must carry.
pub const CHAN_SEND_ARGS: usize = 2;

/// Arguments a `chan-recv` case must carry.
pub const CHAN_RECV_ARGS: usize = 1;

/// Reader spellings for boolean true.
pub const TRUE_SPELLINGS: &[&str] = &["#t", "#true"];

/// Reader spellings for boolean false.
pub const FALSE_SPELLINGS: &[&str] = &["#f", "#false"];
