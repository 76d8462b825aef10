mod decay_channel;
mod decay_table;

pub use decay_channel::{DecayChannel, DecayKind, MAX_DAUGHTERS};
pub use decay_table::DecayTable;
