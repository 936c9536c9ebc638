use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use crate::drill_engine::{
    models::{DrillMode, DrillRequest, Pair, Table},
    modes,
};

/// Signature shared by every mode generator.
pub type ModeFn = fn(&mut StdRng, &Table, &DrillRequest) -> Vec<Pair>;

/// Mode → generator lookup. The match is exhaustive, so adding a mode without
/// a generator fails to compile.
pub fn handler(mode: DrillMode) -> ModeFn {
    match mode {
        DrillMode::German     => modes::vocabulary::generate_german,
        DrillMode::Translated => modes::vocabulary::generate_translated,
        DrillMode::Both       => modes::vocabulary::generate_both,
        DrillMode::Plural     => modes::nouns::generate_plural,
        DrillMode::Article    => modes::nouns::generate_article,
        DrillMode::Train      => modes::train::generate_train,
    }
}

/// Core dispatch with a caller-supplied RNG.
pub fn generate_drill_with_rng(rng: &mut StdRng, table: &Table, request: &DrillRequest) -> Vec<Pair> {
    debug!(mode = %request.mode, rows = table.len(), length = ?request.length, "generating drill");
    let pairs = handler(request.mode)(rng, table, request);
    info!(mode = %request.mode, pairs = pairs.len(), "drill ready");
    pairs
}

/// Core dispatch: seeds the RNG from the request and routes to the mode.
pub fn generate_drill(table: &Table, request: &DrillRequest) -> Vec<Pair> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_drill_with_rng(&mut rng, table, request)
}
