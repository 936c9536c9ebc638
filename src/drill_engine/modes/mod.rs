//! Mode generators grouped by the rows they draw from.
//!
//! Every public function follows the same signature:
//!
//! ```ignore
//! pub fn generate_<name><R: Rng>(
//!     rng: &mut R,
//!     table: &Table,
//!     request: &DrillRequest,
//! ) -> Vec<Pair>
//! ```
//!
//! The generator dispatches to these via `generator.rs`.

/// german, translated, both
pub mod vocabulary;
/// plural, article (rows with `category == "noun"`)
pub mod nouns;
/// train
pub mod train;
