//! Core drill engine: word records in, ordered prompt/answer pairs out.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: records, table, modes, request and pair |
//! | `formatter` | Renders a record as a display word (article, plural) |
//! | `sampler`   | Seeded sampling without replacement and shuffling |
//! | `generator` | Single entry point `generate_drill()` — dispatches to modes |
//! | `modes`     | One generator per mode, grouped by eligible rows |

pub mod formatter;
pub mod generator;
pub mod models;
pub mod modes;
pub mod sampler;

pub use formatter::render;
pub use generator::{generate_drill, generate_drill_with_rng};
pub use models::{DrillMode, DrillRequest, ModeKind, Pair, Record, Table};
