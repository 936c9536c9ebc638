//! # word_drill
//!
//! An offline vocabulary drill generator for German word lists.
//!
//! Word lists are CSV files with any of the columns `article`, `word`,
//! `plural`, `translation` and `category`. The engine samples rows and turns
//! them into ordered prompt/answer pairs according to a drill mode, and the
//! session runner shows them on a terminal.
//!
//! ## How it works
//!
//! 1. [`load`] one or more CSV files into a [`Table`]. Unreadable files are
//!    skipped with a warning; columns a file lacks load as `None`.
//! 2. Build a [`DrillRequest`] with a mode, an optional length, the
//!    show-category flag and an optional RNG seed.
//! 3. Call [`generate_drill`] to get the [`Pair`]s in display order.
//! 4. Hand them to [`session::run`], which blocks for an answer in test modes
//!    and prints everything at once in train mode.
//!
//! ## Modes
//!
//! | Mode         | Rows   | Prompt                      | Answer                          |
//! |--------------|--------|-----------------------------|---------------------------------|
//! | `german`     | all    | `[cat] der Tisch`           | `table`                         |
//! | `translated` | all    | `[cat] table`               | `der Tisch`                     |
//! | `both`       | all    | half of each, tagged        | matching answer                 |
//! | `plural`     | nouns  | `der Tisch`                 | `die Tische (table)`            |
//! | `article`    | nouns  | `Tisch`                     | `der Tisch`                     |
//! | `train`      | all    | `[cat] der Tisch`           | `table`                         |
//!
//! ## Quick start
//!
//! ```rust
//! use word_drill::{generate_drill, DrillMode, DrillRequest, Record, Table};
//!
//! let table = Table::new(vec![Record {
//!     article: Some("der".into()),
//!     word: Some("Tisch".into()),
//!     plural: Some("Tische".into()),
//!     translation: Some("table".into()),
//!     category: Some("noun".into()),
//! }]);
//!
//! let pairs = generate_drill(&table, &DrillRequest {
//!     mode: DrillMode::Plural,
//!     length: Some(5),
//!     show_category: true,
//!     rng_seed: Some(42),
//! });
//! assert_eq!(pairs[0].prompt, "der Tisch");
//! assert_eq!(pairs[0].expected, "die Tische (table)");
//! ```

pub mod drill_engine;
pub mod error;
pub mod loader;
pub mod logging;
pub mod session;

pub use drill_engine::{
    generate_drill, generate_drill_with_rng, render, DrillMode, DrillRequest, ModeKind, Pair,
    Record, Table,
};
pub use error::{DrillError, Result};
pub use loader::load;
pub use logging::{LogConfig, LogTarget};
