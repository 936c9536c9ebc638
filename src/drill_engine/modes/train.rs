use rand::Rng;
use crate::drill_engine::{
    formatter::{render, tagged},
    models::{DrillRequest, Pair, Record, Table},
    sampler::sample,
};

// Capitalised, unlike the "noun" token the noun-only modes filter on. Rows
// categorised "noun" therefore get no plural here. Kept as-is until the word
// lists settle on one spelling.
const TRAIN_NOUN_CATEGORY: &str = "Noun";

fn train_prompt(row: &Record) -> String {
    let singular = render(row, false);
    if row.category.as_deref() != Some(TRAIN_NOUN_CATEGORY) {
        return singular;
    }
    let plural = render(row, true);
    if plural.is_empty() {
        singular
    } else {
        format!("{singular}, {plural}")
    }
}

/// Word (plus plural for "Noun" rows) next to its translation, for reading
/// rather than answering.
pub fn generate_train<R: Rng>(rng: &mut R, table: &Table, request: &DrillRequest) -> Vec<Pair> {
    let rows: Vec<&Record> = table.records.iter().collect();
    let n = request.effective_length(rows.len());
    sample(rng, &rows, n)
        .into_iter()
        .map(|row| {
            let prompt = tagged(row, &train_prompt(row), request.show_category);
            Pair::new(prompt, row.translation_str())
        })
        .collect()
}
