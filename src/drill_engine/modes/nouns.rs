use rand::Rng;
use tracing::debug;
use crate::drill_engine::{
    formatter::{bare_word, render},
    models::{DrillRequest, Pair, Record, Table},
    sampler::sample,
};

fn draw_nouns<'a, R: Rng>(rng: &mut R, table: &'a Table, request: &DrillRequest) -> Vec<&'a Record> {
    let nouns = table.nouns();
    let n = request.effective_length(nouns.len());
    debug!(eligible = nouns.len(), drawn = n, "sampling nouns");
    sample(rng, &nouns, n)
}

/// Singular noun as prompt, `"die <plural> (<translation>)"` as answer.
///
/// Rows without a plural are drawn but then dropped, so the output can be
/// shorter than the requested length.
pub fn generate_plural<R: Rng>(rng: &mut R, table: &Table, request: &DrillRequest) -> Vec<Pair> {
    draw_nouns(rng, table, request)
        .into_iter()
        .filter_map(|row| {
            let plural = render(row, true);
            if plural.is_empty() {
                return None;
            }
            let expected = format!("{plural} ({})", row.translation_str());
            Some(Pair::new(render(row, false), expected))
        })
        .collect()
}

/// Bare noun as prompt, noun with its article as answer.
pub fn generate_article<R: Rng>(rng: &mut R, table: &Table, request: &DrillRequest) -> Vec<Pair> {
    draw_nouns(rng, table, request)
        .into_iter()
        .map(|row| Pair::new(bare_word(row), render(row, false)))
        .collect()
}
