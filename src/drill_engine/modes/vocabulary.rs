use rand::Rng;
use crate::drill_engine::{
    formatter::{render, tagged},
    models::{DrillRequest, Pair, Record, Table},
    sampler::{sample, shuffle},
};

const GERMAN_TAG: &str = "(German) ";
const TRANSLATED_TAG: &str = "(Translated) ";

fn draw<'a, R: Rng>(rng: &mut R, table: &'a Table, request: &DrillRequest) -> Vec<&'a Record> {
    let rows: Vec<&Record> = table.records.iter().collect();
    let n = request.effective_length(rows.len());
    sample(rng, &rows, n)
}

/// German word (with article) as prompt, translation as answer.
pub fn generate_german<R: Rng>(rng: &mut R, table: &Table, request: &DrillRequest) -> Vec<Pair> {
    draw(rng, table, request)
        .into_iter()
        .map(|row| {
            let prompt = tagged(row, &render(row, false), request.show_category);
            Pair::new(prompt, row.translation_str())
        })
        .collect()
}

/// Translation as prompt, German word (with article) as answer.
pub fn generate_translated<R: Rng>(rng: &mut R, table: &Table, request: &DrillRequest) -> Vec<Pair> {
    draw(rng, table, request)
        .into_iter()
        .map(|row| {
            let prompt = tagged(row, row.translation_str(), request.show_category);
            Pair::new(prompt, render(row, false))
        })
        .collect()
}

/// Half a german batch and half a translated batch, tagged and shuffled.
///
/// The two batches are drawn independently, so one row can appear in both
/// halves.
pub fn generate_both<R: Rng>(rng: &mut R, table: &Table, request: &DrillRequest) -> Vec<Pair> {
    let mut german = generate_german(rng, table, request);
    german.truncate(german.len() / 2);

    let mut translated = generate_translated(rng, table, request);
    translated.truncate(translated.len() / 2);

    let mut pairs: Vec<Pair> = german
        .into_iter()
        .map(|p| Pair::new(format!("{GERMAN_TAG}{}", p.prompt), p.expected))
        .chain(
            translated
                .into_iter()
                .map(|p| Pair::new(format!("{TRANSLATED_TAG}{}", p.prompt), p.expected)),
        )
        .collect();
    shuffle(rng, &mut pairs);
    pairs
}
