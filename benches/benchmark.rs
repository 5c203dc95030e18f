use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fuzzy_substring::{FuzzySubstringBuilder, Unit, find_matches};

const TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Vestibulum eros ipsum, tincidutn eu metus ut, commodo accumsan mi. Vestibulum porta, orci nec ullamcorper posuere, eros tortor pharetra est, at porttitor mi leo a velit. Maecenas tincidunt semper vestibulum.";

fn benchmark_search(c: &mut Criterion) {
    let engine = FuzzySubstringBuilder::new()
        .case_insensitive(true)
        .build("tincidunt");
    let graphemes = FuzzySubstringBuilder::new()
        .unit(Unit::Grapheme)
        .build("tincidunt");
    let needle = b"tincidunt";

    c.bench_function("search", |b| {
        b.iter(|| {
            let _ = engine.search(black_box(TEXT));
        });
    });
    c.bench_function("search_graphemes", |b| {
        b.iter(|| {
            let _ = graphemes.search(black_box(TEXT));
        });
    });
    c.bench_function("find_matches_bytes", |b| {
        b.iter(|| {
            let _ = find_matches(black_box(needle), black_box(TEXT.as_bytes()));
        });
    });
}

criterion_group!(benches, benchmark_search);
criterion_main!(benches);
