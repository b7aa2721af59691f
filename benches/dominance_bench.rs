use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use trecsift::filtering::DominanceFilter;
use trecsift::stopwords::IgnoreSet;
use trecsift::trec::{DocumentRecord, Framing, Segmenter};

const WORDS: [&str; 12] = [
    "lorem", "ipsum", "dolor", "amet", "consectetur", "adipiscing", "elit", "tempor",
    "magna", "justo", "sollicitudin", "posuere",
];

fn record(id: usize, nb_words: usize) -> String {
    let text: Vec<&str> = (0..nb_words).map(|i| WORDS[(i * 7 + id) % WORDS.len()]).collect();
    format!(
        "<DOC>\n<DOCNO>doc{id}</DOCNO>\n<DOCID>doc{id}</DOCID>\n<TEXT>\n{}\n</TEXT>\n</DOC>\n",
        text.join(" ")
    )
}

fn classify(c: &mut Criterion) {
    let filter = DominanceFilter::default();
    let ignore = IgnoreSet::from_iter(["lorem", "elit"]);
    let mut group = c.benchmark_group("classify");
    for nb_words in [10, 100, 1000] {
        let r = DocumentRecord::new(record(1, nb_words));
        group.bench_with_input(BenchmarkId::from_parameter(nb_words), &r, |b, r| {
            b.iter(|| filter.classify(black_box(r), &ignore))
        });
    }
    group.finish();
}

fn segment(c: &mut Criterion) {
    let file: String = (0..1000).map(|i| record(i, 50)).collect();
    let mut group = c.benchmark_group("segment");
    for framing in [Framing::TagDelimited, Framing::FixedArity] {
        group.bench_with_input(BenchmarkId::from_parameter(framing), &file, |b, file| {
            b.iter(|| Segmenter::new(file.as_bytes(), framing).count())
        });
    }
    group.finish();
}

criterion_group!(benches, classify, segment);
criterion_main!(benches);
