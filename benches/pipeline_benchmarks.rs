//! Benchmarks for the in-memory report pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pdf_sentiment::{LexiconAnalyzer, Pipeline, PipelineConfig, SentimentAnalyzer};

const LINES: [&str; 4] = [
    "Great news today, the harvest was the best in years.",
    "Everything failed badly and the roads were not safe.",
    "The committee will meet again on Tuesday.",
    "We are very grateful for your generous support!",
];

fn document(paragraphs: usize) -> String {
    LINES.iter().cycle().take(paragraphs).copied().collect::<Vec<_>>().join("\n")
}

fn benchmark_analyzer(c: &mut Criterion) {
    let analyzer = LexiconAnalyzer::new();
    c.bench_function("polarity_scores_single", |b| {
        b.iter(|| analyzer.polarity_scores(black_box(LINES[0])).unwrap())
    });
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_text");
    group.sample_size(20);
    for (name, include_chart) in [("with_chart", true), ("text_only", false)] {
        let pipeline = Pipeline::new(PipelineConfig::default().with_chart(include_chart)).unwrap();
        for size in [10usize, 200] {
            let text = document(size);
            group.bench_with_input(BenchmarkId::new(name, size), &text, |b, text| {
                b.iter(|| pipeline.run_text(black_box(text)).unwrap())
            });
        }
    }
    group.finish();
}

criterion_group!(benches, benchmark_analyzer, benchmark_pipeline);
criterion_main!(benches);
