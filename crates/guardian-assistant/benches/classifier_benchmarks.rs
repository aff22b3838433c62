//! Benchmarks for intent classification and full query handling.
//!
//! Classification lowercases the question and scans the rule table, so cost
//! grows with question length. The query benchmark adds response rendering
//! and the history append.

use std::sync::Arc;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use guardian_assistant::{ClimateGuardian, HistoryLog, IntentClassifier};

const QUESTIONS: [&str; 6] = [
    "What are the flood risks for Bangladesh?",
    "What policies should small island nations prioritize?",
    "Climate funding opportunities for NGOs in Africa",
    "Show me temperature statistics and trends",
    "Tell me about climate change",
    "How is the weather?",
];

/// A long question that matches no rule, forcing a scan of every keyword.
fn long_unmatched_question(words: usize) -> String {
    (0..words)
        .map(|i| format!("word{}", i))
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_classify(c: &mut Criterion) {
    let classifier = IntentClassifier::new();
    let long = long_unmatched_question(500);

    let mut group = c.benchmark_group("classify");
    group.sample_size(200);
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("sample_questions", |b| {
        let mut idx = 0usize;
        b.iter(|| {
            let intent = classifier.classify(QUESTIONS[idx % QUESTIONS.len()]);
            idx += 1;
            intent
        });
    });

    group.bench_function("long_fallthrough", |b| {
        b.iter(|| classifier.classify(&long));
    });

    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    group.sample_size(100);

    group.bench_function("query_batch_6", |b| {
        // Fresh log per iteration so history growth does not skew timings.
        b.iter(|| {
            let guardian = ClimateGuardian::builtin(Arc::new(HistoryLog::new()));
            QUESTIONS
                .iter()
                .map(|q| guardian.query(q))
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_query);
criterion_main!(benches);
