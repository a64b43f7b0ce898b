use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use marky::{ParseOptions, derive_title, render, to_html, tokenize};
use std::fmt::Write;

/// A note the way the editor tends to hold one: a title, sections with
/// prose, a checklist and the odd snippet.
fn note(sections: usize) -> String {
    let mut doc = String::from("# Weekly notes\n\n");
    for n in 0..sections {
        let _ = write!(
            doc,
            "## Section {n}\n\
             Met with **team {n}** about the *rollout*; see [ticket](tracker.test/{n}).\n\
             - follow up\n    - draft `summary_{n}`\n- ~~cancelled~~ __moved__\n\n\
             ```js\nconsole.log({n} < {m});\n```\n\n",
            m = n + 1
        );
    }
    doc
}

fn outline(depth: usize) -> String {
    (0..depth)
        .map(|level| format!("{}{}. step {level}\n", " ".repeat(level * 4), level + 1))
        .collect()
}

fn quotes(depth: usize) -> String {
    (1..=depth)
        .map(|level| format!("{} said {level}\n", ">".repeat(level)))
        .collect()
}

fn ledger(rows: usize) -> String {
    let mut doc = String::from("| date | item | amount |\n|:--|:-:|--:|\n");
    for r in 0..rows {
        let _ = writeln!(doc, "| 2024-01-{:02} | **item {r}** | {}.00 |", r % 28 + 1, r * 3);
    }
    doc
}

fn prose_with_links(paragraphs: usize) -> String {
    let mut doc = String::new();
    for p in 0..paragraphs {
        let _ = write!(
            doc,
            "Read https://docs.test/{p} or www.mirror.test/{p}, \\*not\\* ![fig {p}](img/{p}.png) \
             and <this> & that.\nSecond line of {p}.\n\n"
        );
    }
    doc
}

fn bench_pipeline(c: &mut Criterion, name: &str, input: &str) {
    let options = ParseOptions::default();
    let tokens = tokenize(input);
    let size = input.len();
    let mut group = c.benchmark_group(name);
    group.bench_with_input(BenchmarkId::new("tokenize", size), input, |b, input| {
        b.iter(|| tokenize(black_box(input)))
    });
    group.bench_with_input(BenchmarkId::new("render", size), &tokens, |b, tokens| {
        b.iter(|| render(black_box(tokens)))
    });
    group.bench_with_input(BenchmarkId::new("title", size), &tokens, |b, tokens| {
        b.iter(|| derive_title(black_box(tokens)))
    });
    group.bench_with_input(BenchmarkId::new("to_html", size), input, |b, input| {
        b.iter(|| to_html(black_box(input), &options))
    });
    group.finish();
}

fn bench_note_sizes(c: &mut Criterion) {
    for sections in [5, 50, 500] {
        bench_pipeline(c, &format!("note/{sections}_sections"), &note(sections));
    }
}

fn bench_constructs(c: &mut Criterion) {
    bench_pipeline(c, "constructs/outline", &outline(60));
    bench_pipeline(c, "constructs/quotes", &quotes(60));
    bench_pipeline(c, "constructs/ledger", &ledger(500));
    bench_pipeline(c, "constructs/links", &prose_with_links(300));
}

criterion_group!(benches, bench_note_sizes, bench_constructs);
criterion_main!(benches);
