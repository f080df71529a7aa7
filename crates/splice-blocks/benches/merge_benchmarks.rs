use criterion::{Criterion, black_box, criterion_group, criterion_main};
use splice_blocks::{AnchorRule, CommentStyle, add_or_update, remove};

/// A Podfile-shaped text with a few thousand filler lines around the anchor.
fn large_podfile() -> String {
    let mut lines: Vec<String> = (0..2000).map(|i| format!("  pod 'Filler{i}'")).collect();
    lines.insert(1000, "  config = use_native_modules!".to_string());
    lines.join("\n")
}

fn merge_benchmark(c: &mut Criterion) {
    let text = large_podfile();
    let rule = AnchorRule::literal("use_native_modules");
    let payload = "  pod 'react-native-google-maps'";

    c.bench_function("merge::add_or_update (insert)", |b| {
        b.iter(|| {
            add_or_update(black_box(&text), "maps", &rule, CommentStyle::Hash, payload).unwrap()
        })
    });

    let merged = add_or_update(&text, "maps", &rule, CommentStyle::Hash, payload)
        .unwrap()
        .contents;

    c.bench_function("merge::add_or_update (noop)", |b| {
        b.iter(|| {
            add_or_update(black_box(&merged), "maps", &rule, CommentStyle::Hash, payload).unwrap()
        })
    });

    c.bench_function("merge::remove", |b| {
        b.iter(|| remove(black_box(&merged), "maps"))
    });
}

criterion_group!(benches, merge_benchmark);
criterion_main!(benches);
