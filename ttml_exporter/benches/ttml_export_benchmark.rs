use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use ttml_db_core::{LyricLine, LyricWord};
use ttml_exporter::export_ttml_text;

fn build_lyric(line_count: u64) -> Vec<LyricLine> {
    (0..line_count)
        .map(|i| {
            let begin = i * 3000;
            if i % 8 == 7 {
                return LyricLine::new(begin, 0, "");
            }

            let words = (0..6)
                .map(|w| LyricWord {
                    time: begin + w * 400,
                    duration: 400,
                    word: format!("word{w} "),
                })
                .collect();

            LyricLine {
                should_align_right: i % 3 == 0,
                translated_lyric: Some(format!("翻译 {i}")),
                roman_lyric: Some(format!("roman {i}")),
                dynamic_lyric: Some(words),
                dynamic_lyric_time: Some(begin),
                background_lyric: (i % 4 == 0)
                    .then(|| Box::new(LyricLine::new(begin + 1000, 1000, "(background)"))),
                ..LyricLine::new(begin, 2400, format!("line {i}"))
            }
        })
        .collect()
}

fn benchmark_export_ttml(c: &mut Criterion) {
    let mut group = c.benchmark_group("TTML Export");

    group.measurement_time(Duration::from_secs(10));

    let lines = build_lyric(400);

    group.bench_function("export_raw_ttml", |b| {
        b.iter(|| {
            let ttml = export_ttml_text(black_box(&lines), false).expect("样本导出失败");
            black_box(ttml);
        });
    });

    group.bench_function("export_pretty_ttml", |b| {
        b.iter(|| {
            let ttml = export_ttml_text(black_box(&lines), true).expect("样本导出失败");
            black_box(ttml);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_export_ttml);
criterion_main!(benches);
