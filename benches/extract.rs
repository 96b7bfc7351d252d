// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use champ_scrape::config::options::{ExportFormat, ExtractOptions};
use champ_scrape::{file, specs};

fn sample_page(rows: usize) -> String {
    let mut html = String::from("<html><body><main>");
    for i in 0..rows {
        html.push_str(&format!(
            r#"<a class="flex h-[52px] items-center"><img src="{i}.png"/>
               <span class="text-xl">Champion {i}</span>
               <span class="text-sm">Tier {t}</span>
               <div class="text-center">{w:.1}%+0.{t}</div></a>"#,
            t = i % 5,
            w = 45.0 + (i % 100) as f64 / 10.0,
        ));
    }
    html.push_str("</main></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let doc = sample_page(170);
    let opts = ExtractOptions::default();

    c.bench_function("extract_raw", |b| {
        b.iter(|| black_box(specs::champions::extract_raw(black_box(&doc), &opts).len()))
    });

    c.bench_function("extract", |b| {
        b.iter(|| black_box(specs::champions::extract(black_box(&doc), &opts).unwrap().len()))
    });

    let records = specs::champions::extract(&doc, &opts).unwrap();
    c.bench_function("export_csv", |b| {
        b.iter(|| black_box(file::to_export_bytes(black_box(&records), ExportFormat::Csv).unwrap().len()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
