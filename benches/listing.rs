use criterion::{Criterion, black_box, criterion_group, criterion_main};

use tira_scrape::{
    config::options::AddressFallback,
    normalize::AddressNormalizer,
    specs::{detail::parse_detail, listing::extract_summaries},
};

/// A listing page shaped like the live site: 25 rows of padding markup.
fn sample_listing() -> String {
    let mut rows = String::new();
    for i in 1..=25 {
        rows.push_str(&format!(
            r#"<a href="https://www.tira.go.tz/licensed-entities/insurance-companies/entity-{i}"
                  class="row text-hover-primary cursor-pointerrr hover-bg border-top">
                 <div class="col-md-8 col-sm-8 col-6 pl-4 d-flex align-items-center">
                   <span class="mr-3 badge">{i}</span> Entity Number {i} Insurance Company Limited
                 </div>
                 <div class="col-md-4 col-sm-4 col-6 text-right"><span class="badge">Active</span></div>
               </a>"#
        ));
    }
    format!("<html><head><title>Insurance Companies</title></head><body><nav>…</nav><div class=\"card\">{rows}</div></body></html>")
}

fn sample_detail() -> String {
    let fields = [
        ("Date of License", "01/07/2023"),
        ("Number of License", "TIRA/COMP/2023/017"),
        ("Status", "Active"),
        ("Country", "Tanzania"),
        ("Phone", "0222 123 456"),
        ("Email", "info@example.co.tz"),
        ("Address", "Plot 7, Samora Avenue, Dar es Salaam"),
    ];
    let blocks: String = fields
        .iter()
        .map(|(l, v)| {
            format!(
                r#"<div class="col-md-12 last-no-border py-2 border-bottom-faded">
                     <div class="faded">{l}</div><div class="text-dark mt-0">{v}</div></div>"#
            )
        })
        .collect();
    format!("<html><body><div class=\"row\">{blocks}</div></body></html>")
}

fn bench_specs(c: &mut Criterion) {
    let listing = sample_listing();
    let detail = sample_detail();
    let address = AddressNormalizer::disabled(AddressFallback::Null);

    c.bench_function("extract_summaries", |b| {
        b.iter(|| {
            let entries = extract_summaries(black_box(&listing));
            black_box(entries.len())
        })
    });

    c.bench_function("parse_detail", |b| {
        b.iter(|| {
            let rec = parse_detail(black_box(&detail), "Entity", "https://x/entity", &address);
            black_box(rec.len())
        })
    });
}

criterion_group!(benches, bench_specs);
criterion_main!(benches);
