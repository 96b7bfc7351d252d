// tests/extract_e2e.rs
use std::fs;
use std::path::PathBuf;

use champ_scrape::config::options::{AppOptions, ExportFormat};
use champ_scrape::{runner, Error};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("champ_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn row(name: Option<&str>, win: &str) -> String {
    let name = name
        .map(|n| format!(r#"<div class="text-xl font-semibold">{n}</div>"#))
        .unwrap_or_default();
    format!(
        r#"<a href="/champ" class="flex h-[52px] w-full items-center">
             <img src="x.png" />{name}
             <div class="w-16 text-center">{win}</div>
           </a>"#
    )
}

fn page(rows: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Tier list</title></head>\
         <body><div class=\"h-[40px]\">header</div><section>{}</section></body></html>",
        rows.concat()
    )
}

fn options_for(dir: &PathBuf, html: &str) -> AppOptions {
    let input = dir.join("input.html");
    fs::write(&input, html).unwrap();

    let mut opts = AppOptions::default();
    opts.extract.input = input;
    opts.export.set_path(dir.join("out.csv").to_str().unwrap());
    opts
}

#[test]
fn writes_one_row_per_marker_in_document_order() {
    let dir = tmp_dir("order");
    let html = page(&[
        row(Some("Ahri"), "53.2%+"),
        row(Some("Zed"), "47.8%-"),
        row(None, "50%+0.1"),
        row(Some("Lux"), "51.25%+"),
    ]);
    let opts = options_for(&dir, &html);

    let summary = runner::run(&opts).unwrap();
    assert_eq!(summary.rows, 4);

    let s = fs::read_to_string(&summary.out_path).unwrap();
    assert_eq!(s, "name,win\nAhri,53.2\nZed,47.8\n,50.0\nLux,51.25\n");
}

#[test]
fn no_markers_gives_header_only() {
    let dir = tmp_dir("empty");
    let opts = options_for(&dir, &page(&[]));

    let summary = runner::run(&opts).unwrap();
    assert_eq!(summary.rows, 0);
    assert_eq!(fs::read_to_string(&summary.out_path).unwrap(), "name,win\n");
}

#[test]
fn rerun_is_byte_identical() {
    let dir = tmp_dir("idempotent");
    let html = page(&[row(Some("Ahri"), "53.2%+"), row(Some("Kai'Sa"), "49.9%-")]);
    let opts = options_for(&dir, &html);

    let first = fs::read(runner::run(&opts).unwrap().out_path).unwrap();
    let second = fs::read(runner::run(&opts).unwrap().out_path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn bad_win_fails_without_writing() {
    let dir = tmp_dir("bad_win");
    let html = page(&[row(Some("Ahri"), "53.2%+"), row(Some("Zed"), "n/a")]);
    let opts = options_for(&dir, &html);

    match runner::run(&opts) {
        Err(Error::ParseWin { row, text, .. }) => {
            assert_eq!(row, 1);
            assert_eq!(text, "n/a");
        }
        other => panic!("expected ParseWin, got {other:?}"),
    }
    assert!(!opts.export.out_path().exists());
}

#[test]
fn missing_input_is_a_read_error() {
    let dir = tmp_dir("missing");
    let mut opts = AppOptions::default();
    opts.extract.input = dir.join("nope.html");
    opts.export.set_path(dir.join("out.csv").to_str().unwrap());

    assert!(matches!(runner::run(&opts), Err(Error::ReadInput { .. })));
    assert!(!dir.join("out.csv").exists());
}

#[test]
fn tsv_export_into_new_directory() {
    let dir = tmp_dir("tsv");
    let html = page(&[row(Some("Nunu & Willump"), "52%+")]);
    let mut opts = options_for(&dir, &html);
    opts.export.format = ExportFormat::Tsv;
    opts.export.set_path(dir.join("nested/deeper/wr.tsv").to_str().unwrap());

    let summary = runner::run(&opts).unwrap();
    let s = fs::read_to_string(&summary.out_path).unwrap();
    assert_eq!(s, "name\twin\nNunu & Willump\t52.0\n");
}
