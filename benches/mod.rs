#![cfg(unstable)]
#![feature(test)]
extern crate test;

use simple_json::Document;

use std::str;

#[bench]
fn read_event_stacktrace_document(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/event_stacktrace.json");

    b.bytes = input.len() as u64;
    b.iter(|| Document::try_parse(input).unwrap())
}

#[bench]
fn read_event_stacktrace_value_serde_json(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/event_stacktrace.json");

    b.bytes = input.len() as u64;
    b.iter(|| {
        let v: serde_json::Value = serde_json::from_slice(input).unwrap();
        v
    })
}

#[bench]
fn read_event_stacktrace_value_json(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/event_stacktrace.json");

    b.bytes = input.len() as u64;
    b.iter(|| {
        let v: json::JsonValue = json::parse(str::from_utf8(input).unwrap()).unwrap();
        v
    })
}

#[bench]
fn read_event_stacktrace_value_simd_json(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/event_stacktrace.json");

    b.bytes = input.len() as u64;
    b.iter(|| {
        let mut input = input.to_vec();
        let v = simd_json::to_borrowed_value(&mut input).unwrap();
        test::black_box(v);
    })
}

#[bench]
fn read_event_stacktrace_validate_utf8(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/event_stacktrace.json");

    b.bytes = input.len() as u64;
    b.iter(|| str::from_utf8(input).unwrap())
}

#[bench]
fn read_event_stacktrace_sparse(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/event_stacktrace.json");

    b.bytes = input.len() as u64;
    b.iter(|| {
        let doc = Document::try_parse(input).unwrap();

        doc["@m"].as_str().unwrap().to_owned()
    })
}

#[bench]
fn write_event_stacktrace_document(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/event_stacktrace.json");
    let doc = Document::try_parse(input).unwrap();

    b.bytes = input.len() as u64;
    b.iter(|| doc.to_json_string())
}

#[bench]
fn write_event_stacktrace_value_serde_json(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/event_stacktrace.json");
    let v: serde_json::Value = serde_json::from_slice(input).unwrap();

    b.bytes = input.len() as u64;
    b.iter(|| serde_json::to_string(&v).unwrap())
}

#[bench]
fn write_event_stacktrace_value_json(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/event_stacktrace.json");
    let v = json::parse(str::from_utf8(input).unwrap()).unwrap();

    b.bytes = input.len() as u64;
    b.iter(|| v.dump())
}

#[bench]
#[cfg(feature = "serde_json")]
fn convert_event_stacktrace_document_to_serde_json(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/event_stacktrace.json");
    let doc = Document::try_parse(input).unwrap();

    b.bytes = input.len() as u64;
    b.iter(|| doc.to_value())
}

#[bench]
fn read_event_no_escape_document(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/event_no_escape.json");

    b.bytes = input.len() as u64;
    b.iter(|| Document::try_parse(input).unwrap())
}

#[bench]
fn read_event_no_escape_value_serde_json(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/event_no_escape.json");

    b.bytes = input.len() as u64;
    b.iter(|| {
        let v: serde_json::Value = serde_json::from_slice(input).unwrap();
        v
    })
}

#[bench]
fn read_event_no_escape_value_json(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/event_no_escape.json");

    b.bytes = input.len() as u64;
    b.iter(|| {
        let v: json::JsonValue = json::parse(str::from_utf8(input).unwrap()).unwrap();
        v
    })
}

#[bench]
fn read_event_no_escape_value_simd_json(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/event_no_escape.json");

    b.bytes = input.len() as u64;
    b.iter(|| {
        let mut input = input.to_vec();
        let v = simd_json::to_borrowed_value(&mut input).unwrap();
        test::black_box(v);
    })
}

#[bench]
fn read_nested_arrays_document(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/nested_arrays.json");

    b.bytes = input.len() as u64;
    b.iter(|| Document::try_parse(input).unwrap())
}

#[bench]
fn read_nested_arrays_value_serde_json(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/nested_arrays.json");

    b.bytes = input.len() as u64;
    b.iter(|| {
        let v: serde_json::Value = serde_json::from_slice(input).unwrap();
        v
    })
}

#[bench]
fn read_unicode_document(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/unicode.json");

    b.bytes = input.len() as u64;
    b.iter(|| Document::try_parse(input).unwrap())
}

#[bench]
fn clone_and_mutate_event_stacktrace(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/event_stacktrace.json");
    let doc = Document::try_parse(input).unwrap();

    b.iter(|| {
        let mut copy = doc.clone();
        copy["Context"]["Machine"] = "web-02".into();

        copy
    })
}

#[bench]
fn eq_event_stacktrace(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/event_stacktrace.json");
    let l = Document::try_parse(input).unwrap();
    let r = Document::try_parse(input).unwrap();

    b.bytes = input.len() as u64;
    b.iter(|| l == r)
}

#[bench]
fn read_and_drop_deep_arrays(b: &mut test::Bencher) {
    let mut input = String::new();
    input.extend(std::iter::repeat('[').take(10_000));
    input.extend(std::iter::repeat(']').take(10_000));

    b.bytes = input.len() as u64;
    b.iter(|| drop(Document::try_parse(&input).unwrap()))
}
