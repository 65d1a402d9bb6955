//! Integration tests for directory batch runs.

use std::fs;
use std::path::Path;

use pdf_outline::batch::{collect_inputs, run_batch, BatchOptions, DocumentOutcome};
use pdf_outline::{Error, JsonFormat, LayoutDocument};

const GOOD_LAYOUT: &str = r#"{
    "metadata": {"title": "Field Guide"},
    "pages": [
        {
            "width": 612,
            "height": 792,
            "blocks": [
                {"lines": [{"bbox": [72, 80, 400, 94], "spans": [
                    {"text": "Getting Started", "size": 14, "font": "Arial-Bold", "bbox": [72, 80, 400, 94]}
                ]}]},
                {"lines": [
                    {"bbox": [72, 120, 540, 130], "spans": [
                        {"text": "body text that is long enough to never look like a heading line", "size": 10, "font": "Arial", "bbox": [72, 120, 540, 130]}
                    ]},
                    {"bbox": [72, 132, 540, 142], "spans": [
                        {"text": "and a second line of body text to settle the dominant size", "size": 10, "font": "Arial", "bbox": [72, 132, 540, 142]}
                    ]}
                ]}
            ]
        }
    ]
}"#;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

// ===== Input Collection =====

#[test]
fn test_collect_inputs_filters_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "b.json", "{}");
    write(dir.path(), "a.JSON", "{}");
    write(dir.path(), "notes.txt", "ignored");
    fs::create_dir(dir.path().join("nested.json")).unwrap();

    let inputs = collect_inputs(dir.path(), "json").unwrap();
    let names: Vec<String> = inputs
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.JSON", "b.json"]);
}

// ===== Batch Runs =====

#[test]
fn test_batch_isolates_failures() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let out_dir = output.path().join("outputs");

    write(input.path(), "alpha.json", GOOD_LAYOUT);
    write(input.path(), "broken.json", "{ this is not json");
    write(input.path(), "empty.json", r#"{"pages": []}"#);

    let mut seen = 0;
    let report = run_batch(input.path(), &out_dir, &BatchOptions::new().with_jobs(2), |_| {
        seen += 1
    })
    .unwrap();

    assert_eq!(seen, 3);
    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed(), 1);
    assert!(!report.is_clean());

    let order: Vec<&str> = report
        .outcomes
        .iter()
        .map(|o| o.input().file_stem().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(order, vec!["alpha", "broken", "empty"]);

    match &report.outcomes[1] {
        DocumentOutcome::Failed { error, .. } => assert!(error.contains("Layout")),
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(!out_dir.join("broken.json").exists());

    let alpha: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("alpha.json")).unwrap()).unwrap();
    assert_eq!(alpha["title"], "Getting Started");
    assert_eq!(alpha["outline"][0]["level"], "H1");
    assert_eq!(alpha["outline"][0]["page"], 1);

    let empty = fs::read_to_string(out_dir.join("empty.json")).unwrap();
    assert_eq!(
        empty,
        "{\n    \"title\": \"Untitled Document\",\n    \"outline\": []\n}"
    );
}

#[test]
fn test_batch_compact_output() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write(input.path(), "guide.json", GOOD_LAYOUT);

    let options = BatchOptions::new().with_format(JsonFormat::Compact);
    let report = run_batch(input.path(), output.path(), &options, |_| {}).unwrap();
    assert!(report.is_clean());

    match &report.outcomes[0] {
        DocumentOutcome::Written {
            output: written,
            headings,
            ..
        } => {
            assert_eq!(*headings, 1);
            let json = fs::read_to_string(written).unwrap();
            assert_eq!(
                json,
                r#"{"title":"Getting Started","outline":[{"level":"H1","text":"Getting Started","page":1}]}"#
            );
        }
        other => panic!("expected written outcome, got {:?}", other),
    }
}

#[test]
fn test_batch_custom_extension() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write(input.path(), "report.layout", GOOD_LAYOUT);
    write(input.path(), "skipped.json", GOOD_LAYOUT);

    let options = BatchOptions::new().with_extension("layout");
    let report = run_batch(input.path(), output.path(), &options, |_| {}).unwrap();

    assert_eq!(report.outcomes.len(), 1);
    assert!(output.path().join("report.json").exists());
    assert!(!output.path().join("skipped.json").exists());
}

#[test]
fn test_batch_empty_directory() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let report = run_batch(input.path(), output.path(), &BatchOptions::default(), |_| {}).unwrap();
    assert!(report.outcomes.is_empty());
    assert!(report.is_clean());
}

#[test]
fn test_batch_refuses_to_overwrite_inputs() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "alpha.json", GOOD_LAYOUT);

    let mut seen = 0;
    let result = run_batch(dir.path(), dir.path(), &BatchOptions::default(), |_| seen += 1);

    assert!(matches!(result, Err(Error::InvalidInput(_))));
    assert_eq!(seen, 0);
    assert_eq!(
        fs::read_to_string(dir.path().join("alpha.json")).unwrap(),
        GOOD_LAYOUT
    );
}

#[test]
fn test_batch_same_directory_other_extension() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "report.layout", GOOD_LAYOUT);

    let options = BatchOptions::new().with_extension("layout");
    let report = run_batch(dir.path(), dir.path(), &options, |_| {}).unwrap();

    assert!(report.is_clean());
    assert!(dir.path().join("report.json").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join("report.layout")).unwrap(),
        GOOD_LAYOUT
    );
}

#[test]
fn test_loaded_layout_matches_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "guide.json", GOOD_LAYOUT);

    let layout = LayoutDocument::open(dir.path().join("guide.json")).unwrap();
    assert_eq!(layout.pages.len(), 1);
    assert_eq!(layout.metadata.title.as_deref(), Some("Field Guide"));
}
