//! Tests for the per-file pipeline.

use std::pin::pin;
use std::task::{Context, Waker};

use pollster::block_on;

use super::fakes::{Reply, ScriptedBridge, SlowBridge, UnreadableFile, png, result_with};
use crate::bridge::RemoteClient;
use crate::encoder::{BytesFile, FileSource};
use crate::pipeline::{BatchSummary, FileOutcome, Pipeline};
use crate::render::{GalleryNode, MemoryGallery};

fn pipeline(replies: Vec<Reply>) -> Pipeline<ScriptedBridge, MemoryGallery> {
    Pipeline::new(RemoteClient::new(ScriptedBridge::new(replies)), MemoryGallery::new())
}

fn labels(nodes: &[GalleryNode]) -> Vec<String> {
    nodes
        .iter()
        .map(|n| match n {
            GalleryNode::Image { label, .. } => label.clone(),
            GalleryNode::Detection { text } => text.clone(),
            GalleryNode::Error { .. } => "Error".to_string(),
        })
        .collect()
}

#[test]
fn test_single_file_success_order() {
    let p = pipeline(vec![result_with(&[(0, 0.8734), (2, 0.5)])]);

    let outcome = block_on(p.process_file(&png("cat.png")));
    assert_eq!(outcome, FileOutcome::Processed { detections: 2 });

    let nodes = p.gallery().nodes();
    assert_eq!(
        labels(&nodes),
        vec!["Original", "Processed", "Class 0: 0.87", "Class 2: 0.50"]
    );
    assert_eq!(
        nodes[1],
        GalleryNode::Image {
            src: "data:image/png;base64,UFJPQ0VTU0VE".to_string(),
            label: "Processed".to_string(),
        }
    );
}

#[test]
fn test_original_shows_file_preview() {
    let p = pipeline(vec![result_with(&[])]);
    let file = png("a.png");

    block_on(p.process_file(&file));
    match &p.gallery().nodes()[0] {
        GalleryNode::Image { src, label } => {
            assert_eq!(label, "Original");
            assert_eq!(src, &file.preview_url().unwrap());
        }
        other => panic!("expected image node, got {other:?}"),
    }
}

#[test]
fn test_payload_has_no_data_url_prefix() {
    let p = pipeline(vec![result_with(&[])]);
    let file = BytesFile::new("x.jpg", "image/jpeg", b"hello".to_vec());

    block_on(p.process_file(&file));
    assert_eq!(p.client().bridge().received(), vec!["aGVsbG8="]);
}

#[test]
fn test_zero_detections() {
    let p = pipeline(vec![result_with(&[])]);

    let outcome = block_on(p.process_file(&png("empty.png")));
    assert_eq!(outcome, FileOutcome::Processed { detections: 0 });
    assert_eq!(labels(&p.gallery().nodes()), vec!["Original", "Processed"]);
}

#[test]
fn test_falsy_result_in_middle_of_batch() {
    let p = pipeline(vec![
        result_with(&[(1, 0.9)]),
        Reply::Falsy,
        result_with(&[(3, 0.25)]),
    ]);

    let summary = block_on(p.handle_files(vec![png("one.png"), png("two.png"), png("three.png")]));
    assert_eq!(
        summary,
        BatchSummary {
            processed: 2,
            failed: 1
        }
    );

    let nodes = p.gallery().nodes();
    assert_eq!(
        labels(&nodes),
        vec![
            "Original",
            "Processed",
            "Class 1: 0.90",
            "Original",
            "Error",
            "Original",
            "Processed",
            "Class 3: 0.25",
        ]
    );
    assert_eq!(
        nodes[4].text(),
        Some("Error processing two.png. Please try again.")
    );
}

#[test]
fn test_next_file_waits_for_previous_result() {
    let gallery = MemoryGallery::new();
    let bridge = SlowBridge::new(
        &gallery,
        vec![result_with(&[(1, 0.9)]), Reply::Falsy, result_with(&[])],
    );
    let p = Pipeline::new(RemoteClient::new(bridge), &gallery);
    let files = vec![png("one.png"), png("two.png"), png("three.png")];

    let mut batch = pin!(p.handle_files(&files));
    let mut cx = Context::from_waker(Waker::noop());
    assert!(batch.as_mut().poll(&mut cx).is_pending());

    // First backend call is in flight; the second file has not started
    assert_eq!(labels(&gallery.nodes()), vec!["Original"]);

    let summary = block_on(batch);
    assert_eq!(summary.processed, 2);
    assert_eq!(summary.failed, 1);

    let seen: Vec<Vec<String>> = p
        .client()
        .bridge()
        .seen()
        .iter()
        .map(|nodes| labels(nodes))
        .collect();
    assert_eq!(
        seen,
        vec![
            vec!["Original"],
            vec!["Original", "Processed", "Class 1: 0.90", "Original"],
            vec![
                "Original",
                "Processed",
                "Class 1: 0.90",
                "Original",
                "Error",
                "Original",
            ],
        ]
    );
}

#[test]
fn test_bridge_error_is_localized() {
    let p = pipeline(vec![Reply::Fail("backend crashed"), result_with(&[(0, 0.1)])]);

    let summary = block_on(p.handle_files(vec![png("bad.png"), png("good.png")]));
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.total(), 2);

    let nodes = p.gallery().nodes();
    assert_eq!(
        labels(&nodes),
        vec!["Original", "Error", "Original", "Processed", "Class 0: 0.10"]
    );
}

#[test]
fn test_read_failure_skips_backend() {
    let p = pipeline(vec![result_with(&[(0, 0.5)])]);

    let outcome = block_on(p.process_file(&UnreadableFile("locked.png")));
    assert_eq!(outcome, FileOutcome::Failed);
    assert!(p.client().bridge().received().is_empty());

    let nodes = p.gallery().nodes();
    assert_eq!(labels(&nodes), vec!["Original", "Error"]);
    assert!(nodes[1].text().unwrap().contains("locked.png"));
}

#[test]
fn test_one_original_per_file_in_source_order() {
    let p = pipeline(vec![result_with(&[]), Reply::Falsy, result_with(&[])]);
    let files = vec![png("c.png"), png("a.png"), png("b.png")];
    let previews: Vec<String> = files.iter().map(|f| f.preview_url().unwrap()).collect();

    block_on(p.handle_files(&files));

    let originals: Vec<String> = p
        .gallery()
        .nodes()
        .into_iter()
        .filter_map(|n| match n {
            GalleryNode::Image { src, label } if label == "Original" => Some(src),
            _ => None,
        })
        .collect();
    assert_eq!(originals, previews);
}

#[test]
fn test_custom_processed_mime() {
    let p = pipeline(vec![result_with(&[])]).with_processed_mime("image/jpeg");

    block_on(p.process_file(&png("x.png")));
    match &p.gallery().nodes()[1] {
        GalleryNode::Image { src, .. } => assert!(src.starts_with("data:image/jpeg;base64,")),
        other => panic!("expected image node, got {other:?}"),
    }
}

#[test]
fn test_empty_batch() {
    let p = pipeline(vec![]);
    let summary = block_on(p.handle_files(Vec::<BytesFile>::new()));

    assert_eq!(summary.total(), 0);
    assert!(p.gallery().is_empty());
}
