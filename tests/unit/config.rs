use super::*;
use crate::animation::ease::Ease;

fn parse(json: &str) -> ScrollreelResult<SiteConfig> {
    SiteConfig::from_reader(json.as_bytes())
}

#[test]
fn minimal_document_fills_defaults() {
    let cfg = parse(r#"{ "sequence": {} }"#).unwrap();
    assert_eq!(cfg.sequence, SequenceConfig::default());
    assert_eq!(cfg.sequence.frame_count, 96);
    assert_eq!(cfg.scrub, ScrubConfig::default());
    assert_eq!(cfg.tilt, TiltConfig::default());
    assert_eq!(cfg.typewriter.pause_ms, 3000);
    assert!(cfg.catalog.is_empty());
    cfg.validate().unwrap();
}

#[test]
fn full_document_parses() {
    let cfg = parse(
        r##"{
            "sequence": {
                "frame_count": 12,
                "path_template": "frames/f-{index}.png",
                "clear_rgba": "#050505",
                "load_threads": 2
            },
            "scrub": { "scroll_distance_px": 1200, "smoothing_secs": 0, "ease": "power1.out" },
            "tilt": { "max_rotation_deg": 10 },
            "typewriter": { "strings": ["one", "two"], "looped": false },
            "catalog": {
                "web": {
                    "title": "Web",
                    "desc": "Sites",
                    "details": [{ "label": "Stack", "text": "Rust" }]
                }
            }
        }"##,
    )
    .unwrap();
    cfg.validate().unwrap();

    assert_eq!(cfg.sequence.frame_count, 12);
    assert_eq!(cfg.sequence.clear_rgba, Rgba8([5, 5, 5, 255]));
    assert_eq!(cfg.sequence.load_threads, Some(2));
    assert_eq!(
        cfg.sequence.template().unwrap().as_str(),
        "frames/f-{index}.png"
    );
    assert_eq!(cfg.scrub.scroll_distance_px, 1200.0);
    assert_eq!(cfg.scrub.ease, Ease::OutQuad);
    assert!(cfg.scrub.snap_to_frame);
    assert_eq!(cfg.tilt.max_rotation_deg, 10.0);
    assert_eq!(cfg.tilt.max_offset_px, 30.0);
    assert_eq!(cfg.typewriter.strings.len(), 2);
    assert!(!cfg.typewriter.looped);
    assert_eq!(cfg.catalog["web"].details[0].text, "Rust");
}

#[test]
fn unknown_fields_are_rejected() {
    let err = parse(r#"{ "sequence": { "frame_cnt": 3 } }"#).unwrap_err();
    assert!(matches!(err, ScrollreelError::Serde(_)));
    assert!(parse(r#"{ "sequence": {}, "extra": 1 }"#).is_err());
}

#[test]
fn missing_sequence_is_rejected() {
    assert!(parse("{}").is_err());
}

#[test]
fn validate_reports_bad_sections() {
    let mut cfg = parse(r#"{ "sequence": {} }"#).unwrap();
    cfg.sequence.frame_count = 0;
    assert!(matches!(cfg.validate(), Err(ScrollreelError::Validation(_))));

    let mut cfg = parse(r#"{ "sequence": { "load_threads": 0 } }"#).unwrap();
    assert!(cfg.validate().is_err());
    cfg.sequence.load_threads = None;
    cfg.sequence.path_template = "frames/no-placeholder.jpg".to_string();
    assert!(cfg.validate().is_err());

    let mut cfg = parse(r#"{ "sequence": {} }"#).unwrap();
    cfg.scrub.scroll_distance_px = 0.0;
    assert!(cfg.validate().is_err());
}

#[test]
fn from_path_reports_missing_file() {
    let err = SiteConfig::from_path("/definitely/not/here/site.json").unwrap_err();
    assert!(err.to_string().contains("site.json"));
}

#[test]
fn unknown_ease_name_is_a_parse_error() {
    let err = parse(r#"{ "sequence": {}, "scrub": { "ease": "expo.inOut" } }"#).unwrap_err();
    assert!(matches!(err, ScrollreelError::Serde(_)));
    assert!(err.to_string().contains("expo.inOut"));
}
