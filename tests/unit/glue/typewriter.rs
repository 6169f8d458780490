use super::*;

fn writer(strings: &[&str]) -> Typewriter {
    Typewriter::new(TypewriterConfig {
        strings: strings.iter().map(|s| s.to_string()).collect(),
        type_delay_ms: 10,
        delete_delay_ms: 5,
        pause_ms: 100,
        looped: true,
    })
    .unwrap()
}

#[test]
fn types_pauses_and_deletes() {
    let w = writer(&["abcd"]);
    // 4 chars: 40 ms typing, 100 ms pause, 20 ms deleting.
    assert_eq!(w.cycle_ms(), 160);

    let f = w.frame_at(0);
    assert_eq!((f.phase, f.text.as_str()), (TypewriterPhase::Typing, ""));
    assert_eq!(w.frame_at(25).text, "ab");
    let f = w.frame_at(40);
    assert_eq!((f.phase, f.text.as_str()), (TypewriterPhase::Pausing, "abcd"));
    assert_eq!(w.frame_at(139).text, "abcd");
    let f = w.frame_at(140);
    assert_eq!((f.phase, f.text.as_str()), (TypewriterPhase::Deleting, "abcd"));
    assert_eq!(w.frame_at(146).text, "abc");
    assert_eq!(w.frame_at(159).text, "a");
}

#[test]
fn advances_and_loops_through_strings() {
    let w = writer(&["ab", "xyz"]);
    // "ab": 20 + 100 + 10 = 130; "xyz": 30 + 100 + 15 = 145.
    assert_eq!(w.cycle_ms(), 275);
    assert_eq!(w.frame_at(129).string_index, 0);
    let f = w.frame_at(130 + 20);
    assert_eq!((f.string_index, f.text.as_str()), (1, "xy"));
    let f = w.frame_at(275 + 15);
    assert_eq!((f.string_index, f.text.as_str()), (0, "a"));
}

#[test]
fn non_looping_script_finishes_empty() {
    let mut config = TypewriterConfig {
        strings: vec!["hi".to_string()],
        ..Default::default()
    };
    config.looped = false;
    let w = Typewriter::new(config).unwrap();
    let f = w.frame_at(w.cycle_ms() + 1);
    assert_eq!(f.phase, TypewriterPhase::Done);
    assert!(f.text.is_empty());
}

#[test]
fn markup_is_atomic_and_balanced() {
    let w = writer(&["go <span class=\"dim\">- AK</span>"]);
    // Visible characters: "go - AK" (7).
    assert_eq!(w.frame_at(30).text, "go ");
    assert_eq!(
        w.frame_at(40).text,
        "go <span class=\"dim\">-</span>"
    );
    assert_eq!(
        w.frame_at(70).text,
        "go <span class=\"dim\">- AK</span>"
    );
}

#[test]
fn stray_angle_bracket_is_text() {
    let w = writer(&["a<b"]);
    assert_eq!(w.frame_at(30).text, "a<b");
}

#[test]
fn empty_script_is_done() {
    let w = writer(&[]);
    assert_eq!(w.frame_at(1234).phase, TypewriterPhase::Done);
}

#[test]
fn zero_delays_are_rejected() {
    let config = TypewriterConfig {
        type_delay_ms: 0,
        ..Default::default()
    };
    assert!(Typewriter::new(config).is_err());
}

#[test]
fn less_than_sign_in_text_is_typed() {
    let w = writer(&["1 < 2 <b>yes</b>"]);
    // Visible characters: "1 < 2 yes" (9).
    assert_eq!(w.cycle_ms(), 90 + 100 + 45);
    assert_eq!(w.frame_at(30).text, "1 <");
    assert_eq!(w.frame_at(60).text, "1 < 2 ");
    assert_eq!(w.frame_at(70).text, "1 < 2 <b>y</b>");
    assert_eq!(w.frame_at(90).text, "1 < 2 <b>yes</b>");
}

#[test]
fn unterminated_or_nameless_brackets_are_text() {
    let w = writer(&["<<i>a</i>", "< >x"]);
    assert_eq!(w.frame_at(20).text, "<<i>a</i>");
    // "< >x" follows after 20 + 100 + 10.
    assert_eq!(w.frame_at(130 + 40).text, "< >x");
}

#[test]
fn huge_delays_saturate_instead_of_overflowing() {
    let config = TypewriterConfig {
        strings: vec!["abc".to_string(), "de".to_string()],
        type_delay_ms: u64::MAX / 2,
        ..Default::default()
    };
    config.validate().unwrap();
    let w = Typewriter::new(config).unwrap();
    assert_eq!(w.cycle_ms(), u64::MAX);
    let f = w.frame_at(10);
    assert_eq!((f.phase, f.text.as_str()), (TypewriterPhase::Typing, ""));
    assert_eq!(f.string_index, 0);
}
