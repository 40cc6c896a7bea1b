// tests/annotate_scenarios.rs
//! End-to-end behavior of the four annotator entry points.

use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use tagger::{
    annotate, annotate_clickable, annotate_with_links, annotate_with_links_clickable,
    AnnotatedText, ClickListener, Color, DelimiterSet, MatchKind, OnTagClickListener, Tagger,
    TaggerConfig, TaggerError, LINK_ELLIPSIS,
};

const LONG_LINK: &str = "https://example.com/very/long/path/that/exceeds/the/limit";

/// Inputs exercised by the property-style checks below.
const SAMPLES: &[&str] = &[
    "",
    "plain text without tokens",
    "@bob says hi",
    "#tag.",
    "#tag„next",
    "#a #b #c @d @e",
    "@a@b#c #d#e",
    "mail bob@example.com about issue#4",
    "https://a.io https://b.io/#frag @x",
    "check #news at https://verylongdomainname.example.com/a/b/c/d/e",
    "„@quoted“ and ‚#single‘ «#guillemet» (#paren)",
    "line one #first\nline two @second\r\n\thttp://third.example",
    "emoji 🎉 #party🎉 then https://ü.example/ß/päth/that/is/quite/long",
    "# not a tag, @ neither",
];

fn kinds(annotated: &AnnotatedText) -> Vec<MatchKind> {
    annotated.annotations().iter().map(|a| a.kind).collect()
}

fn slices(annotated: &AnnotatedText) -> Vec<&str> {
    annotated.spans().map(|(_, s)| s).collect()
}

fn recording_listener() -> (ClickListener, Arc<Mutex<Vec<String>>>) {
    let clicks = Arc::new(Mutex::new(Vec::new()));
    let tags = Arc::clone(&clicks);
    let links = Arc::clone(&clicks);
    let listener = ClickListener::new()
        .on_tag(move |tag| tags.lock().unwrap().push(format!("tag:{}", tag)))
        .on_link(move |link| links.lock().unwrap().push(format!("link:{}", link)));
    (listener, clicks)
}

#[test]
fn annotations_are_sorted_and_disjoint() {
    let tagger = Tagger::new(TaggerConfig::default().with_max_link_length(10)).unwrap();
    for text in SAMPLES {
        let annotated = tagger.annotate_with_links(*text, Color::BLUE);
        let displayed_len = annotated.text().chars().count();
        let mut previous_end = 0;
        for annotation in annotated.annotations() {
            assert!(annotation.start < annotation.end, "empty range in {:?}", text);
            assert!(annotation.start >= previous_end, "overlap in {:?}", text);
            assert!(annotation.end <= displayed_len, "out of bounds in {:?}", text);
            previous_end = annotation.end;
        }
    }
}

#[test]
fn annotating_twice_gives_identical_results() {
    for text in SAMPLES {
        assert_eq!(
            annotate_with_links(*text, Color::RED),
            annotate_with_links(*text, Color::RED)
        );
        assert_eq!(annotate(*text, Color::RED), annotate(*text, Color::RED));
    }
}

#[test]
fn tags_only_entry_point_keeps_text_verbatim() {
    for text in SAMPLES {
        assert_eq!(annotate(*text, Color::RED).text(), *text);
    }
}

#[test]
fn each_token_kind_is_annotated_once() {
    let tagger = Tagger::new(TaggerConfig::default().with_max_link_length(20)).unwrap();
    let (listener, _) = recording_listener();
    let text = format!("@alice likes #topic: {}", LONG_LINK);
    let annotated = tagger
        .annotate_with_links_clickable(text.as_str(), Color::GREEN, &listener)
        .unwrap();

    assert_eq!(
        kinds(&annotated),
        vec![MatchKind::Mention, MatchKind::Hashtag, MatchKind::Link]
    );
    let link = &annotated.annotations()[2];
    assert_eq!(link.len(), 20 + LINK_ELLIPSIS.len());
    assert_eq!(link.payload.as_deref(), Some(LONG_LINK));
    assert_eq!(
        slices(&annotated),
        vec!["@alice", "#topic", "https://example.com/..."]
    );
}

#[test]
fn mention_at_start_of_text() {
    let annotated = annotate("@bob says hi", Color::BLUE);
    assert_eq!(annotated.annotations()[0].range(), 0..4);
}

#[test]
fn trailing_punctuation_is_excluded() {
    let annotated = annotate("#tag.", Color::BLUE);
    assert_eq!(slices(&annotated), vec!["#tag"]);
}

#[test]
fn unicode_quote_ends_a_hashtag() {
    let annotated = annotate("#tag„next", Color::BLUE);
    assert_eq!(slices(&annotated), vec!["#tag"]);
    assert_eq!(annotated.annotations()[0].range(), 0..4);
}

#[test]
fn every_punctuation_terminator_ends_a_tag() {
    let text = "@a*b #c+d #e=f #g%h #i&j #k<l #m>n #o~p #q´r #s`t #u°v #w§x #y”z";
    let annotated = annotate(text, Color::BLUE);
    assert_eq!(
        slices(&annotated),
        vec!["@a", "#c", "#e", "#g", "#i", "#k", "#m", "#o", "#q", "#s", "#u", "#w", "#y"]
    );
}

#[test]
fn tags_need_a_whitespace_or_start_boundary() {
    let annotated = annotate("„@quoted“ (#paren) bob@example.com issue#4", Color::BLUE);
    assert!(annotated.annotations().is_empty());
}

#[test]
fn empty_and_absent_input() {
    let (listener, _) = recording_listener();
    assert!(annotate(None, Color::BLUE).annotations().is_empty());
    assert!(annotate("", Color::BLUE).is_empty());
    let annotated = annotate_with_links_clickable(None, Color::BLUE, &listener).unwrap();
    assert_eq!(annotated.text(), "");
    assert_eq!(annotated.activate(0), None);
}

#[test]
fn concrete_news_scenario() {
    let tagger = Tagger::new(TaggerConfig::default().with_max_link_length(20)).unwrap();
    let (listener, clicks) = recording_listener();
    let annotated = tagger
        .annotate_with_links_clickable(
            "check #news at https://verylongdomainname.example.com/a/b/c/d/e",
            Color::BLUE,
            &listener,
        )
        .unwrap();

    assert_eq!(annotated.text(), "check #news at https://verylongdoma...");
    assert_eq!(slices(&annotated), vec!["#news", "https://verylongdoma..."]);
    assert_eq!(annotated.annotations()[0].range(), 6..11);
    assert_eq!(annotated.annotations()[1].range(), 15..38);

    assert_eq!(annotated.activate(37), Some(MatchKind::Link));
    assert_eq!(annotated.activate(6), Some(MatchKind::Hashtag));
    assert_eq!(annotated.activate(12), None);
    assert_eq!(
        *clicks.lock().unwrap(),
        vec![
            "link:https://verylongdomainname.example.com/a/b/c/d/e".to_string(),
            "tag:news".to_string(),
        ]
    );
}

#[test]
fn protocol_stripping_changes_display_only() {
    let config = TaggerConfig::default()
        .with_max_link_length(20)
        .with_protocol_stripped(true);
    let tagger = Tagger::new(config).unwrap();
    let (listener, _) = recording_listener();
    let annotated = tagger
        .annotate_with_links_clickable(
            "Go to http://example.org/some/really/long/path?x=1 #now",
            Color::BLUE,
            &listener,
        )
        .unwrap();

    assert_eq!(annotated.text(), "Go to example.org/some/rea... #now");
    assert_eq!(annotated.annotations()[0].range(), 6..29);
    assert_eq!(
        annotated.annotations()[0].payload.as_deref(),
        Some("http://example.org/some/really/long/path?x=1")
    );
    assert_eq!(annotated.annotations()[1].range(), 30..34);
}

#[test]
fn several_truncated_links_keep_later_offsets_valid() {
    let tagger = Tagger::new(TaggerConfig::default().with_max_link_length(12)).unwrap();
    let text = "https://first.example/aaaa https://second.example/bbbb #end";
    let annotated = tagger.annotate_with_links(text, Color::BLUE);

    assert_eq!(
        annotated.text(),
        "https://firs... https://seco... #end"
    );
    assert_eq!(
        slices(&annotated),
        vec!["https://firs...", "https://seco...", "#end"]
    );
}

#[test]
fn multibyte_text_uses_char_offsets() {
    let tagger = Tagger::new(TaggerConfig::default().with_max_link_length(16)).unwrap();
    let annotated = tagger.annotate_with_links(
        "emoji 🎉 #party🎉 then https://ü.example/ß/päth/that/is/quite/long",
        Color::BLUE,
    );
    assert_eq!(annotated.annotations()[0].range(), 8..15);
    assert_eq!(slices(&annotated), vec!["#party🎉", "https://ü.exampl..."]);
}

#[test]
fn sigil_inclusion_is_configurable() {
    let (listener, clicks) = recording_listener();
    let default = annotate_clickable("@ann #x", Color::BLUE, &listener).unwrap();
    default.activate(0);

    let tagger = Tagger::new(TaggerConfig::default().with_sigil_in_payload(true)).unwrap();
    let with_sigil = tagger
        .annotate_clickable("@ann #x", Color::BLUE, &listener)
        .unwrap();
    with_sigil.activate(5);

    assert_eq!(
        *clicks.lock().unwrap(),
        vec!["tag:ann".to_string(), "tag:#x".to_string()]
    );
}

#[test]
fn color_only_output_has_no_payloads() {
    let annotated = annotate_with_links("@a https://b.io", Color::PINK);
    assert!(!annotated.is_clickable());
    for annotation in annotated.annotations() {
        assert_eq!(annotation.payload, None);
        assert_eq!(annotation.color, Color::PINK);
    }
    assert_eq!(annotated.activate(0), None);
}

#[test]
fn incomplete_listener_is_rejected() {
    let tag_only = ClickListener::new().on_tag(|_| {});
    let err = annotate_with_links_clickable("#x", Color::BLUE, &tag_only).unwrap_err();
    match err {
        TaggerError::InvalidArgument { argument, reason } => {
            assert_eq!(argument, "listener");
            assert!(reason.contains("on_link"));
        }
        other => panic!("unexpected error: {other}"),
    }

    let nothing = ClickListener::new();
    assert!(annotate_clickable("#x", Color::BLUE, &nothing).is_err());
}

#[test]
fn trait_listener_receives_both_kinds() {
    #[derive(Default)]
    struct Timeline {
        opened: Mutex<Vec<String>>,
    }

    impl OnTagClickListener for Timeline {
        fn on_tag_click(&self, tag: &str) {
            self.opened.lock().unwrap().push(format!("search {}", tag));
        }

        fn on_link_click(&self, link: &str) {
            self.opened.lock().unwrap().push(format!("browse {}", link));
        }
    }

    let timeline = Arc::new(Timeline::default());
    let listener = ClickListener::from(Arc::clone(&timeline));
    let annotated =
        annotate_with_links_clickable("#rust https://www.rust-lang.org", Color::BLUE, &listener)
            .unwrap();

    annotated.activate(1);
    annotated.activate(10);
    assert_eq!(
        *timeline.opened.lock().unwrap(),
        vec![
            "search rust".to_string(),
            "browse https://www.rust-lang.org".to_string()
        ]
    );
}

#[test]
fn extra_delimiters_shorten_tags() {
    let config =
        TaggerConfig::default().with_delimiters(DelimiterSet::default().with(['_', '$']));
    let tagger = Tagger::new(config).unwrap();
    let annotated = tagger.annotate("#snake_case @dollar$sign", Color::BLUE);
    assert_eq!(slices(&annotated), vec!["#snake", "@dollar"]);
}
