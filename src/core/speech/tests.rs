use super::art::{BUBBLE_LINES, BUBBLE_WIDTH};
use super::{Geometry, MAX_LINE_WIDTH, RenderError, Renderer, Template, TemplateError};

fn renderer(width: usize, lines: usize) -> Renderer {
    let art = vec!["[$]"; lines].join("\n");
    Renderer::new(Template::new(&art, Geometry::new(width, lines).unwrap()).unwrap())
}

#[test]
fn two_lines_wrap_greedily() {
    let lines = renderer(10, 2).layout("hello world foo").unwrap();
    assert_eq!(lines, vec!["hello     ", "world foo "]);
}

#[test]
fn word_filling_the_line_exactly_fits() {
    let lines = renderer(5, 1).layout("hello").unwrap();
    assert_eq!(lines, vec!["hello"]);
}

#[test]
fn message_over_capacity_is_rejected() {
    let err = renderer(5, 1).render("hello world").unwrap_err();
    assert_eq!(
        err,
        RenderError::InputTooLong {
            len: 11,
            capacity: 5
        }
    );
}

#[test]
fn word_wider_than_line_is_rejected() {
    let err = renderer(4, 3).render("superlongword").unwrap_err();
    assert_eq!(
        err,
        RenderError::WordTooLong {
            word: "superlongword".to_string(),
            len: 13,
            max: 4
        }
    );
}

#[test]
fn running_out_of_lines_is_rejected() {
    // 9 chars fit the capacity of 10 but not the greedy packing.
    let err = renderer(5, 2).render("ab cde fg").unwrap_err();
    assert_eq!(err, RenderError::LayoutExhausted { line_count: 2 });
}

#[test]
fn unused_lines_are_blank_and_full_width() {
    let lines = renderer(8, 3).layout("hi").unwrap();
    assert_eq!(lines, vec!["hi      ", "        ", "        "]);
}

#[test]
fn every_line_has_the_bubble_width() {
    let r = renderer(12, 4);
    for message in [
        "",
        "a",
        "the quick brown fox jumps over the lazy dog",
        "twelve chars twelve chars",
        "double  spaced  words",
        "ünïcödé wörds cöünt as chars",
    ] {
        let lines = r.layout(message).unwrap();
        assert_eq!(lines.len(), 4, "{:?}", message);
        for line in &lines {
            assert_eq!(line.chars().count(), 12, "{:?} -> {:?}", message, line);
        }
    }
}

#[test]
fn words_keep_their_order() {
    let lines = renderer(12, 4)
        .layout("the quick brown fox jumps over the lazy dog")
        .unwrap();
    let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
    assert_eq!(
        rejoined,
        "the quick brown fox jumps over the lazy dog"
            .split(' ')
            .collect::<Vec<_>>()
    );
}

#[test]
fn markers_are_bound_in_order() {
    let art = "<$>\n<$>\n<$>";
    let r = Renderer::new(Template::from_art(art, 6).unwrap());
    let out = r.render("one two three").unwrap();
    assert_eq!(out, "<one   >\n<two   >\n<three >");
}

#[test]
fn rendering_is_repeatable() {
    let r = Renderer::default();
    let first = r.render("Make America great again").unwrap();
    let second = r.render("Make America great again").unwrap();
    assert_eq!(first, second);
}

#[test]
fn rejection_performs_no_substitution() {
    let r = Renderer::default();
    let long = "x ".repeat(BUBBLE_WIDTH * BUBBLE_LINES);
    assert!(matches!(
        r.render(&long),
        Err(RenderError::InputTooLong { .. })
    ));
}

#[test]
fn builtin_art_keeps_the_bubble_border_aligned() {
    let r = Renderer::default();
    assert_eq!(
        r.geometry(),
        Geometry {
            max_line_width: BUBBLE_WIDTH,
            line_count: BUBBLE_LINES
        }
    );
    let out = r
        .render("Sorry losers and haters, but my I.Q. is one of the highest - and you all know it!")
        .unwrap();
    let rows: Vec<&str> = out.lines().filter(|l| l.ends_with('|')).collect();
    assert_eq!(rows.len(), BUBBLE_LINES);
    let widths: Vec<usize> = rows.iter().map(|l| l.chars().count()).collect();
    assert!(widths.iter().all(|w| *w == widths[0]), "{:?}", widths);
    assert!(!out.contains('$'));
}

#[test]
fn template_with_wrong_marker_count_is_rejected() {
    let err = Template::new("$ $", Geometry::new(5, 3).unwrap()).unwrap_err();
    assert!(matches!(
        err,
        TemplateError::MarkerCount {
            expected: 3,
            found: 2
        }
    ));
}

#[test]
fn zero_geometry_is_rejected() {
    assert!(matches!(
        Template::from_art("no markers here", 10),
        Err(TemplateError::ZeroGeometry { line_count: 0, .. })
    ));
    assert!(Geometry::new(0, 2).is_err());
}

#[test]
fn oversized_width_is_rejected_before_rendering() {
    assert!(matches!(
        Template::from_art("[$]\n[$]", usize::MAX),
        Err(TemplateError::TooWide { .. })
    ));
    assert!(matches!(
        Geometry::new(MAX_LINE_WIDTH + 1, 1),
        Err(TemplateError::TooWide { .. })
    ));
}

#[test]
fn overflowing_capacity_is_rejected() {
    assert!(matches!(
        Geometry::new(MAX_LINE_WIDTH, usize::MAX),
        Err(TemplateError::TooLarge { .. })
    ));
}

#[test]
fn widest_bubble_still_renders() {
    let r = Renderer::new(Template::from_art("[$]\n[$]", MAX_LINE_WIDTH).unwrap());
    let lines = r.layout("hi").unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.chars().count() == MAX_LINE_WIDTH));
}

#[test]
fn exact_fit_mid_message_then_wraps() {
    let lines = renderer(10, 2).layout("hello abcd").unwrap();
    assert_eq!(lines, vec!["hello abcd", "          "]);

    let lines = renderer(10, 2).layout("hello abcd xyz").unwrap();
    assert_eq!(lines, vec!["hello abcd", "xyz       "]);
}

#[test]
fn say_writes_art_on_success() {
    let r = renderer(10, 2);
    let mut out = Vec::new();
    assert!(r.say("hello world", &mut out).unwrap());
    assert_eq!(String::from_utf8(out).unwrap(), "[hello     ]\n[world     ]\n");
}

#[test]
fn say_writes_diagnostic_on_rejection() {
    let r = renderer(4, 3);
    let mut out = Vec::new();
    assert!(!r.say("superlongword", &mut out).unwrap());
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("words as long as"), "{}", text);
}

#[test]
fn quiet_say_stays_silent_on_rejection() {
    let r = renderer(4, 3).quiet(true);
    let mut out = Vec::new();
    assert!(!r.say("superlongword", &mut out).unwrap());
    assert!(out.is_empty());
}
