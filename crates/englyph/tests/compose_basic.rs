use englyph::{
    builtin, compose, compose_spans, test_support::BufferTarget, Align, CharacterGlyph, Color,
    FaceStore, GlyphFace, GlyphRows, HAlign, Segment, Style, StyledCellRun, VAlign,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn lines(text: &str) -> Vec<String> {
    let face = builtin::default_face().unwrap();
    compose(&face, text, Style::default())
        .unwrap()
        .to_plain_lines()
}

#[test]
fn tracking_separates_letters() {
    assert_eq!(lines("HI"), vec!["█ █ ▀█▀", "█▀█  █ ", "▀ ▀ ▀▀▀"]);
}

#[test]
fn adjacent_pairs_touch() {
    assert_eq!(lines("TA"), vec!["▀█▀▄▀▄", " █ █▀█", " ▀ ▀ ▀"]);
}

#[test]
fn short_glyphs_center_vertically() {
    let store = FaceStore::new(builtin::source());
    let face = store
        .load_merged("seven_segment", builtin::DEFAULT_FAMILY)
        .unwrap();
    let run = face.compose("1:", Style::default()).unwrap();
    assert_eq!(run.to_plain_lines(), vec!["  ╻  ", "  ┃ ╻", "  ╹ ╹"]);
}

#[test]
fn spans_keep_their_styles() {
    let face = builtin::default_face().unwrap();
    let red = Style::new(Color::Rgb(255, 0, 0), Color::Default);
    let spans = [Segment::new("|", red), Segment::new("|", red.bold())];
    let run = compose_spans(&face, &spans).unwrap();
    assert_eq!(run.height(), 3);
    for row in run.rows() {
        assert_eq!(row.len(), 2);
        assert!(!row[0].style.bold);
        assert!(row[1].style.bold);
        assert_eq!(row[1].style.fg, Color::Rgb(255, 0, 0));
    }
    assert_eq!(run.to_plain_lines(), vec!["│ ┃", "│ ┃", "│ ┃"]);
}

#[test]
fn decorations_land_on_face_rows() {
    let face = builtin::default_face().unwrap();
    let style = Style::new(Color::Rgb(0, 128, 255), Color::Rgb(0, 0, 0))
        .underline()
        .overline();
    let run = compose(&face, "A", style).unwrap();
    let styles: Vec<Style> = run.rows().iter().map(|r| r[0].style).collect();
    assert_eq!(
        styles.iter().map(|s| s.underline).collect::<Vec<_>>(),
        vec![false, false, true]
    );
    assert_eq!(
        styles.iter().map(|s| s.overline).collect::<Vec<_>>(),
        vec![true, false, false]
    );
    assert!(styles
        .iter()
        .all(|s| s.fg == Color::Rgb(0, 128, 255) && s.bg == Color::Rgb(0, 0, 0)));
}

#[test]
fn render_to_replays_cells() {
    let face = builtin::default_face().unwrap();
    let run = compose(&face, "OK", Style::default().italic()).unwrap();
    let mut target = BufferTarget::new();
    run.render_to(&mut target).unwrap();
    assert_eq!(target.text(), run.to_plain_lines());
    assert_eq!(target.width_hint, Some(run.width()));
    assert!(target.lines.iter().flatten().all(|c| c.style.italic));
}

#[test]
fn empty_text_still_has_face_height() {
    let run = builtin::default_face()
        .unwrap()
        .compose("", Style::default())
        .unwrap();
    assert_eq!(run.height(), 3);
    assert_eq!(run.width(), 0);
}

fn arb_align() -> impl Strategy<Value = Align> {
    (
        prop_oneof![Just(HAlign::Left), Just(HAlign::Center), Just(HAlign::Right)],
        prop_oneof![Just(VAlign::Top), Just(VAlign::Center), Just(VAlign::Bottom)],
    )
        .prop_map(|(h, v)| Align::new(h, v))
}

fn arb_glyph() -> impl Strategy<Value = CharacterGlyph> {
    (
        prop::collection::vec("[a-z#▀█ ]{0,5}", 0..6),
        prop::option::of(1usize..6),
        prop::option::of(0usize..6),
        prop::option::of(any::<bool>()),
        prop::option::of(arb_align()),
    )
        .prop_map(|(rows, lines, columns, kerning, align)| CharacterGlyph {
            glyph: GlyphRows::Flat(rows),
            lines,
            columns,
            kerning,
            align,
            ..CharacterGlyph::new(&[])
        })
}

fn arb_face() -> impl Strategy<Value = GlyphFace> {
    (
        1usize..6,
        0usize..6,
        arb_align(),
        -2.0f64..3.0,
        any::<bool>(),
        prop::collection::hash_map(prop::char::range('a', 'h'), arb_glyph(), 0..8),
        prop::collection::hash_set((prop::char::range('a', 'h'), prop::char::range('a', 'h')), 0..4),
    )
        .prop_map(|(lines, columns, align, tracking, monospace, glyphs, pairs)| {
            let mut face = GlyphFace::new("random", "block/test");
            face.fixed_lines = Some(lines);
            face.fixed_columns = Some(columns);
            face.align = Some(align);
            face.tracking = Some(tracking);
            face.monospace = Some(monospace);
            face.antiadjacent_pairs = pairs;
            face.characters = Some(glyphs.into_iter().collect());
            face
        })
}

fn assert_rectangular(run: &StyledCellRun, lines: usize) -> Result<(), TestCaseError> {
    prop_assert_eq!(run.height(), lines);
    for row in run.rows() {
        let width: usize = row.iter().map(Segment::width).sum();
        prop_assert_eq!(width, run.width());
    }
    Ok(())
}

proptest! {
    #[test]
    fn composed_rows_share_height_and_width(
        face in arb_face(),
        text in "[a-kA-Z é中😀\u{2}]{1,12}",
        bold in any::<bool>(),
    ) {
        let style = if bold { Style::default().bold() } else { Style::default() };
        let run = compose(&face, &text, style).unwrap();
        assert_rectangular(&run, face.fixed_lines.unwrap())?;
    }

    #[test]
    fn builtin_rows_share_width(text in "\\PC{1,12}") {
        let face = builtin::default_face().unwrap();
        let run = compose(&face, &text, Style::default()).unwrap();
        assert_rectangular(&run, 3)?;
    }
}
