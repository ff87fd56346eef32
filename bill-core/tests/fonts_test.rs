use bill_core::{FontWeight, TextMeasurer, TextStyle, TrueTypeFace, Typeface};

fn builtin() -> TrueTypeFace {
    TrueTypeFace::builtin().unwrap()
}

#[test]
fn style_constructors() {
    assert_eq!(TextStyle::bold(28.0).weight, FontWeight::Bold);
    assert_eq!(TextStyle::regular(22.0).weight, FontWeight::Regular);
    assert_eq!(TextStyle::default(), TextStyle::regular(12.0));
}

#[test]
fn builtin_face_is_dejavu_sans() {
    assert_eq!(builtin().name(), "DejaVu Sans");
}

#[test]
fn builtin_face_covers_portuguese_letters() {
    let face = builtin();
    for ch in "çãõéêóôúÁÇÃ".chars() {
        assert!(face.has_glyph(ch), "{} missing", ch);
    }
}

#[test]
fn measure_text_empty() {
    assert_eq!(builtin().text_width("", TextStyle::bold(28.0)), 0.0);
}

#[test]
fn width_is_sum_of_characters() {
    let face = builtin();
    let style = TextStyle::bold(28.0);
    let whole = face.text_width("R$ 92,51", style);
    let parts = face.text_width("R$ ", style) + face.text_width("92,51", style);
    assert!((whole - parts).abs() < 1e-9);
}

#[test]
fn width_scales_with_size() {
    let face = builtin();
    let small = face.text_width("R$ 1.234,50", TextStyle::bold(14.0));
    let large = face.text_width("R$ 1.234,50", TextStyle::bold(28.0));
    assert!((large - 2.0 * small).abs() < 1e-9);
}

#[test]
fn digits_share_one_advance() {
    let face = builtin();
    let style = TextStyle::bold(28.0);
    let one = face.text_width("1", style);
    for digit in "0123456789".chars() {
        let width = face.text_width(&digit.to_string(), style);
        assert!((width - one).abs() < 1e-9);
    }
}

#[test]
fn ascent_follows_font_size() {
    let face = builtin();
    let ascent = face.ascent(TextStyle::bold(36.0));
    assert!(ascent > 18.0 && ascent < 36.0);
    let doubled = face.ascent(TextStyle::bold(72.0));
    assert!((doubled - 2.0 * ascent).abs() < 1e-9);
}
