use bill_core::{flow_text, wrap_words, Flow, TextMeasurer, TextStyle};

/// Every character is half the font size wide.
struct Mono;

impl TextMeasurer for Mono {
    fn text_width(&self, text: &str, style: TextStyle) -> f64 {
        text.chars().count() as f64 * style.font_size * 0.5
    }
}

fn style() -> TextStyle {
    // 5 px per character with Mono
    TextStyle::regular(10.0)
}

#[test]
fn text_at_exact_width_stays_on_one_line() {
    let flow = flow_text("abcd", style(), 20.0, &Mono);
    assert_eq!(flow, Flow::SingleLine("abcd".to_string()));
}

#[test]
fn text_one_pixel_too_wide_wraps() {
    let flow = flow_text("ab cd", style(), 24.0, &Mono);
    let expected = vec!["ab".to_string(), "cd".to_string()];
    assert_eq!(flow, Flow::Wrapped(expected));
}

#[test]
fn words_join_while_width_is_at_most_limit() {
    // "aa bb" is exactly 25 px
    let lines = wrap_words("aa bb cc", style(), 25.0, &Mono);
    assert_eq!(lines, vec!["aa bb", "cc"]);
}

#[test]
fn every_wrapped_line_fits() {
    let text = "(Calculado   480,00   kWh   24   Dias de Julho)";
    let lines = wrap_words(text, style(), 60.0, &Mono);
    assert!(lines.len() >= 2);
    for line in &lines {
        let width = Mono.text_width(line, style());
        assert!(width <= 60.0, "{:?} too wide", line);
    }
    assert_eq!(lines.join(" "), "(Calculado 480,00 kWh 24 Dias de Julho)");
}

#[test]
fn oversized_first_word_flushes_empty_line() {
    let lines = wrap_words("abcdefgh ij", style(), 20.0, &Mono);
    assert_eq!(lines, vec!["", "abcdefgh", "ij"]);
}

#[test]
fn whitespace_runs_collapse() {
    let lines = wrap_words("a   b\tc", style(), 100.0, &Mono);
    assert_eq!(lines, vec!["a b c"]);
}

#[test]
fn empty_text_has_no_lines() {
    assert!(wrap_words("   ", style(), 100.0, &Mono).is_empty());
}

#[test]
fn flow_lines_in_order() {
    let flow = Flow::Wrapped(vec!["one".to_string(), "two".to_string()]);
    assert_eq!(flow.lines(), vec!["one", "two"]);
    assert_eq!(Flow::SingleLine("x".to_string()).lines(), vec!["x"]);
}
