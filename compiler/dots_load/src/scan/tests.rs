use super::*;
use dots_ir::{ScopeId, SymbolClass};
use pretty_assertions::assert_eq;

fn alphabet() -> Alphabet {
    let mut alphabet = Alphabet::new(ScopeId::MAIN);
    alphabet.declare_plain_warp('A').unwrap();
    alphabet
}

fn glyphs(row: &ScannedRow) -> String {
    row.symbols.iter().map(|s| s.glyph()).collect()
}

#[test]
fn track_and_warps() {
    let row = scan_row(&alphabet(), ".-A-|");
    assert_eq!(glyphs(&row), ".-A-|");
    assert!(row.symbols[2].is_warp());
    assert!(row.errors.is_empty());
}

#[test]
fn curly_and_square_operators() {
    let row = scan_row(&alphabet(), "-{*}-[s]-");
    assert!(row.symbols[2].is_curly_operator());
    assert!(row.symbols[6].is_square_operator());
    assert!(row.symbols[1].is_path());
    assert!(row.symbols[3].is_path());
    assert_eq!(row.symbols.len(), 9);
}

#[test]
fn operator_glyph_may_be_a_warp_glyph() {
    let row = scan_row(&alphabet(), "{A}");
    assert!(row.symbols[1].is_operator());
}

#[test]
fn unclosed_bracket_is_track() {
    let row = scan_row(&alphabet(), "{*-");
    assert_eq!(row.symbols[0].class(), SymbolClass::Path);
    assert_eq!(row.symbols[1].class(), SymbolClass::Path);
    assert!(row.errors.is_empty());
}

#[test]
fn blank_between_brackets_is_track() {
    let row = scan_row(&alphabet(), "{ }");
    assert!(row.symbols.iter().all(|s| s.is_path()));
}

#[test]
fn quoted_text_is_literal() {
    let row = scan_row(&alphabet(), "\"Hi A\"-'Q'");
    assert!(row.errors.is_empty());
    assert!(row.symbols.iter().all(|s| s.is_path()));
    assert_eq!(glyphs(&row), "\"Hi A\"-'Q'");
}

#[test]
fn comment_blanks_rest_of_row() {
    let row = scan_row(&alphabet(), "A-`` not code: Q");
    assert!(row.errors.is_empty());
    assert_eq!(row.symbols.len(), 16);
    assert!(row.symbols[2..].iter().all(|s| s.is_blank()));
    assert!(row.symbols[0].is_warp());
}

#[test]
fn backticks_inside_quotes_are_text() {
    let row = scan_row(&alphabet(), "'``'A");
    assert!(row.symbols[4].is_warp());
}

#[test]
fn unknown_symbols_are_collected() {
    let row = scan_row(&alphabet(), "Q-Z");
    assert_eq!(
        row.errors,
        vec![
            (0, SymbolError::UnknownSymbol { glyph: 'Q' }),
            (2, SymbolError::UnknownSymbol { glyph: 'Z' }),
        ]
    );
    assert_eq!(row.symbols.len(), 3);
    assert!(row.symbols[0].is_blank());
}

#[test]
fn columns_count_chars() {
    let row = scan_row(&alphabet(), "•-Q");
    assert_eq!(row.errors[0].0, 2);
}
