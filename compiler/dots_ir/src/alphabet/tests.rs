use super::*;
use pretty_assertions::assert_eq;

fn with_warps(glyphs: &str) -> Alphabet {
    let mut alphabet = Alphabet::default();
    for glyph in glyphs.chars() {
        alphabet
            .declare_plain_warp(glyph)
            .unwrap_or_else(|e| panic!("{e}"));
    }
    alphabet
}

// === Path Alphabet ===

#[test]
fn every_path_glyph_classifies_as_path() {
    let alphabet = Alphabet::default();
    for glyph in PATH_GLYPHS.chars() {
        let sym = alphabet.classify(glyph).unwrap_or_else(|e| panic!("{e}"));
        assert!(sym.is_path(), "`{glyph}`");
        assert_eq!(sym.glyph(), glyph);
    }
}

#[test]
fn undeclared_letter_is_unknown() {
    let alphabet = Alphabet::default();
    assert_eq!(
        alphabet.classify('A'),
        Err(SymbolError::UnknownSymbol { glyph: 'A' })
    );
}

#[test]
fn deprecated_operator_glyph_is_unknown_outside_brackets() {
    let alphabet = Alphabet::default();
    assert_eq!(
        alphabet.classify('÷'),
        Err(SymbolError::UnknownSymbol { glyph: '÷' })
    );
}

#[test]
fn tab_is_unknown() {
    assert_eq!(
        Alphabet::default().classify('\t'),
        Err(SymbolError::UnknownSymbol { glyph: '\t' })
    );
}

// === Warp Declarations ===

#[test]
fn declared_plain_warp_classifies_as_warp() {
    let alphabet = with_warps("AB");
    let sym = alphabet.classify('A').unwrap_or_else(|e| panic!("{e}"));
    assert!(sym.is_warp());
    assert_eq!(sym.as_warp(), Some(WarpSymbol::plain(ScopeId::MAIN, 'A')));
    assert_eq!(alphabet.warp_count(), 2);
}

#[test]
fn path_glyph_cannot_be_a_warp() {
    let mut alphabet = Alphabet::default();
    assert_eq!(
        alphabet.declare_plain_warp('v'),
        Err(SymbolError::ReservedGlyph { glyph: 'v' })
    );
    assert_eq!(
        alphabet.declare_plain_warp(' '),
        Err(SymbolError::ReservedGlyph { glyph: ' ' })
    );
}

#[test]
fn duplicate_declaration_is_rejected() {
    let mut alphabet = with_warps("A");
    assert_eq!(
        alphabet.declare_library_warp('A', WarpKind::LibraryOuter, LibraryId::new(0)),
        Err(SymbolError::DuplicateWarp {
            glyph: 'A',
            existing: WarpKind::Plain,
        })
    );
}

#[test]
fn library_declaration_rejects_plain_kind() {
    let mut alphabet = Alphabet::default();
    assert!(matches!(
        alphabet.declare_library_warp('L', WarpKind::Plain, LibraryId::new(0)),
        Err(SymbolError::InvalidWarpLink { .. })
    ));
    assert_eq!(alphabet.warp('L'), None);
}

#[test]
fn scopes_keep_plain_links_apart() {
    let mut main = Alphabet::new(ScopeId::MAIN);
    let mut lib = Alphabet::new(ScopeId::new(1));
    let a = main.declare_plain_warp('A').unwrap_or_else(|e| panic!("{e}"));
    let b = lib.declare_plain_warp('A').unwrap_or_else(|e| panic!("{e}"));
    assert_ne!(a.link(), b.link());
}

// === Operators and Text ===

#[test]
fn operator_context_accepts_letters_and_aliases() {
    let alphabet = with_warps("x");
    for glyph in ['x', '+', '÷', 'Q'] {
        let sym = alphabet
            .classify_operator(glyph, OperatorKind::Square)
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(sym.is_square_operator(), "`{glyph}`");
    }
}

#[test]
fn operator_context_rejects_whitespace() {
    assert_eq!(
        Alphabet::default().classify_operator(' ', OperatorKind::Curly),
        Err(SymbolError::UnknownSymbol { glyph: ' ' })
    );
}

#[test]
fn quoted_text_is_literal_path() {
    let alphabet = with_warps("A");
    let sym = alphabet.classify_text('A').unwrap_or_else(|e| panic!("{e}"));
    assert!(sym.is_path());
    assert_eq!(sym.glyph(), 'A');
}

#[allow(
    clippy::arc_with_non_send_sync,
    reason = "proptest macros internally use Arc"
)]
mod proptest_classify {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn classification_is_deterministic(glyph in any::<char>()) {
            let alphabet = with_warps("ABCxyz");
            let first = alphabet.classify(glyph);
            let second = alphabet.classify(glyph);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn classification_is_total_over_the_alphabet(
            glyph in proptest::sample::select(PATH_GLYPHS.chars().chain("ABCxyz".chars()).collect::<Vec<_>>())
        ) {
            let alphabet = with_warps("ABCxyz");
            prop_assert!(alphabet.classify(glyph).is_ok());
        }

        #[test]
        fn capability_queries_are_consistent(glyph in any::<char>()) {
            let alphabet = with_warps("ABC");
            if let Ok(sym) = alphabet.classify(glyph) {
                let tags = [sym.is_path(), sym.is_operator(), sym.is_warp()];
                prop_assert_eq!(tags.iter().filter(|t| **t).count(), 1);
                if sym.is_library_return_warp() || sym.is_singleton_library_warp() {
                    prop_assert!(sym.is_library_warp());
                }
                if sym.is_library_warp() {
                    prop_assert!(sym.is_warp());
                }
            }
        }
    }
}
