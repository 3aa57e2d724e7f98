use super::*;
use pretty_assertions::assert_eq;

fn library_warp(kind: WarpKind) -> Symbol {
    let warp = WarpSymbol::new(kind, Link::Library(LibraryId::new(0)))
        .unwrap_or_else(|e| panic!("{e}"));
    Symbol::warp('F', warp)
}

// === Capability Queries ===

#[test]
fn path_symbols_have_no_other_capability() {
    let sym = Symbol::path('-');
    assert!(sym.is_path());
    assert!(!sym.is_operator());
    assert!(!sym.is_warp());
    assert!(!sym.is_library_warp());
    assert_eq!(sym.as_operator(), None);
    assert_eq!(sym.as_warp(), None);
}

#[test]
fn blank_is_a_path() {
    assert!(Symbol::BLANK.is_blank());
    assert!(Symbol::BLANK.is_path());
    assert!(!Symbol::path('.').is_blank());
    assert_eq!(Symbol::default(), Symbol::BLANK);
}

#[test]
fn operator_kinds_are_distinguished() {
    let curly = Symbol::operator('+', OperatorKind::Curly);
    let square = Symbol::operator('+', OperatorKind::Square);

    assert!(curly.is_operator() && curly.is_curly_operator() && !curly.is_square_operator());
    assert!(square.is_operator() && square.is_square_operator() && !square.is_curly_operator());
    assert_eq!(
        curly.as_operator(),
        Some(OperatorSymbol::new('+', OperatorKind::Curly))
    );
}

#[test]
fn plain_warp_is_not_a_library_warp() {
    let sym = Symbol::warp('A', WarpSymbol::plain(ScopeId::MAIN, 'A'));
    assert!(sym.is_warp());
    assert!(!sym.is_library_warp());
    assert!(!sym.is_singleton_library_warp());
    assert!(!sym.is_library_return_warp());
}

#[test]
fn capability_table_matches_warp_kind() {
    // (kind, library, singleton, return)
    let table = [
        (WarpKind::LibraryOuter, true, false, false),
        (WarpKind::LibraryInner, true, false, true),
        (WarpKind::SingletonOuter, true, true, false),
        (WarpKind::SingletonInner, true, true, true),
    ];
    for (kind, library, singleton, ret) in table {
        let sym = library_warp(kind);
        assert!(sym.is_warp(), "{kind}");
        assert_eq!(sym.is_library_warp(), library, "{kind}");
        assert_eq!(sym.is_singleton_library_warp(), singleton, "{kind}");
        assert_eq!(sym.is_library_return_warp(), ret, "{kind}");
    }
}

#[test]
fn every_return_warp_is_a_library_warp() {
    for kind in WarpKind::ALL.into_iter().filter(|k| k.is_library()) {
        let sym = library_warp(kind);
        if sym.is_library_return_warp() {
            assert!(sym.is_warp() && sym.is_library_warp(), "{kind}");
        }
        if sym.is_singleton_library_warp() {
            assert!(sym.is_library_warp(), "{kind}");
        }
    }
}

// === Construction Validation ===

#[test]
fn plain_warp_requires_local_link() {
    let err = WarpSymbol::new(WarpKind::Plain, Link::Library(LibraryId::new(3)));
    assert_eq!(
        err,
        Err(SymbolError::InvalidWarpLink {
            kind: WarpKind::Plain,
            link: "library",
        })
    );
}

#[test]
fn library_warps_require_library_link() {
    let local = Link::Local {
        scope: ScopeId::MAIN,
        glyph: 'Q',
    };
    for kind in WarpKind::ALL.into_iter().filter(|k| k.is_library()) {
        assert!(
            matches!(
                WarpSymbol::new(kind, local),
                Err(SymbolError::InvalidWarpLink { .. })
            ),
            "{kind}"
        );
    }
}

#[test]
fn library_accessor() {
    let lib = LibraryId::new(7);
    let warp = WarpSymbol::new(WarpKind::SingletonOuter, Link::Library(lib))
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(warp.library(), Some(lib));
    assert_eq!(WarpSymbol::plain(ScopeId::MAIN, 'A').library(), None);
}

#[test]
fn operator_brackets_round_trip() {
    for kind in [OperatorKind::Curly, OperatorKind::Square] {
        assert_eq!(OperatorKind::from_open(kind.open()), Some(kind));
    }
    assert_eq!(OperatorKind::from_open('('), None);
}

#[test]
fn error_messages_name_the_glyph() {
    assert_eq!(
        SymbolError::UnknownSymbol { glyph: 'Z' }.to_string(),
        "unknown symbol `Z`"
    );
    assert_eq!(
        SymbolError::DuplicateWarp {
            glyph: 'A',
            existing: WarpKind::Plain
        }
        .to_string(),
        "`A` is already declared as a plain warp"
    );
}
