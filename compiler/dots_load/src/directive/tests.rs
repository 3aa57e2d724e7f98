use super::*;
use pretty_assertions::assert_eq;

#[test]
fn plain_warps_with_columns() {
    assert_eq!(
        Directive::parse("%$AB D"),
        Ok(Directive::Warps(vec![(2, 'A'), (3, 'B'), (5, 'D')]))
    );
}

#[test]
fn plain_warps_need_a_glyph() {
    assert!(Directive::parse("%$").is_err());
    assert!(Directive::parse("%$   ").is_err());
}

#[test]
fn import() {
    assert_eq!(
        Directive::parse("%!counter.dots C"),
        Ok(Directive::Import {
            name: "counter.dots".to_owned(),
            glyph: 'C',
            col: 15,
        })
    );
}

#[test]
fn glyph_columns_count_chars_not_bytes() {
    assert_eq!(
        Directive::parse("%!bibliothèque Ω"),
        Ok(Directive::Import {
            name: "bibliothèque".to_owned(),
            glyph: 'Ω',
            col: 15,
        })
    );
    assert_eq!(
        Directive::parse("%^ λ"),
        Ok(Directive::Entry { glyph: 'λ', col: 3 })
    );
}

#[test]
fn import_needs_name_and_one_glyph() {
    assert!(Directive::parse("%!lib").is_err());
    assert!(Directive::parse("%!lib CD").is_err());
    assert!(Directive::parse("%!lib C D").is_err());
}

#[test]
fn entry() {
    assert_eq!(
        Directive::parse("%^R"),
        Ok(Directive::Entry { glyph: 'R', col: 2 })
    );
    assert_eq!(
        Directive::parse("%^ R "),
        Ok(Directive::Entry { glyph: 'R', col: 3 })
    );
    assert!(Directive::parse("%^").is_err());
    assert!(Directive::parse("%^RS").is_err());
}

#[test]
fn singleton() {
    assert_eq!(Directive::parse("%+"), Ok(Directive::Singleton));
    assert_eq!(Directive::parse("%+  "), Ok(Directive::Singleton));
    assert!(Directive::parse("%+X").is_err());
}

#[test]
fn unknown_directive() {
    assert_eq!(
        Directive::parse("%?x"),
        Err("unknown directive `%?`".to_owned())
    );
    assert!(Directive::parse("%").is_err());
}

#[test]
fn detection() {
    assert!(Directive::is_directive("%$A"));
    assert!(!Directive::is_directive(" %$A"));
    assert!(!Directive::is_directive(""));
}
