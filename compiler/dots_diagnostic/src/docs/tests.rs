use super::*;

#[test]
fn every_code_is_documented() {
    for code in ErrorCode::ALL {
        assert!(ErrorDocs::has_docs(*code), "{code} has no docs");
    }
}

#[test]
fn docs_start_with_their_code() {
    for code in ErrorDocs::all_codes() {
        let doc = ErrorDocs::get(code).unwrap_or_default();
        assert!(
            doc.starts_with(&format!("# {code}:")),
            "{code} docs have the wrong heading"
        );
    }
}

#[test]
fn deprecated_operator_doc_lists_replacements() {
    let doc = ErrorDocs::get(ErrorCode::E2001).unwrap_or_default();
    for pair in ["÷  ->  /", "≠  ->  !", "≤  ->  L", "≥  ->  G"] {
        assert!(doc.contains(pair), "missing `{pair}`");
    }
}
