//! Row scanner.
//!
//! Turns one row of program text into symbols. Besides plain
//! classification it recognizes:
//! - comments: from a double backtick to the end of the row
//! - quoted text between `"` or `'` pairs, kept as literal path cells
//! - operator cells: a glyph between `{}` or `[]` on the same row

use dots_ir::{Alphabet, OperatorKind, Symbol, SymbolError};

/// Starts a comment when doubled.
pub const COMMENT_MARK: char = '`';

/// A scanned row. Faulty cells read as blank so scanning can continue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScannedRow {
    pub symbols: Vec<Symbol>,
    /// Column and cause of every cell that failed to classify.
    pub errors: Vec<(usize, SymbolError)>,
}

impl ScannedRow {
    fn push(&mut self, result: Result<Symbol, SymbolError>) {
        match result {
            Ok(symbol) => self.symbols.push(symbol),
            Err(err) => {
                self.errors.push((self.symbols.len(), err));
                self.symbols.push(Symbol::BLANK);
            }
        }
    }
}

fn is_quote(glyph: char) -> bool {
    matches!(glyph, '"' | '\'')
}

/// Scan one non-directive row with the sheet's alphabet.
pub fn scan_row(alphabet: &Alphabet, line: &str) -> ScannedRow {
    let chars: Vec<char> = line.chars().collect();
    let mut row = ScannedRow {
        symbols: Vec::with_capacity(chars.len()),
        errors: Vec::new(),
    };
    let mut quote: Option<char> = None;
    let mut i = 0;
    while i < chars.len() {
        let glyph = chars[i];
        if let Some(open) = quote {
            if glyph == open {
                quote = None;
                row.push(Ok(Symbol::path(glyph)));
            } else {
                row.push(alphabet.classify_text(glyph));
            }
            i += 1;
            continue;
        }

        if glyph == COMMENT_MARK && chars.get(i + 1) == Some(&COMMENT_MARK) {
            row.symbols.resize(chars.len(), Symbol::BLANK);
            break;
        }

        if is_quote(glyph) {
            quote = Some(glyph);
            row.push(Ok(Symbol::path(glyph)));
            i += 1;
            continue;
        }

        if let Some(kind) = OperatorKind::from_open(glyph) {
            if let (Some(&op), Some(&close)) = (chars.get(i + 1), chars.get(i + 2)) {
                if close == kind.close() && !op.is_whitespace() {
                    row.push(Ok(Symbol::path(glyph)));
                    row.push(alphabet.classify_operator(op, kind));
                    row.push(Ok(Symbol::path(close)));
                    i += 3;
                    continue;
                }
            }
        }

        row.push(alphabet.classify(glyph));
        i += 1;
    }
    row
}

#[cfg(test)]
mod tests;
