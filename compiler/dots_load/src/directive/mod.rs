//! Directive lines.
//!
//! A row starting with `%` configures its sheet instead of holding track:
//!
//! | line        | meaning                                        |
//! |-------------|------------------------------------------------|
//! | `%$ABC`     | `A`, `B`, `C` are plain warps                  |
//! | `%!name G`  | import library `name`, called through `G`      |
//! | `%^G`       | `G` is this library's entry and return warp    |
//! | `%+`        | this library is a singleton                    |

/// Marks a directive row.
pub const DIRECTIVE_MARK: char = '%';

/// One parsed directive. Columns are char offsets within the line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    Warps(Vec<(u32, char)>),
    Import { name: String, glyph: char, col: u32 },
    Entry { glyph: char, col: u32 },
    Singleton,
}

impl Directive {
    /// Whether `line` is a directive row.
    #[inline]
    pub fn is_directive(line: &str) -> bool {
        line.starts_with(DIRECTIVE_MARK)
    }

    /// Parse a directive row. The error is a short reason.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut chars = line.chars();
        if chars.next() != Some(DIRECTIVE_MARK) {
            return Err("directives start with `%`".to_owned());
        }
        let Some(kind) = chars.next() else {
            return Err("empty directive".to_owned());
        };
        let rest = chars.as_str();
        match kind {
            '$' => parse_warps(rest),
            '!' => parse_import(line, rest),
            '^' => {
                let (col, glyph) = single_glyph(line, rest)
                    .ok_or_else(|| "`%^` takes exactly one entry glyph".to_owned())?;
                Ok(Directive::Entry { glyph, col })
            }
            '+' if rest.trim().is_empty() => Ok(Directive::Singleton),
            '+' => Err("`%+` takes no arguments".to_owned()),
            other => Err(format!("unknown directive `%{other}`")),
        }
    }
}

fn parse_warps(rest: &str) -> Result<Directive, String> {
    let glyphs: Vec<(u32, char)> = (2u32..)
        .zip(rest.chars())
        .filter(|(_, glyph)| !glyph.is_whitespace())
        .collect();
    if glyphs.is_empty() {
        return Err("`%$` declares no warps".to_owned());
    }
    Ok(Directive::Warps(glyphs))
}

fn parse_import(line: &str, rest: &str) -> Result<Directive, String> {
    let mut words = rest.split_whitespace();
    let (Some(name), Some(glyph), None) = (words.next(), words.next(), words.next()) else {
        return Err("expected `%!name G`".to_owned());
    };
    let (col, glyph) =
        single_glyph(line, glyph).ok_or_else(|| format!("`{glyph}` is not a single warp glyph"))?;
    Ok(Directive::Import {
        name: name.to_owned(),
        glyph,
        col,
    })
}

/// The only glyph of `word`, with its column in `line`.
fn single_glyph(line: &str, word: &str) -> Option<(u32, char)> {
    let mut glyphs = word.trim().chars();
    let (Some(glyph), None) = (glyphs.next(), glyphs.next()) else {
        return None;
    };
    let (col, _) = line
        .chars()
        .enumerate()
        .filter(|&(_, c)| c == glyph)
        .last()?;
    Some((u32::try_from(col).ok()?, glyph))
}

#[cfg(test)]
mod tests;
