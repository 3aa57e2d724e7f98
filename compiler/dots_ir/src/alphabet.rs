//! The symbol classifier.
//!
//! An [`Alphabet`] is the fixed path alphabet plus the warp glyphs declared
//! by one sheet. Classification is a pure function of the glyph and the
//! declarations: the same glyph always yields the same symbol.

use rustc_hash::FxHashMap;

use crate::symbol::{LibraryId, Link, OperatorKind, ScopeId, Symbol, SymbolError, WarpKind, WarpSymbol};

/// Glyphs a cursor can stand on without teleporting or computing.
///
/// Includes the blank cell, dot starts, track pieces, value and I/O markers,
/// quotes, operator brackets, and the digits used by value literals.
pub const PATH_GLYPHS: &str = " .•-|+/\\><^v()*:;!~#@$?&'\"{}[]_0123456789";

/// Whether `glyph` belongs to the fixed path alphabet.
#[inline]
pub fn is_path_glyph(glyph: char) -> bool {
    PATH_GLYPHS.contains(glyph)
}

/// Per-sheet classifier.
#[derive(Clone, Debug)]
pub struct Alphabet {
    scope: ScopeId,
    warps: FxHashMap<char, WarpSymbol>,
}

impl Alphabet {
    /// An alphabet for `scope` with no warps declared.
    pub fn new(scope: ScopeId) -> Self {
        Alphabet {
            scope,
            warps: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Declare `glyph` as a plain warp of this sheet.
    pub fn declare_plain_warp(&mut self, glyph: char) -> Result<WarpSymbol, SymbolError> {
        self.declare(glyph, WarpSymbol::plain(self.scope, glyph))
    }

    /// Declare `glyph` as a warp of `library`.
    ///
    /// `kind` must be one of the library variants.
    pub fn declare_library_warp(
        &mut self,
        glyph: char,
        kind: WarpKind,
        library: LibraryId,
    ) -> Result<WarpSymbol, SymbolError> {
        let warp = WarpSymbol::new(kind, Link::Library(library))?;
        self.declare(glyph, warp)
    }

    fn declare(&mut self, glyph: char, warp: WarpSymbol) -> Result<WarpSymbol, SymbolError> {
        if is_path_glyph(glyph) || glyph.is_whitespace() || glyph.is_control() {
            return Err(SymbolError::ReservedGlyph { glyph });
        }
        if let Some(existing) = self.warps.get(&glyph) {
            return Err(SymbolError::DuplicateWarp {
                glyph,
                existing: existing.kind(),
            });
        }
        self.warps.insert(glyph, warp);
        Ok(warp)
    }

    /// The warp declared for `glyph`, if any.
    pub fn warp(&self, glyph: char) -> Option<WarpSymbol> {
        self.warps.get(&glyph).copied()
    }

    /// Number of declared warp glyphs.
    pub fn warp_count(&self) -> usize {
        self.warps.len()
    }

    /// Classify a glyph found on the open grid.
    ///
    /// Declared warps take precedence; otherwise the glyph must be in
    /// [`PATH_GLYPHS`].
    pub fn classify(&self, glyph: char) -> Result<Symbol, SymbolError> {
        if let Some(warp) = self.warp(glyph) {
            return Ok(Symbol::warp(glyph, warp));
        }
        if is_path_glyph(glyph) {
            return Ok(Symbol::path(glyph));
        }
        Err(SymbolError::UnknownSymbol { glyph })
    }

    /// Classify a glyph found between operator brackets.
    ///
    /// Any printable glyph is accepted here; whether it names an evaluable
    /// operation is decided by the evaluator.
    #[allow(
        clippy::unused_self,
        reason = "kept on the alphabet so every cell goes through one classifier"
    )]
    pub fn classify_operator(&self, glyph: char, kind: OperatorKind) -> Result<Symbol, SymbolError> {
        if glyph.is_whitespace() || glyph.is_control() {
            return Err(SymbolError::UnknownSymbol { glyph });
        }
        Ok(Symbol::operator(glyph, kind))
    }

    /// Classify a glyph found inside quotes. Quoted glyphs are literal text.
    #[allow(
        clippy::unused_self,
        reason = "kept on the alphabet so every cell goes through one classifier"
    )]
    pub fn classify_text(&self, glyph: char) -> Result<Symbol, SymbolError> {
        if glyph.is_control() {
            return Err(SymbolError::UnknownSymbol { glyph });
        }
        Ok(Symbol::path(glyph))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::new(ScopeId::MAIN)
    }
}

#[cfg(test)]
mod tests;
