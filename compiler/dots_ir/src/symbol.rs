//! Typed grid symbols.
//!
//! Every cell of a loaded program is a [`Symbol`]: the source glyph plus a
//! [`SymbolClass`] describing what a cursor does when it reaches the cell.
//! Warps specialize into a flat [`WarpKind`] enumeration instead of a type
//! hierarchy; capability queries are pattern matches over that tag.
//!
//! Symbols are created once at load time and never mutated. Pairing state
//! (destinations, call stacks, singleton occupancy) lives in `dots_eval`.

use std::fmt;

/// Bracket style of an operator cell.
///
/// The evaluator treats both kinds alike; the kind only changes how the
/// scheduler collects operands at the cell.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OperatorKind {
    /// `{g}`
    Curly,
    /// `[g]`
    Square,
}

impl OperatorKind {
    /// The operator kind opened by `open`, if `open` is an operator bracket.
    pub fn from_open(open: char) -> Option<Self> {
        match open {
            '{' => Some(OperatorKind::Curly),
            '[' => Some(OperatorKind::Square),
            _ => None,
        }
    }

    /// Opening bracket glyph.
    pub const fn open(self) -> char {
        match self {
            OperatorKind::Curly => '{',
            OperatorKind::Square => '[',
        }
    }

    /// Closing bracket glyph.
    pub const fn close(self) -> char {
        match self {
            OperatorKind::Curly => '}',
            OperatorKind::Square => ']',
        }
    }
}

/// Identifier of one loaded sheet (the main program or a library instance).
///
/// Plain warp glyphs are only meaningful within their own sheet.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The main program sheet.
    pub const MAIN: ScopeId = ScopeId(0);

    #[inline]
    pub const fn new(raw: u32) -> Self {
        ScopeId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Identifier of one imported library instance.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct LibraryId(u32);

impl LibraryId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        LibraryId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LibraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lib#{}", self.0)
    }
}

/// Every valid warp variant.
///
/// A singleton return warp is both a return warp and a singleton warp; here
/// that is one variant rather than a combination of two.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WarpKind {
    /// Direct jump to the paired cell.
    Plain,
    /// Library call site: pushes the caller and jumps to the library entry.
    LibraryOuter,
    /// Library entry and return point: returns by popping the call stack.
    LibraryInner,
    /// Call site of a singleton library.
    SingletonOuter,
    /// Entry and return point of a singleton library.
    SingletonInner,
}

impl WarpKind {
    /// All variants, in declaration order.
    pub const ALL: [WarpKind; 5] = [
        WarpKind::Plain,
        WarpKind::LibraryOuter,
        WarpKind::LibraryInner,
        WarpKind::SingletonOuter,
        WarpKind::SingletonInner,
    ];

    /// Whether this variant belongs to a library.
    pub const fn is_library(self) -> bool {
        !matches!(self, WarpKind::Plain)
    }

    /// Whether this variant belongs to a singleton library.
    pub const fn is_singleton(self) -> bool {
        matches!(self, WarpKind::SingletonOuter | WarpKind::SingletonInner)
    }

    /// Whether this variant returns through the call stack.
    pub const fn is_return(self) -> bool {
        matches!(self, WarpKind::LibraryInner | WarpKind::SingletonInner)
    }

    /// Whether this variant is a library call site.
    pub const fn is_call(self) -> bool {
        matches!(self, WarpKind::LibraryOuter | WarpKind::SingletonOuter)
    }

    /// Human-readable name used in diagnostics.
    pub const fn describe(self) -> &'static str {
        match self {
            WarpKind::Plain => "plain",
            WarpKind::LibraryOuter => "library call",
            WarpKind::LibraryInner => "library return",
            WarpKind::SingletonOuter => "singleton library call",
            WarpKind::SingletonInner => "singleton library return",
        }
    }
}

impl fmt::Display for WarpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// The pairing key of a warp. Warps with equal links are paired.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Link {
    /// A plain warp glyph declared in one sheet.
    Local { scope: ScopeId, glyph: char },
    /// Every warp of one library instance, call sites and entry alike.
    Library(LibraryId),
}

impl Link {
    fn describe(self) -> &'static str {
        match self {
            Link::Local { .. } => "local",
            Link::Library(_) => "library",
        }
    }
}

/// The warp payload of a [`Symbol`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct WarpSymbol {
    kind: WarpKind,
    link: Link,
}

impl WarpSymbol {
    /// Create a warp, rejecting kind/link combinations that cannot pair.
    ///
    /// Plain warps pair through a local glyph; every library variant pairs
    /// through its library instance.
    pub fn new(kind: WarpKind, link: Link) -> Result<Self, SymbolError> {
        match (kind, link) {
            (WarpKind::Plain, Link::Local { .. })
            | (
                WarpKind::LibraryOuter
                | WarpKind::LibraryInner
                | WarpKind::SingletonOuter
                | WarpKind::SingletonInner,
                Link::Library(_),
            ) => Ok(WarpSymbol { kind, link }),
            (kind, link) => Err(SymbolError::InvalidWarpLink {
                kind,
                link: link.describe(),
            }),
        }
    }

    /// A plain warp declared as `glyph` in `scope`.
    pub const fn plain(scope: ScopeId, glyph: char) -> Self {
        WarpSymbol {
            kind: WarpKind::Plain,
            link: Link::Local { scope, glyph },
        }
    }

    #[inline]
    pub const fn kind(self) -> WarpKind {
        self.kind
    }

    #[inline]
    pub const fn link(self) -> Link {
        self.link
    }

    /// The library this warp belongs to, if any.
    pub const fn library(self) -> Option<LibraryId> {
        match self.link {
            Link::Library(id) => Some(id),
            Link::Local { .. } => None,
        }
    }
}

/// The operator payload of a [`Symbol`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct OperatorSymbol {
    glyph: char,
    kind: OperatorKind,
}

impl OperatorSymbol {
    pub const fn new(glyph: char, kind: OperatorKind) -> Self {
        OperatorSymbol { glyph, kind }
    }

    #[inline]
    pub const fn glyph(self) -> char {
        self.glyph
    }

    #[inline]
    pub const fn kind(self) -> OperatorKind {
        self.kind
    }
}

/// Capability tag of a symbol.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SymbolClass {
    /// Track, dot start, or any other non-teleporting, non-operator cell.
    Path,
    Operator(OperatorKind),
    Warp(WarpSymbol),
}

/// One classified grid cell.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Symbol {
    glyph: char,
    class: SymbolClass,
}

impl Symbol {
    /// The empty cell.
    pub const BLANK: Symbol = Symbol::path(' ');

    pub const fn path(glyph: char) -> Self {
        Symbol {
            glyph,
            class: SymbolClass::Path,
        }
    }

    pub const fn operator(glyph: char, kind: OperatorKind) -> Self {
        Symbol {
            glyph,
            class: SymbolClass::Operator(kind),
        }
    }

    pub const fn warp(glyph: char, warp: WarpSymbol) -> Self {
        Symbol {
            glyph,
            class: SymbolClass::Warp(warp),
        }
    }

    #[inline]
    pub const fn glyph(self) -> char {
        self.glyph
    }

    #[inline]
    pub const fn class(self) -> SymbolClass {
        self.class
    }

    pub const fn is_path(self) -> bool {
        matches!(self.class, SymbolClass::Path)
    }

    pub const fn is_blank(self) -> bool {
        self.is_path() && self.glyph == ' '
    }

    pub const fn is_operator(self) -> bool {
        matches!(self.class, SymbolClass::Operator(_))
    }

    pub const fn is_curly_operator(self) -> bool {
        matches!(self.class, SymbolClass::Operator(OperatorKind::Curly))
    }

    pub const fn is_square_operator(self) -> bool {
        matches!(self.class, SymbolClass::Operator(OperatorKind::Square))
    }

    pub const fn is_warp(self) -> bool {
        matches!(self.class, SymbolClass::Warp(_))
    }

    pub const fn is_library_warp(self) -> bool {
        match self.class {
            SymbolClass::Warp(warp) => warp.kind.is_library(),
            _ => false,
        }
    }

    pub const fn is_singleton_library_warp(self) -> bool {
        match self.class {
            SymbolClass::Warp(warp) => warp.kind.is_singleton(),
            _ => false,
        }
    }

    pub const fn is_library_return_warp(self) -> bool {
        match self.class {
            SymbolClass::Warp(warp) => warp.kind.is_return(),
            _ => false,
        }
    }

    /// The operator view of this symbol, if it is an operator cell.
    pub const fn as_operator(self) -> Option<OperatorSymbol> {
        match self.class {
            SymbolClass::Operator(kind) => Some(OperatorSymbol::new(self.glyph, kind)),
            _ => None,
        }
    }

    /// The warp view of this symbol, if it is a warp cell.
    pub const fn as_warp(self) -> Option<WarpSymbol> {
        match self.class {
            SymbolClass::Warp(warp) => Some(warp),
            _ => None,
        }
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Symbol::BLANK
    }
}

/// Classification and declaration errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SymbolError {
    #[error("unknown symbol `{glyph}`")]
    UnknownSymbol { glyph: char },

    #[error("`{glyph}` is a path character and cannot be declared as a warp")]
    ReservedGlyph { glyph: char },

    #[error("`{glyph}` is already declared as a {existing} warp")]
    DuplicateWarp { glyph: char, existing: WarpKind },

    #[error("a {kind} warp cannot pair through a {link} link")]
    InvalidWarpLink { kind: WarpKind, link: &'static str },
}

#[cfg(test)]
mod tests;
