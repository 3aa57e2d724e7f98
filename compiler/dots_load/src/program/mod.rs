//! Program loading and library linkage.
//!
//! Loading runs in two passes. The first reads directives, following imports
//! depth-first so every library's singleton flag is known before its call
//! sites are declared. The second classifies each sheet with its own
//! alphabet and stitches the sheets into one [`Grid`]: the main program
//! first, then each library below its importer in import order.
//!
//! Every import of an ordinary library gets its own instance. A singleton
//! library is loaded once; later imports reuse its instance, so all of its
//! call sites share one body and one occupancy flag.

use dots_ir::{Alphabet, Coord, Grid, LibraryId, ScopeId, Symbol, WarpKind};
use rustc_hash::FxHashMap;

use crate::directive::Directive;
use crate::errors::{LoadError, LoadErrorKind};
use crate::scan::scan_row;
use crate::source::LibrarySource;

/// Sheet name used by [`Program::load`].
pub const MAIN_SHEET: &str = "main";

/// Where one sheet landed in the program grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub scope: ScopeId,
    /// `None` for the main program.
    pub library: Option<LibraryId>,
    pub singleton: bool,
    pub row_offset: u32,
    pub height: u32,
}

impl Sheet {
    pub fn contains(&self, at: Coord) -> bool {
        at.row >= self.row_offset && at.row - self.row_offset < self.height
    }
}

/// A loaded, classified program.
#[derive(Clone, Debug)]
pub struct Program {
    grid: Grid,
    sheets: Vec<Sheet>,
}

impl Program {
    /// Load `text` as the main sheet, resolving imports through `source`.
    pub fn load(text: &str, source: &dyn LibrarySource) -> Result<Self, Vec<LoadError>> {
        Program::load_named(MAIN_SHEET, text, source)
    }

    /// Like [`load`](Self::load), naming the main sheet `name` in errors.
    pub fn load_named(
        name: &str,
        text: &str,
        source: &dyn LibrarySource,
    ) -> Result<Self, Vec<LoadError>> {
        let mut loader = Loader {
            source,
            pending: Vec::new(),
            chain: Vec::new(),
            singletons: FxHashMap::default(),
            next_library: 0,
            errors: Vec::new(),
        };
        loader.resolve(name.to_owned(), text.to_owned(), None);
        loader.link()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Sheets in grid order; the main program is first.
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// The sheet of one library instance.
    ///
    /// A singleton library has one sheet however often it is imported.
    pub fn library(&self, library: LibraryId) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.library == Some(library))
    }

    /// Map a grid coordinate back to its sheet and the coordinate within it.
    pub fn locate(&self, at: Coord) -> Option<(&Sheet, Coord)> {
        let sheet = self.sheets.iter().find(|sheet| sheet.contains(at))?;
        Some((sheet, Coord::new(at.row - sheet.row_offset, at.col)))
    }
}

/// A library call site declared by an import.
#[derive(Copy, Clone, Debug)]
struct Import {
    at: Coord,
    glyph: char,
    library: LibraryId,
    singleton: bool,
}

/// A sheet whose directives have been read.
struct Pending {
    name: String,
    text: String,
    scope: ScopeId,
    library: Option<LibraryId>,
    singleton: bool,
    entry: Option<(Coord, char)>,
    warps: Vec<(Coord, char)>,
    imports: Vec<Import>,
}

struct Loader<'a> {
    source: &'a dyn LibrarySource,
    pending: Vec<Pending>,
    /// Names of the sheets currently being resolved, outermost first.
    chain: Vec<String>,
    /// Singleton libraries already loaded, by name.
    singletons: FxHashMap<String, LibraryId>,
    next_library: u32,
    errors: Vec<LoadError>,
}

/// A sheet-local coordinate, saturating on absurdly large text.
fn local(row: usize, col: usize) -> Coord {
    Coord::new(
        u32::try_from(row).unwrap_or(u32::MAX),
        u32::try_from(col).unwrap_or(u32::MAX),
    )
}

impl Loader<'_> {
    fn error(&mut self, sheet: &str, at: Coord, kind: impl Into<LoadErrorKind>) {
        self.errors.push(LoadError::new(sheet, at, kind));
    }

    fn malformed(&mut self, sheet: &str, at: Coord, reason: &str) {
        self.error(
            sheet,
            at,
            LoadErrorKind::MalformedDirective {
                reason: reason.to_owned(),
            },
        );
    }

    /// Read the directives of one sheet and, recursively, of its imports.
    fn resolve(&mut self, name: String, text: String, library: Option<LibraryId>) -> usize {
        let index = self.pending.len();
        let mut sheet = Pending {
            name,
            text,
            scope: ScopeId::new(u32::try_from(index).unwrap_or(u32::MAX)),
            library,
            singleton: false,
            entry: None,
            warps: Vec::new(),
            imports: Vec::new(),
        };

        let mut imports = Vec::new();
        let directives: Vec<(usize, Result<Directive, String>)> = sheet
            .text
            .lines()
            .enumerate()
            .filter(|(_, line)| Directive::is_directive(line))
            .map(|(row, line)| (row, Directive::parse(line)))
            .collect();
        for (row, directive) in directives {
            let start = local(row, 0);
            match directive {
                Err(reason) => self.malformed(&sheet.name, start, &reason),
                Ok(Directive::Warps(glyphs)) => sheet.warps.extend(
                    glyphs
                        .into_iter()
                        .map(|(col, glyph)| (Coord::new(start.row, col), glyph)),
                ),
                Ok(Directive::Import { name, glyph, col }) => {
                    imports.push((Coord::new(start.row, col), name, glyph));
                }
                Ok(Directive::Entry { .. }) if library.is_none() => {
                    self.malformed(&sheet.name, start, "only a library declares an entry warp");
                }
                Ok(Directive::Entry { .. }) if sheet.entry.is_some() => {
                    self.malformed(&sheet.name, start, "entry warp declared twice");
                }
                Ok(Directive::Entry { glyph, col }) => {
                    sheet.entry = Some((Coord::new(start.row, col), glyph));
                }
                Ok(Directive::Singleton) if library.is_none() => {
                    self.malformed(&sheet.name, start, "only a library can be a singleton");
                }
                Ok(Directive::Singleton) => sheet.singleton = true,
            }
        }
        if library.is_some() && sheet.entry.is_none() {
            let name = sheet.name.clone();
            self.error(&sheet.name, Coord::ORIGIN, LoadErrorKind::MissingEntryDeclaration { name });
        }

        let importer = sheet.name.clone();
        self.pending.push(sheet);
        self.chain.push(importer.clone());
        for (at, name, glyph) in imports {
            if self.chain.contains(&name) {
                let mut chain = self.chain.clone();
                chain.push(name);
                self.error(&importer, at, LoadErrorKind::ImportCycle { chain });
                continue;
            }
            if let Some(&library) = self.singletons.get(&name) {
                tracing::debug!(name = %name, %library, importer = %importer, "singleton shared");
                self.pending[index].imports.push(Import {
                    at,
                    glyph,
                    library,
                    singleton: true,
                });
                continue;
            }
            let source = self.source;
            let Some(text) = source.library(&name) else {
                self.error(&importer, at, LoadErrorKind::MissingLibrary { name });
                continue;
            };
            let library = LibraryId::new(self.next_library);
            self.next_library += 1;
            let child = self.resolve(name.clone(), text.to_owned(), Some(library));
            let singleton = self.pending[child].singleton;
            if singleton {
                self.singletons.insert(name, library);
            }
            self.pending[index].imports.push(Import {
                at,
                glyph,
                library,
                singleton,
            });
        }
        self.chain.pop();
        index
    }

    /// Build a sheet's alphabet from its declarations.
    fn alphabet(&mut self, sheet: &Pending) -> Alphabet {
        let mut alphabet = Alphabet::new(sheet.scope);
        for &(at, glyph) in &sheet.warps {
            if let Err(err) = alphabet.declare_plain_warp(glyph) {
                self.error(&sheet.name, at, err);
            }
        }
        if let (Some((at, glyph)), Some(library)) = (sheet.entry, sheet.library) {
            let kind = if sheet.singleton {
                WarpKind::SingletonInner
            } else {
                WarpKind::LibraryInner
            };
            if let Err(err) = alphabet.declare_library_warp(glyph, kind, library) {
                self.error(&sheet.name, at, err);
            }
        }
        for import in &sheet.imports {
            let kind = if import.singleton {
                WarpKind::SingletonOuter
            } else {
                WarpKind::LibraryOuter
            };
            if let Err(err) = alphabet.declare_library_warp(import.glyph, kind, import.library) {
                self.error(&sheet.name, import.at, err);
            }
        }
        alphabet
    }

    fn classify(&mut self, sheet: &Pending) -> Vec<Vec<Symbol>> {
        let alphabet = self.alphabet(sheet);
        let mut rows = Vec::new();
        for (row, line) in sheet.text.lines().enumerate() {
            if Directive::is_directive(line) {
                rows.push(Vec::new());
                continue;
            }
            let scanned = scan_row(&alphabet, line);
            for (col, err) in scanned.errors {
                self.error(&sheet.name, local(row, col), err);
            }
            rows.push(scanned.symbols);
        }
        rows
    }

    /// Classify every sheet and stitch them into one grid.
    fn link(mut self) -> Result<Program, Vec<LoadError>> {
        let mut grid = Grid::default();
        let mut sheets = Vec::new();
        for pending in std::mem::take(&mut self.pending) {
            let rows = self.classify(&pending);
            let height = rows.len();
            match Grid::new(rows).and_then(|sheet| grid.append(sheet)) {
                Ok(row_offset) => {
                    tracing::debug!(
                        sheet = %pending.name,
                        library = ?pending.library,
                        singleton = pending.singleton,
                        row_offset,
                        height,
                        "sheet linked"
                    );
                    sheets.push(Sheet {
                        name: pending.name,
                        scope: pending.scope,
                        library: pending.library,
                        singleton: pending.singleton,
                        row_offset,
                        height: u32::try_from(height).unwrap_or(u32::MAX),
                    });
                }
                Err(err) => self.error(&pending.name, Coord::ORIGIN, err),
            }
        }
        if self.errors.is_empty() {
            Ok(Program { grid, sheets })
        } else {
            tracing::debug!(errors = self.errors.len(), "program rejected");
            Err(self.errors)
        }
    }
}
