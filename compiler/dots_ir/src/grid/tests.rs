use super::*;
use crate::symbol::ScopeId;
use pretty_assertions::assert_eq;

fn path_row(text: &str) -> Vec<Symbol> {
    text.chars().map(Symbol::path).collect()
}

fn grid(rows: &[&str]) -> Grid {
    Grid::new(rows.iter().map(|r| path_row(r)).collect()).unwrap_or_else(|e| panic!("{e}"))
}

#[test]
fn dimensions_follow_ragged_rows() {
    let g = grid(&["--", "-----", ""]);
    assert_eq!(g.height(), 3);
    assert_eq!(g.width(), 5);
    assert!(!g.is_empty());
    assert!(grid(&["", ""]).is_empty());
}

#[test]
fn get_reads_cells_and_reports_out_of_bounds() {
    let g = grid(&[".-", "|"]);
    assert_eq!(g.get(Coord::new(0, 1)), Some(Symbol::path('-')));
    assert_eq!(g.get(Coord::new(1, 0)), Some(Symbol::path('|')));
    assert_eq!(g.get(Coord::new(1, 1)), None);
    assert_eq!(g.get(Coord::new(9, 0)), None);
}

#[test]
fn cells_are_row_major() {
    let g = grid(&["ab", "c"]);
    let glyphs: Vec<(Coord, char)> = g.cells().map(|(at, s)| (at, s.glyph())).collect();
    assert_eq!(
        glyphs,
        vec![
            (Coord::new(0, 0), 'a'),
            (Coord::new(0, 1), 'b'),
            (Coord::new(1, 0), 'c'),
        ]
    );
}

#[test]
fn warps_filters_warp_cells() {
    let warp = WarpSymbol::plain(ScopeId::MAIN, 'A');
    let g = Grid::new(vec![vec![
        Symbol::warp('A', warp),
        Symbol::path('-'),
        Symbol::warp('A', warp),
    ]])
    .unwrap_or_else(|e| panic!("{e}"));
    let found: Vec<Coord> = g.warps().map(|(at, _)| at).collect();
    assert_eq!(found, vec![Coord::new(0, 0), Coord::new(0, 2)]);
}

#[test]
fn append_returns_row_offset() {
    let mut main = grid(&["a", "b"]);
    let offset = main
        .append(grid(&["c"]))
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(offset, 2);
    assert_eq!(main.get(Coord::new(2, 0)), Some(Symbol::path('c')));
}

#[test]
fn row_accessor() {
    let g = grid(&["ab"]);
    assert_eq!(g.row(0).map(<[Symbol]>::len), Some(2));
    assert_eq!(g.row(1), None);
}
