use super::*;

#[test]
fn display_is_one_based() {
    assert_eq!(Coord::new(0, 0).to_string(), "1:1");
    assert_eq!(Coord::new(4, 11).to_string(), "5:12");
}

#[test]
fn display_does_not_overflow_at_max() {
    assert_eq!(
        Coord::new(u32::MAX, 0).to_string(),
        format!("{}:1", u64::from(u32::MAX) + 1)
    );
}

#[test]
fn ordering_is_row_major() {
    let mut coords = vec![Coord::new(1, 0), Coord::new(0, 5), Coord::new(0, 1)];
    coords.sort();
    assert_eq!(
        coords,
        vec![Coord::new(0, 1), Coord::new(0, 5), Coord::new(1, 0)]
    );
}

#[test]
fn try_from_indices_accepts_small_values() {
    assert_eq!(Coord::try_from_indices(3, 7), Ok(Coord::new(3, 7)));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn try_from_indices_rejects_huge_values() {
    let huge = usize::try_from(u64::from(u32::MAX) + 1).unwrap_or(usize::MAX);
    assert_eq!(
        Coord::try_from_indices(huge, 0),
        Err(CoordError::RowTooLarge(huge))
    );
    assert_eq!(
        Coord::try_from_indices(0, huge),
        Err(CoordError::ColumnTooLarge(huge))
    );
}

#[test]
fn shifted_down_moves_rows_only() {
    assert_eq!(Coord::new(2, 3).shifted_down(10), Coord::new(12, 3));
    assert_eq!(Coord::new(u32::MAX, 3).shifted_down(1), Coord::new(u32::MAX, 3));
}
