use super::*;
use pretty_assertions::assert_eq;

const LIB: LibraryId = LibraryId::new(0);
const OTHER: LibraryId = LibraryId::new(1);
const X: CursorId = CursorId::new(0);
const Y: CursorId = CursorId::new(1);
const AT: Coord = Coord::new(0, 0);

#[test]
fn first_entry_succeeds() {
    let mut guard = SingletonGuard::new();
    assert_eq!(guard.try_enter(LIB, X), Entry::Entered);
    assert_eq!(guard.occupant(LIB), Some(X));
    assert!(guard.is_occupied(LIB));
    assert!(!guard.is_occupied(OTHER));
}

#[test]
fn second_cursor_is_held_until_exit() {
    let mut guard = SingletonGuard::new();
    assert_eq!(guard.try_enter(LIB, X), Entry::Entered);
    assert_eq!(guard.try_enter(LIB, Y), Entry::Held { occupant: X });
    assert_eq!(guard.try_enter(LIB, Y), Entry::Held { occupant: X });
    assert_eq!(guard.occupant(LIB), Some(X));

    assert_eq!(guard.exit(LIB, X, AT), Ok(()));
    assert_eq!(guard.try_enter(LIB, Y), Entry::Entered);
    assert_eq!(guard.occupant(LIB), Some(Y));
}

#[test]
fn libraries_are_guarded_independently() {
    let mut guard = SingletonGuard::new();
    assert_eq!(guard.try_enter(LIB, X), Entry::Entered);
    assert_eq!(guard.try_enter(OTHER, Y), Entry::Entered);
    assert_eq!(guard.occupied_count(), 2);
}

#[test]
fn occupant_reenters_and_needs_matching_exits() {
    let mut guard = SingletonGuard::new();
    assert_eq!(guard.try_enter(LIB, X), Entry::Entered);
    assert_eq!(guard.try_enter(LIB, X), Entry::Entered);
    assert_eq!(guard.exit(LIB, X, AT), Ok(()));
    assert_eq!(guard.occupant(LIB), Some(X));
    assert_eq!(guard.exit(LIB, X, AT), Ok(()));
    assert_eq!(guard.occupant(LIB), None);
}

#[test]
fn exit_by_non_occupant_fails() {
    let mut guard = SingletonGuard::new();
    assert_eq!(
        guard.exit(LIB, X, AT),
        Err(WarpError::SingletonNotHeld {
            library: LIB,
            cursor: X,
            at: AT,
        })
    );

    guard.try_enter(LIB, X);
    assert_eq!(
        guard.exit(LIB, Y, AT),
        Err(WarpError::SingletonNotHeld {
            library: LIB,
            cursor: Y,
            at: AT,
        })
    );
    assert_eq!(guard.occupant(LIB), Some(X));
}

#[test]
fn check_does_not_mutate() {
    let mut guard = SingletonGuard::new();
    assert_eq!(guard.check(LIB, X), Entry::Entered);
    assert!(!guard.is_occupied(LIB));
    guard.try_enter(LIB, X);
    assert_eq!(guard.check(LIB, Y), Entry::Held { occupant: X });
    assert_eq!(guard.check(LIB, X), Entry::Entered);
}

#[test]
fn evict_frees_everything_a_cursor_held() {
    let mut guard = SingletonGuard::new();
    guard.try_enter(OTHER, X);
    guard.try_enter(LIB, X);
    guard.try_enter(LIB, X);
    let third = LibraryId::new(2);
    guard.try_enter(third, Y);

    assert_eq!(guard.evict(X), vec![LIB, OTHER]);
    assert_eq!(guard.occupant(LIB), None);
    assert_eq!(guard.occupant(third), Some(Y));
    assert_eq!(guard.evict(X), Vec::<LibraryId>::new());
}

#[test]
fn cursor_id_display() {
    assert_eq!(CursorId::new(7).to_string(), "#7");
    assert_eq!(CursorId::new(7).raw(), 7);
}
