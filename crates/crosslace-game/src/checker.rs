//! Solution checking: strict match and percentage score.

use crosslace_core::{Grid, UserGrid};

/// Returns `true` iff every open cell of `grid` has the matching letter
/// entered in `user`. Trivially `true` when the grid has no open cells.
///
/// Letters compare exactly; both sides use the engine's uppercase
/// convention ([`UserGrid`] uppercases on entry).
///
/// # Panics
///
/// Panics if the two grids have different dimensions; callers are expected
/// to compare a user grid against the puzzle it was created for.
///
/// # Examples
///
/// ```
/// use crosslace_core::{Grid, Position, UserGrid};
/// use crosslace_game::check_solution;
///
/// let grid: Grid = "
///     ####
///     КОТ
///     ####
/// "
/// .parse()
/// .unwrap();
///
/// let user = UserGrid::solved_from(&grid);
/// assert!(check_solution(&user, &grid));
///
/// let user = user.with_letter(Position::new(1, 2), 'Д').unwrap();
/// assert!(!check_solution(&user, &grid));
/// ```
#[must_use]
pub fn check_solution(user: &UserGrid, grid: &Grid) -> bool {
    assert_eq!(
        user.size(),
        grid.size(),
        "user grid and puzzle grid dimensions differ",
    );
    grid.open_positions()
        .all(|pos| user.letter(pos) == grid[pos].letter())
}

/// Percentage of open cells with the correct letter entered, 0-100 by
/// integer division. Defined as 0 when the grid has no open cells.
///
/// # Panics
///
/// Panics if the two grids have different dimensions.
///
/// # Examples
///
/// ```
/// use crosslace_core::{Grid, UserGrid};
/// use crosslace_game::score;
///
/// let grid: Grid = "
///     ####
///     КОТ
///     ####
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(score(&UserGrid::empty(3), &grid), 0);
/// assert_eq!(score(&UserGrid::solved_from(&grid), &grid), 100);
/// ```
#[must_use]
pub fn score(user: &UserGrid, grid: &Grid) -> u8 {
    assert_eq!(
        user.size(),
        grid.size(),
        "user grid and puzzle grid dimensions differ",
    );
    let mut total: u32 = 0;
    let mut correct: u32 = 0;
    for pos in grid.open_positions() {
        total += 1;
        if user.letter(pos) == grid[pos].letter() {
            correct += 1;
        }
    }
    if total == 0 {
        return 0;
    }
    u8::try_from(correct * 100 / total).expect("percentage fits in u8")
}
