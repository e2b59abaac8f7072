//! Greedy word placement, adjacency validation, and clue numbering.

use crosslace_core::{Grid, Orientation, Position};
use log::{debug, trace};

use crate::{CandidateWord, PlacedWord};

/// The output of one generation run: a populated grid and the words that
/// made it onto it.
///
/// The word list is a subsequence of the candidate list: a candidate appears
/// here if and only if it was committed to the grid. Numbering has already
/// run; every word carries its clue number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The populated cell grid.
    pub grid: Grid,
    /// The placed words, in commit order.
    pub words: Vec<PlacedWord>,
}

/// A candidate placement under evaluation. Coordinates are signed so trial
/// positions computed near the grid edge can go negative and fail the bounds
/// check instead of wrapping.
#[derive(Debug, Clone, Copy)]
struct Trial {
    row: i32,
    col: i32,
    orientation: Orientation,
}

/// The greedy crossword placement engine.
///
/// Candidates are consumed in order: the first placeable word seeds the grid
/// horizontally centered, each later word tries to intersect an already
/// placed word (most central hosts first), then falls back to a
/// non-intersecting position alongside a host, and is dropped if neither
/// works. Earlier decisions are never revisited.
///
/// The engine is pure with respect to its input: every call allocates a
/// fresh grid, and the same candidate list always produces the same puzzle.
///
/// # Examples
///
/// ```
/// use crosslace_generator::{CandidateWord, Difficulty, PlacementEngine};
///
/// let words = ["КОТ", "ДОМ", "КОД", "ТОМ"]
///     .map(|w| CandidateWord::new(w, "", Difficulty::Easy, "ru").unwrap());
/// let puzzle = PlacementEngine::new(8).generate(&words);
///
/// assert_eq!(puzzle.words.len(), 4);
/// assert_eq!(puzzle.words[0].text(), "КОТ");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PlacementEngine {
    size: u8,
}

impl PlacementEngine {
    /// The grid dimension of the original game.
    pub const DEFAULT_SIZE: u8 = 8;

    /// Creates an engine for a `size`x`size` grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0; a zero-sized grid is a programmer error, not a
    /// runtime condition.
    #[must_use]
    pub fn new(size: u8) -> Self {
        assert!(size > 0, "grid size must be at least 1");
        Self { size }
    }

    /// The grid dimension this engine places onto.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Places `candidates` onto a fresh grid and numbers the result.
    ///
    /// Candidates that fit nowhere (including any word longer than the grid
    /// dimension) are dropped; dropping is an expected outcome, not an
    /// error, so this never fails. An empty candidate list yields a fully
    /// blocked grid.
    #[must_use]
    pub fn generate(&self, candidates: &[CandidateWord]) -> GeneratedPuzzle {
        let mut grid = Grid::blocked(self.size);
        let mut words: Vec<PlacedWord> = Vec::new();

        for candidate in candidates {
            let letters: Vec<char> = candidate.text().chars().collect();
            let placement = if words.is_empty() {
                self.seed_placement(&grid, &letters)
            } else {
                self.intersection_placement(&grid, &words, &letters)
                    .or_else(|| self.adjacent_placement(&grid, &words, &letters))
            };

            match placement {
                Some((start, orientation)) => {
                    debug!(
                        "placed {:?} {orientation} at {start}",
                        candidate.text()
                    );
                    let word = PlacedWord::new(
                        candidate.text(),
                        candidate.clue(),
                        start,
                        orientation,
                    );
                    for (pos, letter) in word.letters() {
                        grid.open_with(pos, letter);
                    }
                    words.push(word);
                }
                None => debug!("dropped {:?}: no valid placement", candidate.text()),
            }
        }

        assign_numbers(&mut grid, &mut words);
        GeneratedPuzzle { grid, words }
    }

    /// First word: horizontal, centered. Returns `None` if the word is
    /// longer than the grid, in which case the next candidate gets to seed.
    fn seed_placement(&self, grid: &Grid, letters: &[char]) -> Option<(Position, Orientation)> {
        let size = i32::from(self.size);
        let len = i32::try_from(letters.len()).ok()?;
        let trial = Trial {
            row: (size - 1) / 2,
            col: (size - len) / 2,
            orientation: Orientation::Across,
        };
        self.fits(grid, letters, trial)
            .map(|start| (start, trial.orientation))
    }

    /// Tries to cross the candidate with an already placed word, preferring
    /// hosts whose midpoint lies closest to the grid center.
    fn intersection_placement(
        &self,
        grid: &Grid,
        words: &[PlacedWord],
        letters: &[char],
    ) -> Option<(Position, Orientation)> {
        let mut hosts: Vec<&PlacedWord> = words.iter().collect();
        hosts.sort_by_key(|host| self.centrality(host));

        for host in hosts {
            let orientation = host.orientation().perpendicular();
            let (dr, dc) = orientation.delta();
            for (host_pos, host_letter) in host.letters() {
                for (j, &letter) in letters.iter().enumerate() {
                    if letter != host_letter {
                        continue;
                    }
                    // Back the candidate up so its j-th letter lands on the
                    // shared cell.
                    let j = i32::try_from(j).ok()?;
                    let trial = Trial {
                        row: i32::from(host_pos.row) - dr * j,
                        col: i32::from(host_pos.col) - dc * j,
                        orientation,
                    };
                    if let Some(start) = self.fits(grid, letters, trial) {
                        return Some((start, orientation));
                    }
                }
            }
        }
        None
    }

    /// Fallback: a non-intersecting spot alongside a placed word, hosts in
    /// commit order. Four trial positions per host, each separated from the
    /// host by one blocked cell: shifted off either side of the host's line,
    /// or end-to-end off either end.
    fn adjacent_placement(
        &self,
        grid: &Grid,
        words: &[PlacedWord],
        letters: &[char],
    ) -> Option<(Position, Orientation)> {
        let candidate_len = i32::try_from(letters.len()).ok()?;

        for host in words {
            let orientation = host.orientation().perpendicular();
            let (adr, adc) = host.orientation().delta();
            let (pdr, pdc) = orientation.delta();
            let row = i32::from(host.start().row);
            let col = i32::from(host.start().col);
            let host_len = i32::try_from(host.len()).ok()?;

            let starts = [
                (row - (candidate_len + 1) * pdr, col - (candidate_len + 1) * pdc),
                (row + 2 * pdr, col + 2 * pdc),
                (row - 2 * adr, col - 2 * adc),
                (row + (host_len + 1) * adr, col + (host_len + 1) * adc),
            ];
            for (row, col) in starts {
                let trial = Trial {
                    row,
                    col,
                    orientation,
                };
                if let Some(start) = self.fits(grid, letters, trial) {
                    return Some((start, orientation));
                }
            }
        }
        None
    }

    /// Validates a trial placement and returns its start position if legal.
    ///
    /// A placement is valid iff all of:
    ///
    /// - every letter lies within the grid;
    /// - letters landing on open cells match the letter already there
    ///   (intersection consistency);
    /// - the cells just before the first letter and just after the last,
    ///   along the word's own axis, are blocked or off-grid (no
    ///   concatenation with a parallel word);
    /// - every newly opened cell has both perpendicular neighbors blocked or
    ///   off-grid (no spurious side-by-side letter sequence). A crossing
    ///   word through one of these cells would have opened it already, so
    ///   there is no legitimate way for such a neighbor to be open.
    fn fits(&self, grid: &Grid, letters: &[char], trial: Trial) -> Option<Position> {
        let (dr, dc) = trial.orientation.delta();
        let len = i32::try_from(letters.len()).ok()?;

        // Head and tail along the word's own axis.
        if self.is_open(grid, trial.row - dr, trial.col - dc)
            || self.is_open(grid, trial.row + dr * len, trial.col + dc * len)
        {
            trace!("rejecting trial at ({}, {}): abuts a parallel word", trial.row, trial.col);
            return None;
        }

        for (i, &letter) in letters.iter().enumerate() {
            let i = i32::try_from(i).ok()?;
            let row = trial.row + dr * i;
            let col = trial.col + dc * i;
            let pos = self.position_at(row, col)?;

            match grid[pos].letter() {
                Some(existing) if existing == letter => {} // genuine intersection
                Some(_) => {
                    trace!("rejecting trial at ({}, {}): letter clash at {pos}", trial.row, trial.col);
                    return None;
                }
                None => {
                    // Newly opened cell: nothing may sit directly alongside.
                    if self.is_open(grid, row - dc, col - dr)
                        || self.is_open(grid, row + dc, col + dr)
                    {
                        trace!(
                            "rejecting trial at ({}, {}): side contact at {pos}",
                            trial.row, trial.col
                        );
                        return None;
                    }
                }
            }
        }

        self.position_at(trial.row, trial.col)
    }

    /// Manhattan distance of a word's midpoint from the grid center, in
    /// doubled coordinates so the ranking stays in integers.
    fn centrality(&self, word: &PlacedWord) -> u32 {
        let (dr, dc) = word.orientation().delta();
        let len = i32::try_from(word.len()).unwrap_or(i32::MAX >> 2);
        let mid_row2 = 2 * i32::from(word.start().row) + dr * (len - 1);
        let mid_col2 = 2 * i32::from(word.start().col) + dc * (len - 1);
        let center2 = i32::from(self.size) - 1;
        mid_row2.abs_diff(center2) + mid_col2.abs_diff(center2)
    }

    fn position_at(&self, row: i32, col: i32) -> Option<Position> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        (row < self.size && col < self.size).then(|| Position::new(row, col))
    }

    fn is_open(&self, grid: &Grid, row: i32, col: i32) -> bool {
        self.position_at(row, col)
            .is_some_and(|pos| !grid[pos].is_blocked())
    }
}

/// Assigns clue numbers to `words` in their commit order.
///
/// Each word whose start cell carries no number yet gets the next sequential
/// number, recorded on both the cell and the word; a word starting on an
/// already numbered cell reuses that number without advancing the counter.
/// Running the pass again over the same words changes nothing.
///
/// # Panics
///
/// Panics if a word's start cell is blocked; engine output never is.
pub fn assign_numbers(grid: &mut Grid, words: &mut [PlacedWord]) {
    let mut next = 1_u8;
    for word in words {
        let start = word.start();
        if let Some(number) = grid[start].number() {
            word.set_number(number);
        } else {
            grid.number_cell(start, next);
            word.set_number(next);
            next = next.saturating_add(1);
        }
    }
}
