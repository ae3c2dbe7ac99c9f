use {
    crate::*,
    bitvec::prelude::*,
    nom::{combinator::map, error::Error, Err, IResult},
};

/* --- Day 4: Printing Department ---

The printing department's rolls of paper (@) are arranged on a large grid; the remaining
positions (.) are empty. A forklift can only access a roll of paper if fewer than four of the
eight adjacent positions (orthogonal and diagonal) hold rolls of paper. Positions outside the
grid never hold paper, so rolls on the edge are easier to access.

Part one: count the rolls of paper a forklift can access in the original diagram.

Part two: once a roll is accessible it can be removed, which may make further rolls accessible.
Removal happens in rounds: all rolls accessible at the start of a round are removed together,
and the process repeats until a round removes nothing. Count the total rolls removed. */

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, PartialEq)]
    #[cfg_attr(test, derive(Debug))]
    enum Cell {
        Empty = EMPTY = b'.',
        Roll = ROLL = b'@',
    }
}

/// The final state of an erosion run.
struct ErosionRun {
    grid: Grid2D<Cell>,
    total_removed: usize,
    rounds: usize,
}

/// A removal batch: one bit per grid cell, row-major.
fn removable_rolls(grid: &Grid2D<Cell>) -> BitVec {
    let mut removable: BitVec = bitvec![0; grid.cells().len()];

    for pos in grid.iter_positions_with_cell(&Cell::Roll) {
        let roll_neighbor_count: usize = iter_neighbor_poses(pos)
            .filter(|&neighbor_pos| grid.get(neighbor_pos) == Some(&Cell::Roll))
            .count();

        if roll_neighbor_count < Solution::MIN_STABLE_ROLL_NEIGHBORS {
            removable.set(grid.index_from_pos(pos), true);
        }
    }

    removable
}

/// Empties every cell flagged in the batch. The batch was decided from a snapshot of the grid, so
/// no neighbor counts are re-derived here.
fn apply_removals(grid: &mut Grid2D<Cell>, removals: &BitSlice) {
    for index in removals.iter_ones() {
        *grid.get_mut(grid.pos_from_index(index)).unwrap() = Cell::Empty;
    }
}

#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<Cell>);

impl Solution {
    const MIN_STABLE_ROLL_NEIGHBORS: usize = 4_usize;

    /// The single-pass answer over the original, unmodified grid.
    fn count_removable_rolls(&self) -> usize {
        removable_rolls(&self.0).count_ones()
    }

    /// Erodes a clone of the grid round by round until no roll qualifies for removal, invoking
    /// `on_round` after each applied round with the round number, the grid state, and the round's
    /// removal count.
    ///
    /// Every non-terminal round removes at least one roll, so this runs at most one round per
    /// roll in the starting grid. The terminal empty-batch check is not counted as a round.
    fn run_to_fixed_point<F: FnMut(usize, &Grid2D<Cell>, usize)>(
        &self,
        mut on_round: F,
    ) -> ErosionRun {
        let mut grid: Grid2D<Cell> = self.0.clone();
        let mut total_removed: usize = 0_usize;
        let mut rounds: usize = 0_usize;

        loop {
            let removals: BitVec = removable_rolls(&grid);
            let removed: usize = removals.count_ones();

            if removed == 0_usize {
                break;
            }

            apply_removals(&mut grid, &removals);
            total_removed += removed;
            rounds += 1_usize;
            on_round(rounds, &grid, removed);
        }

        ErosionRun {
            grid,
            total_removed,
            rounds,
        }
    }

    fn count_total_removed_rolls(&self) -> usize {
        self.run_to_fixed_point(|_, _, _| ()).total_removed
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    /// Boundary rolls have fewer neighbor slots, so they go first.
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.count_removable_rolls());
    }

    /// Question 1 reads the parsed grid immutably and this clones it, so the two answers are
    /// independent runs over the same input.
    fn q2_internal(&mut self, args: &QuestionArgs) {
        if args.verbose {
            let erosion_run: ErosionRun = self.run_to_fixed_point(|rounds, grid, removed| {
                println!(
                    "Round {rounds}: removed {removed}\n{}",
                    String::from(grid.clone())
                );
            });

            dbg!(erosion_run.total_removed, erosion_run.rounds);
        } else {
            dbg!(self.count_total_removed_rolls());
        }
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STRS: &'static [&'static str] = &[
        "\
        ..@@.@@@@.\n\
        @@@.@.@.@@\n\
        @@@@@.@.@@\n\
        @.@@@@..@.\n\
        @@.@@@@.@@\n\
        .@@@@@@@.@\n\
        .@.@.@.@@@\n\
        @.@@@.@@@@\n\
        .@@@@@@@@.\n\
        @.@.@@@.@.\n",
        "\
        @@@\n\
        @@@\n\
        @@@\n",
        "@\n",
        "\
        ...\n\
        ...\n\
        ...\n",
        "\
        @@@@\n\
        @@@@\n\
        @@@@\n\
        @@@@\n",
    ];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            SOLUTION_STRS
                .iter()
                .copied()
                .map(|solution_str| Solution::try_from(solution_str).unwrap())
                .collect()
        })[index]
    }

    fn grid_from_str(grid_str: &str) -> Grid2D<Cell> {
        Solution::try_from(grid_str).unwrap().0
    }

    fn count_rolls(grid: &Grid2D<Cell>) -> usize {
        grid.iter_positions_with_cell(&Cell::Roll).count()
    }

    #[test]
    fn test_try_from_str() {
        use Cell::{Empty as E, Roll as R};

        assert_eq!(
            Solution::try_from(SOLUTION_STRS[1_usize]),
            Ok(Solution(
                Grid2D::try_from_cells_and_dimensions(vec![R; 9_usize], SideLen(3_usize).into())
                    .unwrap()
            ))
        );
        assert_eq!(
            Solution::try_from(SOLUTION_STRS[3_usize]),
            Ok(Solution(
                Grid2D::try_from_cells_and_dimensions(vec![E; 9_usize], SideLen(3_usize).into())
                    .unwrap()
            ))
        );

        // Ragged rows and empty input are rejected at parse time.
        assert!(Solution::try_from("@@@\n@@\n@@@\n").is_err());
        assert!(Solution::try_from("@@\n@@@\n").is_err());
        assert!(Solution::try_from("").is_err());
    }

    #[test]
    fn test_grid_string_round_trip() {
        for solution_str in SOLUTION_STRS.iter().copied() {
            assert_eq!(
                String::from(grid_from_str(solution_str)),
                solution_str.to_owned()
            );
        }
    }

    #[test]
    fn test_count_removable_rolls() {
        for (index, removable_roll_count) in [13_usize, 4_usize, 1_usize, 0_usize, 4_usize]
            .into_iter()
            .enumerate()
        {
            assert_eq!(
                solution(index).count_removable_rolls(),
                removable_roll_count
            );
        }
    }

    #[test]
    fn test_count_total_removed_rolls() {
        for (index, total_removed_roll_count) in [43_usize, 9_usize, 1_usize, 0_usize, 4_usize]
            .into_iter()
            .enumerate()
        {
            assert_eq!(
                solution(index).count_total_removed_rolls(),
                total_removed_roll_count
            );
        }
    }

    #[test]
    fn test_run_to_fixed_point_rounds() {
        // 3x3 full grid: corners first, then the edge midpoints, then the lone center.
        let mut removed_per_round: Vec<usize> = Vec::new();

        let erosion_run: ErosionRun = solution(1_usize)
            .run_to_fixed_point(|_, _, removed| removed_per_round.push(removed));

        assert_eq!(removed_per_round, vec![4_usize, 4_usize, 1_usize]);
        assert_eq!(erosion_run.rounds, 3_usize);
        assert_eq!(erosion_run.total_removed, 9_usize);
        assert_eq!(count_rolls(&erosion_run.grid), 0_usize);

        // All-empty grid: zero rounds.
        assert_eq!(solution(3_usize).run_to_fixed_point(|_, _, _| ()).rounds, 0_usize);

        // 1x1 grid: its single roll has no neighbors at all.
        assert_eq!(solution(2_usize).run_to_fixed_point(|_, _, _| ()).rounds, 1_usize);
    }

    #[test]
    fn test_monotonic_roll_count() {
        for index in 0_usize..SOLUTION_STRS.len() {
            let solution: &Solution = solution(index);
            let mut previous_roll_count: usize = count_rolls(&solution.0);

            solution.run_to_fixed_point(|_, grid, removed| {
                let roll_count: usize = count_rolls(grid);

                assert!(removed > 0_usize);
                assert_eq!(roll_count + removed, previous_roll_count);

                previous_roll_count = roll_count;
            });
        }
    }

    #[test]
    fn test_fixed_point_stability() {
        for index in 0_usize..SOLUTION_STRS.len() {
            let erosion_run: ErosionRun = solution(index).run_to_fixed_point(|_, _, _| ());

            // Idempotence: a second pass over the settled grid finds nothing.
            assert_eq!(removable_rolls(&erosion_run.grid).count_ones(), 0_usize);

            // Every surviving roll keeps at least the stable neighbor count.
            for pos in erosion_run.grid.iter_positions_with_cell(&Cell::Roll) {
                let roll_neighbor_count: usize = iter_neighbor_poses(pos)
                    .filter(|&neighbor_pos| {
                        erosion_run.grid.get(neighbor_pos) == Some(&Cell::Roll)
                    })
                    .count();

                assert!(roll_neighbor_count >= Solution::MIN_STABLE_ROLL_NEIGHBORS);
            }
        }
    }

    #[test]
    fn test_stable_core_survives() {
        // A 4x4 block only loses its corners: every remaining roll then has exactly four or more
        // roll neighbors.
        let erosion_run: ErosionRun = solution(4_usize).run_to_fixed_point(|_, _, _| ());

        assert_eq!(erosion_run.rounds, 1_usize);
        assert_eq!(erosion_run.total_removed, 4_usize);
        assert_eq!(
            String::from(erosion_run.grid),
            "\
            .@@.\n\
            @@@@\n\
            @@@@\n\
            .@@.\n"
        );
    }
}
