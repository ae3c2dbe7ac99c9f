use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, verify},
        error::Error,
        multi::separated_list0,
        sequence::tuple,
        Err, IResult,
    },
};

/* --- Day 1: Secret Entrance ---

A dial with the numbers 0 through 99 arranged in a circle starts out pointing at 50. The input is
a sequence of rotations, one per line: `L<n>` turns the dial n clicks toward lower numbers,
`R<n>` turns it n clicks toward higher numbers, wrapping around in both directions.

Part one: the password is the number of times the dial is left pointing at 0 after a rotation.

Part two: using "password method 0x434C49434B", every click that causes the dial to point at 0
counts, including clicks in the middle of a rotation. A rotation like R1000 starting from 50
passes 0 ten times before returning to 50. */

/// A single rotation of the dial, in clicks: negative values turn left toward lower numbers,
/// positive values turn right toward higher numbers.
///
/// # Invariants
/// * Is non-zero.
#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Rotation(i64);

impl Rotation {
    fn parse_sign<'i>(input: &'i str) -> IResult<&'i str, i64> {
        alt((map(tag("L"), |_| -1_i64), map(tag("R"), |_| 1_i64)))(input)
    }

    fn parse_magnitude<'i>(input: &'i str) -> IResult<&'i str, i64> {
        verify(parse_integer, |&rotation_magnitude| {
            rotation_magnitude > 0_i64
        })(input)
    }
}

impl Parse for Rotation {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((Self::parse_sign, Self::parse_magnitude)),
            |(rotation_sign, rotation_magnitude)| Self(rotation_sign * rotation_magnitude),
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Rotation>);

impl Solution {
    const DIAL_POSITION_COUNT: i64 = 100_i64;
    const INITIAL_DIAL_POSITION: i64 = 50_i64;

    /// Ceiling counterpart to `i64::div_euclid`.
    fn ceil_div(numerator: i64, denominator: i64) -> i64 {
        -(-numerator).div_euclid(denominator)
    }

    /// Iterates over the unwrapped dial position after each rotation. The dial reads 0 exactly
    /// when the unwrapped position is a multiple of `DIAL_POSITION_COUNT`.
    fn iter_unwrapped_positions(&self) -> impl Iterator<Item = i64> + '_ {
        self.0
            .iter()
            .scan(Self::INITIAL_DIAL_POSITION, |position, rotation| {
                *position += rotation.0;

                Some(*position)
            })
    }

    fn count_zero_stops(&self) -> usize {
        self.iter_unwrapped_positions()
            .filter(|position| position.rem_euclid(Self::DIAL_POSITION_COUNT) == 0_i64)
            .count()
    }

    /// Counts every click that lands the dial on 0, including pass-throughs mid-rotation.
    ///
    /// Each rotation sweeps the unwrapped interval between its start and end positions, so the
    /// clicks landing on 0 are the multiples of `DIAL_POSITION_COUNT` inside the half-open
    /// interval that excludes the start position: counted with floor divisions for rightward
    /// rotations and ceiling divisions for leftward ones.
    fn count_zero_clicks(&self) -> usize {
        let mut position: i64 = Self::INITIAL_DIAL_POSITION;

        self.0
            .iter()
            .map(|rotation| {
                let start: i64 = position;
                let end: i64 = start + rotation.0;

                position = end;

                (if rotation.0 > 0_i64 {
                    end.div_euclid(Self::DIAL_POSITION_COUNT)
                        - start.div_euclid(Self::DIAL_POSITION_COUNT)
                } else {
                    Self::ceil_div(start, Self::DIAL_POSITION_COUNT)
                        - Self::ceil_div(end, Self::DIAL_POSITION_COUNT)
                }) as usize
            })
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(separated_list0(line_ending, Rotation::parse), Self)(input)
    }
}

impl RunQuestions for Solution {
    /// Tracking the unwrapped position avoids re-deriving the wrap count per rotation.
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.count_zero_stops());
    }

    /// Counting boundary crossings beats simulating clicks one at a time.
    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.count_zero_clicks());
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
        L68\n\
        L30\n\
        R48\n\
        L5\n\
        R60\n\
        L55\n\
        L1\n\
        L99\n\
        R14\n\
        L82\n",
        "R1000\n",
        "L50\n",
    ];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            vec![
                Solution(vec![
                    Rotation(-68_i64),
                    Rotation(-30_i64),
                    Rotation(48_i64),
                    Rotation(-5_i64),
                    Rotation(60_i64),
                    Rotation(-55_i64),
                    Rotation(-1_i64),
                    Rotation(-99_i64),
                    Rotation(14_i64),
                    Rotation(-82_i64),
                ]),
                Solution(vec![Rotation(1000_i64)]),
                Solution(vec![Rotation(-50_i64)]),
            ]
        })[index]
    }

    #[test]
    fn test_try_from_str() {
        for (index, solution_str) in SOLUTION_STRS.iter().copied().enumerate() {
            assert_eq!(
                Solution::try_from(solution_str).as_ref(),
                Ok(solution(index))
            );
        }
    }

    #[test]
    fn test_iter_unwrapped_positions() {
        for (index, unwrapped_positions) in [vec![
            -18_i64, -48_i64, 0_i64, -5_i64, 55_i64, 0_i64, -1_i64, -100_i64, -86_i64, -168_i64,
        ]]
        .into_iter()
        .enumerate()
        {
            assert_eq!(
                solution(index)
                    .iter_unwrapped_positions()
                    .collect::<Vec<i64>>(),
                unwrapped_positions
            );
        }
    }

    #[test]
    fn test_count_zero_stops() {
        for (index, zero_stop_count) in [3_usize, 0_usize, 1_usize].into_iter().enumerate() {
            assert_eq!(solution(index).count_zero_stops(), zero_stop_count);
        }
    }

    #[test]
    fn test_count_zero_clicks() {
        for (index, zero_click_count) in [6_usize, 10_usize, 1_usize].into_iter().enumerate() {
            assert_eq!(solution(index).count_zero_clicks(), zero_click_count);
        }
    }

    #[test]
    fn test_ceil_div() {
        assert_eq!(Solution::ceil_div(50_i64, 100_i64), 1_i64);
        assert_eq!(Solution::ceil_div(0_i64, 100_i64), 0_i64);
        assert_eq!(Solution::ceil_div(-18_i64, 100_i64), 0_i64);
        assert_eq!(Solution::ceil_div(-100_i64, 100_i64), -1_i64);
        assert_eq!(Solution::ceil_div(100_i64, 100_i64), 1_i64);
        assert_eq!(Solution::ceil_div(101_i64, 100_i64), 2_i64);
    }
}
