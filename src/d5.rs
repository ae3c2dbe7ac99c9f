use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::map,
        error::Error,
        multi::separated_list1,
        sequence::{separated_pair, tuple},
        Err, IResult,
    },
    std::ops::RangeInclusive,
};

/* --- Day 5: Cafeteria ---

The cafeteria's inventory database lists the ID ranges of ingredients that are still fresh
(inclusive on both ends, possibly overlapping), followed by a blank line and the IDs of the
ingredients actually available in the storeroom.

Part one: count the available ingredient IDs that fall within at least one fresh range.

Part two: the database ranges are the real question. Count how many distinct ingredient IDs the
fresh ranges cover in total, regardless of what's in the storeroom. */

type Id = u64;

fn parse_id_range<'i>(input: &'i str) -> IResult<&'i str, RangeInclusive<Id>> {
    map(
        separated_pair(parse_integer, tag("-"), parse_integer),
        |(start, end)| start..=end,
    )(input)
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    fresh_id_ranges: Vec<RangeInclusive<Id>>,
    available_ids: Vec<Id>,
}

impl Solution {
    fn iter_fresh_available_ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.available_ids.iter().copied().filter(|id| {
            self.fresh_id_ranges
                .iter()
                .any(|fresh_id_range| fresh_id_range.contains(id))
        })
    }

    fn count_fresh_available_ids(&self) -> usize {
        self.iter_fresh_available_ids().count()
    }

    /// Sorts a copy of the fresh ID ranges by start and fuses overlapping neighbors. Adjacent but
    /// non-overlapping ranges stay separate, which leaves the covered ID count unchanged.
    fn merged_fresh_id_ranges(&self) -> Vec<RangeInclusive<Id>> {
        let mut sorted_id_ranges: Vec<RangeInclusive<Id>> = self.fresh_id_ranges.clone();

        sorted_id_ranges.sort_by_key(|id_range| (*id_range.start(), *id_range.end()));

        let mut merged_id_ranges: Vec<RangeInclusive<Id>> = Vec::new();

        for id_range in sorted_id_ranges {
            match merged_id_ranges.last_mut() {
                Some(merged_id_range) if *id_range.start() <= *merged_id_range.end() => {
                    *merged_id_range = *merged_id_range.start()
                        ..=(*merged_id_range.end()).max(*id_range.end());
                }
                _ => merged_id_ranges.push(id_range),
            }
        }

        merged_id_ranges
    }

    fn count_fresh_ids(&self) -> Id {
        self.merged_fresh_id_ranges()
            .into_iter()
            .map(|id_range| *id_range.end() - *id_range.start() + 1_u64)
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                separated_list1(line_ending, parse_id_range),
                tuple((line_ending, line_ending)),
                separated_list1(line_ending, parse_integer),
            ),
            |(fresh_id_ranges, available_ids)| Self {
                fresh_id_ranges,
                available_ids,
            },
        )(input)
    }
}

impl RunQuestions for Solution {
    /// Overlapping ranges are fine here: membership in any one of them is enough.
    fn q1_internal(&mut self, args: &QuestionArgs) {
        if args.verbose {
            for fresh_available_id in self.iter_fresh_available_ids() {
                println!("Fresh ID: {fresh_available_id}");
            }
        }

        dbg!(self.count_fresh_available_ids());
    }

    /// Summing range lengths naively would double-count the overlaps, hence the merge first.
    fn q2_internal(&mut self, args: &QuestionArgs) {
        if args.verbose {
            dbg!(self.merged_fresh_id_ranges());
        }

        dbg!(self.count_fresh_ids());
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
        3-5\n\
        10-14\n\
        16-20\n\
        12-18\n\
        \n\
        1\n\
        5\n\
        8\n\
        11\n\
        17\n\
        32\n",
        "\
        3-5\n\
        6-8\n\
        \n\
        1\n",
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

    #[test]
    fn test_try_from_str() {
        assert_eq!(
            *solution(0_usize),
            Solution {
                fresh_id_ranges: vec![
                    3_u64..=5_u64,
                    10_u64..=14_u64,
                    16_u64..=20_u64,
                    12_u64..=18_u64,
                ],
                available_ids: vec![1_u64, 5_u64, 8_u64, 11_u64, 17_u64, 32_u64],
            }
        );

        // The blank line between the sections is mandatory.
        assert!(Solution::try_from("3-5\n1\n").is_err());
    }

    #[test]
    fn test_iter_fresh_available_ids() {
        assert_eq!(
            solution(0_usize)
                .iter_fresh_available_ids()
                .collect::<Vec<Id>>(),
            vec![5_u64, 11_u64, 17_u64]
        );
    }

    #[test]
    fn test_count_fresh_available_ids() {
        assert_eq!(solution(0_usize).count_fresh_available_ids(), 3_usize);
    }

    #[test]
    fn test_merged_fresh_id_ranges() {
        assert_eq!(
            solution(0_usize).merged_fresh_id_ranges(),
            vec![3_u64..=5_u64, 10_u64..=20_u64]
        );

        // Adjacency without overlap does not fuse.
        assert_eq!(
            solution(1_usize).merged_fresh_id_ranges(),
            vec![3_u64..=5_u64, 6_u64..=8_u64]
        );
    }

    #[test]
    fn test_count_fresh_ids() {
        assert_eq!(solution(0_usize).count_fresh_ids(), 14_u64);
        assert_eq!(solution(1_usize).count_fresh_ids(), 6_u64);
    }
}
