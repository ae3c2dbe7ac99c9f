use {
    crate::*,
    nom::{
        bytes::complete::tag,
        combinator::map,
        error::Error,
        multi::separated_list0,
        sequence::separated_pair,
        Err, IResult,
    },
    std::ops::RangeInclusive,
};

/* --- Day 2: Gift Shop ---

The gift shop database holds a single long line of comma-separated product ID ranges, each range
giving its first and last ID separated by a dash. IDs have no leading zeroes.

Part one: an ID is invalid if its decimal representation is some sequence of digits repeated
exactly twice, like 55, 6464, or 123123. Sum every invalid ID appearing in the ranges.

Part two: an ID is now invalid if its decimal representation is some sequence of digits repeated
two or more times, like 123123123 or 1111111. Sum every invalid ID under the new rule. */

type Id = u64;

/// Whether the decimal representation of `id` is two identical halves.
fn is_doubled_sequence(id: Id) -> bool {
    let digits: String = id.to_string();

    digits.len() % 2_usize == 0_usize && {
        let (left_half, right_half) = digits.split_at(digits.len() / 2_usize);

        left_half == right_half
    }
}

/// Whether the decimal representation of `id` is some digit sequence repeated at least twice.
fn is_repeated_sequence(id: Id) -> bool {
    let digits: String = id.to_string();
    let digit_bytes: &[u8] = digits.as_bytes();

    (1_usize..=digit_bytes.len() / 2_usize).any(|sequence_len| {
        digit_bytes.len() % sequence_len == 0_usize
            && digit_bytes
                .chunks(sequence_len)
                .all(|sequence| sequence == &digit_bytes[..sequence_len])
    })
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<RangeInclusive<Id>>);

impl Solution {
    fn iter_invalid_ids<'a, P: Fn(Id) -> bool + Copy + 'a>(
        &'a self,
        is_invalid: P,
    ) -> impl Iterator<Item = Id> + 'a {
        self.0
            .iter()
            .flat_map(move |id_range| id_range.clone().filter(move |&id| is_invalid(id)))
    }

    fn sum_invalid_ids<P: Fn(Id) -> bool + Copy>(&self, is_invalid: P, verbose: bool) -> Id {
        self.iter_invalid_ids(is_invalid)
            .map(|id| {
                if verbose {
                    println!("Invalid ID: {id}");
                }

                id
            })
            .sum()
    }

    fn sum_doubled_sequence_ids(&self, verbose: bool) -> Id {
        self.sum_invalid_ids(is_doubled_sequence, verbose)
    }

    fn sum_repeated_sequence_ids(&self, verbose: bool) -> Id {
        self.sum_invalid_ids(is_repeated_sequence, verbose)
    }

    fn parse_id_range<'i>(input: &'i str) -> IResult<&'i str, RangeInclusive<Id>> {
        map(
            separated_pair(parse_integer, tag("-"), parse_integer),
            |(first_id, last_id)| first_id..=last_id,
        )(input)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(separated_list0(tag(","), Self::parse_id_range), Self)(input)
    }
}

impl RunQuestions for Solution {
    /// Brute force over the ranges is fine at this scale.
    fn q1_internal(&mut self, args: &QuestionArgs) {
        dbg!(self.sum_doubled_sequence_ids(args.verbose));
    }

    /// A sequence length only needs checking if it divides the digit count.
    fn q2_internal(&mut self, args: &QuestionArgs) {
        dbg!(self.sum_repeated_sequence_ids(args.verbose));
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
