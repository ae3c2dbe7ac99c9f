use {
    crate::*,
    nom::{
        character::complete::{line_ending, satisfy},
        combinator::map,
        error::Error,
        multi::{many1, separated_list0},
        Err, IResult,
    },
};

/* --- Day 3: Lobby ---

The escalator needs emergency power from the battery banks nearby. Each input line is one bank:
a string of digits, where each digit is the joltage rating of a single battery. Turning on
exactly k batteries within a bank produces the number formed by their digits in order; batteries
cannot be rearranged.

Part one: turn on exactly two batteries per bank for the largest possible joltage and sum the
per-bank maxima.

Part two: the safety override is active, so turn on exactly twelve batteries per bank instead. */

type Joltage = u64;

const DECIMAL_RADIX: Joltage = 10_u64;

/// A bank of batteries, each rated with a joltage digit.
#[cfg_attr(test, derive(Debug, PartialEq))]
struct BatteryBank(Vec<u8>);

impl BatteryBank {
    /// The largest joltage producible by turning on exactly `batteries_to_turn_on` batteries,
    /// preserving order.
    ///
    /// Greedy selection with a monotonic stack: a kept digit is popped while a larger incoming
    /// digit can still leave enough batteries behind it to fill the remaining slots.
    fn max_joltage(&self, batteries_to_turn_on: usize) -> Joltage {
        let mut turned_on_batteries: Vec<u8> = Vec::with_capacity(batteries_to_turn_on);
        let mut batteries_to_skip: usize = self.0.len().saturating_sub(batteries_to_turn_on);

        for &battery in &self.0 {
            while batteries_to_skip > 0_usize
                && turned_on_batteries
                    .last()
                    .map_or(false, |&turned_on_battery| battery > turned_on_battery)
            {
                turned_on_batteries.pop();
                batteries_to_skip -= 1_usize;
            }

            turned_on_batteries.push(battery);
        }

        let turned_on_battery_count: usize =
            turned_on_batteries.len() - batteries_to_skip.min(turned_on_batteries.len());

        turned_on_batteries.truncate(turned_on_battery_count);

        turned_on_batteries
            .into_iter()
            .fold(Joltage::default(), |joltage, battery| {
                joltage * DECIMAL_RADIX + battery as Joltage
            })
    }
}

impl Parse for BatteryBank {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many1(map(satisfy(|value| value.is_ascii_digit()), |value| {
                value as u8 - b'0'
            })),
            Self,
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<BatteryBank>);

impl Solution {
    const SMALL_BATTERIES_TO_TURN_ON: usize = 2_usize;
    const LARGE_BATTERIES_TO_TURN_ON: usize = 12_usize;

    fn total_output_joltage(&self, batteries_to_turn_on: usize) -> Joltage {
        self.0
            .iter()
            .map(|battery_bank| battery_bank.max_joltage(batteries_to_turn_on))
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(separated_list0(line_ending, BatteryBank::parse), Self)(input)
    }
}

impl RunQuestions for Solution {
    /// The stack never pops a digit that a later, larger digit couldn't replace.
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.total_output_joltage(Self::SMALL_BATTERIES_TO_TURN_ON));
    }

    /// Twelve digits still fit comfortably in a `u64`.
    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.total_output_joltage(Self::LARGE_BATTERIES_TO_TURN_ON));
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
