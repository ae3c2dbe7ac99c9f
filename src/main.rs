use aoc2025::{solutions, Args, Parser};

fn main() {
    let args: Args = Args::parse();

    solutions().run(&args);
}
