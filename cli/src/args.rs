use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use falling_squares::Square;

const MAX_LEN_LIMIT: u64 = 1_000_000;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Log more. Repeat for even more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Cross-check the tree against a brute-force array on random operations.
    Verify(VerifyArgs),
    /// Run a fixed add/assign/query sequence on [2, 1, 1, 2, 3, 4, 5].
    Demo,
    /// Drop squares given as LEFT:SIDE and print the tallest stack after each one.
    Squares {
        #[arg(required = true, allow_hyphen_values = true, value_parser = parse_square)]
        squares: Vec<Square>,
        /// Print the heights as a JSON array.
        #[arg(long)]
        json: bool,
    },
    /// Read initial values, then assign/add/query commands, from stdin.
    Interactive {
        #[arg(short, long, value_enum, default_value_t = Kind::Sum)]
        kind: Kind,
    },
}

#[derive(clap::Args, Debug)]
pub struct VerifyArgs {
    /// Number of random arrays to check.
    #[arg(long, default_value_t = 500)]
    pub rounds: usize,

    /// Each array holds between 1 and MAX_LEN + 1 values.
    #[arg(
        long,
        default_value_t = 100,
        value_parser = RangedU64ValueParser::<usize>::new().range(..=MAX_LEN_LIMIT)
    )]
    pub max_len: usize,

    /// Values and deltas are drawn from [-MAX_VALUE, MAX_VALUE].
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(i64).range(0..))]
    pub max_value: i64,

    /// Random assign/add operations applied to each array.
    #[arg(long, default_value_t = 1000)]
    pub updates: usize,

    /// Random queries compared after the updates.
    #[arg(long, default_value_t = 500)]
    pub queries: usize,

    /// Seed for the random generator.
    ///
    /// If unset, a random seed is chosen and reported so a failing run can be replayed.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long, value_enum, default_value_t = Kind::Sum)]
    pub kind: Kind,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Aggregate the tree is built with.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Sum,
    Max,
    Min,
}

pub fn parse_square(s: &str) -> Result<Square, String> {
    let (left, side) = s
        .split_once(':')
        .ok_or_else(|| format!("expected LEFT:SIDE, got {:?}", s))?;
    let left = left
        .trim()
        .parse()
        .map_err(|e| format!("invalid left edge {:?}: {}", left, e))?;
    let side = side
        .trim()
        .parse()
        .map_err(|e| format!("invalid side {:?}: {}", side, e))?;
    Ok(Square::new(left, side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1:2", Square::new(1, 2))]
    #[case("-4:3", Square::new(-4, 3))]
    #[case(" 10 : 1 ", Square::new(10, 1))]
    fn parses_squares(#[case] input: &str, #[case] expected: Square) {
        assert_eq!(parse_square(input), Ok(expected));
    }

    #[rstest]
    #[case("12")]
    #[case("a:2")]
    #[case("1:")]
    fn rejects_malformed_squares(#[case] input: &str) {
        assert!(parse_square(input).is_err());
    }

    #[test]
    fn verify_defaults() {
        let args = Args::parse_from(["interval-tree", "verify", "--kind", "max"]);
        let Command::Verify(verify) = args.command else {
            panic!("expected the verify subcommand");
        };
        assert_eq!(verify.rounds, 500);
        assert_eq!(verify.max_len, 100);
        assert_eq!(verify.max_value, 1000);
        assert_eq!(verify.updates, 1000);
        assert_eq!(verify.queries, 500);
        assert_eq!(verify.seed, None);
        assert_eq!(verify.kind, Kind::Max);
    }

    #[rstest]
    #[case("1000000", true)]
    #[case("1000001", false)]
    #[case("18446744073709551615", false)]
    fn max_len_is_bounded(#[case] max_len: &str, #[case] accepted: bool) {
        let args = Args::try_parse_from(["interval-tree", "verify", "--max-len", max_len]);
        assert_eq!(args.is_ok(), accepted);
    }

    #[test]
    fn squares_accept_negative_edges() {
        let args = Args::parse_from(["interval-tree", "-v", "squares", "-4:3", "1:2"]);
        assert_eq!(args.verbose, 1);
        let Command::Squares { squares, json } = args.command else {
            panic!("expected the squares subcommand");
        };
        assert_eq!(squares, vec![Square::new(-4, 3), Square::new(1, 2)]);
        assert!(!json);
    }

    #[test]
    fn args_are_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
