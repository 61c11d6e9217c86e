use super::args::VerifyArgs;
use interval_tree::naive::NaiveArray;
use interval_tree::{Aggregate, IntervalTree, TreeError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Debug, Clone, Serialize)]
pub struct VerifySettings {
    pub rounds: usize,
    pub max_len: usize,
    pub max_value: i64,
    pub updates: usize,
    pub queries: usize,
    pub seed: u64,
}

impl From<&VerifyArgs> for VerifySettings {
    fn from(args: &VerifyArgs) -> Self {
        Self {
            rounds: args.rounds,
            max_len: args.max_len,
            max_value: args.max_value,
            updates: args.updates,
            queries: args.queries,
            seed: args.seed.unwrap_or_else(rand::random),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Assign(i64),
    Add(i64),
    Query,
}

/// What an operation produced, on the tree or on the brute-force array.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Applied,
    Value(i64),
    Overflow,
}

impl Outcome {
    // ranges are always drawn inside the array, so overflow is the only
    // error both sides can legitimately report
    fn of<T>(result: Result<T, TreeError>, ok: impl FnOnce(T) -> Outcome) -> Result<Self, TreeError> {
        match result {
            Ok(value) => Ok(ok(value)),
            Err(TreeError::Overflow { .. }) => Ok(Outcome::Overflow),
            Err(e) => Err(e),
        }
    }
}

/// First operation on which the tree and the brute-force array disagreed.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Mismatch {
    pub round: usize,
    pub initial_values: Vec<i64>,
    pub operation: Operation,
    pub left: usize,
    pub right: usize,
    pub expected: Outcome,
    pub actual: Outcome,
}

#[derive(Debug, Serialize)]
pub struct VerifyReport {
    pub kind: &'static str,
    pub settings: VerifySettings,
    pub rounds_checked: usize,
    pub queries_checked: usize,
    pub mismatch: Option<Mismatch>,
}

// difference of two uniform draws in [0, max_value], so values near zero are the most common
fn random_value<R: Rng>(rng: &mut R, max_value: i64) -> i64 {
    rng.gen_range(0..=max_value) - rng.gen_range(0..=max_value)
}

fn random_range<R: Rng>(rng: &mut R, len: usize) -> (usize, usize) {
    let a = rng.gen_range(1..=len);
    let b = rng.gen_range(1..=len);
    (a.min(b), a.max(b))
}

pub fn verify<A: Aggregate>(settings: &VerifySettings) -> Result<VerifyReport, TreeError> {
    let mut rng = StdRng::seed_from_u64(settings.seed);
    let mut report = VerifyReport {
        kind: A::name(),
        settings: settings.clone(),
        rounds_checked: 0,
        queries_checked: 0,
        mismatch: None,
    };
    for round in 0..settings.rounds {
        report.mismatch = verify_round::<A, _>(&mut rng, settings, round, &mut report.queries_checked)?;
        if report.mismatch.is_some() {
            break;
        }
        report.rounds_checked += 1;
        if report.rounds_checked % 100 == 0 {
            log::info!("{} rounds checked", report.rounds_checked);
        }
    }
    Ok(report)
}

fn verify_round<A: Aggregate, R: Rng>(
    rng: &mut R,
    settings: &VerifySettings,
    round: usize,
    queries_checked: &mut usize,
) -> Result<Option<Mismatch>, TreeError> {
    let len = rng.gen_range(1..=settings.max_len.saturating_add(1));
    let initial_values: Vec<i64> = (0..len)
        .map(|_| random_value(rng, settings.max_value))
        .collect();
    let mut tree = IntervalTree::<A>::build(&initial_values)?;
    let mut naive = NaiveArray::<A>::build(&initial_values)?;
    log::debug!("round {}: {} values", round, len);

    let updates: Vec<_> = (0..settings.updates)
        .map(|_| {
            let value = random_value(rng, settings.max_value);
            let operation = if rng.gen_bool(0.5) {
                Operation::Add(value)
            } else {
                Operation::Assign(value)
            };
            (operation, random_range(rng, len))
        })
        .collect();
    let queries: Vec<_> = (0..settings.queries)
        .map(|_| (Operation::Query, random_range(rng, len)))
        .collect();

    for (operation, (left, right)) in updates.into_iter().chain(queries) {
        let (actual, expected) = match operation {
            Operation::Assign(value) => (
                Outcome::of(tree.assign(left, right, value), |()| Outcome::Applied)?,
                Outcome::of(naive.assign(left, right, value), |()| Outcome::Applied)?,
            ),
            Operation::Add(delta) => (
                Outcome::of(tree.add(left, right, delta), |()| Outcome::Applied)?,
                Outcome::of(naive.add(left, right, delta), |()| Outcome::Applied)?,
            ),
            Operation::Query => {
                *queries_checked += 1;
                (
                    Outcome::of(tree.query(left, right), Outcome::Value)?,
                    Outcome::of(naive.query(left, right), Outcome::Value)?,
                )
            }
        };
        if actual != expected {
            log::error!(
                "round {}: {:?} over [{}, {}] gave {:?} but should give {:?}",
                round,
                operation,
                left,
                right,
                actual,
                expected
            );
            return Ok(Some(Mismatch {
                round,
                initial_values,
                operation,
                left,
                right,
                expected,
                actual,
            }));
        }
    }
    Ok(None)
}

pub fn print_report(report: &VerifyReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    write_report(&mut stdout, report)?;
    Ok(())
}

pub fn write_report<W: WriteColor>(out: &mut W, report: &VerifyReport) -> std::io::Result<()> {
    let (color, verdict) = match report.mismatch {
        None => (Color::Green, "ok"),
        Some(_) => (Color::Red, "mismatch"),
    };
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", verdict)?;
    out.reset()?;
    writeln!(
        out,
        " {} tree: {} rounds and {} queries checked (seed {})",
        report.kind, report.rounds_checked, report.queries_checked, report.settings.seed
    )?;
    if let Some(mismatch) = &report.mismatch {
        writeln!(
            out,
            "  round {}: {:?} over [{}, {}] expected {:?}, got {:?}",
            mismatch.round,
            mismatch.operation,
            mismatch.left,
            mismatch.right,
            mismatch.expected,
            mismatch.actual
        )?;
        writeln!(out, "  initial values: {:?}", mismatch.initial_values)?;
    }
    Ok(())
}

/// Turns a report with a mismatch into an error, so the process exits non-zero.
pub fn ensure_passed(report: &VerifyReport) -> anyhow::Result<()> {
    if let Some(mismatch) = &report.mismatch {
        anyhow::bail!(
            "{} tree disagreed with the brute-force array in round {} (seed {})",
            report.kind,
            mismatch.round,
            report.settings.seed
        );
    }
    Ok(())
}
