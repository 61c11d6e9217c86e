mod args;
mod demo;
mod interactive;
mod logger;
mod squares;
mod verify;

use anyhow::Context;
use args::{Args, Command, Kind};
use clap::Parser;
use interval_tree::{Max, Min, Sum};
use verify::{ensure_passed, print_report, verify, VerifySettings};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.verbose).context("failed to install the logger")?;

    match args.command {
        Command::Verify(verify_args) => {
            let settings = VerifySettings::from(&verify_args);
            log::info!("verifying with seed {}", settings.seed);
            let report = match verify_args.kind {
                Kind::Sum => verify::<Sum>(&settings)?,
                Kind::Max => verify::<Max>(&settings)?,
                Kind::Min => verify::<Min>(&settings)?,
            };
            print_report(&report, verify_args.json)?;
            ensure_passed(&report)?;
        }
        Command::Demo => demo::run()?,
        Command::Squares { squares, json } => squares::run(&squares, json)?,
        Command::Interactive { kind } => match kind {
            Kind::Sum => interactive::run::<Sum>()?,
            Kind::Max => interactive::run::<Max>()?,
            Kind::Min => interactive::run::<Min>()?,
        },
    }
    Ok(())
}
