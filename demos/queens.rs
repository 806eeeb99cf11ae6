use std::time::Instant;

use clap::{Parser, ValueEnum};

use nqueens_rs::error::board_size;
use nqueens_rs::oracle::OracleKind;
use nqueens_rs::order::ColumnOrder;
use nqueens_rs::render;
use nqueens_rs::search::{Encoding, Mode, Solver, SolverConfig};
use nqueens_rs::sink::{Collect, Count, SolutionSink};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EncodingArg {
    Sets,
    Bitmask,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OracleArg {
    Occupancy,
    Scan,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderArg {
    Ascending,
    MinConflict,
}

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Board size.
    #[arg(value_name = "INT", default_value = "8", allow_negative_numbers = true)]
    n: i64,

    /// Stop at the first solution.
    #[clap(long)]
    first: bool,

    /// Branch the first row over its left half and mirror the results.
    #[clap(long)]
    symmetry: bool,

    /// Occupancy encoding.
    #[clap(long, value_enum, default_value = "sets")]
    encoding: EncodingArg,

    /// Safety check (sets encoding only).
    #[clap(long, value_enum, default_value = "occupancy")]
    oracle: OracleArg,

    /// Column order (sets encoding only).
    #[clap(long, value_enum, default_value = "ascending")]
    order: OrderArg,

    /// Count solutions without keeping them.
    #[clap(long)]
    count_only: bool,

    /// Print at most this many solutions.
    #[clap(long, value_name = "INT", default_value = "3")]
    print: usize,

    /// Print solutions as compact row strings instead of a grid.
    #[clap(long)]
    compact: bool,

    /// Solve every board size from 1 to this value and print a timing table.
    #[clap(long, value_name = "INT")]
    sweep: Option<usize>,

    /// Log level.
    #[clap(long, default_value = "info")]
    log_level: simplelog::LevelFilter,
}

impl Cli {
    fn config(&self) -> SolverConfig {
        SolverConfig::default()
            .with_mode(if self.first { Mode::First } else { Mode::All })
            .with_symmetry(self.symmetry)
            .with_encoding(match self.encoding {
                EncodingArg::Sets => Encoding::Sets,
                EncodingArg::Bitmask => Encoding::Bitmask,
            })
            .with_oracle(match self.oracle {
                OracleArg::Occupancy => OracleKind::Occupancy,
                OracleArg::Scan => OracleKind::Scan,
            })
            .with_order(match self.order {
                OrderArg::Ascending => ColumnOrder::Ascending,
                OrderArg::MinConflict => ColumnOrder::MinConflict,
            })
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    log::debug!("args = {:?}", args);

    let solver = Solver::new(args.config());

    if let Some(max) = args.sweep {
        println!("{:>4} {:>12} {:>12}", "n", "solutions", "time (ms)");
        for n in 1..=max {
            let mut sink = Count::new();
            let time = Instant::now();
            solver.run(n, &mut sink)?;
            let time = time.elapsed();
            println!("{:>4} {:>12} {:>12.3}", n, sink.count(), time.as_secs_f64() * 1000.0);
        }
        return Ok(());
    }

    let n = board_size(args.n)?;

    if args.count_only {
        let mut sink = Count::new();
        let stats = solver.run(n, &mut sink)?;
        println!("n = {}: {} solutions", n, sink.count());
        println!("{}", stats);
        return Ok(());
    }

    let mut sink = Collect::new();
    let stats = solver.run(n, &mut sink)?;

    if sink.count() == 0 {
        println!("n = {}: no solutions", n);
    } else {
        println!("n = {}: {} solution(s)", n, sink.count());
        for (i, solution) in sink.all().iter().take(args.print).enumerate() {
            println!("Solution {}: {}", i + 1, solution);
            if args.compact {
                for row in render::compact(solution) {
                    println!("{}", row);
                }
                println!();
            } else {
                println!("{}", render::grid(solution));
            }
        }
        if sink.count() > args.print {
            println!("... {} more", sink.count() - args.print);
        }
    }
    println!("{}", stats);

    Ok(())
}
