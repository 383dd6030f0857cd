use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use clinit_eval::{EvalConfig, Evaluator, InitOrder, OverrideMode};

#[derive(Parser)]
#[command(name = "clinit-eval")]
#[command(about = "Run the counter-and-dispatch evaluation and print the result")]
struct Cli {
    /// Which demonstration program to run
    #[arg(long, value_enum, default_value_t = ProgramArg::Sum)]
    program: ProgramArg,

    /// Subclass `incr` behavior (defaults to the program's own)
    #[arg(long, value_enum)]
    override_mode: Option<OverrideArg>,

    /// Which type initializer runs first
    #[arg(long, value_enum, default_value_t = OrderArg::CounterFirst)]
    order: OrderArg,

    /// Counter seed
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i32>,

    /// First argument to `say`
    #[arg(long, allow_negative_numbers = true)]
    input: Option<i32>,

    /// Subclass `incr` calls before the derived sum is computed
    #[arg(long, default_value_t = 0)]
    warmup: u32,

    /// Print the full report to stderr
    #[arg(long)]
    report: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProgramArg {
    Sum,
    HelloWorld,
}

#[derive(Clone, Copy, ValueEnum)]
enum OverrideArg {
    NoOp,
    ChainThrough,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    CounterFirst,
    SumFirst,
}

impl Cli {
    fn to_config(&self) -> EvalConfig {
        let mut config = match self.program {
            ProgramArg::Sum => EvalConfig::sum(),
            ProgramArg::HelloWorld => EvalConfig::hello_world(),
        };
        if let Some(mode) = self.override_mode {
            config = config.with_override_mode(match mode {
                OverrideArg::NoOp => OverrideMode::NoOp,
                OverrideArg::ChainThrough => OverrideMode::ChainThrough,
            });
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(input) = self.input {
            config = config.with_input(input);
        }
        config
            .with_init_order(match self.order {
                OrderArg::CounterFirst => InitOrder::CounterFirst,
                OrderArg::SumFirst => InitOrder::SumFirst,
            })
            .with_warmup_increments(self.warmup)
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.to_config();
    debug!(?config, "starting evaluation");

    let mut evaluator = Evaluator::new(config);
    match evaluator.run_report() {
        Ok(report) => {
            if cli.report {
                eprintln!("{:#?}", report);
            }
            println!("{}", report.result);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
