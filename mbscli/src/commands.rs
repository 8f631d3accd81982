use super::*;

mod run;
pub use run::*;

mod list;
pub use list::*;

/// All CLI commands available in this binary.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Solve a single problem file.
    #[command(alias = "s")]
    Solve(Solve),

    /// Run every task of an experiment file.
    #[command(alias = "r")]
    Run(Run),

    /// Print the list of all available search strategies.
    #[command(alias = "ls")]
    ListStrategies,
}

#[derive(clap::Args, Debug)]
pub struct Solve {
    /// Path to the JSON file containing the problem.
    path: PathBuf,
    /// Strategy name override; defaults to the strategy named in the file.
    #[arg(short, long)]
    strategy: Option<String>,
    /// Include the runtime in the summary.
    #[arg(short, long, default_value_t = false)]
    time: bool,
    /// Print the result as JSON (Hint: redirect stdout)
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

#[derive(clap::Args, Debug)]
pub struct Run {
    /// Path to the experiment JSON file.
    path: PathBuf,
}

impl Command {
    pub fn run(self) {
        match self {
            Command::Solve(args) => args.run(),
            Command::Run(args) => args.run(),
            Command::ListStrategies => list_strategies(),
        }
    }
}
