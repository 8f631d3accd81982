//! Commands related to solving problems and running experiments.
use super::*;

fn print_field(out: &mut StandardStream, label: &str, value: &str) -> std::io::Result<()> {
    let mut bold = ColorSpec::new();
    bold.set_bold(true);

    out.set_color(&bold)?;
    write!(out, "{:<18}", label)?;
    out.reset()?;
    writeln!(out, "{}", value)
}

fn print_search_result(
    out: &mut StandardStream,
    result: &Result<search::SearchResult, SearchFailure>,
    with_time: bool,
) -> std::io::Result<()> {
    match result {
        Ok(result) => {
            print_field(out, "Solution:", result.solution_text())?;
            print_field(out, "Nodes generated:", &result.generated.to_string())?;
            print_field(out, "Cost:", &result.cost_text())?;
            if with_time {
                print_field(out, "Runtime:", &format!("{:.6}", result.runtime))?;
            }
        }
        Err(failure) => {
            out.set_color(ColorSpec::new().set_bold(true).set_fg(Some(Color::Red)))?;
            writeln!(out, "Search failed!")?;
            out.reset()?;
            writeln!(out, "{}", failure)?;
        }
    }
    Ok(())
}

impl Solve {
    pub fn run(self) {
        let mut stderr = StandardStream::stderr(ColorChoice::Auto);
        let Solve {
            path,
            strategy,
            time,
            json,
        } = self;

        let mut problem = match BoardProblem::read_from_file(&path) {
            Ok(x) => x,
            Err(err) => fatal_error!(1, "Cannot read problem: {}", err),
        };
        if let Some(strategy) = strategy {
            log::info!("Overriding strategy {} with {}", problem.strategy, strategy);
            problem.strategy = strategy;
        }
        let name = problem.name.clone().unwrap_or_else(|| "-".to_string());

        print_field(&mut stderr, "Problem Name:", &name).unwrap();
        print_field(&mut stderr, "Strategy:", &problem.strategy).unwrap();

        stderr
            .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))
            .unwrap();
        write!(&mut stderr, "Solving...\r").unwrap();
        stderr.reset().unwrap();
        stderr.flush().unwrap();

        let result = problem.solve();

        print_search_result(&mut stderr, &result, time).unwrap();

        if json {
            let run = StrategyRunResult {
                problem: problem.name.clone(),
                strategy: problem.strategy.clone(),
                result,
            };
            let serialized = match serde_json::to_string_pretty(&run) {
                Ok(s) => s,
                Err(e) => fatal_error!(1, "Error while serializing results: {}", e),
            };
            println!("{}", serialized);
        }
    }
}

/// Solve every problem of the experiment with every strategy of its task.
fn run_experiment(experiment: Experiment) -> Vec<StrategyRunResult> {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);

    print_field(
        &mut stderr,
        "Experiment Name:",
        experiment.name.as_deref().unwrap_or("-"),
    )
    .unwrap();

    let total: usize = experiment
        .tasks
        .iter()
        .map(|task| task.problems.len() * task.strategies.len())
        .sum();

    let mut current: usize = 1;
    let mut results: Vec<StrategyRunResult> = Vec::new();

    for task in experiment.tasks.into_iter() {
        let ExperimentTask {
            problems,
            strategies,
        } = task;
        for problem in problems {
            let name = problem.name.clone();

            writeln!(&mut stderr).unwrap();
            print_field(
                &mut stderr,
                "Problem Name:",
                name.as_deref().unwrap_or("-"),
            )
            .unwrap();

            let prepared = problem.prepare();

            for strategy in &strategies {
                stderr
                    .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))
                    .unwrap();
                writeln!(&mut stderr, "Solving {}/{}...", current, total).unwrap();
                stderr.reset().unwrap();
                stderr.flush().unwrap();

                let result = match &prepared {
                    Ok(problem) => search::solve_by_name(strategy, problem),
                    Err(failure) => Err(failure.clone()),
                };

                print_field(&mut stderr, "Strategy:", strategy).unwrap();
                print_search_result(&mut stderr, &result, true).unwrap();

                results.push(StrategyRunResult {
                    problem: name.clone(),
                    strategy: strategy.clone(),
                    result,
                });
                current += 1;
            }
        }
    }

    results
}

impl Run {
    pub fn run(self) {
        let mut stderr = StandardStream::stderr(ColorChoice::Auto);
        let Run { path } = self;

        let mut results_path = match std::env::current_dir() {
            Ok(p) => p,
            Err(e) => fatal_error!(1, "Cannot open current working directory: {}", e),
        };

        results_path.push(RESULTS_DIR);
        if let Err(e) = std::fs::create_dir_all(&results_path) {
            fatal_error!(1, "Cannot create results directory: {e}");
        }
        results_path.push(path.file_name().unwrap());
        if results_path.exists() {
            fatal_error!(
                1,
                "Results file is present: {}",
                results_path.to_string_lossy()
            );
        }

        let experiment = match fs::read_experiment_from_file(&path) {
            Ok(s) => s,
            Err(err) => fatal_error!(1, "Cannot parse experiment: {}", err),
        };

        let results = run_experiment(experiment);

        if let Err(e) = fs::save_results(&results, &results_path) {
            fatal_error!(1, "Cannot save results: {}", e);
        }

        stderr
            .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))
            .unwrap();
        writeln!(&mut stderr, "Done!").unwrap();
        stderr.reset().unwrap();
    }
}
