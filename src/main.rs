//! Command line runner that trains a network on one of the bundled problems
//! and prints its predictions.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use ndarray::Array1;
use rusty_mlp::config::{NetworkConfig, TrainingConfig};
use rusty_mlp::metric::accuracy;
use rusty_mlp::problem::{Problem, SineWaveProblem, XorProblem};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProblemKind {
    /// Exclusive-or over two binary inputs
    Xor,
    /// sin(x) over one period
    Sine,
}

#[derive(Parser)]
#[command(name = "mlp-runner")]
#[command(about = "Train a multilayer perceptron on a bundled problem", long_about = None)]
struct Cli {
    /// Problem to solve
    #[arg(short, long, value_enum, default_value = "xor")]
    problem: ProblemKind,

    /// Width of the hidden layer
    #[arg(long, default_value = "3")]
    hidden: usize,

    /// Activation function of every layer (sigmoid, tanh, relu, linear).
    /// Defaults to sigmoid for xor and tanh for sine
    #[arg(short, long)]
    activation: Option<String>,

    /// Number of passes over the training data
    #[arg(short, long, default_value = "10000")]
    epochs: usize,

    /// Gradient descent step size
    #[arg(short, long, default_value = "0.5")]
    learning_rate: f64,

    /// Seed for weight initialization
    #[arg(short, long)]
    seed: Option<u64>,

    /// Show a progress bar while training
    #[arg(long)]
    progress: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("rusty_mlp=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.problem {
        ProblemKind::Xor => run(&XorProblem, &cli, "sigmoid", true),
        ProblemKind::Sine => run(&SineWaveProblem, &cli, "tanh", false),
    }
}

fn run<P: Problem>(
    problem: &P,
    cli: &Cli,
    default_activation: &str,
    report_accuracy: bool,
) -> Result<()> {
    let activation = cli
        .activation
        .clone()
        .unwrap_or_else(|| default_activation.to_string());

    let network_config = NetworkConfig {
        structure: vec![problem.input_size(), cli.hidden, problem.output_size()],
        activations: vec![activation.clone(), activation],
        random_seed: cli.seed,
    };
    let training_config =
        TrainingConfig::new(cli.epochs, cli.learning_rate)?.with_progress(cli.progress);

    let mut network = network_config.build()?;
    network.summary();

    let data: Vec<(Array1<f64>, Array1<f64>)> = problem
        .training_data()
        .into_iter()
        .map(|(inputs, targets)| (problem.preprocess_inputs(inputs), targets))
        .collect();

    let history = network.train_with_config(&data, &training_config)?;
    if let (Some(first), Some(last)) = (history.first(), history.last()) {
        println!("\nLoss: {:.6} (first epoch) -> {:.6} (last epoch)", first, last);
    }

    println!("\nPredictions:");
    let mut answers = Vec::with_capacity(data.len());
    let mut expected = Vec::with_capacity(data.len());
    for (inputs, targets) in &data {
        let raw = network.predict(inputs)?;
        let answer = problem.postprocess_outputs(raw.clone());
        println!(
            "  {:?} -> raw {:?}, answer {:?}, target {:?}",
            inputs.to_vec(),
            raw.to_vec(),
            answer.to_vec(),
            targets.to_vec()
        );
        answers.extend(answer.iter().copied());
        expected.extend(problem.postprocess_outputs(targets.clone()).iter().copied());
    }

    println!("\nMean squared error: {:.6}", network.mean_squared_error(&data)?);
    if report_accuracy {
        println!(
            "Post-processed accuracy: {:.2}%",
            accuracy(&Array1::from(answers), &Array1::from(expected))? * 100.0
        );
    }

    Ok(())
}
