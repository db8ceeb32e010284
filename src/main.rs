//! Demo runner: solves 8-queens with both engines and prints progress.
//!
//! Reads no input; all parameters are the library defaults. Exits 0.

use queens_metaheur::board::fitness_ceiling;
use queens_metaheur::ga::{GaConfig, GaRunner};
use queens_metaheur::hc::{HcConfig, HcRunner};

fn main() {
    run_genetic();
    println!();
    run_hill_climbing();
}

fn run_genetic() {
    let config = GaConfig::default();
    let ceiling = fitness_ceiling(config.board_size);

    println!("== genetic engine ==");
    let result = GaRunner::run(&config);

    println!("initial population:");
    for board in &result.initial_population {
        let conflicts = board.cached_conflicts().expect("initial population is evaluated");
        println!("{board}  ** fitness {}", ceiling - conflicts);
    }
    for (generation, fitness) in result.fitness_history.iter().enumerate().skip(1) {
        if generation % 1000 == 0 {
            println!("gen {generation:>6}: best fitness {fitness}");
        }
    }

    println!(
        "DONE at generation {} ({})",
        result.generations,
        if result.solved { "solved" } else { "budget exhausted" }
    );
    println!(
        "{}  ** fitness {} ({} conflicts)",
        result.best,
        result.best_fitness,
        ceiling - result.best_fitness
    );
}

fn run_hill_climbing() {
    let config = HcConfig::default();

    println!("== hill-climbing engine ==");
    let result = HcRunner::run(&config);

    println!("{}", result.initial);
    println!("initial cost: {}", result.cost_history[0]);
    for event in &result.resets {
        println!(
            "reset at {:>6}: cost {}  hash {}",
            event.iteration, event.cost, event.hash
        );
    }

    println!(
        "DONE at iteration {} ({})",
        result.iterations,
        if result.solved { "solved" } else { "budget exhausted" }
    );
    println!("{}  ** cost {}", result.best, result.best_cost);
}
