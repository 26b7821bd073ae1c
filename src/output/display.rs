//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{CensusResult, SimulationReport};
use colored::Colorize;

/// Print the word counts of a dictionary
pub fn print_census(result: &CensusResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY CENSUS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📚 {} words",
        result.total_words.to_string().bright_yellow().bold()
    );

    let largest = result.by_length.iter().map(|&(_, n)| n).max().unwrap_or(0);
    let common = result.most_common_length();

    println!("\n📈 {}", "By length:".bright_cyan().bold());
    for &(length, count) in &result.by_length {
        let bar = create_progress_bar(count as f64, largest as f64, 30);
        let bar = if Some(length) == common {
            bar.green()
        } else {
            bar.bright_black()
        };
        println!("   {length:>3}: {bar} {count:5}");
    }
}

/// Print the result of a simulation run
pub fn print_simulation_report(report: &SimulationReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n🎲 {} candidates of length {}, {} wrong guesses allowed",
        report.candidates, report.word_length, report.guess_budget
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    for stats in &report.stats {
        let win_pct = stats.win_rate() * 100.0;
        println!(
            "\n📊 {}",
            format!("{}:", stats.difficulty).bright_cyan().bold()
        );
        println!("   Rounds:           {}", stats.rounds);
        println!(
            "   Player wins:      {} {}",
            format!("{win_pct:.1}%").bright_yellow().bold(),
            create_progress_bar(win_pct, 100.0, 30).green()
        );
        println!("   Average guesses:  {:.2}", stats.average_guesses());
        println!(
            "   Words left:       {:.1} on average",
            stats.average_candidates_left()
        );
        match stats.average_guesses_to_narrow() {
            Some(average) => println!(
                "   Narrowed to one:  {} rounds, after {average:.1} guesses",
                stats.narrowed_rounds
            ),
            None => println!("   Narrowed to one:  {}", "never".yellow()),
        }
    }
}
