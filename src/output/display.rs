//! Display functions for command results

use super::formatters::{cell_label, create_progress_bar, format_path};
use crate::commands::{BenchmarkResult, SolveReport};
use crate::core::Grid;
use colored::Colorize;

/// Print the grid, highlighting the cells in `highlight`
pub fn print_grid(grid: &Grid, highlight: &[usize]) {
    let cols = grid.shape().cols();
    for (row, chunk) in grid.cells().chunks(cols).enumerate() {
        let line: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(col, &cell)| {
                let label = cell_label(cell).to_string();
                if highlight.contains(&(row * cols + col)) {
                    label.black().on_green().bold().to_string()
                } else {
                    label.bold().to_string()
                }
            })
            .collect();
        println!("   {}", line.join(" "));
    }
}

/// Print the result of solving a grid
///
/// Lists at most `limit` matches; the best one is highlighted on the grid.
pub fn print_solve_report(report: &SolveReport, limit: usize) {
    let results = &report.results;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Grid: {}",
        report.grid.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!();

    let highlight = results
        .best()
        .map_or(&[][..], |best| best.cell_indexes.as_slice());
    print_grid(&report.grid, highlight);

    if results.is_empty() {
        println!("\n{}", "No solution found".red().bold());
        return;
    }

    let top_points = results.best().map_or(0, |m| m.points);
    println!();
    for (rank, m) in results.iter().take(limit).enumerate() {
        let bar = create_progress_bar(f64::from(m.points), f64::from(top_points), 12);
        println!(
            "{:>4}. {:<8} {:>3} pts {}  {}",
            rank + 1,
            m.value.to_uppercase().bold(),
            m.points,
            bar.green(),
            format_path(report.grid.shape(), &m.cell_indexes).bright_black()
        );
    }
    if results.len() > limit {
        println!("      … {} more", results.len() - limit);
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ {} matches ({} distinct words) in {:.2} ms",
            results.len(),
            results.distinct_values().len(),
            report.duration.as_secs_f64() * 1000.0
        )
        .green()
        .bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Grids solved:     {}", result.total_grids);
    println!("   Total matches:    {}", result.total_matches);
    println!(
        "   Average matches:  {}",
        format!("{:.2}", result.average_matches)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest:           {}",
        format!("{}", result.min_matches).yellow()
    );
    println!(
        "   Most:             {}",
        format!("{}", result.max_matches).green()
    );
    println!("   Empty grids:      {}", result.empty_grids);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Grids/second:     {:.1}", result.grids_per_second);

    if let Some((word, points)) = &result.best_word {
        println!(
            "\n🏆 Best word: {} ({points} pts)",
            word.to_uppercase().bright_yellow().bold()
        );
    }
}
