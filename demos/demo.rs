//! Terminal pathfinding demo.
//!
//! Run: cargo run --bin gridstar-demo [-- --heap]
//!
//! Set `RUST_LOG=debug` (or `trace`) to watch the search.

use gridstar_demo::{MAP, Scenario, render};
use gridstar_paths::{AstarSearch, FrontierKind, LogSink, SearchConfig, SearchState};

fn main() {
    env_logger::init();

    let frontier = if std::env::args().skip(1).any(|a| a == "--heap") {
        FrontierKind::Heap
    } else {
        FrontierKind::Linear
    };
    let config = SearchConfig::default().with_frontier(frontier);

    let scenario = match Scenario::parse(MAP) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "searching {} -> {} on a {}x{} map with {frontier:?} frontier",
        scenario.start,
        scenario.goal,
        scenario.grid.cols(),
        scenario.grid.rows()
    );
    let report = AstarSearch::new(config).search_report(
        &scenario.grid,
        scenario.start,
        scenario.goal,
        &mut LogSink,
    );

    print!("{}", render(&scenario, &report.path));
    match report.state {
        SearchState::Succeeded => println!(
            "path: {} steps, {} expanded, {} pruned, peak frontier {}",
            report.path.len() - 1,
            report.stats.expanded,
            report.stats.pruned,
            report.stats.peak_frontier
        ),
        SearchState::Exhausted => {
            println!("no path ({} expanded)", report.stats.expanded);
            std::process::exit(2);
        }
    }
}
