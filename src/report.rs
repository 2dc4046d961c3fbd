use std::fmt::Write;

use crate::search::{query::QueryOutcome, RoutePath};

/// Text report of a query, one block per search.
///
/// Reporting stops at the first search that found nothing and ends with a
/// line saying no path exists between the endpoints.
pub fn render_text(outcome: &QueryOutcome) -> String {
    let mut report = String::new();
    let searches = [
        ("Uniform Cost Search", &outcome.ucs),
        ("IDA*", &outcome.ida_star),
    ];
    for (title, path) in searches {
        match path {
            Some(path) => render_path(&mut report, title, path),
            None => {
                let _ = writeln!(
                    report,
                    "Cannot find path from {} to {}",
                    outcome.source, outcome.destination
                );
                break;
            }
        }
    }
    report
}

fn render_path(report: &mut String, title: &str, path: &RoutePath) {
    let _ = writeln!(report, "{}:", title);
    let _ = writeln!(report, "\tPath: {}", path);
    let _ = writeln!(report, "\tCost: {}", path.cost);
}

pub fn render_json(outcome: &QueryOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}
