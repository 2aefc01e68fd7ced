//! Plain-text rendering of a demo run.
//!
//! Formats the generated scenario and the solver's outcome as a console
//! report: anchors, the hidden node, exact and measured ranges, the winning
//! estimate, and the per-trial outcome table.
use crate::demo::scenario::Scenario;
use crate::solver::types::{Point, SolveOutcome, TrialOutcome};

/// Render a full demo report.
///
/// The output is stable given identical inputs, so seeded demo runs can be
/// diffed line by line.
pub fn render(scenario: &Scenario, outcome: &SolveOutcome) -> String {
    let mut out = String::new();

    out.push_str("Anchors:\n");
    for j in 0..scenario.anchors.nrows() {
        let row = scenario.anchors.row(j).to_owned();
        out.push_str(&format!("  [{j}] {}\n", format_point(&row)));
    }

    out.push_str(&format!("Node:              {}\n", format_point(&scenario.node)));
    out.push_str(&format!("Ranges (exact):    {}\n", format_values(scenario.ranges.iter())));
    out.push_str(&format!("Ranges (measured): {}\n", format_values(scenario.measured.iter())));

    out.push_str(&format!(
        "Estimate:          {}  residual {:.6}  (trial {})\n",
        format_point(&outcome.position),
        outcome.error,
        outcome.best_trial
    ));
    out.push_str(&format!(
        "Trials:            {} recorded / {} total\n",
        outcome.filled_count(),
        outcome.trials.len()
    ));

    for (index, trial) in outcome.trials.iter().enumerate() {
        match trial {
            TrialOutcome::Filled { position, error } => {
                out.push_str(&format!(
                    "  [{index:>3}] recorded {}  error {error:.6}\n",
                    format_point(position)
                ));
            }
            TrialOutcome::Missing => {
                out.push_str(&format!("  [{index:>3}] missing\n"));
            }
        }
    }

    out
}

fn format_point(point: &Point) -> String {
    let coords: Vec<String> = point.iter().map(|v| format!("{v:.3}")).collect();
    format!("({})", coords.join(", "))
}

fn format_values<'a, I: Iterator<Item = &'a f64>>(values: I) -> String {
    let rendered: Vec<String> = values.map(|v| format!("{v:.3}")).collect();
    rendered.join("  ")
}
