//! Text rendering of the contradiction matrix.

use colored::Colorize;
use std::fmt::Write;
use triz_core::TrizEngine;

/// One block per improving parameter, one line per worsening parameter.
pub fn render(engine: &TrizEngine, improving: Option<&str>) -> String {
    let matrix = engine.matrix();
    let rows: Vec<String> = match improving {
        Some(name) => vec![name.trim().to_string()],
        None => matrix.improving_parameters(),
    };

    let mut out = String::new();
    for row_name in rows {
        let cells = matrix.row(&row_name);
        let _ = writeln!(out, "{}", row_name.bold());
        if cells.is_empty() {
            let _ = writeln!(out, "  {}", "(no entries)".dimmed());
            continue;
        }
        for (worsening, ids) in cells {
            let names: Vec<String> = ids
                .iter()
                .map(|id| match engine.principles().get_by_id(*id) {
                    Some(p) => format!("{id} {}", p.name),
                    None => id.to_string(),
                })
                .collect();
            let _ = writeln!(out, "  vs {:<32} {}", worsening, names.join(", "));
        }
    }
    out
}
