use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use spectrum_scorer::config::SpectrumConfig;
use spectrum_scorer::scorer::{AnalysisDetails, AnalysisResult, DeficiencyType};
use std::collections::HashMap;
use strum::IntoEnumIterator;

const BAND_EDGES: [&str; 6] = [
    "Red-Orange",
    "Orange-Yellow",
    "Yellow-Green",
    "Green-Blue",
    "Blue-Indigo",
    "Indigo-Violet",
];

fn kind_color(kind: DeficiencyType) -> Color {
    match kind {
        DeficiencyType::Normal => Color::Green,
        DeficiencyType::Unknown | DeficiencyType::Incomplete => Color::Yellow,
        _ => Color::Red,
    }
}

fn score_color(score: f64) -> Color {
    if score >= 90.0 {
        Color::Green
    } else if score >= 50.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn right_align(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// Per-boundary breakdown followed by the verdict.
pub fn print_details_report(details: &AnalysisDetails, config: &SpectrumConfig) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Transition").add_attribute(Attribute::Bold),
        Cell::new("Marked (px)"),
        Cell::new("Position"),
        Cell::new("Ideal"),
        Cell::new("Deviation").fg(Color::Cyan),
    ]);
    right_align(&mut table, 1..=4);

    for (i, edge) in BAND_EDGES.iter().enumerate() {
        let dev = details.deviations[i];
        let dev_cell = Cell::new(format!("{:+.3}", dev));
        let dev_cell = if dev.abs() > config.deviation_threshold {
            dev_cell.fg(Color::Red)
        } else {
            dev_cell
        };
        table.add_row(vec![
            Cell::new(*edge).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", details.positions[i] * config.axis_extent)),
            Cell::new(format!("{:.3}", details.positions[i])),
            Cell::new(format!("{:.3}", config.boundaries[i])),
            dev_cell,
        ]);
    }
    println!("\n{}", table);

    let mut groups = Table::new();
    groups
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    groups.add_row(vec![
        Cell::new("Pattern").add_attribute(Attribute::Bold),
        Cell::new("Mean |Dev|"),
        Cell::new(format!("Limit {:.3}", config.deviation_threshold)),
    ]);
    right_align(&mut groups, 1..=2);

    for (kind, mean) in &details.group_means {
        let over = *mean > config.deviation_threshold;
        groups.add_row(vec![
            Cell::new(format!("{} ({})", kind, kind.description())),
            Cell::new(format!("{:.4}", mean)),
            if over {
                Cell::new("OVER").fg(Color::Red)
            } else {
                Cell::new("ok").fg(Color::Green)
            },
        ]);
    }
    println!("\n{}", groups);

    println!("MSE: {:.6}", details.mse);
    print_result(&details.result);
}

pub fn print_result(result: &AnalysisResult) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", result.score)).fg(score_color(result.score)),
    ]);
    table.add_row(vec![
        Cell::new("Type").add_attribute(Attribute::Bold),
        Cell::new(result.kind.to_string()).fg(kind_color(result.kind)),
    ]);
    table.add_row(vec![
        Cell::new("Message").add_attribute(Attribute::Bold),
        Cell::new(&result.message),
    ]);
    println!("\n{}", table);
}

pub fn print_batch_report(results: &[(String, AnalysisResult)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Session").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Type"),
    ]);
    right_align(&mut table, 1..=1);

    for (session, r) in results {
        table.add_row(vec![
            Cell::new(session).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", r.score)).fg(score_color(r.score)),
            Cell::new(r.kind.to_string()).fg(kind_color(r.kind)),
        ]);
    }
    println!("\n{}", table);

    print_batch_summary(results);
}

fn print_batch_summary(results: &[(String, AnalysisResult)]) {
    let mut counts: HashMap<DeficiencyType, usize> = HashMap::new();
    for (_, r) in results {
        *counts.entry(r.kind).or_default() += 1;
    }

    // Only sessions that reached scoring contribute to the mean
    let scored: Vec<f64> = results
        .iter()
        .filter(|(_, r)| !matches!(r.kind, DeficiencyType::Unknown | DeficiencyType::Incomplete))
        .map(|(_, r)| r.score)
        .collect();

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![
        Cell::new(format!("Summary ({} sessions)", results.len())).add_attribute(Attribute::Bold),
        Cell::new("Count"),
    ]);
    right_align(&mut table, 1..=1);

    for kind in DeficiencyType::iter() {
        let n = counts.get(&kind).copied().unwrap_or(0);
        table.add_row(vec![
            Cell::new(kind.to_string()).fg(kind_color(kind)),
            Cell::new(n.to_string()),
        ]);
    }

    let mean = if scored.is_empty() {
        0.0
    } else {
        scored.iter().sum::<f64>() / scored.len() as f64
    };
    table.add_row(vec![
        Cell::new("Mean score").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", mean)).fg(score_color(mean)),
    ]);
    println!("\n{}", table);
}
