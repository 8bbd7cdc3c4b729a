use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use votebar::api::{GroupReport, RoundReport};
use votebar::ballot::Channel;
use votebar::config::{DisplayParams, ScoringRules};

fn votes_cell(votes: Option<u32>) -> Cell {
    match votes {
        Some(v) => Cell::new(v),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}

pub fn print_results_table(report: &RoundReport, display: &DisplayParams) {
    let p = display.precision as usize;
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Group").add_attribute(Attribute::Bold),
        Cell::new("Jury Votes"),
        Cell::new("Audience Votes"),
        Cell::new("Jury"),
        Cell::new("Audience"),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Height %").add_attribute(Attribute::Bold),
    ]);

    for i in 1..=6 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for g in &report.groups {
        table.add_row(vec![
            Cell::new(&g.label).add_attribute(Attribute::Bold),
            votes_cell(g.jury_votes),
            votes_cell(g.audience_votes),
            Cell::new(format!("{:.*}", p, g.jury_score)),
            Cell::new(format!("{:.*}", p, g.audience_score)),
            Cell::new(format!("{:.*}", p, g.total_score)).fg(Color::Cyan),
            Cell::new(format!("{:.*}", p, g.height_percent)),
        ]);
    }

    println!("{}", table);
    println!(
        "Round maxima: jury {} / audience {}",
        report.max_jury, report.max_audience
    );
}

fn channel_lines(
    channel: Channel,
    votes: Option<u32>,
    max_votes: u32,
    score: f64,
    bonus: Option<f64>,
    rules: &ScoringRules,
    p: usize,
) -> Vec<String> {
    let r = rules.channel(channel);
    let mut lines = vec![format!("  Floor: {}", r.floor)];
    if let (Some(v), Some(bonus)) = (votes, bonus) {
        lines.push(format!(
            "  Dynamic: {} × ({} / {}) × ln(1 + {}) / ln(1 + {}) = {:.*}",
            r.spread, v, r.ceiling, v, max_votes, p, bonus
        ));
    }
    lines.push(format!("  Final {} score: {:.*}", channel, p, score));
    lines
}

pub fn print_group_breakdown(
    group: &GroupReport,
    report: &RoundReport,
    rules: &ScoringRules,
    display: &DisplayParams,
) {
    let p = display.precision as usize;
    println!("\n{}", group.label);

    println!("Jury:");
    for line in channel_lines(
        Channel::Jury,
        group.jury_votes,
        report.max_jury,
        group.jury_score,
        group.jury_bonus,
        rules,
        p,
    ) {
        println!("{}", line);
    }

    println!("Audience:");
    for line in channel_lines(
        Channel::Audience,
        group.audience_votes,
        report.max_audience,
        group.audience_score,
        group.audience_bonus,
        rules,
        p,
    ) {
        println!("{}", line);
    }

    println!("Result:");
    println!("  Total: {:.*}", p, group.total_score);
    println!("  Height: {:.*}%", p, group.height_percent);
}
