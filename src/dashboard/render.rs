use colored::Colorize;
use std::fmt::Write as _;

use super::page::{OverviewView, PageView};

const NO_RESULTS: &str = "No results.";

/// Plain-text rendering of a page for the terminal.
pub fn render_text(view: &PageView) -> String {
    match view {
        PageView::Overview(overview) => render_overview(overview),
        PageView::TopMovies { min_count, movies } => {
            let rows = movies
                .iter()
                .map(|m| {
                    vec![
                        m.title.clone(),
                        format!("{:.3}", m.mean_rating),
                        m.rating_count.to_string(),
                    ]
                })
                .collect();
            section(
                &format!("Top Rated Movies ({}+ ratings)", min_count),
                &["Title", "Average rating", "Ratings"],
                rows,
            )
        }
        PageView::FindSimilar { title, movies } => {
            let rows = movies
                .iter()
                .map(|m| {
                    vec![
                        m.title.clone(),
                        format!("{:.4}", m.correlation),
                        format!("{:.3}", m.mean_rating),
                        m.rating_count.to_string(),
                    ]
                })
                .collect();
            section(
                &format!("Movies similar to: {}", title),
                &["Title", "Correlation", "Mean rating", "Ratings"],
                rows,
            )
        }
        PageView::Titles { titles } => {
            let rows = titles.iter().map(|t| vec![t.clone()]).collect();
            section("Movies", &["Title"], rows)
        }
    }
}

fn render_overview(overview: &OverviewView) -> String {
    let summary = &overview.summary;
    let mut out = String::new();

    let _ = writeln!(out, "{}", "MovieLens Analysis".bold());
    let _ = writeln!(
        out,
        "{} ratings from {} users across {} titles",
        summary.total_ratings, summary.distinct_users, summary.distinct_titles
    );
    if let (Some(first), Some(last)) = (summary.first_rating_at, summary.last_rating_at) {
        let _ = writeln!(
            out,
            "Rated between {} and {}",
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        );
    }
    out.push('\n');

    let distribution = overview
        .rating_distribution
        .buckets()
        .into_iter()
        .map(|b| vec![b.rating.to_string(), b.count.to_string()])
        .collect();
    out.push_str(&section(
        "Distribution of Ratings",
        &["Rating", "Count"],
        distribution,
    ));
    out.push('\n');

    let most_rated = overview
        .most_rated
        .iter()
        .map(|t| vec![t.title.clone(), t.rating_count.to_string()])
        .collect();
    out.push_str(&section(
        &format!("Top {} Most Rated Movies", overview.most_rated.len()),
        &["Title", "Ratings"],
        most_rated,
    ));
    out
}

fn section(heading: &str, headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading.bold());

    if rows.is_empty() {
        let _ = writeln!(out, "{}", NO_RESULTS);
        return out;
    }

    let widths = column_widths(headers, &rows);

    let header_line = format_row(headers.iter().map(|h| h.to_string()), &widths);
    let _ = writeln!(out, "{}", header_line.cyan());
    for row in rows {
        let _ = writeln!(out, "{}", format_row(row.into_iter(), &widths));
    }
    out
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn format_row(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
