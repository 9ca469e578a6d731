//! Spoiler-free share text for finished games.

use crate::scoring::{Direction, GuessResult, MatchType};
use crate::session::{MetrodleSession, RouteSession};

fn square(m: MatchType) -> char {
    match m {
        MatchType::Correct => '🟩',
        MatchType::Partial => '🟨',
        MatchType::Wrong => '⬜',
    }
}

/// One emoji row for a guess: name, line, position, type, connections,
/// distance.
pub fn grid_row(result: &GuessResult) -> String {
    let distance = if result.distance == 0 {
        '🟩'
    } else {
        match result.direction {
            Direction::Up => '🔼',
            Direction::Down => '🔽',
            Direction::None => '⬜',
        }
    };
    [
        if result.name_match { '🟩' } else { '⬛' },
        square(result.line_match),
        square(result.position_match),
        square(result.type_match),
        square(result.connections_match),
        distance,
    ]
    .iter()
    .collect()
}

/// `m:ss`.
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn timer_suffix(solve_seconds: Option<u64>) -> String {
    match solve_seconds {
        Some(s) if s > 0 => format!(" ⏱️ {}", format_time(s)),
        _ => String::new(),
    }
}

/// Share text for the station game.
pub fn metrodle_share(day_number: i64, session: &MetrodleSession) -> String {
    let attempts = if session.is_won() {
        session.guesses().len().to_string()
    } else {
        "X".to_string()
    };
    let grid: Vec<String> = session.guesses().iter().map(grid_row).collect();

    format!(
        "Metrodle #{day_number} 🚇\n{attempts}/{}{}\n\n{}",
        session.config().max_attempts,
        timer_suffix(session.solve_seconds()),
        grid.join("\n")
    )
}

/// Share text for the route game: one square per path station, then the
/// error count.
pub fn route_share(day_number: i64, session: &RouteSession) -> String {
    let progress: String = session
        .path()
        .iter()
        .map(|id| if session.is_confirmed(id) { '🟩' } else { '⬜' })
        .collect();
    let hops = session.path().len().saturating_sub(1);
    let errors = match session.errors() {
        1 => "1 error".to_string(),
        n => format!("{n} errors"),
    };

    format!(
        "Metrodle Route #{day_number} 🚇\n{} → {}\n{hops} stops, {errors}{}\n\n{progress}",
        session.origin().name,
        session.destination().name,
        timer_suffix(session.solve_seconds()),
    )
}
