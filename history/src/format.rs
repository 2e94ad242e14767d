use chrono::{DateTime, Utc};
use std::time::Duration;

use minefield_core::{CLEAR_CHAR, GameRecord};

/// Multi-line summary of one history entry, the way the score list shows it.
pub fn describe(record: &GameRecord) -> String {
    format!(
        "Game Id: {}\nColumns: {}\nRows: {}\nMines: {}\nDate: {}\nTime: {}",
        record.id,
        record.columns,
        record.rows,
        record.mines,
        format_start(record.started_at),
        format_elapsed(record.elapsed),
    )
}

/// Renders the stored layout as a glyph grid, a check mark per safe sector
/// and a cross per mined one.
pub fn layout_glyphs(record: &GameRecord) -> String {
    if record.columns == 0 {
        return String::new();
    }

    let mut out = String::new();
    for (index, ch) in record.layout.chars().enumerate() {
        if index > 0 && index % record.columns as usize == 0 {
            out.push('\n');
        }
        out.push(if ch == CLEAR_CHAR { '\u{2705}' } else { '\u{274c}' });
    }
    out
}

pub fn format_start(started_at: DateTime<Utc>) -> String {
    started_at.format("%b-%d-%Y %H:%M").to_string()
}

/// `MM:SS`, growing an hour field only when needed.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> GameRecord {
        GameRecord {
            id: 7,
            columns: 2,
            rows: 2,
            mines: 1,
            started_at: Utc.with_ymd_and_hms(2021, 3, 4, 12, 30, 0).unwrap(),
            elapsed: Duration::from_secs(75),
            layout: "  * ".to_string(),
        }
    }

    #[test]
    fn describe_lists_the_interesting_fields() {
        let text = describe(&record());

        assert!(text.contains("Game Id: 7"));
        assert!(text.contains("Columns: 2"));
        assert!(text.contains("Mines: 1"));
        assert!(text.contains("Date: Mar-04-2021 12:30"));
        assert!(text.contains("Time: 01:15"));
    }

    #[test]
    fn layout_glyphs_draws_the_grid() {
        let text = layout_glyphs(&record());

        assert_eq!(text, "\u{2705}\u{2705}\n\u{274c}\u{2705}");
    }

    #[test]
    fn format_elapsed_grows_an_hour_field() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "00:00");
        assert_eq!(format_elapsed(Duration::from_secs(75)), "01:15");
        assert_eq!(format_elapsed(Duration::from_secs(3661)), "1:01:01");
    }
}
