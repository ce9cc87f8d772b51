//! Boxed text rendering of thought records.
//!
//! ```text
//! ┌────────────────┐
//! │ Thought 1/3 │
//! ├────────────────┤
//! │ Test thought   │
//! └────────────────┘
//! ```

use colored::{ColoredString, Colorize};

use super::record::{ThoughtKind, ThoughtRecord};

const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Render a record as a plain boxed block.
pub fn render(record: &ThoughtRecord) -> String {
    frame(record, |header| header.to_string())
}

/// Render a record with the header painted by kind.
///
/// The whole header is painted as one run so that `"Revision 2/3"` and the
/// context survive as contiguous substrings between the escape codes.
pub fn render_colored(record: &ThoughtRecord) -> String {
    let kind = record.kind();
    frame(record, |header| paint(kind, header).to_string())
}

/// Header line: `{label} {thought_number}/{total_thoughts}{context}`
pub fn header(record: &ThoughtRecord) -> String {
    format!(
        "{} {}/{}{}",
        record.kind().label(),
        record.thought_number,
        record.total_thoughts,
        context(record)
    )
}

fn context(record: &ThoughtRecord) -> String {
    match record.kind() {
        ThoughtKind::Revision => {
            format!(" (revising thought {})", or_unknown(record.revises_thought))
        }
        ThoughtKind::Branch => format!(
            " (from thought {}, ID: {})",
            or_unknown(record.branch_from_thought),
            record.branch_id.as_deref().unwrap_or("?")
        ),
        ThoughtKind::Thought => String::new(),
    }
}

fn or_unknown(value: Option<u64>) -> String {
    value.map_or_else(|| "?".to_string(), |n| n.to_string())
}

fn paint(kind: ThoughtKind, text: &str) -> ColoredString {
    match kind {
        ThoughtKind::Revision => text.yellow(),
        ThoughtKind::Branch => text.green(),
        ThoughtKind::Thought => text.blue(),
    }
}

fn frame(record: &ThoughtRecord, style_header: impl Fn(&str) -> String) -> String {
    let header = header(record);
    let thought_len = record.thought.chars().count();

    let width = header.chars().count().max(thought_len) + 4;
    let border: String = std::iter::repeat(HORIZONTAL).take(width).collect();

    // Only the thought row is padded out to the border; the header row keeps
    // its natural length.
    let thought_pad = " ".repeat(width - 2 - thought_len);

    format!(
        "\n┌{border}┐\n{v} {styled} {v}\n├{border}┤\n{v} {thought}{thought_pad} {v}\n└{border}┘",
        v = VERTICAL,
        styled = style_header(&header),
        thought = record.thought,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_thought() {
        let record = ThoughtRecord::new("Test thought", 1, 3, true);
        let rendered = render(&record);

        assert!(rendered.contains("Thought 1/3"));
        assert!(rendered.contains("Test thought"));
        assert!(!rendered.contains("revising"));
        assert!(!rendered.contains("from thought"));
    }

    #[test]
    fn test_render_revision() {
        let record = ThoughtRecord::new("Revision thought", 2, 3, true).revising(1);
        let rendered = render(&record);

        assert!(rendered.contains("Revision 2/3"));
        assert!(rendered.contains("(revising thought 1)"));
        assert!(rendered.contains("Revision thought"));
    }

    #[test]
    fn test_render_branch() {
        let record = ThoughtRecord::new("Branch thought", 2, 3, true).branching(1, "branch-1");
        let rendered = render(&record);

        assert!(rendered.contains("Branch 2/3"));
        assert!(rendered.contains("(from thought 1, ID: branch-1)"));
        assert!(rendered.contains("Branch thought"));
    }

    #[test]
    fn test_render_revision_wins_over_branch() {
        let record = ThoughtRecord::new("both", 3, 3, false)
            .branching(1, "b")
            .revising(2);
        let rendered = render(&record);

        assert!(rendered.contains("Revision 3/3 (revising thought 2)"));
        assert!(!rendered.contains("Branch"));
    }

    #[test]
    fn test_render_half_specified_metadata() {
        let mut record = ThoughtRecord::new("t", 2, 3, true);
        record.is_revision = true;
        assert!(render(&record).contains("(revising thought ?)"));

        let mut record = ThoughtRecord::new("t", 2, 3, true);
        record.branch_from_thought = Some(1);
        assert!(render(&record).contains("(from thought 1, ID: ?)"));
    }

    #[test]
    fn test_render_box_geometry() {
        let record = ThoughtRecord::new("Test thought", 1, 3, true);
        let rendered = render(&record);
        let lines: Vec<&str> = rendered.lines().collect();

        // Leading newline, then five rows.
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "");

        // "Test thought" (12) beats "Thought 1/3" (11): width 16.
        let border = "─".repeat(16);
        assert_eq!(lines[1], format!("┌{border}┐"));
        assert_eq!(lines[2], "│ Thought 1/3 │");
        assert_eq!(lines[3], format!("├{border}┤"));
        assert_eq!(lines[4], "│ Test thought   │");
        assert_eq!(lines[5], format!("└{border}┘"));

        for line in [lines[1], lines[3], lines[4], lines[5]] {
            assert_eq!(line.chars().count(), 18);
        }
    }

    #[test]
    fn test_render_width_follows_header() {
        let record = ThoughtRecord::new("x", 2, 3, true).branching(1, "branch-1");
        let rendered = render(&record);
        let header_len = "Branch 2/3 (from thought 1, ID: branch-1)".chars().count();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[1].chars().count(), header_len + 6);
        assert_eq!(lines[2].chars().count(), header_len + 4);
        assert_eq!(lines[4].chars().count(), header_len + 6);
    }

    #[test]
    fn test_render_counts_chars_not_bytes() {
        let record = ThoughtRecord::new("ünïcödé", 1, 1, false);
        let rendered = render(&record);

        let lines: Vec<&str> = rendered.lines().collect();

        // "Thought 1/1" (11) is wider than the seven-char thought: width 15.
        assert_eq!(lines[1].chars().count(), 17);
        assert_eq!(lines[4], "│ ünïcödé       │");
    }

    #[test]
    fn test_render_empty_thought() {
        let record = ThoughtRecord::new("", 1, 1, false);
        let rendered = render(&record);

        assert!(rendered.contains("Thought 1/1"));
        assert_eq!(rendered.lines().count(), 6);
    }

    #[test]
    fn test_render_colored_keeps_header_contiguous() {
        colored::control::set_override(true);
        let record = ThoughtRecord::new("Revision thought", 2, 3, true).revising(1);
        let rendered = render_colored(&record);
        colored::control::unset_override();

        assert!(rendered.contains("Revision 2/3 (revising thought 1)"));
        assert!(rendered.contains("\u{1b}["));
    }

    #[test]
    fn test_header_is_pure() {
        let record = ThoughtRecord::new("t", 4, 2, true);
        assert_eq!(header(&record), "Thought 4/2");
        assert_eq!(header(&record), header(&record));
    }
}
