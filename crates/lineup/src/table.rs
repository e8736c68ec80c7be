use unicode_width::UnicodeWidthStr;

use crate::color;

/// One row of the `members` table.
pub struct MemberRow {
    pub rank: usize,
    pub identity: String,
    pub rating: i64,
    pub joined: bool,
}

pub struct MembersTable {
    rank_width: usize,
    member_width: usize,
    rating_width: usize,
    joined_width: usize,
}

impl MembersTable {
    pub fn new(rows: &[MemberRow]) -> Self {
        // Minimum widths = header label lengths
        let mut rank_width = "#".len();
        let mut member_width = "Member".len();
        let mut rating_width = "Rating".len();
        let joined_width = "Joined".len();

        for row in rows {
            rank_width = rank_width.max(display_width(&row.rank.to_string()));
            member_width = member_width.max(display_width(&row.identity));
            rating_width = rating_width.max(display_width(&row.rating.to_string()));
        }

        Self {
            rank_width,
            member_width,
            rating_width,
            joined_width,
        }
    }

    pub fn print_table(&self, rows: &[MemberRow]) {
        println!("{}", self.border('┌', '┬', '┐'));
        println!("{}", self.header_row());
        println!("{}", self.border('├', '┼', '┤'));
        for row in rows {
            self.print_row(row);
        }
        println!("{}", self.border('└', '┴', '┘'));
    }

    fn print_row(&self, row: &MemberRow) {
        let sep = color::muted("│");
        let joined = if row.joined { "yes" } else { "-" };
        println!(
            "{sep} {} {sep} {} {sep} {} {sep} {} {sep}",
            pad_left(&row.rank.to_string(), self.rank_width),
            color::identity(&pad(&row.identity, self.member_width)),
            pad_left(&row.rating.to_string(), self.rating_width),
            if row.joined {
                color::success(&pad(joined, self.joined_width))
            } else {
                color::muted(&pad(joined, self.joined_width))
            },
        );
    }

    fn header_row(&self) -> String {
        let sep = color::muted("│");
        format!(
            "{sep} {} {sep} {} {sep} {} {sep} {} {sep}",
            color::bold(&pad("#", self.rank_width)),
            color::bold(&pad("Member", self.member_width)),
            color::bold(&pad("Rating", self.rating_width)),
            color::bold(&pad("Joined", self.joined_width)),
        )
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        let cells: Vec<String> = [
            self.rank_width,
            self.member_width,
            self.rating_width,
            self.joined_width,
        ]
        .iter()
        .map(|w| "─".repeat(w + 2))
        .collect();
        color::muted(&format!("{left}{}{right}", cells.join(&mid.to_string())))
    }
}

/// Terminal display width of a string. Wide characters (CJK, emoji) count
/// as 2 columns.
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad a string on the right to a minimum display width without truncating.
pub(crate) fn pad(s: &str, min_width: usize) -> String {
    let width = display_width(s);
    if width >= min_width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(min_width - width))
    }
}

/// Pad a string on the left, for numbers.
pub(crate) fn pad_left(s: &str, min_width: usize) -> String {
    let width = display_width(s);
    if width >= min_width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(min_width - width), s)
    }
}
