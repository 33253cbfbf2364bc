//! Collects player initials as they are typed at the table.

/// Line-by-line roster entry.
///
/// A blank line ends entry. A line with commas replaces everything collected
/// so far with its comma-separated parts and ends entry. Any other line adds
/// one entry.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    initials: Vec<String>,
    complete: bool,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line of input. Returns `true` while more lines are wanted.
    pub fn push_line(&mut self, line: &str) -> bool {
        if self.complete {
            return false;
        }

        let line = line.trim();
        if line.is_empty() {
            self.complete = true;
        } else if line.contains(',') {
            self.initials = split_list(line, |c| c == ',');
            self.complete = true;
        } else {
            self.initials.push(line.to_string());
        }

        !self.complete
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn initials(&self) -> &[String] {
        &self.initials
    }

    pub fn into_initials(self) -> Vec<String> {
        self.initials
    }
}

/// Splits a one-shot list such as `"AB, CD EF"` on commas and whitespace.
pub fn parse_initials(input: &str) -> Vec<String> {
    split_list(input, |c| c == ',' || c.is_whitespace())
}

fn split_list(input: &str, separator: impl Fn(char) -> bool) -> Vec<String> {
    input
        .split(separator)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_initial_per_line_until_blank() {
        let mut roster = Roster::new();

        assert!(roster.push_line("AB"));
        assert!(roster.push_line("  cd  "));
        assert!(!roster.push_line(""));

        assert!(roster.is_complete());
        assert_eq!(roster.into_initials(), vec!["AB", "cd"]);
    }

    #[test]
    fn test_comma_line_replaces_and_finishes() {
        let mut roster = Roster::new();

        assert!(roster.push_line("XY"));
        assert!(!roster.push_line("AB, CD,,EF "));

        assert_eq!(roster.initials(), ["AB", "CD", "EF"]);
    }

    #[test]
    fn test_input_after_completion_is_ignored() {
        let mut roster = Roster::new();
        roster.push_line("   ");

        assert!(!roster.push_line("AB"));
        assert!(roster.initials().is_empty());
    }

    #[test]
    fn test_parse_initials_accepts_commas_and_spaces() {
        assert_eq!(parse_initials("AB,CD EF ,  GH"), vec!["AB", "CD", "EF", "GH"]);
        assert!(parse_initials(" , ").is_empty());
    }
}
