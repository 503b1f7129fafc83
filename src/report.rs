use crate::catalog::Book;
use colored::Colorize;

// =============================================================================
// Console output
// =============================================================================

pub struct Report;

impl Report {
    pub fn section(title: &str) -> String {
        format!("{}\n{}", title.bold().cyan(), "=".repeat(title.chars().count()))
    }

    pub fn lookup(id: u64, found: Option<&Book>) -> String {
        match found {
            Some(book) => format!("{} {} -> {}", "found".green(), id, book),
            None => format!("{} {} -> no book with this id", "missing".yellow(), id),
        }
    }

    pub fn warning(message: &str) -> String {
        format!("{} {}", "warning:".yellow().bold(), message)
    }

    pub fn error(message: &str) -> String {
        format!("{} {}", "error:".red().bold(), message)
    }

    /// `NO_COLOR` set to any non-empty value turns styling off.
    pub fn should_use_colors() -> bool {
        std::env::var_os("NO_COLOR").map_or(true, |value| value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_section_underline_matches_title() {
        plain();
        assert_eq!(Report::section("Catalog"), "Catalog\n=======");
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        plain();
        let book = Book::new("Hamlet", "Shakespeare", "Simon & Schuster", 215);
        assert_eq!(
            Report::lookup(215, Some(&book)),
            "found 215 -> #215 Hamlet by Shakespeare (Simon & Schuster)"
        );
        assert_eq!(Report::lookup(999, None), "missing 999 -> no book with this id");
    }

    #[test]
    fn test_no_color_environment() {
        std::env::set_var("NO_COLOR", "1");
        assert!(!Report::should_use_colors());
        std::env::set_var("NO_COLOR", "");
        assert!(Report::should_use_colors());
        std::env::remove_var("NO_COLOR");
        assert!(Report::should_use_colors());
    }

    #[test]
    fn test_error_prefix() {
        plain();
        assert_eq!(Report::error("bad file"), "error: bad file");
        assert_eq!(Report::warning("odd id"), "warning: odd id");
    }
}
