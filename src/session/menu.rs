//! Numbered interactive menu.

use std::io::Write;

use crate::core::Subject;

pub const MENU_TEXT: &str = "\nBenchmark Tool Menu:\n\
1. Verify Build\n\
2. Measure Assigner Heap Allocation\n\
3. Measure Proof Generation Heap Allocation\n\
4. Measure Assigner Execution Time\n\
5. Measure Proof Generation Execution Time\n\
6. Display Results\n\
7. Exit\n";

pub const PROMPT: &str = "Enter your choice (1-7): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    VerifyBuild,
    MeasureMemory(Subject),
    MeasureTime(Subject),
    DisplayResults,
    Exit,
}

impl MenuChoice {
    /// Parse a line of operator input. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::VerifyBuild),
            "2" => Some(MenuChoice::MeasureMemory(Subject::Assigner)),
            "3" => Some(MenuChoice::MeasureMemory(Subject::Proof)),
            "4" => Some(MenuChoice::MeasureTime(Subject::Assigner)),
            "5" => Some(MenuChoice::MeasureTime(Subject::Proof)),
            "6" => Some(MenuChoice::DisplayResults),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub fn print_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.write_all(MENU_TEXT.as_bytes())?;
    out.write_all(PROMPT.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::VerifyBuild));
        assert_eq!(MenuChoice::parse("2\n"), Some(MenuChoice::MeasureMemory(Subject::Assigner)));
        assert_eq!(MenuChoice::parse(" 3 "), Some(MenuChoice::MeasureMemory(Subject::Proof)));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::MeasureTime(Subject::Assigner)));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::MeasureTime(Subject::Proof)));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::DisplayResults));
        assert_eq!(MenuChoice::parse("7"), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_rejects_other_input() {
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
    }

    #[test]
    fn test_menu_lists_seven_options() {
        let mut buf = Vec::new();
        print_menu(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        for n in 1..=7 {
            assert!(text.contains(&format!("\n{n}. ")));
        }
        assert!(text.ends_with(PROMPT));
    }
}
