use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::rubric::Category;
use crate::survey::{Question, WeeklyParticipation, QUESTIONS};

/// Walks the four rubric prompts as numbered line-based questions.
/// Screen-reader friendly: no raw mode, no styling, no animation.
/// Returns None when stdin closes before all four answers are in.
pub fn run_survey() -> Result<Option<WeeklyParticipation>> {
    survey_from(io::stdin().lock())
}

fn survey_from<R: BufRead>(reader: R) -> Result<Option<WeeklyParticipation>> {
    let mut lines = reader.lines();
    let mut answers = [Category::Poor; 4];

    for (slot, question) in answers.iter_mut().zip(QUESTIONS.iter()) {
        match ask(question, &mut lines)? {
            Some(category) => *slot = category,
            None => return Ok(None),
        }
    }

    Ok(Some(WeeklyParticipation::from_answers(answers)))
}

/// Prints one numbered prompt and reads selections until one is valid.
/// None means the input ended mid-survey.
fn ask<I>(question: &Question, lines: &mut I) -> Result<Option<Category>>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("{}", question.title);
    println!("{}", question.description);
    println!();
    for (i, category) in Category::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, category);
    }

    loop {
        print!("Choose [1-{}]: ", Category::ALL.len());
        io::stdout().flush().context("Failed to flush prompt")?;

        let line = match lines.next() {
            Some(line) => line.context("Failed to read selection")?,
            None => return Ok(None),
        };

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=Category::ALL.len()).contains(&n) => {
                println!();
                return Ok(Some(Category::ALL[n - 1]));
            }
            _ => {
                println!(
                    "Please enter a number between 1 and {}.",
                    Category::ALL.len()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_survey_reads_four_answers_in_order() {
        let input = Cursor::new("1\n2\n3\n5\n");
        let week = survey_from(input).unwrap().unwrap();
        assert_eq!(week.engagement, Category::Excellent);
        assert_eq!(week.verbal_participation, Category::Proficient);
        assert_eq!(week.classwork_and_organization, Category::Decent);
        assert_eq!(week.wonder_and_depth_of_inquiry, Category::Poor);
    }

    #[test]
    fn test_survey_reprompts_on_invalid_input() {
        // Garbage, out-of-range, and blank lines are retried, not fatal.
        let input = Cursor::new("yes\n0\n6\n\n4\n1\n1\n1\n");
        let week = survey_from(input).unwrap().unwrap();
        assert_eq!(week.engagement, Category::Deficient);
        assert_eq!(week.verbal_participation, Category::Excellent);
    }

    #[test]
    fn test_survey_tolerates_surrounding_whitespace() {
        let input = Cursor::new("  2  \n1\n1\n1\n");
        let week = survey_from(input).unwrap().unwrap();
        assert_eq!(week.engagement, Category::Proficient);
    }

    #[test]
    fn test_survey_eof_is_an_abort() {
        let input = Cursor::new("1\n2\n");
        assert_eq!(survey_from(input).unwrap(), None);
    }

    #[test]
    fn test_survey_eof_immediately_is_an_abort() {
        let input = Cursor::new("");
        assert_eq!(survey_from(input).unwrap(), None);
    }
}
