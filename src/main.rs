use clap::Parser;

use participation_grader::rubric;
use participation_grader::survey::QUESTIONS;
use participation_grader::{accessible, config, output, progress, tui};

const EXIT_SUCCESS: i32 = 0;
const EXIT_ABORTED: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "participation-grader")]
#[command(about = "Weekly class participation grader", long_about = None)]
#[command(version)]
struct Cli {
    /// Screen-reader friendly prompts: no animation, no color, no raw
    /// terminal mode. Also enabled by the ACCESSIBLE environment variable.
    #[arg(short, long)]
    accessible: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let settings = config::Settings::resolve(cli.accessible, cli.verbose);

    if settings.verbose {
        eprintln!(
            "Mode: {}",
            if settings.accessible {
                "accessible"
            } else {
                "interactive"
            }
        );
    }

    let survey_outcome = if settings.accessible {
        accessible::run_survey()
    } else {
        tui::run_survey(&tui::resolve_theme())
    };

    let week = match survey_outcome {
        Ok(Some(week)) => week,
        Ok(None) => {
            eprintln!("Uh oh! Grading was cancelled before all four ratings were in.");
            std::process::exit(EXIT_ABORTED);
        }
        Err(e) => {
            eprintln!("Uh oh! : {}", e);
            std::process::exit(EXIT_ABORTED);
        }
    };

    progress::show_calculating(settings.accessible);

    if settings.verbose {
        for (question, category) in QUESTIONS.iter().zip(week.categories()) {
            eprintln!(
                "{}: {} ({} points)",
                question.title,
                category,
                rubric::numeric_score(category.label())
            );
        }
    }

    let use_colors = output::should_use_colors() && !settings.accessible;
    println!("{}", output::render_report(&week, use_colors));

    std::process::exit(EXIT_SUCCESS);
}
