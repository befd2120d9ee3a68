//! The cosmetic "calculating" pause between the survey and the verdict.

use std::time::Duration;

use indicatif::ProgressBar;

const CALCULATING_MESSAGE: &str = "Calculating participation score...";
const CALCULATING_DELAY: Duration = Duration::from_secs(2);

/// Shows the calculating message for a fixed two seconds. The verdict is
/// already determined; this only paces the reveal. Interactive mode
/// animates a spinner and clears it; accessible mode prints the message
/// once with no animation.
pub fn show_calculating(accessible: bool) {
    if accessible {
        println!("{}", CALCULATING_MESSAGE);
        std::thread::sleep(CALCULATING_DELAY);
        return;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(CALCULATING_MESSAGE);
    spinner.enable_steady_tick(Duration::from_millis(100));
    std::thread::sleep(CALCULATING_DELAY);
    spinner.finish_and_clear();
}
