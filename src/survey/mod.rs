mod types;

pub use types::{Question, WeeklyParticipation, QUESTIONS};
