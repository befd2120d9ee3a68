use crate::rubric::{self, Category};

/// One rubric prompt shown during the weekly survey.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub title: &'static str,
    pub description: &'static str,
}

/// The four prompts, in the order they are asked.
pub static QUESTIONS: [Question; 4] = [
    Question {
        title: "Engagement",
        description: "On what level were they engaged?",
    },
    Question {
        title: "Verbal Participation",
        description: "How well did they verbally participate?",
    },
    Question {
        title: "Classwork and Organization",
        description: "Were they organized? Did they do what they were told when they were told to do it?",
    },
    Question {
        title: "Wonder and Depth of Inquiry",
        description: "Did they posit creative and meaningful questions? Did they share their curiosity meaningfully during the class?",
    },
];

/// One week of participation ratings for a single student. Built from user
/// input, graded, printed, and discarded; nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyParticipation {
    pub engagement: Category,
    pub verbal_participation: Category,
    pub classwork_and_organization: Category,
    pub wonder_and_depth_of_inquiry: Category,
}

impl WeeklyParticipation {
    /// Builds the record from answers given in [`QUESTIONS`] order.
    pub fn from_answers(answers: [Category; 4]) -> Self {
        let [engagement, verbal_participation, classwork_and_organization, wonder_and_depth_of_inquiry] =
            answers;
        Self {
            engagement,
            verbal_participation,
            classwork_and_organization,
            wonder_and_depth_of_inquiry,
        }
    }

    /// The four ratings back in [`QUESTIONS`] order.
    pub fn categories(&self) -> [Category; 4] {
        [
            self.engagement,
            self.verbal_participation,
            self.classwork_and_organization,
            self.wonder_and_depth_of_inquiry,
        ]
    }

    /// Mean of the four numeric scores, as a percentage.
    pub fn overall_score(&self) -> f64 {
        rubric::overall_score(
            self.engagement.label(),
            self.verbal_participation.label(),
            self.classwork_and_organization.label(),
            self.wonder_and_depth_of_inquiry.label(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_answers_preserves_question_order() {
        let week = WeeklyParticipation::from_answers([
            Category::Excellent,
            Category::Proficient,
            Category::Decent,
            Category::Poor,
        ]);
        assert_eq!(week.engagement, Category::Excellent);
        assert_eq!(week.verbal_participation, Category::Proficient);
        assert_eq!(week.classwork_and_organization, Category::Decent);
        assert_eq!(week.wonder_and_depth_of_inquiry, Category::Poor);
    }

    #[test]
    fn test_categories_round_trips_answers() {
        let answers = [
            Category::Poor,
            Category::Decent,
            Category::Deficient,
            Category::Excellent,
        ];
        let week = WeeklyParticipation::from_answers(answers);
        assert_eq!(week.categories(), answers);
    }

    #[test]
    fn test_overall_score_matches_rubric_mean() {
        let week = WeeklyParticipation::from_answers([
            Category::Excellent,
            Category::Poor,
            Category::Decent,
            Category::Deficient,
        ]);
        assert_eq!(week.overall_score(), 71.25);
    }

    #[test]
    fn test_question_count_matches_record_fields() {
        assert_eq!(QUESTIONS.len(), 4);
    }
}
