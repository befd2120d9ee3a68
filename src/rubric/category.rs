use std::fmt;

/// One of the five participation-quality labels a student can earn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Excellent,
    Proficient,
    Decent,
    Deficient,
    Poor,
}

impl Category {
    /// All categories in the order they are offered to the user.
    pub const ALL: [Category; 5] = [
        Category::Excellent,
        Category::Proficient,
        Category::Decent,
        Category::Deficient,
        Category::Poor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Excellent => "Excellent",
            Category::Proficient => "Proficient",
            Category::Decent => "Decent",
            Category::Deficient => "Deficient",
            Category::Poor => "Poor",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_ordered_best_to_worst() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Excellent", "Proficient", "Decent", "Deficient", "Poor"]
        );
    }

    #[test]
    fn test_display_matches_label() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.label());
        }
    }
}
