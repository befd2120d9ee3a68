/// Converts a category label into a letter grade.
///
/// | Category    | Grade |
/// |-------------|-------|
/// | Excellent   | A     |
/// | Proficient  | B     |
/// | Decent      | C     |
/// | Deficient   | C     |
/// | Poor        | D     |
///
/// Anything not in the table yields `F`. Note the letter table compresses
/// Decent and Deficient into one grade while [`numeric_score`] keeps them
/// apart; the two tables are intentionally independent.
pub fn letter_grade(category: &str) -> char {
    match category {
        "Excellent" => 'A',
        "Proficient" => 'B',
        "Decent" => 'C',
        "Deficient" => 'C',
        "Poor" => 'D',
        _ => 'F',
    }
}

/// Converts a category label into its numeric score. Anything not in the
/// table yields `0.0`.
pub fn numeric_score(category: &str) -> f64 {
    match category {
        "Excellent" => 95.0,
        "Proficient" => 85.0,
        "Decent" => 75.0,
        "Deficient" => 65.0,
        "Poor" => 50.0,
        _ => 0.0,
    }
}

/// Arithmetic mean of the four category scores. No weighting.
pub fn overall_score(c1: &str, c2: &str, c3: &str, c4: &str) -> f64 {
    (numeric_score(c1) + numeric_score(c2) + numeric_score(c3) + numeric_score(c4)) / 4.0
}
