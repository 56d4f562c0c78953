use serde::{Deserialize, Serialize};

/// Minimum ratio of correct answers for a certification to count as passed.
pub const PASS_THRESHOLD: f64 = 0.75;

/// Highest score recorded for a certification attempt, as returned by
/// `GET /certification/{id}/highest-score`. Only the question count is
/// relevant here; individual question payloads pass through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CertificationResult {
    pub correct_questions: u32,
    pub questions: Vec<serde_json::Value>,
}

impl CertificationResult {
    /// Passed iff the correct/total ratio meets [`PASS_THRESHOLD`]. An
    /// attempt with no questions never passes.
    pub fn passed(&self) -> bool {
        if self.questions.is_empty() {
            return false;
        }
        self.correct_questions as f64 / self.questions.len() as f64 >= PASS_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn result(correct: u32, total: usize) -> CertificationResult {
        CertificationResult {
            correct_questions: correct,
            questions: vec![serde_json::json!({}); total],
        }
    }

    #[rstest]
    #[case(8, 10, true)]
    #[case(7, 10, false)]
    #[case(3, 4, true)]
    #[case(10, 10, true)]
    #[case(0, 10, false)]
    fn threshold_is_three_quarters(
        #[case] correct: u32,
        #[case] total: usize,
        #[case] passed: bool,
    ) {
        assert_eq!(result(correct, total).passed(), passed);
    }

    #[test]
    fn zero_questions_never_passes() {
        assert!(!result(0, 0).passed());
    }

    #[test]
    fn decodes_backend_payload() {
        let json = r#"{"correctQuestions": 8, "questions": [1,2,3,4,5,6,7,8,9,10]}"#;
        let parsed: CertificationResult = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.correct_questions, 8);
        assert_eq!(parsed.questions.len(), 10);
        assert!(parsed.passed());
    }
}
