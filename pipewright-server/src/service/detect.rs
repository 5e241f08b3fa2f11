//! Tech-stack detection
//!
//! Maps free-text project requirements to recognized technology tags by
//! raw case-insensitive substring containment. No tokenization or word
//! boundaries: a keyword embedded inside another word still matches, so
//! "cmake" in the input also yields "make". Deliberately permissive.

/// Recognized technology keywords, in detection order
const TECH_KEYWORDS: [&str; 7] = ["docker", "artifactory", "cmake", "make", "ghs", "bat", "sh"];

/// Detects technology tags mentioned in the requirements text
///
/// Pure function; never fails. Returns matched tags in keyword-table
/// order, without duplicates.
pub fn detect_tech_stack(requirements: &str) -> Vec<&'static str> {
    let requirements_lower = requirements.to_lowercase();

    TECH_KEYWORDS
        .iter()
        .copied()
        .filter(|tech| requirements_lower.contains(tech))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_is_case_insensitive() {
        assert_eq!(detect_tech_stack("Uses Docker"), vec!["docker"]);
        assert_eq!(detect_tech_stack("ARTIFACTORY uploads"), vec!["artifactory"]);
    }

    #[test]
    fn test_detect_matches_substrings_inside_words() {
        // "cmake" contains "make"; both tags come back
        assert_eq!(detect_tech_stack("built with CMake"), vec!["cmake", "make"]);

        // "bash" contains "sh"
        assert_eq!(detect_tech_stack("bash scripts only"), vec!["sh"]);
    }

    #[test]
    fn test_detect_multiple_keywords() {
        let detected = detect_tech_stack("Docker image uploaded to Artifactory, built via make");
        assert_eq!(detected, vec!["docker", "artifactory", "make"]);
    }

    #[test]
    fn test_detect_nothing_recognized() {
        assert!(detect_tech_stack("a plain Python project").is_empty());
        assert!(detect_tech_stack("").is_empty());
    }
}
