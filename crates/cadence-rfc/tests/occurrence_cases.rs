mod occurrence_cases_data;

use occurrence_cases_data::{assert_case, occurrence_cases};

#[test_log::test]
fn occurrence_cases_match() {
    for case in occurrence_cases() {
        assert_case(&case);
    }
}
