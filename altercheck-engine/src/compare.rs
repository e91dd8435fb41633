//! Three-way capture comparison: schema, types, data.

use altercheck_core::capture::Capture;

use crate::render;

/// Outcome of one comparison axis: pass/fail plus the rendered
/// expected and actual views for failure reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

impl CheckOutcome {
    /// The `Expected:/Actual:` block used in failure messages.
    pub fn diff(&self) -> String {
        format!("\nExpected:\n{}\n\nActual:\n{}\n", self.expected, self.actual)
    }
}

/// The three independent checks for one fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub schema: CheckOutcome,
    pub types: CheckOutcome,
    pub data: CheckOutcome,
}

impl Comparison {
    pub fn passed(&self) -> bool {
        self.schema.passed && self.types.passed && self.data.passed
    }
}

/// Compare an actual capture against its expected fixture.
///
/// When the actual capture records an execution failure, all three
/// checks fail and carry the captured message verbatim; no positive
/// comparison is attempted. Otherwise the checks are independent:
/// schema and types are ordered sequence equality, data is deep,
/// order-sensitive, type-aware equality (numerics by value).
pub fn compare_captures(expected: &Capture, actual: &Capture) -> Comparison {
    if let Some(message) = actual.error_message.as_deref() {
        let against = |expected_view: String| CheckOutcome {
            passed: false,
            expected: expected_view,
            actual: message.to_string(),
        };
        return Comparison {
            schema: against(render::compose_sequence(&expected.schema)),
            types: against(render::compose_sequence(&expected.types)),
            data: against(render::compose_table(&expected.schema, &expected.data)),
        };
    }

    Comparison {
        schema: sequence_check(&expected.schema, &actual.schema),
        types: sequence_check(&expected.types, &actual.types),
        data: data_check(expected, actual),
    }
}

fn sequence_check(expected: &[String], actual: &[String]) -> CheckOutcome {
    CheckOutcome {
        passed: expected == actual,
        expected: render::compose_sequence(expected),
        actual: render::compose_sequence(actual),
    }
}

fn data_check(expected: &Capture, actual: &Capture) -> CheckOutcome {
    CheckOutcome {
        passed: expected.data == actual.data,
        expected: render::compose_table(&expected.schema, &expected.data),
        actual: render::compose_table(&actual.schema, &actual.data),
    }
}
