use idle_sweep::FrameBuffer;

/// A single pixel-color expectation to validate after rendering.
pub struct PixelExpectation {
    pub x: u32,
    pub y: u32,
    pub expected_r: u8,
    pub expected_g: u8,
    pub expected_b: u8,
    /// Per-channel tolerance for comparison (default 1).
    pub tolerance: u8,
    /// Human-readable label for failure messages.
    pub label: &'static str,
}

impl PixelExpectation {
    /// Expects an opaque pixel with the given color.
    pub fn opaque(x: u32, y: u32, r: u8, g: u8, b: u8, label: &'static str) -> Self {
        Self {
            x,
            y,
            expected_r: r,
            expected_g: g,
            expected_b: b,
            tolerance: 1,
            label,
        }
    }

    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Validates pixel expectations against a rendered frame.
///
/// Every pixel must be fully opaque. Returns a list of human-readable failure
/// descriptions; an empty list means all expectations passed.
pub fn check_pixels(frame: &FrameBuffer, expectations: &[PixelExpectation]) -> Vec<String> {
    let mut failures = Vec::new();
    let (width, height) = frame.size();

    for expectation in expectations {
        let Some([actual_r, actual_g, actual_b, actual_a]) = frame.rgba(expectation.x, expectation.y)
        else {
            failures.push(format!(
                "[{}] pixel ({},{}) is outside frame {}×{}",
                expectation.label, expectation.x, expectation.y, width, height,
            ));
            continue;
        };

        let tolerance = expectation.tolerance;
        let matches = actual_a == 0xFF
            && actual_r.abs_diff(expectation.expected_r) <= tolerance
            && actual_g.abs_diff(expectation.expected_g) <= tolerance
            && actual_b.abs_diff(expectation.expected_b) <= tolerance;

        if !matches {
            failures.push(format!(
                "[{}] pixel ({},{}) expected rgb({},{},{}) ±{} opaque but got rgba({},{},{},{})",
                expectation.label,
                expectation.x,
                expectation.y,
                expectation.expected_r,
                expectation.expected_g,
                expectation.expected_b,
                expectation.tolerance,
                actual_r,
                actual_g,
                actual_b,
                actual_a,
            ));
        }
    }

    failures
}
