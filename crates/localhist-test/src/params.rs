//! Regression test parameters and operations

use localhist_core::Surface;
use std::fmt::Debug;

/// Regression test parameters
///
/// Tracks the state of one regression test: its name, the index of the
/// current check, and every failure seen so far. Checks never panic; the
/// test asserts on [`RegParams::cleanup`] at the end so that all failures
/// are reported together.
pub struct RegParams {
    /// Name of the test (e.g., "median")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two surfaces for exact equality
    ///
    /// Reports the first differing pixel and the total number of
    /// differing pixels.
    pub fn compare_surfaces(&mut self, expected: &Surface, actual: &Surface) -> bool {
        self.index += 1;

        if !expected.sizes_equal(actual) {
            let msg = format!(
                "Failure in {}_reg: surface comparison for index {} - dimension mismatch \
                 {}x{} vs {}x{}",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            );
            return self.fail(msg);
        }

        let width = expected.width() as usize;
        let mut mismatches = expected
            .data()
            .iter()
            .zip(actual.data())
            .enumerate()
            .filter(|(_, (e, a))| e != a);

        match mismatches.next() {
            None => true,
            Some((i, (e, a))) => {
                let count = 1 + mismatches.count();
                let msg = format!(
                    "Failure in {}_reg: surface comparison for index {} - {} pixels differ, \
                     first at ({}, {}): expected {:?}, actual {:?}",
                    self.test_name,
                    self.index,
                    count,
                    i % width,
                    i / width,
                    e,
                    a
                );
                self.fail(msg)
            }
        }
    }

    /// Compare two slices element by element
    pub fn compare_slices<T: PartialEq + Debug>(&mut self, expected: &[T], actual: &[T]) -> bool {
        self.index += 1;

        if expected.len() != actual.len() {
            let msg = format!(
                "Failure in {}_reg: slice comparison for index {}\n\
                 lengths: {} vs {}",
                self.test_name,
                self.index,
                expected.len(),
                actual.len()
            );
            return self.fail(msg);
        }

        match expected.iter().zip(actual).position(|(e, a)| e != a) {
            None => true,
            Some(i) => {
                let msg = format!(
                    "Failure in {}_reg: slice comparison for index {} at element {}\n\
                     expected = {:?}, actual = {:?}",
                    self.test_name, self.index, i, expected[i], actual[i]
                );
                self.fail(msg)
            }
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
