//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use log::LevelFilter;
use netpbm_core::{ImageKind, Raster, Sample};
use netpbm_io::{AnyRaster, PnmSample};
use simple_logger::SimpleLogger;
use std::fs;
use std::path::Path;
use std::sync::Once;

static LOGGER: Once = Once::new();

/// Install a stderr logger honouring `RUST_LOG`, once per test binary.
fn init_logger() {
    LOGGER.call_once(|| {
        // Another logger may already be installed by the test binary.
        let _ = SimpleLogger::new()
            .with_level(LevelFilter::Warn)
            .env()
            .init();
    });
}

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from environment variable or string
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the running check index, the mode and every
/// failure seen so far.
pub struct RegParams {
    /// Name of the test (e.g., "pnmio")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode comes from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        init_logger();
        let mode = RegTestMode::from_env();

        // Ensure directories exist
        let _ = fs::create_dir_all(golden_dir());
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
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
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two rasters for exact equality of size, maximum value and
    /// samples.
    ///
    /// The encoding is not compared; an ASCII and a binary raster with the
    /// same samples are equal here.
    pub fn compare_rasters<S: Sample>(&mut self, r1: &Raster<S>, r2: &Raster<S>) -> bool {
        self.index += 1;

        if r1.size() != r2.size() || r1.max() != r2.max() {
            let msg = format!(
                "Failure in {}_reg: raster comparison for index {} - \
                 {}x{} max {:?} vs {}x{} max {:?}",
                self.test_name,
                self.index,
                r1.width(),
                r1.height(),
                r1.max(),
                r2.width(),
                r2.height(),
                r2.max()
            );
            self.fail(msg);
            return false;
        }

        let mismatch = r1
            .pixels()
            .iter()
            .zip(r2.pixels())
            .position(|(a, b)| a != b);
        if let Some(i) = mismatch {
            let w = r1.width() as usize;
            let msg = format!(
                "Failure in {}_reg: raster comparison for index {} - pixel mismatch at ({}, {})",
                self.test_name,
                self.index,
                i % w,
                i / w
            );
            self.fail(msg);
            return false;
        }

        true
    }

    /// Compare two byte arrays
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Encode a raster to the regout directory and check it against its
    /// golden file
    pub fn write_raster_and_check<S: PnmSample>(&mut self, raster: &Raster<S>) -> TestResult<()> {
        self.index += 1;

        let ext = match raster.kind() {
            ImageKind::Bitmap => "pbm",
            ImageKind::Greymap => "pgm",
            ImageKind::Pixmap => "ppm",
        };
        let local_path = self.local_path(ext);
        netpbm_io::write_image(raster, &local_path).map_err(|e| TestError::ImageWrite {
            path: local_path.clone(),
            message: e.to_string(),
        })?;

        self.check_file(&local_path)
    }

    /// Write data to file and check against golden file
    ///
    /// # Arguments
    ///
    /// * `data` - Data to write
    /// * `ext` - File extension (e.g., "txt", "pgm")
    pub fn write_data_and_check(&mut self, data: &[u8], ext: &str) -> TestResult<()> {
        self.index += 1;

        let local_path = self.local_path(ext);
        fs::write(&local_path, data)?;
        self.check_file(&local_path)
    }

    fn local_path(&self, ext: &str) -> String {
        format!(
            "{}/{}.{:02}.{}",
            regout_dir(),
            self.test_name,
            self.index,
            ext
        )
    }

    /// Check a file against its golden counterpart
    ///
    /// In generate mode, copies the file to golden.
    /// In compare mode, compares with the golden file; a missing golden
    /// file is a failure.
    /// In display mode, does nothing.
    fn check_file(&mut self, local_path: &str) -> TestResult<()> {
        let ext = Path::new(local_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let golden_path = format!(
            "{}/{}_golden.{:02}.{}",
            golden_dir(),
            self.test_name,
            self.index,
            ext
        );

        match self.mode {
            RegTestMode::Generate => {
                fs::copy(local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
            }
            RegTestMode::Compare => {
                if !Path::new(&golden_path).exists() {
                    let msg = format!(
                        "Failure in {}_reg: golden file not found: {}",
                        self.test_name, golden_path
                    );
                    self.fail(msg);
                    return Ok(());
                }

                let local_data = fs::read(local_path)?;
                let golden_data = fs::read(&golden_path)?;

                if local_data != golden_data && !same_image(&local_data, &golden_data) {
                    let msg = format!(
                        "Failure in {}_reg, index {}: comparing {} with {}",
                        self.test_name, self.index, local_path, golden_path
                    );
                    self.fail(msg);
                }
            }
            RegTestMode::Display => {}
        }

        Ok(())
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
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

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

/// Two encoded images with the same samples, whatever their layout.
fn same_image(data1: &[u8], data2: &[u8]) -> bool {
    let (Ok(a), Ok(b)) = (netpbm_io::decode_any(data1), netpbm_io::decode_any(data2)) else {
        return false;
    };
    match (a, b) {
        (AnyRaster::Bitmap(a), AnyRaster::Bitmap(b)) => a.with_encoding(b.encoding()) == b,
        (AnyRaster::Greymap(a), AnyRaster::Greymap(b)) => a.with_encoding(b.encoding()) == b,
        (AnyRaster::Pixmap(a), AnyRaster::Pixmap(b)) => a.with_encoding(b.encoding()) == b,
        _ => false,
    }
}
