//! Performance monitoring utilities.
//!
//! Tracks raster frame times and per-pass timings for the sketchpad so
//! slow paints show up in logs long before they show up on screen.
//!
//! ## Features
//!
//! - **Frame timing**: rolling averages over recent composited frames
//! - **Scoped timers**: RAII-style timing for code blocks
//! - **Aggregated statistics**: per-pass timing histograms
//! - **Conditional compilation**: zero-cost when profiling disabled
//!
//! ## Usage
//!
//! Enable profiling with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! inkboard = { features = ["profiling"] }
//! ```
//!
//! Use the profiling macros for zero-cost instrumentation:
//! ```ignore
//! use inkboard::perf::{profile_scope, profile_function};
//!
//! fn composite_layers() {
//!     profile_function!();  // Times entire function
//!
//!     {
//!         profile_scope!("blit_scratch");  // Times just this block
//!         // ... work ...
//!     }
//! }
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{debug, warn};
#[cfg(feature = "profiling")]
use tracing::trace;

// ============================================================================
// Constants
// ============================================================================

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Number of samples to keep for rolling averages
const SAMPLE_COUNT: usize = 60;

/// Threshold multiplier for warning (e.g., 2.0 = warn if frame takes 2x target)
const WARN_THRESHOLD: f64 = 2.0;

/// Number of samples to keep for per-pass statistics
const STATS_SAMPLE_COUNT: usize = 100;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
///
/// # Example
/// ```ignore
/// use inkboard::perf::profile_scope;
///
/// fn draw_strokes() {
///     profile_scope!("draw_strokes");
///     // ... painting code ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// Profile the current function. Zero-cost when profiling is disabled.
///
/// # Example
/// ```ignore
/// use inkboard::perf::profile_function;
///
/// fn handle_pointer_down() {
///     profile_function!();
///     // ... event handling code ...
/// }
/// ```
#[macro_export]
macro_rules! profile_function {
    () => {
        $crate::profile_scope!(concat!(module_path!(), "::", $crate::function_name!()));
    };
}

/// Helper macro to get function name (requires nightly or workaround)
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        // Strip the trailing "::f" from the function name
        &name[..name.len() - 3]
    }};
}

// Re-export macros at crate root
pub use profile_function;
pub use profile_scope;

// ============================================================================
// Runtime Profiling Control
// ============================================================================

/// Enable or disable profiling at runtime.
/// Note: This only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Check if profiling is currently enabled.
#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

// ============================================================================
// Frame Performance Monitor
// ============================================================================

/// Performance monitor for tracking frame times and per-pass statistics.
pub struct PerfMonitor {
    /// Recent frame times in milliseconds
    frame_times: VecDeque<f64>,
    /// When the current frame started
    frame_start: Option<Instant>,
    /// Count of frames that exceeded the warning threshold
    slow_frame_count: u64,
    /// Total frames tracked
    total_frames: u64,
    /// Per-pass timing statistics
    pass_stats: HashMap<&'static str, PassStats>,
}

/// Statistics for a specific render pass.
#[derive(Debug, Clone)]
pub struct PassStats {
    /// Recent timing samples in milliseconds
    samples: VecDeque<f64>,
    /// Total invocation count
    count: u64,
    /// Maximum observed time
    max_ms: f64,
    /// Running sum for average calculation
    sum_ms: f64,
}

impl Default for PassStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            count: 0,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl PassStats {
    /// Record a new timing sample.
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    /// Get the average time over recent samples.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    /// Get the p95 (95th percentile) time.
    pub fn p95(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let idx = ((sorted.len() as f64) * 0.95).floor() as usize;
        sorted.get(idx.min(sorted.len() - 1)).copied().unwrap_or(0.0)
    }

    /// Total invocation count.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Default for PerfMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl PerfMonitor {
    /// Create a new performance monitor.
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(SAMPLE_COUNT),
            frame_start: None,
            slow_frame_count: 0,
            total_frames: 0,
            pass_stats: HashMap::new(),
        }
    }

    /// Mark the start of a frame.
    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Mark the end of a frame and record timing.
    /// Returns the frame time in milliseconds.
    pub fn end_frame(&mut self) -> Option<f64> {
        let start = self.frame_start.take()?;
        let elapsed = start.elapsed();
        let ms = elapsed.as_secs_f64() * 1000.0;

        // Track the sample
        if self.frame_times.len() >= SAMPLE_COUNT {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(ms);
        self.total_frames += 1;

        // Check for slow frame
        if ms > TARGET_FRAME_MS * WARN_THRESHOLD {
            self.slow_frame_count += 1;
            warn!(
                frame_time_ms = format!("{:.2}", ms),
                target_ms = format!("{:.2}", TARGET_FRAME_MS),
                "Slow frame detected"
            );
        }

        Some(ms)
    }

    /// Record a render pass timing.
    pub fn record_pass(&mut self, name: &'static str, elapsed_ms: f64) {
        self.pass_stats.entry(name).or_default().record(elapsed_ms);
    }

    /// Get the average frame time over recent samples.
    pub fn average_frame_time(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f64>() / self.frame_times.len() as f64
    }

    /// Get the maximum frame time in recent samples.
    pub fn max_frame_time(&self) -> f64 {
        self.frame_times.iter().copied().fold(0.0, f64::max)
    }

    /// Get the percentage of frames that were slow.
    pub fn slow_frame_percentage(&self) -> f64 {
        if self.total_frames == 0 {
            return 0.0;
        }
        (self.slow_frame_count as f64 / self.total_frames as f64) * 100.0
    }

    /// Get estimated FPS based on average frame time.
    pub fn estimated_fps(&self) -> f64 {
        let avg = self.average_frame_time();
        if avg <= 0.0 {
            return 0.0;
        }
        1000.0 / avg
    }

    /// Get statistics for a specific render pass.
    pub fn pass_stats(&self, name: &str) -> Option<&PassStats> {
        self.pass_stats.get(name)
    }

    /// Log a performance summary if there are issues.
    pub fn log_summary_if_slow(&self) {
        let avg = self.average_frame_time();
        if avg > TARGET_FRAME_MS {
            warn!(
                avg_frame_ms = format!("{:.2}", avg),
                max_frame_ms = format!("{:.2}", self.max_frame_time()),
                slow_percentage = format!("{:.1}%", self.slow_frame_percentage()),
                estimated_fps = format!("{:.1}", self.estimated_fps()),
                "Performance below target"
            );

            // Log top slow passes
            self.log_slow_passes();
        }
    }

    /// Log the slowest render passes.
    fn log_slow_passes(&self) {
        let mut passes: Vec<_> = self.pass_stats.iter().collect();
        passes.sort_by(|a, b| {
            b.1.average()
                .partial_cmp(&a.1.average())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!("Slowest render passes:");
        for (name, stats) in passes.iter().take(5) {
            if stats.average() > 0.1 {
                // Only show passes taking >0.1ms
                debug!(
                    "  {}: avg={:.2}ms, p95={:.2}ms, max={:.2}ms, count={}",
                    name,
                    stats.average(),
                    stats.p95(),
                    stats.max_ms,
                    stats.count
                );
            }
        }
    }

    /// Reset all statistics.
    pub fn reset(&mut self) {
        self.frame_times.clear();
        self.slow_frame_count = 0;
        self.total_frames = 0;
        self.pass_stats.clear();
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that logs duration on drop.
///
/// When the `profiling` feature is enabled, timers trace their elapsed
/// time with indentation matching their nesting depth.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
    #[cfg(feature = "profiling")]
    depth: usize,
}

// Thread-local depth tracking for hierarchical profiling
#[cfg(feature = "profiling")]
thread_local! {
    static CURRENT_DEPTH: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

impl ScopedTimer {
    /// Create a new scoped timer with a warning threshold.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        #[cfg(feature = "profiling")]
        let depth = CURRENT_DEPTH.with(|d| {
            let current = d.get();
            d.set(current + 1);
            current
        });

        Self {
            name,
            start: Instant::now(),
            threshold_ms,
            #[cfg(feature = "profiling")]
            depth,
        }
    }

    /// Create a timer for profiling (lower threshold, 1ms).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    /// Get elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;

        #[cfg(feature = "profiling")]
        {
            // Decrement depth
            CURRENT_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));

            // Log with hierarchy indication
            if elapsed_ms > self.threshold_ms {
                let indent = "  ".repeat(self.depth);
                trace!(
                    "{}[PERF] {}: {:.2}ms",
                    indent,
                    self.name,
                    elapsed_ms
                );
            }
        }

        #[cfg(not(feature = "profiling"))]
        {
            if elapsed_ms > self.threshold_ms {
                warn!(
                    operation = self.name,
                    elapsed_ms = format!("{:.2}", elapsed_ms),
                    threshold_ms = format!("{:.2}", self.threshold_ms),
                    "Slow operation"
                );
            }
        }
    }
}

// ============================================================================
// Timing Utilities
// ============================================================================

/// Measure execution time of a closure and return both the result and elapsed time.
///
/// # Example
/// ```ignore
/// let (result, elapsed_ms) = measure(|| composite_all_layers());
/// println!("Composited in {:.2}ms", elapsed_ms);
/// ```
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}

/// Measure execution time and log if it exceeds the threshold.
///
/// # Example
/// ```ignore
/// let result = measure_and_log("rebuild_hit_index", 5.0, || index.rebuild(strokes));
/// ```
#[inline]
pub fn measure_and_log<T, F: FnOnce() -> T>(name: &str, threshold_ms: f64, f: F) -> T {
    let (result, elapsed_ms) = measure(f);
    if elapsed_ms > threshold_ms {
        warn!(
            operation = name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", threshold_ms),
            "Slow operation"
        );
    }
    result
}
