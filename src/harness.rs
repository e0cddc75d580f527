//! Wall-clock timer harness
//!
//! Runs a unit of work exactly once, measures the elapsed wall-clock time
//! around that single call and prints one completion line:
//!
//! ```text
//! <label> Completed in <elapsed, 3 decimals> ms
//! ```
//!
//! The printed number is the elapsed time in seconds. The `ms` suffix is kept
//! as-is so existing result logs stay comparable.

use std::fmt::Display;
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

/// Run `work` once and return its value with the elapsed wall-clock time.
pub fn measure<R>(work: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let value = work();
    (value, start.elapsed())
}

/// Format the completion line for one measured run.
pub fn format_completion(label: impl Display, elapsed: Duration) -> String {
    format!("{} Completed in {:.3} ms", label, elapsed.as_secs_f64())
}

/// Timer harness writing completion lines to `W`.
pub struct TimerHarness<W: Write> {
    out: W,
}

impl TimerHarness<Stdout> {
    /// Harness printing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TimerHarness<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Time one call of `work` and print its completion line.
    ///
    /// A failing work unit is not reported: its error comes back unchanged
    /// and no line is written. Panics unwind straight through.
    pub fn time<T, E, F>(&mut self, label: impl Display, work: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<io::Error>,
    {
        self.time_with_elapsed(label, work).map(|(value, _)| value)
    }

    /// Like [`TimerHarness::time`], but also hands back the elapsed time.
    pub fn time_with_elapsed<T, E, F>(
        &mut self,
        label: impl Display,
        work: F,
    ) -> Result<(T, Duration), E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<io::Error>,
    {
        let (value, elapsed) = measure(work);
        let value = value?;
        writeln!(self.out, "{}", format_completion(label, elapsed))?;
        self.out.flush()?;
        Ok((value, elapsed))
    }

    /// Consume the harness and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Time `work` once and print the completion line to standard output.
pub fn time<T, E, F>(label: impl Display, work: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: From<io::Error>,
{
    TimerHarness::stdout().time(label, work)
}
