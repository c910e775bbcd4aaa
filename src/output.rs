// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Progress lines on stdout, errors on stderr, elapsed time on success.

use std::time::Instant;

/// Handles human-readable CLI output.
#[derive(Debug, Default)]
pub struct Output {
    start_time: Option<Instant>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    pub fn progress(&self, message: &str) {
        println!("{message}");
    }

    /// Print a success message with optional timing.
    pub fn success(&self, message: &str) {
        let elapsed = self.elapsed_secs();
        if elapsed > 0.0 {
            println!("{message} ({:.1}s)", elapsed);
        } else {
            println!("{message}");
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("Error: {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_zero_before_timer_starts() {
        let output = Output::new();
        assert_eq!(output.elapsed_secs(), 0.0);
    }

    #[test]
    fn elapsed_counts_after_start() {
        let mut output = Output::new();
        output.start_timer();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(output.elapsed_secs() > 0.0);
    }
}
