/// Performance measurement utilities
/// Each tick stage is timed so slow frames can be attributed to input,
/// physics, entity simulation or the raster.
use std::time::{Duration, Instant};

pub struct TickTimer {
    name: &'static str,
    start: Instant,
}

impl TickTimer {
    #[inline]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        log::trace!(
            "[PERF] {}: {:.2}us",
            self.name,
            self.elapsed().as_secs_f64() * 1e6
        );
    }
}

/// Per-tick stage breakdown accumulated by the session controller
#[derive(Copy, Clone, Debug, Default)]
pub struct TickStats {
    pub input_us: f64,
    pub physics_us: f64,
    pub entities_us: f64,
    pub raster_us: f64,
}

impl TickStats {
    pub fn total_us(&self) -> f64 {
        self.input_us + self.physics_us + self.entities_us + self.raster_us
    }

    pub fn print_summary(&self) {
        let total = self.total_us().max(f64::EPSILON);
        println!("\n========== TICK BREAKDOWN ==========");
        println!(
            "Input:      {:8.2}us ({:5.1}%)",
            self.input_us,
            self.input_us / total * 100.0
        );
        println!(
            "Physics:    {:8.2}us ({:5.1}%)",
            self.physics_us,
            self.physics_us / total * 100.0
        );
        println!(
            "Entities:   {:8.2}us ({:5.1}%)",
            self.entities_us,
            self.entities_us / total * 100.0
        );
        println!(
            "Raster:     {:8.2}us ({:5.1}%)",
            self.raster_us,
            self.raster_us / total * 100.0
        );
        println!("------------------------------------");
        println!("Total:      {:8.2}us", self.total_us());
        println!("====================================\n");
    }
}

/// Macro for easy scope measurement
#[macro_export]
macro_rules! perf_scope {
    ($name:expr) => {
        let _timer = $crate::perf::TickTimer::new($name);
    };
}
