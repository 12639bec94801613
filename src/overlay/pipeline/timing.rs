use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: String,
    pub duration: Duration,
}

/// Per-step durations of one pipeline tick
#[derive(Debug, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
    step_map: HashMap<String, Duration>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            step_map: HashMap::new(),
        }
    }

    pub fn add_step(&mut self, name: impl Into<String>, duration: Duration) {
        let name = name.into();
        self.steps.push(StepTiming {
            name: name.clone(),
            duration,
        });
        *self.step_map.entry(name).or_insert(Duration::ZERO) += duration;
    }

    pub fn record(&mut self, timer: Timer) {
        let (name, duration) = timer.stop();
        self.add_step(name, duration);
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.step_map.get(name).copied()
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    pub fn log_summary(&self, frame: u64) {
        let steps: Vec<String> = self
            .steps
            .iter()
            .map(|s| format!("{}={:.3}ms", s.name, s.duration.as_secs_f64() * 1000.0))
            .collect();
        trace!(
            "Frame {}: {} total={:.3}ms",
            frame,
            steps.join(" "),
            self.total_duration().as_secs_f64() * 1000.0
        );
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    pub fn stop(self) -> (String, Duration) {
        (self.name, self.start.elapsed())
    }
}

/// Frame rate diagnostic. Logs at debug level roughly once per second.
#[derive(Debug, Default)]
pub struct FpsMonitor {
    last_tick: Option<Instant>,
    accumulated: Duration,
    samples: u32,
}

impl FpsMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) -> Option<f64> {
        let now = Instant::now();
        let delta = self.last_tick.map(|last| now - last);
        self.last_tick = Some(now);
        delta.and_then(|delta| self.record(delta))
    }

    /// Adds one frame interval; returns the rate when it was just reported.
    pub fn record(&mut self, delta: Duration) -> Option<f64> {
        self.accumulated += delta;
        self.samples += 1;

        if self.accumulated <= Duration::from_secs(1) || self.samples <= 1 {
            return None;
        }

        let fps = self.samples as f64 / self.accumulated.as_secs_f64();
        debug!("FPS: {:.1}", fps);
        self.accumulated = Duration::ZERO;
        self.samples = 0;
        Some(fps)
    }
}
