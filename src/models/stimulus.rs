// src/models/stimulus.rs

/// 外部電流を注入する時間窓 [start, end] (ms)。両端を含む。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StimulusWindow {
    pub start: f64,
    pub end: f64,
}

/// 固定の刺激窓 10 ms 〜 11 ms
pub const STIMULUS_WINDOW: StimulusWindow = StimulusWindow {
    start: 10.0,
    end: 11.0,
};

impl StimulusWindow {
    /// 時刻 `t` が窓の中にあるか
    pub fn contains(&self, t: f64) -> bool {
        self.start <= t && t <= self.end
    }

    /// 時刻 `t` における外部電流 (µA)
    pub fn current(&self, t: f64, amplitude: f64) -> f64 {
        if self.contains(t) {
            amplitude
        } else {
            0.0
        }
    }
}

/// 固定の刺激窓に従った外部電流
pub fn injected_current(t: f64, amplitude: f64) -> f64 {
    STIMULUS_WINDOW.current(t, amplitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_bounds_are_inclusive() {
        assert_eq!(injected_current(10.0, 7.5), 7.5);
        assert_eq!(injected_current(10.5, 7.5), 7.5);
        assert_eq!(injected_current(11.0, 7.5), 7.5);
    }

    #[test]
    fn test_outside_window_is_zero() {
        assert_eq!(injected_current(0.0, 7.5), 0.0);
        assert_eq!(injected_current(9.99, 7.5), 0.0);
        assert_eq!(injected_current(11.01, 7.5), 0.0);
        assert_eq!(injected_current(40.0, 7.5), 0.0);
    }

    #[test]
    fn test_grid_times_hit_window_edges() {
        // 刻み 0.01 ms の格子点 i * dt が窓の両端にちょうど乗ること
        let dt = 0.01;
        assert!(STIMULUS_WINDOW.contains(1000.0 * dt));
        assert!(STIMULUS_WINDOW.contains(1100.0 * dt));
        assert!(!STIMULUS_WINDOW.contains(999.0 * dt));
        assert!(!STIMULUS_WINDOW.contains(1101.0 * dt));
    }
}
