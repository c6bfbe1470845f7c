// src/simulation/series.rs

use crate::models::NeuronState;

/// 時系列の1サンプル
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64, // 時刻 (ms)
    pub v: f64,    // 膜電位 (mV)
    pub m: f64,
    pub h: f64,
    pub n: f64,
}

impl Sample {
    pub fn new(time: f64, state: &NeuronState) -> Self {
        Sample {
            time,
            v: state.v,
            m: state.m,
            h: state.h,
            n: state.n,
        }
    }

    pub fn state(&self) -> NeuronState {
        NeuronState {
            v: self.v,
            m: self.m,
            h: self.h,
            n: self.n,
        }
    }
}

/// 1回のシミュレーション結果
///
/// `initial` は t = 0 の初期状態、`samples` は各ステップの計算結果で、
/// k 番目 (0 始まり) の時刻は (k + 1) * step_size。
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub step_size: f64,
    pub initial: Sample,
    pub samples: Vec<Sample>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    pub fn voltages(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.v).collect()
    }

    /// 最大電位のサンプル（同値なら最初のもの）
    pub fn peak(&self) -> Option<&Sample> {
        self.samples
            .iter()
            .fold(None, |best: Option<&Sample>, s| match best {
                Some(b) if b.v >= s.v => Some(b),
                _ => Some(s),
            })
    }

    /// 電位が `threshold` を超えていた合計時間 (ms)
    pub fn time_above(&self, threshold: f64) -> f64 {
        self.samples.iter().filter(|s| s.v > threshold).count() as f64 * self.step_size
    }

    /// 電位が初めて `threshold` を超えた時刻
    pub fn first_time_above(&self, threshold: f64) -> Option<f64> {
        self.samples.iter().find(|s| s.v > threshold).map(|s| s.time)
    }

    /// 全サンプルのゲート変数が [0, 1] に収まっているか
    pub fn gating_in_unit_interval(&self) -> bool {
        self.samples.iter().all(|s| s.state().gating_in_unit_interval())
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
