// src/math/rates.rs

/// 除去可能特異点の近傍とみなす幅（x = (V + V0) / 10 に対して）
const SINGULARITY_EPSILON: f64 = 1e-7;

/// x / (1 - exp(-x)) の x → 0 での値を1次のテイラー展開で返す
fn exprel_near_zero(x: f64) -> f64 {
    1.0 + x / 2.0
}

/// Na活性化ゲート m の開く速度 α_m (1/ms)
///
/// V = -40 mV で分母が0になるため、その近傍では極限値 1.0 を用いる。
pub fn alpha_m(v: f64) -> f64 {
    let x = (v + 40.0) / 10.0;
    if x.abs() < SINGULARITY_EPSILON {
        exprel_near_zero(x)
    } else {
        0.1 * (v + 40.0) / (1.0 - (-(v + 40.0) / 10.0).exp())
    }
}

/// Na活性化ゲート m の閉じる速度 β_m (1/ms)
pub fn beta_m(v: f64) -> f64 {
    4.0 * (-(v + 65.0) / 18.0).exp()
}

/// Na不活性化ゲート h の開く速度 α_h (1/ms)
pub fn alpha_h(v: f64) -> f64 {
    0.07 * (-(v + 65.0) / 20.0).exp()
}

/// Na不活性化ゲート h の閉じる速度 β_h (1/ms)
pub fn beta_h(v: f64) -> f64 {
    1.0 / (1.0 + (-(v + 35.0) / 10.0).exp())
}

/// K活性化ゲート n の開く速度 α_n (1/ms)
///
/// V = -55 mV で分母が0になる。比の項 x / (1 - exp(-x)) の極限は 1.0（α_m と同じ）で、
/// これに係数 0.01 * 10 を掛けた α_n(-55) は 0.1 になる。
pub fn alpha_n(v: f64) -> f64 {
    let x = (v + 55.0) / 10.0;
    if x.abs() < SINGULARITY_EPSILON {
        0.1 * exprel_near_zero(x)
    } else {
        0.01 * (v + 55.0) / (1.0 - (-(v + 55.0) / 10.0).exp())
    }
}

/// K活性化ゲート n の閉じる速度 β_n (1/ms)
pub fn beta_n(v: f64) -> f64 {
    0.125 * (-(v + 65.0) / 80.0).exp()
}

/// ある膜電位における6つの速度係数の組
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateCoefficients {
    pub alpha_m: f64,
    pub beta_m: f64,
    pub alpha_h: f64,
    pub beta_h: f64,
    pub alpha_n: f64,
    pub beta_n: f64,
}

impl RateCoefficients {
    /// 膜電位 `v` (mV) で全ての速度係数を評価する
    pub fn at(v: f64) -> Self {
        RateCoefficients {
            alpha_m: alpha_m(v),
            beta_m: beta_m(v),
            alpha_h: alpha_h(v),
            beta_h: beta_h(v),
            alpha_n: alpha_n(v),
            beta_n: beta_n(v),
        }
    }

    /// m の定常値 α_m / (α_m + β_m)
    pub fn steady_state_m(&self) -> f64 {
        self.alpha_m / (self.alpha_m + self.beta_m)
    }

    /// h の定常値 α_h / (α_h + β_h)
    pub fn steady_state_h(&self) -> f64 {
        self.alpha_h / (self.alpha_h + self.beta_h)
    }

    /// n の定常値 α_n / (α_n + β_n)
    pub fn steady_state_n(&self) -> f64 {
        self.alpha_n / (self.alpha_n + self.beta_n)
    }
}
