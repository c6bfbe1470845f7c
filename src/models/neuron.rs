// src/models/neuron.rs

use crate::config::SimulationConfig;
use crate::math::{forward_euler, forward_euler_scaled, RateCoefficients};
use crate::models::channels::{ionic_currents, MEMBRANE_CAPACITANCE};

/// 単一コンパートメントの状態
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeuronState {
    pub v: f64, // 膜電位 (mV)
    pub m: f64, // Na活性化ゲート
    pub h: f64, // Na不活性化ゲート
    pub n: f64, // K活性化ゲート
}

impl NeuronState {
    /// 初期状態 V = -65 mV, m = 0.05, h = 0.6, n = 0.32
    pub fn initial() -> Self {
        NeuronState {
            v: -65.0,
            m: 0.05,
            h: 0.6,
            n: 0.32,
        }
    }

    /// 全てのゲート変数が [0, 1] に収まっているか
    pub fn gating_in_unit_interval(&self) -> bool {
        [self.m, self.h, self.n]
            .iter()
            .all(|x| (0.0..=1.0).contains(x))
    }

    /// ゲート変数を [0, 1] に制限した状態を返す
    pub fn with_clamped_gating(&self) -> Self {
        NeuronState {
            v: self.v,
            m: self.m.clamp(0.0, 1.0),
            h: self.h.clamp(0.0, 1.0),
            n: self.n.clamp(0.0, 1.0),
        }
    }
}

/// ゲート変数の時間微分 α(1 - x) - βx
pub fn gate_derivative(alpha: f64, beta: f64, x: f64) -> f64 {
    alpha * (1.0 - x) - beta * x
}

/// 1ステップ分の状態更新を行う純粋な関数
///
/// 速度係数・イオン電流はいずれも1つ前の膜電位 `prev.v` で評価する。
/// イオン電流には更新後のゲート変数を用いる（`clamp_gating` が true なら [0, 1] に制限した後の値）。
///
/// # 引数
/// - `prev`: 1つ前のステップの状態
/// - `config`: シミュレーション設定
/// - `i_ext`: このステップの外部電流 (µA)
///
/// # 戻り値
/// - 次のステップの状態
pub fn update_neuron(prev: &NeuronState, config: &SimulationConfig, i_ext: f64) -> NeuronState {
    let dt = config.step_size;
    let v_prev = prev.v;
    let rates = RateCoefficients::at(v_prev);

    let m = forward_euler(prev.m, gate_derivative(rates.alpha_m, rates.beta_m, prev.m), dt);
    let h = forward_euler_scaled(
        prev.h,
        gate_derivative(rates.alpha_h, rates.beta_h, prev.h),
        dt,
        config.gating_speed_factor,
    );
    let n = forward_euler(prev.n, gate_derivative(rates.alpha_n, rates.beta_n, prev.n), dt);
    let gates = NeuronState { v: v_prev, m, h, n };
    let gates = if config.clamp_gating {
        gates.with_clamped_gating()
    } else {
        gates
    };

    let currents = ionic_currents(config.max_sodium_conductance, gates.m, gates.h, gates.n, v_prev);
    let v = forward_euler(
        v_prev,
        currents.net_membrane_current(i_ext) / MEMBRANE_CAPACITANCE,
        dt,
    );

    NeuronState { v, ..gates }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::rates::{alpha_h, alpha_m, beta_h, beta_m};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_initial_state() {
        let state = NeuronState::initial();
        assert_eq!(state.v, -65.0);
        assert_eq!(state.m, 0.05);
        assert_eq!(state.h, 0.6);
        assert_eq!(state.n, 0.32);
        assert!(state.gating_in_unit_interval());
    }

    #[test]
    fn test_gate_derivative_zero_at_steady_state() {
        let rates = RateCoefficients::at(-65.0);
        let m_inf = rates.steady_state_m();
        assert_abs_diff_eq!(
            gate_derivative(rates.alpha_m, rates.beta_m, m_inf),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_update_reads_previous_voltage() {
        // ゲート更新は1つ前の電位で評価した速度係数を使う
        let config = SimulationConfig::default();
        let prev = NeuronState::initial();
        let next = update_neuron(&prev, &config, 0.0);

        let dt = config.step_size;
        let expected_m = prev.m + dt * (alpha_m(prev.v) * (1.0 - prev.m) - beta_m(prev.v) * prev.m);
        let expected_h = prev.h + dt * (alpha_h(prev.v) * (1.0 - prev.h) - beta_h(prev.v) * prev.h);
        assert_eq!(next.m, expected_m);
        assert_eq!(next.h, expected_h);

        let currents = ionic_currents(120.0, next.m, next.h, next.n, prev.v);
        let expected_v = prev.v + dt * (0.0 - currents.sodium - currents.potassium - currents.leak);
        assert_eq!(next.v, expected_v);
    }

    #[test]
    fn test_injection_shifts_voltage_by_dt_times_amplitude() {
        let config = SimulationConfig::default();
        let prev = NeuronState::initial();
        let quiet = update_neuron(&prev, &config, 0.0);
        let driven = update_neuron(&prev, &config, 10.0);
        assert_abs_diff_eq!(driven.v - quiet.v, 0.1, epsilon = 1e-9);
        // ゲート変数は外部電流の影響を同じステップでは受けない
        assert_eq!(driven.m, quiet.m);
        assert_eq!(driven.h, quiet.h);
        assert_eq!(driven.n, quiet.n);
    }

    #[test]
    fn test_gating_speed_factor_scales_h_increment() {
        let prev = NeuronState::initial();
        let normal = update_neuron(&prev, &SimulationConfig::default(), 0.0);
        let slowed = update_neuron(
            &prev,
            &SimulationConfig {
                gating_speed_factor: 0.1,
                ..SimulationConfig::default()
            },
            0.0,
        );
        assert_abs_diff_eq!(slowed.h - prev.h, 0.1 * (normal.h - prev.h), epsilon = 1e-14);
        assert_eq!(slowed.m, normal.m);
        assert_eq!(slowed.n, normal.n);
    }

    #[test]
    fn test_clamp_gating_keeps_unit_interval() {
        // 大きな時間ステップでは前進オイラーが [0, 1] を飛び越える
        let config = SimulationConfig {
            step_size: 5.0,
            clamp_gating: true,
            ..SimulationConfig::default()
        };
        let prev = NeuronState {
            v: 20.0,
            m: 0.05,
            h: 0.6,
            n: 0.32,
        };
        let unclamped = update_neuron(
            &prev,
            &SimulationConfig {
                clamp_gating: false,
                ..config.clone()
            },
            0.0,
        );
        assert!(!unclamped.gating_in_unit_interval());

        let clamped = update_neuron(&prev, &config, 0.0);
        assert!(clamped.gating_in_unit_interval());
        assert_eq!(clamped.m, 1.0);
        // 電流は制限後のゲート変数で計算される
        let currents = ionic_currents(120.0, clamped.m, clamped.h, clamped.n, prev.v);
        assert_eq!(
            clamped.v,
            prev.v + config.step_size * currents.net_membrane_current(0.0)
        );
    }
}
