// src/simulation/framework.rs

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};

use crate::config::SimulationConfig;
use crate::models::{injected_current, update_neuron, NeuronState};
use crate::simulation::error::SimulationError;
use crate::simulation::series::{Sample, TimeSeries};

/// 事前に確保するサンプル数の上限。これを超える分は実行中に伸長する。
const PREALLOCATED_SAMPLES: usize = 1 << 16;

/// 格子点 i の時刻 t_i = i * step_size
///
/// 加算の累積誤差を避けるため、毎回掛け算で求める。
pub fn grid_time(i: usize, step_size: f64) -> f64 {
    i as f64 * step_size
}

/// シミュレーションステートの初期化
pub fn initialize_simulation_state() -> NeuronState {
    NeuronState::initial()
}

/// シミュレーションステップの実行
///
/// # 引数
/// - `prev`: ステップ i - 1 の状態
/// - `config`: シミュレーション設定
/// - `i`: ステップ番号（1 以上）
///
/// # 戻り値
/// - ステップ i の状態
pub fn execute_simulation_step(prev: &NeuronState, config: &SimulationConfig, i: usize) -> NeuronState {
    let t = grid_time(i, config.step_size);
    let i_ext = injected_current(t, config.injection_amplitude);
    update_neuron(prev, config, i_ext)
}

/// シミュレーションを最後まで実行する
///
/// # 戻り値
/// - 初期状態と N = floor(duration / step_size) 個のサンプルを持つ時系列
/// - 設定が不正な場合は計算を始める前に `SimulationError::InvalidConfiguration`
pub fn run_simulation(config: &SimulationConfig) -> Result<TimeSeries, SimulationError> {
    run(config, || false)
}

/// 中断フラグ付きでシミュレーションを実行する
///
/// フラグは各ステップの開始時に1回だけ確認する。中断された場合は途中結果を返さない。
pub fn run_simulation_with_cancel(
    config: &SimulationConfig,
    cancel: &AtomicBool,
) -> Result<TimeSeries, SimulationError> {
    run(config, || cancel.load(Ordering::Relaxed))
}

fn run<F>(config: &SimulationConfig, is_cancelled: F) -> Result<TimeSeries, SimulationError>
where
    F: Fn() -> bool,
{
    config.validate()?;
    config.warn_outside_recommended_ranges();

    let step_count = config.step_count();
    debug!("Starting simulation: {} steps, {:?}", step_count, config);

    let mut state = initialize_simulation_state();
    let initial = Sample::new(0.0, &state);
    let mut samples = Vec::with_capacity(step_count.min(PREALLOCATED_SAMPLES));
    let mut warned_unbounded = false;

    for i in 1..=step_count {
        if is_cancelled() {
            debug!("Simulation cancelled at step {}", i);
            return Err(SimulationError::Cancelled { step: i });
        }

        let next = execute_simulation_step(&state, config, i);
        if !warned_unbounded && !next.gating_in_unit_interval() {
            warn!(
                "Gating variables left [0, 1] at t = {} ms: m = {}, h = {}, n = {}",
                grid_time(i, config.step_size),
                next.m,
                next.h,
                next.n
            );
            warned_unbounded = true;
        }

        samples.push(Sample::new(grid_time(i, config.step_size), &next));
        state = next;
    }

    debug!("Simulation finished: {} samples", samples.len());
    Ok(TimeSeries {
        step_size: config.step_size,
        initial,
        samples,
    })
}
