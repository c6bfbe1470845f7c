// src/math/integrator.rs

/// 前進オイラー法による1ステップの積分
///
/// # 引数
/// - `y`: 現在の値
/// - `dydt`: 現在の値で評価した微分値
/// - `dt`: 時間ステップ
///
/// # 戻り値
/// - 次のステップの値 y + dt * dydt
pub fn forward_euler(y: f64, dydt: f64, dt: f64) -> f64 {
    y + dt * dydt
}

/// 速度倍率付きの前進オイラー法
///
/// 増分 dt * dydt に倍率 `scale` を掛ける。演算順序は (dt * dydt) * scale で固定。
///
/// # 引数
/// - `y`: 現在の値
/// - `dydt`: 現在の値で評価した微分値
/// - `dt`: 時間ステップ
/// - `scale`: 増分に掛ける倍率（1.0 で forward_euler と同じ）
///
/// # 戻り値
/// - 次のステップの値
pub fn forward_euler_scaled(y: f64, dydt: f64, dt: f64, scale: f64) -> f64 {
    y + dt * dydt * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// test_forward_euler_single_step
    /// y = 1.0, dy/dt = 2.0, dt = 0.1 のとき y_next = 1.2
    #[test]
    fn test_forward_euler_single_step() {
        let y_next = forward_euler(1.0, 2.0, 0.1);
        assert_abs_diff_eq!(y_next, 1.2, epsilon = 1e-12);
    }

    /// test_forward_euler_exponential_decay
    /// dy/dt = -y を dt = 0.001 で 1.0 まで積分すると exp(-1) に近づく
    #[test]
    fn test_forward_euler_exponential_decay() {
        let dt = 0.001;
        let mut y = 1.0;
        for _ in 0..1000 {
            y = forward_euler(y, -y, dt);
        }
        assert_abs_diff_eq!(y, (-1.0f64).exp(), epsilon = 1e-3);
    }

    /// test_forward_euler_scaled_unit_scale
    /// 倍率 1.0 では forward_euler と完全に一致する
    #[test]
    fn test_forward_euler_scaled_unit_scale() {
        let y = 0.6;
        let dydt = -0.0123;
        let dt = 0.01;
        assert_eq!(forward_euler_scaled(y, dydt, dt, 1.0), forward_euler(y, dydt, dt));
    }

    /// test_forward_euler_scaled_slows_change
    /// 倍率 0.1 では増分が 1/10 になる
    #[test]
    fn test_forward_euler_scaled_slows_change() {
        let y_next = forward_euler_scaled(0.5, 4.0, 0.01, 0.1);
        assert_abs_diff_eq!(y_next, 0.5 + 0.004, epsilon = 1e-12);
    }
}
