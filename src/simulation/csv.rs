// src/simulation/csv.rs

use std::io::Write;

use crate::simulation::series::{Sample, TimeSeries};

/// CSVヘッダー
pub const CSV_HEADER: &str = "run,time(ms),v(mV),m,h,n\n";

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(writer: &mut W) -> Result<(), std::io::Error> {
    writer.write_all(CSV_HEADER.as_bytes())
}

/// CSV行の作成
pub fn create_csv_row(run_id: &str, sample: &Sample) -> String {
    format!(
        "{},{},{},{},{},{}\n",
        run_id, sample.time, sample.v, sample.m, sample.h, sample.n
    )
}

/// 1回分の時系列を書き込む（初期状態 t = 0 を含む）
pub fn write_time_series<W: Write>(
    writer: &mut W,
    run_id: &str,
    series: &TimeSeries,
) -> Result<(), std::io::Error> {
    writer.write_all(create_csv_row(run_id, &series.initial).as_bytes())?;
    for sample in series {
        writer.write_all(create_csv_row(run_id, sample).as_bytes())?;
    }
    Ok(())
}
