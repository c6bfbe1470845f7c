// src/main.rs

use std::error::Error;
use std::io::{BufWriter, Write};

use log::info;

use hhsim::simulation::csv::{write_csv_header, write_time_series};
use hhsim::simulation::framework::run_simulation;
use hhsim::simulation::load_parameters::load_scenario;

const DEFAULT_SCENARIO_PATH: &str = "config/scenario.yaml";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // シナリオの読み込み
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SCENARIO_PATH.to_string());
    let scenario = load_scenario(&path)?;
    info!("Loaded {} runs from {}", scenario.runs.len(), path);

    // CSVは標準出力へ
    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_csv_header(&mut writer)?;

    for run in &scenario.runs {
        let series = run_simulation(&run.parameters)?;

        match series.peak() {
            Some(peak) => info!(
                "Run {}: {} samples, peak {:.2} mV at {:.2} ms, {:.2} ms above 0 mV",
                run.id,
                series.len(),
                peak.v,
                peak.time,
                series.time_above(0.0)
            ),
            None => info!("Run {}: no samples", run.id),
        }

        write_time_series(&mut writer, &run.id, &series)?;
    }

    writer.flush()?;
    Ok(())
}
