// Headless driver: generates the dataset, prints the per-year summary
// table, optionally exports CSV, then animates the CDF timelapse by
// logging one line per frame. Stands in for the excluded chart surface.
use std::error::Error;
use std::fs;
use std::sync::atomic::Ordering;
use std::thread;

use clap::Parser;
use crossbeam_channel::bounded;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use driftscope::anim::controller::FrameController;
use driftscope::anim::frame::{Frame, RunState};
use driftscope::cli::Args;
use driftscope::config::AnimationConfig;
use driftscope::core::cache::SampleCache;
use driftscope::core::generate::reference_periods;
use driftscope::core::summary::summarize_all;
use driftscope::export::dataset_csv;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = AnimationConfig::load_or_default(&args.config);
    if let Some(delay) = args.delay {
        config.animation_delay_seconds = delay;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let params = config.gen_params();
    let periods = reference_periods();
    let mut cache = SampleCache::new();
    let samples = cache.get_or_generate(&params, &periods)?;

    println!("year        mean    std     min     max");
    for row in summarize_all(&samples)? {
        println!(
            "{}  {:>9.2} {:>7.2} {:>7.2} {:>7.2}",
            row.period, row.mean, row.std_dev, row.min, row.max
        );
    }

    if let Some(path) = &args.csv {
        fs::write(path, dataset_csv(&samples))?;
        info!("wrote dataset to {path}");
    }

    if args.no_anim {
        return Ok(());
    }

    let mut controller = FrameController::new(samples);
    let stop = controller.stop_flag();
    ctrlc::set_handler(move || {
        stop.store(true, Ordering::SeqCst);
    })?;

    let delay = config.frame_delay();
    let (frame_tx, frame_rx) = bounded::<Frame>(1);
    let worker = thread::Builder::new()
        .name("frames".into())
        .spawn(move || controller.run_paced(delay, &frame_tx))?;

    for frame in frame_rx.iter() {
        let [q1, q2, q3] = frame.curve.quartiles;
        println!(
            "{}  progress {:>5.1}%  q1 {:>6.2}  q2 {:>6.2}  q3 {:>6.2}",
            frame.status,
            frame.progress * 100.0,
            q1.value,
            q2.value,
            q3.value
        );
    }

    match worker.join() {
        Ok(Ok(RunState::Completed)) => info!("animation completed"),
        Ok(Ok(state)) => info!("animation ended in {state:?}"),
        Ok(Err(err)) => {
            error!("animation failed: {err}");
            return Err(err.into());
        }
        Err(_) => error!("frame worker panicked"),
    }
    Ok(())
}
