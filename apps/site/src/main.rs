use anyhow::Context;
use zenai_app::AppLauncher;
use zenai_site::{HeadlessHost, Walkthrough};

const REALTIME_FLAG: &str = "--realtime";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let (flags, positional): (Vec<String>, Vec<String>) =
        std::env::args().skip(1).partition(|arg| arg.starts_with("--"));
    let realtime = flags.iter().any(|flag| flag == REALTIME_FLAG);
    let mut args = positional.into_iter();
    let path = args.next().unwrap_or_else(|| "/".to_string());
    let seconds: u64 = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("duration must be whole seconds, got {raw:?}"))?,
        None => 12,
    };

    println!("=== ZenAI headless walkthrough ===");
    println!("Visiting {path} for {seconds}s of simulated time, then /services/marketing.");
    println!("Set RUST_LOG=debug to see every reveal, tick and hover.");
    println!("Pass {REALTIME_FLAG} to also run a session paced by the wall clock.");
    println!();

    let report = Walkthrough::new(path.as_str())
        .with_duration(seconds * 1_000)
        .then_visit("/services/marketing")
        .run()
        .with_context(|| format!("walkthrough of {path} failed"))?;

    println!("frames:            {}", report.frames);
    println!("frame rate:        {}", report.stats.display());
    println!("carousel advances: {}", report.carousel_advances);
    println!("revealed sections: {:?}", report.revealed);
    println!("magnet released:   {}", report.magnetic_settled);
    println!("final route:       {}", report.final_route);
    println!("layers on screen:  {}", report.layers);
    println!("timers still live: {}", report.active_timers);

    if realtime {
        println!();
        println!("Running {path} against the wall clock for {seconds}s...");
        let mut host = HeadlessHost::launch(AppLauncher::new().with_path(path.as_str()))
            .context("could not launch the realtime session")?;
        let scene = host.run_realtime(seconds * 1_000);
        println!("frame rate:        {}", host.shell().frame_stats().display());
        println!("layers on screen:  {}", scene.len());
    }
    Ok(())
}
