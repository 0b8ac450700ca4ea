use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use mazecore::Dims;
use mazerun::{logging, settings::Settings, AppError, RunOptions};

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazerun")]
struct Args {
    #[clap(short = 'W', long, help = "Number of columns")]
    width: Option<u16>,
    #[clap(short = 'H', long, help = "Number of rows")]
    height: Option<u16>,
    #[clap(short, long, help = "Seed for a reproducible maze")]
    seed: Option<u64>,
    #[clap(short, long, action, help = "Draw every carving and solving step")]
    animate: bool,
    #[clap(short, long, help = "Pause between animation frames, in milliseconds")]
    delay: Option<u64>,
    #[clap(long, action, help = "Only generate, don't solve")]
    no_solve: bool,
    #[clap(short, long, action, help = "Print debug logs")]
    verbose: bool,
    #[clap(short, long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, help = "Show config in debug format and quit")]
    debug_config: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    let settings_path = Settings::default_path();

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    let settings = Settings::load(&settings_path)?;

    if args.debug_config {
        println!("{:#?}", settings);
        return Ok(());
    }

    better_panic::install();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        settings.get_log_level()
    };
    logging::init(level)?;

    if settings.parsed_log_level().is_none() {
        log::warn!("Invalid log level in {:?}, using warn", settings_path);
    }

    let options = RunOptions {
        size: Dims(
            args.width.unwrap_or_else(|| settings.get_width()) as i32,
            args.height.unwrap_or_else(|| settings.get_height()) as i32,
        ),
        seed: args.seed.or(settings.get_seed()),
        animate: args.animate || settings.get_animate(),
        frame_delay: args
            .delay
            .map(Duration::from_millis)
            .unwrap_or_else(|| settings.get_frame_delay()),
        solve: !args.no_solve,
    };
    log::debug!("Running with {:?}", options);

    mazerun::run(&options)
}
