use anyhow::anyhow;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

use utprofile_check::{ProfileChecker, config::Config, log, log::LogLevel};

/// Validate unit test profiles against the test functions of their test files.
#[derive(Parser, Debug)]
#[command(name = "utprofile-check", version)]
#[command(group(ArgGroup::new("target").required(true).args(["file", "dir"])))]
struct Args {
    /// Profile to be validated
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Directory to be validated
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Validate sub-directories as well (only with --dir)
    #[arg(short, long, conflicts_with = "file")]
    recursive: bool,

    /// Config file [default: ./utprofile.toml if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print scanned functions and other details
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print failures and the final verdict
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn log_level(&self, configured: LogLevel) -> LogLevel {
        if self.verbose {
            LogLevel::Verbose
        } else if self.quiet {
            LogLevel::Brief
        } else {
            configured
        }
    }
}

/// Validate the profiles selected by `args`, returning how many passed.
fn run(args: &Args, config: &Config) -> anyhow::Result<usize> {
    let checker = ProfileChecker::new(config)?;

    if let Some(file) = &args.file {
        checker
            .validate_file(file)
            .map_err(|e| anyhow!("Error validating file, {}: {}", file.display(), e))?;
        Ok(1)
    } else if let Some(dir) = &args.dir {
        let profiles = checker
            .validate_dir(dir, args.recursive)
            .map_err(|e| anyhow!("Error validating dir, {}: {}", dir.display(), e))?;
        Ok(profiles.len())
    } else {
        Ok(0)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match Config::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log!(Brief, Error, "{}", e);
            return ExitCode::FAILURE;
        }
    };
    log::init_logger(args.log_level(config.log_level));

    // Failures are reported here only; the checker just returns them.
    match run(&args, &config) {
        Ok(count) => {
            log!(Brief, Critical, "{} profile(s) validated", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log!(Brief, Error, "{}", e);
            ExitCode::FAILURE
        }
    }
}
