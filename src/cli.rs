use std::path::PathBuf;

use clap::Parser;

// Raw, CLI input
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    #[arg(long, help = "Path to a YAML config file (defaults to ./dyeflow.yaml).")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Run without a window and log diagnostics instead.")]
    pub headless: bool,

    #[arg(long, help = "Number of steps to run in headless mode.", default_value = "200")]
    pub steps: usize,

    #[arg(
        long,
        help = "Log diagnostics every N headless steps (0 disables).",
        default_value = "50"
    )]
    pub log_every: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let args = CliArgs::try_parse_from(["dyeflow"]).unwrap();
        assert!(args.config.is_none());
        assert!(!args.headless);
        assert_eq!(args.steps, 200);
        assert_eq!(args.log_every, 50);
    }

    #[test]
    fn test_cli_headless_flags() {
        let args = CliArgs::try_parse_from([
            "dyeflow", "--headless", "--steps", "10", "--log-every", "2", "--config", "x.yaml",
        ])
        .unwrap();
        assert!(args.headless);
        assert_eq!(args.steps, 10);
        assert_eq!(args.log_every, 2);
        assert_eq!(args.config, Some(PathBuf::from("x.yaml")));
    }

    #[test]
    fn test_cli_rejects_bad_steps() {
        assert!(CliArgs::try_parse_from(["dyeflow", "--steps", "many"]).is_err());
    }
}
