use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        if *path {
            println!("{}", Config::config_file().display());
        }

        if *print_config {
            println!("{}", cfg.to_yaml()?);
        }

        if !*path && !*print_config {
            info("Nothing to do: use --print or --path");
        }
    }
    Ok(())
}
