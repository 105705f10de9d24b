use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(_cli: &Cli) -> AppResult<()> {
    let path = Config::init_all()?;
    success(format!("Config file created: {}", path.display()));
    Ok(())
}
