use crate::cli::commands::load_analysis;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        log_file,
        format,
        file,
        start,
        end,
        weekdays,
        force,
    } = cmd
    {
        let analysis = load_analysis(log_file, start, end, weekdays, cfg)?;

        if analysis.is_empty() {
            warning("No attendance events matched the requested range.");
            return Ok(());
        }

        ExportLogic::export(&analysis, format.clone(), file, *force)?;
    }
    Ok(())
}
