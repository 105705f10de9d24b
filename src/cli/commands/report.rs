use crate::cli::commands::load_analysis;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Analysis;
use crate::errors::AppResult;
use crate::export::{
    build_report_rows, build_weekly_rows, detail_headers, weekly_headers, weekly_row_to_vec,
};
use crate::ui::messages::warning;
use crate::utils::colors::{colorize_delta, colorize_optional};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        log_file,
        start,
        end,
        weekdays,
        weekly_only,
    } = cmd
    {
        let analysis = load_analysis(log_file, start, end, weekdays, cfg)?;

        if analysis.is_empty() {
            warning("No attendance events matched the requested range.");
            return Ok(());
        }

        if !*weekly_only {
            print_detail_table(&analysis);
            println!();
        }

        print_weekly_table(&analysis);
    }
    Ok(())
}

fn print_detail_table(analysis: &Analysis) {
    let mut table = Table::new(detail_headers());

    // time placeholders grey, delta colored by sign
    for row in build_report_rows(analysis) {
        table.add_row(vec![
            row.person.clone(),
            row.date.clone(),
            row.weekday.clone(),
            colorize_optional(&row.check_in),
            colorize_optional(&row.check_out),
            colorize_delta(&row.delta),
        ]);
    }

    println!("{}", table.render());
}

fn print_weekly_table(analysis: &Analysis) {
    let mut table = Table::new(weekly_headers());

    for week in build_weekly_rows(analysis) {
        table.add_row(weekly_row_to_vec(&week));
    }

    println!("{}", table.render());
}
