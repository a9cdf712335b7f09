use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use csv_chisel::table::edit::{clear_column, clear_columns, delete_column, EditError, EditReport};

fn usage() {
    eprintln!("usage: csv-chisel clear      <input.csv> <column>         [output.csv]");
    eprintln!("       csv-chisel clear-many <input.csv> <col1,col2,...>  [output.csv]");
    eprintln!("       csv-chisel delete     <input.csv> <column>         [output.csv]");
    eprintln!();
    eprintln!("Without an output path the input file is rewritten in place.");
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, input, columns, output) = match args.as_slice() {
        [command, input, columns] => (command.as_str(), input, columns, None),
        [command, input, columns, output] => {
            (command.as_str(), input, columns, Some(Path::new(output.as_str())))
        }
        _ => {
            usage();
            return ExitCode::FAILURE;
        }
    };

    let input = Path::new(input.as_str());
    let result: Result<EditReport> = match command {
        "clear" => clear_column(input, columns, output),
        "clear-many" => {
            let names: Vec<String> = columns.split(',').map(|c| c.to_string()).collect();
            clear_columns(input, &names, output)
        }
        "delete" => delete_column(input, columns, output),
        _ => {
            usage();
            return ExitCode::FAILURE;
        }
    };

    let out = output.unwrap_or(input);
    match result {
        Ok(report) if command == "delete" => {
            println!(
                "Deleted column '{columns}' from '{}' ({} rows, {} columns left)",
                out.display(),
                report.rows,
                report.columns
            );
            ExitCode::SUCCESS
        }
        Ok(report) => {
            println!(
                "Cleared '{columns}' in '{}' ({} rows)",
                out.display(),
                report.rows
            );
            ExitCode::SUCCESS
        }
        // Schema mismatch is a user-facing diagnostic, not a process failure:
        // nothing was written and the message lists the existing columns.
        Err(err) if err.downcast_ref::<EditError>().is_some() => {
            println!("{err}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
