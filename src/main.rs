use clap::Parser;
use forbes_eu_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Forbes EU Processor - Forbes Global 2000 EU Statistics");
    println!("======================================================");
    println!();
    println!("Load a semicolon-delimited Forbes Global 2000 export, filter it down");
    println!("to EU member states, and report per-country aggregates.");
    println!();
    println!("USAGE:");
    println!("    forbes-eu <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    report      Load an export and print one of the per-country aggregates");
    println!("    countries   List the EU member states used for filtering");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Count EU companies per member state:");
    println!("    forbes-eu report --input \"Forbes Global 2000 - 2013.csv\"");
    println!();
    println!("    # Total market value per member state:");
    println!("    forbes-eu report --input forbes.csv --aggregate market-value");
    println!();
    println!("    # Best Forbes rank per member state:");
    println!("    forbes-eu report --input forbes.csv --aggregate rank");
    println!();
    println!("For detailed help on any command, use:");
    println!("    forbes-eu <COMMAND> --help");
}
