mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::journal::EntryChanges;
use cli::{Cli, Commands};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Add {
            account,
            reference,
            debit,
            credit,
            date,
            description,
        } => cli::journal::add(&account, &reference, debit, credit, date, &description),
        Commands::List => cli::journal::list(),
        Commands::Edit {
            id,
            account,
            reference,
            debit,
            credit,
            date,
            description,
        } => cli::journal::edit(
            id,
            EntryChanges {
                account,
                reference,
                debit,
                credit,
                date,
                description,
            },
        ),
        Commands::Remove { id } => cli::journal::remove(id),
        Commands::Reset { yes } => cli::journal::reset(yes),
        Commands::Import { file } => cli::import::run(&file),
        Commands::Accounts => cli::accounts::list(),
        Commands::Report { command } => cli::report::run(command),
        Commands::Export {
            output_dir,
            format,
            date,
        } => cli::export::run(output_dir, format, date),
        Commands::Status => cli::status::run(),
        Commands::Completions { shell } => cli::completions::run(shell),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
