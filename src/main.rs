use clap::Parser;
use flatconf::application::StoreService;
use flatconf::cli::{format_entry_list, Cli, Commands};
use flatconf::error::FlatconfError;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("flatconf: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), FlatconfError> {
    match cli.command {
        Commands::Get { file, key } => {
            let service = StoreService::new(&file);
            let value = service.get(&key)?;
            println!("{}", value);
            Ok(())
        }
        Commands::Set { file, key, value } => {
            let service = StoreService::new(&file);
            service.set(&key, &value)?;
            println!("Set {} = {}", key, value);
            Ok(())
        }
        Commands::List { file } => {
            let service = StoreService::new(&file);
            let entries = service.list()?;
            print!("{}", format_entry_list(&entries));
            Ok(())
        }
    }
}
