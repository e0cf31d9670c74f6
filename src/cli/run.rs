use crate::{
    cli::{display_contact, listing_line},
    logging::init_logging,
    prelude::{
        AppError, ContactManager, StorageConfig,
        command::{Cli, Commands},
        port::{export_contacts, read_csv_records},
    },
};
use clap::Parser;
use dotenv::dotenv;
use tracing::debug;

pub fn run_app() -> Result<(), AppError> {
    // .env has to be loaded before clap reads its env fallbacks
    dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    execute(cli)
}

pub fn execute(cli: Cli) -> Result<(), AppError> {
    let config = StorageConfig::new(&cli.storage_choice, cli.db)?;
    debug!(medium = config.medium.is_which(), path = %config.path.display(), "storage configured");

    let mut manager = ContactManager::from_config(&config)?;

    match cli.command {
        Commands::Add { name, phone, email } => {
            let contact = manager.add_contact(
                &name.unwrap_or_default(),
                &phone.unwrap_or_default(),
                &email.unwrap_or_default(),
            )?;

            println!("Contact added successfully");
            println!("{}", display_contact(&contact));
            Ok(())
        }

        Commands::List => {
            let contacts = manager.list_contacts()?;
            if contacts.is_empty() {
                println!("No contacts found.");
                return Ok(());
            }

            for contact in &contacts {
                println!("{}", listing_line(contact));
            }
            Ok(())
        }

        Commands::Show { id } => {
            let contact = manager.get_contact(id)?;
            println!("{}", display_contact(&contact));
            Ok(())
        }

        Commands::Edit {
            id,
            name,
            phone,
            email,
        } => {
            if name.is_none() && phone.is_none() && email.is_none() {
                return Err(AppError::Validation(
                    "Provide at least one of --name, --phone or --email to update".to_string(),
                ));
            }

            let current = manager.get_contact(id)?;
            let contact = manager.edit_contact(
                id,
                &name.unwrap_or(current.name),
                &phone.unwrap_or(current.phone),
                &email.unwrap_or(current.email),
            )?;

            println!("Contact updated successfully");
            println!("{}", display_contact(&contact));
            Ok(())
        }

        Commands::Delete { id } => {
            manager.delete_contact(id)?;
            println!("Contact deleted successfully");
            Ok(())
        }

        Commands::Import { src } => {
            let records = read_csv_records(&src)?;
            let summary = manager.import_contacts(records)?;

            println!(
                "Successfully imported {} contact(s)",
                summary.imported.len()
            );
            if summary.skipped > 0 {
                println!("Skipped {} blank row(s)", summary.skipped);
            }
            Ok(())
        }

        Commands::Export { des } => {
            let contacts = manager.list_contacts()?;
            let path = export_contacts(&contacts, &des)?;

            println!(
                "Successfully exported {} contact(s) to {}",
                contacts.len(),
                path.display()
            );
            Ok(())
        }
    }
}
