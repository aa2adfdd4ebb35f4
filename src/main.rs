use clap::Parser;
use std::sync::Arc;
use studio_catalog::config::{Cli, CliConfig, Command, Dir, Visibility};
use studio_catalog::core::store::SharedStore;
use studio_catalog::utils::{logger, validation::Validate};
use studio_catalog::{
    editor, Catalog, CatalogError, CatalogStore, CategoryPatch, ContactClient, ContactForm,
    DetailsPatch, LocalStorage, MoveDirection, PersistenceGateway, ServicePatch, SessionGate,
};

type Gateway = PersistenceGateway<LocalStorage, CliConfig>;
type Gate = SessionGate<LocalStorage, CliConfig>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.config.verbose);

    tracing::info!("Starting studio-catalog CLI");
    if cli.config.verbose {
        tracing::debug!("CLI config: {:?}", cli.config);
    }

    if let Err(e) = cli.config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(cli.config.storage_path.clone());
    let store: SharedStore = CatalogStore::shared();
    let gateway = Gateway::new(storage.clone(), cli.config.clone(), Arc::clone(&store));
    let mut session = Gate::restore(storage, cli.config.clone()).await;

    match cli.command {
        Command::Show { preview } => show_menu(&gateway, preview).await,
        Command::Export { output } => export_catalog(&gateway, &session, &output).await,
        Command::Login { password } => {
            if session.login(&password).await {
                println!("✅ Signed in. The pricing editor is unlocked.");
            } else {
                eprintln!("❌ Incorrect password. Please try again.");
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Logout => {
            session.logout().await;
            println!("Signed out.");
            Ok(())
        }
        Command::Contact {
            name,
            phone,
            message,
        } => {
            let form = ContactForm {
                name,
                phone,
                message,
            };
            send_enquiry(cli.config.clone(), form).await
        }
        Command::AddCategory => commit_edit(&gateway, &session, editor::add_category).await,
        Command::RenameCategory { category_id, name } => {
            let patch = CategoryPatch {
                name: Some(name),
                ..Default::default()
            };
            commit_edit(&gateway, &session, move |c| {
                editor::update_category(c, &category_id, &patch)
            })
            .await
        }
        Command::SetCategoryActive {
            category_id,
            visibility,
        } => {
            let patch = CategoryPatch {
                is_active: Some(visibility == Visibility::Active),
                ..Default::default()
            };
            commit_edit(&gateway, &session, move |c| {
                editor::update_category(c, &category_id, &patch)
            })
            .await
        }
        Command::DeleteCategory { category_id } => {
            commit_edit(&gateway, &session, move |c| {
                editor::delete_category(c, &category_id)
            })
            .await
        }
        Command::MoveCategory { index, direction } => {
            let direction = move_direction(direction);
            commit_edit(&gateway, &session, move |c| {
                editor::move_category(c, index, direction)
            })
            .await
        }
        Command::AddService { category_id } => {
            commit_edit(&gateway, &session, move |c| {
                editor::add_service(c, &category_id)
            })
            .await
        }
        Command::UpdateService {
            category_id,
            service_id,
            name,
            price,
            description,
            duration_mins,
            active,
        } => {
            let patch = ServicePatch {
                name,
                price: price.as_deref().map(editor::parse_price),
                description,
                duration_mins,
                is_active: active,
            };
            commit_edit(&gateway, &session, move |c| {
                editor::update_service(c, &category_id, &service_id, &patch)
            })
            .await
        }
        Command::DeleteService {
            category_id,
            service_id,
        } => {
            commit_edit(&gateway, &session, move |c| {
                editor::delete_service(c, &category_id, &service_id)
            })
            .await
        }
        Command::MoveService {
            category_id,
            index,
            direction,
        } => {
            let direction = move_direction(direction);
            commit_edit(&gateway, &session, move |c| {
                editor::move_service(c, &category_id, index, direction)
            })
            .await
        }
        Command::SetDetails {
            currency_symbol,
            location,
            phone,
            note,
        } => {
            let patch = DetailsPatch {
                currency_symbol,
                location,
                phone,
                note,
            };
            commit_edit(&gateway, &session, move |c| editor::update_details(c, &patch)).await
        }
    }
}

fn move_direction(direction: Dir) -> MoveDirection {
    match direction {
        Dir::Up => MoveDirection::Up,
        Dir::Down => MoveDirection::Down,
    }
}

/// Home-page preview bounds: leading categories and services per category.
const PREVIEW_CATEGORIES: usize = 3;
const PREVIEW_SERVICES: usize = 2;

async fn show_menu(gateway: &Gateway, preview: bool) -> anyhow::Result<()> {
    let Some(catalog) = gateway.load().await else {
        eprintln!("❌ Pricing is not available right now. Please try again later.");
        std::process::exit(1);
    };

    let categories = if preview {
        catalog.highlights(PREVIEW_CATEGORIES, PREVIEW_SERVICES)
    } else {
        catalog.public_view()
    };
    for category in categories {
        println!("\n{}", category.name);
        println!("{}", "-".repeat(category.name.len()));
        for service in &category.services {
            let duration = service
                .duration_mins
                .map(|m| format!(" ({} min)", m))
                .unwrap_or_default();
            println!(
                "  {}{}  {}{}",
                service.name, duration, catalog.currency_symbol, service.price
            );
            if let Some(description) = &service.description {
                if !description.is_empty() {
                    println!("    {}", description);
                }
            }
        }
    }
    println!("\nStudio in {}. Phone: {}. {}", catalog.location, catalog.phone, catalog.note);
    Ok(())
}

async fn export_catalog(gateway: &Gateway, session: &Gate, output: &str) -> anyhow::Result<()> {
    require_session(session)?;
    let Some(catalog) = gateway.load().await else {
        eprintln!("❌ Nothing to export: the catalog could not be loaded.");
        std::process::exit(1);
    };
    let bytes = Gateway::export_snapshot(&catalog)?;
    std::fs::write(output, bytes)?;
    println!("✅ Catalog snapshot written to {}", output);
    Ok(())
}

async fn send_enquiry(config: CliConfig, form: ContactForm) -> anyhow::Result<()> {
    if let Err(e) = form.validate() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = ContactClient::new(config);
    match client.submit(&form).await {
        Ok(()) => {
            println!("✅ Message sent successfully. We will be in touch shortly!");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Contact submission error: {}", e);
            eprintln!("❌ Something went wrong. Please try again or DM us on Instagram.");
            std::process::exit(1);
        }
    }
}

/// Loads the current catalog, applies one editor operation to a working
/// copy and commits the result through the gateway.
async fn commit_edit<F>(gateway: &Gateway, session: &Gate, op: F) -> anyhow::Result<()>
where
    F: FnOnce(&Catalog) -> Catalog,
{
    require_session(session)?;

    let Some(catalog) = gateway.load().await else {
        eprintln!("❌ The catalog could not be loaded; nothing was changed.");
        std::process::exit(1);
    };

    let edited = op(&catalog);
    match gateway.save(&edited).await {
        Ok(()) => {
            println!("✅ Changes saved.");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Save failed: {}", e);
            eprintln!("❌ Changes could not be saved. The previous catalog is untouched.");
            std::process::exit(1);
        }
    }
}

fn require_session(session: &Gate) -> studio_catalog::Result<()> {
    if session.is_authenticated() {
        Ok(())
    } else {
        eprintln!("❌ Owner access required. Sign in first with `studio-catalog login`.");
        Err(CatalogError::AuthError {
            message: "owner session required".to_string(),
        })
    }
}
