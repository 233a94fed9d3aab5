//! todoapi-client CLI entry point.

use clap::Parser;
use todoapi_client::cli::{Cli, Commands, OutputFormat};
use todoapi_client::client::TodoClient;
use todoapi_client::output::{format_json, pretty};
use todoapi_core::todo::{CreateTodoRequest, UpdateTodoRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = TodoClient::new(&cli.base_url);

    match cli.command {
        Commands::Todos(todos_cmd) => {
            use todoapi_client::cli::todos::TodosAction;
            match todos_cmd.action {
                TodosAction::List => {
                    let list = client.list_todos().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&list)),
                        OutputFormat::Pretty => println!("{}", pretty::format_todos(&list)),
                    }
                }
                TodosAction::Create { title, description } => {
                    let mut req = CreateTodoRequest::new(title);
                    req.description = description;
                    let todo = client.create_todo(&req).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&todo)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_todo(&todo))
                        }
                    }
                }
                TodosAction::Get { id } => {
                    let todo = client.get_todo(&id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&todo)),
                        OutputFormat::Pretty => println!("{}", pretty::format_todo(&todo)),
                    }
                }
                TodosAction::Update {
                    id,
                    title,
                    description,
                    completed,
                } => {
                    let req = UpdateTodoRequest {
                        title,
                        description,
                        completed,
                    };
                    let todo = client.update_todo(&id, &req).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&todo)),
                        OutputFormat::Pretty => {
                            println!("Updated:\n{}", pretty::format_todo(&todo))
                        }
                    }
                }
                TodosAction::Toggle { id } => {
                    let todo = client.toggle_todo(&id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&todo)),
                        OutputFormat::Pretty => {
                            println!("Toggled:\n{}", pretty::format_todo(&todo))
                        }
                    }
                }
                TodosAction::Delete { id } => {
                    let message = client.delete_todo(&id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&message)),
                        OutputFormat::Pretty => {
                            if !cli.quiet {
                                println!("Deleted todo {}", id);
                            }
                        }
                    }
                }
            }
        }
        Commands::Health(_) => {
            client.livez().await?;
            if !cli.quiet {
                println!("OK");
            }
        }
    }

    Ok(())
}
