//! # Tessera CLI
//!
//! Command-line interface for the page builder.
//!
//! ## Usage
//!
//! ```bash
//! # Run the preview server
//! tessera serve --listen 0.0.0.0:8080 --data-dir ./projects
//!
//! # Export a saved project (or a bare instance list) to HTML
//! tessera render projects/1.json -o site.html
//!
//! # List component types
//! tessera components
//!
//! # Show the properties form of a type's template
//! tessera schema pricing
//! ```

use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tessera::{
    TesseraError, catalog,
    document::ComponentInstance,
    persist::ProjectRecord,
    render, schema,
    server::{self, Plan, ServerConfig},
    settings::Settings,
};

/// Tessera - block-based page builder
#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the project API and preview server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,

        /// Directory for uploaded images
        #[arg(long, default_value = "uploads")]
        upload_dir: PathBuf,

        /// Directory to persist projects in (in-memory when omitted)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Subscription plan, which sets the component limit
        #[arg(long, value_enum, default_value_t = Plan::Free)]
        plan: Plan,
    },

    /// Render a project file to a standalone HTML page
    Render {
        /// Project JSON (`{name, content, settings}`) or an instance list
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List component types
    Components,

    /// Print the properties form of a component type as JSON
    Schema {
        /// Component type name, e.g. "hero"
        type_name: String,
    },
}

/// Accepted shapes for `tessera render`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RenderInput {
    Project(ProjectRecord),
    Instances(Vec<ComponentInstance>),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tessera=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TesseraError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            upload_dir,
            data_dir,
            plan,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                upload_dir,
                data_dir,
                plan,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }

        Commands::Render { input, output } => {
            let raw = std::fs::read_to_string(&input)?;
            let (instances, settings) = match serde_json::from_str::<RenderInput>(&raw)? {
                RenderInput::Project(record) => {
                    let project = record.decode();
                    (project.instances, project.settings)
                }
                RenderInput::Instances(instances) => (instances, Settings::default()),
            };
            let html = render::render_page(&instances, &settings);
            match output {
                Some(path) => {
                    std::fs::write(&path, html)?;
                    eprintln!("Saved to {}", path.display());
                }
                None => print!("{}", html),
            }
        }

        Commands::Components => {
            for meta in catalog::component_types() {
                if meta.lists.is_empty() {
                    println!("  {:<14} {}", meta.type_name, meta.label);
                } else {
                    println!("  {:<14} {} [{}]", meta.type_name, meta.label, meta.lists.join(", "));
                }
            }
        }

        Commands::Schema { type_name } => {
            let template = catalog::template(&type_name)
                .ok_or_else(|| TesseraError::UnknownComponentType(type_name.clone()))?;
            let instance = ComponentInstance {
                id: 1,
                type_name: template.type_name,
                data: template.data,
            };
            let form = schema::form_for(&instance).ok_or(TesseraError::UnknownComponentType(type_name))?;
            println!("{}", serde_json::to_string_pretty(&form)?);
        }
    }

    Ok(())
}
