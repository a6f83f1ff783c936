use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use photo_timeline_core::{weeks_label, Section, SectionCounts, TimelineDocument};
use photo_timeline_sheet::{build_and_write, BuildConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "photo-timeline",
    about = "Genera y resume timeline.json a partir del Excel y las carpetas de fotos."
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lee el Excel y las carpetas W{n} y escribe timeline.json.
    Build {
        /// Libro de Excel con las hojas Pre y Post.
        #[arg(short, long, default_value = "Aniversario.xlsx")]
        workbook: PathBuf,
        /// Carpeta que contiene Pre/ y Post/.
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
        /// Archivo de salida.
        #[arg(short, long, default_value = "timeline.json")]
        output: PathBuf,
    },
    /// Muestra cuántas semanas tiene cada sección.
    Summary {
        /// Ruta a timeline.json.
        #[arg(short, long, default_value = "timeline.json")]
        input: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    match args.command {
        Command::Build {
            workbook,
            root,
            output,
        } => {
            let config = BuildConfig {
                workbook,
                root,
                output,
                ..BuildConfig::default()
            };
            tracing::debug!(?config, "build configuration");
            let document = build_and_write(&config)
                .with_context(|| format!("No se pudo generar {:?}", config.output))?;

            println!(
                "Generado {} con {} semanas Pre y {} semanas Post.",
                config.output.display(),
                document.pre.len(),
                document.post.len()
            );
        }
        Command::Summary { input } => {
            let data = std::fs::read_to_string(&input)
                .with_context(|| format!("No se pudo leer {input:?}"))?;
            let document = TimelineDocument::parse(&data)
                .with_context(|| format!("Contenido inválido en {input:?}"))?;
            let counts = SectionCounts::from_document(&document);

            if let Some(generated_at) = document.generated_at {
                println!("Generated at: {generated_at}");
            }
            for section in Section::ALL {
                println!("{section}: {}", weeks_label(counts.get(section)));
            }
        }
    }

    Ok(())
}
