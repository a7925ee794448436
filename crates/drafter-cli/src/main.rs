//! drafter CLI — export drafter documents as SketchUp scripts.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use drafter_model::{Document, Model, ModelElement, Sketch, SketchElement};

#[derive(Parser)]
#[command(name = "drafter")]
#[command(about = "Export drafter documents as SketchUp scripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a .json document to a SketchUp script file
    Export {
        /// Input document (.json)
        input: PathBuf,
        /// Output script file (.su)
        output: PathBuf,
    },
    /// Print the generated script to stdout
    Print {
        /// Input document (.json)
        input: PathBuf,
    },
    /// Display information about a document
    Info {
        /// Input document (.json)
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Export { input, output } => {
            let doc = load(&input)?;
            drafter_sketchup::write_model(&output, &doc.model)
                .with_context(|| format!("failed to export {}", output.display()))?;
            log::info!("wrote {}", output.display());
        }
        Commands::Print { input } => {
            let doc = load(&input)?;
            let script = drafter_sketchup::model_script(&doc.model)?;
            print!("{script}");
        }
        Commands::Info { input } => {
            let doc = load(&input)?;
            show_info(&doc);
        }
    }

    Ok(())
}

fn load(path: &PathBuf) -> Result<Document> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Document::from_json(&json).with_context(|| format!("invalid document {}", path.display()))
}

fn show_info(doc: &Document) {
    let counts = Counts::of_model(&doc.model);
    println!("version:       {}", doc.version);
    println!("models:        {}", counts.models);
    println!("groups:        {}", counts.groups);
    println!("extrusions:    {}", counts.extrusions);
    println!("sketch groups: {}", counts.sketch_groups);
    println!("primitives:    {}", counts.primitives);
}

#[derive(Default)]
struct Counts {
    models: usize,
    groups: usize,
    extrusions: usize,
    sketch_groups: usize,
    primitives: usize,
}

impl Counts {
    fn of_model(model: &Model) -> Self {
        let mut counts = Counts::default();
        counts.models = 1;
        counts.visit_elements(&model.elements);
        counts
    }

    fn visit_elements(&mut self, elements: &[ModelElement]) {
        for element in elements {
            match element {
                ModelElement::Model(model) => {
                    self.models += 1;
                    self.visit_elements(&model.elements);
                }
                ModelElement::Group(group) => {
                    self.groups += 1;
                    self.visit_elements(&group.elements);
                }
                ModelElement::Extrusion(extrusion) => {
                    self.extrusions += 1;
                    self.visit_sketch(&extrusion.sketch);
                }
            }
        }
    }

    fn visit_sketch(&mut self, sketch: &Sketch) {
        for element in &sketch.elements {
            match element {
                SketchElement::Primitive(_) => self.primitives += 1,
                SketchElement::Group(group) => {
                    self.sketch_groups += 1;
                    self.visit_sketch(&group.sketch);
                }
            }
        }
    }
}
