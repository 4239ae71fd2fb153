use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use group_maker::grouping::{make_group_parent, GroupConfiguration, PivotMode, ReportMessage};
use group_maker::scene_graph::{ObjectId, Scene};

/// Group objects of a glTF scene under a new empty and print the result.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// glTF file to load
    path: PathBuf,

    /// Objects to select, by name. Defaults to every imported root node.
    #[arg(short, long = "select", value_name = "NAME")]
    select: Vec<String>,

    /// Active object, by name
    #[arg(short, long, value_name = "NAME")]
    active: Option<String>,

    /// Pivot placement: center, bottom or active
    #[arg(short, long, default_value = "center")]
    pivot: PivotMode,

    /// Name of the new group
    #[arg(short, long, default_value = "Group")]
    name: String,

    /// Copy the active object's rotation in bounds-based modes
    #[arg(long)]
    align_rotation: bool,

    /// Ignore hidden objects in the selection
    #[arg(long)]
    exclude_hidden: bool,

    /// Move the group and its children into their most common collection
    #[arg(long)]
    full_parenting: bool,
}

impl Cli {
    fn configuration(&self) -> GroupConfiguration {
        GroupConfiguration {
            pivot_mode: self.pivot,
            group_name: self.name.clone(),
            align_rotation_to_active: self.align_rotation,
            include_hidden: !self.exclude_hidden,
            full_parenting: self.full_parenting,
        }
    }
}

fn find_objects(scene: &Scene, names: &[String]) -> anyhow::Result<Vec<ObjectId>> {
    names
        .iter()
        .map(|name| {
            scene
                .get_object_by_name(name)
                .with_context(|| format!("No object named '{}'", name))
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let mut scene = Scene::new();
    let roots = scene
        .import_gltf(&cli.path)
        .context("Failed to import scene")?;

    let selection = if cli.select.is_empty() {
        roots
    } else {
        find_objects(&scene, &cli.select)?
    };
    let active = match &cli.active {
        Some(name) => Some(
            scene
                .get_object_by_name(name)
                .with_context(|| format!("No object named '{}'", name))?,
        ),
        None => None,
    };
    scene.select(&selection, active);

    match make_group_parent(&mut scene, &cli.configuration()) {
        Ok(report) => {
            for message in &report.messages {
                println!("{}", message);
            }
        }
        Err(error) => {
            println!("{}", ReportMessage::from(error));
        }
    }

    print!("{}", scene.outline());

    Ok(())
}
