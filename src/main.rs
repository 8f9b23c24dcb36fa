//! Command-line front end for the netfold geometry engine.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use netfold::fold::{FoldParameter, FoldScale};
use netfold::options::Options;
use netfold::scene::Scene;
use netfold::shape::{ShapeClass, ShapeInstance};
use netfold::view::ViewState;

/// Fold 3D solids into their flat nets and print the posed pieces.
#[derive(Parser)]
#[command(name = "netfold", version)]
struct Cli {
    /// TOML options file; defaults apply when omitted.
    #[arg(long, global = true)]
    options: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the scene for one shape and fold state as JSON.
    Scene {
        /// cube, cuboid, cylinder, sphere or cone.
        shape: ShapeClass,
        /// Fold value; 0 is the closed solid, the scale maximum is flat.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        fold: f32,
        /// Convention the fold value is given in.
        #[arg(long, value_enum, default_value_t = Scale::Fraction)]
        scale: Scale,
        /// Override the shape's initial yaw, in degrees.
        #[arg(long, allow_negative_numbers = true)]
        yaw: Option<f32>,
        /// Override the shape's initial pitch, in degrees.
        #[arg(long, allow_negative_numbers = true)]
        pitch: Option<f32>,
        /// Print the outline vertices of every piece instead of poses.
        #[arg(long)]
        vertices: bool,
    },
    /// Print the JSON schema of the options file.
    Schema,
    /// List the shapes with their lesson cards.
    Shapes,
}

#[derive(Clone, Copy, ValueEnum)]
enum Scale {
    Fraction,
    Percent,
    HingeDegrees,
}

impl From<Scale> for FoldScale {
    fn from(scale: Scale) -> Self {
        match scale {
            Scale::Fraction => Self::Fraction,
            Scale::Percent => Self::Percent,
            Scale::HingeDegrees => Self::HingeDegrees,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let options = match &cli.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Scene {
            shape,
            fold,
            scale,
            yaw,
            pitch,
            vertices,
        } => {
            let initial = options.view.initial_view(shape);
            let view = ViewState::new(yaw.unwrap_or(initial.yaw), pitch.unwrap_or(initial.pitch));
            let fold = FoldParameter::from_scaled(fold, scale.into());
            let scene = if shape.is_developable() {
                let instance = ShapeInstance::build(shape, &options.geometry, &options.colors)?;
                Scene::build(&instance, fold, view)
            } else {
                log::warn!("{shape} has no net; printing an empty scene");
                Scene::empty(shape, fold, view)
            };
            if vertices {
                let polygons: Vec<_> = scene
                    .pieces
                    .iter()
                    .map(|p| {
                        let vertices: Vec<[f32; 3]> =
                            p.world_vertices().iter().map(|v| v.to_array()).collect();
                        serde_json::json!({
                            "id": p.id,
                            "color": p.color,
                            "label": p.label,
                            "vertices": vertices,
                        })
                    })
                    .collect();
                serde_json::to_writer_pretty(&mut out, &polygons)?;
            } else {
                serde_json::to_writer_pretty(&mut out, &scene)?;
            }
            writeln!(out)?;
        }
        Command::Schema => {
            serde_json::to_writer_pretty(&mut out, &Options::json_schema())?;
            writeln!(out)?;
        }
        Command::Shapes => {
            for shape in ShapeClass::ALL {
                let info = shape.info();
                let net = if shape.is_developable() { "net" } else { "no net" };
                writeln!(
                    out,
                    "{:<9} {} {} ({net}): {}",
                    shape.as_str(),
                    info.emoji,
                    info.name,
                    info.characteristics.join("，")
                )?;
            }
        }
    }
    Ok(())
}
