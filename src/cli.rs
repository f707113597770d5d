// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines global runtime/output flags and the rm subcommand.

use clap::{Parser, Subcommand};
use imgrm::runtime::RuntimeType;
use imgrm::types::ImageName;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imgrm")]
#[command(about = "Remove container images from Docker and Podman")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Print JSON lines instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Container runtime to talk to (default: auto-detect)
    #[arg(long, global = true, value_enum)]
    pub runtime: Option<RuntimeType>,

    /// Runtime socket path (overrides DOCKER_HOST and detection)
    #[arg(long, global = true)]
    pub socket: Option<String>,

    /// Config file (default: $XDG_CONFIG_HOME/imgrm/config.yml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Remove one or more images
    #[command(visible_aliases = ["rmi", "remove"])]
    Rm {
        /// Force removal of the image and ignore missing images
        #[arg(short, long)]
        force: bool,

        /// Do not delete untagged parents
        #[arg(long)]
        no_prune: bool,

        /// Images to remove (name, tag, digest or ID)
        #[arg(required = true, value_name = "IMAGE")]
        images: Vec<ImageName>,
    },
}
