use crate::config::FileProjectStore;
use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

pub mod completions;
pub mod login;
pub mod project;
pub mod pull;

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Fetch every struct of a project and regenerate its Zod schemas")]
    Pull {
        /// The key of the project to pull data for
        project_key: String,
        /// Directory to write schemas to (defaults to lib/validations/arke)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    #[command(about = "Manage projects (create/list/update/delete)")]
    Project {
        #[command(subcommand)]
        cmd: project::ProjectCommands,
    },
    #[command(about = "Log in to a project and store its session tokens")]
    Login { project_key: String },
    #[command(about = "Emit shell completion scripts (bash/zsh/fish)")]
    Completions { shell: String },
}

pub async fn run(cmd: Commands) -> Result<()> {
    let store = FileProjectStore::from_env();
    match cmd {
        Commands::Pull {
            project_key,
            out_dir,
        } => pull::run(&store, &project_key, out_dir.as_deref()).await,
        Commands::Project { cmd } => project::run(&store, cmd),
        Commands::Login { project_key } => login::run(&store, &project_key).await,
        Commands::Completions { shell } => completions::run(shell),
    }
}
