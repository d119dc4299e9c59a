use crate::config::{Project, ProjectStore, ProjectsConfig};
use anyhow::Result;
use clap::Subcommand;
use dialoguer::{Input, Select};

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Create a new project
    Create,
    /// List all projects
    List,
    /// Update a project
    Update,
    /// Delete a project
    Delete,
}

fn prompt(msg: &str, initial: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(msg);
    if let Some(value) = initial {
        input = input.with_initial_text(value);
    }
    Ok(input.interact_text()?.trim().to_string())
}

fn select_project(cfg: &ProjectsConfig, msg: &str) -> Result<usize> {
    let items: Vec<String> = cfg.projects.iter().map(describe).collect();
    let index = Select::new()
        .with_prompt(msg)
        .items(&items)
        .default(0)
        .interact()?;
    Ok(index)
}

fn describe(project: &Project) -> String {
    format!("{} ({})", project.name, project.backend_url)
}

/// Lines printed by `project list`
pub fn list_lines(cfg: &ProjectsConfig) -> Vec<String> {
    cfg.projects
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. {}", i + 1, describe(p)))
        .collect()
}

pub fn run(store: &impl ProjectStore, cmd: ProjectCommands) -> Result<()> {
    let mut cfg = store.load()?;

    match cmd {
        ProjectCommands::Create => {
            let key = prompt("Enter project key", None)?;
            let name = prompt("Enter project name", None)?;
            let backend_url = prompt("Enter backend URL", None)?;
            let project = Project::new(key, name, backend_url);
            let name = project.name.clone();
            cfg.add(project)?;
            store.save(&cfg)?;
            println!("✅ Project \"{name}\" created successfully.");
        }
        ProjectCommands::List => {
            if cfg.projects.is_empty() {
                println!("No projects found.");
            } else {
                println!("Projects:");
                for line in list_lines(&cfg) {
                    println!("{line}");
                }
            }
        }
        ProjectCommands::Update => {
            if cfg.projects.is_empty() {
                println!("No projects to update.");
                return Ok(());
            }
            let index = select_project(&cfg, "Select a project to update")?;
            let current = cfg.projects[index].clone();
            let key = prompt("Enter new project key", Some(&current.key))?;
            let name = prompt("Enter new project name", Some(&current.name))?;
            let backend_url = prompt("Enter new backend URL", Some(&current.backend_url))?;
            let project = Project::new(key, name, backend_url);
            let name = project.name.clone();
            cfg.update(index, project)?;
            store.save(&cfg)?;
            println!("✅ Project \"{name}\" updated successfully.");
        }
        ProjectCommands::Delete => {
            if cfg.projects.is_empty() {
                println!("No projects to delete.");
                return Ok(());
            }
            let index = select_project(&cfg, "Select a project to delete")?;
            let removed = cfg.remove(index)?;
            store.save(&cfg)?;
            println!("✅ Project \"{}\" deleted successfully.", removed.name);
        }
    }

    Ok(())
}
