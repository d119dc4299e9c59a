use anyhow::{Context, Result};
use std::{
    fs,
    future::Future,
    path::{Path, PathBuf},
};

use crate::{
    client::ArkeClient,
    commands::login,
    config::{Project, ProjectStore},
    error::ClientError,
    output_path::{resolve_output_dir, schema_file_path},
    schema::{translate, translate_default, GeneratedSchema, DEFAULT_SCHEMAS},
};

pub async fn run(
    store: &impl ProjectStore,
    project_key: &str,
    out_dir: Option<&Path>,
) -> Result<()> {
    let target_dir = resolve_output_dir(out_dir)?;
    let project = store.load()?.require(project_key)?.clone();

    println!("Building schemas...");
    let written = pull_with_reauth(&project, &target_dir, move |project| async move {
        login::login(store, &project).await
    })
    .await?;

    println!(
        "✅ Schemas built successfully ({} files in {})",
        written.len(),
        target_dir.display()
    );
    Ok(())
}

/// Run [`pull_structs`], and if the backend rejects the session, call
/// `reauth` once and retry once with the project it returns
pub async fn pull_with_reauth<F, Fut>(
    project: &Project,
    target_dir: &Path,
    reauth: F,
) -> Result<Vec<PathBuf>>
where
    F: FnOnce(Project) -> Fut,
    Fut: Future<Output = Result<Project>>,
{
    let err = match pull_structs(project, target_dir).await {
        Ok(written) => return Ok(written),
        Err(err) => err,
    };
    let Some(reason) = auth_failure(&err).map(ToString::to_string) else {
        return Err(err.context("Failed to build schemas"));
    };

    tracing::warn!(project = %project.key, "{reason}");
    eprintln!("⚠️  {reason}");
    let project = reauth(project.clone()).await?;
    pull_structs(&project, target_dir)
        .await
        .context("Failed to build schemas")
}

/// Fetch every struct of the project and write one schema file per struct,
/// followed by the built-in schemas
///
/// Returns the paths written, in write order.
pub async fn pull_structs(project: &Project, target_dir: &Path) -> Result<Vec<PathBuf>> {
    let client = ArkeClient::new(project)?;
    let arkes = client.list_arkes().await?;
    tracing::debug!(project = %project.key, count = arkes.len(), "listed arkes");

    fs::create_dir_all(target_dir)
        .with_context(|| format!("creating {}", target_dir.display()))?;

    let mut written = Vec::with_capacity(arkes.len() + DEFAULT_SCHEMAS.len());
    for arke in &arkes {
        let remote = client.fetch_struct(&arke.id).await?;
        let schema =
            translate(&remote).with_context(|| format!("translating struct '{}'", arke.id))?;
        written.push(write_schema(target_dir, &schema)?);
    }

    for template in DEFAULT_SCHEMAS {
        let schema = translate_default(template.id, template.template);
        written.push(write_schema(target_dir, &schema)?);
    }

    Ok(written)
}

fn write_schema(dir: &Path, schema: &GeneratedSchema) -> Result<PathBuf> {
    let file = schema_file_path(dir, &schema.id);
    fs::write(&file, &schema.source).with_context(|| format!("writing {}", file.display()))?;
    tracing::info!(path = %file.display(), "wrote schema");
    Ok(file)
}

/// The backend rejected the stored session
pub fn auth_failure(err: &anyhow::Error) -> Option<&ClientError> {
    err.downcast_ref::<ClientError>().filter(|e| e.is_auth())
}
