use super::Context;
use crate::core::error::{HashgenError, Result};
use crate::launcher::{acknowledge, missing_script_message, remediation_message, Launcher};
use colored::Colorize;
use tokio::io::BufReader;

async fn pause(ctx: &Context) -> Result<()> {
    if ctx.pause {
        let mut stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        acknowledge(&mut stdin, &mut stdout).await?;
    }
    Ok(())
}

pub async fn execute(ctx: &Context) -> Result<i32> {
    let launcher = Launcher::new(ctx.root.clone(), ctx.config.launcher.clone());

    match launcher.launch().await {
        Ok(code) => Ok(code),
        Err(HashgenError::MissingEnvironment(path)) => {
            tracing::debug!("Missing venv: {}", path.display());
            println!("{}", "Setup required".yellow().bold());
            println!("{}", remediation_message(launcher.config()));
            pause(ctx).await?;
            Ok(1)
        }
        Err(HashgenError::MissingScript(path)) => {
            tracing::debug!("Missing script: {}", path.display());
            println!("{}", missing_script_message(&path));
            pause(ctx).await?;
            Ok(1)
        }
        Err(e) => Err(e),
    }
}
