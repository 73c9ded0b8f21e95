use crate::config::LauncherConfig;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const ACK_PROMPT: &str = "Press Enter to continue . . .";

fn activate_command(venv_dir: &str) -> String {
    if cfg!(windows) {
        format!("{}\\Scripts\\activate", venv_dir.replace('/', "\\"))
    } else {
        format!("source {}/bin/activate", venv_dir)
    }
}

/// Setup steps shown when the venv is missing.
pub fn remediation_message(config: &LauncherConfig) -> String {
    format!(
        "Virtual environment '{venv}' not found.\n\
         Set it up from this directory with:\n\
         \n    python -m venv {venv}\n    {activate}\n    pip install -r {requirements}\n",
        venv = config.venv_dir,
        activate = activate_command(&config.venv_dir),
        requirements = config.requirements,
    )
}

pub fn missing_script_message(script: &Path) -> String {
    let name = script
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| script.display().to_string());
    format!(
        "Error: {} not found.\nExpected it at {}\n",
        name,
        script.display()
    )
}

/// Print the acknowledgment prompt and block until a line (or EOF) is read.
pub async fn acknowledge<R, W>(reader: &mut R, writer: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(ACK_PROMPT.as_bytes()).await?;
    writer.flush().await?;

    let mut line = String::new();
    reader.read_line(&mut line).await?;

    writer.write_all(b"\n").await?;
    writer.flush().await
}
