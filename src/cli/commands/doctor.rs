use super::Context;
use crate::core::error::Result;
use crate::launcher::Launcher;
use colored::Colorize;

pub async fn execute(ctx: &Context) -> Result<i32> {
    println!("{}", "Running launcher checks...".bold());
    println!();

    let launcher = Launcher::new(ctx.root.clone(), ctx.config.launcher.clone());
    let venv = launcher.venv();
    let mut all_ok = true;

    println!("Launcher root: {}", ctx.root.display().to_string().cyan());

    print!("Checking config... ");
    match &ctx.config_path {
        Some(path) => println!("{} ({})", "✓".green(), path.display().to_string().yellow()),
        None => println!("{}", "○ Not found, using defaults".yellow()),
    }

    print!("Checking virtual environment... ");
    if launcher.check_environment().is_ok() {
        println!("{} ({})", "✓".green(), venv.venv_path().display());

        if !venv.has_activation_script() {
            println!("  {}", "○ No activation script found".yellow());
        }

        print!("Checking interpreter... ");
        match venv.python_version().await {
            Ok(v) => println!("{} ({})", "✓".green(), v.yellow()),
            Err(e) => {
                println!("{}", "✗ Not runnable".red());
                println!("  {}", e);
                all_ok = false;
            }
        }
    } else {
        println!("{}", "✗ Not found".red());
        println!(
            "  Run {} to create it",
            format!("python -m venv {}", ctx.config.launcher.venv_dir).cyan()
        );
        all_ok = false;
    }

    print!("Checking script... ");
    if launcher.check_script().is_ok() {
        println!("{} ({})", "✓".green(), launcher.script_path().display());
    } else {
        println!("{}", "✗ Not found".red());
        println!("  Expected at {}", launcher.script_path().display());
        all_ok = false;
    }

    print!("Checking requirements... ");
    if launcher.requirements_path().is_file() {
        println!("{}", "✓".green());
    } else {
        println!("{}", "○ Not found".yellow());
    }

    println!();
    if all_ok {
        println!("{}", "All checks passed!".green().bold());
        Ok(0)
    } else {
        println!(
            "{}",
            "Some checks failed. Please fix the issues above."
                .yellow()
                .bold()
        );
        Ok(1)
    }
}
