use super::Context;
use crate::core::error::{HashgenError, Result};
use crate::hash::{self, Scheme, Size};
use colored::Colorize;
use dialoguer::{Confirm, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct GenerateOutput<'a> {
    scheme: Scheme,
    algorithm: &'a str,
    size: Size,
    length: usize,
    hash: &'a str,
}

fn prompt_password() -> Result<String> {
    let mut prompt = "Enter your base password/passphrase";
    loop {
        let input = Password::new()
            .with_prompt(prompt)
            .interact()
            .map_err(|e| HashgenError::Prompt(e.to_string()))?;

        if !input.trim().is_empty() {
            return Ok(input);
        }
        prompt = "Enter your base password/passphrase (cannot be empty)";
    }
}

fn prompt_scheme() -> Result<Scheme> {
    let items: Vec<String> = Scheme::ALL
        .iter()
        .map(|s| format!("{}: {}", s.code(), s.algorithm()))
        .collect();

    let selection = Select::new()
        .with_prompt("Select encryption scheme")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|e| HashgenError::Prompt(format!("Failed to select scheme: {}", e)))?;

    selection
        .map(|index| Scheme::ALL[index])
        .ok_or_else(|| HashgenError::Prompt("no scheme selected".to_string()))
}

fn prompt_size() -> Result<Size> {
    let items: Vec<String> = Size::ALL
        .iter()
        .map(|s| match s.limit() {
            Some(limit) => format!("{} ({} chars)", s.code(), limit),
            None => format!("{} (no truncation)", s.code()),
        })
        .collect();

    let selection = Select::new()
        .with_prompt("Select desired size")
        .items(&items)
        .default(2)
        .interact_opt()
        .map_err(|e| HashgenError::Prompt(format!("Failed to select size: {}", e)))?;

    selection
        .map(|index| Size::ALL[index])
        .ok_or_else(|| HashgenError::Prompt("no size selected".to_string()))
}

fn prompt_again() -> Result<bool> {
    Confirm::new()
        .with_prompt("Generate another hash?")
        .default(false)
        .interact()
        .map_err(|e| HashgenError::Prompt(e.to_string()))
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message("Generating and validating, please wait...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

async fn run_once(
    ctx: &Context,
    password: &str,
    scheme: Scheme,
    size: Size,
    json: bool,
) -> Result<()> {
    tracing::debug!(
        "Deriving with {} ({} round(s))",
        scheme.algorithm(),
        ctx.config.hash.rounds
    );

    let pb = spinner();
    let result = hash::generate(password, scheme, size, &ctx.config.hash).await;
    pb.finish_and_clear();
    let result = result?;

    if json {
        let output = GenerateOutput {
            scheme,
            algorithm: scheme.algorithm(),
            size,
            length: result.len(),
            hash: &result,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "\n{} [{}] ({}, {} chars):\n{}\n",
            "Derived hash".green().bold(),
            scheme.to_string().cyan(),
            size,
            result.len(),
            result
        );
    }

    Ok(())
}

fn has_text(input: &Option<String>) -> bool {
    input.as_deref().is_some_and(|s| !s.trim().is_empty())
}

pub async fn execute(
    ctx: &Context,
    input: Option<String>,
    scheme: Option<Scheme>,
    size: Option<Size>,
    json: bool,
) -> Result<i32> {
    if let (true, Some(scheme), Some(size)) = (has_text(&input), scheme, size) {
        let password = input.unwrap_or_default();
        run_once(ctx, &password, scheme, size, json).await?;
        return Ok(0);
    }

    // Anything missing is asked for on every pass; given values are reused.
    loop {
        let password = match &input {
            Some(text) if !text.trim().is_empty() => text.clone(),
            _ => prompt_password()?,
        };
        let scheme = match scheme {
            Some(scheme) => scheme,
            None => prompt_scheme()?,
        };
        let size = match size {
            Some(size) => size,
            None => prompt_size()?,
        };

        if let Err(e) = run_once(ctx, &password, scheme, size, json).await {
            eprintln!("{} {}", "Error:".red().bold(), e);
        }

        if !prompt_again()? {
            println!("Exiting");
            break;
        }
    }

    Ok(0)
}
