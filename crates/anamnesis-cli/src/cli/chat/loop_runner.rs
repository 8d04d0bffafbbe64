//! Main interview loop orchestration.
//!
//! Coordinates the conversation lifecycle: case resolution, provider and
//! session construction, welcome banner, input loop with patient replies,
//! and slash commands for resetting or switching cases.

use std::sync::Arc;
use std::time::Instant;

use console::style;
use tracing::info;

use anamnesis_core::llm::BoxLlmProvider;
use anamnesis_core::registry::CaseRegistry;
use anamnesis_core::session::ConversationSession;
use anamnesis_infra::llm::gemini::GeminiProvider;
use anamnesis_types::error::SessionError;
use anamnesis_types::llm::LlmError;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{InputEvent, InterviewInput};
use super::renderer::InterviewRenderer;

/// Resolve a case argument (1-based number or exact label) to a label.
fn resolve_case_arg(registry: &CaseRegistry, arg: &str) -> anyhow::Result<String> {
    if let Ok(number) = arg.parse::<usize>() {
        let index = number
            .checked_sub(1)
            .ok_or_else(|| anyhow::anyhow!("case numbers start at 1"))?;
        return Ok(registry.by_index(index)?.label.clone());
    }
    Ok(registry.get(arg)?.label.clone())
}

/// Prompt the student to pick a case from a numbered list.
fn prompt_for_case(registry: &CaseRegistry) -> anyhow::Result<String> {
    println!();
    println!("  {}", style("Choose a patient level:").bold());
    println!();
    for (i, entry) in registry.entries().iter().enumerate() {
        println!(
            "  {} {}",
            style(format!("{}.", i + 1)).cyan(),
            entry.label
        );
        println!("     {}", style(&entry.summary).dim());
    }
    println!();

    let selection: usize = dialoguer::Input::new()
        .with_prompt("  Select case (number)")
        .interact_text()?;

    let index = selection
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("case numbers start at 1"))?;
    Ok(registry.by_index(index)?.label.clone())
}

/// The patient's given name, pulled out of a case label for the reply prefix.
///
/// Labels follow "Level N: Name (System - Complaint)"; anything that doesn't
/// is shown as-is.
fn patient_name(label: &str) -> &str {
    let after_colon = label.split_once(": ").map_or(label, |(_, rest)| rest);
    after_colon
        .split_once(" (")
        .map_or(after_colon, |(name, _)| name)
}

fn thinking_spinner() -> indicatif::ProgressBar {
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

fn print_model_error(err: &SessionError) {
    eprintln!("\n  {} {err}", style("!").red().bold());
    if matches!(err, SessionError::Model(LlmError::AuthenticationFailed)) {
        eprintln!(
            "  {}",
            style("Tip: your API key might be leaked or billing isn't active yet.").dim()
        );
    }
    eprintln!(
        "  {}",
        style("Your question stays in the transcript; ask again or /exit to quit.").dim()
    );
}

/// Run the interactive interview loop.
pub async fn run_chat_loop(state: &AppState, case: Option<&str>) -> anyhow::Result<()> {
    let initial_label = match case {
        Some(arg) => resolve_case_arg(&state.registry, arg)?,
        None => prompt_for_case(&state.registry)?,
    };

    let provider = GeminiProvider::new(
        state.api_key.clone(),
        state.chat_config.model.clone(),
    );
    let mut session = ConversationSession::new(
        state.registry.clone(),
        Arc::new(BoxLlmProvider::new(provider)),
        state.chat_config.clone(),
    );
    session.select_case(&initial_label)?;
    info!(session_id = %session.id(), case = %initial_label, "interview started");

    let entry = state.registry.get(&initial_label)?;
    print_welcome_banner(
        &entry.label,
        &entry.summary,
        &state.chat_config.model,
        &session.id().to_string(),
    );

    let renderer = InterviewRenderer::new();
    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut input, _writer) = InterviewInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("failed to initialize input: {e}"))?;

    loop {
        match input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Interview ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep interviewing.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            commands::print_help();
                        }
                        ChatCommand::Clear => {
                            input.clear();
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Interview ended.").dim());
                            break;
                        }
                        ChatCommand::Reset => match session.reset() {
                            Ok(()) => println!(
                                "\n  {} Simulation reset. The patient remembers nothing.\n",
                                style("*").cyan().bold()
                            ),
                            Err(e) => {
                                eprintln!("\n  {} {e}\n", style("!").red().bold());
                            }
                        },
                        ChatCommand::Case(arg) => {
                            let label = match arg {
                                Some(a) => resolve_case_arg(&state.registry, &a),
                                None => prompt_for_case(&state.registry),
                            };
                            match label {
                                Ok(label) => {
                                    let already_active =
                                        session.active_case() == Some(label.as_str());
                                    match session.select_case(&label) {
                                        Ok(()) if already_active => println!(
                                            "\n  {} Already interviewing {}; transcript kept.\n",
                                            style("*").cyan().bold(),
                                            patient_name(&label)
                                        ),
                                        Ok(()) => {
                                            let entry = state.registry.get(&label)?;
                                            print_welcome_banner(
                                                &entry.label,
                                                &entry.summary,
                                                &state.chat_config.model,
                                                &session.id().to_string(),
                                            );
                                        }
                                        Err(e) => {
                                            eprintln!("\n  {} {e}\n", style("!").red().bold());
                                        }
                                    }
                                }
                                Err(e) => {
                                    eprintln!("\n  {} {e}\n", style("!").red().bold());
                                }
                            }
                        }
                        ChatCommand::History => {
                            let name = session.active_case().map(patient_name).unwrap_or("Patient");
                            println!();
                            for turn in session.transcript() {
                                let role_label = match turn.role {
                                    anamnesis_types::chat::TurnRole::User => {
                                        format!("{}", style("You").green())
                                    }
                                    anamnesis_types::chat::TurnRole::Patient => {
                                        format!("{}", style(name).cyan())
                                    }
                                };
                                let preview = if turn.content.chars().count() > 100 {
                                    let head: String = turn.content.chars().take(97).collect();
                                    format!("{head}...")
                                } else {
                                    turn.content.clone()
                                };
                                println!("  {} {}", style(role_label).bold(), preview);
                            }
                            println!();
                        }
                        ChatCommand::Unknown(cmd_name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(cmd_name).dim()
                            );
                        }
                    }
                    continue;
                }

                let spinner = thinking_spinner();
                let start_time = Instant::now();
                let result = session.submit_user_turn(&text).await;
                spinner.finish_and_clear();

                match result {
                    Ok(Some(reply)) => {
                        let name = session.active_case().map(patient_name).unwrap_or("Patient");
                        println!("\n  {}", style(name).cyan().bold());
                        let rendered = renderer.render(&reply.content);
                        println!("  {}", rendered.trim());
                        renderer.print_stats_footer(
                            start_time.elapsed().as_millis() as u64,
                            &state.chat_config.model,
                        );
                        println!();
                    }
                    Ok(None) => {}
                    Err(e) => print_model_error(&e),
                }
            }
        }
    }

    Ok(())
}
