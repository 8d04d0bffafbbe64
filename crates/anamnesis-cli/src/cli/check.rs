//! `anam check` -- verify the credential and case registry.

use console::style;
use secrecy::ExposeSecret;

use anamnesis_core::secret::SecretService;

use crate::state::AppState;

/// Report whether the simulator is ready to run.
///
/// AppState::init has already resolved the credential, so reaching this
/// point means the key exists; the check reports the masked key, the
/// effective model, and that the built-in cases loaded.
pub async fn check(state: &AppState, json: bool) -> anyhow::Result<()> {
    let masked = SecretService::mask_secret(state.api_key.expose_secret());
    let case_count = state.registry.len();

    if json {
        let report = serde_json::json!({
            "api_key": masked,
            "model": state.chat_config.model,
            "cases": case_count,
            "config_dir": state.config_dir.display().to_string(),
            "healthy": case_count > 0,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("  {} Anamnesis health check", style("*").bold());
    println!();
    println!("  {} API key resolved ({})", style("\u{2713}").green(), masked);
    println!(
        "  {} {} patient cases loaded",
        style("\u{2713}").green(),
        case_count
    );
    println!(
        "  {} Model: {}",
        style("\u{2713}").green(),
        style(&state.chat_config.model).dim()
    );
    println!(
        "  {} Config dir: {}",
        style("\u{2713}").green(),
        style(state.config_dir.display()).dim()
    );
    println!();

    Ok(())
}
