//! Welcome banner for an interview session.

use console::style;

/// Print the banner at the start of an interview.
///
/// Shows the bound case, the model, the session id, and the standing
/// instructions for the student.
pub fn print_welcome_banner(case_label: &str, summary: &str, model: &str, session_id: &str) {
    println!();
    println!("  {} {}", "*", style(case_label).cyan().bold());
    println!("  {}", style(summary).dim());
    println!();
    println!("  {}  {}", style("Model:").bold(), style(model).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!("  {}", style("Student instructions:").bold());
    println!("  {}", style("1. Introduce yourself and your role.").dim());
    println!("  {}", style("2. Ask one question at a time.").dim());
    println!("  {}", style("3. Build rapport through empathy.").dim());
    println!("  {}", style("4. Screen for 'Red Flags' and Vitals.").dim());
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
