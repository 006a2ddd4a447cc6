//! Help message display for CLI.

#![allow(clippy::print_stdout)]

use crate::config::Config;

/// Print a usage summary with the active policy settings.
pub fn print_smart_help(config: &Config) {
    println!("Usage: camtriage [SCORE FILES]... [OPTIONS]");
    println!();
    println!("Triage camera-trap classifier score files into risk, priority,");
    println!("and escalation decisions.");
    println!();
    println!("Configured taxonomy:");
    for class in &config.taxonomy.classes {
        println!("  {:<10} risk weight {}", class.label, class.risk_weight);
    }
    println!();
    println!(
        "Priority tiers: LOW <= {} < MEDIUM <= {} < HIGH",
        config.priority.low_max, config.priority.medium_max
    );
    println!(
        "Escalation: risk >= {} and confidence < {}",
        config.escalation.risk_threshold, config.escalation.confidence_threshold
    );
    println!();
    println!("Examples:");
    println!("  camtriage card-a.scores.json");
    println!("  camtriage dumps/ --format csv,json --output-dir results/");
    println!("  camtriage card-a.scores.json --stdout");
    println!();
    println!("Run 'camtriage -h' for all options or 'camtriage config show' for the full configuration.");
}
