use std::io::{self, Read, Write};

use anyhow::Result;

use template_engine::config::Settings;
use template_engine::error;
use template_engine::telemetry::init_telemetry;
use template_engine::template::TemplateEngine;

fn main() -> Result<()> {
    // Load configuration
    let settings = Settings::new()?;

    // Initialize tracing
    init_telemetry(&settings.logging)?;
    tracing::debug!(mode = %settings.engine.mode, "Configuration loaded");

    let output = resolve_stdin(&settings)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    tracing::info!(bytes = output.len(), "Template resolved");
    Ok(())
}

/// Read the template from stdin and resolve it with the configured bindings
fn resolve_stdin(settings: &Settings) -> error::Result<String> {
    let store = settings.binding_store()?;

    let mut template = String::new();
    io::stdin().read_to_string(&mut template)?;

    let output = TemplateEngine::new()
        .evaluate(Some(&template), Some(&store), Some(&settings.engine.mode))
        .unwrap_or_default();

    Ok(output)
}
