use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Password, Select};
use jobscout_core::config::{self, Config};

const BANNER: &str = r"
    -------------------------------------

       _       _                         _
      (_) ___ | |__  ___  ___ ___  _   _| |_
      | |/ _ \| '_ \/ __|/ __/ _ \| | | | __|
      | | (_) | |_) \__ \ (_| (_) | |_| | |_
     _/ |\___/|_.__/|___/\___\___/ \__,_|\__|
    |__/

    -------------------------------------
";

const PROVIDERS: &[&str] = &["groq", "openai", "ollama"];

fn print_step(step: usize, total: usize, title: &str) {
    println!();
    println!(
        "{}",
        style(format!("[{}/{}] {}", step, total, title))
            .cyan()
            .bold()
    );
    println!();
}

fn models_for(provider: &str) -> &'static [&'static str] {
    match provider {
        "openai" => &["gpt-4o-mini", "gpt-4o", "gpt-5-mini"],
        "ollama" => &["llama3.2", "llama3.1", "qwen2.5"],
        _ => &["llama-3.1-8b-instant", "llama-3.3-70b-versatile"],
    }
}

fn setup_provider(current: Option<&str>) -> Result<String> {
    let default = current
        .and_then(|name| PROVIDERS.iter().position(|p| *p == name))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Select your language model provider")
        .items(PROVIDERS)
        .default(default)
        .interact()
        .context("Failed to select provider")?;

    Ok(PROVIDERS[selection].to_string())
}

fn setup_api_key(provider: &str, current: &str) -> Result<String> {
    if provider == "ollama" {
        return Ok(String::new());
    }

    let api_key = Password::new()
        .with_prompt(if current.is_empty() {
            format!("Enter your {} API key", provider)
        } else {
            format!(
                "Enter your {} API key (leave empty to keep the current one)",
                provider
            )
        })
        .allow_empty_password(true)
        .interact()
        .context("Failed to read API key")?;

    let api_key = if api_key.trim().is_empty() {
        current.to_string()
    } else {
        api_key.trim().to_string()
    };

    if api_key.is_empty() {
        return Err(anyhow::anyhow!("API key cannot be empty"));
    }

    Ok(api_key)
}

/// The stored key only carries over when the provider stays the same.
fn carried_key<'a>(previous: Option<&str>, selected: &str, current: &'a str) -> &'a str {
    let previous = previous.unwrap_or("groq");
    if previous.eq_ignore_ascii_case(selected) {
        current
    } else {
        ""
    }
}

fn setup_model(provider: &str) -> Result<String> {
    let models = models_for(provider);

    let selection = Select::new()
        .with_prompt("Select your model")
        .items(models)
        .default(0)
        .interact()
        .context("Failed to select model")?;

    Ok(models[selection].to_string())
}

fn prompt_credential(prompt: &str, current: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .with_context(|| format!("Failed to read {}", prompt))?;

    Ok(value.trim().to_string())
}

fn report_board(name: &str, credential: &str) {
    if credential.is_empty() {
        println!(
            "  {} {} disabled (no credential)",
            style("!").yellow(),
            style(name).white().bold()
        );
    } else {
        println!("  {} {} ready", style("✓").green(), style(name).white().bold());
    }
}

pub fn run_onboard() -> Result<Config> {
    println!("{}", style(BANNER).cyan().bold());

    println!("  {}", style("Welcome to jobscout!").white().bold());
    println!(
        "  {}",
        style("This wizard connects a language model and your job board accounts.").dim()
    );
    println!();

    let mut config = if config::config_exists() {
        config::load_config().unwrap_or_default()
    } else {
        Config::default()
    };

    print_step(1, 4, "Language Model Provider");
    let provider = setup_provider(config.llm.provider.as_deref())?;

    print_step(2, 4, "API Key Setup");
    let current_key = carried_key(config.llm.provider.as_deref(), &provider, &config.llm.api_key);
    let api_key = setup_api_key(&provider, current_key)?;

    print_step(3, 4, "Model Selection");
    let model = setup_model(&provider)?;

    config.llm.provider = Some(provider);
    config.llm.api_key = api_key;
    config.llm.model = model;

    print_step(4, 4, "Job Boards");
    println!(
        "  {}",
        style("Leave a field empty to skip that board. Environment variables override these.")
            .dim()
    );
    config.careerjet.affid = prompt_credential("Careerjet affiliate id", &config.careerjet.affid)?;
    config.jooble.api_key = prompt_credential("Jooble API key", &config.jooble.api_key)?;
    config.web3.token = prompt_credential("web3.career token", &config.web3.token)?;

    println!();
    report_board("Careerjet", &config.careerjet.affid);
    report_board("Jooble", &config.jooble.api_key);
    report_board("web3.career", &config.web3.token);

    println!();
    println!("  {} Configuration complete!", style("✓").green().bold());

    Ok(config)
}

/// Printed once the configuration has actually been written.
pub fn print_saved() {
    println!(
        "  {} Config saved to {}",
        style("→").green(),
        style(config::get_config_path().display()).cyan()
    );
    println!();
    println!(
        "  {} You can now run: {}",
        style("→").green(),
        style("jobscout chat").cyan().bold()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_kept_for_same_provider() {
        assert_eq!(carried_key(Some("openai"), "openai", "sk"), "sk");
        assert_eq!(carried_key(None, "groq", "gsk"), "gsk");
    }

    #[test]
    fn key_is_dropped_when_provider_changes() {
        assert_eq!(carried_key(Some("groq"), "openai", "gsk"), "");
        assert_eq!(carried_key(None, "openai", "gsk"), "");
    }
}
