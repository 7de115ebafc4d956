//! Write starter configuration

use std::fs;
use std::path::Path;

use checklist_gate::config::{CONFIG_FILE, DEFAULT_ITEMS_FILE, GateConfig};
use checklist_gate::output::{OperationResult, OutputMode};

const EXAMPLE_ITEMS: &str = "\
I have added tests that prove my fix is effective or that my feature works
I have updated the documentation accordingly
";

/// Create `.checklist-gate.toml` and an example items file
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config_path = Path::new(CONFIG_FILE);
    let items_path = Path::new(DEFAULT_ITEMS_FILE);
    let mut created = Vec::new();

    if force || !config_path.exists() {
        let config = GateConfig::default();
        let content = format!(
            "# checklist-gate settings\n\
             # vocabulary: checkbox | glyph | extended\n\
             # declined: fail | pass (meaning of [✖])\n\n{}",
            config.to_toml()?
        );
        fs::write(config_path, content)?;
        created.push(CONFIG_FILE);
    }

    if force || !items_path.exists() {
        if let Some(dir) = items_path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(items_path, EXAMPLE_ITEMS)?;
        created.push(DEFAULT_ITEMS_FILE);
    }

    let message = if created.is_empty() {
        format!("Already initialized ({CONFIG_FILE} exists). Use --force to overwrite.")
    } else {
        created.iter().map(|f| format!("Created {f}")).collect::<Vec<_>>().join("\n")
    };

    OperationResult {
        success: true,
        message,
    }
    .render(mode);
    Ok(())
}
