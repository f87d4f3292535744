use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::embed::{iframe_snippet, script_snippet};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Embed {
        base_url,
        iframe,
        script,
    } = cmd
    {
        let base = base_url.as_deref().unwrap_or(&cfg.public_base_url);
        let both = !*iframe && !*script;

        if *iframe || both {
            if both {
                println!("IFrame embed:");
            }
            println!("{}", iframe_snippet(base));
        }
        if *script || both {
            if both {
                println!("\nScript embed:");
            }
            println!("{}", script_snippet(base));
        }
    }

    Ok(())
}
