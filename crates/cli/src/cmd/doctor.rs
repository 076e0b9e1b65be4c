//! Doctor command: validate configuration and print resolved settings.

use std::path::Path;

use notemark_core::config::loader::{ConfigLoader, default_config_path};

pub fn run(config: Option<&Path>) {
    match ConfigLoader::load(config) {
        Ok(rc) => {
            println!("OK   nmk doctor");
            println!("core: v{}", notemark_core::version());
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );

            let mut missing = false;
            for root in &rc.roots {
                let status = if root.is_dir() {
                    "ok"
                } else {
                    missing = true;
                    "MISSING"
                };
                println!("root: {} [{}]", root.display(), status);
            }

            println!("save.update_front_matter: {}", rc.save.update_front_matter);
            println!("save.rename_file: {}", rc.save.rename_file);
            println!("save.deny_list: {}", rc.save.deny_list.join(", "));

            if missing {
                std::process::exit(1);
            }
        }
        Err(e) => {
            println!("FAIL nmk doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
