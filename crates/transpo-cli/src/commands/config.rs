use crate::app::AppContext;
use crate::cli::ConfigInitArgs;
use crate::config::{write_config, TranspoConfig};
use crate::ui::{kv, success_message, UiContext};

pub fn handle_config_init(ctx: &AppContext, args: &ConfigInitArgs) -> anyhow::Result<()> {
    let path = ctx.config_path()?;
    if path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            path.display()
        ));
    }

    write_config(&path, &TranspoConfig::default())?;
    tracing::info!(path = %path.display(), "wrote default config");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        println!(
            "{}",
            success_message(&ui_ctx, &format!("Wrote default config to {}", path.display()))
        );
    }
    Ok(())
}

pub fn handle_config_show(ctx: &AppContext) -> anyhow::Result<()> {
    let path = ctx.config_path()?;
    let config = ctx.config()?;
    let ui_ctx: UiContext = ctx.ui_context(false, None);

    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };

    println!("{}", kv(&ui_ctx, "Config", &source));
    println!("{}", kv(&ui_ctx, "Bind", &config.server.bind));
    println!("{}", kv(&ui_ctx, "Port", &config.server.port.to_string()));
    println!("{}", kv(&ui_ctx, "Log level", &config.logging.level));
    Ok(())
}
