use anyhow::{Context, Result};

use super::super::{args::RenderCommand, context::CommandContext, exit_status::ExitStatus, report};
use crate::{
    directive::Directive,
    render::{render_single_script, render_switch_script},
};

pub fn render(cmd: RenderCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;

    let directive = Directive::parse(&cmd.expression)
        .with_context(|| format!("Invalid directive expression: {}", cmd.expression))?;
    let window_key = directive.window_key_or(&ctx.config.window_key);

    if ctx.verbose && directive.includes.is_empty() {
        report::note("No resources requested, only JSON translations are rendered");
    }

    let script = match &cmd.locale {
        Some(locale) => {
            let translations = ctx.catalog.get_translations(locale, directive.includes.as_slice())?;
            render_single_script(window_key, &translations)?
        }
        None => {
            let translations = ctx.catalog.all_translations(directive.includes.as_slice())?;
            if ctx.verbose {
                report::note(format!("Rendering {} locale(s)", translations.len()));
            }
            render_switch_script(window_key, &translations, ctx.catalog.fallback_locale())?
        }
    };

    println!("{}", script);
    Ok(ExitStatus::Success)
}
